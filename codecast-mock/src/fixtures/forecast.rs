use serde_json::{Value, json};

pub fn by_profile(profile: &str) -> Option<Value> {
    match profile {
        "demo" => Some(json!({
            "forecast": [
                {"date": "2024-03-18", "hours": 2.9, "range": {"min": 1.9, "max": 3.9}},
                {"date": "2024-03-16", "hours": 2.5, "range": {"min": 1.5, "max": 3.5}},
                {"date": "2024-03-17", "hours": 2.7, "range": {"min": 1.6, "max": 3.8}},
            ],
            "confidence": 0.72,
        })),
        "sparse" => Some(json!({
            "forecast": [{"date": "2024-03-03", "hours": "2"}],
        })),
        "garbled" => Some(json!({
            "forecast": [
                {"date": "2024-03-04", "hours": "n/a", "range": {"min": 5, "max": 1}},
                {"date": "2024-03-05", "hours": 2, "range": {"max": 3}},
            ],
            "confidence": "high",
        })),
        "empty" => Some(json!({"forecast": []})),
        "wrong-shape" => Some(json!("forecast unavailable")),
        _ => None,
    }
}
