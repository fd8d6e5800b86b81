use serde_json::{Value, json};

pub fn by_profile(profile: &str) -> Option<Value> {
    match profile {
        "demo" => Some(json!({"totalHours": 40.5, "avgPerDay": 2.7, "entries": 15})),
        "sparse" => Some(json!({"totalHours": 3.5, "avgPerDay": 1.75, "entries": 2})),
        "garbled" => Some(json!({"totalHours": 1.0, "avgPerDay": 0.25, "entries": 4})),
        "empty" => Some(json!({"totalHours": 0, "avgPerDay": 0, "entries": 0})),
        "wrong-shape" => Some(json!(["not", "an", "object"])),
        _ => None,
    }
}
