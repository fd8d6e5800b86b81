use serde_json::{Value, json};

pub fn by_profile(profile: &str) -> Option<Value> {
    match profile {
        "demo" => Some(Value::Array(
            (1..=15u8)
                .rev()
                .map(|day| {
                    // alternate numbers and numeric strings like the live API does
                    let hours = 1.5 + f64::from(day % 4) * 0.75;
                    let duration = if day % 2 == 0 {
                        json!(hours)
                    } else {
                        json!(hours.to_string())
                    };
                    json!({"date": format!("2024-03-{day:02}"), "duration": duration})
                })
                .collect(),
        )),
        "sparse" => Some(json!([
            {"date": "2024-03-02", "duration": 2},
            {"date": "2024-03-01", "duration": "1.5"},
        ])),
        "garbled" => Some(json!([
            {"date": "2024-03-01", "duration": "abc"},
            {"date": "2024-03-02"},
            {"date": "sometime", "duration": 1},
            {"date": "2024-03-03", "duration": null},
        ])),
        "empty" => Some(json!([])),
        "wrong-shape" => Some(json!({"logs": []})),
        _ => None,
    }
}
