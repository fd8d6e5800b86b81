use codecast_core::CodecastConnector;
use std::sync::Arc;

/// Fixture connector selected by `CODECAST_PROFILE` (defaults to `demo`).
#[must_use]
pub fn get_connector() -> Arc<dyn CodecastConnector> {
    let profile: &'static str = match std::env::var("CODECAST_PROFILE").as_deref() {
        Ok("sparse") => "sparse",
        Ok("garbled") => "garbled",
        Ok("empty") => "empty",
        Ok("wrong-shape") => "wrong-shape",
        Ok("fail") => "fail",
        Ok("timeout") => "timeout",
        _ => "demo",
    };
    println!("--- (Using mock connector, profile {profile}) ---");
    Arc::new(codecast_mock::MockConnector::with_profile(profile))
}
