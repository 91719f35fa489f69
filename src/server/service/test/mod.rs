use crate::server::service::auth::{password::PasswordHasher, token::JwtService};


fn jwt() -> JwtService {
    JwtService::new(
        "service-test-secret".to_string(),
        "CiberZone".to_string(),
        "CiberZoneApp".to_string(),
    )
}

/// Minimal-cost hasher so the suite stays fast.
fn hasher() -> PasswordHasher {
    PasswordHasher::with_params(8, 1, 1).unwrap()
}
