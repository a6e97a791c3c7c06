//! Unit tests for token claims

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::token::{Claims, CLAIMS_VERSION};

#[test]
fn test_claims_new() {
    let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let claims = Claims::new("alice", issued_at, Duration::hours(24));

    assert_eq!(claims.identity(), "alice");
    assert_eq!(claims.iat, issued_at.timestamp());
    assert_eq!(claims.exp, issued_at.timestamp() + 86_400);
    assert_eq!(claims.ver, CLAIMS_VERSION);
}

#[test]
fn test_expiry_boundary_is_strict() {
    let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let claims = Claims::new("alice", issued_at, Duration::seconds(60));

    assert!(!claims.is_expired_at(claims.exp - 1));
    assert!(claims.is_expired_at(claims.exp));
    assert!(claims.is_expired_at(claims.exp + 1));
}

#[test]
fn test_unknown_claims_are_rejected() {
    let json = r#"{"sub":"alice","iat":1,"exp":2,"ver":1,"admin":true}"#;
    assert!(serde_json::from_str::<Claims>(json).is_err());
}
