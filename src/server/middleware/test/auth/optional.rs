use super::*;

/// Tests a valid token yields claims for ownership attachment.
///
/// Expected: Some(Claims)
#[test]
fn returns_claims_for_valid_token() {
    let jwt = jwt();
    let token = jwt.issue(&usuario(3, Rol::User)).unwrap();
    let headers = bearer(&token);

    let guard = AuthGuard::new(&jwt, &headers);
    let claims = guard.optional();

    assert_eq!(claims.unwrap().usuario_id().unwrap(), 3);
}

/// Tests an anonymous request yields no claims instead of an error.
///
/// Expected: None
#[test]
fn returns_none_without_header() {
    let jwt = jwt();
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&jwt, &headers);

    assert!(guard.optional().is_none());
}

/// Tests an invalid token degrades to anonymous instead of failing.
///
/// Expected: None
#[test]
fn returns_none_for_invalid_token() {
    let jwt = jwt();
    let headers = bearer("garbage.token.here");

    let guard = AuthGuard::new(&jwt, &headers);

    assert!(guard.optional().is_none());
}
