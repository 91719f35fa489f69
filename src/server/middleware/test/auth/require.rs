use super::*;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::Permission,
};

/// Tests an admin token passes the admin permission check.
///
/// Expected: Ok(Claims) with the admin role
#[test]
fn grants_access_to_admin_token() {
    let jwt = jwt();
    let token = jwt.issue(&usuario(7, Rol::Admin)).unwrap();
    let headers = bearer(&token);

    let guard = AuthGuard::new(&jwt, &headers);
    let claims = guard.require(&[Permission::Admin]).unwrap();

    assert_eq!(claims.sub, "7");
    assert!(claims.is_admin());
}

/// Tests a user-role token is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn denies_admin_permission_to_user_token() {
    let jwt = jwt();
    let token = jwt.issue(&usuario(8, Rol::User)).unwrap();
    let headers = bearer(&token);

    let guard = AuthGuard::new(&jwt, &headers);
    let error = guard.require(&[Permission::Admin]).unwrap_err();

    match error {
        AppError::AuthErr(AuthError::AccessDenied(detail)) => {
            assert!(detail.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }
}

/// Tests a user-role token passes when no permission is required.
///
/// Expected: Ok(Claims)
#[test]
fn grants_access_without_permissions() {
    let jwt = jwt();
    let token = jwt.issue(&usuario(9, Rol::User)).unwrap();
    let headers = bearer(&token);

    let guard = AuthGuard::new(&jwt, &headers);
    let claims = guard.require(&[]).unwrap();

    assert_eq!(claims.usuario_id().unwrap(), 9);
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_access_without_header() {
    let jwt = jwt();
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&jwt, &headers);
    let error = guard.require(&[]).unwrap_err();

    assert!(matches!(
        error,
        AppError::AuthErr(AuthError::MissingToken)
    ));
}

/// Tests a non-Bearer Authorization scheme is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_access_with_non_bearer_scheme() {
    let jwt = jwt();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    let guard = AuthGuard::new(&jwt, &headers);
    let error = guard.require(&[]).unwrap_err();

    assert!(matches!(
        error,
        AppError::AuthErr(AuthError::MissingToken)
    ));
}

/// Tests a tampered token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn denies_access_with_tampered_token() {
    let jwt = jwt();
    let token = jwt.issue(&usuario(10, Rol::Admin)).unwrap();
    let headers = bearer(&format!("{}x", token));

    let guard = AuthGuard::new(&jwt, &headers);
    let error = guard.require(&[Permission::Admin]).unwrap_err();

    assert!(matches!(
        error,
        AppError::AuthErr(AuthError::InvalidToken)
    ));
}
