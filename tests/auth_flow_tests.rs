mod common;

use std::sync::Arc;

use common::test_settings;
use common::InMemoryIdentityRepository;
use dicom_auth::service::MSG_DUPLICATE_ACCOUNT;
use dicom_auth::service::MSG_INVALID_CREDENTIALS;
use dicom_auth::AuthService;
use dicom_auth::Credentials;

fn auth_service() -> AuthService<InMemoryIdentityRepository> {
    AuthService::new(Arc::new(InMemoryIdentityRepository::new()), &test_settings())
        .expect("Failed to build auth service")
}

#[tokio::test]
async fn test_register_then_login() {
    let service = auth_service();

    let registered = service
        .register("tech@clinic.example".to_string(), "pass_word!".to_string())
        .await
        .expect("Registration failed");
    assert!(registered.success);

    let registered_claims = service
        .token_issuer()
        .decode(&registered.token.expect("Missing registration token"))
        .expect("Failed to decode registration token");

    let logged_in = service
        .login(Credentials {
            email: "tech@clinic.example".to_string(),
            password: "pass_word!".to_string(),
        })
        .await
        .expect("Login failed");
    assert!(logged_in.success);

    let login_claims = service
        .token_issuer()
        .decode(&logged_in.token.expect("Missing login token"))
        .expect("Failed to decode login token");

    // Same subject across registration and login, fresh token id
    assert_eq!(login_claims.sub, registered_claims.sub);
    assert_eq!(login_claims.email, "tech@clinic.example");
    assert_ne!(login_claims.jti, registered_claims.jti);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let service = auth_service();

    let first = service
        .register("tech@clinic.example".to_string(), "pass_word!".to_string())
        .await
        .expect("Registration failed");
    assert!(first.success);

    let second = service
        .register("tech@clinic.example".to_string(), "other_password".to_string())
        .await
        .expect("Registration failed");

    assert!(!second.success);
    assert!(second.token.is_none());
    assert_eq!(second.errors, vec![MSG_DUPLICATE_ACCOUNT.to_string()]);
}

#[tokio::test]
async fn test_login_rejections_are_indistinguishable() {
    let service = auth_service();

    service
        .register("tech@clinic.example".to_string(), "pass_word!".to_string())
        .await
        .expect("Registration failed");

    let wrong_password = service
        .login(Credentials {
            email: "tech@clinic.example".to_string(),
            password: "not_the_password".to_string(),
        })
        .await
        .expect("Login failed");

    let unknown_email = service
        .login(Credentials {
            email: "stranger@clinic.example".to_string(),
            password: "pass_word!".to_string(),
        })
        .await
        .expect("Login failed");

    assert!(!wrong_password.success);
    assert!(!unknown_email.success);
    assert_eq!(wrong_password.errors, unknown_email.errors);
    assert_eq!(
        wrong_password.errors,
        vec![MSG_INVALID_CREDENTIALS.to_string()]
    );
}

#[tokio::test]
async fn test_token_expiry_matches_configured_lifetime() {
    let service = auth_service();

    let response = service
        .register("tech@clinic.example".to_string(), "pass_word!".to_string())
        .await
        .expect("Registration failed");

    let claims = service
        .token_issuer()
        .decode(&response.token.expect("Missing token"))
        .expect("Failed to decode token");

    assert_eq!(claims.exp - claims.iat, 45 * 60);
    assert!(claims.is_expired(claims.exp + 1));
    assert!(!claims.is_expired(claims.exp));
}
