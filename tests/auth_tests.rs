use alfahub::core::auth::{
    AuthGate, IdentityProvider, LANDING_ROUTE, ProviderError, Session, SignInFailure,
};

struct FakeProvider(Result<Session, ProviderError>);

impl IdentityProvider for FakeProvider {
    fn sign_in_with_popup(&self) -> Result<Session, ProviderError> {
        self.0.clone()
    }
}

fn failing(code: &str, message: &str) -> AuthGate<FakeProvider> {
    AuthGate::new(
        FakeProvider(Err(ProviderError {
            code: code.into(),
            message: message.into(),
        })),
        "hub.example.org",
    )
}

#[test]
fn successful_sign_in_lands_on_home() {
    let session = Session {
        uid: "u-1".into(),
        display_name: Some("Student".into()),
        email: None,
    };
    let gate = AuthGate::new(FakeProvider(Ok(session.clone())), "localhost");

    let signed_in = gate.sign_in().unwrap();
    assert_eq!(signed_in.route, LANDING_ROUTE);
    assert_eq!(signed_in.session, session);
}

#[test]
fn closed_popup_is_a_cancellation() {
    let err = failing("auth/popup-closed-by-user", "closed").sign_in().unwrap_err();
    assert_eq!(err, SignInFailure::PopupClosed);
    assert_eq!(err.user_message(), "Login was cancelled. Please try again.");
}

#[test]
fn unauthorized_domain_names_the_origin() {
    let err = failing("auth/unauthorized-domain", "nope").sign_in().unwrap_err();
    assert_eq!(
        err,
        SignInFailure::UnauthorizedDomain {
            origin: "hub.example.org".into()
        }
    );
    assert!(err.to_string().contains("hub.example.org"));
}

#[test]
fn rejected_api_key_is_a_configuration_error() {
    for code in ["auth/api-key-not-valid", "auth/invalid-api-key"] {
        let err = failing(code, "bad key").sign_in().unwrap_err();
        assert_eq!(err, SignInFailure::Misconfigured);
        assert!(err.user_message().contains("configuration"));
    }
}

#[test]
fn other_errors_carry_the_provider_message() {
    let err = failing("auth/network-request-failed", "offline").sign_in().unwrap_err();
    assert_eq!(err.user_message(), "Failed to sign in: offline");

    let err = failing("auth/internal-error", "  ").sign_in().unwrap_err();
    assert_eq!(err.user_message(), "Failed to sign in: Unknown error");
}
