use super::*;

#[test]
fn server_rejected_uses_detail_verbatim() {
    let err = RegistrationError::ServerRejected { status: 400, detail: Some("Email already used".to_owned()) };
    assert_eq!(err.user_message(), "Email already used");
}

#[test]
fn server_rejected_without_detail_uses_fallback() {
    let err = RegistrationError::ServerRejected { status: 500, detail: None };
    assert_eq!(err.user_message(), REGISTRATION_FALLBACK_MESSAGE);
}

#[test]
fn server_rejected_with_empty_detail_uses_fallback() {
    let err = RegistrationError::ServerRejected { status: 422, detail: Some(String::new()) };
    assert_eq!(err.user_message(), REGISTRATION_FALLBACK_MESSAGE);
}

#[test]
fn network_fault_and_invalid_body_share_connectivity_message() {
    assert_eq!(RegistrationError::NetworkFault("offline".to_owned()).user_message(), NETWORK_ERROR_MESSAGE);
    assert_eq!(RegistrationError::InvalidBody("eof".to_owned()).user_message(), NETWORK_ERROR_MESSAGE);
}

#[test]
fn transport_error_converts_to_network_fault() {
    let err: RegistrationError = TransportError("refused".to_owned()).into();
    assert_eq!(err, RegistrationError::NetworkFault("refused".to_owned()));

    let err: LoginError = TransportError("refused".to_owned()).into();
    assert_eq!(err, LoginError::NetworkFault("refused".to_owned()));
}

#[test]
fn display_includes_status() {
    let err = RegistrationError::ServerRejected { status: 409, detail: None };
    assert_eq!(err.to_string(), "registration rejected: status 409");
    assert_eq!(LoginError::Rejected { status: 401 }.to_string(), "login rejected: status 401");
}
