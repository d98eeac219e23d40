use super::*;

#[test]
fn hidden_banner_has_no_text_and_base_class() {
    let banner = MessageBanner::hidden();
    assert_eq!(banner.kind(), MessageKind::None);
    assert_eq!(banner.text(), "");
    assert_eq!(banner.class_name(), "message");
}

#[test]
fn success_banner_class_name() {
    let banner = MessageBanner::success(SUCCESS_MESSAGE);
    assert_eq!(banner.text(), "Registration successful! Welcome aboard.");
    assert_eq!(banner.class_name(), "message success active");
}

#[test]
fn error_banner_class_name() {
    let banner = MessageBanner::error("Email already used");
    assert_eq!(banner.kind(), MessageKind::Error);
    assert_eq!(banner.class_name(), "message error active");
}
