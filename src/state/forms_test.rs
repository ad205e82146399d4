use super::*;

fn keys(value: &serde_json::Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("payload is an object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

// =============================================================
// Payload schema
// =============================================================

#[test]
fn login_payload_has_exactly_email_and_password() {
    let mut form = LoginForm::default();
    form.email = "a@b.c".to_owned();
    form.password = "hunter2".to_owned();
    form.email = "d@e.f".to_owned();

    let payload = serde_json::to_value(&form).expect("serializes");
    assert_eq!(keys(&payload), vec!["email", "password"]);
}

#[test]
fn register_payload_has_exactly_username_email_and_password() {
    let payload = serde_json::to_value(RegisterForm::default()).expect("serializes");
    assert_eq!(keys(&payload), vec!["email", "password", "username"]);
}

// =============================================================
// Controlled edits
// =============================================================

#[test]
fn editing_one_field_preserves_the_others() {
    let mut form = RegisterForm::default();
    form.username = "sam".to_owned();
    form.password = "hunter2".to_owned();
    form.email = "sam@example.com".to_owned();

    assert_eq!(form.username, "sam");
    assert_eq!(form.password, "hunter2");
    assert_eq!(form.email, "sam@example.com");
}

#[test]
fn forms_start_with_empty_fields() {
    assert_eq!(LoginForm::default(), LoginForm {
        email: String::new(),
        password: String::new(),
    });
}
