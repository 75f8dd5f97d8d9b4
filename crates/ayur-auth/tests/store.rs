use ayur_auth::error::AuthError;
use ayur_auth::store::CredentialStore;
use ayur_core::models::user::{Registration, Role, RoleProfile};

fn registration(email: &str) -> Registration {
    Registration {
        role: Role::Patient,
        name: "Kiran Mehta".to_string(),
        mobile: "+91-9000000001".to_string(),
        email: email.to_string(),
        secret: "secret1".to_string(),
    }
}

#[test]
fn seeded_doctor_can_log_in() {
    let store = CredentialStore::seeded();
    let user = store
        .authenticate("dr.rajesh@hospital.com", "doctor123", Role::Doctor)
        .unwrap();
    assert_eq!(user.name, "Dr. Rajesh Kumar");
    assert!(matches!(user.profile, RoleProfile::Doctor { .. }));
}

#[test]
fn email_matches_case_insensitively_and_trimmed() {
    let store = CredentialStore::seeded();
    let user = store
        .authenticate("  PRIYA@Email.com ", "patient123", Role::Patient)
        .unwrap();
    assert_eq!(user.id, 3);
}

#[test]
fn wrong_role_or_secret_is_rejected() {
    let store = CredentialStore::seeded();
    assert_eq!(
        store
            .authenticate("priya@email.com", "patient123", Role::Doctor)
            .unwrap_err(),
        AuthError::InvalidCredentials
    );
    assert_eq!(
        store
            .authenticate("priya@email.com", "PATIENT123", Role::Patient)
            .unwrap_err(),
        AuthError::InvalidCredentials
    );
}

#[test]
fn empty_login_fields_are_reported() {
    let store = CredentialStore::seeded();
    assert_eq!(
        store.authenticate("", "x", Role::Admin).unwrap_err(),
        AuthError::MissingField("email")
    );
    assert_eq!(
        store.authenticate("a@b.c", "  ", Role::Admin).unwrap_err(),
        AuthError::MissingField("password")
    );
}

#[test]
fn registered_user_can_log_in() {
    let mut store = CredentialStore::seeded();
    let user = store.register(registration("kiran@example.com")).unwrap();
    assert_eq!(user.id, 4);
    assert_eq!(
        user.profile,
        RoleProfile::Patient {
            age: None,
            constitution: None
        }
    );

    let logged_in = store
        .authenticate("kiran@example.com", "secret1", Role::Patient)
        .unwrap();
    assert_eq!(logged_in.name, "Kiran Mehta");
}

#[test]
fn duplicate_email_is_rejected_without_mutation() {
    let mut store = CredentialStore::seeded();
    let before = store.users().to_vec();

    let err = store.register(registration("Admin@Ayurveda.com")).unwrap_err();
    assert_eq!(err, AuthError::DuplicateIdentity("Admin@Ayurveda.com".to_string()));
    assert_eq!(err.to_string(), "User with this email already exists");
    assert_eq!(store.users(), before.as_slice());
}

#[test]
fn registration_requires_every_field() {
    let mut store = CredentialStore::seeded();
    let mut incomplete = registration("new@example.com");
    incomplete.mobile = " ".to_string();

    assert_eq!(
        store.register(incomplete).unwrap_err(),
        AuthError::MissingField("mobile")
    );
    assert_eq!(store.len(), 3);
}
