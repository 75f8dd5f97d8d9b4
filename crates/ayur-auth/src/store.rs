use tracing::{info, warn};

use ayur_core::models::user::{Registration, Role, RoleProfile, UserRecord};

use crate::error::AuthError;

/// The user list. Identities (emails) match case-insensitively; secrets and
/// roles match exactly.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: Vec<UserRecord>,
}

fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthError::MissingField(name));
    }
    Ok(trimmed)
}

impl CredentialStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// A store holding the built-in admin, doctor and patient accounts.
    pub fn seeded() -> Self {
        Self::new(vec![
            UserRecord {
                id: 1,
                email: "admin@ayurveda.com".to_string(),
                secret: "admin123".to_string(),
                role: Role::Admin,
                name: "System Administrator".to_string(),
                mobile: "+91-9876543210".to_string(),
                profile: RoleProfile::Admin,
            },
            UserRecord {
                id: 2,
                email: "dr.rajesh@hospital.com".to_string(),
                secret: "doctor123".to_string(),
                role: Role::Doctor,
                name: "Dr. Rajesh Kumar".to_string(),
                mobile: "+91-9876543211".to_string(),
                profile: RoleProfile::Doctor {
                    license: Some("AY12345".to_string()),
                    specialization: Some("General Ayurveda".to_string()),
                    hospital: Some("City Ayurvedic Center".to_string()),
                },
            },
            UserRecord {
                id: 3,
                email: "priya@email.com".to_string(),
                secret: "patient123".to_string(),
                role: Role::Patient,
                name: "Mrs. Priya Sharma".to_string(),
                mobile: "+91-9876543212".to_string(),
                profile: RoleProfile::Patient {
                    age: Some(32),
                    constitution: Some("Vata-Pitta".to_string()),
                },
            },
        ])
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        let email = email.trim();
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }

    /// Find the user matching all three inputs.
    pub fn authenticate(&self, email: &str, secret: &str, role: Role) -> Result<&UserRecord, AuthError> {
        let email = require(email, "email")?;
        let secret = require(secret, "password")?;

        let user = self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.secret == secret && u.role == role);

        match user {
            Some(user) => {
                info!(user_id = user.id, role = %user.role, "login succeeded");
                Ok(user)
            }
            None => {
                warn!(email, role = %role, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Add a new user. The store is left untouched on any error.
    pub fn register(&mut self, registration: Registration) -> Result<&UserRecord, AuthError> {
        let name = require(&registration.name, "name")?;
        let mobile = require(&registration.mobile, "mobile")?;
        let email = require(&registration.email, "email")?;
        let secret = require(&registration.secret, "password")?;

        if self.find_by_email(email).is_some() {
            warn!(email, "registration rejected: duplicate email");
            return Err(AuthError::DuplicateIdentity(email.to_string()));
        }

        let user = UserRecord {
            id: self.users.len() as u32 + 1,
            email: email.to_string(),
            secret: secret.to_string(),
            role: registration.role,
            name: name.to_string(),
            mobile: mobile.to_string(),
            profile: RoleProfile::empty(registration.role),
        };
        info!(user_id = user.id, role = %user.role, "user registered");
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }
}
