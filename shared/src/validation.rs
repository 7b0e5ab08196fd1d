//! Advisory client-side checks for the auth forms. The server remains the
//! authority; these exist to avoid obviously-wasted round trips.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthValidationError {
    #[error("Name must be at least 3 characters")]
    NameTooShort,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

pub fn validate_sign_up(name: &str, email: &str, password: &str) -> Vec<AuthValidationError> {
    let mut errors = Vec::new();
    if name.trim().chars().count() < 3 {
        errors.push(AuthValidationError::NameTooShort);
    }
    if !is_valid_email(email) {
        errors.push(AuthValidationError::InvalidEmail);
    }
    if password.chars().count() < 6 {
        errors.push(AuthValidationError::PasswordTooShort);
    }
    errors
}

pub fn validate_sign_in(email: &str, password: &str) -> Vec<AuthValidationError> {
    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push(AuthValidationError::InvalidEmail);
    }
    if password.chars().count() < 6 {
        errors.push(AuthValidationError::PasswordTooShort);
    }
    errors
}

/// Shape check only: one `@`, a non-empty local part, and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_sign_up() {
        assert!(validate_sign_up("Asha", "asha@example.com", "secret1").is_empty());
    }

    #[test]
    fn rejects_short_name() {
        let errors = validate_sign_up("Al", "al@example.com", "secret1");
        assert_eq!(errors, vec![AuthValidationError::NameTooShort]);
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in [
            "",
            "no-at-sign",
            "@example.com",
            "user@nodot",
            "user@.com",
            "user@example.com.",
            "user name@example.com",
        ] {
            assert!(
                validate_sign_in(email, "secret1").contains(&AuthValidationError::InvalidEmail),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn rejects_short_password() {
        let errors = validate_sign_in("asha@example.com", "12345");
        assert_eq!(errors, vec![AuthValidationError::PasswordTooShort]);
    }

    #[test]
    fn collects_every_failure() {
        let errors = validate_sign_up("", "bad", "123");
        assert_eq!(errors.len(), 3);
    }
}
