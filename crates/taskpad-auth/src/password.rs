use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

use crate::error::PasswordError;

/// Hashes a plaintext password with bcrypt at the default cost.
///
/// The returned string embeds the salt and cost parameters, so verification
/// needs no side data. Any plaintext is accepted, including the empty string.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash(password, DEFAULT_COST).map_err(|e| PasswordError::Hashing(e.to_string()))
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// A wrong password is [`PasswordError::Mismatch`]. A stored string bcrypt
/// cannot parse is [`PasswordError::MalformedHash`], which callers should
/// surface as a data-integrity problem rather than a failed login.
pub fn verify_password(hash: &str, password: &str) -> Result<(), PasswordError> {
    match verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(PasswordError::Mismatch),
        Err(BcryptError::Io(e)) => Err(PasswordError::Hashing(e.to_string())),
        Err(_) => Err(PasswordError::MalformedHash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(verify_password(&hash, "correct horse battery staple").is_ok());
    }

    #[test]
    fn test_verify_wrong_password_is_mismatch() {
        let hash = hash_password("right-password").unwrap();

        let result = verify_password(&hash, "wrong-password");

        assert_eq!(result, Err(PasswordError::Mismatch));
    }

    #[test]
    fn test_hash_accepts_empty_password() {
        let hash = hash_password("").unwrap();

        assert!(verify_password(&hash, "").is_ok());
        assert_eq!(
            verify_password(&hash, "not empty"),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_verify_malformed_hash() {
        let result = verify_password("not_a_valid_bcrypt_hash", "whatever");

        assert_eq!(result, Err(PasswordError::MalformedHash));
    }

    #[test]
    fn test_hash_generates_unique_salts() {
        let hash1 = hash_password("samepassword").unwrap();
        let hash2 = hash_password("samepassword").unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password(&hash1, "samepassword").is_ok());
        assert!(verify_password(&hash2, "samepassword").is_ok());
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let hash = hash_password("Password123").unwrap();

        assert_eq!(
            verify_password(&hash, "password123"),
            Err(PasswordError::Mismatch)
        );
        assert_eq!(
            verify_password(&hash, "PASSWORD123"),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_hash_unicode_password() {
        let hash = hash_password("пароль密码🔒").unwrap();

        assert!(verify_password(&hash, "пароль密码🔒").is_ok());
    }
}
