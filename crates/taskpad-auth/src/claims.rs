use serde::{Deserialize, Serialize};

/// The authenticated facts a token asserts: who, and for how long.
///
/// Timestamps are Unix seconds. A claim is immutable once issued and is never
/// stored server-side; the signed token is the only copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id: the owning user's database id. Always positive; ids are
    /// assigned from 1, so no sentinel value exists inside the id space.
    pub sub: i64,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expires-at, Unix seconds. The instant itself is still valid; the
    /// token is rejected only strictly after it.
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_shape() {
        let claims = Claims {
            sub: 42,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };

        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["sub"], 42);
        assert_eq!(json["iat"], 1_700_000_000i64);
        assert_eq!(json["exp"], 1_700_003_600i64);
    }

    #[test]
    fn test_claims_reject_non_numeric_subject() {
        let result: Result<Claims, _> =
            serde_json::from_str(r#"{"sub":"42","iat":1,"exp":2}"#);

        assert!(result.is_err());
    }
}
