use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use crate::claims::Claims;
use crate::error::AuthError;

/// Signs and verifies identity tokens.
///
/// A codec is built once at startup from the process configuration (secret
/// key bytes plus a fixed time-to-live) and shared read-only across requests.
/// Both operations are pure over their inputs and the captured key material,
/// so concurrent use needs no locking.
///
/// Tokens are HS256 JWTs. Encoding is deterministic: identical claim fields
/// and key produce the same token bytes.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Creates a codec from raw secret bytes and a token time-to-live.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// The configured time-to-live for issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a signed token for `subject_id`, valid from `now` for the
    /// configured TTL.
    pub fn issue(&self, subject_id: i64, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: subject_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Verifies `token` against the configured key and returns its claims.
    ///
    /// Surrounding whitespace is trimmed first. The JWT layer checks the
    /// signature and structure; expiry is checked here against the caller's
    /// `now` with zero leeway, so the boundary is exact: a token is rejected
    /// only once `now` is strictly past `exp`.
    pub fn parse(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the injected clock below, not the
        // system clock inside the JWT library.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                    _ => AuthError::MalformedToken,
                }
            })?;

        let claims = data.claims;
        if claims.sub < 1 {
            return Err(AuthError::MalformedToken);
        }
        if now.timestamp() > claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-at-least-32-characters-long";

    fn test_codec() -> TokenCodec {
        TokenCodec::new(SECRET, Duration::hours(1))
    }

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    /// Flips one character of the token at `idx`, keeping it valid base64url.
    fn tamper(token: &str, idx: usize) -> String {
        let mut bytes = token.as_bytes().to_vec();
        bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_issue_and_parse_roundtrip() {
        let codec = test_codec();

        let token = codec.issue(42, t0()).unwrap();
        let claims = codec.parse(&token, t0()).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, (t0() + Duration::hours(1)).timestamp());
    }

    #[test]
    fn test_issue_is_deterministic() {
        let codec = test_codec();

        let token1 = codec.issue(7, t0()).unwrap();
        let token2 = codec.issue(7, t0()).unwrap();

        assert_eq!(token1, token2);
    }

    #[test]
    fn test_parse_within_validity_window() {
        let codec = test_codec();
        let token = codec.issue(42, t0()).unwrap();

        assert!(codec.parse(&token, t0()).is_ok());
        assert!(codec.parse(&token, t0() + Duration::minutes(30)).is_ok());
        assert!(
            codec
                .parse(&token, t0() + Duration::hours(1) - Duration::seconds(1))
                .is_ok()
        );
    }

    #[test]
    fn test_parse_expiry_boundary() {
        let codec = test_codec();
        let token = codec.issue(42, t0()).unwrap();
        let exp = t0() + Duration::hours(1);

        // The expires-at instant itself is still valid; one second past is not.
        assert!(codec.parse(&token, exp).is_ok());
        assert_eq!(
            codec.parse(&token, exp + Duration::seconds(1)),
            Err(AuthError::TokenExpired)
        );
    }

    #[test]
    fn test_parse_expired_well_past_ttl() {
        let codec = test_codec();
        let token = codec.issue(42, t0()).unwrap();

        let result = codec.parse(&token, t0() + Duration::minutes(61));

        assert_eq!(result, Err(AuthError::TokenExpired));
    }

    #[test]
    fn test_parse_empty_token() {
        let codec = test_codec();

        assert_eq!(codec.parse("", t0()), Err(AuthError::EmptyToken));
        assert_eq!(codec.parse("   ", t0()), Err(AuthError::EmptyToken));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let codec = test_codec();
        let token = codec.issue(42, t0()).unwrap();

        let claims = codec.parse(&format!("  {token}\n"), t0()).unwrap();

        assert_eq!(claims.sub, 42);
    }

    #[test]
    fn test_parse_wrong_key() {
        let codec = test_codec();
        let other = TokenCodec::new(b"a-completely-different-32-byte-key!!", Duration::hours(1));

        let token = codec.issue(42, t0()).unwrap();

        assert_eq!(other.parse(&token, t0()), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_parse_tampered_token_never_succeeds() {
        let codec = test_codec();
        let token = codec.issue(42, t0()).unwrap();

        let payload_start = token.find('.').unwrap() + 1;
        let indices = [1, payload_start + 2, token.len() - 1];

        for idx in indices {
            let result = codec.parse(&tamper(&token, idx), t0());
            assert!(
                matches!(
                    result,
                    Err(AuthError::InvalidSignature) | Err(AuthError::MalformedToken)
                ),
                "tampering at index {idx} produced {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_unsigned_payload() {
        let codec = test_codec();
        let token = codec.issue(42, t0()).unwrap();

        // Valid-looking header and payload, signature stripped.
        let (head, _sig) = token.rsplit_once('.').unwrap();
        let unsigned = format!("{head}.");

        assert_eq!(
            codec.parse(&unsigned, t0()),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let codec = test_codec();

        assert_eq!(
            codec.parse("not.a.jwt", t0()),
            Err(AuthError::MalformedToken)
        );
        assert_eq!(
            codec.parse("no-dots-at-all", t0()),
            Err(AuthError::MalformedToken)
        );
    }

    #[test]
    fn test_parse_non_numeric_subject_is_malformed() {
        let codec = test_codec();

        // Signed with the right key, but the subject claim is a string.
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "42", "iat": t0().timestamp(), "exp": (t0() + Duration::hours(1)).timestamp() }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(codec.parse(&token, t0()), Err(AuthError::MalformedToken));
    }

    #[test]
    fn test_parse_non_positive_subject_is_malformed() {
        let codec = test_codec();

        let token = codec.issue(0, t0()).unwrap();

        assert_eq!(codec.parse(&token, t0()), Err(AuthError::MalformedToken));
    }
}
