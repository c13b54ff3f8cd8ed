//! # Taskpad Auth
//!
//! Credential hashing and signed-token utilities for the Taskpad API.
//!
//! This crate provides:
//!
//! - [`password`]: bcrypt credential hashing and verification
//! - [`claims`]: the identity claim a token carries
//! - [`codec`]: token issuance and verification via [`TokenCodec`]
//! - [`error`]: typed failure taxonomy for both concerns
//!
//! Nothing in this crate talks HTTP or logs on its own; every operation
//! returns a typed outcome and leaves the boundary decisions to the caller.
//! There is no shared mutable state: a [`TokenCodec`] is built once from the
//! process configuration and is safe to use concurrently from every request.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, Utc};
//! use taskpad_auth::{hash_password, verify_password, TokenCodec};
//!
//! let hash = hash_password("hunter2!").unwrap();
//! assert!(verify_password(&hash, "hunter2!").is_ok());
//!
//! let codec = TokenCodec::new(b"secret-key-at-least-32-bytes-long!!", Duration::hours(24));
//! let token = codec.issue(42, Utc::now()).unwrap();
//! let claims = codec.parse(&token, Utc::now()).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```

pub mod claims;
pub mod codec;
pub mod error;
pub mod password;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use codec::TokenCodec;
pub use error::{AuthError, PasswordError};
pub use password::{hash_password, verify_password};
