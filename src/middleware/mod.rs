//! Middleware and extractors for request processing.
//!
//! # Authentication flow
//!
//! 1. Client sends a request with `Authorization: bearer <token>`
//! 2. [`auth::require_auth`] verifies the token and attaches
//!    [`auth::CurrentUser`] to the request
//! 3. Handlers receive the identity through the [`auth::CurrentUser`]
//!    extractor (or [`auth::MaybeCurrentUser`] when authentication is
//!    optional)
//!
//! Rejections short-circuit before the handler runs and always produce a
//! 401 response.

pub mod auth;
