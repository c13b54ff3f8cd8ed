//! Configuration for the Taskpad API.
//!
//! Every submodule loads its settings from environment variables once at
//! startup; nothing here is re-read or mutated while the server runs.
//!
//! - [`auth`]: token signing secret and time-to-live
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization

pub mod auth;
pub mod cors;
pub mod database;
