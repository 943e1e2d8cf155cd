//! Request-processing middleware.
//!
//! # Authentication flow
//!
//! 1. Client sends a request with an `Authorization: Basic <credentials>`
//!    header.
//! 2. The [`auth::AuthUser`] extractor decodes the credential pair, resolves
//!    the user by email address, and verifies the password hash.
//! 3. On success the user record is bound to the request and the handler
//!    runs; on any failure the request terminates with 401 before the
//!    handler executes.

pub mod auth;
