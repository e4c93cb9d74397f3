//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing of client-side password digests.
//! - [`session`] -- session configuration and `Set-Cookie` / `Cookie` header helpers.

pub mod password;
pub mod session;
