//! Authentication and authorization extractors.
//!
//! - [`session::SessionUser`] -- The user named by a valid session cookie, if any.
//! - [`rbac::RequireUser`] -- Requires a signed-in user (403 otherwise).
//! - [`rbac::RequireAdmin`] -- Requires an admin (403 otherwise).
//! - [`rbac::AdminPage`] -- Requires an admin, redirecting page visits to `/signin`.

pub mod rbac;
pub mod session;
