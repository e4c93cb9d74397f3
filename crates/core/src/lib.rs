//! Domain logic for the awe blog server.
//!
//! Zero I/O: everything here is pure and usable from the repository layer,
//! the HTTP layer and tests alike.

pub mod error;
pub mod paging;
pub mod session;
pub mod text;
pub mod types;
pub mod validation;
