//! Session data models.
//!
//! Type-safe wrappers for the session values this service reads. The session store is shared
//! with the authentication service, which writes the user ID on login.

pub mod user;
