//! Utility functions for controller request handling.
//!
//! Session user resolution for protected and public endpoints, and absolute URL building
//! for short links.

pub mod get_user;
pub mod public_url;
