//! Server application core modules.
//!
//! This module contains all server-side functionality for the recipebox application,
//! including HTTP routing, database access, configuration and the services behind
//! shopping list aggregation and recipe short links.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
