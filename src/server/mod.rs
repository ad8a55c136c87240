//! Server application core modules.
//!
//! This module contains all server-side functionality for Roster, including HTTP routing,
//! session handling, database access, the group/role type registry, async download delivery
//! and bulk role management.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
