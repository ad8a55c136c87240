//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, session data structures, the group/role type registry and the
//! async download file & cookie types.

pub mod app;
pub mod db;
pub mod download;
pub mod group_type;
pub mod session;
