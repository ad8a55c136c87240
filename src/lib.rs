//! Roster membership backend.
//!
//! Serves prepared downloads to the people who requested them and lets group managers
//! create, delete and move roles for many people at once.

pub mod model;
pub mod server;
