//! Test fixture modules for database records and download files.
//!
//! - `group` - The standard group hierarchy and single groups
//! - `person` - People, optionally with a role
//! - `role` - Roles and role assertions
//! - `download` - Async download files and the `async_downloads` cookie header

pub mod download;
pub mod group;
pub mod person;
pub mod role;
