//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They resolve groups, check
//! management rights, validate role types against the group type registry and decide which
//! async downloads a person may receive.

pub mod ability;
pub mod download;
pub mod role_list;
