//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: resolving the signed in
//! person from the session and parsing the comma separated person ID lists of bulk requests.

pub mod get_person;
pub mod ids;
