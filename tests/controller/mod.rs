//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extracted arguments, verifying status codes,
//! response bodies, cookies and the resulting database state.

mod download;
mod role_list;
