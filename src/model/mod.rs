//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod download;
pub mod role_list;
