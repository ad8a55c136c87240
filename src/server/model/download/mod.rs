//! Async download files and the cookie that tracks them on the client.
//!
//! A background job writes a file named after the requesting person into the downloads
//! folder and registers it in the `async_downloads` cookie. The client polls until the file
//! exists and then fetches it, which removes the cookie entry again.

pub mod cookie;
pub mod file;
