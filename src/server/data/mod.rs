//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same repository works on a plain connection or inside
//! a transaction.

pub mod group;
pub mod person;
pub mod role;
