//! `SeaORM` Entity definitions

pub mod prelude;

pub mod group;
pub mod person;
pub mod role;
