//! `SeaORM` Entity prelude

pub use super::group::Entity as Group;
pub use super::person::Entity as Person;
pub use super::role::Entity as Role;
