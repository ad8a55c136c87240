//! Database model type aliases.
//!
//! Short names for the SeaORM entity models from the `entity` crate.

/// A person who can hold roles in groups.
///
/// # Fields (from `entity::person::Model`)
/// - `id` - Primary key
/// - `first_name`, `last_name` - Display name
/// - `email` - Optional unique e-mail address
/// - `created_at` - Timestamp when the person was created
pub type PersonModel = entity::person::Model;

/// A group in the group tree.
///
/// # Fields (from `entity::group::Model`)
/// - `id` - Primary key
/// - `parent_id` - Parent group, `None` for the root
/// - `name` - Display name
/// - `group_type` - Registry name of the group type, e.g. `Group::TopGroup`
/// - `created_at` - Timestamp when the group was created
pub type GroupModel = entity::group::Model;

/// A typed membership of a person in a group.
///
/// # Fields (from `entity::role::Model`)
/// - `id` - Primary key
/// - `person_id` - The member
/// - `group_id` - The group the role belongs to
/// - `role_type` - Registry name of the role type, e.g. `Group::TopGroup::Member`
/// - `created_at` / `updated_at` - Record timestamps
pub type RoleModel = entity::role::Model;
