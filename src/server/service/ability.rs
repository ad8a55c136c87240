//! Group management rights.
//!
//! A person may manage a group when one of their roles grants
//! - [`Permission::GroupFull`] in that group,
//! - [`Permission::LayerFull`] in any group of the same layer, or
//! - [`Permission::LayerAndBelowFull`] in any group whose layer is the group's layer or a layer
//!   above it.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, role::RoleRepository},
    error::{auth::AuthError, Error},
    model::{
        db::GroupModel,
        group_type::{is_layer, Permission, RoleType},
    },
};

pub struct AbilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AbilityService<'a> {
    /// Creates a new instance of [`AbilityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether `person_id` holds a role granting management of `group`.
    ///
    /// # Returns
    /// - `Ok(true)`: the person may manage the group
    /// - `Ok(false)`: none of the person's roles grant management of the group
    /// - `Err(Error::DbErr)`: looking up roles or the group hierarchy failed
    pub async fn can_manage_group(&self, person_id: i32, group: &GroupModel) -> Result<bool, Error> {
        let group_repo = GroupRepository::new(self.db);
        let role_repo = RoleRepository::new(self.db);

        let roles = role_repo.get_many_with_group_by_person_id(person_id).await?;
        if roles.is_empty() {
            return Ok(false);
        }

        let chain = group_repo.get_with_ancestors(group.clone()).await?;
        let group_layer_id = layer_id(&chain);
        let layer_ids_above: Vec<i32> = chain
            .iter()
            .filter(|g| is_layer(&g.group_type))
            .map(|g| g.id)
            .collect();

        for (role, role_group) in roles {
            let Some(role_type) = RoleType::find(&role.role_type) else {
                tracing::warn!(
                    role_id = %role.id,
                    "Ignoring role with unregistered role type {:?}",
                    role.role_type
                );

                continue;
            };

            if role_type.has_permission(Permission::GroupFull) && role.group_id == group.id {
                return Ok(true);
            }

            let needs_layer = role_type.has_permission(Permission::LayerFull)
                || role_type.has_permission(Permission::LayerAndBelowFull);
            if !needs_layer {
                continue;
            }

            let Some(role_group) = role_group else {
                continue;
            };
            let role_layer_id = layer_id(&group_repo.get_with_ancestors(role_group).await?);

            if role_type.has_permission(Permission::LayerFull)
                && role_layer_id.is_some()
                && role_layer_id == group_layer_id
            {
                return Ok(true);
            }

            if role_type.has_permission(Permission::LayerAndBelowFull)
                && role_layer_id.is_some_and(|id| layer_ids_above.contains(&id))
            {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Fails with [`AuthError::AccessDenied`] unless `person_id` may manage `group`
    pub async fn authorize_manage(&self, person_id: i32, group: &GroupModel) -> Result<(), Error> {
        if self.can_manage_group(person_id, group).await? {
            return Ok(());
        }

        Err(Error::AuthError(AuthError::AccessDenied {
            person_id,
            group_id: group.id,
        }))
    }
}

/// ID of the first layer group in a chain running from a group up to the root
fn layer_id(chain: &[GroupModel]) -> Option<i32> {
    chain
        .iter()
        .find(|g| is_layer(&g.group_type))
        .map(|g| g.id)
}
