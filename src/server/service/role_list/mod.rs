//! Bulk role management.
//!
//! Creates, deletes and moves the roles of several people in one group at once. Every
//! operation first resolves the group, then checks that the signed in person may manage it and
//! finally validates the requested role type against the group's type.

pub mod message;


use std::collections::{BTreeMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::role_list::{RoleListMoveDto, RoleListResultDto, RoleTypeCountDto},
    server::{
        data::{group::GroupRepository, person::PersonRepository, role::RoleRepository},
        error::{role_list::RoleListError, Error},
        model::{db::GroupModel, group_type::GroupType},
        service::{
            ability::AbilityService,
            role_list::message::{notice, RoleListAction},
        },
    },
};

/// Service for bulk role operations on behalf of a signed in person.
pub struct RoleListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleListService<'a> {
    /// Creates a new instance of [`RoleListService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gives every person in `person_ids` a role of `role_type` in the group.
    ///
    /// People who already hold the role and IDs of unknown people are skipped.
    ///
    /// # Returns
    /// - `Ok(RoleListResultDto)`: number of created roles & notice
    /// - `Err(Error::RoleListError(RoleListError::GroupNotFound))`: group does not exist
    /// - `Err(Error::AuthError(AuthError::AccessDenied))`: `person_id` may not manage the group
    /// - `Err(Error::RoleListError(RoleListError::InvalidRoleType))`: group does not accept
    ///   `role_type`
    /// - `Err(Error::DbErr)`: database operation failed, nothing was created
    pub async fn create(
        &self,
        person_id: i32,
        group_id: i32,
        person_ids: &[i32],
        role_type: &str,
    ) -> Result<RoleListResultDto, Error> {
        let group = self.find_managed_group(person_id, group_id).await?;
        validate_role_type(&group, role_type)?;

        let person_ids = PersonRepository::new(self.db)
            .existing_ids(person_ids)
            .await?;

        let txn = self.db.begin().await?;
        let role_repo = RoleRepository::new(&txn);

        let holders: HashSet<i32> = role_repo
            .get_many_by_group_and_type(group.id, role_type, &person_ids)
            .await?
            .into_iter()
            .map(|role| role.person_id)
            .collect();

        let mut count = 0;
        for id in person_ids.iter().filter(|id| !holders.contains(*id)) {
            role_repo.create(*id, group.id, role_type).await?;
            count += 1;
        }

        txn.commit().await?;

        tracing::info!(
            person_id = %person_id,
            group_id = %group.id,
            "Created {} roles of type {}",
            count,
            role_type
        );

        Ok(RoleListResultDto {
            count,
            notice: notice(RoleListAction::Create, count),
        })
    }

    /// Removes the roles of `role_type` held by `person_ids` in the group.
    ///
    /// Errors match [`RoleListService::create`].
    pub async fn destroy(
        &self,
        person_id: i32,
        group_id: i32,
        person_ids: &[i32],
        role_type: &str,
    ) -> Result<RoleListResultDto, Error> {
        let group = self.find_managed_group(person_id, group_id).await?;
        validate_role_type(&group, role_type)?;

        let result = RoleRepository::new(self.db)
            .delete_many_by_group_and_type(group.id, role_type, person_ids)
            .await?;
        let count = result.rows_affected;

        tracing::info!(
            person_id = %person_id,
            group_id = %group.id,
            "Deleted {} roles of type {}",
            count,
            role_type
        );

        Ok(RoleListResultDto {
            count,
            notice: notice(RoleListAction::Destroy, count),
        })
    }

    /// Moves the roles of `moving_role_type` held by `person_ids` in the group to
    /// `target_group_id` with type `role_type`.
    ///
    /// Both groups must be manageable by `person_id`. All roles are moved in a single
    /// transaction, an invalid target role type changes nothing. People who already hold
    /// `role_type` in the target group keep their roles unchanged.
    pub async fn update(
        &self,
        person_id: i32,
        group_id: i32,
        person_ids: &[i32],
        moving_role_type: &str,
        role_type: &str,
        target_group_id: i32,
    ) -> Result<RoleListResultDto, Error> {
        let group = self.find_managed_group(person_id, group_id).await?;
        let target_group = if target_group_id == group.id {
            group.clone()
        } else {
            self.find_managed_group(person_id, target_group_id).await?
        };
        validate_role_type(&target_group, role_type)?;

        let txn = self.db.begin().await?;
        let role_repo = RoleRepository::new(&txn);

        let holders: HashSet<i32> = role_repo
            .get_many_by_group_and_type(target_group.id, role_type, person_ids)
            .await?
            .into_iter()
            .map(|role| role.person_id)
            .collect();

        let roles = role_repo
            .get_many_by_group_and_type(group.id, moving_role_type, person_ids)
            .await?;

        let mut count = 0;
        for role in roles
            .into_iter()
            .filter(|role| !holders.contains(&role.person_id))
        {
            role_repo.update(role, role_type, target_group.id).await?;
            count += 1;
        }

        txn.commit().await?;

        tracing::info!(
            person_id = %person_id,
            group_id = %group.id,
            target_group_id = %target_group.id,
            "Moved {} roles from {} to {}",
            count,
            moving_role_type,
            role_type
        );

        Ok(RoleListResultDto {
            count,
            notice: notice(RoleListAction::Move, count),
        })
    }

    /// Counts the roles of `role_type` that [`RoleListService::update`] would move
    pub async fn move_summary(
        &self,
        person_id: i32,
        group_id: i32,
        ids: &str,
        person_ids: &[i32],
        role_type: &str,
    ) -> Result<RoleListMoveDto, Error> {
        let group = self.find_managed_group(person_id, group_id).await?;

        let roles = RoleRepository::new(self.db)
            .get_many_by_group_and_type(group.id, role_type, person_ids)
            .await?;

        Ok(RoleListMoveDto {
            moving_people: ids.to_string(),
            moving_role_type: role_type.to_string(),
            moving_roles_count: roles.len() as u64,
        })
    }

    /// Counts the roles `person_ids` hold in the group per role type, ordered by role type
    pub async fn deletable(
        &self,
        person_id: i32,
        group_id: i32,
        person_ids: &[i32],
    ) -> Result<Vec<RoleTypeCountDto>, Error> {
        let group = self.find_managed_group(person_id, group_id).await?;

        let roles = RoleRepository::new(self.db)
            .get_many_by_group(group.id, person_ids)
            .await?;

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for role in roles {
            *counts.entry(role.role_type).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(role_type, count)| RoleTypeCountDto { role_type, count })
            .collect())
    }

    async fn find_managed_group(&self, person_id: i32, group_id: i32) -> Result<GroupModel, Error> {
        let Some(group) = GroupRepository::new(self.db).get(group_id).await? else {
            return Err(Error::RoleListError(RoleListError::GroupNotFound(group_id)));
        };

        AbilityService::new(self.db)
            .authorize_manage(person_id, &group)
            .await?;

        Ok(group)
    }
}

fn validate_role_type(group: &GroupModel, role_type: &str) -> Result<(), RoleListError> {
    let accepted = GroupType::find(&group.group_type).is_some_and(|t| t.accepts(role_type));

    if !accepted {
        return Err(RoleListError::InvalidRoleType {
            role_type: role_type.to_string(),
            group_type: group.group_type.clone(),
        });
    }

    Ok(())
}
