use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a role of `role_type` for a person in a group
    pub async fn create(
        &self,
        person_id: i32,
        group_id: i32,
        role_type: &str,
    ) -> Result<entity::role::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let role = entity::role::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            group_id: ActiveValue::Set(group_id),
            role_type: ActiveValue::Set(role_type.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        role.insert(self.db).await
    }

    /// Gets the roles of `role_type` held by any of `person_ids` in a group
    pub async fn get_many_by_group_and_type(
        &self,
        group_id: i32,
        role_type: &str,
        person_ids: &[i32],
    ) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::GroupId.eq(group_id))
            .filter(entity::role::Column::RoleType.eq(role_type))
            .filter(entity::role::Column::PersonId.is_in(person_ids.iter().copied()))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all roles held by any of `person_ids` in a group
    pub async fn get_many_by_group(
        &self,
        group_id: i32,
        person_ids: &[i32],
    ) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::GroupId.eq(group_id))
            .filter(entity::role::Column::PersonId.is_in(person_ids.iter().copied()))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every role of a person together with the group it belongs to
    pub async fn get_many_with_group_by_person_id(
        &self,
        person_id: i32,
    ) -> Result<Vec<(entity::role::Model, Option<entity::group::Model>)>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::PersonId.eq(person_id))
            .find_also_related(entity::group::Entity)
            .all(self.db)
            .await
    }

    /// Moves a loaded role to another group and role type
    pub async fn update(
        &self,
        role: entity::role::Model,
        role_type: &str,
        group_id: i32,
    ) -> Result<entity::role::Model, DbErr> {
        let mut role_am = role.into_active_model();
        role_am.role_type = ActiveValue::Set(role_type.to_string());
        role_am.group_id = ActiveValue::Set(group_id);
        role_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        role_am.update(self.db).await
    }

    /// Deletes the roles of `role_type` held by any of `person_ids` in a group
    ///
    /// Check [`DeleteResult::rows_affected`] for the number of removed roles.
    pub async fn delete_many_by_group_and_type(
        &self,
        group_id: i32,
        role_type: &str,
        person_ids: &[i32],
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Role::delete_many()
            .filter(entity::role::Column::GroupId.eq(group_id))
            .filter(entity::role::Column::RoleType.eq(role_type))
            .filter(entity::role::Column::PersonId.is_in(person_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
