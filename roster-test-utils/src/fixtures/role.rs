use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn role<'a>(&'a self) -> RoleFixtures<'a> {
        RoleFixtures { setup: self }
    }
}

pub struct RoleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RoleFixtures<'a> {
    pub async fn insert_role(
        &self,
        person_id: i32,
        group_id: i32,
        role_type: &str,
    ) -> Result<entity::role::Model, TestError> {
        Ok(
            entity::prelude::Role::insert(entity::role::ActiveModel {
                person_id: ActiveValue::Set(person_id),
                group_id: ActiveValue::Set(group_id),
                role_type: ActiveValue::Set(role_type.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Total number of roles in the database
    pub async fn count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Role::find().count(&self.setup.db).await?)
    }

    pub async fn roles_of_person(
        &self,
        person_id: i32,
    ) -> Result<Vec<entity::role::Model>, TestError> {
        Ok(entity::prelude::Role::find()
            .filter(entity::role::Column::PersonId.eq(person_id))
            .order_by_asc(entity::role::Column::Id)
            .all(&self.setup.db)
            .await?)
    }
}
