use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn person<'a>(&'a self) -> PersonFixtures<'a> {
        PersonFixtures { setup: self }
    }
}

pub struct PersonFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PersonFixtures<'a> {
    pub async fn insert_person(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<entity::person::Model, TestError> {
        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                first_name: ActiveValue::Set(first_name.to_string()),
                last_name: ActiveValue::Set(last_name.to_string()),
                email: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a person holding a single role of `role_type` in the group
    pub async fn insert_person_with_role(
        &self,
        group_id: i32,
        role_type: &str,
    ) -> Result<(entity::person::Model, entity::role::Model), TestError> {
        let last_name = role_type.rsplit("::").next().unwrap_or(role_type);
        let person = self.insert_person("Test", last_name).await?;

        let role = self
            .setup
            .role()
            .insert_role(person.id, group_id, role_type)
            .await?;

        Ok((person, role))
    }
}
