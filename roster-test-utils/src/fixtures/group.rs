use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{BOTTOM_GROUP, BOTTOM_LAYER, TOP_GROUP, TOP_LAYER},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn group<'a>(&'a self) -> GroupFixtures<'a> {
        GroupFixtures { setup: self }
    }
}

pub struct GroupFixtures<'a> {
    setup: &'a TestContext,
}

/// Groups created by [`GroupFixtures::insert_hierarchy`]
#[derive(Clone, Debug)]
pub struct GroupHierarchy {
    pub top_layer: entity::group::Model,
    pub top_group: entity::group::Model,
    pub bottom_layer: entity::group::Model,
    pub bottom_group: entity::group::Model,
}

impl<'a> GroupFixtures<'a> {
    pub async fn insert_group(
        &self,
        name: &str,
        group_type: &str,
        parent_id: Option<i32>,
    ) -> Result<entity::group::Model, TestError> {
        Ok(
            entity::prelude::Group::insert(entity::group::ActiveModel {
                parent_id: ActiveValue::Set(parent_id),
                name: ActiveValue::Set(name.to_string()),
                group_type: ActiveValue::Set(group_type.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts the hierarchy
    ///
    /// ```text
    /// top_layer (Group::TopLayer)
    /// ├── top_group (Group::TopGroup)
    /// └── bottom_layer (Group::BottomLayer)
    ///     └── bottom_group (Group::BottomGroup)
    /// ```
    pub async fn insert_hierarchy(&self) -> Result<GroupHierarchy, TestError> {
        let top_layer = self.insert_group("Top", TOP_LAYER, None).await?;
        let top_group = self
            .insert_group("TopGroup", TOP_GROUP, Some(top_layer.id))
            .await?;
        let bottom_layer = self
            .insert_group("Bottom One", BOTTOM_LAYER, Some(top_layer.id))
            .await?;
        let bottom_group = self
            .insert_group("Group 11", BOTTOM_GROUP, Some(bottom_layer.id))
            .await?;

        Ok(GroupHierarchy {
            top_layer,
            top_group,
            bottom_layer,
            bottom_group,
        })
    }
}
