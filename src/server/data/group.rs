use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

/// Upper bound on the depth of the group tree, guards against cyclic parent links
const MAX_GROUP_DEPTH: usize = 64;

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, group_id: i32) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find_by_id(group_id)
            .one(self.db)
            .await
    }

    /// Returns `group` followed by its ancestors up to the root group
    pub async fn get_with_ancestors(
        &self,
        group: entity::group::Model,
    ) -> Result<Vec<entity::group::Model>, DbErr> {
        let mut parent_id = group.parent_id;
        let mut chain = vec![group];

        while let Some(id) = parent_id {
            if chain.len() >= MAX_GROUP_DEPTH || chain.iter().any(|g| g.id == id) {
                return Err(DbErr::Custom(format!(
                    "Group hierarchy above group ID {} is cyclic or too deep",
                    chain[0].id
                )));
            }

            let Some(parent) = self.get(id).await? else {
                return Err(DbErr::RecordNotFound(format!(
                    "Parent group ID {} of group ID {} not found",
                    id,
                    chain[chain.len() - 1].id
                )));
            };

            parent_id = parent.parent_id;
            chain.push(parent);
        }

        Ok(chain)
    }
}
