use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Returns the subset of `person_ids` that exist, in the order they were given
    pub async fn existing_ids(&self, person_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if person_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<i32> = entity::prelude::Person::find()
            .select_only()
            .column(entity::person::Column::Id)
            .filter(entity::person::Column::Id.is_in(person_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(person_ids
            .iter()
            .copied()
            .filter(|id| found.contains(id))
            .collect())
    }
}
