pub use sea_orm_migration::prelude::*;

mod m20251017_000001_person;
mod m20251017_000002_group;
mod m20251017_000003_role;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_person::Migration),
            Box::new(m20251017_000002_group::Migration),
            Box::new(m20251017_000003_role::Migration),
        ]
    }
}
