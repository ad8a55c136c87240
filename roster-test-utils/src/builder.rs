//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixture
/// records. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_role_tables: bool,

    // Database fixtures to insert
    people: Vec<(String, String)>, // (first_name, last_name)
    group_hierarchy: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_role_tables: false,
            people: Vec::new(),
            group_hierarchy: false,
        }
    }

    /// Add the `people`, `groups` and `roles` tables to the test database.
    pub fn with_role_tables(mut self) -> Self {
        self.include_role_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables, parents before children.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), roster_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Person)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a person without roles during `build()`.
    pub fn with_person(mut self, first_name: &str, last_name: &str) -> Self {
        self.people
            .push((first_name.to_string(), last_name.to_string()));
        self
    }

    /// Insert the standard group hierarchy during `build()`.
    ///
    /// See [`GroupFixtures::insert_hierarchy`](crate::fixtures::group::GroupFixtures::insert_hierarchy).
    pub fn with_group_hierarchy(mut self) -> Self {
        self.group_hierarchy = true;
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (role tables if specified, then custom tables)
    /// 2. Inserts database fixtures (group hierarchy, then people)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::IoError)` - Temporary downloads folder could not be created
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_role_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Person),
                schema.create_table_from_entity(entity::prelude::Group),
                schema.create_table_from_entity(entity::prelude::Role),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        if self.group_hierarchy {
            setup.group().insert_hierarchy().await?;
        }

        for (first_name, last_name) in self.people {
            setup.person().insert_person(&first_name, &last_name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
