//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a session backed by a memory store and a temporary downloads
//! folder which is removed when the context is dropped.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_role_tables().build().await?;
///
/// let groups = test.group().insert_hierarchy().await?;
/// let (person, role) = test
///     .person()
///     .insert_person_with_role(groups.top_group.id, TOP_GROUP_LEADER)
///     .await?;
///
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by a memory store
    pub session: Session,

    /// Temporary downloads folder
    pub(crate) downloads: TempDir,
}

impl TestContext {
    /// Convert database and downloads folder into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main roster crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // In integration tests
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.downloads_folder().to_path_buf()))
    }

    /// Folder async downloads are written to and served from
    pub fn downloads_folder(&self) -> &Path {
        self.downloads.path()
    }

    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::IoError)` - Temporary downloads folder could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;
        let downloads = tempfile::tempdir()?;

        Ok(TestContext {
            db,
            session,
            downloads,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
