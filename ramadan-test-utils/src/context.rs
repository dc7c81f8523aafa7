//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database, a mock server and the Aladhan and Al-Quran Cloud
//! clients pointed at that server.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::{constant::TEST_USER_AGENT, error::TestError};

/// Test environment produced by `TestBuilder::build()`.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_tracker_tables().build().await?;
///
/// test.settings().insert_mock_settings(user_id).await?;
/// let state: AppState = test.to_app_state();
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Aladhan client configured to use the mock server
    pub aladhan_client: aladhan::Client,
    /// Al-Quran Cloud client configured to use the mock server
    pub quran_client: alquran::Client,

    /// Mock HTTP server standing in for both APIs
    pub(crate) server: ServerGuard,
    /// Mock endpoints created during build, kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the database and API clients into any type constructible from them.
    ///
    /// Lets integration tests build the application state without the test-utils crate
    /// depending on the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, aladhan::Client, alquran::Client)>,
    {
        T::from((
            self.db.clone(),
            self.aladhan_client.clone(),
            self.quran_client.clone(),
        ))
    }

    /// URL of the mock Aladhan server.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let aladhan_client = aladhan::Client::builder()
            .base_url(&mock_server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let quran_client = alquran::Client::builder()
            .base_url(&mock_server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            aladhan_client,
            quran_client,
            server: mock_server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert every mock endpoint was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
