//! Database seeding against a MongoDB server.

use mongodb::bson::{doc, DateTime, Document};
use mongodb::{Client, Collection, Database, IndexModel};
use thiserror::Error;
use tracing::info;

use crate::config::{IndexSpec, SeedConfig, UserSpec};
use crate::fixtures::NoteFixture;

/// Failure of one seeding step.
///
/// Each variant maps to exactly one step, so the caller can tell which
/// step failed without parsing driver messages. The underlying driver
/// error is preserved as the source: a duplicate user, an existing
/// collection, a validator rejection or an index conflict all surface
/// here unmodified.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("creating application user `{username}`: {source}")]
    CreateUser {
        username: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("creating collection `{collection}`: {source}")]
    CreateCollection {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("inserting sample notes: {0}")]
    InsertNotes(#[source] mongodb::error::Error),
    #[error("creating index on `{field}`: {source}")]
    CreateIndex {
        field: String,
        #[source]
        source: mongodb::error::Error,
    },
    #[error("counting documents: {0}")]
    CountDocuments(#[source] mongodb::error::Error),
}

/// Summary of a completed seeding run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub database: String,
    pub collection: String,
    /// Notes inserted by this run.
    pub inserted: usize,
    /// Documents in the collection after the insert.
    pub document_count: u64,
    /// Indexes created by this run.
    pub indexes: usize,
}

/// Database seeder for the notes service.
pub struct Seeder {
    client: Client,
}

impl Seeder {
    /// Creates a new seeder over a connected client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Runs all seeding steps in order, stopping at the first failure.
    ///
    /// Steps: select the database, create the application user, create
    /// the schema-validated collection, insert the sample notes, create
    /// the indexes, then count the resulting documents. There is no
    /// rollback: a failure part-way leaves the earlier steps applied.
    pub async fn seed(&self, config: &SeedConfig) -> Result<SeedReport, SeedError> {
        let db = self.client.database(&config.database);
        info!("Seeding database `{}`...", config.database);

        self.create_app_user(&db, &config.database, &config.user)
            .await?;
        self.create_collection(&db, config).await?;

        let collection = db.collection::<Document>(&config.collection.name);
        let inserted = self.insert_notes(&collection, &config.notes).await?;
        self.create_indexes(&collection, &config.indexes).await?;

        let document_count = collection
            .count_documents(doc! {})
            .await
            .map_err(SeedError::CountDocuments)?;

        Ok(SeedReport {
            database: config.database.clone(),
            collection: config.collection.name.clone(),
            inserted,
            document_count,
            indexes: config.indexes.len(),
        })
    }

    /// Creates the application user with its role scoped to the database.
    ///
    /// Fails with the driver's duplicate-user error if the principal
    /// already exists; nothing is skipped or retried.
    async fn create_app_user(
        &self,
        db: &Database,
        database: &str,
        user: &UserSpec,
    ) -> Result<(), SeedError> {
        info!("Creating application user `{}`...", user.username);

        db.run_command(doc! {
            "createUser": user.username.clone(),
            "pwd": user.password.clone(),
            "roles": [ { "role": user.role.clone(), "db": database } ],
        })
        .await
        .map_err(|source| SeedError::CreateUser {
            username: user.username.clone(),
            source,
        })?;

        Ok(())
    }

    /// Creates the collection with its schema validator attached.
    async fn create_collection(&self, db: &Database, config: &SeedConfig) -> Result<(), SeedError> {
        info!(
            "Creating collection `{}` with schema validation...",
            config.collection.name
        );

        db.create_collection(&config.collection.name)
            .validator(config.collection.validator_document())
            .await
            .map_err(|source| SeedError::CreateCollection {
                collection: config.collection.name.clone(),
                source,
            })?;

        Ok(())
    }

    /// Inserts the sample notes as one batch.
    ///
    /// Every document gets the same wall-clock `createdDate` stamp. A
    /// single document rejected by the validator fails the whole batch.
    async fn insert_notes(
        &self,
        collection: &Collection<Document>,
        notes: &[NoteFixture],
    ) -> Result<usize, SeedError> {
        info!("Inserting {} sample notes...", notes.len());

        let created_date = DateTime::now();
        let documents: Vec<Document> = notes.iter().map(|n| n.to_document(created_date)).collect();

        let result = collection
            .insert_many(documents)
            .await
            .map_err(SeedError::InsertNotes)?;

        info!("Inserted {} notes", result.inserted_ids.len());
        Ok(result.inserted_ids.len())
    }

    /// Creates the configured single-field indexes, one at a time.
    async fn create_indexes(
        &self,
        collection: &Collection<Document>,
        indexes: &[IndexSpec],
    ) -> Result<(), SeedError> {
        info!("Creating {} indexes...", indexes.len());

        for index in indexes {
            let model = IndexModel::builder().keys(index.keys_document()).build();
            collection
                .create_index(model)
                .await
                .map_err(|source| SeedError::CreateIndex {
                    field: index.field.clone(),
                    source,
                })?;
        }

        Ok(())
    }

    /// Returns a reference to the client for advanced usage.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn driver_error(message: &'static str) -> mongodb::error::Error {
        mongodb::error::Error::custom(message)
    }

    #[test]
    fn test_error_names_failed_step() {
        let err = SeedError::CreateUser {
            username: "mediscreen".to_string(),
            source: driver_error("duplicate user"),
        };
        assert!(err.to_string().contains("creating application user `mediscreen`"));

        let err = SeedError::CreateCollection {
            collection: "notes".to_string(),
            source: driver_error("collection exists"),
        };
        assert!(err.to_string().contains("creating collection `notes`"));

        let err = SeedError::CreateIndex {
            field: "patId".to_string(),
            source: driver_error("index conflict"),
        };
        assert!(err.to_string().contains("creating index on `patId`"));
    }

    #[test]
    fn test_error_preserves_driver_source() {
        let err = SeedError::InsertNotes(driver_error("validation failed"));
        assert!(err.source().is_some());

        let err = SeedError::CountDocuments(driver_error("connection reset"));
        assert!(err.source().is_some());
    }
}
