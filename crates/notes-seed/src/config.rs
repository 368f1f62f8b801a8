//! Configuration types for database seeding.

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use crate::fixtures::{mediscreen_notes, NoteFixture};

/// Application credential created on the target database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSpec {
    pub username: String,
    pub password: String,
    /// Role granted on the target database.
    pub role: String,
}

/// Primitive BSON types permitted by the collection validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BsonType {
    Int,
    String,
    Date,
}

impl BsonType {
    /// The `bsonType` alias used in `$jsonSchema` documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            BsonType::Int => "int",
            BsonType::String => "string",
            BsonType::Date => "date",
        }
    }
}

/// A single field constraint in the collection validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub bson_type: BsonType,
    pub required: bool,
    pub description: String,
}

impl FieldSpec {
    pub fn new(name: &str, bson_type: BsonType, required: bool, description: &str) -> Self {
        Self {
            name: name.to_string(),
            bson_type,
            required,
            description: description.to_string(),
        }
    }
}

/// Collection to create, with its schema validator fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl CollectionSpec {
    /// Builds the `$jsonSchema` validator attached at collection creation.
    ///
    /// Required fields go into the `required` array; every field gets a
    /// `bsonType` and `description` entry under `properties`.
    pub fn validator_document(&self) -> Document {
        let required: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.clone())
            .collect();

        let mut properties = Document::new();
        for field in &self.fields {
            properties.insert(
                field.name.clone(),
                doc! {
                    "bsonType": field.bson_type.as_str(),
                    "description": field.description.clone(),
                },
            );
        }

        doc! {
            "$jsonSchema": {
                "bsonType": "object",
                "required": required,
                "properties": properties,
            }
        }
    }
}

/// Sort direction of a single-field index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexDirection {
    Ascending,
    Descending,
}

impl IndexDirection {
    /// The numeric direction MongoDB expects in an index key document.
    pub fn as_i32(&self) -> i32 {
        match self {
            IndexDirection::Ascending => 1,
            IndexDirection::Descending => -1,
        }
    }
}

/// A single-field index to create on the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSpec {
    pub field: String,
    pub direction: IndexDirection,
}

impl IndexSpec {
    pub fn new(field: &str, direction: IndexDirection) -> Self {
        Self {
            field: field.to_string(),
            direction,
        }
    }

    /// Builds the key document passed to index creation.
    pub fn keys_document(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.field.clone(), self.direction.as_i32());
        keys
    }
}

/// Configuration for one seeding run.
///
/// The default value carries the fixed Mediscreen constants; tests can
/// substitute alternate fixtures by constructing their own value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Target database name.
    pub database: String,

    /// Application user created with a role scoped to the database.
    pub user: UserSpec,

    /// Collection to create, including its schema validator.
    pub collection: CollectionSpec,

    /// Sample notes inserted after collection creation.
    pub notes: Vec<NoteFixture>,

    /// Single-field indexes created after the insert.
    pub indexes: Vec<IndexSpec>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database: "mediscreen_notes".to_string(),
            user: UserSpec {
                username: "mediscreen".to_string(),
                password: "mediscreen123".to_string(),
                role: "readWrite".to_string(),
            },
            collection: CollectionSpec {
                name: "notes".to_string(),
                fields: vec![
                    FieldSpec::new(
                        "patId",
                        BsonType::Int,
                        true,
                        "Patient ID - required and must be an integer",
                    ),
                    FieldSpec::new(
                        "patient",
                        BsonType::String,
                        true,
                        "Patient name - required and must be a string",
                    ),
                    FieldSpec::new(
                        "note",
                        BsonType::String,
                        true,
                        "Medical note - required and must be a string",
                    ),
                    FieldSpec::new("createdDate", BsonType::Date, false, "Note creation date"),
                ],
            },
            notes: mediscreen_notes(),
            indexes: vec![
                IndexSpec::new("patId", IndexDirection::Ascending),
                IndexSpec::new("patient", IndexDirection::Ascending),
                IndexSpec::new("createdDate", IndexDirection::Descending),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_default_config_constants() {
        let config = SeedConfig::default();

        assert_eq!(config.database, "mediscreen_notes");
        assert_eq!(config.user.username, "mediscreen");
        assert_eq!(config.user.role, "readWrite");
        assert_eq!(config.collection.name, "notes");
        assert_eq!(config.notes.len(), 9);
        assert_eq!(config.indexes.len(), 3);
    }

    #[test]
    fn test_validator_requires_note_fields() {
        let config = SeedConfig::default();
        let validator = config.collection.validator_document();

        let schema = validator.get_document("$jsonSchema").unwrap();
        assert_eq!(schema.get_str("bsonType").unwrap(), "object");

        let required = schema.get_array("required").unwrap();
        let required: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();
        assert_eq!(required, vec!["patId", "patient", "note"]);

        let properties = schema.get_document("properties").unwrap();
        assert_eq!(
            properties
                .get_document("patId")
                .unwrap()
                .get_str("bsonType")
                .unwrap(),
            "int"
        );
        assert_eq!(
            properties
                .get_document("patient")
                .unwrap()
                .get_str("bsonType")
                .unwrap(),
            "string"
        );
        assert_eq!(
            properties
                .get_document("createdDate")
                .unwrap()
                .get_str("bsonType")
                .unwrap(),
            "date"
        );
    }

    #[test]
    fn test_created_date_not_required() {
        let config = SeedConfig::default();
        let validator = config.collection.validator_document();

        let required = validator
            .get_document("$jsonSchema")
            .unwrap()
            .get_array("required")
            .unwrap();
        assert!(!required.iter().any(|v| v.as_str() == Some("createdDate")));
    }

    #[test]
    fn test_index_key_documents() {
        let config = SeedConfig::default();

        let keys: Vec<Document> = config.indexes.iter().map(|i| i.keys_document()).collect();
        assert_eq!(keys[0].get("patId"), Some(&Bson::Int32(1)));
        assert_eq!(keys[1].get("patient"), Some(&Bson::Int32(1)));
        assert_eq!(keys[2].get("createdDate"), Some(&Bson::Int32(-1)));
    }
}
