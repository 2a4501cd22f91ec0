//! Catalog error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Catalog table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Category,
    Product,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::User => "user",
            Entity::Category => "category",
            Entity::Product => "product",
        };
        f.write_str(name)
    }
}

/// Catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A row references a row that does not exist in the target table.
    #[error("{entity} {id} references missing {target} {reference}")]
    BrokenReference {
        entity: Entity,
        id: i64,
        target: Entity,
        reference: i64,
    },

    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: Entity, id: i64 },

    #[error("unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Result type alias using CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
