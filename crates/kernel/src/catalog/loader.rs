//! Catalog document loading from JSON, YAML, or TOML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::{Catalog, CatalogDocument};
use crate::error::{CatalogError, CatalogResult};

/// Supported catalog document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse a catalog document in this format.
    pub fn parse(self, contents: &str) -> Result<CatalogDocument, String> {
        match self {
            Self::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            Self::Yaml => serde_yml::from_str(contents).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

impl Catalog {
    /// Load and validate a catalog from a file.
    ///
    /// The format is chosen by extension: `.json`, `.yaml`/`.yml`, or `.toml`.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;

        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?format, bytes = contents.len(), "parsing catalog");

        let document = format.parse(&contents).map_err(|message| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        let catalog = Self::from_document(document)?;

        info!(
            path = %path.display(),
            users = catalog.users().len(),
            categories = catalog.categories().len(),
            products = catalog.products().len(),
            "catalog loaded"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_by_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("data/catalog.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalog.YML")),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("catalog.toml")),
            Some(CatalogFormat::Toml)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("catalog.csv")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn parses_toml_tables() {
        let doc = CatalogFormat::Toml
            .parse(
                r#"
                [[users]]
                id = 1
                name = "Max"
                sex = "m"

                [[categories]]
                id = 1
                title = "Drinks"
                icon = "🍺"
                ownerId = 1

                [[products]]
                id = 1
                name = "Milk"
                categoryId = 1
                "#,
            )
            .unwrap();

        assert_eq!(doc.users.len(), 1);
        assert_eq!(doc.categories[0].owner_id, 1);
        assert_eq!(doc.products[0].category_id, 1);
    }

    #[test]
    fn parses_yaml_with_snake_case_keys() {
        let doc = CatalogFormat::Yaml
            .parse(
                "users:\n  - {id: 1, name: Max, sex: m}\n\
                 categories:\n  - {id: 1, title: Drinks, icon: x, owner_id: 1}\n\
                 products:\n  - {id: 1, name: Milk, category_id: 1}\n",
            )
            .unwrap();

        assert_eq!(doc.products[0].name, "Milk");
    }

    #[test]
    fn missing_tables_default_to_empty() {
        let doc = CatalogFormat::Json.parse("{}").unwrap();
        assert!(doc.users.is_empty());
        assert!(doc.products.is_empty());
    }

    #[test]
    fn malformed_json_reports_parser_message() {
        let err = CatalogFormat::Json.parse("{ not json").unwrap_err();
        assert!(!err.is_empty());
    }
}
