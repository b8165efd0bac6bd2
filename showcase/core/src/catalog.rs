//! Showcase Catalog
//!
//! The static, ordered list of use-case cards. Identity is the position in
//! the list; `id` exists for content authors and duplicate detection.
//!
//! Catalogs load from TOML (`[[items]]` tables) or JSON (`{"items": [...]}`),
//! picked by file extension. A built-in catalog covers the default site.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read catalog file
    #[error("Failed to read catalog file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML catalog: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Failed to parse JSON
    #[error("Failed to parse JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The catalog has no items
    #[error("Catalog is empty")]
    Empty,

    /// Two items share an id
    #[error("Duplicate item id '{0}'")]
    DuplicateId(String),

    /// A required field is blank
    #[error("Item {index} has an empty {field}")]
    MissingField {
        /// Position of the item
        index: usize,
        /// Name of the blank field
        field: &'static str,
    },
}

/// One use-case card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseItem {
    /// Stable identifier
    pub id: String,
    /// Label shown on the collapsed card (e.g., "Leads")
    pub short_label: String,
    /// Title typed out when the card is active
    pub full_title: String,
    /// Category tag
    pub tag: String,
    /// The client's problem
    pub problem: String,
    /// What the automation does about it
    pub solution: String,
    /// Headline result
    pub impact_stat: String,
}

impl ShowcaseItem {
    /// Create an item
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        short_label: impl Into<String>,
        full_title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            short_label: short_label.into(),
            full_title: full_title.into(),
            tag: String::new(),
            problem: String::new(),
            solution: String::new(),
            impact_stat: String::new(),
        }
    }

    /// Set the tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set problem, solution and impact
    #[must_use]
    pub fn with_story(
        mut self,
        problem: impl Into<String>,
        solution: impl Into<String>,
        impact_stat: impl Into<String>,
    ) -> Self {
        self.problem = problem.into();
        self.solution = solution.into();
        self.impact_stat = impact_stat.into();
        self
    }
}

/// Ordered, validated list of showcase items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<ShowcaseItem>,
}

impl Catalog {
    /// Build a catalog, validating the items
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, an id repeats, or an item has
    /// a blank id, short label or full title.
    pub fn new(items: Vec<ShowcaseItem>) -> Result<Self, CatalogError> {
        let catalog = Self { items };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog without validation (an empty list is allowed)
    #[must_use]
    pub fn unchecked(items: Vec<ShowcaseItem>) -> Self {
        Self { items }
    }

    /// The catalog shipped with the site
    #[must_use]
    pub fn builtin() -> Self {
        Self::unchecked(vec![
            ShowcaseItem::new("lead-qualification", "Leads", "Automated Lead Qualification")
                .with_tag("Sales")
                .with_story(
                    "Sales reps spend hours chasing leads that were never going to buy.",
                    "Every inbound lead is enriched, scored and routed before a human sees it.",
                    "3x more qualified calls",
                ),
            ShowcaseItem::new("client-onboarding", "Onboard", "Instant Onboarding")
                .with_tag("Operations")
                .with_story(
                    "New clients wait days for accounts, contracts and welcome packs.",
                    "Signed deals trigger account setup, paperwork and a kickoff invite.",
                    "Onboarding in 10 minutes, not 4 days",
                ),
            ShowcaseItem::new("support-triage", "Support", "24/7 Support Triage")
                .with_tag("Support")
                .with_story(
                    "Tickets pile up overnight and urgent issues sit behind password resets.",
                    "An assistant answers the routine questions and escalates the rest with context.",
                    "62% of tickets resolved without an agent",
                ),
            ShowcaseItem::new("invoicing", "Invoices", "Hands-free Invoicing")
                .with_tag("Finance")
                .with_story(
                    "Invoices go out late and payment reminders depend on someone remembering.",
                    "Completed work is invoiced automatically and reminders follow up on schedule.",
                    "Days sales outstanding down 40%",
                ),
        ])
    }

    /// Parse a TOML catalog (`[[items]]` tables)
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or a catalog that fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a JSON catalog (`{"items": [...]}`)
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or a catalog that fails validation.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file; `.json` is parsed as JSON, anything else as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::info!(
            path = %path.display(),
            items = catalog.len(),
            "Loaded showcase catalog"
        );

        Ok(catalog)
    }

    /// Check the catalog invariants
    ///
    /// # Errors
    ///
    /// See [`Catalog::new`].
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, item) in self.items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogError::MissingField { index, field: "id" });
            }
            if item.short_label.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    index,
                    field: "short_label",
                });
            }
            if item.full_title.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    index,
                    field: "full_title",
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        Ok(())
    }

    /// Item at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ShowcaseItem> {
        self.items.get(index)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in order
    pub fn iter(&self) -> std::slice::Iter<'_, ShowcaseItem> {
        self.items.iter()
    }

    /// Position of the item with the given id
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = ShowcaseItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ShowcaseItem;
    type IntoIter = std::slice::Iter<'a, ShowcaseItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOML_CATALOG: &str = r#"
[[items]]
id = "leads"
short_label = "Leads"
full_title = "Automated Lead Qualification"
tag = "Sales"
problem = "Too many cold leads"
solution = "Score them automatically"
impact_stat = "3x"

[[items]]
id = "onboard"
short_label = "Onboard"
full_title = "Instant Onboarding"
tag = "Ops"
problem = "Slow setup"
solution = "Automate it"
impact_stat = "10 minutes"
"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[1].full_title, "Instant Onboarding");
        assert_eq!(catalog.position("support-triage"), Some(2));
    }

    #[test]
    fn test_parse_toml_catalog() {
        let catalog = Catalog::from_toml_str(TOML_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].short_label, "Leads");
        assert_eq!(catalog[1].impact_stat, "10 minutes");
    }

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{"items":[{"id":"a","short_label":"A","full_title":"Alpha",
            "tag":"","problem":"p","solution":"s","impact_stat":"i"}]}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.get(0).map(|i| i.full_title.as_str()), Some("Alpha"));
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_toml_str("items = []"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let items = vec![
            ShowcaseItem::new("same", "A", "Alpha"),
            ShowcaseItem::new("same", "B", "Beta"),
        ];
        match Catalog::new(items) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "same"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_title_rejected() {
        let items = vec![ShowcaseItem::new("a", "A", "   ")];
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::MissingField {
                index: 0,
                field: "full_title"
            })
        ));
    }

    #[test]
    fn test_from_path_picks_format_by_extension() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        toml_file.write_all(TOML_CATALOG.as_bytes()).unwrap();
        assert_eq!(Catalog::from_path(toml_file.path()).unwrap().len(), 2);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        json_file.write_all(json.as_bytes()).unwrap();
        assert_eq!(Catalog::from_path(json_file.path()).unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = Catalog::from_path(Path::new("/nonexistent/showcase/catalog.toml"));
        assert!(matches!(result, Err(CatalogError::ReadError { .. })));
    }
}
