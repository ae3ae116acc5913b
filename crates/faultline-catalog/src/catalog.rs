//! Catalog model
//!
//! Read-only view of the fault templates a hub offers: an ordered list of
//! categories, each holding an ordered list of fault summaries. The catalog
//! is supplied externally (and refreshed externally); this crate never
//! mutates it, only filters and inspects it.

use serde::{Deserialize, Serialize};

/// One fault as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultSummary {
    /// Stable fault name, unique within its category
    pub name: String,
    /// Optional human-facing label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl FaultSummary {
    /// Create a summary with no display name
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
        }
    }

    /// Set the display name
    #[inline]
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Label to render: the display name when present, the fault name otherwise
    #[inline]
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .display_name
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

/// Named group of faults, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category name, unique within the catalog
    pub name: String,
    /// Faults in this category, in catalog order
    #[serde(default)]
    pub faults: Vec<FaultSummary>,
}

impl Category {
    /// Create an empty category
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faults: Vec::new(),
        }
    }

    /// Add a fault, preserving order
    #[inline]
    #[must_use]
    pub fn with_fault(mut self, fault: FaultSummary) -> Self {
        self.faults.push(fault);
        self
    }

    /// Number of faults listed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// Whether the category lists no faults
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }

    /// Look up a fault by name
    #[must_use]
    pub fn fault(&self, name: &str) -> Option<&FaultSummary> {
        self.faults.iter().find(|f| f.name == name)
    }
}

/// Ordered collection of categories offered by one hub
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Categories in catalog order
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Create an empty catalog
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category, preserving order
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Look up a category by name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of faults across all categories
    #[must_use]
    pub fn fault_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Whether the catalog lists no faults at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Category::is_empty)
    }

    /// Filter faults by a case-insensitive search term
    ///
    /// Matches on fault name and display name. Categories left with no
    /// matching faults are dropped from the result; order is preserved.
    #[must_use]
    pub fn search(&self, term: &str) -> Catalog {
        let needle = term.to_lowercase();
        let categories = self
            .categories
            .iter()
            .filter_map(|category| {
                let faults: Vec<FaultSummary> = category
                    .faults
                    .iter()
                    .filter(|f| f.matches(&needle))
                    .cloned()
                    .collect();
                if faults.is_empty() {
                    None
                } else {
                    Some(Category {
                        name: category.name.clone(),
                        faults,
                    })
                }
            })
            .collect();
        Catalog { categories }
    }
}
