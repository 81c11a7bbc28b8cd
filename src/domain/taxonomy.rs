//! Tag categories and the suggestion vocabulary

use crate::error::{PromptagsError, Result};
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};

/// A named group of canonical tags with a display color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub color: String,
    pub tags: BTreeSet<String>,
}

impl Category {
    pub fn new<I, S>(name: &str, color: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Category {
            name: name.to_string(),
            color: color.to_string(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test against the canonical vocabulary
    pub fn contains(&self, canonical: &str) -> bool {
        self.tags.contains(canonical)
    }
}

/// Ordered category registry.
///
/// Order decides both classification priority and arrangement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(default, rename = "category")]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    color: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl Taxonomy {
    /// Build a taxonomy, rejecting duplicate category names
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.name.as_str()) {
                return Err(PromptagsError::Taxonomy(format!(
                    "Duplicate category name: '{}'",
                    category.name
                )));
            }
        }

        Ok(Taxonomy { categories })
    }

    /// Parse a taxonomy from TOML (`[[category]]` tables)
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: TaxonomyFile = toml::from_str(contents)
            .map_err(|e| PromptagsError::Taxonomy(format!("Failed to parse taxonomy: {}", e)))?;

        let categories = file
            .categories
            .into_iter()
            .map(|entry| Category::new(&entry.name, &entry.color, entry.tags))
            .collect();

        Self::new(categories)
    }

    /// The default registry shipped with promptags
    pub fn builtin() -> Self {
        Taxonomy {
            categories: vec![
                Category::new(
                    "picture-quality",
                    "#e67e22",
                    [
                        "RAW",
                        "analog",
                        "Nikon Z 85mm",
                        "award winning glamour photograph",
                        "sharp focus",
                        "digital render",
                        "professional",
                        "4k",
                        "artstation",
                        "artgerm",
                        "octane render",
                        "highres",
                        "ultra realistic",
                        "photorealism",
                        "photography",
                        "8k",
                        "uhd",
                        "photorealistic",
                        "realistic",
                        "post-processing",
                        "max detail",
                        "roughness",
                        "real life",
                        "dust particle paint explosion",
                        "high detail",
                        "aesthetic",
                        "extremely detailed",
                        "stamp",
                    ],
                ),
                Category::new(
                    "character-quality",
                    "#9b59b6",
                    [
                        "subsurface skin scattering",
                        "shiny skin",
                        "beautiful detailed eyes",
                        "realistic",
                        "photorealistic",
                        "well-lit face",
                        "smooth",
                        "glowing face",
                        "highly detailed facial features",
                    ],
                ),
                Category::new("background-quality", "#27ae60", ["detailed background"]),
                Category::new("effect", "#2980b9", Vec::<String>::new()),
                Category::new("positioning", "#c0392b", Vec::<String>::new()),
                Category::new("pose", "#16a085", Vec::<String>::new()),
            ],
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Union of every category's canonical tags
    pub fn suggestion_vocabulary(&self) -> BTreeSet<String> {
        self.categories
            .iter()
            .flat_map(|category| category.tags.iter().cloned())
            .collect()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
