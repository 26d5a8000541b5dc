//! Reference color catalogs.
//!
//! A catalog is an ordered, externally supplied list of named swatches. The
//! matcher only ever reads it; order is significant because it breaks ties.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tint_core::{ColorError, Hex, Rgb};

use crate::error::Result;

/// A named reference color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogColor {
    pub hex: Hex,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CatalogColor {
    pub fn new(hex: &str, name: impl Into<String>) -> std::result::Result<Self, ColorError> {
        Ok(Self {
            hex: Hex::parse(hex)?,
            name: name.into(),
            family: None,
            tags: Vec::new(),
        })
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn rgb(&self) -> Rgb {
        self.hex.rgb()
    }

    /// Case-insensitive family check.
    pub fn in_family(&self, family: &str) -> bool {
        self.family
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case(family))
    }

    /// Case-insensitive tag check.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// An ordered list of catalog colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    colors: Vec<CatalogColor>,
}

impl Catalog {
    pub fn new(colors: Vec<CatalogColor>) -> Self {
        Self { colors }
    }

    /// Build a catalog from `(hex, name)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let colors = pairs
            .into_iter()
            .map(|(hex, name)| CatalogColor::new(hex, name))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(colors))
    }

    /// Load a catalog from a JSON array of `{hex, name, family?, tags?}` objects.
    ///
    /// Hex values are validated and canonicalized while deserializing.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;

        let duplicates = catalog.colors.len() - catalog.distinct_hex_count();
        if duplicates > 0 {
            tracing::warn!(duplicates, "catalog contains repeated hex values");
        }
        tracing::debug!(colors = catalog.colors.len(), "loaded catalog");

        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogColor> {
        self.colors.iter()
    }

    pub fn as_slice(&self) -> &[CatalogColor] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<&CatalogColor> {
        self.colors.get(index)
    }

    /// Entries belonging to a family (case-insensitive).
    pub fn in_family<'a>(&'a self, family: &'a str) -> impl Iterator<Item = &'a CatalogColor> {
        self.colors.iter().filter(move |c| c.in_family(family))
    }

    /// Entries carrying a tag (case-insensitive).
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a CatalogColor> {
        self.colors.iter().filter(move |c| c.has_tag(tag))
    }

    /// Entries grouped by family, in order of first appearance. Entries
    /// without a family are left out.
    pub fn families(&self) -> IndexMap<&str, Vec<&CatalogColor>> {
        let mut groups: IndexMap<&str, Vec<&CatalogColor>> = IndexMap::new();
        for color in &self.colors {
            if let Some(family) = color.family.as_deref() {
                groups.entry(family).or_default().push(color);
            }
        }
        groups
    }

    /// A copy keeping only the first entry for each hex value.
    pub fn dedup_by_hex(&self) -> Catalog {
        let mut seen = HashSet::new();
        let colors = self
            .colors
            .iter()
            .filter(|c| seen.insert(c.hex.clone()))
            .cloned()
            .collect();
        Catalog::new(colors)
    }

    fn distinct_hex_count(&self) -> usize {
        self.colors.iter().map(|c| &c.hex).collect::<HashSet<_>>().len()
    }
}

impl AsRef<[CatalogColor]> for Catalog {
    fn as_ref(&self) -> &[CatalogColor] {
        &self.colors
    }
}

impl From<Vec<CatalogColor>> for Catalog {
    fn from(colors: Vec<CatalogColor>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<CatalogColor> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogColor>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogColor;
    type IntoIter = std::slice::Iter<'a, CatalogColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
