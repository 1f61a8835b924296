// src/catalog/mod.rs

use crate::domain::{ShoeListing, ShoeRecord};
use crate::errors::CatalogError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const BUNDLED_CATALOG: &str = include_str!("../../data/shoes.json");

/// The validated set of listings served by the app.
#[derive(Debug, Clone)]
pub struct Catalog {
    shoes: Vec<ShoeListing>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Price,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Price => "price",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "price" => Ok(SortOrder::Price),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

impl Catalog {
    /// Parses and validates a JSON array of shoe records.
    /// The first invalid record aborts loading.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ShoeRecord> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        let mut shoes = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let shoe = ShoeListing::from_record(record)
                .map_err(|source| CatalogError::InvalidListing { index, source })?;

            if !seen.insert(shoe.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(shoe.slug));
            }
            shoes.push(shoe);
        }

        Ok(Catalog { shoes })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary from `data/shoes.json`.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&ShoeListing> {
        self.shoes.iter().find(|s| s.slug == slug)
    }

    /// Stable sort: ties keep catalog order.
    pub fn sorted(&self, order: SortOrder) -> Vec<&ShoeListing> {
        let mut shoes: Vec<&ShoeListing> = self.shoes.iter().collect();
        match order {
            SortOrder::Newest => shoes.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
            SortOrder::Price => shoes.sort_by_key(|s| s.price),
        }
        shoes
    }
}
