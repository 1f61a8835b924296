// src/domain/shoe.rs

use crate::domain::variant::{resolve_variant, Variant};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

/// A currency amount in minor units (US cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub u64);

/// Raw catalog entry, exactly as it appears in the catalog JSON.
/// Nothing here is trusted until it goes through `ShoeListing::from_record`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeRecord {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: i64,
    #[serde(default)]
    pub sale_price: Option<i64>,
    pub release_date: String,
    pub num_of_colors: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum ListingError {
    #[error("missing or empty {0}")]
    MissingField(&'static str),
    #[error("negative price: {0}")]
    NegativePrice(i64),
    #[error("negative sale price: {0}")]
    NegativeSalePrice(i64),
    #[error("invalid release date: {0:?}")]
    InvalidReleaseDate(String),
}

/// A validated shoe listing. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: Cents,
    /// Presence alone marks the listing as on sale, `Cents(0)` included.
    pub sale_price: Option<Cents>,
    pub release_date: NaiveDate,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Validates a raw record. Negative amounts are rejected rather than clamped.
    pub fn from_record(record: &ShoeRecord) -> Result<Self, ListingError> {
        let slug = non_empty(&record.slug, "slug")?;
        let name = non_empty(&record.name, "name")?;

        let price = u64::try_from(record.price)
            .map(Cents)
            .map_err(|_| ListingError::NegativePrice(record.price))?;

        let sale_price = record
            .sale_price
            .map(|amount| {
                u64::try_from(amount)
                    .map(Cents)
                    .map_err(|_| ListingError::NegativeSalePrice(amount))
            })
            .transpose()?;

        let release_date = parse_release_date(&record.release_date)?;

        Ok(ShoeListing {
            slug,
            name,
            image_src: record.image_src.trim().to_string(),
            price,
            sale_price,
            release_date,
            num_of_colors: record.num_of_colors,
        })
    }

    pub fn variant(&self, today: NaiveDate) -> Variant {
        resolve_variant(self.sale_price, self.release_date, today)
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, ListingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ListingError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp (taken as its UTC date).
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, ListingError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| ListingError::InvalidReleaseDate(raw.to_string()))
}
