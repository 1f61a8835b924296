// src/domain/variant.rs

use crate::domain::shoe::Cents;
use chrono::NaiveDate;

/// Shoes released within this many days of today are new releases.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// How a listing is presented in the catalog. Exactly one applies to any listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }
}

/// Classifies a listing. The order of checks is the precedence:
/// a shoe can be both on sale and newly released, and on-sale wins.
///
/// `today` is passed in so the result only depends on the arguments.
pub fn resolve_variant(
    sale_price: Option<Cents>,
    release_date: NaiveDate,
    today: NaiveDate,
) -> Variant {
    if sale_price.is_some() {
        return Variant::OnSale;
    }
    if is_new_release(release_date, today) {
        return Variant::NewRelease;
    }
    Variant::Default
}

/// True when fewer than `NEW_RELEASE_WINDOW_DAYS` days separate the release from today.
/// A release exactly 30 days ago is no longer new. Future release dates count as new.
pub fn is_new_release(release_date: NaiveDate, today: NaiveDate) -> bool {
    (today - release_date).num_days() < NEW_RELEASE_WINDOW_DAYS
}

/// Badge shown on a card's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub color: &'static str,
}

pub const COLOR_PRIMARY: &str = "hsl(340deg 65% 47%)";
pub const COLOR_SECONDARY: &str = "hsl(240deg 60% 63%)";

pub fn badge_for(variant: Variant) -> Option<Badge> {
    match variant {
        Variant::OnSale => Some(Badge {
            label: "Sale",
            color: COLOR_PRIMARY,
        }),
        Variant::NewRelease => Some(Badge {
            label: "Just Released",
            color: COLOR_SECONDARY,
        }),
        Variant::Default => None,
    }
}
