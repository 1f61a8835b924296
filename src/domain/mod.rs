pub mod format;
pub mod shoe;
pub mod variant;

pub use format::{format_price, pluralize};
pub use shoe::{Cents, ListingError, ShoeListing, ShoeRecord};
pub use variant::{badge_for, Variant};
