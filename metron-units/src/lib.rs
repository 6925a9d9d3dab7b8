//! Metron Units - Linear unit conversion within a category
//!
//! A static catalog of units, each tagged with a category and a factor to
//! that category's base unit. Conversions go through the base unit, results
//! are rounded and trimmed for display, and a `Session` keeps the state a
//! UI shell needs consistent across edits.
//!
//! Categories:
//! - Distance (m, km, cm, mm, mi, yd, ft, in, nmi)
//! - Mass (kg, g, mg, t, lb, oz, st)
//!
//! Data flow: raw text -> [`parse`] -> [`convert`] -> [`format`] -> display.

mod category;
mod unit;
mod units;
mod selector;
mod convert;
mod parse;
mod format;
mod session;

pub use category::Category;
pub use unit::{Unit, ConversionError};
pub use units::{UnitRegistry, UNITS};
pub use selector::{default_pair, reconcile};
pub use convert::{convert, convert_checked};
pub use parse::{parse, parse_unit, ParseResult};
pub use format::{format, format_with, try_format};
pub use session::Session;

/// Categories a shell can offer, in presentation order
pub fn categories() -> Vec<Category> {
    UNITS.categories()
}

/// Units of a category, in catalog order
pub fn units_for(category: Category) -> Vec<&'static Unit> {
    UNITS.list_units(category)
}

/// Start a session on `category` with its default unit pair
pub fn create_session(category: Category) -> Session {
    Session::new(category)
}
