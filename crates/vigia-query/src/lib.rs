//! # vigia-query
//!
//! Turns a free-text risk question into a [`StructuredRequest`].
//!
//! Every field has its own extractor and its own fallback, so interpretation
//! never fails:
//! - [`normalize`]: lowercase, diacritic-free canonical text
//! - [`extract_date`]: `DD/MM/YYYY`, `YYYY-MM-DD`, `D/M/YYYY`, else today
//! - [`AccidentMatcher`]: ordered whole-word keyword groups, else `colision`
//! - [`PlaceMatcher`]: ordered substring aliases, else `SANTIAGO / METROPOLITANA`
//!
//! [`QueryInterpreter`] composes them.
//!
//! [`StructuredRequest`]: vigia_core::StructuredRequest

mod accident;
mod date;
mod error;
mod interpreter;
mod normalize;
mod place;
pub mod tables;

pub use accident::{AccidentMatcher, extract_accident_type};
pub use date::{extract_date, extract_date_or};
pub use error::QueryError;
pub use interpreter::QueryInterpreter;
pub use normalize::normalize;
pub use place::{Location, PlaceMatcher, extract_comuna_region};
