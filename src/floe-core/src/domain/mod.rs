//! Value domains and multi-column constraints.

#[allow(clippy::module_inception)]
mod domain;
mod range;
mod tuple;

pub use domain::Domain;
pub use range::ValueRange;
pub use tuple::TupleDomain;
