//! Catalog records: the [`CatalogObject`] envelope and the payloads it can carry.

mod attributes;
mod item;
mod object;
mod pricing;

pub use attributes::*;
pub use item::*;
pub use object::*;
pub use pricing::*;
