// Service exports
pub mod catalog;

pub use catalog::{parse_catalog, CatalogError, CatalogStore};
