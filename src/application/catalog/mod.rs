mod catalog_service;
mod errors;

#[allow(unused_imports)]
pub use catalog_service::{BorrowOutcome, Catalog};
#[allow(unused_imports)]
pub use errors::{CatalogError, Result};
