//! XMLA metadata catalog.
//!
//! This is the public meta-crate. Downstream servers depend on **xmla** only.
//!
//! It re-exports:
//!   - `xmla-constant`  (constant sets and their dictionaries)
//!   - `xmla-schema`    (columns, entities, enumerations, rowset definitions)
//!
//! and adds catalog-wide validation and a documentation export.

pub mod catalog;
pub mod doc;

pub use xmla_constant as constant;
pub use xmla_schema as schema;

use thiserror::Error as ThisError;
use xmla_schema::validate::CatalogError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        catalog::{entities, rowset},
        doc::CatalogDoc,
    };
    pub use xmla_schema::prelude::*;
}
