//! Declarative XMLA schema rowset catalog.
//!
//! Each schema rowset is an [`Entity`](entity::Entity): a static struct whose
//! public fields are the rowset's [`Column`](column::Column)s, plus the
//! explicit column order, sort key and restriction list the wire contract
//! requires. [`validate`] cross-checks the two views.

#[macro_use]
mod macros;

pub mod column;
pub mod entities;
pub mod entity;
pub mod enumeration;
pub mod naming;
pub mod rowset;
pub mod validate;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
        entity::{Entity, FieldTable},
        enumeration::Enumeration,
        naming::Naming,
        rowset::RowsetDefinition,
        validate::{CatalogError, CatalogIssue, EntityError},
    };
    pub use xmla_constant::prelude::*;
}
