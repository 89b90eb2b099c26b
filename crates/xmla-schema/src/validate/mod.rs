//! Entity self-consistency checks.
//!
//! An entity states its columns twice: once as struct fields and once as the
//! ordered lists it hands to the rowset layer. Checks run in a fixed order and
//! stop at the first violation:
//! 1. every field's identifier, under the entity's naming, is its wire name;
//! 2. fields and `columns() ∪ restriction_columns()` are the same set;
//! 3. every sort column is a field and a result column;
//! 4. no list holds a column twice;
//! 5. every restriction column is marked as a restriction and any default
//!    it declares resolves in its enumeration.

mod catalog;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogIssue, validate_catalog};

use crate::{
    column::{Column, ColumnList, Restriction},
    entity::Entity,
    rowset::RowsetDefinition,
};
use derive_more::Display;
use std::{collections::HashSet, ptr};
use thiserror::Error as ThisError;

///
/// ListKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ListKind {
    #[display("columns")]
    Columns,

    #[display("sort columns")]
    SortColumns,

    #[display("restriction columns")]
    RestrictionColumns,
}

///
/// EntityError
///

#[derive(Debug, ThisError)]
pub enum EntityError {
    #[error("{rowset}: field '{field}' holds column '{actual}' but its name implies '{expected}'")]
    FieldNameMismatch {
        rowset: RowsetDefinition,
        field: &'static str,
        expected: String,
        actual: &'static str,
    },

    #[error("{rowset}: field '{field}' (column '{column}') is neither a column nor a restriction")]
    UnlistedField {
        rowset: RowsetDefinition,
        field: &'static str,
        column: &'static str,
    },

    #[error("{rowset}: {list} include '{column}', which is not a field of the entity")]
    UndeclaredColumn {
        rowset: RowsetDefinition,
        list: ListKind,
        column: &'static str,
    },

    #[error("{rowset}: sort column '{column}' is not a result column")]
    SortColumnNotReturned {
        rowset: RowsetDefinition,
        column: &'static str,
    },

    #[error("{rowset}: {list} contain '{column}' more than once")]
    DuplicateColumn {
        rowset: RowsetDefinition,
        list: ListKind,
        column: &'static str,
    },

    #[error("{rowset}: restriction column '{column}' is not marked as a restriction")]
    NotARestriction {
        rowset: RowsetDefinition,
        column: &'static str,
    },

    #[error(
        "{rowset}: restriction '{column}' defaults to '{default}', which is not a value of '{enumeration}'"
    )]
    UnknownDefault {
        rowset: RowsetDefinition,
        column: &'static str,
        enumeration: &'static str,
        default: &'static str,
    },
}

impl EntityError {
    #[must_use]
    pub const fn rowset(&self) -> RowsetDefinition {
        match self {
            Self::FieldNameMismatch { rowset, .. }
            | Self::UnlistedField { rowset, .. }
            | Self::UndeclaredColumn { rowset, .. }
            | Self::SortColumnNotReturned { rowset, .. }
            | Self::DuplicateColumn { rowset, .. }
            | Self::NotARestriction { rowset, .. }
            | Self::UnknownDefault { rowset, .. } => *rowset,
        }
    }
}

type Identity = *const Column;

fn identities<'a>(columns: impl IntoIterator<Item = &'a Column>) -> HashSet<Identity> {
    columns.into_iter().map(ptr::from_ref).collect()
}

/// Run every check against `entity`, returning the first violation.
pub fn check_entity<E: Entity + ?Sized>(entity: &E) -> Result<(), EntityError> {
    let rowset = entity.def();
    let naming = entity.naming();
    let fields = entity.fields();
    let columns = entity.columns();
    let sort_columns = entity.sort_columns();
    let restriction_columns = entity.restriction_columns();

    // field identifiers
    for &(field, column) in &fields {
        let expected = naming.wire_name(field);
        if expected != column.name {
            return Err(EntityError::FieldNameMismatch {
                rowset,
                field,
                expected,
                actual: column.name,
            });
        }
    }

    // fields vs listed columns, both directions
    let declared = identities(fields.iter().map(|&(_, column)| column));
    let listed = identities(columns.iter().chain(restriction_columns.iter()).copied());

    for &(field, column) in &fields {
        if !listed.contains(&ptr::from_ref(column)) {
            return Err(EntityError::UnlistedField {
                rowset,
                field,
                column: column.name,
            });
        }
    }
    for (list, candidates) in [
        (ListKind::Columns, &columns),
        (ListKind::RestrictionColumns, &restriction_columns),
        (ListKind::SortColumns, &sort_columns),
    ] {
        if let Some(column) = first_undeclared(candidates, &declared) {
            return Err(EntityError::UndeclaredColumn {
                rowset,
                list,
                column: column.name,
            });
        }
    }

    // sort key
    if let Some(column) = sort_columns.iter().find(|column| !columns.contains(column)) {
        return Err(EntityError::SortColumnNotReturned {
            rowset,
            column: column.name,
        });
    }

    // duplicates
    for (list, candidates) in [
        (ListKind::Columns, &columns),
        (ListKind::SortColumns, &sort_columns),
        (ListKind::RestrictionColumns, &restriction_columns),
    ] {
        if let Some(column) = candidates.first_duplicate() {
            return Err(EntityError::DuplicateColumn {
                rowset,
                list,
                column: column.name,
            });
        }
    }

    // restrictions
    for column in &restriction_columns {
        check_restriction(rowset, column)?;
    }

    Ok(())
}

fn first_undeclared<'a>(
    candidates: &ColumnList<'a>,
    declared: &HashSet<Identity>,
) -> Option<&'a Column> {
    candidates
        .iter()
        .copied()
        .find(|column| !declared.contains(&ptr::from_ref(*column)))
}

fn check_restriction(rowset: RowsetDefinition, column: &Column) -> Result<(), EntityError> {
    match column.restriction {
        Restriction::NotARestriction => Err(EntityError::NotARestriction {
            rowset,
            column: column.name,
        }),
        Restriction::OptionalWithDefault {
            enumeration,
            default,
        } if column.restriction.default_value().is_none() => Err(EntityError::UnknownDefault {
            rowset,
            column: column.name,
            enumeration: enumeration.name,
            default,
        }),
        _ => Ok(()),
    }
}
