use crate::{
    column::Restriction,
    enumeration,
    rowset::RowsetDefinition,
    validate::EntityError,
};
use thiserror::Error as ThisError;

///
/// CatalogIssue
///

#[derive(Debug, ThisError)]
pub enum CatalogIssue {
    #[error(transparent)]
    Entity(#[from] EntityError),

    #[error("rowset {rowset} resolves to the entity of {found}")]
    RowsetMismatch {
        rowset: RowsetDefinition,
        found: RowsetDefinition,
    },

    #[error("{rowset}.{column} uses enumeration '{enumeration}', which is not registered")]
    UnregisteredEnumeration {
        rowset: RowsetDefinition,
        column: &'static str,
        enumeration: &'static str,
    },

    #[error("enumeration '{enumeration}' has no values")]
    EmptyEnumeration { enumeration: &'static str },
}

///
/// CatalogError
///

#[derive(Debug, ThisError)]
#[error("catalog validation failed with {} issue(s): {}", .issues.len(), summary(.issues))]
pub struct CatalogError {
    pub issues: Vec<CatalogIssue>,
}

fn summary(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate the whole catalog, collecting every issue rather than the first.
pub fn validate_catalog() -> Result<(), CatalogError> {
    // Phase 1: each entity on its own.
    let mut issues = validate_entities();

    // Phase 2: catalog-wide invariants.
    validate_rowset_mapping(&mut issues);
    validate_enumerations(&mut issues);

    if issues.is_empty() {
        tracing::info!(
            rowsets = RowsetDefinition::ALL.len(),
            enumerations = enumeration::ALL.len(),
            "xmla catalog validated"
        );
        Ok(())
    } else {
        Err(CatalogError { issues })
    }
}

fn validate_entities() -> Vec<CatalogIssue> {
    RowsetDefinition::ALL
        .iter()
        .filter_map(|rowset| rowset.entity().check().err())
        .map(CatalogIssue::from)
        .collect()
}

// Every rowset resolves to an entity that names it back.
fn validate_rowset_mapping(issues: &mut Vec<CatalogIssue>) {
    for &rowset in RowsetDefinition::ALL {
        let found = rowset.entity().def();
        if found != rowset {
            issues.push(CatalogIssue::RowsetMismatch { rowset, found });
        }
    }
}

// Every enumeration a column binds is registered, and none is empty.
fn validate_enumerations(issues: &mut Vec<CatalogIssue>) {
    for &rowset in RowsetDefinition::ALL {
        for (_, column) in rowset.entity().fields() {
            let bound = [
                column.ty.enumeration,
                match column.restriction {
                    Restriction::OptionalWithDefault { enumeration, .. } => Some(enumeration),
                    _ => None,
                },
            ];

            for enumeration in bound.into_iter().flatten() {
                if !enumeration.is_registered() {
                    issues.push(CatalogIssue::UnregisteredEnumeration {
                        rowset,
                        column: column.name,
                        enumeration: enumeration.name,
                    });
                }
            }
        }
    }

    for enumeration in enumeration::ALL.iter().copied() {
        if enumeration.values().is_empty() {
            issues.push(CatalogIssue::EmptyEnumeration {
                enumeration: enumeration.name,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_consistent() {
        if let Err(err) = validate_catalog() {
            panic!("{err}");
        }
    }

    #[test]
    fn errors_summarize_every_issue() {
        let err = CatalogError {
            issues: vec![
                CatalogIssue::EmptyEnumeration { enumeration: "A" },
                CatalogIssue::RowsetMismatch {
                    rowset: RowsetDefinition::MdschemaCubes,
                    found: RowsetDefinition::MdschemaSets,
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "catalog validation failed with 2 issue(s): enumeration 'A' has no values; \
             rowset MDSCHEMA_CUBES resolves to the entity of MDSCHEMA_SETS"
        );
    }
}
