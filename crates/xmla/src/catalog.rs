//! Catalog-wide entry points.

use crate::Error;
use xmla_constant::XmlaConstant;
use xmla_schema::{entity::Entity, rowset::RowsetDefinition, validate};

/// Validate every entity and the cross-rowset invariants, reporting every
/// issue found.
pub fn validate() -> Result<(), Error> {
    validate::validate_catalog()?;

    Ok(())
}

/// Every rowset with its entity, in rowset ordinal order.
pub fn entities() -> impl Iterator<Item = (RowsetDefinition, &'static dyn Entity)> {
    RowsetDefinition::ALL
        .iter()
        .map(|&rowset| (rowset, rowset.entity()))
}

/// Resolve a rowset by its request type name, e.g. `MDSCHEMA_CUBES`.
#[must_use]
pub fn rowset(name: &str) -> Option<RowsetDefinition> {
    RowsetDefinition::dictionary().for_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_request_types() {
        assert_eq!(
            rowset("MDSCHEMA_LEVELS"),
            Some(RowsetDefinition::MdschemaLevels)
        );
        assert_eq!(rowset("mdschema_levels"), None);
        assert_eq!(rowset("MDSCHEMA_KPIS"), None);
    }

    #[test]
    fn lists_every_rowset_once() {
        let listed: Vec<_> = entities().map(|(rowset, _)| rowset).collect();

        assert_eq!(listed, RowsetDefinition::ALL);
    }
}
