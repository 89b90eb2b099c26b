//! Documentation export.
//!
//! Flattens the catalog into plain serializable records: one per rowset and
//! one per registered enumeration. With the `json` feature the records render
//! to JSON.

use serde::Serialize;
use xmla_constant::{ConstantInfo, XmlaConstant};
use xmla_schema::{
    column::{Column, Presence, WireType},
    enumeration::{self, Enumeration},
    naming::Naming,
    rowset::RowsetDefinition,
};

///
/// CatalogDoc
///

#[derive(Clone, Debug, Serialize)]
pub struct CatalogDoc {
    pub rowsets: Vec<RowsetDoc>,
    pub enumerations: Vec<EnumerationDoc>,
}

impl CatalogDoc {
    #[must_use]
    pub fn rowset(&self, name: &str) -> Option<&RowsetDoc> {
        self.rowsets.iter().find(|rowset| rowset.name == name)
    }
}

///
/// RowsetDoc
///

#[derive(Clone, Debug, Serialize)]
pub struct RowsetDoc {
    pub name: &'static str,
    pub ordinal: i32,
    pub description: &'static str,
    pub naming: Naming,
    pub columns: Vec<ColumnDoc>,
    pub sort_columns: Vec<&'static str>,
    pub restrictions: Vec<ColumnDoc>,
}

///
/// ColumnDoc
///

#[derive(Clone, Debug, Serialize)]
pub struct ColumnDoc {
    pub name: &'static str,
    pub wire_type: WireType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xsd_type: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<&'static str>,

    pub restriction: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ConstantInfo>,

    pub presence: Presence,
    pub extension: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl From<&Column> for ColumnDoc {
    fn from(column: &Column) -> Self {
        Self {
            name: column.name,
            wire_type: column.ty.wire,
            xsd_type: column.ty.wire.xsd_type(),
            enumeration: column.ty.enumeration.map(|e| e.name),
            restriction: column.restriction.kind(),
            default: column.restriction.default_value(),
            presence: column.presence,
            extension: column.extension,
            description: column.description,
        }
    }
}

///
/// EnumerationDoc
///

#[derive(Clone, Debug, Serialize)]
pub struct EnumerationDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub wire_type: WireType,
    pub values: Vec<ConstantInfo>,
}

impl From<&Enumeration> for EnumerationDoc {
    fn from(enumeration: &Enumeration) -> Self {
        Self {
            name: enumeration.name,
            description: enumeration.description,
            wire_type: enumeration.wire_type,
            values: enumeration.values(),
        }
    }
}

fn rowset_doc(rowset: RowsetDefinition) -> RowsetDoc {
    let entity = rowset.entity();

    RowsetDoc {
        name: rowset.xmla_name(),
        ordinal: rowset.xmla_ordinal(),
        description: rowset.description(),
        naming: entity.naming(),
        columns: entity.columns().iter().map(|c| ColumnDoc::from(*c)).collect(),
        sort_columns: entity.sort_columns().names(),
        restrictions: entity
            .restriction_columns()
            .iter()
            .map(|c| ColumnDoc::from(*c))
            .collect(),
    }
}

/// Snapshot the whole catalog.
#[must_use]
pub fn catalog() -> CatalogDoc {
    let doc = CatalogDoc {
        rowsets: RowsetDefinition::ALL.iter().copied().map(rowset_doc).collect(),
        enumerations: enumeration::ALL
            .iter()
            .copied()
            .map(EnumerationDoc::from)
            .collect(),
    };
    tracing::debug!(
        rowsets = doc.rowsets.len(),
        enumerations = doc.enumerations.len(),
        "catalog documentation built"
    );

    doc
}

/// The catalog rendered as pretty-printed JSON.
#[cfg(feature = "json")]
pub fn to_json() -> Result<String, crate::Error> {
    let json = serde_json::to_string_pretty(&catalog())?;

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_restriction_only_columns() {
        let doc = catalog();
        let cubes = doc.rowset("MDSCHEMA_CUBES").expect("cubes rowset");

        assert!(cubes.columns.iter().all(|c| c.name != "CUBE_SOURCE"));

        let source = cubes
            .restrictions
            .iter()
            .find(|c| c.name == "CUBE_SOURCE")
            .expect("CUBE_SOURCE restriction");

        assert_eq!(source.restriction, "optional-with-default");
        assert_eq!(source.enumeration, Some("CubeSource"));
        assert_eq!(source.default.map(|d| d.ordinal), Some(1));
        assert_eq!(source.description, None);
    }

    #[test]
    fn core_rowsets_are_labelled() {
        let doc = catalog();

        assert_eq!(doc.rowset("DISCOVER_KEYWORDS").map(|r| r.naming), Some(Naming::Core));
        assert_eq!(doc.rowset("DBSCHEMA_TABLES").map(|r| r.naming), Some(Naming::Olap));
    }

    #[cfg(feature = "json")]
    #[test]
    fn naming_serializes_as_its_label() {
        let doc = catalog();
        let keywords = serde_json::to_value(doc.rowset("DISCOVER_KEYWORDS")).expect("rowset json");
        let cubes = serde_json::to_value(doc.rowset("MDSCHEMA_CUBES")).expect("rowset json");

        assert_eq!(keywords["naming"], "core");
        assert_eq!(cubes["naming"], "olap");
    }

    #[test]
    fn enumerations_carry_their_values() {
        let doc = catalog();
        let tree_op = doc
            .enumerations
            .iter()
            .find(|e| e.name == "TREE_OP")
            .expect("TREE_OP enumeration");

        assert_eq!(tree_op.wire_type, WireType::Integer);
        assert!(tree_op.values.iter().any(|v| v.name == "MDTREEOP_CHILDREN" && v.ordinal == 1));
    }
}
