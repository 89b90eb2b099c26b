//! MDSCHEMA_SETS.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, SCOPE},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Sets
    ///
    pub struct Sets {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub set_name: Column,
        pub scope: Column,
        pub description: Column,
        pub expression: Column,
        pub dimensions: Column,
        pub set_caption: Column,
        pub set_display_folder: Column,
        pub set_evaluation_context: Column,
        pub cube_source: Column,
        pub hierarchy_unique_name: Column,
    }
}

pub static SETS: Sets = Sets {
    catalog_name: Column::new(
        "CATALOG_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the catalog to which this object belongs."),
    ),
    schema_name: Column::new(
        "SCHEMA_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the schema to which this object belongs."),
    ),
    cube_name: Column::new(
        "CUBE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the cube to which this object belongs."),
    ),
    set_name: Column::new(
        "SET_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the set, as specified in the CREATE SET statement."),
    ),
    scope: Column::new(
        "SCOPE",
        ColumnType::enumerated(WireType::Integer, &SCOPE),
        Restriction::Optional,
        Presence::Required,
        Some("The scope of the set."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    expression: Column::new(
        "EXPRESSION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The expression for the set."),
    ),
    dimensions: Column::new(
        "DIMENSIONS",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A comma delimited list of hierarchies included in the set."),
    ),
    set_caption: Column::new(
        "SET_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A caption associated with the set."),
    ),
    set_display_folder: Column::new(
        "SET_DISPLAY_FOLDER",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The display folder."),
    ),
    set_evaluation_context: Column::new(
        "SET_EVALUATION_CONTEXT",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The context for the set: static or dynamic."),
    ),
    cube_source: Column::new(
        "CUBE_SOURCE",
        ColumnType::enumerated(WireType::UnsignedShort, &CUBE_SOURCE),
        Restriction::OptionalWithDefault {
            enumeration: &CUBE_SOURCE,
            default: "CUBE",
        },
        Presence::Optional,
        None,
    ),
    hierarchy_unique_name: Column::new(
        "HIERARCHY_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        None,
    ),
};

impl Entity for Sets {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaSets
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.set_name,
            &self.scope,
            &self.description,
            &self.expression,
            &self.dimensions,
            &self.set_caption,
            &self.set_display_folder,
            &self.set_evaluation_context,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.set_name,
        ])
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.set_name,
            &self.scope,
            &self.cube_source,
            &self.hierarchy_unique_name,
        ])
    }
}
