//! MDSCHEMA_DIMENSIONS.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, DIMENSION_TYPE, VISIBILITY},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Dimensions
    ///
    pub struct Dimensions {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub dimension_name: Column,
        pub dimension_unique_name: Column,
        pub dimension_guid: Column,
        pub dimension_caption: Column,
        pub dimension_ordinal: Column,
        pub dimension_type: Column,
        pub dimension_cardinality: Column,
        pub default_hierarchy: Column,
        pub description: Column,
        pub is_virtual: Column,
        pub is_readwrite: Column,
        pub dimension_unique_settings: Column,
        pub dimension_master_unique_name: Column,
        pub dimension_is_visible: Column,
        pub hierarchies: Column,
        pub cube_source: Column,
        pub dimension_visibility: Column,
    }
}

pub static DIMENSIONS: Dimensions = Dimensions {
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
    dimension_name: Column::new(
        "DIMENSION_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the dimension."),
    ),
    dimension_unique_name: Column::new(
        "DIMENSION_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The unique name of the dimension."),
    ),
    dimension_guid: Column::new(
        "DIMENSION_GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Not supported."),
    ),
    dimension_caption: Column::new(
        "DIMENSION_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The caption of the dimension."),
    ),
    dimension_ordinal: Column::new(
        "DIMENSION_ORDINAL",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The position of the dimension within the cube."),
    ),
    dimension_type: Column::new(
        "DIMENSION_TYPE",
        ColumnType::enumerated(WireType::Short, &DIMENSION_TYPE),
        Restriction::NotARestriction,
        Presence::Required,
        Some("The type of the dimension."),
    ),
    dimension_cardinality: Column::new(
        "DIMENSION_CARDINALITY",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The number of members in the key attribute."),
    ),
    default_hierarchy: Column::new(
        "DEFAULT_HIERARCHY",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A hierarchy from the dimension. Preserved for backwards compatibility."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    is_virtual: Column::new(
        "IS_VIRTUAL",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Always FALSE."),
    ),
    is_readwrite: Column::new(
        "IS_READWRITE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the dimension is write-enabled."),
    ),
    dimension_unique_settings: Column::new(
        "DIMENSION_UNIQUE_SETTINGS",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A bitmap that specifies which columns contain unique values if the \
             dimension contains only members with unique names."),
    ),
    dimension_master_unique_name: Column::new(
        "DIMENSION_MASTER_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Always NULL."),
    ),
    dimension_is_visible: Column::new(
        "DIMENSION_IS_VISIBLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Always TRUE."),
    ),
    hierarchies: Column::new(
        "HIERARCHIES",
        ColumnType::ROWSET,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Hierarchies in this dimension."),
    )
    .extension(),
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
    dimension_visibility: Column::new(
        "DIMENSION_VISIBILITY",
        ColumnType::enumerated(WireType::UnsignedShort, &VISIBILITY),
        Restriction::OptionalWithDefault {
            enumeration: &VISIBILITY,
            default: "VISIBLE",
        },
        Presence::Optional,
        None,
    ),
};

impl Entity for Dimensions {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaDimensions
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_name,
            &self.dimension_unique_name,
            &self.dimension_guid,
            &self.dimension_caption,
            &self.dimension_ordinal,
            &self.dimension_type,
            &self.dimension_cardinality,
            &self.default_hierarchy,
            &self.description,
            &self.is_virtual,
            &self.is_readwrite,
            &self.dimension_unique_settings,
            &self.dimension_master_unique_name,
            &self.dimension_is_visible,
            &self.hierarchies,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_name,
        ])
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_name,
            &self.dimension_unique_name,
            &self.cube_source,
            &self.dimension_visibility,
        ])
    }
}
