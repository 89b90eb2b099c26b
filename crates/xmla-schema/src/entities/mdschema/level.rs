//! MDSCHEMA_LEVELS.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, DB_TYPE, LEVEL_TYPE, VISIBILITY},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Levels
    ///
    pub struct Levels {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub dimension_unique_name: Column,
        pub hierarchy_unique_name: Column,
        pub level_name: Column,
        pub level_unique_name: Column,
        pub level_guid: Column,
        pub level_caption: Column,
        pub level_number: Column,
        pub level_cardinality: Column,
        pub level_type: Column,
        pub description: Column,
        pub custom_rollup_settings: Column,
        pub level_unique_settings: Column,
        pub level_is_visible: Column,
        pub level_ordering_property: Column,
        pub level_dbtype: Column,
        pub level_master_unique_name: Column,
        pub level_key_cardinality: Column,
        pub level_origin: Column,
        pub cube_source: Column,
        pub level_visibility: Column,
    }
}

pub static LEVELS: Levels = Levels {
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
    dimension_unique_name: Column::new(
        "DIMENSION_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The unique name of the dimension."),
    ),
    hierarchy_unique_name: Column::new(
        "HIERARCHY_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The unique name of the hierarchy."),
    ),
    level_name: Column::new(
        "LEVEL_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the level."),
    ),
    level_unique_name: Column::new(
        "LEVEL_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The unique name of the level."),
    ),
    level_guid: Column::new(
        "LEVEL_GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Level GUID."),
    ),
    level_caption: Column::new(
        "LEVEL_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A label or caption associated with the level."),
    ),
    level_number: Column::new(
        "LEVEL_NUMBER",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The distance of the level from the root of the hierarchy. Root level is zero (0)."),
    ),
    level_cardinality: Column::new(
        "LEVEL_CARDINALITY",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The number of members in the level. This value can be an approximation \
             of the real cardinality."),
    ),
    level_type: Column::new(
        "LEVEL_TYPE",
        ColumnType::enumerated(WireType::Integer, &LEVEL_TYPE),
        Restriction::NotARestriction,
        Presence::Required,
        Some("Type of the level."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    custom_rollup_settings: Column::new(
        "CUSTOM_ROLLUP_SETTINGS",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A bitmap that specifies the custom rollup options."),
    ),
    level_unique_settings: Column::new(
        "LEVEL_UNIQUE_SETTINGS",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A bitmap that specifies which columns contain unique values, if the \
             level only has members with unique names or keys."),
    ),
    level_is_visible: Column::new(
        "LEVEL_IS_VISIBLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A Boolean that indicates whether the level is visible."),
    ),
    level_ordering_property: Column::new(
        "LEVEL_ORDERING_PROPERTY",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The ID of the attribute that the level is sorted on."),
    ),
    level_dbtype: Column::new(
        "LEVEL_DBTYPE",
        ColumnType::enumerated(WireType::Integer, &DB_TYPE),
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The DBTYPE enumeration of the member key column that is used for the \
             level attribute."),
    ),
    level_master_unique_name: Column::new(
        "LEVEL_MASTER_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Always returns NULL."),
    ),
    level_key_cardinality: Column::new(
        "LEVEL_KEY_CARDINALITY",
        ColumnType::UNSIGNED_SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The number of columns in the level key."),
    ),
    level_origin: Column::new(
        "LEVEL_ORIGIN",
        ColumnType::UNSIGNED_SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A bit map that defines how the level was sourced."),
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
    level_visibility: Column::new(
        "LEVEL_VISIBILITY",
        ColumnType::enumerated(WireType::UnsignedShort, &VISIBILITY),
        Restriction::OptionalWithDefault {
            enumeration: &VISIBILITY,
            default: "VISIBLE",
        },
        Presence::Optional,
        None,
    ),
};

impl Entity for Levels {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaLevels
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_unique_name,
            &self.level_name,
            &self.level_unique_name,
            &self.level_guid,
            &self.level_caption,
            &self.level_number,
            &self.level_cardinality,
            &self.level_type,
            &self.description,
            &self.custom_rollup_settings,
            &self.level_unique_settings,
            &self.level_is_visible,
            &self.level_ordering_property,
            &self.level_dbtype,
            &self.level_master_unique_name,
            &self.level_key_cardinality,
            &self.level_origin,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_unique_name,
            &self.level_number,
        ])
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_unique_name,
            &self.level_name,
            &self.level_unique_name,
            &self.cube_source,
            &self.level_visibility,
        ])
    }
}
