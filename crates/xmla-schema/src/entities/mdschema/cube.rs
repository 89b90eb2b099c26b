//! MDSCHEMA_CUBES.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, CUBE_TYPE},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Cubes
    ///
    pub struct Cubes {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub cube_type: Column,
        pub cube_guid: Column,
        pub created_on: Column,
        pub last_schema_update: Column,
        pub schema_updated_by: Column,
        pub last_data_update: Column,
        pub data_updated_by: Column,
        pub is_drillthrough_enabled: Column,
        pub is_write_enabled: Column,
        pub is_linkable: Column,
        pub is_sql_enabled: Column,
        pub cube_caption: Column,
        pub base_cube_name: Column,
        pub description: Column,
        pub dimensions: Column,
        pub sets: Column,
        pub measures: Column,
        pub cube_source: Column,
    }
}

pub static CUBES: Cubes = Cubes {
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
    cube_type: Column::new(
        "CUBE_TYPE",
        ColumnType::enumerated(WireType::String, &CUBE_TYPE),
        Restriction::Optional,
        Presence::Required,
        Some("Cube type."),
    ),
    cube_guid: Column::new(
        "CUBE_GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Cube GUID."),
    ),
    created_on: Column::new(
        "CREATED_ON",
        ColumnType::DATE_TIME,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Date and time of cube creation."),
    ),
    last_schema_update: Column::new(
        "LAST_SCHEMA_UPDATE",
        ColumnType::DATE_TIME,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Date and time of last schema update."),
    ),
    schema_updated_by: Column::new(
        "SCHEMA_UPDATED_BY",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("User ID of the person who last updated the schema."),
    ),
    last_data_update: Column::new(
        "LAST_DATA_UPDATE",
        ColumnType::DATE_TIME,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Date and time of last data update."),
    ),
    data_updated_by: Column::new(
        "DATA_UPDATED_BY",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("User ID of the person who last updated the data."),
    ),
    is_drillthrough_enabled: Column::new(
        "IS_DRILLTHROUGH_ENABLED",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Describes whether DRILLTHROUGH can be performed on the members of a cube."),
    ),
    is_write_enabled: Column::new(
        "IS_WRITE_ENABLED",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Describes whether a cube is write-enabled."),
    ),
    is_linkable: Column::new(
        "IS_LINKABLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Describes whether a cube can be used in a linked cube."),
    ),
    is_sql_enabled: Column::new(
        "IS_SQL_ENABLED",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Describes whether or not SQL can be used on the cube."),
    ),
    cube_caption: Column::new(
        "CUBE_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The caption of the cube."),
    ),
    base_cube_name: Column::new(
        "BASE_CUBE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the source cube if this cube is a perspective cube."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    dimensions: Column::new(
        "DIMENSIONS",
        ColumnType::ROWSET,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Dimensions in this cube."),
    )
    .extension(),
    sets: Column::new(
        "SETS",
        ColumnType::ROWSET,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Sets in this cube."),
    )
    .extension(),
    measures: Column::new(
        "MEASURES",
        ColumnType::ROWSET,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Measures in this cube."),
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
};

impl Entity for Cubes {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaCubes
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.cube_type,
            &self.cube_guid,
            &self.created_on,
            &self.last_schema_update,
            &self.schema_updated_by,
            &self.last_data_update,
            &self.data_updated_by,
            &self.is_drillthrough_enabled,
            &self.is_write_enabled,
            &self.is_linkable,
            &self.is_sql_enabled,
            &self.cube_caption,
            &self.base_cube_name,
            &self.description,
            &self.dimensions,
            &self.sets,
            &self.measures,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![&self.catalog_name, &self.schema_name, &self.cube_name])
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.cube_type,
            &self.base_cube_name,
            &self.cube_source,
        ])
    }
}
