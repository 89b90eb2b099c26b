//! MDSCHEMA_PROPERTIES.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, DB_TYPE, PROPERTY_CONTENT_TYPE, PROPERTY_TYPE, VISIBILITY},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Properties
    ///
    pub struct Properties {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub dimension_unique_name: Column,
        pub hierarchy_unique_name: Column,
        pub level_unique_name: Column,
        pub member_unique_name: Column,
        pub property_type: Column,
        pub property_name: Column,
        pub property_caption: Column,
        pub data_type: Column,
        pub character_maximum_length: Column,
        pub character_octet_length: Column,
        pub numeric_precision: Column,
        pub numeric_scale: Column,
        pub description: Column,
        pub property_content_type: Column,
        pub property_cardinality: Column,
        pub property_is_visible: Column,
        pub cube_source: Column,
        pub property_visibility: Column,
    }
}

pub static PROPERTIES: Properties = Properties {
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
        Presence::Optional,
        Some("The name of the cube."),
    ),
    dimension_unique_name: Column::new(
        "DIMENSION_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The unique name of the dimension."),
    ),
    hierarchy_unique_name: Column::new(
        "HIERARCHY_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The unique name of the hierarchy."),
    ),
    level_unique_name: Column::new(
        "LEVEL_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The unique name of the level to which this property belongs."),
    ),
    member_unique_name: Column::new(
        "MEMBER_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The unique name of the member to which the property belongs."),
    ),
    property_type: Column::new(
        "PROPERTY_TYPE",
        ColumnType::enumerated(WireType::Short, &PROPERTY_TYPE),
        Restriction::Optional,
        Presence::Optional,
        Some("A bitmap that specifies the type of the property."),
    ),
    property_name: Column::new(
        "PROPERTY_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("Name of the property."),
    ),
    property_caption: Column::new(
        "PROPERTY_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A label or caption associated with the property, used primarily for \
             display purposes."),
    ),
    data_type: Column::new(
        "DATA_TYPE",
        ColumnType::enumerated(WireType::UnsignedShort, &DB_TYPE),
        Restriction::NotARestriction,
        Presence::Required,
        Some("Data type of the property."),
    ),
    character_maximum_length: Column::new(
        "CHARACTER_MAXIMUM_LENGTH",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum possible length of the property, if it is a character, \
             binary, or bit type."),
    ),
    character_octet_length: Column::new(
        "CHARACTER_OCTET_LENGTH",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum possible length (in bytes) of the property, if it is a \
             character or binary type."),
    ),
    numeric_precision: Column::new(
        "NUMERIC_PRECISION",
        ColumnType::UNSIGNED_SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum precision of the property, if the measure object's data type \
             is exact numeric."),
    ),
    numeric_scale: Column::new(
        "NUMERIC_SCALE",
        ColumnType::SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The number of digits to the right of the decimal point, if the measure \
             object's type indicator is DBTYPE_NUMERIC or DBTYPE_DECIMAL."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    property_content_type: Column::new(
        "PROPERTY_CONTENT_TYPE",
        ColumnType::enumerated(WireType::Short, &PROPERTY_CONTENT_TYPE),
        Restriction::Optional,
        Presence::Optional,
        Some("The type of the property."),
    ),
    property_cardinality: Column::new(
        "PROPERTY_CARDINALITY",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The cardinality of the property. Possible values are ONE and MANY."),
    ),
    property_is_visible: Column::new(
        "PROPERTY_IS_VISIBLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the property is visible."),
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
    property_visibility: Column::new(
        "PROPERTY_VISIBILITY",
        ColumnType::enumerated(WireType::UnsignedShort, &VISIBILITY),
        Restriction::OptionalWithDefault {
            enumeration: &VISIBILITY,
            default: "VISIBLE",
        },
        Presence::Optional,
        None,
    ),
};

impl Entity for Properties {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaProperties
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_unique_name,
            &self.level_unique_name,
            &self.member_unique_name,
            &self.property_type,
            &self.property_name,
            &self.property_caption,
            &self.data_type,
            &self.character_maximum_length,
            &self.character_octet_length,
            &self.numeric_precision,
            &self.numeric_scale,
            &self.description,
            &self.property_content_type,
            &self.property_cardinality,
            &self.property_is_visible,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_unique_name,
            &self.level_unique_name,
            &self.member_unique_name,
            &self.property_name,
        ])
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_unique_name,
            &self.level_unique_name,
            &self.member_unique_name,
            &self.property_type,
            &self.property_name,
            &self.property_content_type,
            &self.cube_source,
            &self.property_visibility,
        ])
    }
}
