//! MDSCHEMA_MEASUREGROUPS and MDSCHEMA_MEASURES.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, DB_TYPE, MEASURE_AGGREGATOR, VISIBILITY},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// MeasureGroups
    ///
    pub struct MeasureGroups {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub measuregroup_name: Column,
        pub description: Column,
        pub is_write_enabled: Column,
        pub measuregroup_caption: Column,
    }
}

pub static MEASURE_GROUPS: MeasureGroups = MeasureGroups {
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
    measuregroup_name: Column::new(
        "MEASUREGROUP_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the measure group."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    is_write_enabled: Column::new(
        "IS_WRITE_ENABLED",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the measure group is write-enabled."),
    ),
    measuregroup_caption: Column::new(
        "MEASUREGROUP_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A label or caption associated with the measure group."),
    ),
};

impl Entity for MeasureGroups {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaMeasureGroups
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.measuregroup_name,
            &self.description,
            &self.is_write_enabled,
            &self.measuregroup_caption,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.measuregroup_name,
        ])
    }
}

define_entity! {
    ///
    /// Measures
    ///
    pub struct Measures {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub measure_name: Column,
        pub measure_unique_name: Column,
        pub measure_caption: Column,
        pub measure_guid: Column,
        pub measure_aggregator: Column,
        pub data_type: Column,
        pub numeric_precision: Column,
        pub numeric_scale: Column,
        pub measure_units: Column,
        pub description: Column,
        pub expression: Column,
        pub measure_is_visible: Column,
        pub levels_list: Column,
        pub measuregroup_name: Column,
        pub measure_display_folder: Column,
        pub default_format_string: Column,
        pub cube_source: Column,
        pub measure_visibility: Column,
    }
}

pub static MEASURES: Measures = Measures {
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
    measure_name: Column::new(
        "MEASURE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the measure."),
    ),
    measure_unique_name: Column::new(
        "MEASURE_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The Unique name of the measure."),
    ),
    measure_caption: Column::new(
        "MEASURE_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A label or caption associated with the measure."),
    ),
    measure_guid: Column::new(
        "MEASURE_GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Measure GUID."),
    ),
    measure_aggregator: Column::new(
        "MEASURE_AGGREGATOR",
        ColumnType::enumerated(WireType::Integer, &MEASURE_AGGREGATOR),
        Restriction::NotARestriction,
        Presence::Required,
        Some("How a measure was derived."),
    ),
    data_type: Column::new(
        "DATA_TYPE",
        ColumnType::enumerated(WireType::UnsignedShort, &DB_TYPE),
        Restriction::NotARestriction,
        Presence::Required,
        Some("Data type of the measure."),
    ),
    numeric_precision: Column::new(
        "NUMERIC_PRECISION",
        ColumnType::UNSIGNED_SHORT,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The maximum precision of the column for numeric data types other than \
             DBTYPE_VARNUMERIC."),
    ),
    numeric_scale: Column::new(
        "NUMERIC_SCALE",
        ColumnType::SHORT,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The number of digits to the right of the decimal point for \
             DBTYPE_DECIMAL, DBTYPE_NUMERIC, DBTYPE_VARNUMERIC."),
    ),
    measure_units: Column::new(
        "MEASURE_UNITS",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Unit of measure."),
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
        Some("An expression for the member."),
    ),
    measure_is_visible: Column::new(
        "MEASURE_IS_VISIBLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A Boolean that always returns True. If the measure is not visible, it \
             will not be included in the schema rowset."),
    ),
    levels_list: Column::new(
        "LEVELS_LIST",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A string that always returns NULL."),
    ),
    measuregroup_name: Column::new(
        "MEASUREGROUP_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the measure group to which the measure belongs."),
    ),
    measure_display_folder: Column::new(
        "MEASURE_DISPLAY_FOLDER",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The path to be used when displaying the measure in the user interface."),
    ),
    default_format_string: Column::new(
        "DEFAULT_FORMAT_STRING",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The default format string for the measure."),
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
    measure_visibility: Column::new(
        "MEASURE_VISIBILITY",
        ColumnType::enumerated(WireType::UnsignedShort, &VISIBILITY),
        Restriction::OptionalWithDefault {
            enumeration: &VISIBILITY,
            default: "VISIBLE",
        },
        Presence::Optional,
        None,
    ),
};

impl Entity for Measures {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaMeasures
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.measure_name,
            &self.measure_unique_name,
            &self.measure_caption,
            &self.measure_guid,
            &self.measure_aggregator,
            &self.data_type,
            &self.numeric_precision,
            &self.numeric_scale,
            &self.measure_units,
            &self.description,
            &self.expression,
            &self.measure_is_visible,
            &self.levels_list,
            &self.measuregroup_name,
            &self.measure_display_folder,
            &self.default_format_string,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.measure_name,
        ])
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.measure_name,
            &self.measure_unique_name,
            &self.measuregroup_name,
            &self.cube_source,
            &self.measure_visibility,
        ])
    }
}
