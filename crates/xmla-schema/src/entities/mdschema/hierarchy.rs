//! MDSCHEMA_HIERARCHIES.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, DIMENSION_TYPE, HIERARCHY_ORIGIN, HIERARCHY_STRUCTURE, VISIBILITY},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Hierarchies
    ///
    pub struct Hierarchies {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub dimension_unique_name: Column,
        pub hierarchy_name: Column,
        pub hierarchy_unique_name: Column,
        pub hierarchy_guid: Column,
        pub hierarchy_caption: Column,
        pub dimension_type: Column,
        pub hierarchy_cardinality: Column,
        pub default_member: Column,
        pub all_member: Column,
        pub description: Column,
        pub structure: Column,
        pub is_virtual: Column,
        pub is_readwrite: Column,
        pub dimension_unique_settings: Column,
        pub dimension_is_visible: Column,
        pub hierarchy_origin: Column,
        pub hierarchy_display_folder: Column,
        pub instance_selection: Column,
        pub hierarchy_ordinal: Column,
        pub dimension_is_shared: Column,
        pub hierarchy_is_visible: Column,
        pub parent_child: Column,
        pub levels: Column,
        pub cube_source: Column,
        pub hierarchy_visibility: Column,
    }
}

pub static HIERARCHIES: Hierarchies = Hierarchies {
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
    hierarchy_name: Column::new(
        "HIERARCHY_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the hierarchy. Blank if there is only a single hierarchy in \
             the dimension."),
    ),
    hierarchy_unique_name: Column::new(
        "HIERARCHY_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The unique name of the hierarchy."),
    ),
    hierarchy_guid: Column::new(
        "HIERARCHY_GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Hierarchy GUID."),
    ),
    hierarchy_caption: Column::new(
        "HIERARCHY_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A label or a caption associated with the hierarchy."),
    ),
    dimension_type: Column::new(
        "DIMENSION_TYPE",
        ColumnType::enumerated(WireType::Short, &DIMENSION_TYPE),
        Restriction::NotARestriction,
        Presence::Required,
        Some("The type of the dimension."),
    ),
    hierarchy_cardinality: Column::new(
        "HIERARCHY_CARDINALITY",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The number of members in the hierarchy."),
    ),
    default_member: Column::new(
        "DEFAULT_MEMBER",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The default member for this hierarchy."),
    ),
    all_member: Column::new(
        "ALL_MEMBER",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The member at the highest level of rollup in the hierarchy."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    structure: Column::new(
        "STRUCTURE",
        ColumnType::enumerated(WireType::Short, &HIERARCHY_STRUCTURE),
        Restriction::NotARestriction,
        Presence::Required,
        Some("The structure of the hierarchy."),
    ),
    is_virtual: Column::new(
        "IS_VIRTUAL",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Always returns False."),
    ),
    is_readwrite: Column::new(
        "IS_READWRITE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A Boolean that indicates whether the Write Back to dimension column is enabled."),
    ),
    dimension_unique_settings: Column::new(
        "DIMENSION_UNIQUE_SETTINGS",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Always returns MDDIMENSIONS_MEMBER_KEY_UNIQUE (1)."),
    ),
    dimension_is_visible: Column::new(
        "DIMENSION_IS_VISIBLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A Boolean that indicates whether the parent dimension is visible."),
    ),
    hierarchy_origin: Column::new(
        "HIERARCHY_ORIGIN",
        ColumnType::enumerated(WireType::UnsignedShort, &HIERARCHY_ORIGIN),
        Restriction::Optional,
        Presence::Optional,
        Some("A bit mask that determines the source of the hierarchy."),
    ),
    hierarchy_display_folder: Column::new(
        "HIERARCHY_DISPLAY_FOLDER",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The path to be used when displaying the hierarchy in the user interface."),
    ),
    instance_selection: Column::new(
        "INSTANCE_SELECTION",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A hint to the client application on how to show the hierarchy."),
    ),
    hierarchy_ordinal: Column::new(
        "HIERARCHY_ORDINAL",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The ordinal number of the hierarchy across all hierarchies of the cube."),
    ),
    dimension_is_shared: Column::new(
        "DIMENSION_IS_SHARED",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Always returns true."),
    ),
    hierarchy_is_visible: Column::new(
        "HIERARCHY_IS_VISIBLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the hierarchy is visible."),
    ),
    parent_child: Column::new(
        "PARENT_CHILD",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Is hierarchy a parent."),
    )
    .extension(),
    levels: Column::new(
        "LEVELS",
        ColumnType::ROWSET,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Levels in this hierarchy."),
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
    hierarchy_visibility: Column::new(
        "HIERARCHY_VISIBILITY",
        ColumnType::enumerated(WireType::UnsignedShort, &VISIBILITY),
        Restriction::OptionalWithDefault {
            enumeration: &VISIBILITY,
            default: "VISIBLE",
        },
        Presence::Optional,
        None,
    ),
};

impl Entity for Hierarchies {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaHierarchies
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_name,
            &self.hierarchy_unique_name,
            &self.hierarchy_guid,
            &self.hierarchy_caption,
            &self.dimension_type,
            &self.hierarchy_cardinality,
            &self.default_member,
            &self.all_member,
            &self.description,
            &self.structure,
            &self.is_virtual,
            &self.is_readwrite,
            &self.dimension_unique_settings,
            &self.dimension_is_visible,
            &self.hierarchy_origin,
            &self.hierarchy_display_folder,
            &self.instance_selection,
            &self.hierarchy_ordinal,
            &self.dimension_is_shared,
            &self.hierarchy_is_visible,
            &self.parent_child,
            &self.levels,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_name,
        ])
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_name,
            &self.hierarchy_unique_name,
            &self.hierarchy_origin,
            &self.cube_source,
            &self.hierarchy_visibility,
        ])
    }
}
