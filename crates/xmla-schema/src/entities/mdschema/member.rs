//! MDSCHEMA_MEMBERS.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{CUBE_SOURCE, MEMBER_TYPE, TREE_OP},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Members
    ///
    pub struct Members {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub dimension_unique_name: Column,
        pub hierarchy_unique_name: Column,
        pub level_unique_name: Column,
        pub level_number: Column,
        pub member_ordinal: Column,
        pub member_name: Column,
        pub member_unique_name: Column,
        pub member_type: Column,
        pub member_guid: Column,
        pub member_caption: Column,
        pub children_cardinality: Column,
        pub parent_level: Column,
        pub parent_unique_name: Column,
        pub parent_count: Column,
        pub description: Column,
        pub expression: Column,
        pub member_key: Column,
        pub is_placeholdermember: Column,
        pub is_datamember: Column,
        pub depth: Column,
        pub cube_source: Column,
        pub tree_op: Column,
    }
}

pub static MEMBERS: Members = Members {
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
        Restriction::Required,
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
    level_unique_name: Column::new(
        "LEVEL_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The unique name of the level."),
    ),
    level_number: Column::new(
        "LEVEL_NUMBER",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::Optional,
        Presence::Required,
        Some("The distance of the member from the root of the hierarchy."),
    ),
    member_ordinal: Column::new(
        "MEMBER_ORDINAL",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Ordinal number of the member. Sort rank of the member when members of \
             this dimension are sorted in their natural sort order."),
    ),
    member_name: Column::new(
        "MEMBER_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the member."),
    ),
    member_unique_name: Column::new(
        "MEMBER_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The unique name of the member."),
    ),
    member_type: Column::new(
        "MEMBER_TYPE",
        ColumnType::enumerated(WireType::Integer, &MEMBER_TYPE),
        Restriction::Optional,
        Presence::Required,
        Some("Type of the member."),
    ),
    member_guid: Column::new(
        "MEMBER_GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Member GUID."),
    ),
    member_caption: Column::new(
        "MEMBER_CAPTION",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("A label or caption associated with the member."),
    ),
    children_cardinality: Column::new(
        "CHILDREN_CARDINALITY",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Number of children that the member has."),
    ),
    parent_level: Column::new(
        "PARENT_LEVEL",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The distance of the member's parent from the root level of the hierarchy."),
    ),
    parent_unique_name: Column::new(
        "PARENT_UNIQUE_NAME",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Unique name of the member's parent."),
    ),
    parent_count: Column::new(
        "PARENT_COUNT",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Number of parents that this member has."),
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
        Some("Expression"),
    ),
    member_key: Column::new(
        "MEMBER_KEY",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Value of the member's key column. Returns NULL if the member has a composite key."),
    ),
    is_placeholdermember: Column::new(
        "IS_PLACEHOLDERMEMBER",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Whether a placeholder member for an empty position in a dimension hierarchy."),
    ),
    is_datamember: Column::new(
        "IS_DATAMEMBER",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Whether the member is a data member."),
    ),
    depth: Column::new(
        "DEPTH",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The distance of the member from the root of its hierarchy, counting only \
             visible levels."),
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
    tree_op: Column::new(
        "TREE_OP",
        ColumnType::enumerated(WireType::Integer, &TREE_OP),
        Restriction::Optional,
        Presence::Optional,
        None,
    ),
};

impl Entity for Members {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaMembers
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.dimension_unique_name,
            &self.hierarchy_unique_name,
            &self.level_unique_name,
            &self.level_number,
            &self.member_ordinal,
            &self.member_name,
            &self.member_unique_name,
            &self.member_type,
            &self.member_guid,
            &self.member_caption,
            &self.children_cardinality,
            &self.parent_level,
            &self.parent_unique_name,
            &self.parent_count,
            &self.description,
            &self.expression,
            &self.member_key,
            &self.is_placeholdermember,
            &self.is_datamember,
            &self.depth,
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
            &self.level_number,
            &self.member_ordinal,
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
            &self.level_number,
            &self.member_name,
            &self.member_unique_name,
            &self.member_type,
            &self.member_caption,
            &self.cube_source,
            &self.tree_op,
        ])
    }
}
