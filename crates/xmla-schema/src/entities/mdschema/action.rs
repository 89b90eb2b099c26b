//! MDSCHEMA_ACTIONS.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{ACTION_TYPE, COORDINATE_TYPE, INVOCATION},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Actions
    ///
    pub struct Actions {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub action_name: Column,
        pub action_type: Column,
        pub coordinate: Column,
        pub coordinate_type: Column,
        pub action_caption: Column,
        pub description: Column,
        pub content: Column,
        pub application: Column,
        pub invocation: Column,
    }
}

pub static ACTIONS: Actions = Actions {
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
    action_name: Column::new(
        "ACTION_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the action."),
    ),
    action_type: Column::new(
        "ACTION_TYPE",
        ColumnType::enumerated(WireType::Integer, &ACTION_TYPE),
        Restriction::Optional,
        Presence::Required,
        Some("A bitmap that specifies the triggering method of the action."),
    ),
    coordinate: Column::new(
        "COORDINATE",
        ColumnType::STRING,
        Restriction::Required,
        Presence::Required,
        Some("An MDX expression identifying the object the action is defined on."),
    ),
    coordinate_type: Column::new(
        "COORDINATE_TYPE",
        ColumnType::enumerated(WireType::Integer, &COORDINATE_TYPE),
        Restriction::Optional,
        Presence::Required,
        Some("The kind of object COORDINATE refers to."),
    ),
    action_caption: Column::new(
        "ACTION_CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The action caption if no translation was specified or found for the \
             language specified by the LCID restriction."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    content: Column::new(
        "CONTENT",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The expression or content of the action that is to be run."),
    ),
    application: Column::new(
        "APPLICATION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The name of the application that is to be used to run the action."),
    ),
    invocation: Column::new(
        "INVOCATION",
        ColumnType::enumerated(WireType::Integer, &INVOCATION),
        Restriction::Optional,
        Presence::Required,
        Some("Information about how the action should be invoked."),
    ),
};

impl Entity for Actions {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaActions
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.action_name,
            &self.action_type,
            &self.coordinate,
            &self.coordinate_type,
            &self.action_caption,
            &self.description,
            &self.content,
            &self.application,
            &self.invocation,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.schema_name,
            &self.cube_name,
            &self.action_name,
        ])
    }
}
