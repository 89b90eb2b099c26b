//! MDSCHEMA_FUNCTIONS.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::FUNCTION_ORIGIN,
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Functions
    ///
    pub struct Functions {
        pub function_name: Column,
        pub description: Column,
        pub parameter_list: Column,
        pub return_type: Column,
        pub origin: Column,
        pub interface_name: Column,
        pub library_name: Column,
        pub dll_name: Column,
        pub help_file: Column,
        pub help_context: Column,
        pub object: Column,
        pub caption: Column,
    }
}

pub static FUNCTIONS: Functions = Functions {
    function_name: Column::new(
        "FUNCTION_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the function."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    parameter_list: Column::new(
        "PARAMETER_LIST",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A comma delimited list of parameters."),
    ),
    return_type: Column::new(
        "RETURN_TYPE",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The VARTYPE of the return data type of the function."),
    ),
    origin: Column::new(
        "ORIGIN",
        ColumnType::enumerated(WireType::Integer, &FUNCTION_ORIGIN),
        Restriction::Optional,
        Presence::Required,
        Some("The origin of the function: 1 for MDX functions, 2 for user-defined functions."),
    ),
    interface_name: Column::new(
        "INTERFACE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the interface for user-defined functions."),
    ),
    library_name: Column::new(
        "LIBRARY_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the type library for user-defined functions. NULL for MDX functions."),
    ),
    dll_name: Column::new(
        "DLL_NAME",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The name of the assembly that implements the user-defined function."),
    ),
    help_file: Column::new(
        "HELP_FILE",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The name of the file that contains the help documentation for the \
             user-defined function."),
    ),
    help_context: Column::new(
        "HELP_CONTEXT",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Returns the Help context ID for this function."),
    ),
    object: Column::new(
        "OBJECT",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The generic name of the object class to which a property applies."),
    ),
    caption: Column::new(
        "CAPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The display caption for the function."),
    ),
};

impl Entity for Functions {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaFunctions
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.function_name,
            &self.description,
            &self.parameter_list,
            &self.return_type,
            &self.origin,
            &self.interface_name,
            &self.library_name,
            &self.dll_name,
            &self.help_file,
            &self.help_context,
            &self.object,
            &self.caption,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.library_name,
            &self.interface_name,
            &self.function_name,
            &self.origin,
        ])
    }
}
