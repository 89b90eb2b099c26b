//! The DBSCHEMA rowsets inherited from OLE DB.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{COLUMN_FLAGS, DB_TYPE, SEARCHABLE},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Catalogs
    ///
    pub struct Catalogs {
        pub catalog_name: Column,
        pub description: Column,
        pub roles: Column,
        pub date_modified: Column,
    }
}

pub static CATALOGS: Catalogs = Catalogs {
    catalog_name: Column::new(
        "CATALOG_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("Catalog name. Cannot be NULL."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Human-readable description of the catalog."),
    ),
    roles: Column::new(
        "ROLES",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A comma delimited list of roles to which the current user belongs. An \
             asterisk (*) is included as a role if the current user is a server or \
             database administrator. Username is appended to ROLES if one of the \
             roles uses dynamic security."),
    ),
    date_modified: Column::new(
        "DATE_MODIFIED",
        ColumnType::DATE_TIME,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The date that the catalog was last modified."),
    ),
};

impl Entity for Catalogs {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DbschemaCatalogs
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.catalog_name,
            &self.description,
            &self.roles,
            &self.date_modified,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![&self.catalog_name])
    }
}

define_entity! {
    ///
    /// Columns
    ///
    pub struct Columns {
        pub table_catalog: Column,
        pub table_schema: Column,
        pub table_name: Column,
        pub column_name: Column,
        pub ordinal_position: Column,
        pub column_has_default: Column,
        pub column_flags: Column,
        pub is_nullable: Column,
        pub data_type: Column,
        pub character_maximum_length: Column,
        pub character_octet_length: Column,
        pub numeric_precision: Column,
        pub numeric_scale: Column,
    }
}

pub static COLUMNS: Columns = Columns {
    table_catalog: Column::new(
        "TABLE_CATALOG",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the Database."),
    ),
    table_schema: Column::new(
        "TABLE_SCHEMA",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("Not supported."),
    ),
    table_name: Column::new(
        "TABLE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the cube."),
    ),
    column_name: Column::new(
        "COLUMN_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the attribute hierarchy or measure."),
    ),
    ordinal_position: Column::new(
        "ORDINAL_POSITION",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The position of the column, beginning with 1."),
    ),
    column_has_default: Column::new(
        "COLUMN_HAS_DEFAULT",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Not supported."),
    ),
    column_flags: Column::new(
        "COLUMN_FLAGS",
        ColumnType::enumerated(WireType::UnsignedInteger, &COLUMN_FLAGS),
        Restriction::NotARestriction,
        Presence::Required,
        Some("A DBCOLUMNFLAGS bitmask indicating column properties."),
    ),
    is_nullable: Column::new(
        "IS_NULLABLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Required,
        Some("Always returns false."),
    ),
    data_type: Column::new(
        "DATA_TYPE",
        ColumnType::enumerated(WireType::UnsignedShort, &DB_TYPE),
        Restriction::NotARestriction,
        Presence::Required,
        Some("The data type of the column. Returns a string for dimension columns and \
             a variant for measures."),
    ),
    character_maximum_length: Column::new(
        "CHARACTER_MAXIMUM_LENGTH",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum possible length of a value within the column."),
    ),
    character_octet_length: Column::new(
        "CHARACTER_OCTET_LENGTH",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum possible length of a value within the column, in bytes, for \
             character or binary columns."),
    ),
    numeric_precision: Column::new(
        "NUMERIC_PRECISION",
        ColumnType::UNSIGNED_SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum precision of the column for numeric data types other than \
             DBTYPE_VARNUMERIC."),
    ),
    numeric_scale: Column::new(
        "NUMERIC_SCALE",
        ColumnType::SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The number of digits to the right of the decimal point for \
             DBTYPE_DECIMAL, DBTYPE_NUMERIC, DBTYPE_VARNUMERIC. Otherwise, this is \
             NULL."),
    ),
};

impl Entity for Columns {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DbschemaColumns
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.table_catalog,
            &self.table_schema,
            &self.table_name,
            &self.column_name,
            &self.ordinal_position,
            &self.column_has_default,
            &self.column_flags,
            &self.is_nullable,
            &self.data_type,
            &self.character_maximum_length,
            &self.character_octet_length,
            &self.numeric_precision,
            &self.numeric_scale,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![&self.table_catalog, &self.table_schema, &self.table_name])
    }
}

define_entity! {
    ///
    /// ProviderTypes
    ///
    pub struct ProviderTypes {
        pub type_name: Column,
        pub data_type: Column,
        pub column_size: Column,
        pub literal_prefix: Column,
        pub literal_suffix: Column,
        pub create_params: Column,
        pub is_nullable: Column,
        pub case_sensitive: Column,
        pub searchable: Column,
        pub unsigned_attribute: Column,
        pub fixed_prec_scale: Column,
        pub auto_unique_value: Column,
        pub local_type_name: Column,
        pub minimum_scale: Column,
        pub maximum_scale: Column,
        pub guid: Column,
        pub typelib: Column,
        pub version: Column,
        pub is_long: Column,
        pub best_match: Column,
        pub is_fixedlength: Column,
    }
}

pub static PROVIDER_TYPES: ProviderTypes = ProviderTypes {
    type_name: Column::new(
        "TYPE_NAME",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The provider-specific data type name."),
    ),
    data_type: Column::new(
        "DATA_TYPE",
        ColumnType::enumerated(WireType::UnsignedShort, &DB_TYPE),
        Restriction::Optional,
        Presence::Required,
        Some("The indicator of the data type."),
    ),
    column_size: Column::new(
        "COLUMN_SIZE",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The length of a non-numeric column. If the data type is numeric, this is \
             the upper bound on the maximum precision of the data type."),
    ),
    literal_prefix: Column::new(
        "LITERAL_PREFIX",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The character or characters used to prefix a literal of this type in a text command."),
    ),
    literal_suffix: Column::new(
        "LITERAL_SUFFIX",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The character or characters used to suffix a literal of this type in a text command."),
    ),
    create_params: Column::new(
        "CREATE_PARAMS",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The creation parameters specified by the consumer when creating a column \
             of this data type."),
    ),
    is_nullable: Column::new(
        "IS_NULLABLE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the data type is nullable. NULL if it \
             is not known whether the data type is nullable."),
    ),
    case_sensitive: Column::new(
        "CASE_SENSITIVE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the data type is characters and \
             case-sensitive. NULL if not a character type."),
    ),
    searchable: Column::new(
        "SEARCHABLE",
        ColumnType::enumerated(WireType::UnsignedInteger, &SEARCHABLE),
        Restriction::NotARestriction,
        Presence::Optional,
        Some("An integer indicating how the data type can be used in searches if the \
             provider supports ICommandText."),
    ),
    unsigned_attribute: Column::new(
        "UNSIGNED_ATTRIBUTE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the data type is unsigned."),
    ),
    fixed_prec_scale: Column::new(
        "FIXED_PREC_SCALE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the data type has a fixed precision and scale."),
    ),
    auto_unique_value: Column::new(
        "AUTO_UNIQUE_VALUE",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the data type is autoincrementing."),
    ),
    local_type_name: Column::new(
        "LOCAL_TYPE_NAME",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The localized version of TYPE_NAME."),
    ),
    minimum_scale: Column::new(
        "MINIMUM_SCALE",
        ColumnType::SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("If the type indicator is DBTYPE_VARNUMERIC, DBTYPE_DECIMAL, or \
             DBTYPE_NUMERIC, the minimum number of digits allowed to the right of the \
             decimal point."),
    ),
    maximum_scale: Column::new(
        "MAXIMUM_SCALE",
        ColumnType::SHORT,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum number of digits allowed to the right of the decimal point."),
    ),
    guid: Column::new(
        "GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The GUID of the type, if the type is described in a type library."),
    ),
    typelib: Column::new(
        "TYPELIB",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The type library containing the description of this type."),
    ),
    version: Column::new(
        "VERSION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The version of the type definition."),
    ),
    is_long: Column::new(
        "IS_LONG",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the data type is a binary large object \
             (BLOB) and has very long data."),
    ),
    best_match: Column::new(
        "BEST_MATCH",
        ColumnType::BOOLEAN,
        Restriction::Optional,
        Presence::Optional,
        Some("A Boolean that indicates whether the data type is a best match."),
    ),
    is_fixedlength: Column::new(
        "IS_FIXEDLENGTH",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A Boolean that indicates whether the column is fixed in length."),
    ),
};

impl Entity for ProviderTypes {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DbschemaProviderTypes
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.type_name,
            &self.data_type,
            &self.column_size,
            &self.literal_prefix,
            &self.literal_suffix,
            &self.create_params,
            &self.is_nullable,
            &self.case_sensitive,
            &self.searchable,
            &self.unsigned_attribute,
            &self.fixed_prec_scale,
            &self.auto_unique_value,
            &self.local_type_name,
            &self.minimum_scale,
            &self.maximum_scale,
            &self.guid,
            &self.typelib,
            &self.version,
            &self.is_long,
            &self.best_match,
            &self.is_fixedlength,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![&self.data_type])
    }
}

define_entity! {
    ///
    /// Schemata
    ///
    pub struct Schemata {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub schema_owner: Column,
    }
}

pub static SCHEMATA: Schemata = Schemata {
    catalog_name: Column::new(
        "CATALOG_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the catalog that owns the schema."),
    ),
    schema_name: Column::new(
        "SCHEMA_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the schema."),
    ),
    schema_owner: Column::new(
        "SCHEMA_OWNER",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The user that owns the schema."),
    ),
};

impl Entity for Schemata {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DbschemaSchemata
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![&self.catalog_name, &self.schema_name, &self.schema_owner])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![&self.catalog_name, &self.schema_name, &self.schema_owner])
    }
}

define_entity! {
    ///
    /// Tables
    ///
    pub struct Tables {
        pub table_catalog: Column,
        pub table_schema: Column,
        pub table_name: Column,
        pub table_type: Column,
        pub table_guid: Column,
        pub description: Column,
        pub table_propid: Column,
        pub date_created: Column,
        pub date_modified: Column,
    }
}

pub static TABLES: Tables = Tables {
    table_catalog: Column::new(
        "TABLE_CATALOG",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the catalog to which this object belongs."),
    ),
    table_schema: Column::new(
        "TABLE_SCHEMA",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the cube to which this object belongs."),
    ),
    table_name: Column::new(
        "TABLE_NAME",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the object, if TABLE_TYPE is TABLE."),
    ),
    table_type: Column::new(
        "TABLE_TYPE",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The type of the table. TABLE indicates the object is a measure group. \
             SYSTEM TABLE indicates the object is a dimension."),
    ),
    table_guid: Column::new(
        "TABLE_GUID",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Not supported."),
    ),
    description: Column::new(
        "DESCRIPTION",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A human-readable description of the object."),
    ),
    table_propid: Column::new(
        "TABLE_PROPID",
        ColumnType::UNSIGNED_INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Not supported."),
    ),
    date_created: Column::new(
        "DATE_CREATED",
        ColumnType::DATE_TIME,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Not supported."),
    ),
    date_modified: Column::new(
        "DATE_MODIFIED",
        ColumnType::DATE_TIME,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The date the object was last modified."),
    ),
};

impl Entity for Tables {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DbschemaTables
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.table_catalog,
            &self.table_schema,
            &self.table_name,
            &self.table_type,
            &self.table_guid,
            &self.description,
            &self.table_propid,
            &self.date_created,
            &self.date_modified,
        ])
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.table_type,
            &self.table_catalog,
            &self.table_schema,
            &self.table_name,
        ])
    }
}
