use crate::{
    entities::{dbschema, discover, mdschema},
    entity::Entity,
    naming::Naming,
};
use xmla_constant::xmla_constant;

xmla_constant! {
    ///
    /// RowsetDefinition
    ///
    /// The schema rowsets a Discover request can ask for. Each maps to exactly
    /// one entity describing its columns.
    ///
    pub enum RowsetDefinition {
        DiscoverDatasources = (
            0,
            "DISCOVER_DATASOURCES",
            "Returns a list of XML for Analysis data sources available on the server."
        ),
        DiscoverSchemaRowsets = (
            1,
            "DISCOVER_SCHEMA_ROWSETS",
            "Returns the names, values and other information of all supported request types."
        ),
        DiscoverEnumerators = (
            2,
            "DISCOVER_ENUMERATORS",
            "Returns a list of names, data types and enumeration values of enumerators supported by the provider."
        ),
        DiscoverProperties = (
            3,
            "DISCOVER_PROPERTIES",
            "Returns a list of information and values about the properties supported by the provider."
        ),
        DiscoverKeywords = (
            4,
            "DISCOVER_KEYWORDS",
            "Returns an XML list of keywords reserved by the provider."
        ),
        DiscoverLiterals = (
            5,
            "DISCOVER_LITERALS",
            "Returns information about literals supported by the provider."
        ),
        DbschemaCatalogs = (
            6,
            "DBSCHEMA_CATALOGS",
            "Identifies the physical attributes associated with catalogs accessible from the provider."
        ),
        DbschemaColumns = (
            7,
            "DBSCHEMA_COLUMNS",
            "Describes the columns of tables accessible from the provider."
        ),
        DbschemaProviderTypes = (
            8,
            "DBSCHEMA_PROVIDER_TYPES",
            "Describes the base data types supported by the provider."
        ),
        DbschemaSchemata = (
            9,
            "DBSCHEMA_SCHEMATA",
            "Identifies the schemas owned by a given user."
        ),
        DbschemaTables = (
            10,
            "DBSCHEMA_TABLES",
            "Describes the tables accessible from the provider."
        ),
        MdschemaActions = (
            11,
            "MDSCHEMA_ACTIONS",
            "Describes the actions that may be available to the client application."
        ),
        MdschemaCubes = (
            12,
            "MDSCHEMA_CUBES",
            "Describes the structure of cubes within a database."
        ),
        MdschemaDimensions = (
            13,
            "MDSCHEMA_DIMENSIONS",
            "Describes the shared and private dimensions within a database."
        ),
        MdschemaFunctions = (
            14,
            "MDSCHEMA_FUNCTIONS",
            "Returns information about the functions that are available to client applications."
        ),
        MdschemaHierarchies = (
            15,
            "MDSCHEMA_HIERARCHIES",
            "Describes each hierarchy within a particular dimension."
        ),
        MdschemaLevels = (
            16,
            "MDSCHEMA_LEVELS",
            "Describes each level within a particular hierarchy."
        ),
        MdschemaMeasureGroups = (
            17,
            "MDSCHEMA_MEASUREGROUPS",
            "Describes the measure groups within a database."
        ),
        MdschemaMeasures = (
            18,
            "MDSCHEMA_MEASURES",
            "Describes each measure within a cube."
        ),
        MdschemaMembers = (
            19,
            "MDSCHEMA_MEMBERS",
            "Describes the members within a database."
        ),
        MdschemaProperties = (
            20,
            "MDSCHEMA_PROPERTIES",
            "Describes the properties of members and cells."
        ),
        MdschemaSets = (
            21,
            "MDSCHEMA_SETS",
            "Describes any sets that are currently defined in a database, including session-scoped sets."
        ),
    }
}

impl RowsetDefinition {
    /// The entity describing this rowset's columns.
    #[must_use]
    pub fn entity(self) -> &'static dyn Entity {
        match self {
            Self::DiscoverDatasources => &discover::DATASOURCES,
            Self::DiscoverSchemaRowsets => &discover::SCHEMA_ROWSETS,
            Self::DiscoverEnumerators => &discover::ENUMERATORS,
            Self::DiscoverProperties => &discover::PROPERTIES,
            Self::DiscoverKeywords => &discover::KEYWORDS,
            Self::DiscoverLiterals => &discover::LITERALS,
            Self::DbschemaCatalogs => &dbschema::CATALOGS,
            Self::DbschemaColumns => &dbschema::COLUMNS,
            Self::DbschemaProviderTypes => &dbschema::PROVIDER_TYPES,
            Self::DbschemaSchemata => &dbschema::SCHEMATA,
            Self::DbschemaTables => &dbschema::TABLES,
            Self::MdschemaActions => &mdschema::ACTIONS,
            Self::MdschemaCubes => &mdschema::CUBES,
            Self::MdschemaDimensions => &mdschema::DIMENSIONS,
            Self::MdschemaFunctions => &mdschema::FUNCTIONS,
            Self::MdschemaHierarchies => &mdschema::HIERARCHIES,
            Self::MdschemaLevels => &mdschema::LEVELS,
            Self::MdschemaMeasureGroups => &mdschema::MEASURE_GROUPS,
            Self::MdschemaMeasures => &mdschema::MEASURES,
            Self::MdschemaMembers => &mdschema::MEMBERS,
            Self::MdschemaProperties => &mdschema::PROPERTIES,
            Self::MdschemaSets => &mdschema::SETS,
        }
    }

    /// Column naming convention. The DISCOVER rowsets use XMLA's own
    /// PascalCase names; every OLE DB derived rowset uses UPPER_SNAKE_CASE.
    #[must_use]
    pub const fn naming(self) -> Naming {
        match self {
            Self::DiscoverDatasources
            | Self::DiscoverSchemaRowsets
            | Self::DiscoverEnumerators
            | Self::DiscoverProperties
            | Self::DiscoverKeywords
            | Self::DiscoverLiterals => Naming::Core,
            _ => Naming::Olap,
        }
    }
}
