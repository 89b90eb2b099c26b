//! The DISCOVER rowsets. Their columns use XMLA's own PascalCase names, so the
//! struct fields carry those identifiers verbatim.

use crate::{
    column::{Column, ColumnList, ColumnType, Presence, Restriction, WireType},
    entity::Entity,
    enumeration::{ACCESS, AUTHENTICATION_MODE, LITERAL, PROVIDER_TYPE},
    rowset::RowsetDefinition,
};

define_entity! {
    ///
    /// Datasources
    ///
    #[allow(non_snake_case)]
    pub struct Datasources {
        pub DataSourceName: Column,
        pub DataSourceDescription: Column,
        pub URL: Column,
        pub DataSourceInfo: Column,
        pub ProviderName: Column,
        pub ProviderType: Column,
        pub AuthenticationMode: Column,
    }
}

pub static DATASOURCES: Datasources = Datasources {
    DataSourceName: Column::new(
        "DataSourceName",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the data source, such as FoodMart 2000."),
    ),
    DataSourceDescription: Column::new(
        "DataSourceDescription",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A description of the data source, as entered by the publisher."),
    ),
    URL: Column::new(
        "URL",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The unique path that shows where to invoke the XML for Analysis methods \
             for that data source."),
    ),
    DataSourceInfo: Column::new(
        "DataSourceInfo",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A string containing any additional information required to connect to \
             the data source. This can include the Initial Catalog property or other \
             information for the provider."),
    ),
    ProviderName: Column::new(
        "ProviderName",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Optional,
        Some("The name of the provider behind the data source."),
    ),
    ProviderType: Column::new(
        "ProviderType",
        ColumnType::enumerated(WireType::StringArray, &PROVIDER_TYPE),
        Restriction::Required,
        Presence::Required,
        Some("The types of data supported by the provider."),
    ),
    AuthenticationMode: Column::new(
        "AuthenticationMode",
        ColumnType::enumerated(WireType::String, &AUTHENTICATION_MODE),
        Restriction::Required,
        Presence::Required,
        Some("Specification of what type of security mode the data source uses."),
    ),
};

impl Entity for Datasources {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DiscoverDatasources
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.DataSourceName,
            &self.DataSourceDescription,
            &self.URL,
            &self.DataSourceInfo,
            &self.ProviderName,
            &self.ProviderType,
            &self.AuthenticationMode,
        ])
    }
}

define_entity! {
    ///
    /// SchemaRowsets
    ///
    #[allow(non_snake_case)]
    pub struct SchemaRowsets {
        pub SchemaName: Column,
        pub SchemaGuid: Column,
        pub Restrictions: Column,
        pub Description: Column,
        pub RestrictionsMask: Column,
    }
}

pub static SCHEMA_ROWSETS: SchemaRowsets = SchemaRowsets {
    SchemaName: Column::new(
        "SchemaName",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the schema/request. This returns the values in the \
             RequestTypes enumeration, plus any additional types supported by the \
             provider."),
    ),
    SchemaGuid: Column::new(
        "SchemaGuid",
        ColumnType::UUID,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The GUID of the schema."),
    )
    .extension(),
    Restrictions: Column::new(
        "Restrictions",
        ColumnType::ROWSET,
        Restriction::NotARestriction,
        Presence::Required,
        Some("An array of the restrictions supported by provider."),
    ),
    Description: Column::new(
        "Description",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("A localizable description of the schema."),
    ),
    RestrictionsMask: Column::new(
        "RestrictionsMask",
        ColumnType::UNSIGNED_LONG,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A bitmask of the restrictions the schema supports."),
    )
    .extension(),
};

impl Entity for SchemaRowsets {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DiscoverSchemaRowsets
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.SchemaName,
            &self.SchemaGuid,
            &self.Restrictions,
            &self.Description,
            &self.RestrictionsMask,
        ])
    }
}

define_entity! {
    ///
    /// Enumerators
    ///
    #[allow(non_snake_case)]
    pub struct Enumerators {
        pub EnumName: Column,
        pub EnumDescription: Column,
        pub EnumType: Column,
        pub ElementName: Column,
        pub ElementDescription: Column,
        pub ElementValue: Column,
    }
}

pub static ENUMERATORS: Enumerators = Enumerators {
    EnumName: Column::new(
        "EnumName",
        ColumnType::STRING_ARRAY,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the enumerator that contains a set of values."),
    ),
    EnumDescription: Column::new(
        "EnumDescription",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A localizable description of the enumerator."),
    ),
    EnumType: Column::new(
        "EnumType",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The data type of the Enum values."),
    ),
    ElementName: Column::new(
        "ElementName",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Required,
        Some("The name of one of the value elements in the enumerator set."),
    ),
    ElementDescription: Column::new(
        "ElementDescription",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A localizable description of the element."),
    ),
    ElementValue: Column::new(
        "ElementValue",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The value of the element."),
    ),
};

impl Entity for Enumerators {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DiscoverEnumerators
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.EnumName,
            &self.EnumDescription,
            &self.EnumType,
            &self.ElementName,
            &self.ElementDescription,
            &self.ElementValue,
        ])
    }
}

define_entity! {
    ///
    /// Properties
    ///
    #[allow(non_snake_case)]
    pub struct Properties {
        pub PropertyName: Column,
        pub PropertyDescription: Column,
        pub PropertyType: Column,
        pub PropertyAccessType: Column,
        pub IsRequired: Column,
        pub Value: Column,
    }
}

pub static PROPERTIES: Properties = Properties {
    PropertyName: Column::new(
        "PropertyName",
        ColumnType::STRING_ARRAY,
        Restriction::Optional,
        Presence::Required,
        Some("The name of the property."),
    ),
    PropertyDescription: Column::new(
        "PropertyDescription",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("A localizable text description of the property."),
    ),
    PropertyType: Column::new(
        "PropertyType",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The XML data type of the property."),
    ),
    PropertyAccessType: Column::new(
        "PropertyAccessType",
        ColumnType::enumerated(WireType::String, &ACCESS),
        Restriction::NotARestriction,
        Presence::Required,
        Some("Access for the property. The value can be Read, Write, or ReadWrite."),
    ),
    IsRequired: Column::new(
        "IsRequired",
        ColumnType::BOOLEAN,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("True if a property is required, false if it is not required."),
    ),
    Value: Column::new(
        "Value",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The current value of the property."),
    ),
};

impl Entity for Properties {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DiscoverProperties
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.PropertyName,
            &self.PropertyDescription,
            &self.PropertyType,
            &self.PropertyAccessType,
            &self.IsRequired,
            &self.Value,
        ])
    }
}

define_entity! {
    ///
    /// Keywords
    ///
    #[allow(non_snake_case)]
    pub struct Keywords {
        pub Keyword: Column,
    }
}

pub static KEYWORDS: Keywords = Keywords {
    Keyword: Column::new(
        "Keyword",
        ColumnType::STRING,
        Restriction::Optional,
        Presence::Required,
        Some("A list of all the keywords reserved by a provider."),
    ),
};

impl Entity for Keywords {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DiscoverKeywords
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![&self.Keyword])
    }
}

define_entity! {
    ///
    /// Literals
    ///
    #[allow(non_snake_case)]
    pub struct Literals {
        pub LiteralName: Column,
        pub LiteralValue: Column,
        pub LiteralInvalidChars: Column,
        pub LiteralInvalidStartingChars: Column,
        pub LiteralMaxLength: Column,
        pub LiteralNameEnumValue: Column,
    }
}

pub static LITERALS: Literals = Literals {
    LiteralName: Column::new(
        "LiteralName",
        ColumnType::enumerated(WireType::StringArray, &LITERAL),
        Restriction::Optional,
        Presence::Required,
        Some("The name of the literal described in the row."),
    ),
    LiteralValue: Column::new(
        "LiteralValue",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("Contains the actual literal value."),
    ),
    LiteralInvalidChars: Column::new(
        "LiteralInvalidChars",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The characters, in the literal, that are not valid."),
    ),
    LiteralInvalidStartingChars: Column::new(
        "LiteralInvalidStartingChars",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The characters that are not valid as the first character of the literal."),
    ),
    LiteralMaxLength: Column::new(
        "LiteralMaxLength",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The maximum number of characters in the literal."),
    ),
    LiteralNameEnumValue: Column::new(
        "LiteralNameEnumValue",
        ColumnType::INTEGER,
        Restriction::NotARestriction,
        Presence::Optional,
        Some("The ordinal of the literal in the Literal enumeration."),
    )
    .extension(),
};

impl Entity for Literals {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::DiscoverLiterals
    }

    fn columns(&self) -> ColumnList<'_> {
        ColumnList::new(vec![
            &self.LiteralName,
            &self.LiteralValue,
            &self.LiteralInvalidChars,
            &self.LiteralInvalidStartingChars,
            &self.LiteralMaxLength,
            &self.LiteralNameEnumValue,
        ])
    }
}
