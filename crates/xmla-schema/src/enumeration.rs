//! Registry of the named enumerations used by the column model.
//!
//! This is what DISCOVER_ENUMERATORS reports: one entry per enumeration, in
//! declaration order, each exposing the dictionary of its constants.

use crate::column::WireType;
use std::{fmt, ptr};
use xmla_constant::{ConstantInfo, ConstantSet, XmlaConstant, prelude::*};

///
/// Enumeration
///

pub struct Enumeration {
    pub name: &'static str,
    pub description: &'static str,
    pub wire_type: WireType,
    dictionary: fn() -> &'static dyn ConstantSet,
}

fn erased_dictionary<E: XmlaConstant>() -> &'static dyn ConstantSet {
    E::dictionary()
}

impl Enumeration {
    #[must_use]
    pub const fn new<E: XmlaConstant>(
        name: &'static str,
        description: &'static str,
        wire_type: WireType,
    ) -> Self {
        Self {
            name,
            description,
            wire_type,
            dictionary: erased_dictionary::<E>,
        }
    }

    #[must_use]
    pub fn dictionary(&self) -> &'static dyn ConstantSet {
        (self.dictionary)()
    }

    /// All constants of the enumeration, in declaration order.
    #[must_use]
    pub fn values(&self) -> Vec<ConstantInfo> {
        self.dictionary().infos()
    }

    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        ALL.iter().copied().find(|e| e.name == name)
    }

    /// Whether `self` is one of the entries of [`ALL`].
    #[must_use]
    pub fn is_registered(&self) -> bool {
        ALL.iter().any(|e| ptr::eq(*e, self))
    }
}

impl fmt::Debug for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enumeration")
            .field("name", &self.name)
            .field("wire_type", &self.wire_type)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

//
// protocol
//

pub static METHODS: Enumeration = Enumeration::new::<Method>(
    "Methods",
    "Set of methods for which a property is applicable for reading or writing.",
    WireType::Integer,
);

pub static ACCESS: Enumeration = Enumeration::new::<Access>(
    "Access",
    "The read/write behavior of a property.",
    WireType::Integer,
);

pub static AUTHENTICATION_MODE: Enumeration = Enumeration::new::<AuthenticationMode>(
    "AuthenticationMode",
    "Specification of what type of security mode the data source uses.",
    WireType::String,
);

pub static PROVIDER_TYPE: Enumeration = Enumeration::new::<ProviderType>(
    "ProviderType",
    "The types of data supported by the provider.",
    WireType::String,
);

pub static FORMATS: Enumeration = Enumeration::new::<Format>(
    "Formats",
    "Format of the result set returned by Execute.",
    WireType::String,
);

pub static AXIS_FORMATS: Enumeration = Enumeration::new::<AxisFormat>(
    "AxisFormats",
    "Layout of the axes of a multidimensional result set.",
    WireType::String,
);

pub static CONTENT: Enumeration = Enumeration::new::<Content>(
    "Content",
    "What a response carries: schema, data, both or neither.",
    WireType::String,
);

pub static MDX_SUPPORT: Enumeration = Enumeration::new::<MdxSupport>(
    "MDXSupport",
    "Level of MDX supported by the provider.",
    WireType::String,
);

pub static STATE_SUPPORT: Enumeration = Enumeration::new::<StateSupport>(
    "StateSupport",
    "Session support offered by the provider.",
    WireType::String,
);

pub static VISUAL_MODE: Enumeration = Enumeration::new::<VisualMode>(
    "VisualMode",
    "Whether visual totals are applied to query results.",
    WireType::Integer,
);

pub static UPDATEABLE: Enumeration = Enumeration::new::<Updateable>(
    "Updateable",
    "Whether and why a cell can or cannot be updated.",
    WireType::UnsignedInteger,
);

pub static LITERAL: Enumeration = Enumeration::new::<Literal>(
    "Literal",
    "Kinds of identifiers and literals in a text command.",
    WireType::String,
);

//
// data
//

pub static DB_TYPE: Enumeration = Enumeration::new::<DbType>(
    "DBTYPE",
    "OLE DB data type indicator.",
    WireType::UnsignedShort,
);

pub static SEARCHABLE: Enumeration = Enumeration::new::<Searchable>(
    "Searchable",
    "How a data type may be used in a WHERE clause.",
    WireType::Integer,
);

pub static COLUMN_FLAGS: Enumeration = Enumeration::new::<ColumnFlag>(
    "ColumnFlags",
    "Bitmask describing a table column.",
    WireType::UnsignedInteger,
);

pub static FONT_FLAGS: Enumeration = Enumeration::new::<FontFlag>(
    "FontFlags",
    "Bitmask of cell font effects.",
    WireType::Integer,
);

//
// rowset
//

pub static CUBE_TYPE: Enumeration =
    Enumeration::new::<CubeType>("CubeType", "The type of a cube.", WireType::String);

pub static CUBE_SOURCE: Enumeration = Enumeration::new::<CubeSource>(
    "CubeSource",
    "Bitmask selecting which kinds of cube are returned.",
    WireType::UnsignedShort,
);

pub static VISIBILITY: Enumeration = Enumeration::new::<Visibility>(
    "Visibility",
    "Bitmask selecting visible and/or hidden objects.",
    WireType::UnsignedShort,
);

pub static ACTION_TYPE: Enumeration = Enumeration::new::<ActionType>(
    "ActionType",
    "The kind of action string an action carries.",
    WireType::Integer,
);

pub static COORDINATE_TYPE: Enumeration = Enumeration::new::<CoordinateType>(
    "CoordinateType",
    "The kind of object an action applies to.",
    WireType::Integer,
);

pub static INVOCATION: Enumeration = Enumeration::new::<Invocation>(
    "Invocation",
    "When an action is invoked.",
    WireType::Integer,
);

pub static TREE_OP: Enumeration = Enumeration::new::<TreeOp>(
    "TREE_OP",
    "Bitmask of member relationships to return, relative to a given member.",
    WireType::Integer,
);

pub static SCOPE: Enumeration = Enumeration::new::<Scope>(
    "Scope",
    "Lifetime of a named set or calculated member.",
    WireType::Integer,
);

pub static FUNCTION_ORIGIN: Enumeration = Enumeration::new::<FunctionOrigin>(
    "FunctionOrigin",
    "Whether a function is built in or user defined.",
    WireType::Integer,
);

//
// metadata
//

pub static DIMENSION_TYPE: Enumeration = Enumeration::new::<DimensionType>(
    "DimensionType",
    "The type of a dimension.",
    WireType::Short,
);

pub static HIERARCHY_STRUCTURE: Enumeration = Enumeration::new::<HierarchyStructure>(
    "Structure",
    "The structure of a hierarchy.",
    WireType::Short,
);

pub static HIERARCHY_ORIGIN: Enumeration = Enumeration::new::<HierarchyOrigin>(
    "HierarchyOrigin",
    "Bitmask describing where a hierarchy comes from.",
    WireType::UnsignedShort,
);

pub static LEVEL_TYPE: Enumeration =
    Enumeration::new::<LevelType>("LevelType", "The type of a level.", WireType::Integer);

pub static MEMBER_TYPE: Enumeration =
    Enumeration::new::<MemberType>("MemberType", "The type of a member.", WireType::Integer);

pub static MEASURE_AGGREGATOR: Enumeration = Enumeration::new::<MeasureAggregator>(
    "MeasureAggregator",
    "How a measure is aggregated.",
    WireType::Integer,
);

pub static PROPERTY_TYPE: Enumeration = Enumeration::new::<PropertyType>(
    "PropertyType",
    "Bitmask classifying a property.",
    WireType::Short,
);

pub static PROPERTY_CONTENT_TYPE: Enumeration = Enumeration::new::<PropertyContentType>(
    "PropertyContentType",
    "The kind of content a property holds.",
    WireType::Short,
);

/// Every registered enumeration, in declaration order.
pub static ALL: &[&Enumeration] = &[
    &METHODS,
    &ACCESS,
    &AUTHENTICATION_MODE,
    &PROVIDER_TYPE,
    &FORMATS,
    &AXIS_FORMATS,
    &CONTENT,
    &MDX_SUPPORT,
    &STATE_SUPPORT,
    &VISUAL_MODE,
    &UPDATEABLE,
    &LITERAL,
    &DB_TYPE,
    &SEARCHABLE,
    &COLUMN_FLAGS,
    &FONT_FLAGS,
    &CUBE_TYPE,
    &CUBE_SOURCE,
    &VISIBILITY,
    &ACTION_TYPE,
    &COORDINATE_TYPE,
    &INVOCATION,
    &TREE_OP,
    &SCOPE,
    &FUNCTION_ORIGIN,
    &DIMENSION_TYPE,
    &HIERARCHY_STRUCTURE,
    &HIERARCHY_ORIGIN,
    &LEVEL_TYPE,
    &MEMBER_TYPE,
    &MEASURE_AGGREGATOR,
    &PROPERTY_TYPE,
    &PROPERTY_CONTENT_TYPE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = ALL.iter().map(|e| e.name).collect();

        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn every_enumeration_has_values() {
        for enumeration in ALL {
            assert!(
                !enumeration.values().is_empty(),
                "enumeration '{enumeration}' has no values"
            );
        }
    }

    #[test]
    fn lookup_by_name_returns_the_registered_static() {
        let found = Enumeration::by_name("TREE_OP").expect("TREE_OP is registered");

        assert!(ptr::eq(found, &TREE_OP));
        assert!(found.is_registered());
        assert!(Enumeration::by_name("TreeOp").is_none());
    }

    #[test]
    fn exposes_the_backing_dictionary() {
        let dictionary = CUBE_TYPE.dictionary();

        assert_eq!(dictionary.enum_name(), "CubeType");
        assert_eq!(
            dictionary.info_for_name("DIMENSION").map(|info| info.ordinal),
            Some(2)
        );
    }

    #[test]
    fn unregistered_enumerations_are_detected() {
        static STRAY: Enumeration =
            Enumeration::new::<TreeOp>("TREE_OP", "copy of the registered one", WireType::Integer);

        assert!(!STRAY.is_registered());
    }
}
