//! Column descriptors.
//!
//! A `Column` carries no row data; it describes one attribute of a rowset.
//! Columns are compared by identity (address), never by value: two columns
//! with the same wire name in different entities are different columns.

#[cfg(test)]
mod tests;

use crate::enumeration::Enumeration;
use derive_more::{Deref, IntoIterator};
use serde::Serialize;
use std::{collections::HashSet, ptr};
use xmla_constant::ConstantInfo;

///
/// WireType
///
/// Primitive type of a column value as serialized in a rowset.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum WireType {
    Boolean,
    DateTime,
    Integer,
    Long,
    /// Nested tabular value.
    Rowset,
    Short,
    String,
    StringArray,
    UnsignedInteger,
    UnsignedLong,
    UnsignedShort,
    Uuid,
}

impl WireType {
    /// XML schema type of the column, or `None` for nested rowsets.
    #[must_use]
    pub const fn xsd_type(self) -> Option<&'static str> {
        match self {
            Self::Boolean => Some("xsd:boolean"),
            Self::DateTime => Some("xsd:dateTime"),
            Self::Integer => Some("xsd:int"),
            Self::Long => Some("xsd:long"),
            Self::Rowset => None,
            Self::Short => Some("xsd:short"),
            Self::String | Self::StringArray => Some("xsd:string"),
            Self::UnsignedInteger => Some("xsd:unsignedInt"),
            Self::UnsignedLong => Some("xsd:unsignedLong"),
            Self::UnsignedShort => Some("xsd:unsignedShort"),
            Self::Uuid => Some("uuid"),
        }
    }

    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::StringArray)
    }
}

///
/// ColumnType
///
/// Wire type plus, for enumeration-valued columns, the enumeration that
/// constrains the permissible values.
///

#[derive(Clone, Copy, Debug)]
pub struct ColumnType {
    pub wire: WireType,
    pub enumeration: Option<&'static Enumeration>,
}

impl ColumnType {
    pub const BOOLEAN: Self = Self::scalar(WireType::Boolean);
    pub const DATE_TIME: Self = Self::scalar(WireType::DateTime);
    pub const INTEGER: Self = Self::scalar(WireType::Integer);
    pub const LONG: Self = Self::scalar(WireType::Long);
    pub const ROWSET: Self = Self::scalar(WireType::Rowset);
    pub const SHORT: Self = Self::scalar(WireType::Short);
    pub const STRING: Self = Self::scalar(WireType::String);
    pub const STRING_ARRAY: Self = Self::scalar(WireType::StringArray);
    pub const UNSIGNED_INTEGER: Self = Self::scalar(WireType::UnsignedInteger);
    pub const UNSIGNED_LONG: Self = Self::scalar(WireType::UnsignedLong);
    pub const UNSIGNED_SHORT: Self = Self::scalar(WireType::UnsignedShort);
    pub const UUID: Self = Self::scalar(WireType::Uuid);

    #[must_use]
    pub const fn scalar(wire: WireType) -> Self {
        Self {
            wire,
            enumeration: None,
        }
    }

    #[must_use]
    pub const fn enumerated(wire: WireType, enumeration: &'static Enumeration) -> Self {
        Self {
            wire,
            enumeration: Some(enumeration),
        }
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.wire.is_array()
    }

    #[must_use]
    pub const fn is_enumerated(&self) -> bool {
        self.enumeration.is_some()
    }
}

///
/// Restriction
///
/// Whether, and how, a column may be used to filter a Discover request.
///

#[derive(Clone, Copy, Debug)]
pub enum Restriction {
    NotARestriction,

    /// Mandatory filter.
    Required,

    Optional,

    /// Optional filter with an implicit value when the caller supplies none.
    /// `default` is the wire name of a member of `enumeration`.
    OptionalWithDefault {
        enumeration: &'static Enumeration,
        default: &'static str,
    },
}

impl Restriction {
    #[must_use]
    pub const fn is_restriction(&self) -> bool {
        !matches!(self, Self::NotARestriction)
    }

    /// Resolve the implicit filter value, if this restriction has one.
    #[must_use]
    pub fn default_value(&self) -> Option<ConstantInfo> {
        match self {
            Self::OptionalWithDefault {
                enumeration,
                default,
            } => enumeration.dictionary().info_for_name(default),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotARestriction => "none",
            Self::Required => "required",
            Self::Optional => "optional",
            Self::OptionalWithDefault { .. } => "optional-with-default",
        }
    }
}

///
/// Presence
///
/// Whether a row always carries a value for the column.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Presence {
    Required,
    Optional,
}

///
/// Column
///

#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub restriction: Restriction,
    pub presence: Presence,

    /// `None` for restriction-only columns.
    pub description: Option<&'static str>,

    /// Not part of the XMLA standard; only affects generated documentation.
    pub extension: bool,
}

impl Column {
    #[must_use]
    pub const fn new(
        name: &'static str,
        ty: ColumnType,
        restriction: Restriction,
        presence: Presence,
        description: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            ty,
            restriction,
            presence,
            description,
            extension: false,
        }
    }

    /// Mark the column as a non-standard extension.
    #[must_use]
    pub const fn extension(mut self) -> Self {
        self.extension = true;
        self
    }

    #[must_use]
    pub const fn is_restriction(&self) -> bool {
        self.restriction.is_restriction()
    }

    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        matches!(self.presence, Presence::Optional)
    }
}

///
/// ColumnList
///
/// Ordered column references. Membership and duplicates are decided by
/// identity.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct ColumnList<'a>(Vec<&'a Column>);

impl<'a> ColumnList<'a> {
    #[must_use]
    pub const fn new(columns: Vec<&'a Column>) -> Self {
        Self(columns)
    }

    #[must_use]
    pub fn contains(&self, column: &Column) -> bool {
        self.0.iter().any(|c| ptr::eq(*c, column))
    }

    /// The first column that appears a second time, if any.
    #[must_use]
    pub fn first_duplicate(&self) -> Option<&'a Column> {
        let mut seen = HashSet::with_capacity(self.0.len());

        self.0
            .iter()
            .copied()
            .find(|column| !seen.insert(ptr::from_ref(*column)))
    }

    /// Columns usable as restrictions, in list order.
    #[must_use]
    pub fn restrictions(&self) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|column| column.is_restriction())
                .collect(),
        )
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'a Column> {
        self.0.iter().copied().find(|column| column.name == name)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(|column| column.name).collect()
    }
}

impl<'a> From<Vec<&'a Column>> for ColumnList<'a> {
    fn from(columns: Vec<&'a Column>) -> Self {
        Self(columns)
    }
}
