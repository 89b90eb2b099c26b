use super::*;
use crate::enumeration::{CUBE_SOURCE, DB_TYPE, VISIBILITY};

static NAME: Column = Column::new(
    "NAME",
    ColumnType::STRING,
    Restriction::Required,
    Presence::Required,
    Some("A name."),
);

static SIZE: Column = Column::new(
    "SIZE",
    ColumnType::UNSIGNED_INTEGER,
    Restriction::NotARestriction,
    Presence::Optional,
    Some("A size."),
);

static SOURCE: Column = Column::new(
    "SOURCE",
    ColumnType::enumerated(WireType::UnsignedShort, &CUBE_SOURCE),
    Restriction::OptionalWithDefault {
        enumeration: &CUBE_SOURCE,
        default: "CUBE",
    },
    Presence::Optional,
    None,
);

#[test]
fn xsd_types_follow_the_wire_type() {
    assert_eq!(WireType::Integer.xsd_type(), Some("xsd:int"));
    assert_eq!(WireType::UnsignedShort.xsd_type(), Some("xsd:unsignedShort"));
    assert_eq!(WireType::StringArray.xsd_type(), Some("xsd:string"));
    assert_eq!(WireType::Rowset.xsd_type(), None);
}

#[test]
fn only_string_array_is_array_valued() {
    assert!(ColumnType::STRING_ARRAY.is_array());
    assert!(!ColumnType::STRING.is_array());
    assert!(!ColumnType::enumerated(WireType::Integer, &DB_TYPE).is_array());
}

#[test]
fn enumerated_types_carry_their_enumeration() {
    let ty = ColumnType::enumerated(WireType::UnsignedShort, &VISIBILITY);

    assert!(ty.is_enumerated());
    assert!(ty.enumeration.is_some_and(|e| ptr::eq(e, &VISIBILITY)));
    assert!(!ColumnType::BOOLEAN.is_enumerated());
}

#[test]
fn restriction_defaults_resolve_through_the_dictionary() {
    let info = SOURCE.restriction.default_value().expect("CUBE is a CubeSource");

    assert_eq!(info.name, "CUBE");
    assert_eq!(info.ordinal, 1);
    assert_eq!(NAME.restriction.default_value(), None);
}

#[test]
fn unresolvable_defaults_yield_none() {
    let restriction = Restriction::OptionalWithDefault {
        enumeration: &CUBE_SOURCE,
        default: "CUBES",
    };

    assert_eq!(restriction.default_value(), None);
}

#[test]
fn restriction_kinds() {
    assert!(!Restriction::NotARestriction.is_restriction());
    assert!(Restriction::Required.is_restriction());
    assert!(Restriction::Optional.is_restriction());
    assert!(SOURCE.is_restriction());
    assert_eq!(SOURCE.restriction.kind(), "optional-with-default");
}

#[test]
fn extension_marks_a_copy() {
    const PLAIN: Column = Column::new(
        "EXTRA",
        ColumnType::STRING,
        Restriction::NotARestriction,
        Presence::Optional,
        None,
    );
    const EXTENDED: Column = PLAIN.extension();

    assert!(!PLAIN.extension);
    assert!(EXTENDED.extension);
    assert_eq!(EXTENDED.name, "EXTRA");
    assert!(EXTENDED.is_nullable());
}

#[test]
fn lists_compare_columns_by_identity() {
    let twin = Column::new(
        "NAME",
        ColumnType::STRING,
        Restriction::Required,
        Presence::Required,
        Some("A name."),
    );
    let list = ColumnList::new(vec![&NAME, &SIZE]);

    assert!(list.contains(&NAME));
    assert!(!list.contains(&twin));
    assert!(!list.contains(&SOURCE));
}

#[test]
fn first_duplicate_is_reported_once_seen_twice() {
    let clean = ColumnList::new(vec![&NAME, &SIZE, &SOURCE]);
    let dirty = ColumnList::new(vec![&NAME, &SIZE, &SOURCE, &SIZE, &NAME]);

    assert!(clean.first_duplicate().is_none());
    assert!(dirty.first_duplicate().is_some_and(|c| ptr::eq(c, &SIZE)));
}

#[test]
fn restrictions_keep_list_order() {
    let list = ColumnList::new(vec![&SOURCE, &SIZE, &NAME]);

    assert_eq!(list.restrictions().names(), ["SOURCE", "NAME"]);
    assert!(list.find("SIZE").is_some_and(|c| ptr::eq(c, &SIZE)));
    assert!(list.find("size").is_none());
}
