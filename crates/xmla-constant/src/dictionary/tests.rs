use super::*;
use crate::{
    olap::{LevelType, MeasureAggregator, PropertyContentType},
    xmla::{ActionType, AuthenticationMode, DbType, FontFlag, Literal, Method, TreeOp},
};
use proptest::prelude::*;
use std::{collections::BTreeSet, thread};

crate::xmla_constant! {
    /// Three single-bit flags and one combined code.
    enum Flag {
        A = (1, "FLAG_A", "first bit"),
        B = (2, "FLAG_B", "second bit"),
        C = (4, "FLAG_C", "third bit"),
        Ac = (5, "FLAG_AC", "first and third bits"),
    }
}

fn assert_round_trip<E: XmlaConstant>() {
    let dictionary = E::dictionary();

    for &value in dictionary.values() {
        assert_eq!(
            dictionary.for_name(value.xmla_name()),
            Some(value),
            "name lookup failed for {value:?}"
        );
        if value.xmla_ordinal() != NO_ORDINAL {
            assert_eq!(
                dictionary.for_ordinal(value.xmla_ordinal()),
                Some(value),
                "ordinal lookup failed for {value:?}"
            );
        }
    }
}

#[test]
fn lookups_round_trip_for_every_constant() {
    assert_round_trip::<DbType>();
    assert_round_trip::<TreeOp>();
    assert_round_trip::<ActionType>();
    assert_round_trip::<LevelType>();
    assert_round_trip::<MeasureAggregator>();
    assert_round_trip::<AuthenticationMode>();
    assert_round_trip::<PropertyContentType>();
}

#[test]
fn level_types_cover_every_family() {
    let dictionary = LevelType::dictionary();

    assert_eq!(dictionary.for_ordinal(0x2005), Some(LevelType::GeoCounty));
    assert_eq!(
        dictionary.for_name("MDLEVEL_TYPE_GEO_POINT"),
        Some(LevelType::GeoPoint)
    );
    assert_eq!(dictionary.for_ordinal(0x1011), Some(LevelType::OrgUnit));
    assert_eq!(dictionary.for_ordinal(0x1023), Some(LevelType::CustomerHousehold));
    assert_eq!(dictionary.for_ordinal(0x1052), Some(LevelType::CurrencyDestination));
    assert_eq!(dictionary.for_ordinal(0x1071), Some(LevelType::Promotion));
    assert_eq!(LevelType::ALL.len(), 41);
}

#[test]
fn property_content_types_cover_every_family() {
    let dictionary = PropertyContentType::dictionary();

    assert_eq!(
        dictionary.for_ordinal(0x24),
        Some(PropertyContentType::CaptionAbbreviation)
    );
    assert_eq!(dictionary.for_ordinal(0x42), Some(PropertyContentType::AddressStreet));
    assert_eq!(dictionary.for_ordinal(0x4D), Some(PropertyContentType::AddressPhone));
    assert_eq!(dictionary.for_ordinal(0x6A), Some(PropertyContentType::GeoBoundaryPolygon));
    assert_eq!(dictionary.for_ordinal(0x87), Some(PropertyContentType::PersonContact));
    assert_eq!(dictionary.for_ordinal(0x92), Some(PropertyContentType::QtyRangeHigh));
    assert_eq!(
        dictionary.for_name("MD_PROPTYPE_FORMATTING_SUB_TYPE").map(|v| v.xmla_ordinal()),
        Some(0xA6)
    );
    assert_eq!(dictionary.for_ordinal(0xC1), Some(PropertyContentType::Version));
    assert_eq!(dictionary.for_ordinal(0x51), None);
}

#[test]
fn values_follow_declaration_order() {
    let values = TreeOp::dictionary().values();

    assert_eq!(values, TreeOp::ALL);
    assert_eq!(values.first(), Some(&TreeOp::Ancestors));
    assert_eq!(values.len(), 6);

    let unique: BTreeSet<_> = values.iter().collect();
    assert_eq!(unique.len(), values.len());
}

#[test]
fn values_view_is_stable_across_calls() {
    let first = Method::dictionary().values();
    let second = Method::dictionary().values();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn for_class_returns_the_singleton() {
    assert!(std::ptr::eq(Dictionary::<DbType>::for_class(), DbType::dictionary()));
    assert_eq!(Dictionary::<DbType>::for_class().enum_name(), "DbType");
}

#[test]
fn hand_written_accessor_is_the_singleton_too() {
    assert!(std::ptr::eq(Dictionary::<Literal>::for_class(), Literal::dictionary()));
    assert_eq!(Literal::dictionary().values(), Literal::ALL);
}

#[test]
fn unknown_lookups_are_absent() {
    let dictionary = DbType::dictionary();

    assert_eq!(dictionary.for_name("DBTYPE_NOPE"), None);
    assert_eq!(dictionary.for_name("dbtype_i4"), None);
    assert_eq!(dictionary.for_ordinal(9999), None);
}

#[test]
fn missing_ordinals_are_not_indexed() {
    let dictionary = AuthenticationMode::dictionary();

    assert_eq!(dictionary.for_ordinal(NO_ORDINAL), None);
    assert_eq!(
        dictionary.for_name("Integrated"),
        Some(AuthenticationMode::Integrated)
    );
}

#[test]
fn mask_is_a_bit_test_not_an_exact_match() {
    let dictionary = Flag::dictionary();
    let found = dictionary.for_mask(5);

    // FLAG_AC shares bits with the mask, so it is part of the result too
    assert_eq!(found, BTreeSet::from([Flag::A, Flag::C, Flag::Ac]));
    assert_eq!(dictionary.for_mask(2), BTreeSet::from([Flag::B]));
    assert!(dictionary.for_mask(8).is_empty());
    assert!(dictionary.for_mask(0).is_empty());
}

#[test]
fn mask_over_single_bits_selects_exactly_the_set_bits() {
    let dictionary = FontFlag::dictionary();

    assert_eq!(
        dictionary.for_mask(5),
        BTreeSet::from([FontFlag::Bold, FontFlag::Underline])
    );
}

#[test]
fn mask_over_composite_codes_overlaps() {
    let found = LevelType::dictionary().for_mask(LevelType::Time.xmla_ordinal());

    assert!(found.contains(&LevelType::Time));
    assert!(found.contains(&LevelType::TimeYears));
    assert!(found.contains(&LevelType::TimeSeconds));
    assert!(!found.contains(&LevelType::Regular));
    assert!(!found.contains(&LevelType::All));
}

#[test]
fn mask_includes_constants_without_ordinal() {
    // -1 has every bit set
    let found = AuthenticationMode::dictionary().for_mask(1);

    assert_eq!(found.len(), AuthenticationMode::ALL.len());
}

#[test]
fn to_mask_ors_ordinals() {
    let dictionary = TreeOp::dictionary();

    assert_eq!(dictionary.to_mask([]), 0);
    assert_eq!(
        dictionary.to_mask([TreeOp::Children, TreeOp::Parent, TreeOp::SelfOp]),
        0x01 | 0x04 | 0x08
    );
}

#[test]
fn erased_view_matches_typed_view() {
    let erased: &dyn ConstantSet = ActionType::dictionary();

    assert_eq!(erased.enum_name(), "ActionType");
    assert_eq!(erased.infos().len(), ActionType::ALL.len());
    assert_eq!(
        erased.info_for_name("MDACTION_TYPE_URL"),
        Some(ConstantInfo::of(ActionType::Url))
    );
    assert_eq!(
        erased.info_for_ordinal(0x100).map(|info| info.name),
        Some("MDACTION_TYPE_DRILLTHROUGH")
    );
    assert_eq!(erased.info_for_ordinal(0x200), None);
}

#[test]
fn concurrent_first_access_builds_one_dictionary() {
    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| std::ptr::from_ref(MeasureAggregator::dictionary()) as usize))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("dictionary thread panicked"))
            .collect()
    });

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

fn arb_font_flags() -> impl Strategy<Value = BTreeSet<FontFlag>> {
    prop::sample::subsequence(FontFlag::ALL.to_vec(), 0..=FontFlag::ALL.len())
        .prop_map(|flags| flags.into_iter().collect())
}

fn arb_tree_ops() -> impl Strategy<Value = BTreeSet<TreeOp>> {
    prop::sample::subsequence(TreeOp::ALL.to_vec(), 0..=TreeOp::ALL.len())
        .prop_map(|ops| ops.into_iter().collect())
}

proptest! {
    #[test]
    fn single_bit_masks_round_trip(flags in arb_font_flags()) {
        let dictionary = FontFlag::dictionary();
        let mask = dictionary.to_mask(flags.iter().copied());

        prop_assert_eq!(dictionary.for_mask(mask), flags);
    }

    #[test]
    fn tree_op_masks_round_trip(ops in arb_tree_ops()) {
        let dictionary = TreeOp::dictionary();
        let mask = dictionary.to_mask(ops.iter().copied());

        prop_assert_eq!(dictionary.for_mask(mask), ops);
    }
}
