use proptest::prelude::*;
use std::{collections::BTreeSet, ptr};
use xmla::prelude::*;

fn assert_round_trip<E: XmlaConstant>() {
    let dictionary = E::dictionary();

    for &constant in dictionary.values() {
        assert_eq!(dictionary.for_name(constant.xmla_name()), Some(constant));
        if constant.xmla_ordinal() != xmla::constant::NO_ORDINAL {
            assert_eq!(dictionary.for_ordinal(constant.xmla_ordinal()), Some(constant));
        }
    }
}

#[test]
fn every_constant_round_trips() {
    assert_round_trip::<Method>();
    assert_round_trip::<Access>();
    assert_round_trip::<AuthenticationMode>();
    assert_round_trip::<ProviderType>();
    assert_round_trip::<Format>();
    assert_round_trip::<AxisFormat>();
    assert_round_trip::<Content>();
    assert_round_trip::<MdxSupport>();
    assert_round_trip::<StateSupport>();
    assert_round_trip::<VisualMode>();
    assert_round_trip::<Updateable>();
    assert_round_trip::<Literal>();
    assert_round_trip::<DbType>();
    assert_round_trip::<Searchable>();
    assert_round_trip::<ColumnFlag>();
    assert_round_trip::<FontFlag>();
    assert_round_trip::<CubeType>();
    assert_round_trip::<CubeSource>();
    assert_round_trip::<Visibility>();
    assert_round_trip::<ActionType>();
    assert_round_trip::<CoordinateType>();
    assert_round_trip::<Invocation>();
    assert_round_trip::<TreeOp>();
    assert_round_trip::<Scope>();
    assert_round_trip::<FunctionOrigin>();
    assert_round_trip::<DimensionType>();
    assert_round_trip::<HierarchyStructure>();
    assert_round_trip::<HierarchyOrigin>();
    assert_round_trip::<LevelType>();
    assert_round_trip::<MemberType>();
    assert_round_trip::<MeasureAggregator>();
    assert_round_trip::<PropertyType>();
    assert_round_trip::<PropertyContentType>();
    assert_round_trip::<RowsetDefinition>();
}

#[test]
fn registered_enumerations_round_trip_through_the_erased_view() {
    for enumeration in xmla::schema::enumeration::ALL {
        let dictionary = enumeration.dictionary();
        let infos = dictionary.infos();

        assert!(!infos.is_empty(), "{enumeration} has no values");
        for info in infos {
            assert_eq!(dictionary.info_for_name(info.name), Some(info), "{enumeration}");
        }
    }
}

#[test]
fn values_are_complete_and_in_declaration_order() {
    let values = TreeOp::dictionary().values();

    assert_eq!(values, TreeOp::ALL);
    assert_eq!(values.len(), values.iter().collect::<BTreeSet<_>>().len());
    assert!(ptr::eq(values, TreeOp::dictionary().values()));
    assert_eq!(values.first().map(|c| c.xmla_name()), Some("MDTREEOP_ANCESTORS"));
}

#[test]
fn mask_is_a_bit_test() {
    let dictionary = FontFlag::dictionary();

    assert_eq!(
        dictionary.for_mask(5),
        BTreeSet::from([FontFlag::Bold, FontFlag::Underline])
    );
    assert!(dictionary.for_mask(0).is_empty());
}

#[test]
fn unknown_codes_are_absent() {
    assert_eq!(DbType::dictionary().for_ordinal(9999), None);
    assert_eq!(DbType::dictionary().for_name("DBTYPE_NOPE"), None);
    assert_eq!(Visibility::dictionary().for_name("visible"), None);
}

proptest! {
    #[test]
    fn disjoint_masks_round_trip(
        flags in prop::sample::subsequence(ActionType::ALL.to_vec(), 0..=ActionType::ALL.len())
    ) {
        let dictionary = ActionType::dictionary();
        let set: BTreeSet<_> = flags.into_iter().collect();

        prop_assert_eq!(dictionary.for_mask(dictionary.to_mask(set.iter().copied())), set);
    }
}
