use std::{collections::HashSet, ptr};
use xmla::{
    catalog, doc,
    prelude::*,
    schema::entities::{discover, mdschema},
};

fn identities(list: &ColumnList<'_>) -> HashSet<*const Column> {
    list.iter().map(|c| ptr::from_ref(*c)).collect()
}

#[test]
fn catalog_validates() {
    catalog::validate().expect("shipped catalog is consistent");
}

#[test]
fn every_entity_is_valid() {
    for (rowset, entity) in catalog::entities() {
        assert!(entity.is_valid(false), "{rowset} is invalid");
        assert_eq!(entity.def(), rowset);
    }
}

#[test]
fn rowsets_map_one_to_one() {
    let entities: HashSet<_> = catalog::entities()
        .map(|(_, entity)| ptr::from_ref(entity).cast::<()>())
        .collect();

    assert_eq!(entities.len(), RowsetDefinition::ALL.len());
}

#[test]
fn naming_follows_the_rowset_family() {
    assert_eq!(mdschema::CUBES.catalog_name.name, "CATALOG_NAME");
    assert_eq!(mdschema::LEVELS.level_dbtype.name, "LEVEL_DBTYPE");
    assert_eq!(discover::KEYWORDS.Keyword.name, "Keyword");
    assert_eq!(discover::DATASOURCES.DataSourceName.name, "DataSourceName");
}

#[test]
fn restriction_columns_keep_declared_order() {
    let names = mdschema::FUNCTIONS.restriction_columns().names();

    assert_eq!(
        names,
        ["FUNCTION_NAME", "ORIGIN", "INTERFACE_NAME", "LIBRARY_NAME"]
    );
}

#[test]
fn sort_columns_are_result_columns() {
    for (rowset, entity) in catalog::entities() {
        let columns = identities(&entity.columns());

        for sort in &entity.sort_columns() {
            assert!(columns.contains(&ptr::from_ref(*sort)), "{rowset}: {}", sort.name);
        }
    }
}

#[test]
fn lists_are_duplicate_free() {
    for (rowset, entity) in catalog::entities() {
        for list in [
            entity.columns(),
            entity.sort_columns(),
            entity.restriction_columns(),
        ] {
            assert_eq!(identities(&list).len(), list.len(), "{rowset}");
        }
    }
}

#[test]
fn every_bound_enumeration_is_registered() {
    for (rowset, entity) in catalog::entities() {
        for (field, column) in entity.fields() {
            if let Some(enumeration) = column.ty.enumeration {
                assert!(enumeration.is_registered(), "{rowset}.{field}");
            }
        }
    }
}

#[cfg(feature = "json")]
#[test]
fn json_export_lists_every_rowset() {
    let json = doc::to_json().expect("catalog serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    let rowsets = value["rowsets"].as_array().expect("rowsets array");
    assert_eq!(rowsets.len(), RowsetDefinition::ALL.len());

    for rowset in RowsetDefinition::ALL {
        assert!(
            rowsets.iter().any(|r| r["name"] == rowset.xmla_name()),
            "{rowset} missing from export"
        );
    }

    let enumerations = value["enumerations"].as_array().expect("enumerations array");
    assert_eq!(enumerations.len(), xmla::schema::enumeration::ALL.len());
}

#[test]
fn doc_snapshot_matches_the_entities() {
    let doc = doc::catalog();
    let levels = doc.rowset("MDSCHEMA_LEVELS").expect("levels");

    assert_eq!(levels.columns.len(), mdschema::LEVELS.columns().len());
    assert_eq!(
        levels.sort_columns.last().copied(),
        Some("LEVEL_NUMBER")
    );
    assert!(
        levels
            .restrictions
            .iter()
            .any(|c| c.name == "LEVEL_VISIBILITY" && c.default.is_some())
    );
}
