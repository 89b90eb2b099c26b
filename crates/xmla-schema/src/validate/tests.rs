use super::*;
use crate::{
    column::{ColumnType, Presence},
    entities::{discover, mdschema},
    entity::FieldTable,
    enumeration::{CUBE_SOURCE, VISIBILITY},
};

const fn column(name: &'static str, restriction: Restriction) -> Column {
    Column::new(
        name,
        ColumnType::STRING,
        restriction,
        Presence::Optional,
        None,
    )
}

crate::define_entity! {
    struct Sample {
        pub catalog_name: Column,
        pub schema_name: Column,
        pub cube_name: Column,
        pub cube_type: Column,
        pub level_name: Column,
        pub level_number: Column,
        pub description: Column,
    }
}

static SAMPLE: Sample = Sample {
    catalog_name: column("CATALOG_NAME", Restriction::Optional),
    schema_name: column("SCHEMA_NAME", Restriction::NotARestriction),
    cube_name: column("CUBE_NAME", Restriction::Required),
    cube_type: column("CUBE_TYPE", Restriction::NotARestriction),
    level_name: Column::new(
        "LEVEL_NAME",
        ColumnType::STRING,
        Restriction::OptionalWithDefault {
            enumeration: &VISIBILITY,
            default: "VISIBLE",
        },
        Presence::Required,
        None,
    ),
    level_number: column("LEVEL_NUMBER", Restriction::NotARestriction),
    description: column("DESCRIPTION", Restriction::NotARestriction),
};

crate::define_entity! {
    struct Misnamed {
        pub cube_name: Column,
    }
}

static MISNAMED: Misnamed = Misnamed {
    cube_name: column("CUBE_CAPTION", Restriction::NotARestriction),
};

crate::define_entity! {
    struct Defaulted {
        pub cube_source: Column,
    }
}

static DEFAULTED: Defaulted = Defaulted {
    cube_source: column(
        "CUBE_SOURCE",
        Restriction::OptionalWithDefault {
            enumeration: &CUBE_SOURCE,
            default: "CUBES",
        },
    ),
};

///
/// Shape
///
/// Wraps a field table with column lists chosen per test.
///

type Lister<T> = fn(&'static T) -> Vec<&'static Column>;

struct Shape<T: 'static> {
    body: &'static T,
    columns: Lister<T>,
    sort_columns: Lister<T>,
    restriction_columns: Option<Lister<T>>,
}

impl<T: 'static> Shape<T> {
    fn new(body: &'static T, columns: Lister<T>) -> Self {
        Self {
            body,
            columns,
            sort_columns: |_| Vec::new(),
            restriction_columns: None,
        }
    }

    fn sorted_by(mut self, sort_columns: Lister<T>) -> Self {
        self.sort_columns = sort_columns;
        self
    }

    fn restricted_by(mut self, restriction_columns: Lister<T>) -> Self {
        self.restriction_columns = Some(restriction_columns);
        self
    }
}

impl<T: FieldTable + Sync + 'static> FieldTable for Shape<T> {
    fn fields(&self) -> Vec<(&'static str, &Column)> {
        self.body.fields()
    }
}

impl<T: FieldTable + Sync + 'static> Entity for Shape<T> {
    fn def(&self) -> RowsetDefinition {
        RowsetDefinition::MdschemaCubes
    }

    fn columns(&self) -> ColumnList<'_> {
        (self.columns)(self.body).into()
    }

    fn sort_columns(&self) -> ColumnList<'_> {
        (self.sort_columns)(self.body).into()
    }

    fn restriction_columns(&self) -> ColumnList<'_> {
        match self.restriction_columns {
            Some(list) => list(self.body).into(),
            None => self.columns().restrictions(),
        }
    }
}

fn all(s: &'static Sample) -> Vec<&'static Column> {
    vec![
        &s.catalog_name,
        &s.schema_name,
        &s.cube_name,
        &s.cube_type,
        &s.level_name,
        &s.level_number,
        &s.description,
    ]
}

fn sample() -> Shape<Sample> {
    Shape::new(&SAMPLE, all)
}

//
// sample entity
//

#[test]
fn restriction_columns_filter_in_declared_order() {
    let entity = sample();

    assert_eq!(entity.columns().len(), 7);
    assert_eq!(
        entity.restriction_columns().names(),
        ["CATALOG_NAME", "CUBE_NAME", "LEVEL_NAME"]
    );
    assert!(entity.is_valid(false));
}

#[test]
fn explicit_restriction_order_wins() {
    let entity = sample().restricted_by(|s| vec![&s.level_name, &s.catalog_name, &s.cube_name]);

    assert_eq!(
        entity.restriction_columns().names(),
        ["LEVEL_NAME", "CATALOG_NAME", "CUBE_NAME"]
    );
    assert!(entity.check().is_ok());
}

#[test]
fn restriction_only_columns_are_fields_too() {
    let entity = Shape::new(&SAMPLE, |s| {
        vec![
            &s.catalog_name,
            &s.schema_name,
            &s.cube_name,
            &s.cube_type,
            &s.level_number,
            &s.description,
        ]
    })
    .restricted_by(|s| vec![&s.catalog_name, &s.cube_name, &s.level_name]);

    assert!(entity.check().is_ok());
    assert!(entity.column("LEVEL_NAME").is_some());
    assert!(entity.columns().find("LEVEL_NAME").is_none());
}

#[test]
fn sort_columns_must_be_result_columns() {
    let ok = sample().sorted_by(|s| vec![&s.catalog_name, &s.cube_name]);
    assert!(ok.check().is_ok());

    let entity = Shape::new(&SAMPLE, |s| {
        vec![
            &s.catalog_name,
            &s.schema_name,
            &s.cube_name,
            &s.cube_type,
            &s.level_number,
            &s.description,
        ]
    })
    .restricted_by(|s| vec![&s.catalog_name, &s.cube_name, &s.level_name])
    .sorted_by(|s| vec![&s.catalog_name, &s.level_name]);

    assert!(matches!(
        entity.check(),
        Err(EntityError::SortColumnNotReturned {
            column: "LEVEL_NAME",
            ..
        })
    ));
}

//
// violations
//

#[test]
fn misnamed_field_is_reported() {
    let entity = Shape::new(&MISNAMED, |s| vec![&s.cube_name]);

    match entity.check() {
        Err(EntityError::FieldNameMismatch {
            field,
            expected,
            actual,
            ..
        }) => {
            assert_eq!(field, "cube_name");
            assert_eq!(expected, "CUBE_NAME");
            assert_eq!(actual, "CUBE_CAPTION");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn orphaned_field_is_reported() {
    let entity = Shape::new(&SAMPLE, |s| {
        let mut columns = all(s);
        columns.retain(|c| !ptr::eq(*c, &s.description));
        columns
    });

    assert!(matches!(
        entity.check(),
        Err(EntityError::UnlistedField {
            field: "description",
            column: "DESCRIPTION",
            ..
        })
    ));
}

#[test]
fn phantom_column_is_reported() {
    let entity = Shape::new(&SAMPLE, |s| {
        let mut columns = all(s);
        columns.push(&MISNAMED.cube_name);
        columns
    });

    assert!(matches!(
        entity.check(),
        Err(EntityError::UndeclaredColumn {
            list: ListKind::Columns,
            column: "CUBE_CAPTION",
            ..
        })
    ));
}

#[test]
fn twin_with_the_same_name_is_still_a_phantom() {
    static TWIN: Column = column("CUBE_NAME", Restriction::Required);

    let entity = sample().restricted_by(|s| vec![&s.catalog_name, &TWIN, &s.level_name, &s.cube_name]);

    assert!(matches!(
        entity.check(),
        Err(EntityError::UndeclaredColumn {
            list: ListKind::RestrictionColumns,
            column: "CUBE_NAME",
            ..
        })
    ));
}

#[test]
fn duplicate_columns_are_reported() {
    let entity = Shape::new(&SAMPLE, |s| {
        let mut columns = all(s);
        columns.push(&s.cube_name);
        columns
    });

    assert!(matches!(
        entity.check(),
        Err(EntityError::DuplicateColumn {
            list: ListKind::Columns,
            column: "CUBE_NAME",
            ..
        })
    ));

    let entity = sample().restricted_by(|s| {
        vec![
            &s.catalog_name,
            &s.cube_name,
            &s.level_name,
            &s.catalog_name,
        ]
    });

    assert!(matches!(
        entity.check(),
        Err(EntityError::DuplicateColumn {
            list: ListKind::RestrictionColumns,
            column: "CATALOG_NAME",
            ..
        })
    ));
}

#[test]
fn unmarked_restriction_is_reported() {
    let entity = sample().restricted_by(|s| vec![&s.catalog_name, &s.schema_name]);

    assert!(matches!(
        entity.check(),
        Err(EntityError::NotARestriction {
            column: "SCHEMA_NAME",
            ..
        })
    ));
}

#[test]
fn unresolvable_default_is_reported() {
    let entity = Shape::new(&DEFAULTED, |_| Vec::new())
        .restricted_by(|s| vec![&s.cube_source]);

    let err = entity.check().expect_err("CUBES is not a CubeSource");

    assert_eq!(err.rowset(), RowsetDefinition::MdschemaCubes);
    assert_eq!(
        err.to_string(),
        "MDSCHEMA_CUBES: restriction 'CUBE_SOURCE' defaults to 'CUBES', \
         which is not a value of 'CubeSource'"
    );
}

#[test]
fn soft_validation_returns_false() {
    let entity = Shape::new(&MISNAMED, |s| vec![&s.cube_name]);

    assert!(!entity.is_valid(false));
}

#[test]
#[should_panic(expected = "invalid entity")]
fn hard_validation_panics() {
    let entity = Shape::new(&MISNAMED, |s| vec![&s.cube_name]);

    entity.is_valid(true);
}

//
// shipped catalog
//

#[test]
fn every_entity_is_valid() {
    for rowset in RowsetDefinition::ALL {
        let entity = rowset.entity();

        assert_eq!(entity.def(), *rowset);
        assert!(entity.is_valid(true), "{rowset} failed validation");
    }
}

#[test]
fn sort_columns_are_result_columns() {
    for rowset in RowsetDefinition::ALL {
        let entity = rowset.entity();
        let columns = entity.columns();

        for sort in &entity.sort_columns() {
            assert!(
                columns.iter().any(|c| ptr::eq(*c, *sort)),
                "{rowset}: {} is not a result column",
                sort.name
            );
        }
    }
}

#[test]
fn lists_hold_no_duplicates() {
    for rowset in RowsetDefinition::ALL {
        let entity = rowset.entity();

        for list in [
            entity.columns(),
            entity.sort_columns(),
            entity.restriction_columns(),
        ] {
            assert_eq!(identities(list.iter().copied()).len(), list.len(), "{rowset}");
        }
    }
}

#[test]
fn olap_fields_derive_upper_snake_names() {
    let fields = mdschema::CUBES.fields();

    assert_eq!(mdschema::CUBES.catalog_name.name, "CATALOG_NAME");
    assert!(
        fields
            .iter()
            .any(|&(field, c)| field == "catalog_name" && ptr::eq(c, &mdschema::CUBES.catalog_name))
    );
    assert_eq!(mdschema::CUBES.naming(), crate::naming::Naming::Olap);
}

#[test]
fn core_fields_keep_their_identifier() {
    let fields = discover::KEYWORDS.fields();

    assert_eq!(discover::KEYWORDS.Keyword.name, "Keyword");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].0, "Keyword");
    assert_eq!(discover::KEYWORDS.naming(), crate::naming::Naming::Core);
}
