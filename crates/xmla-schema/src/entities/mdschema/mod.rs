//! The MDSCHEMA rowsets. Every filter on the cube rowsets defaults
//! `CUBE_SOURCE` to regular cubes, and the `*_VISIBILITY` filters default to
//! visible objects; neither is returned in result rows.

mod action;
mod cube;
mod dimension;
mod function;
mod hierarchy;
mod level;
mod measure;
mod member;
mod property;
mod set;

pub use action::{ACTIONS, Actions};
pub use cube::{CUBES, Cubes};
pub use dimension::{DIMENSIONS, Dimensions};
pub use function::{FUNCTIONS, Functions};
pub use hierarchy::{HIERARCHIES, Hierarchies};
pub use level::{LEVELS, Levels};
pub use measure::{MEASURE_GROUPS, MEASURES, MeasureGroups, Measures};
pub use member::{MEMBERS, Members};
pub use property::{PROPERTIES, Properties};
pub use set::{SETS, Sets};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;

    #[test]
    fn restriction_only_columns_are_not_returned() {
        assert!(CUBES.column("CUBE_SOURCE").is_some());
        assert!(CUBES.columns().find("CUBE_SOURCE").is_none());
        assert!(MEMBERS.restriction_columns().find("TREE_OP").is_some());
        assert!(MEMBERS.columns().find("TREE_OP").is_none());
    }

    #[test]
    fn visibility_restrictions_default_to_visible() {
        for (entity, name) in [
            (&DIMENSIONS as &dyn Entity, "DIMENSION_VISIBILITY"),
            (&HIERARCHIES as &dyn Entity, "HIERARCHY_VISIBILITY"),
            (&LEVELS as &dyn Entity, "LEVEL_VISIBILITY"),
            (&MEASURES as &dyn Entity, "MEASURE_VISIBILITY"),
            (&PROPERTIES as &dyn Entity, "PROPERTY_VISIBILITY"),
        ] {
            let column = entity.column(name).expect("visibility restriction");
            let default = column.restriction.default_value().expect("resolvable default");

            assert_eq!(default.name, "VISIBLE");
            assert_eq!(default.ordinal, 1);
        }
    }

    #[test]
    fn cube_columns_in_wire_order() {
        assert_eq!(
            CUBES.columns().names()[..4],
            ["CATALOG_NAME", "SCHEMA_NAME", "CUBE_NAME", "CUBE_TYPE"]
        );
        assert_eq!(
            CUBES.sort_columns().names(),
            ["CATALOG_NAME", "SCHEMA_NAME", "CUBE_NAME"]
        );
    }

    #[test]
    fn extension_columns_are_flagged() {
        let extensions: Vec<_> = CUBES
            .columns()
            .iter()
            .filter(|c| c.extension)
            .map(|c| c.name)
            .collect();

        assert_eq!(extensions, ["DIMENSIONS", "SETS", "MEASURES"]);
    }
}
