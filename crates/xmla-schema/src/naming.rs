use convert_case::{Case, Casing};
use derive_more::Display;
use serde::Serialize;

///
/// Naming
///
/// How an entity's field identifiers map onto column wire names.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    /// snake_case field, UPPER_SNAKE_CASE wire name (`catalog_name` -> `CATALOG_NAME`).
    #[display("olap")]
    Olap,

    /// Field identifier is the wire name (`DataSourceName`).
    #[display("core")]
    Core,
}

impl Naming {
    /// The wire name a field called `ident` must carry.
    #[must_use]
    pub fn wire_name(self, ident: &str) -> String {
        match self {
            Self::Olap => ident.from_case(Case::Snake).to_case(Case::UpperSnake),
            Self::Core => ident.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn olap_fields_become_upper_snake_case() {
        assert_eq!(Naming::Olap.wire_name("catalog_name"), "CATALOG_NAME");
        assert_eq!(Naming::Olap.wire_name("level_dbtype"), "LEVEL_DBTYPE");
        assert_eq!(Naming::Olap.wire_name("cube"), "CUBE");
    }

    #[test]
    fn core_fields_are_taken_verbatim() {
        assert_eq!(Naming::Core.wire_name("Keyword"), "Keyword");
        assert_eq!(Naming::Core.wire_name("DataSourceName"), "DataSourceName");
        assert_eq!(Naming::Core.wire_name("URL"), "URL");
    }

    #[test]
    fn labels_match_serialized_form() {
        assert_eq!(Naming::Olap.to_string(), "olap");
        assert_eq!(Naming::Core.to_string(), "core");
    }
}
