use crate::{constant::XmlaConstant, dictionary::Dictionary};
use std::{fmt, sync::LazyLock};

///
/// Literal
///
/// Lexical rules for one kind of identifier or literal in a text command,
/// as reported by DISCOVER_LITERALS. Written out by hand because each literal
/// carries more than the usual name/ordinal/description triple.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Literal {
    CatalogName,
    CatalogSeparator,
    ColumnAlias,
    ColumnName,
    CorrelationName,
    CubeName,
    DimensionName,
    HierarchyName,
    LevelName,
    MemberName,
    ProcedureName,
    PropertyName,
    Quote,
    QuoteSuffix,
    TableName,
    TextCommand,
    UserName,
}

///
/// LiteralRules
///

struct LiteralRules {
    ordinal: i32,
    xmla_name: &'static str,
    value: Option<&'static str>,
    max_length: i32,
    invalid_chars: Option<&'static str>,
    invalid_starting_chars: Option<&'static str>,
    description: &'static str,
}

const DIGITS: &str = "0123456789";

// identifier rules shared by most named objects
const fn identifier(ordinal: i32, xmla_name: &'static str, description: &'static str) -> LiteralRules {
    LiteralRules {
        ordinal,
        xmla_name,
        value: None,
        max_length: -1,
        invalid_chars: Some("."),
        invalid_starting_chars: Some(DIGITS),
        description,
    }
}

impl Literal {
    pub const ALL: &'static [Self] = &[
        Self::CatalogName,
        Self::CatalogSeparator,
        Self::ColumnAlias,
        Self::ColumnName,
        Self::CorrelationName,
        Self::CubeName,
        Self::DimensionName,
        Self::HierarchyName,
        Self::LevelName,
        Self::MemberName,
        Self::ProcedureName,
        Self::PropertyName,
        Self::Quote,
        Self::QuoteSuffix,
        Self::TableName,
        Self::TextCommand,
        Self::UserName,
    ];

    const fn rules(self) -> LiteralRules {
        match self {
            Self::CatalogName => LiteralRules {
                max_length: 24,
                ..identifier(2, "DBLITERAL_CATALOG_NAME", "A catalog name in a text command.")
            },
            Self::CatalogSeparator => LiteralRules {
                ordinal: 3,
                xmla_name: "DBLITERAL_CATALOG_SEPARATOR",
                value: Some("."),
                max_length: 0,
                invalid_chars: None,
                invalid_starting_chars: None,
                description: "The separator between a catalog name and the rest of an identifier.",
            },
            Self::ColumnAlias => LiteralRules {
                invalid_chars: Some("'\"[]"),
                ..identifier(5, "DBLITERAL_COLUMN_ALIAS", "A column alias in a text command.")
            },
            Self::ColumnName => {
                identifier(6, "DBLITERAL_COLUMN_NAME", "A column name in a text command.")
            }
            Self::CorrelationName => LiteralRules {
                invalid_chars: Some("'\"[]"),
                ..identifier(
                    7,
                    "DBLITERAL_CORRELATION_NAME",
                    "A correlation name (table alias) in a text command.",
                )
            },
            Self::CubeName => identifier(21, "DBLITERAL_CUBE_NAME", "A cube name in a text command."),
            Self::DimensionName => identifier(
                22,
                "DBLITERAL_DIMENSION_NAME",
                "A dimension name in a text command.",
            ),
            Self::HierarchyName => identifier(
                23,
                "DBLITERAL_HIERARCHY_NAME",
                "A hierarchy name in a text command.",
            ),
            Self::LevelName => {
                identifier(24, "DBLITERAL_LEVEL_NAME", "A level name in a text command.")
            }
            Self::MemberName => {
                identifier(25, "DBLITERAL_MEMBER_NAME", "A member name in a text command.")
            }
            Self::ProcedureName => identifier(
                14,
                "DBLITERAL_PROCEDURE_NAME",
                "A procedure name in a text command.",
            ),
            Self::PropertyName => identifier(
                26,
                "DBLITERAL_PROPERTY_NAME",
                "A property name in a text command.",
            ),
            Self::Quote => LiteralRules {
                ordinal: 15,
                xmla_name: "DBLITERAL_QUOTE",
                value: Some("["),
                max_length: -1,
                invalid_chars: None,
                invalid_starting_chars: None,
                description: "The character used in a text command as the opening quote for \
                              identifiers that contain special characters.",
            },
            Self::QuoteSuffix => LiteralRules {
                ordinal: 28,
                xmla_name: "DBLITERAL_QUOTE_SUFFIX",
                value: Some("]"),
                max_length: -1,
                invalid_chars: None,
                invalid_starting_chars: None,
                description: "The character used in a text command as the closing quote for \
                              identifiers that contain special characters.",
            },
            Self::TableName => {
                identifier(17, "DBLITERAL_TABLE_NAME", "A table name in a text command.")
            }
            Self::TextCommand => LiteralRules {
                ordinal: 18,
                xmla_name: "DBLITERAL_TEXT_COMMAND",
                value: None,
                max_length: -1,
                invalid_chars: None,
                invalid_starting_chars: None,
                description: "A text command, such as an MDX statement.",
            },
            Self::UserName => LiteralRules {
                ordinal: 19,
                xmla_name: "DBLITERAL_USER_NAME",
                value: None,
                max_length: 0,
                invalid_chars: None,
                invalid_starting_chars: None,
                description: "A user name in a text command.",
            },
        }
    }

    /// The literal itself, for literals that are fixed characters.
    #[must_use]
    pub const fn value(self) -> Option<&'static str> {
        self.rules().value
    }

    /// Maximum length in characters; `-1` when there is no limit.
    #[must_use]
    pub const fn max_length(self) -> i32 {
        self.rules().max_length
    }

    #[must_use]
    pub const fn invalid_chars(self) -> Option<&'static str> {
        self.rules().invalid_chars
    }

    #[must_use]
    pub const fn invalid_starting_chars(self) -> Option<&'static str> {
        self.rules().invalid_starting_chars
    }
}

impl XmlaConstant for Literal {
    fn xmla_name(self) -> &'static str {
        self.rules().xmla_name
    }

    fn xmla_ordinal(self) -> i32 {
        self.rules().ordinal
    }

    fn description(self) -> &'static str {
        self.rules().description
    }

    fn dictionary() -> &'static Dictionary<Self> {
        static DICTIONARY: LazyLock<Dictionary<Literal>> =
            LazyLock::new(|| Dictionary::new("Literal", Literal::ALL));

        &DICTIONARY
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xmla_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_literals_carry_their_characters() {
        assert_eq!(Literal::Quote.value(), Some("["));
        assert_eq!(Literal::QuoteSuffix.value(), Some("]"));
        assert_eq!(Literal::CatalogSeparator.value(), Some("."));
        assert_eq!(Literal::CubeName.value(), None);
    }

    #[test]
    fn identifiers_reject_leading_digits() {
        for literal in [Literal::CubeName, Literal::LevelName, Literal::MemberName] {
            assert_eq!(literal.invalid_starting_chars(), Some(DIGITS));
            assert_eq!(literal.invalid_chars(), Some("."));
        }
    }

    #[test]
    fn catalog_name_is_length_limited() {
        assert_eq!(Literal::CatalogName.max_length(), 24);
        assert_eq!(Literal::CatalogName.xmla_ordinal(), 2);
        assert_eq!(Literal::ColumnName.max_length(), -1);
    }

    #[test]
    fn dictionary_resolves_by_prefixed_name() {
        let dictionary = Literal::dictionary();

        assert_eq!(
            dictionary.for_name("DBLITERAL_QUOTE_SUFFIX"),
            Some(Literal::QuoteSuffix)
        );
        assert_eq!(dictionary.for_ordinal(21), Some(Literal::CubeName));
        assert_eq!(dictionary.for_name("QUOTE_SUFFIX"), None);
    }
}
