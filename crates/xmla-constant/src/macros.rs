///
/// xmla_constant
///
/// Declares a constant set: the enum itself, its `ALL` slice in declaration
/// order, the `XmlaConstant` impl and a lazily built per-type dictionary.
///
/// Each variant is written as `Variant = (ordinal, "WIRE_NAME", "description")`.
///

#[macro_export]
macro_rules! xmla_constant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = ($ordinal:expr, $xmla_name:literal, $description:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every constant of the set, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
        }

        impl $crate::XmlaConstant for $name {
            fn xmla_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $xmla_name,)+
                }
            }

            fn xmla_ordinal(self) -> i32 {
                match self {
                    $(Self::$variant => $ordinal,)+
                }
            }

            fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)+
                }
            }

            fn dictionary() -> &'static $crate::Dictionary<Self> {
                static DICTIONARY: ::std::sync::LazyLock<$crate::Dictionary<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::Dictionary::new(stringify!($name), $name::ALL)
                    });

                &DICTIONARY
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::XmlaConstant::xmla_name(*self))
            }
        }
    };
}
