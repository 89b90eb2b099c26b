///
/// define_entity
///
/// Declares an entity struct whose fields are all `Column`s and records each
/// field's identifier next to its column, so validation can compare the name
/// a field was given with the wire name its column carries.
///

#[macro_export]
macro_rules! define_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : Column
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::column::Column,
            )+
        }

        impl $crate::entity::FieldTable for $name {
            fn fields(&self) -> ::std::vec::Vec<(&'static str, &$crate::column::Column)> {
                ::std::vec![$((stringify!($field), &self.$field),)+]
            }
        }
    };
}
