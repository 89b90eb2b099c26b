use crate::{
    column::{Column, ColumnList},
    naming::Naming,
    rowset::RowsetDefinition,
    validate::{self, EntityError},
};

///
/// FieldTable
///
/// The entity's `Column` fields paired with their Rust identifiers, in
/// declaration order. Generated by `define_entity!`.
///

pub trait FieldTable {
    fn fields(&self) -> Vec<(&'static str, &Column)>;
}

///
/// Entity
///
/// One schema rowset definition.
///

pub trait Entity: FieldTable + Sync + 'static {
    fn def(&self) -> RowsetDefinition;

    fn naming(&self) -> Naming {
        self.def().naming()
    }

    /// Result columns in wire order.
    fn columns(&self) -> ColumnList<'_>;

    /// Natural sort key of the rowset; empty when the rowset is unordered.
    fn sort_columns(&self) -> ColumnList<'_> {
        ColumnList::default()
    }

    /// Columns a Discover request may filter on. Entities with
    /// restriction-only columns (not returned in rows) override this.
    fn restriction_columns(&self) -> ColumnList<'_> {
        self.columns().restrictions()
    }

    /// Find a result or restriction column by wire name.
    fn column(&self, name: &str) -> Option<&Column> {
        self.columns()
            .find(name)
            .or_else(|| self.restriction_columns().find(name))
    }

    /// Cross-check fields against the column lists; first violation wins.
    fn check(&self) -> Result<(), EntityError> {
        validate::check_entity(self)
    }

    /// `check()` as a boolean. With `fail_hard` a violation panics with
    /// its diagnostic instead.
    fn is_valid(&self, fail_hard: bool) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(err) if fail_hard => panic!("invalid entity: {err}"),
            Err(err) => {
                tracing::warn!(rowset = %self.def(), error = %err, "invalid entity");
                false
            }
        }
    }
}
