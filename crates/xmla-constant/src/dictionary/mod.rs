//! Per-type lookup dictionaries.
//!
//! Invariants, once built:
//! - `for_name(c.xmla_name()) == Some(c)` for every constant `c`.
//! - `for_ordinal(c.xmla_ordinal()) == Some(c)` for every constant with an ordinal.
//! - `values()` is the declaration order and never reallocates.

#[cfg(test)]
mod tests;

use crate::constant::{ConstantInfo, NO_ORDINAL, XmlaConstant};
use std::collections::{BTreeSet, HashMap, hash_map::Entry};

///
/// Dictionary
///
/// Immutable name/ordinal index over one constant set.
///

#[derive(Debug)]
pub struct Dictionary<E: XmlaConstant> {
    enum_name: &'static str,
    values: &'static [E],
    by_name: HashMap<&'static str, E>,
    by_ordinal: HashMap<i32, E>,
}

impl<E: XmlaConstant> Dictionary<E> {
    /// Index `values`. Called once per type from the memoized accessor that
    /// `xmla_constant!` expands; use [`Self::for_class`] everywhere else.
    ///
    /// Wire names and ordinals are expected to be unique within a set; when
    /// they are not, the first constant in declaration order wins.
    #[doc(hidden)]
    #[must_use]
    pub fn new(enum_name: &'static str, values: &'static [E]) -> Self {
        let mut by_name = HashMap::with_capacity(values.len());
        let mut by_ordinal = HashMap::with_capacity(values.len());

        for &value in values {
            if let Entry::Vacant(slot) = by_name.entry(value.xmla_name()) {
                slot.insert(value);
            } else {
                tracing::warn!(enum_name, name = value.xmla_name(), "duplicate xmla name");
            }

            let ordinal = value.xmla_ordinal();
            if ordinal == NO_ORDINAL {
                continue;
            }
            if let Entry::Vacant(slot) = by_ordinal.entry(ordinal) {
                slot.insert(value);
            } else {
                tracing::warn!(enum_name, ordinal, "duplicate xmla ordinal");
            }
        }

        tracing::debug!(enum_name, len = values.len(), "built constant dictionary");

        Self {
            enum_name,
            values,
            by_name,
            by_ordinal,
        }
    }

    /// The singleton dictionary for `E`.
    #[must_use]
    pub fn for_class() -> &'static Self {
        E::dictionary()
    }

    #[must_use]
    pub const fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    #[must_use]
    pub fn for_ordinal(&self, ordinal: i32) -> Option<E> {
        self.by_ordinal.get(&ordinal).copied()
    }

    #[must_use]
    pub fn for_name(&self, name: &str) -> Option<E> {
        self.by_name.get(name).copied()
    }

    /// Every constant whose ordinal shares at least one bit with `mask`.
    ///
    /// This is a bit test, not an exact match: a constant whose ordinal is a
    /// combination of bits is returned as soon as any one of them is set.
    #[must_use]
    pub fn for_mask(&self, mask: i32) -> BTreeSet<E> {
        self.values
            .iter()
            .copied()
            .filter(|value| mask & value.xmla_ordinal() != 0)
            .collect()
    }

    /// Bitwise OR of the ordinals of `constants`.
    pub fn to_mask(&self, constants: impl IntoIterator<Item = E>) -> i32 {
        constants
            .into_iter()
            .fold(0, |mask, constant| mask | constant.xmla_ordinal())
    }

    /// All constants, in declaration order.
    #[must_use]
    pub const fn values(&self) -> &'static [E] {
        self.values
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

///
/// ConstantSet
///
/// Object-safe view of a dictionary, for callers that only know a set by name.
///

pub trait ConstantSet: Sync {
    fn enum_name(&self) -> &'static str;

    fn infos(&self) -> Vec<ConstantInfo>;

    fn info_for_name(&self, name: &str) -> Option<ConstantInfo>;

    fn info_for_ordinal(&self, ordinal: i32) -> Option<ConstantInfo>;
}

impl<E: XmlaConstant> ConstantSet for Dictionary<E> {
    fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    fn infos(&self) -> Vec<ConstantInfo> {
        self.values.iter().copied().map(ConstantInfo::of).collect()
    }

    fn info_for_name(&self, name: &str) -> Option<ConstantInfo> {
        self.for_name(name).map(ConstantInfo::of)
    }

    fn info_for_ordinal(&self, ordinal: i32) -> Option<ConstantInfo> {
        self.for_ordinal(ordinal).map(ConstantInfo::of)
    }
}
