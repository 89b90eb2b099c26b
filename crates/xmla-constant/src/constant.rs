use crate::dictionary::Dictionary;
use serde::Serialize;
use std::{fmt::Debug, hash::Hash};

/// Wire ordinal of a constant that has no XMLA code.
pub const NO_ORDINAL: i32 = -1;

///
/// XmlaConstant
///
/// A member of a closed set of XMLA codes. The wire name and wire ordinal are
/// transmitted literally in XMLA payloads and must match the published values.
///

pub trait XmlaConstant: Copy + Debug + Eq + Hash + Ord + Send + Sync + 'static {
    /// Name as transmitted in XMLA, e.g. `MDTREEOP_CHILDREN`.
    fn xmla_name(self) -> &'static str;

    /// Code as transmitted in XMLA, or [`NO_ORDINAL`].
    fn xmla_ordinal(self) -> i32;

    fn description(self) -> &'static str;

    /// The memoized dictionary for this constant set.
    fn dictionary() -> &'static Dictionary<Self>;
}

///
/// ConstantInfo
///
/// Type-erased snapshot of one constant, used where the concrete enum is not
/// known statically (enumeration registry, documentation export).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ConstantInfo {
    pub name: &'static str,
    pub ordinal: i32,
    pub description: &'static str,
}

impl ConstantInfo {
    #[must_use]
    pub fn of<E: XmlaConstant>(constant: E) -> Self {
        Self {
            name: constant.xmla_name(),
            ordinal: constant.xmla_ordinal(),
            description: constant.description(),
        }
    }

    #[must_use]
    pub const fn has_ordinal(&self) -> bool {
        self.ordinal != NO_ORDINAL
    }
}
