//! XMLA constant sets and their lookup dictionaries.
//!
//! Every closed set of XMLA codes (data types, visibility flags, cube types,
//! tree operators, ...) is a fieldless enum implementing [`XmlaConstant`].
//! Each set is backed by exactly one [`Dictionary`], built on first use.

#[macro_use]
mod macros;

pub mod constant;
pub mod dictionary;
pub mod olap;
pub mod xmla;

pub use constant::{ConstantInfo, NO_ORDINAL, XmlaConstant};
pub use dictionary::{ConstantSet, Dictionary};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        constant::{ConstantInfo, XmlaConstant},
        dictionary::{ConstantSet, Dictionary},
        olap::*,
        xmla::*,
    };
}
