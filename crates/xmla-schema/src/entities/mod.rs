//! One entity per schema rowset, grouped the way XMLA groups the rowsets.

pub mod dbschema;
pub mod discover;
pub mod mdschema;
