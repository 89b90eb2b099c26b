//! Constants defined by the XML for Analysis protocol and the OLE DB schema
//! rowsets it inherits.

mod data;
mod literal;
mod protocol;
mod rowset;

pub use data::{ColumnFlag, DbType, FontFlag, Searchable};
pub use literal::Literal;
pub use protocol::{
    Access, AuthenticationMode, AxisFormat, Content, Format, MdxSupport, Method, ProviderType,
    StateSupport, Updateable, VisualMode,
};
pub use rowset::{
    ActionType, CoordinateType, CubeSource, CubeType, FunctionOrigin, Invocation, Scope, TreeOp,
    Visibility,
};
