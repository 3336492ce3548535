pub mod amended;
pub mod table;

pub use amended::AmendedMethod;
pub use table::{MethodTable, Visibility};
