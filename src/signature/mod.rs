pub mod analyzer;
pub mod types;

pub use analyzer::{analyze, analyze_signature};
pub use types::{Parameter, ParameterKind, ParameterShape, Signature};
