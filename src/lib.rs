//! Call adaptation: hand a callable whatever arguments you have and it receives only the
//! ones it declares.
//!
//! A [`signature::ParameterShape`] is computed once per callable by
//! [`signature::analyze`]; [`adapter::adapt`] binds it to the callable, and every call
//! through the adapted form drops surplus positionals and undeclared keywords before
//! forwarding. Required arguments are still enforced, by the callee itself.

pub mod adapter;
pub mod callable;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod method_table;
pub mod signature;
pub mod types;

pub use adapter::{AdaptedCallable, adapt, admit, invoke, wrap};
pub use callable::{CallTarget, Invocable, NativeFunction, UnboundMethod};
pub use error::{AmenableError, AmenableErrorKind};
pub use signature::{ParameterShape, Signature, analyze};
pub use types::{Block, Call, Kwargs, Value};
