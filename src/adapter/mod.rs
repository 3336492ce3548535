pub mod adapted;
pub mod admission;
pub mod asynchronous;

pub use adapted::{AdaptedCallable, adapt, invoke, wrap};
pub use admission::admit;
pub use asynchronous::{AsyncAdaptedCallable, adapt_async, invoke_async, wrap_async};
