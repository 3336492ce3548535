pub mod binding;
pub mod method;
pub mod native;
pub mod ports;
pub mod target;

pub use binding::{Arguments, Convention, bind_arguments};
pub use method::{BoundMethod, MethodBody, NativeMethod, UnboundMethod};
pub use native::{AsyncNativeFunction, NativeFunction};
pub use ports::{AsyncInvocable, Invocable};
pub use target::CallTarget;
