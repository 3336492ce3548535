use async_trait::async_trait;

use crate::{
    error::AmenableError,
    signature::Signature,
    types::{Call, Value},
};

/// A callable that exposes its declared parameters and can be invoked with a [`Call`].
///
/// Implementations enforce their own arity: a call that does not fit the declaration
/// fails with an argument error raised by the implementation itself.
pub trait Invocable: Send + Sync {
    fn name(&self) -> &str;

    fn signature(&self) -> &Signature;

    fn invoke(&self, call: Call) -> Result<Value, AmenableError>;
}

#[async_trait]
pub trait AsyncInvocable: Send + Sync {
    fn name(&self) -> &str;

    fn signature(&self) -> &Signature;

    async fn invoke(&self, call: Call) -> Result<Value, AmenableError>;
}
