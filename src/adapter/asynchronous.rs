use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    adapter::admission::admit,
    callable::AsyncInvocable,
    error::AmenableError,
    signature::{ParameterShape, Signature, analyze_signature},
    types::{Call, Value},
};

/// Async counterpart of [`crate::adapter::AdaptedCallable`]. Completion, failure and
/// cancellation are whatever the wrapped future does.
pub struct AsyncAdaptedCallable {
    shape: ParameterShape,
    target: Arc<dyn AsyncInvocable>,
    signature: Signature,
}

impl AsyncAdaptedCallable {
    pub fn shape(&self) -> &ParameterShape {
        &self.shape
    }

    pub async fn call(&self, call: &Call) -> Result<Value, AmenableError> {
        let admitted = admit(&self.shape, call);
        self.target.invoke(admitted).await
    }
}

#[async_trait]
impl AsyncInvocable for AsyncAdaptedCallable {
    fn name(&self) -> &str {
        self.target.name()
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    async fn invoke(&self, call: Call) -> Result<Value, AmenableError> {
        self.call(&call).await
    }
}

pub fn adapt_async(shape: ParameterShape, target: Arc<dyn AsyncInvocable>) -> AsyncAdaptedCallable {
    AsyncAdaptedCallable {
        shape,
        target,
        signature: Signature::accepts_anything(),
    }
}

pub fn wrap_async(target: Arc<dyn AsyncInvocable>) -> Result<AsyncAdaptedCallable, AmenableError> {
    let shape = analyze_signature(target.signature())?;
    Ok(adapt_async(shape, target))
}

pub async fn invoke_async(
    target: Arc<dyn AsyncInvocable>,
    call: &Call,
) -> Result<Value, AmenableError> {
    wrap_async(target)?.call(call).await
}
