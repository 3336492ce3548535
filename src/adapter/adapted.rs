use std::sync::Arc;

use crate::{
    adapter::admission::admit,
    callable::{CallTarget, Invocable},
    error::AmenableError,
    signature::{ParameterShape, Signature, analyze},
    types::{Call, Value},
};

pub struct AdaptedCallable {
    shape: ParameterShape,
    target: Arc<dyn Invocable>,
    signature: Signature,
}

impl AdaptedCallable {
    pub fn shape(&self) -> &ParameterShape {
        &self.shape
    }

    pub fn call(&self, call: &Call) -> Result<Value, AmenableError> {
        self.target.invoke(admit(&self.shape, call))
    }
}

impl Invocable for AdaptedCallable {
    fn name(&self) -> &str {
        self.target.name()
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn invoke(&self, call: Call) -> Result<Value, AmenableError> {
        self.call(&call)
    }
}

pub fn adapt(shape: ParameterShape, target: Arc<dyn Invocable>) -> AdaptedCallable {
    AdaptedCallable {
        shape,
        target,
        signature: Signature::accepts_anything(),
    }
}

/// Analyzes `target` once and returns the reusable adapted form.
pub fn wrap(target: &CallTarget) -> Result<AdaptedCallable, AmenableError> {
    let invocable = target.invocable()?;
    let shape = analyze(target)?;
    Ok(adapt(shape, invocable))
}

pub fn invoke(target: &CallTarget, call: &Call) -> Result<Value, AmenableError> {
    wrap(target)?.call(call)
}
