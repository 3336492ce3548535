use std::sync::Arc;

use crate::{
    adapter::adapt,
    callable::{MethodBody, UnboundMethod},
    error::AmenableError,
    signature::{ParameterShape, Signature, analyze_signature},
    types::{Call, Value},
};

pub struct AmendedMethod {
    original: UnboundMethod,
    shape: ParameterShape,
    signature: Signature,
}

impl AmendedMethod {
    pub fn new(original: UnboundMethod) -> Result<Self, AmenableError> {
        let shape = analyze_signature(original.signature())?;
        Ok(Self {
            original,
            shape,
            signature: Signature::accepts_anything(),
        })
    }
}

impl MethodBody for AmendedMethod {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, receiver: &Value, call: Call) -> Result<Value, AmenableError> {
        let bound = self.original.bind(receiver.clone());
        adapt(self.shape.clone(), Arc::new(bound)).call(&call)
    }
}
