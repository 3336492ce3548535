use std::sync::Arc;

use crate::{
    callable::{
        binding::{Arguments, Convention, bind_arguments},
        ports::Invocable,
    },
    error::AmenableError,
    signature::Signature,
    types::{Call, Value},
};

type MethodHandler = dyn Fn(&Value, Arguments) -> Result<Value, AmenableError> + Send + Sync;

pub trait MethodBody: Send + Sync {
    fn signature(&self) -> &Signature;

    fn call(&self, receiver: &Value, call: Call) -> Result<Value, AmenableError>;
}

pub struct NativeMethod {
    signature: Signature,
    convention: Convention,
    handler: Box<MethodHandler>,
}

impl NativeMethod {
    pub fn new(
        signature: Signature,
        handler: impl Fn(&Value, Arguments) -> Result<Value, AmenableError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            signature,
            convention: Convention::Strict,
            handler: Box::new(handler),
        }
    }
}

impl MethodBody for NativeMethod {
    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, receiver: &Value, call: Call) -> Result<Value, AmenableError> {
        let arguments = bind_arguments(&self.signature, self.convention, call)?;
        (self.handler)(receiver, arguments)
    }
}

#[derive(Clone)]
pub struct UnboundMethod {
    name: String,
    body: Arc<dyn MethodBody>,
}

impl UnboundMethod {
    pub fn new(name: impl Into<String>, body: Arc<dyn MethodBody>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn native(
        name: impl Into<String>,
        signature: Signature,
        handler: impl Fn(&Value, Arguments) -> Result<Value, AmenableError> + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, Arc::new(NativeMethod::new(signature, handler)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        self.body.signature()
    }

    pub fn bind(&self, receiver: Value) -> BoundMethod {
        BoundMethod {
            receiver,
            method: self.clone(),
        }
    }
}

#[derive(Clone)]
pub struct BoundMethod {
    receiver: Value,
    method: UnboundMethod,
}

impl BoundMethod {
    pub fn receiver(&self) -> &Value {
        &self.receiver
    }

    pub fn unbind(&self) -> UnboundMethod {
        self.method.clone()
    }
}

impl Invocable for BoundMethod {
    fn name(&self) -> &str {
        self.method.name()
    }

    fn signature(&self) -> &Signature {
        self.method.signature()
    }

    fn invoke(&self, call: Call) -> Result<Value, AmenableError> {
        self.method.body.call(&self.receiver, call)
    }
}
