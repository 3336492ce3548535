use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use crate::{
    callable::{
        binding::{Arguments, Convention, bind_arguments},
        ports::{AsyncInvocable, Invocable},
    },
    error::AmenableError,
    signature::Signature,
    types::{Call, Value},
};

type NativeHandler = dyn Fn(Arguments) -> Result<Value, AmenableError> + Send + Sync;

type AsyncNativeHandler =
    dyn Fn(Arguments) -> BoxFuture<'static, Result<Value, AmenableError>> + Send + Sync;

#[derive(Clone)]
pub struct NativeFunction {
    name: String,
    signature: Signature,
    convention: Convention,
    handler: Arc<NativeHandler>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        signature: Signature,
        handler: impl Fn(Arguments) -> Result<Value, AmenableError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            signature,
            convention: Convention::Strict,
            handler: Arc::new(handler),
        }
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    pub fn lenient(self) -> Self {
        self.with_convention(Convention::Lenient)
    }
}

impl Invocable for NativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn invoke(&self, call: Call) -> Result<Value, AmenableError> {
        let arguments = bind_arguments(&self.signature, self.convention, call)?;
        (self.handler)(arguments)
    }
}

#[derive(Clone)]
pub struct AsyncNativeFunction {
    name: String,
    signature: Signature,
    convention: Convention,
    handler: Arc<AsyncNativeHandler>,
}

impl AsyncNativeFunction {
    pub fn new(
        name: impl Into<String>,
        signature: Signature,
        handler: impl Fn(Arguments) -> BoxFuture<'static, Result<Value, AmenableError>>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            signature,
            convention: Convention::Strict,
            handler: Arc::new(handler),
        }
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    pub fn lenient(self) -> Self {
        self.with_convention(Convention::Lenient)
    }
}

#[async_trait]
impl AsyncInvocable for AsyncNativeFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    async fn invoke(&self, call: Call) -> Result<Value, AmenableError> {
        let arguments = bind_arguments(&self.signature, self.convention, call)?;
        (self.handler)(arguments).await
    }
}
