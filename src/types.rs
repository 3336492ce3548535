use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::error::AmenableError;

pub use serde_json::Value;

pub type Kwargs = serde_json::Map<String, Value>;

pub type Block = Arc<dyn Fn(Vec<Value>) -> Result<Value, AmenableError> + Send + Sync>;

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Call {
    #[serde(default)]
    pub args: Vec<Value>,
    #[serde(default)]
    pub kwargs: Kwargs,
    #[serde(skip)]
    pub block: Option<Block>,
}

impl Call {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = Value>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }

    pub fn with_kwarg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.kwargs.insert(name.into(), value);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.block = Some(block);
        self
    }
}

impl fmt::Debug for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Call")
            .field("args", &self.args)
            .field("kwargs", &self.kwargs)
            .field("block", &self.block.as_ref().map(|_| "<block>"))
            .finish()
    }
}

pub fn kwargs(value: Value) -> Kwargs {
    match value {
        Value::Object(map) => map,
        _ => Kwargs::new(),
    }
}
