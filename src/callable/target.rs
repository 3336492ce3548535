use std::sync::Arc;

use crate::{
    callable::{
        method::{BoundMethod, UnboundMethod},
        native::NativeFunction,
        ports::Invocable,
    },
    error::{AmenableError, invalid_callable},
    types::Value,
};

#[derive(Clone)]
pub enum CallTarget {
    Function(Arc<dyn Invocable>),
    Bound(BoundMethod),
    /// Pending a receiver; analyzable, but only invocable once bound.
    Unbound(UnboundMethod),
    Name(String),
    Value(Value),
}

impl CallTarget {
    pub fn function(invocable: impl Invocable + 'static) -> Self {
        Self::Function(Arc::new(invocable))
    }

    pub fn invocable(&self) -> Result<Arc<dyn Invocable>, AmenableError> {
        match self {
            Self::Function(function) => Ok(Arc::clone(function)),
            Self::Bound(method) => Ok(Arc::new(method.clone())),
            Self::Unbound(method) => Err(invalid_callable(format!(
                "unbound method `{}` must be bound to a receiver before it is called",
                method.name()
            ))),
            Self::Name(name) => Err(invalid_callable(format!(
                "expected a function or method, got name `{name}`"
            ))),
            Self::Value(value) => Err(invalid_callable(format!(
                "expected a function or method, got value {value}"
            ))),
        }
    }

    /// Binds an unbound method to `receiver`; other targets are returned unchanged.
    pub fn resolve(self, receiver: &Value) -> Self {
        match self {
            Self::Unbound(method) => Self::Bound(method.bind(receiver.clone())),
            other => other,
        }
    }
}

impl From<Arc<dyn Invocable>> for CallTarget {
    fn from(invocable: Arc<dyn Invocable>) -> Self {
        Self::Function(invocable)
    }
}

impl From<NativeFunction> for CallTarget {
    fn from(function: NativeFunction) -> Self {
        Self::function(function)
    }
}

impl From<BoundMethod> for CallTarget {
    fn from(method: BoundMethod) -> Self {
        Self::Bound(method)
    }
}

impl From<UnboundMethod> for CallTarget {
    fn from(method: UnboundMethod) -> Self {
        Self::Unbound(method)
    }
}

impl From<Value> for CallTarget {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
