use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// Classification of a declared parameter. Tags outside the modelled set are kept as
/// `Other` so the analyzer can refuse them instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterKind {
    Req,
    Opt,
    Rest,
    KeyReq,
    Key,
    KeyRest,
    Block,
    Other(String),
}

impl ParameterKind {
    pub fn tag(&self) -> &str {
        match self {
            Self::Req => "req",
            Self::Opt => "opt",
            Self::Rest => "rest",
            Self::KeyReq => "keyreq",
            Self::Key => "key",
            Self::KeyRest => "keyrest",
            Self::Block => "block",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for ParameterKind {
    fn from(tag: &str) -> Self {
        match tag {
            "req" => Self::Req,
            "opt" => Self::Opt,
            "rest" => Self::Rest,
            "keyreq" => Self::KeyReq,
            "key" => Self::Key,
            "keyrest" => Self::KeyRest,
            "block" => Self::Block,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ParameterKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<ParameterKind> for String {
    fn from(kind: ParameterKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub kind: ParameterKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Parameter {
    pub fn new(kind: ParameterKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// `*args, **kwargs, &block`: the declared shape of every adapted callable.
    pub fn accepts_anything() -> Self {
        Self::new().rest("args").keyrest("kwargs").block("block")
    }

    pub fn req(self, name: impl Into<String>) -> Self {
        self.push(Parameter::new(ParameterKind::Req, name))
    }

    pub fn opt(self, name: impl Into<String>, default: Value) -> Self {
        self.push(Parameter::new(ParameterKind::Opt, name).with_default(default))
    }

    pub fn rest(self, name: impl Into<String>) -> Self {
        self.push(Parameter::new(ParameterKind::Rest, name))
    }

    pub fn keyreq(self, name: impl Into<String>) -> Self {
        self.push(Parameter::new(ParameterKind::KeyReq, name))
    }

    pub fn key(self, name: impl Into<String>, default: Value) -> Self {
        self.push(Parameter::new(ParameterKind::Key, name).with_default(default))
    }

    pub fn keyrest(self, name: impl Into<String>) -> Self {
        self.push(Parameter::new(ParameterKind::KeyRest, name))
    }

    pub fn block(self, name: impl Into<String>) -> Self {
        self.push(Parameter::new(ParameterKind::Block, name))
    }

    pub fn push(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn has(&self, kind: &ParameterKind) -> bool {
        self.parameters.iter().any(|parameter| &parameter.kind == kind)
    }
}

impl FromIterator<Parameter> for Signature {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterShape {
    pub(crate) positional_names: Vec<String>,
    pub(crate) required_positional_count: usize,
    pub(crate) accepts_rest_positional: bool,
    pub(crate) keyword_names: BTreeSet<String>,
    pub(crate) required_keyword_names: BTreeSet<String>,
    pub(crate) accepts_rest_keyword: bool,
    pub(crate) accepts_trailing_block: bool,
}

impl ParameterShape {
    pub fn positional_names(&self) -> &[String] {
        &self.positional_names
    }

    pub fn required_positional_count(&self) -> usize {
        self.required_positional_count
    }

    pub fn accepts_rest_positional(&self) -> bool {
        self.accepts_rest_positional
    }

    pub fn keyword_names(&self) -> &BTreeSet<String> {
        &self.keyword_names
    }

    pub fn required_keyword_names(&self) -> &BTreeSet<String> {
        &self.required_keyword_names
    }

    pub fn accepts_rest_keyword(&self) -> bool {
        self.accepts_rest_keyword
    }

    pub fn accepts_trailing_block(&self) -> bool {
        self.accepts_trailing_block
    }

    /// Maximum positional arguments forwarded, `None` when unbounded.
    pub fn positional_capacity(&self) -> Option<usize> {
        (!self.accepts_rest_positional).then_some(self.positional_names.len())
    }
}
