use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    error::{AmenableError, argument_error, callee_failure, unrecognized_parameter_kind},
    signature::{ParameterKind, Signature},
    types::{Block, Call, Value},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// Method semantics: too few or too many positionals is an argument error.
    #[default]
    Strict,
    /// Proc semantics: missing positionals bind to `null`, surplus ones are ignored.
    Lenient,
}

/// Arguments after binding to a declaration, looked up by parameter name.
///
/// Rest parameters hold an array, keyrest parameters an object.
#[derive(Clone, Default)]
pub struct Arguments {
    named: BTreeMap<String, Value>,
    block: Option<Block>,
}

impl Arguments {
    pub fn value(&self, name: &str) -> Value {
        self.named.get(name).cloned().unwrap_or(Value::Null)
    }

    pub fn block(&self) -> Option<&Block> {
        self.block.as_ref()
    }

    pub fn call_block(&self, args: Vec<Value>) -> Result<Value, AmenableError> {
        match &self.block {
            Some(block) => block(args),
            None => Err(callee_failure("no block given (yield)")),
        }
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("named", &self.named)
            .field("block", &self.block.as_ref().map(|_| "<block>"))
            .finish()
    }
}

/// Binds `call` to `signature` the way a native callable would, raising argument errors
/// for arity violations. This is the callee-side check adapters rely on.
pub fn bind_arguments(
    signature: &Signature,
    convention: Convention,
    call: Call,
) -> Result<Arguments, AmenableError> {
    let Call {
        args,
        kwargs,
        block,
    } = call;

    let mut required = 0usize;
    let mut optional = 0usize;
    let mut has_rest = false;
    for parameter in signature.iter() {
        match &parameter.kind {
            ParameterKind::Req => required += 1,
            ParameterKind::Opt => optional += 1,
            ParameterKind::Rest => has_rest = true,
            ParameterKind::Other(tag) => {
                return Err(unrecognized_parameter_kind(format!(
                    "unexpected parameter type: {tag}"
                )));
            }
            _ => {}
        }
    }

    let mut args = args;
    let given = args.len();
    match convention {
        Convention::Strict => {
            if given < required || (!has_rest && given > required + optional) {
                return Err(argument_error(format!(
                    "wrong number of arguments (given {given}, expected {})",
                    expected_arity(required, optional, has_rest)
                )));
            }
        }
        Convention::Lenient => {
            if given < required {
                args.resize(required, Value::Null);
            }
            if !has_rest && args.len() > required + optional {
                args.truncate(required + optional);
            }
        }
    }

    let mut optional_budget = optional.min(args.len() - required);
    let rest_len = args.len() - required - optional_budget;
    let mut positionals = args.into_iter();
    let mut named = BTreeMap::new();
    let mut kwargs = kwargs;
    let mut missing_keywords = Vec::new();
    let mut keyrest_name = None;
    let mut accepts_block = false;

    for parameter in signature.iter() {
        match &parameter.kind {
            ParameterKind::Req => {
                let value = positionals.next().unwrap_or(Value::Null);
                named.insert(parameter.name.clone(), value);
            }
            ParameterKind::Opt => {
                let value = if optional_budget > 0 {
                    optional_budget -= 1;
                    positionals.next().unwrap_or(Value::Null)
                } else {
                    parameter.default.clone().unwrap_or(Value::Null)
                };
                named.insert(parameter.name.clone(), value);
            }
            ParameterKind::Rest => {
                let rest: Vec<Value> = positionals.by_ref().take(rest_len).collect();
                named.insert(parameter.name.clone(), Value::Array(rest));
            }
            ParameterKind::KeyReq => match kwargs.remove(&parameter.name) {
                Some(value) => {
                    named.insert(parameter.name.clone(), value);
                }
                None => missing_keywords.push(parameter.name.as_str()),
            },
            ParameterKind::Key => {
                let value = kwargs
                    .remove(&parameter.name)
                    .or_else(|| parameter.default.clone())
                    .unwrap_or(Value::Null);
                named.insert(parameter.name.clone(), value);
            }
            ParameterKind::KeyRest => keyrest_name = Some(parameter.name.clone()),
            ParameterKind::Block => accepts_block = true,
            ParameterKind::Other(_) => {}
        }
    }

    if !missing_keywords.is_empty() {
        return Err(argument_error(keyword_message("missing", &missing_keywords)));
    }

    match keyrest_name {
        Some(name) => {
            named.insert(name, Value::Object(kwargs));
        }
        None if !kwargs.is_empty() => {
            let unknown: Vec<&str> = kwargs.keys().map(String::as_str).collect();
            return Err(argument_error(keyword_message("unknown", &unknown)));
        }
        None => {}
    }

    Ok(Arguments {
        named,
        block: if accepts_block { block } else { None },
    })
}

fn expected_arity(required: usize, optional: usize, has_rest: bool) -> String {
    if has_rest {
        format!("{required}+")
    } else if optional == 0 {
        required.to_string()
    } else {
        format!("{required}..{}", required + optional)
    }
}

fn keyword_message(prefix: &str, names: &[&str]) -> String {
    let noun = if names.len() == 1 {
        "keyword"
    } else {
        "keywords"
    };
    format!("{prefix} {noun}: {}", names.join(", "))
}
