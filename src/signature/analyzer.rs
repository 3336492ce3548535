use std::collections::BTreeSet;

use crate::{
    callable::{CallTarget, Invocable},
    error::{AmenableError, invalid_callable, malformed_signature, unrecognized_parameter_kind},
    signature::types::{ParameterKind, ParameterShape, Signature},
};

/// Extracts the admission shape of any invocable representation.
///
/// Unbound methods are analyzed from their declaration alone; no receiver is needed.
pub fn analyze(target: &CallTarget) -> Result<ParameterShape, AmenableError> {
    match target {
        CallTarget::Function(function) => analyze_signature(function.signature()),
        CallTarget::Bound(method) => analyze_signature(method.signature()),
        CallTarget::Unbound(method) => analyze_signature(method.signature()),
        CallTarget::Name(name) => Err(invalid_callable(format!(
            "expected a function or method, got name `{name}`"
        ))),
        CallTarget::Value(value) => Err(invalid_callable(format!(
            "expected a function or method, got value {value}"
        ))),
    }
}

pub fn analyze_signature(signature: &Signature) -> Result<ParameterShape, AmenableError> {
    let mut shape = ParameterShape {
        positional_names: Vec::new(),
        required_positional_count: 0,
        accepts_rest_positional: false,
        keyword_names: BTreeSet::new(),
        required_keyword_names: BTreeSet::new(),
        accepts_rest_keyword: false,
        accepts_trailing_block: false,
    };
    let mut seen_names = BTreeSet::new();

    for parameter in signature.iter() {
        let discarded = parameter.name.is_empty() || parameter.name.starts_with('_');
        if !discarded && !seen_names.insert(parameter.name.as_str()) {
            return Err(malformed_signature(format!(
                "duplicated parameter name `{}`",
                parameter.name
            )));
        }

        match &parameter.kind {
            ParameterKind::Req => {
                shape.positional_names.push(parameter.name.clone());
                shape.required_positional_count += 1;
            }
            ParameterKind::Opt => shape.positional_names.push(parameter.name.clone()),
            ParameterKind::Rest => {
                if shape.accepts_rest_positional {
                    return Err(malformed_signature("more than one rest parameter"));
                }
                shape.accepts_rest_positional = true;
            }
            ParameterKind::KeyReq => {
                shape.keyword_names.insert(parameter.name.clone());
                shape.required_keyword_names.insert(parameter.name.clone());
            }
            ParameterKind::Key => {
                shape.keyword_names.insert(parameter.name.clone());
            }
            ParameterKind::KeyRest => {
                if shape.accepts_rest_keyword {
                    return Err(malformed_signature("more than one keyrest parameter"));
                }
                shape.accepts_rest_keyword = true;
            }
            ParameterKind::Block => {
                if shape.accepts_trailing_block {
                    return Err(malformed_signature("more than one block parameter"));
                }
                shape.accepts_trailing_block = true;
            }
            ParameterKind::Other(tag) => {
                return Err(unrecognized_parameter_kind(format!(
                    "unexpected parameter type: {tag} (parameter `{}`)",
                    parameter.name
                )));
            }
        }
    }

    Ok(shape)
}
