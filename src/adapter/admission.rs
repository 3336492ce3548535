use crate::{
    signature::ParameterShape,
    types::{Call, Kwargs},
};

/// Builds the call actually forwarded to a callable of the given shape.
///
/// Surplus positionals and undeclared keywords are dropped; requiredness is left to the
/// callee. The caller's call is only read.
pub fn admit(shape: &ParameterShape, call: &Call) -> Call {
    let args = match shape.positional_capacity() {
        Some(capacity) => call.args.iter().take(capacity).cloned().collect(),
        None => call.args.clone(),
    };

    let kwargs = if shape.accepts_rest_keyword() {
        call.kwargs.clone()
    } else {
        call.kwargs
            .iter()
            .filter(|(name, _)| shape.keyword_names().contains(name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect::<Kwargs>()
    };

    let block = if shape.accepts_trailing_block() {
        call.block.clone()
    } else {
        None
    };

    Call {
        args,
        kwargs,
        block,
    }
}
