use std::sync::Arc;

use amenable::{
    Call, CallTarget, Invocable, NativeFunction, Signature, Value, adapt, analyze, invoke,
    types::kwargs, wrap,
};
use serde_json::json;

fn positional_only(count: usize) -> NativeFunction {
    let signature = (0..count).fold(Signature::new(), |signature, index| {
        signature.req(format!("p{index}"))
    });
    NativeFunction::new(format!("positional_{count}"), signature, move |args| {
        Ok(Value::Array(
            (0..count).map(|index| args.value(&format!("p{index}"))).collect(),
        ))
    })
}

#[test]
fn surplus_positionals_equal_a_direct_call_with_the_prefix() {
    for count in 0..4 {
        let function = positional_only(count);
        let args: Vec<Value> = (0..count + 3).map(|index| json!(index)).collect();

        let adapted = invoke(
            &CallTarget::from(function.clone()),
            &Call::new().with_args(args.clone()),
        )
        .expect("surplus is discarded");
        let direct = function
            .invoke(Call::new().with_args(args[..count].to_vec()))
            .expect("prefix call succeeds");

        assert_eq!(adapted, direct, "positional count {count}");
    }
}

#[test]
fn keywords_are_dropped_for_keywordless_callables() {
    let function = positional_only(1);
    let call = Call::new()
        .with_args([json!("x")])
        .with_kwargs(kwargs(json!({"a": 1})));

    let adapted = invoke(&CallTarget::from(function.clone()), &call).expect("kwargs dropped");
    let direct = function
        .invoke(Call::new().with_args([json!("x")]))
        .expect("direct call succeeds");
    assert_eq!(adapted, direct);
}

#[test]
fn wrapping_twice_filters_consistently() {
    let inner = wrap(&CallTarget::from(positional_only(2))).expect("first wrap");
    let inner: Arc<dyn Invocable> = Arc::new(inner);
    let outer = wrap(&CallTarget::Function(Arc::clone(&inner))).expect("second wrap");

    assert!(outer.shape().accepts_rest_positional());
    assert!(outer.shape().accepts_rest_keyword());
    assert!(outer.shape().accepts_trailing_block());

    let call = Call::new()
        .with_args([json!("a"), json!("b"), json!("c")])
        .with_kwarg("k", json!(true));
    assert_eq!(outer.call(&call).expect("double wrap"), json!(["a", "b"]));
}

#[test]
fn minimal_required_arguments_round_trip() {
    let function = NativeFunction::new(
        "minimal",
        Signature::new()
            .req("x")
            .opt("y", json!("y"))
            .keyreq("a")
            .key("b", json!(2)),
        |args| Ok(json!([args.value("x"), args.value("y"), args.value("a"), args.value("b")])),
    );
    let target = CallTarget::from(function.clone());
    let adapted = adapt(
        analyze(&target).expect("analyzes"),
        target.invocable().expect("invocable"),
    );
    let minimal = Call::new().with_args([json!(0)]).with_kwarg("a", json!(1));

    assert_eq!(
        adapted.call(&minimal).expect("adapted call"),
        function.invoke(minimal.clone()).expect("direct call")
    );
}

#[test]
fn adapted_callable_is_shareable_across_threads() {
    let adapted = Arc::new(wrap(&CallTarget::from(positional_only(1))).expect("wrap"));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let adapted = Arc::clone(&adapted);
            std::thread::spawn(move || {
                adapted.call(&Call::new().with_args([json!(index), json!("surplus")]))
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let value = handle
            .join()
            .expect("thread should not panic")
            .expect("call succeeds");
        assert_eq!(value, json!([index]));
    }
}
