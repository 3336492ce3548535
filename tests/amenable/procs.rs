//! Lenient (proc-style) callables: positionals are not strictly required.

use amenable::{Call, CallTarget, NativeFunction, Signature, invoke, types::kwargs};
use serde_json::json;

#[test]
fn missing_positionals_bind_to_null() {
    let scenario = NativeFunction::new(
        "scenario_proc",
        Signature::new()
            .req("x")
            .opt("y", json!("y"))
            .keyreq("a")
            .key("b", json!(2)),
        |args| {
            Ok(json!([
                [args.value("x"), args.value("y")],
                {"a": args.value("a"), "b": args.value("b")},
            ]))
        },
    )
    .lenient();

    let call = Call::new().with_kwargs(kwargs(json!({"a": 1, "b": 2})));
    let result = invoke(&CallTarget::from(scenario), &call).expect("proc tolerates gaps");
    assert_eq!(result, json!([[null, "y"], {"a": 1, "b": 2}]));
}

#[test]
fn splat_proc_with_missing_args() {
    let splat = NativeFunction::new(
        "splat_proc",
        Signature::new().req("x").rest("z").keyreq("a").keyrest("c"),
        |args| {
            Ok(json!([
                args.value("x"),
                args.value("z"),
                args.value("a"),
                args.value("c"),
            ]))
        },
    )
    .lenient();

    let call = Call::new().with_kwarg("a", json!(1));
    let result = invoke(&CallTarget::from(splat), &call).expect("proc tolerates gaps");
    assert_eq!(result, json!([null, [], 1, {}]));
}

#[test]
fn proc_keywords_stay_strict() {
    let keyword_only = NativeFunction::new("keyword_only", Signature::new().keyreq("a"), |args| {
        Ok(args.value("a"))
    })
    .lenient();

    let err = invoke(&CallTarget::from(keyword_only), &Call::new().with_args([json!("x")]))
        .expect_err("missing keyword still fails");
    assert!(err.is_argument_error());
}
