use std::sync::Arc;

use amenable::{
    AmenableErrorKind, Call, CallTarget, UnboundMethod, Value, invoke,
    method_table::{MethodTable, Visibility},
    signature::Signature,
    types::kwargs,
};
use serde_json::json;

fn on_self(method: UnboundMethod) -> CallTarget {
    CallTarget::Bound(method.bind(json!({})))
}

#[test]
fn bound_method_with_block_works_all_the_same() {
    let test_fn = UnboundMethod::native(
        "test_fn",
        Signature::new().req("x").keyreq("a").block("block"),
        |_, args| {
            let block_result = args.call_block(vec![])?;
            Ok(json!([args.value("x"), args.value("a"), block_result]))
        },
    );

    let call = Call::new()
        .with_args([json!("x")])
        .with_kwarg("a", json!(1))
        .with_block(Arc::new(|_| Ok(json!("test_block"))));

    let result = invoke(&on_self(test_fn), &call).expect("block is forwarded");
    assert_eq!(result, json!(["x", 1, "test_block"]));
}

#[test]
fn method_without_params_accepts_anything() {
    let test_fn = on_self(UnboundMethod::native("test_fn", Signature::new(), |_, _| {
        Ok(Value::Null)
    }));

    for call in [
        Call::new(),
        Call::new().with_args([json!("x"), json!("y")]),
        Call::new().with_kwargs(kwargs(json!({"a": 1, "b": 2}))),
    ] {
        assert_eq!(invoke(&test_fn, &call).expect("nothing is forwarded"), Value::Null);
    }
}

#[test]
fn method_that_only_takes_args() {
    let test_fn = on_self(UnboundMethod::native(
        "test_fn",
        Signature::new().req("arg"),
        |_, args| Ok(args.value("arg")),
    ));

    let err = invoke(&test_fn, &Call::new()).expect_err("arg is required");
    assert_eq!(err.kind, AmenableErrorKind::Argument);
    assert_eq!(err.message, "wrong number of arguments (given 0, expected 1)");

    let call = Call::new().with_args([json!("x"), json!("y")]);
    assert_eq!(invoke(&test_fn, &call).expect("extra args dropped"), json!("x"));

    let call = Call::new()
        .with_args([json!("x")])
        .with_kwargs(kwargs(json!({"a": 1, "b": 2})));
    assert_eq!(invoke(&test_fn, &call).expect("kwargs dropped"), json!("x"));
}

#[test]
fn method_that_only_takes_varargs() {
    let test_fn = on_self(UnboundMethod::native(
        "test_fn",
        Signature::new().rest("args"),
        |_, args| Ok(args.value("args")),
    ));

    assert_eq!(invoke(&test_fn, &Call::new()).expect("no args"), json!([]));

    let call = Call::new()
        .with_args([json!("x"), json!("y")])
        .with_kwargs(kwargs(json!({"a": 1, "b": 2})));
    assert_eq!(invoke(&test_fn, &call).expect("args kept"), json!(["x", "y"]));
}

#[test]
fn method_that_only_takes_keywords() {
    let test_fn = on_self(UnboundMethod::native(
        "test_fn",
        Signature::new().keyreq("a"),
        |_, args| Ok(args.value("a")),
    ));

    let err = invoke(&test_fn, &Call::new()).expect_err("a is required");
    assert_eq!(err.message, "missing keyword: a");

    let call = Call::new().with_args([json!("x")]).with_kwarg("a", json!(1));
    assert_eq!(invoke(&test_fn, &call).expect("positional dropped"), json!(1));

    let call = Call::new().with_kwargs(kwargs(json!({"a": 1, "b": 2})));
    assert_eq!(invoke(&test_fn, &call).expect("b dropped"), json!(1));
}

#[test]
fn unbound_method_must_be_resolved_first() {
    let name = UnboundMethod::native("name", Signature::new(), |receiver, _| {
        Ok(receiver["name"].clone())
    });
    let target = CallTarget::from(name);

    let err = invoke(&target, &Call::new()).expect_err("no receiver yet");
    assert_eq!(err.kind, AmenableErrorKind::InvalidCallable);

    let gino = target.resolve(&json!({"name": "Gino"}));
    assert_eq!(invoke(&gino, &Call::new()).expect("bound now"), json!("Gino"));
}

fn doggy() -> MethodTable {
    let table = MethodTable::new("Doggy");
    let bark = table.define_method(
        Visibility::Public,
        UnboundMethod::native("bark", Signature::new().opt("n", json!(1)), |_, args| {
            let n = args.value("n").as_u64().unwrap_or(1) as usize;
            Ok(json!(vec!["woof"; n]))
        }),
    );
    table.amend(&bark).expect("bark is defined");

    let name = table.define_method(
        Visibility::Public,
        UnboundMethod::native("name", Signature::new(), |receiver, _| {
            Ok(receiver["name"].clone())
        }),
    );
    table.amend(&name).expect("name is defined");
    table
}

#[test]
fn doggy_barks_with_any_arguments() {
    let table = doggy();
    let gino = json!({"name": "Gino"});

    assert_eq!(
        table.public_send(&gino, "bark", Call::new()).expect("default"),
        json!(["woof"])
    );
    assert_eq!(
        table
            .public_send(&gino, "bark", Call::new().with_args([json!(2)]))
            .expect("explicit count"),
        json!(["woof", "woof"])
    );
    let noisy = Call::new()
        .with_args([json!(2), json!("x")])
        .with_kwarg("a", json!(4));
    assert_eq!(
        table.public_send(&gino, "bark", noisy).expect("extras ignored"),
        json!(["woof", "woof"])
    );
}

#[test]
fn doggy_name_reads_the_receiver() {
    let table = doggy();
    let call = Call::new().with_args([json!("x")]).with_kwarg("a", json!(1));
    assert_eq!(
        table
            .public_send(&json!({"name": "Gino"}), "name", call)
            .expect("extras ignored"),
        json!("Gino")
    );
}

#[test]
fn class_level_methods_live_in_their_own_table() {
    let singleton = MethodTable::new("Doggy.singleton");
    let species = singleton.define_method(
        Visibility::Public,
        UnboundMethod::native("species", Signature::new(), |class, _| {
            Ok(json!(class.as_str().unwrap_or_default().to_lowercase()))
        }),
    );
    singleton.amend(&species).expect("species is defined");

    let call = Call::new().with_args([json!("x")]).with_kwarg("a", json!(1));
    assert_eq!(
        singleton
            .public_send(&json!("Doggy"), "species", call)
            .expect("extras ignored"),
        json!("doggy")
    );
}

#[test]
fn cat_keeps_private_and_protected_slots_hidden() {
    let cat = MethodTable::new("Cat");
    let asleep = cat.define_method(
        Visibility::Private,
        UnboundMethod::native("asleep?", Signature::new(), |_, _| Ok(json!(true))),
    );
    cat.amend(&asleep).expect("asleep? is defined");
    cat.define_method(
        Visibility::Protected,
        UnboundMethod::native("lives", Signature::new(), |_, _| Ok(json!(9))),
    );
    cat.amend("lives").expect("lives is defined");

    assert_eq!(cat.method_names(Visibility::Private), vec!["asleep?"]);
    assert_eq!(cat.method_names(Visibility::Protected), vec!["lives"]);

    let cheshire = json!({"name": "Cheshire"});
    for name in ["asleep?", "lives"] {
        let err = cat
            .public_send(&cheshire, name, Call::new())
            .expect_err("hidden from the outside");
        assert_eq!(err.kind, AmenableErrorKind::NoMethod);
    }

    let noisy = || {
        Call::new()
            .with_args([json!("x"), json!("y")])
            .with_kwargs(kwargs(json!({"a": 1, "b": 2})))
    };
    assert_eq!(
        cat.send(&cheshire, "asleep?", noisy()).expect("send reaches private"),
        json!(true)
    );
    assert_eq!(
        cat.send(&cheshire, "lives", noisy()).expect("send reaches protected"),
        json!(9)
    );
}
