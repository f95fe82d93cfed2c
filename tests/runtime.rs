use std::{
    any::Any,
    cell::Cell,
    fmt,
    rc::Rc,
};

use ascent::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::core::{Arity, Builtins},
        value::{
            core::Value,
            host::HostObject,
            import::{ImportKind, ImportVar},
        },
    },
    runtime::{EvaluateOptions, Evaluation, HostInputs, Runtime},
};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Vec2 {
    x: Cell<f64>,
    y: Cell<f64>,
}

impl Vec2 {
    fn new(x: f64, y: f64) -> Self {
        Self { x: Cell::new(x),
               y: Cell::new(y) }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x.get(), self.y.get())
    }
}

impl HostObject for Vec2 {
    fn type_name(&self) -> &str {
        "Vec2"
    }

    fn get_field(&self, name: &str) -> Option<Value> {
        match name {
            "x" => Some(Value::Number(self.x.get())),
            "y" => Some(Value::Number(self.y.get())),
            "length" => Some(Value::Number(self.x.get().hypot(self.y.get()))),
            _ => None,
        }
    }

    fn set_field(&self, name: &str, value: Value) -> bool {
        let (field, Value::Number(n)) = (name, value) else {
            return false;
        };
        match field {
            "x" => self.x.set(n),
            "y" => self.y.set(n),
            _ => return false,
        }
        true
    }

    fn try_add(&self, rhs: &Value) -> Option<Value> {
        let other = rhs.as_object().ok()?.as_any().downcast_ref::<Self>()?;
        Some(Rc::new(Self::new(self.x.get() + other.x.get(), self.y.get() + other.y.get())).into())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Tag;

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag")
    }
}

impl HostObject for Tag {
    fn type_name(&self) -> &str {
        "Tag"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn evaluate_with(runtime: &mut Runtime, source: &str, inputs: &HostInputs) -> Result<Evaluation, Error> {
    runtime.evaluate(source, inputs, EvaluateOptions::default())
}

fn value_of(source: &str, inputs: &HostInputs) -> Value {
    match evaluate_with(&mut Runtime::new(), source, inputs) {
        Ok(evaluation) => evaluation.value,
        Err(e) => panic!("Script failed: {e}\n{source}"),
    }
}

#[test]
fn cached_programs_are_compiled_once() {
    let calls = Rc::new(Cell::new(0.0));
    let counter = Rc::clone(&calls);

    let mut runtime = Runtime::new();
    runtime.register("tick", Arity::Exact(0), move |_| {
               counter.set(counter.get() + 1.0);
               Ok(Value::Number(counter.get()))
           });

    let source = "tick();";
    let inputs = HostInputs::default();

    let first = evaluate_with(&mut runtime, source, &inputs).unwrap();
    let second = evaluate_with(&mut runtime, source, &inputs).unwrap();

    assert_eq!(first.value, Value::Number(1.0));
    assert_eq!(second.value, Value::Number(2.0));
    assert_eq!(calls.get(), 2.0);
    assert_eq!(runtime.compilations(), 1);
    assert_eq!(runtime.cached(), 1);
}

#[test]
fn disabling_the_cache_recompiles() {
    let mut runtime = Runtime::new();
    let options = EvaluateOptions { cache: false,
                                    ..EvaluateOptions::default() };

    for _ in 0..3 {
        runtime.evaluate("1 + 1", &HostInputs::default(), options).unwrap();
    }

    assert_eq!(runtime.compilations(), 3);
    assert_eq!(runtime.cached(), 0);
}

#[test]
fn invalidation_forces_recompilation() {
    let mut runtime = Runtime::new();
    let inputs = HostInputs::default();

    evaluate_with(&mut runtime, "let a = 1;", &inputs).unwrap();
    evaluate_with(&mut runtime, "let b = 2;", &inputs).unwrap();
    assert_eq!(runtime.cached(), 2);

    assert!(runtime.invalidate("let a = 1;"));
    assert!(!runtime.invalidate("let a = 1;"));
    assert_eq!(runtime.cached(), 1);

    evaluate_with(&mut runtime, "let a = 1;", &inputs).unwrap();
    assert_eq!(runtime.compilations(), 3);

    runtime.clear_cache();
    assert_eq!(runtime.cached(), 0);
}

#[test]
fn registering_a_builtin_clears_the_cache() {
    let mut runtime = Runtime::new();
    evaluate_with(&mut runtime, "1;", &HostInputs::default()).unwrap();

    runtime.register("twice", Arity::Exact(1), |args| Ok(Value::Number(args[0].as_number()? * 2.0)));

    assert_eq!(runtime.cached(), 0);
    let evaluation = evaluate_with(&mut runtime, "let a = twice(4); a;", &HostInputs::default()).unwrap();
    assert_eq!(evaluation.value, Value::Number(8.0));
}

#[test]
fn failed_compilation_is_not_cached() {
    let mut runtime = Runtime::new();

    assert!(matches!(evaluate_with(&mut runtime, "(1 + 2", &HostInputs::default()),
                     Err(Error::Parse(_))));
    assert_eq!(runtime.cached(), 0);
}

#[test]
fn cached_program_keeps_its_function_table() {
    let mut runtime = Runtime::new();
    let source = "function f(){ return 1; } f();";
    let inputs = HostInputs::default();

    let first = evaluate_with(&mut runtime, source, &inputs).unwrap();
    let second = evaluate_with(&mut runtime, source, &inputs).unwrap();

    assert_eq!(first.value, Value::Number(1.0));
    assert_eq!(second.value, Value::Number(1.0));
    assert!(first.environment.shares_functions_with(&second.environment));
}

#[test]
fn host_errors_propagate() {
    let mut runtime = Runtime::new();
    runtime.register("fail", Arity::Variadic, |args| {
               Err(RuntimeError::Host { details: format!("refused {} arguments", args.len()) })
           });

    let error = evaluate_with(&mut runtime, "fail(1, 2)", &HostInputs::default()).unwrap_err();
    assert_eq!(error.to_string(), "Host error: refused 2 arguments.");
}

#[test]
fn custom_builtin_registry() {
    let mut builtins = Builtins::empty();
    builtins.register("one", Arity::Exact(0), |_| Ok(Value::Number(1.0)));

    let mut runtime = Runtime::with_builtins(builtins);
    assert!(!runtime.builtins().contains("sin"));

    let evaluation = evaluate_with(&mut runtime, "one() + one()", &HostInputs::default()).unwrap();
    assert_eq!(evaluation.value, Value::Number(2.0));
}

#[test]
fn query_variables() {
    let inputs = HostInputs::default().with_query("time", Value::Number(2.5));

    assert_eq!(value_of("q.time * 2", &inputs), Value::Number(5.0));
    assert_eq!(value_of("query.time + 1", &inputs), Value::Number(3.5));
    assert_eq!(value_of("q.missing", &inputs), Value::Number(0.0));
}

#[test]
fn program_introspection() {
    let mut runtime = Runtime::new();

    let program = runtime.compile("import speed-float; using A.B; function f(a){ return a; } q.t;")
                         .unwrap();
    assert_eq!(program.imports(), ["speed-float"]);
    assert_eq!(program.usings(), ["A.B"]);
    assert!(program.functions().borrow().contains_key("f"));
    assert!(!program.is_static());

    assert!(runtime.compile("1 + 2").unwrap().is_static());
    assert_eq!(runtime.cached(), 0);
}

#[test]
fn calls_are_never_static() {
    let mut runtime = Runtime::new();

    let program = runtime.compile("function f(){ return q.t; } f();").unwrap();
    assert!(!program.expressions()[0].is_static());
    assert!(!program.expressions()[1].is_static());

    let program = runtime.compile("function one(){ return 1; } one(); debug(1);").unwrap();
    assert!(program.expressions()[0].is_static());
    assert!(!program.expressions()[1].is_static());
    assert!(!program.expressions()[2].is_static());
}

#[test]
fn serialized_imports() {
    let inputs =
        HostInputs::default().with_import("speed", ImportVar::serialized(ImportKind::Float, "1.5"))
                             .with_import("on", ImportVar::serialized(ImportKind::Bool, "true"))
                             .with_import("label", ImportVar::serialized(ImportKind::String, "hi"));

    assert_eq!(value_of("import speed-float; speed * 2;", &inputs), Value::Number(3.0));
    assert_eq!(value_of("import on-bool; on ? 1 : 2;", &inputs), Value::Number(1.0));
    let label = value_of("import label-string; label + \"!\";", &inputs);
    assert_eq!(label.as_text().unwrap(), "hi!");
}

#[test]
fn import_failures() {
    let inputs = HostInputs::default().with_import("speed",
                                                   ImportVar::serialized(ImportKind::Float, "fast"));

    let error = evaluate_with(&mut Runtime::new(), "import speed-float; speed;", &inputs).unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::Cast { expected: "number", .. })));

    let error = evaluate_with(&mut Runtime::new(), "import ghost-float; 1;", &inputs).unwrap_err();
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UndefinedReference { kind: "import", .. })));
}

#[test]
fn host_object_members() {
    let position = Rc::new(Vec2::new(1.0, 2.0));
    let handle: Rc<dyn HostObject> = position.clone();
    let inputs = HostInputs::default().with_import("pos", ImportVar::Object(handle));

    let value = value_of("import pos-object; pos.x = pos.x + 10; pos.x + pos.y;", &inputs);

    assert_eq!(value, Value::Number(13.0));
    assert_eq!(position.x.get(), 11.0);
    assert_eq!(value_of("import pos-object; pos.length;", &inputs), Value::Number(11.0_f64.hypot(2.0)));
}

#[test]
fn host_object_member_errors() {
    let inputs = HostInputs::default().with_import("pos", ImportVar::Object(Rc::new(Vec2::new(0.0, 0.0))));

    let error = evaluate_with(&mut Runtime::new(), "import pos-object; pos.z;", &inputs).unwrap_err();
    assert_eq!(error.to_string(), "Undefined reference: member 'Vec2.z' does not exist.");

    let error =
        evaluate_with(&mut Runtime::new(), "import pos-object; pos.x = \"far\";", &inputs).unwrap_err();
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UndefinedReference { kind: "member", .. })));

    let error = evaluate_with(&mut Runtime::new(), "let n = 1; n.x;", &inputs).unwrap_err();
    assert!(matches!(error, Error::Runtime(RuntimeError::Cast { expected: "object", .. })));
}

#[test]
fn host_object_addition_and_fallback() {
    let inputs = HostInputs::default().with_import("a", ImportVar::Object(Rc::new(Vec2::new(1.0, 2.0))))
                                      .with_import("b", ImportVar::Object(Rc::new(Vec2::new(3.0, 4.0))));

    let sum = value_of("import a-object; import b-object; a + b;", &inputs);
    assert!(sum.as_object().is_ok());
    assert_eq!(sum.to_string(), "(4, 6)");

    assert_eq!(value_of("import a-object; a + 1;", &inputs), Value::from("(1, 2)1"));
    assert_eq!(value_of("import a-object; \"at \" + a;", &inputs), Value::from("at (1, 2)"));
}

#[test]
fn host_object_defaults() {
    let tag = Tag;
    assert_eq!(tag.get_field("x"), None);
    assert!(!tag.set_field("x", Value::Number(1.0)));
    assert!(tag.try_add(&Value::Number(1.0)).is_none());

    let inputs = HostInputs::default().with_import("t", ImportVar::Object(Rc::new(Tag)));
    assert_eq!(value_of("import t-object; t + 1;", &inputs), Value::from("tag1"));

    let error = evaluate_with(&mut Runtime::new(), "import t-object; t.name;", &inputs).unwrap_err();
    assert_eq!(error.to_string(), "Undefined reference: member 'Tag.name' does not exist.");
}
