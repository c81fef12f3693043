use std::fs;

use nodeval::{
    ast::Operator,
    error::EvalError,
    evaluate,
    interpreter::{
        evaluator::core::{Context, Evaluation},
        system::core::System,
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use walkdir::WalkDir;

#[derive(Deserialize)]
struct Fixture {
    system: System,
    cases:  Vec<Case>,
}

#[derive(Deserialize)]
struct Case {
    node:         String,
    #[serde(default)]
    expr:         Option<String>,
    value:        Option<Value>,
    well_defined: bool,
    #[serde(default)]
    referenced:   Option<Vec<String>>,
    #[serde(default)]
    output:       Option<Vec<String>>,
}

#[test]
fn fixture_systems_evaluate_as_recorded() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/systems").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let fixture: Fixture =
            serde_json::from_str(&content).unwrap_or_else(|e| panic!("Bad fixture {path:?}: {e}"));

        for case in fixture.cases {
            count += 1;
            let evaluation = evaluate(fixture.system.clone(), &case.node, case.expr.as_deref());
            let label = format!("{path:?}: '{}' at '{}'",
                                case.expr.as_deref().unwrap_or("<stored>"),
                                case.node);

            assert_eq!(evaluation.value, case.value, "value of {label}");
            assert_eq!(evaluation.well_defined, case.well_defined, "well_defined of {label}");
            if let Some(referenced) = case.referenced {
                assert_eq!(paths(&evaluation.referenced), referenced, "referenced of {label}");
            }
            if let Some(output) = case.output {
                assert_eq!(paths(&evaluation.output), output, "output of {label}");
            }
        }
    }

    assert!(count > 0, "No cases found in tests/systems");
}

fn paths<'a>(set: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    set.into_iter().cloned().collect()
}

fn list(items: &[f64]) -> Value {
    Value::List(items.iter().copied().map(Value::from).collect())
}

fn tank() -> System {
    System::new().with("tank",
                       [("level", Value::from(3.0)),
                        ("limit", Value::from(9.0)),
                        ("x", Value::from(0.0)),
                        ("gauge", Value::from([("reading", Value::from("parent.parent.level"))])),
                        ("next", Value::from("= parent.level (+ parent.level 1)"))])
}

fn assert_value(expr: &str, expected: Value) {
    let evaluation = evaluate(tank(), "tank", Some(expr));
    assert!(evaluation.well_defined, "'{expr}' is not well defined: {:?}", evaluation.diagnostics);
    assert_eq!(evaluation.value, Some(expected), "value of '{expr}'");
}

fn assert_undefined(expr: &str) -> Evaluation {
    let evaluation = evaluate(tank(), "tank", Some(expr));
    assert!(!evaluation.well_defined, "'{expr}' was expected not to be well defined");
    evaluation
}

#[rstest]
#[case("2.5", Value::from(2.5))]
#[case("-3", Value::from(-3.0))]
#[case("1e3", Value::from(1000.0))]
#[case("True", Value::from(true))]
#[case("true", Value::from(true))]
#[case("False", Value::from(false))]
#[case("false", Value::from(false))]
#[case("//+ 1 2", Value::from("//+ 1 2"))]
#[case("", Value::from(""))]
fn literals(#[case] expr: &str, #[case] expected: Value) {
    assert_value(expr, expected);
}

#[test]
fn non_text_override_is_returned_verbatim() {
    let node = Value::from([("a", 1.0)]);
    let evaluation = Context::new().evaluate(tank(), "tank", Some(node.clone()));

    assert!(evaluation.well_defined);
    assert_eq!(evaluation.value, Some(node));
    assert!(evaluation.referenced.is_empty());
}

#[test]
fn list_literal_evaluates_each_element() {
    assert_value("[1,2,3]", list(&[1.0, 2.0, 3.0]));
    assert_value("[]", list(&[]));
    assert_value("[level, (* limit 2)]", list(&[3.0, 18.0]));

    let evaluation = evaluate(tank(), "tank", Some("[level, limit, level]"));
    assert_eq!(paths(&evaluation.referenced), ["tank.level", "tank.limit"]);
}

#[test]
fn list_with_undefined_element_keeps_its_position() {
    let evaluation = assert_undefined("[1, (/ 1 0), 3]");

    assert_eq!(evaluation.value,
               Some(Value::List(vec![Value::from(1.0), Value::Null, Value::from(3.0)])));
}

#[test]
fn list_followed_by_more_text_has_no_value() {
    let evaluation = evaluate(tank(), "tank", Some("[1,2] level"));

    assert!(evaluation.well_defined);
    assert_eq!(evaluation.value, None);
    assert!(evaluation.referenced.is_empty());
    assert!(evaluation.diagnostics.is_empty());
}

#[rstest]
#[case("+ 3 4", 7.0)]
#[case("- 10 3 2", 5.0)]
#[case("* 2 3 4", 24.0)]
#[case("/ 9 2", 4.5)]
#[case("% 7 3", 1.0)]
#[case("% -7 3", 2.0)]
#[case("% 7 -3", -2.0)]
#[case("+ level limit", 12.0)]
#[case("(+ level 1)", 4.0)]
#[case("((* level (+ 1 1)))", 6.0)]
#[case("+, level, 1,", 4.0)]
#[case("+ true 1", 2.0)]
fn arithmetic(#[case] expr: &str, #[case] expected: f64) {
    assert_value(expr, Value::from(expected));
}

#[rstest]
#[case("== 2 2", true)]
#[case("== level 4", false)]
#[case("< 1 2", true)]
#[case("<= 2 2", true)]
#[case("> level limit", false)]
#[case(">= limit level", true)]
fn comparisons(#[case] expr: &str, #[case] expected: bool) {
    assert_value(expr, Value::from(expected));
}

#[rstest]
#[case("+ [1,2] 3", list(&[4.0, 5.0]))]
#[case("- 10 [1,2]", list(&[9.0, 8.0]))]
#[case("* [1,2] [3,4]", list(&[3.0, 8.0]))]
#[case("+ [1,2] 1 [10,20]", list(&[12.0, 23.0]))]
#[case("> [1,5] 3", Value::List(vec![Value::from(false), Value::from(true)]))]
#[case("dot [1,2] [3,4]", Value::from(11.0))]
#[case("sum [1,2,3]", Value::from(6.0))]
#[case("sigma [1,2,3]", Value::from(6.0))]
#[case("pi [1,2,3]", Value::from(0.0))]
#[case("cardinality [4,5,6]", Value::from(3.0))]
#[case("cardinality //abc", Value::from(5.0))]
#[case("union [1,2] [2,3]", list(&[1.0, 2.0, 3.0]))]
#[case("union 1 [1,4]", list(&[1.0, 4.0]))]
#[case("intersection [1,2,3] [3,1]", list(&[1.0, 3.0]))]
fn list_operators(#[case] expr: &str, #[case] expected: Value) {
    assert_value(expr, expected);
}

#[rstest]
#[case("dot [1,2] [3]")]
#[case("+ [1,2] [1,2,3]")]
#[case("/ level 0")]
#[case("% level 0")]
#[case("sum 5")]
#[case("intersection 1 [1]")]
fn failed_operations_are_reported(#[case] expr: &str) {
    let evaluation = assert_undefined(expr);

    assert_eq!(evaluation.value, None);
    assert!(matches!(evaluation.diagnostics.as_slice(),
                     [EvalError::Evaluation { .. }]),
            "diagnostics of '{expr}': {:?}",
            evaluation.diagnostics);
}

#[rstest]
#[case("+ 1", "at least 2", 1)]
#[case("sum [1] [2]", "exactly 1", 2)]
#[case("cardinality", "exactly 1", 0)]
fn operator_arity_is_checked(#[case] expr: &str,
                             #[case] expected: &'static str,
                             #[case] found: usize) {
    let evaluation = assert_undefined(expr);

    let operator = evaluation.operators.first().copied().expect("operator recorded");
    assert_eq!(evaluation.diagnostics,
               vec![EvalError::OperatorArity { operator,
                                               expected,
                                               found }]);
}

#[test]
fn unresolved_symbol_is_returned_as_text() {
    let evaluation = assert_undefined("volume");

    assert_eq!(evaluation.value, Some(Value::from("volume")));
    assert_eq!(evaluation.diagnostics,
               vec![EvalError::UnknownSymbol { symbol: "volume".to_string() }]);
}

#[test]
fn leading_comma_is_not_trimmed_from_the_operator() {
    let evaluation = assert_undefined(",+ 1 2");

    assert_eq!(evaluation.value, Some(Value::from(",+ 1 2")));
    assert_eq!(evaluation.diagnostics,
               vec![EvalError::UnknownSymbol { symbol: ",+ 1 2".to_string() }]);
}

#[test]
fn undefined_operand_still_applies_the_operator() {
    let evaluation = assert_undefined("cardinality [1, volume]");

    assert_eq!(evaluation.value, Some(Value::from(2.0)));
}

#[test]
fn invalid_node_is_reported() {
    let evaluation = evaluate(tank(), "tank.volume", None);

    assert!(!evaluation.well_defined);
    assert_eq!(evaluation.value, None);
    assert_eq!(evaluation.diagnostics,
               vec![EvalError::InvalidPath { path: "tank.volume".to_string() }]);
}

#[test]
fn reference_metadata_covers_one_hop() {
    let evaluation = evaluate(tank(), "tank", Some("+ gauge.reading 1"));

    assert!(evaluation.well_defined);
    assert_eq!(evaluation.value, Some(Value::from(4.0)));
    assert_eq!(paths(&evaluation.referenced), ["tank.gauge.reading"]);
    assert_eq!(evaluation.operators.iter().copied().collect::<Vec<_>>(), [Operator::Add]);
}

#[test]
fn following_a_reference_clears_nested_operators() {
    let evaluation = evaluate(tank(), "tank", Some("next"));

    assert_eq!(paths(&evaluation.referenced), ["tank.next"]);
    assert!(evaluation.output.is_empty());
    assert!(evaluation.operators.is_empty());
    assert_eq!(evaluation.system.resolve("tank.level").unwrap().value, &Value::from(4.0));
}

#[rstest]
#[case::mutual(&[("x", "parent.y"), ("y", "parent.x")])]
#[case::itself(&[("x", "parent.x")])]
#[case::through_a_formula(&[("x", "+ parent.y 1"), ("y", "* parent.x 2")])]
fn reference_loops_terminate(#[case] entries: &[(&str, &str)]) {
    let node: Value = Value::Node(entries.iter()
                                         .map(|(key, formula)| {
                                             ((*key).to_string(), Value::from(*formula))
                                         })
                                         .collect());
    let system = System::new().with("a", node);

    let evaluation = evaluate(system, "a.x", None);

    assert!(!evaluation.well_defined);
    assert!(evaluation.diagnostics
                      .iter()
                      .any(|e| matches!(e, EvalError::LoopDetected { .. })));
}

#[test]
fn reference_cycle_has_no_value() {
    let system = System::new().with("a",
                                    [("x", Value::from("parent.y")),
                                     ("y", Value::from("parent.x"))]);

    let evaluation = evaluate(system, "a.x", None);

    assert_eq!(evaluation.value, None);
    assert_eq!(paths(&evaluation.referenced), ["a.y"]);
}

#[test]
fn assignment_updates_the_system() {
    let evaluation = evaluate(tank(), "tank", Some("= x 5"));

    assert!(evaluation.well_defined);
    assert_eq!(evaluation.value, Some(Value::from(5.0)));
    assert_eq!(paths(&evaluation.output), ["tank.x"]);
    assert!(evaluation.referenced.is_empty());
    assert_eq!(evaluation.system.resolve("tank.x").unwrap().value, &Value::from(5.0));
}

#[test]
fn assignment_reading_its_target_is_not_a_reference() {
    let evaluation = evaluate(tank(), "tank", Some("= level (+ level limit)"));

    assert_eq!(evaluation.value, Some(Value::from(12.0)));
    assert_eq!(paths(&evaluation.referenced), ["tank.limit"]);
    assert_eq!(paths(&evaluation.output), ["tank.level"]);
}

#[test]
fn assignment_is_seen_by_later_operands() {
    let evaluation = evaluate(tank(), "tank", Some("+ (= x 2) x"));

    assert!(evaluation.well_defined);
    assert_eq!(evaluation.value, Some(Value::from(4.0)));
    assert_eq!(paths(&evaluation.output), ["tank.x"]);
}

#[test]
fn assignment_through_navigation_lands_on_the_canonical_path() {
    let evaluation = evaluate(tank(), "tank.gauge", Some("= this.parent.x 7"));

    assert!(evaluation.well_defined);
    assert_eq!(paths(&evaluation.output), ["tank.x"]);
    assert_eq!(evaluation.system.resolve("tank.x").unwrap().value, &Value::from(7.0));
}

#[rstest]
#[case("= (x) 5")]
#[case("= 3 5")]
fn assignment_without_a_target_fails(#[case] expr: &str) {
    let evaluation = assert_undefined(expr);

    assert_eq!(evaluation.value, None);
    assert_eq!(evaluation.system, tank());
}

#[test]
fn assignment_with_a_number_target_is_reported() {
    let evaluation = assert_undefined("= 3 5");

    assert!(matches!(evaluation.diagnostics.as_slice(),
                     [EvalError::Assignment { path: None, .. }]));
}

#[rstest]
#[case("= x")]
#[case("= x 1 2")]
#[case("= x volume")]
fn assignment_needs_two_defined_operands(#[case] expr: &str) {
    let evaluation = assert_undefined(expr);

    assert_eq!(evaluation.value, None);
    assert!(evaluation.output.is_empty());
    assert_eq!(evaluation.system, tank());
}

#[rstest]
#[case("tank.next", Some("+ parent.level parent.limit"))]
#[case("tank.gauge.reading", None)]
#[case("tank", Some("[level, (+ 1 2), volume]"))]
fn read_only_evaluation_is_idempotent(#[case] node: &str, #[case] expr: Option<&str>) {
    let context = Context::new();
    let system = tank();

    let first = context.evaluate(system.clone(), node, expr.map(Value::from));
    let second = context.evaluate(first.system.clone(), node, expr.map(Value::from));

    assert_eq!(first.system, system);
    assert_eq!(second.system, system);
    assert_eq!(first.value, second.value);
    assert_eq!(first.well_defined, second.well_defined);
}

#[test]
fn nesting_beyond_the_limit_is_reported() {
    let expr = format!("{}1{}", "(+ 1 ".repeat(8), ")".repeat(8));

    let evaluation = Context::new().with_max_depth(4)
                                   .evaluate(tank(), "tank", Some(Value::from(expr.as_str())));

    assert!(!evaluation.well_defined);
    assert!(evaluation.diagnostics.contains(&EvalError::DepthExceeded { limit: 4 }));

    let evaluation = Context::new().evaluate(tank(), "tank", Some(Value::from(expr.as_str())));
    assert_eq!(evaluation.value, Some(Value::from(9.0)));
}

#[test]
fn inputs_do_not_change_the_result() {
    let with_inputs = Context::new().with_inputs(["tank.level"])
                                    .evaluate(tank(), "tank", Some(Value::from("+ level 1")));
    let without = Context::new().evaluate(tank(), "tank", Some(Value::from("+ level 1")));

    assert_eq!(with_inputs, without);
}

#[test]
fn evaluation_serializes_without_the_system() {
    let evaluation = evaluate(tank(), "tank", Some("+ level 1"));

    let json = serde_json::to_value(&evaluation).unwrap();

    assert_eq!(json,
               serde_json::json!({
                   "referenced": ["tank.level"],
                   "output": [],
                   "operators": ["+"],
                   "well_defined": true,
                   "value": 4.0
               }));
}
