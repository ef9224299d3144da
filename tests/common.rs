//! Common test utilities: tree builders and a minimal JSON-Logic evaluator
//! standing in for the external backend.

use kumiki::prelude::*;
use serde_json::{Value as Json, json};

/// A tiny JSON-Logic interpreter covering only the operators these tests
/// exercise. The real evaluator lives outside the crate; this stand-in just
/// has to agree with it on the expressions used here.
#[allow(dead_code)]
pub struct MiniBackend;

impl LogicBackend for MiniBackend {
    fn apply(&self, rule: &Json, data: &Json) -> Json {
        eval(rule, data)
    }
}

fn eval(rule: &Json, data: &Json) -> Json {
    let Json::Object(obj) = rule else {
        return rule.clone();
    };
    if obj.len() != 1 {
        return rule.clone();
    }
    let (op, payload) = obj.iter().next().unwrap();
    let args: Vec<Json> = match payload {
        Json::Array(items) => items.iter().map(|item| eval(item, data)).collect(),
        single => vec![eval(single, data)],
    };

    match op.as_str() {
        "var" => lookup(data, args[0].as_str().unwrap_or_default()),
        "==" => json!(loose_eq(&args[0], &args[1])),
        "===" => json!(args[0] == args[1]),
        "and" => json!(args.iter().all(truthy)),
        "or" => json!(args.iter().any(truthy)),
        "!" => json!(!truthy(&args[0])),
        other => panic!("MiniBackend does not implement '{}'", other),
    }
}

/// JavaScript-style loose equality, as far as the tests need it.
fn loose_eq(a: &Json, b: &Json) -> bool {
    if a == b {
        return true;
    }
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn as_number(v: &Json) -> Option<f64> {
    match v {
        Json::Number(n) => n.as_f64(),
        Json::String(s) => s.parse().ok(),
        Json::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn truthy(v: &Json) -> bool {
    match v {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Json::String(s) => !s.is_empty(),
        Json::Array(items) => !items.is_empty(),
        Json::Object(_) => true,
    }
}

fn lookup(data: &Json, path: &str) -> Json {
    if path.is_empty() {
        return data.clone();
    }
    let mut current = data;
    for segment in path.split('.') {
        let next = match current {
            Json::Object(map) => map.get(segment),
            Json::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(v) => current = v,
            None => return Json::Null,
        }
    }
    current.clone()
}

/// Shorthand for an operation node with the given operands.
#[allow(dead_code)]
pub fn op(signature: &str, children: Vec<RuleNode>) -> RuleNode {
    RuleNode::operation(signature, children)
}

/// Shorthand for a raw value leaf.
#[allow(dead_code)]
pub fn leaf(v: impl Into<Json>) -> RuleNode {
    RuleNode::value(v)
}
