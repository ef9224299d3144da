//! The builtin operator table.
//!
//! Order matters: the registry preserves it for dropdown rendering.

use super::FieldType::{Accessor, Any, HigherOrder, Input};
use super::OperatorCategory as Cat;
use super::{Cardinality, FieldSchedule, FieldType, OperatorDefinition};
use crate::validate::MASTER;

fn higher_order(signature: &str) -> OperatorDefinition {
    OperatorDefinition::new(
        signature,
        signature,
        Cat::HigherOrder,
        vec![HigherOrder, Any],
        Cardinality::new(1, 10),
    )
}

fn binary(signature: &str, category: Cat, max: usize) -> OperatorDefinition {
    OperatorDefinition::new(
        signature,
        signature,
        category,
        vec![Any, Any],
        Cardinality::new(2, max),
    )
}

pub(super) fn default_operators() -> Vec<OperatorDefinition> {
    vec![
        OperatorDefinition::new(
            "value",
            "value",
            Cat::Value,
            vec![Input],
            Cardinality::new(1, 1),
        )
        .forbidden_under([MASTER, "or", "and"]),
        higher_order("some"),
        higher_order("every"),
        higher_order("map"),
        higher_order("filter"),
        OperatorDefinition::new(
            "var",
            "accessor",
            Cat::Accessor,
            vec![Accessor],
            Cardinality::new(1, 1),
        )
        .forbidden_under([MASTER]),
        OperatorDefinition::new(
            "if",
            "if",
            Cat::Statement,
            vec![Any, FieldType::with_text("then"), FieldType::with_text("else")],
            Cardinality::new(3, 100),
        )
        .with_schedule(FieldSchedule::ConditionalChain),
        binary("or", Cat::Statement, 100),
        binary("and", Cat::Statement, 100),
        binary("===", Cat::Logical, 2),
        binary("==", Cat::Logical, 2),
        binary("!=", Cat::Logical, 2),
        binary("!==", Cat::Logical, 2),
        OperatorDefinition::new("!", "!", Cat::Logical, vec![Any], Cardinality::new(1, 1)),
        binary("<=", Cat::Numeric, 100),
        binary(">=", Cat::Numeric, 2),
        binary("<", Cat::Numeric, 100),
        binary(">", Cat::Numeric, 2),
        OperatorDefinition::new(
            "+",
            "+",
            Cat::Arithmetic,
            vec![Any, Any],
            Cardinality::new(1, 100),
        ),
        // min = 1 keeps unary negation available; a lone operand serializes
        // as `{"-": [x]}`.
        OperatorDefinition::new(
            "-",
            "-",
            Cat::Arithmetic,
            vec![Any, Any],
            Cardinality::new(1, 2),
        ),
        binary("*", Cat::Arithmetic, 100),
        binary("/", Cat::Arithmetic, 2),
        binary("%", Cat::Arithmetic, 2),
        binary("max", Cat::Arithmetic, 100),
        binary("min", Cat::Arithmetic, 100),
    ]
}
