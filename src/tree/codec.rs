//! The JSON-Logic wire codec. This is the sole persisted/serialized form of a
//! rule tree, and it must stay compatible with external JSON-Logic
//! evaluators.

use super::RuleNode;
use crate::error::ParseError;
use crate::schema::OperatorRegistry;
use serde_json::{Map, Value as Json};

/// Signature of the UI-only wrapper operator for raw values. It is not a
/// JSON-Logic operator, so it serializes to its lone child's raw value.
const VALUE_WRAPPER: &str = "value";

impl RuleNode {
    /// Serializes this tree into JSON-Logic syntax.
    ///
    /// An operation becomes a single-key object mapping its signature to the
    /// operand array, except fixed-arity-1 operators, whose lone operand is
    /// emitted unwrapped (`{"var": "path"}` rather than `{"var": ["path"]}`).
    pub fn to_json_logic(&self, registry: &OperatorRegistry) -> Json {
        match self {
            RuleNode::Empty => Json::Object(Map::new()),
            RuleNode::Value(v) => v.clone(),
            RuleNode::Operation {
                signature,
                children,
            } => {
                let fixed_unary = registry
                    .find(signature)
                    .is_some_and(|op| op.cardinality.is_fixed_unary());

                if fixed_unary && children.len() == 1 {
                    let child = children[0].to_json_logic(registry);
                    if signature == VALUE_WRAPPER {
                        return child;
                    }
                    let mut obj = Map::new();
                    obj.insert(signature.clone(), child);
                    return Json::Object(obj);
                }

                let operands = children
                    .iter()
                    .map(|c| c.to_json_logic(registry))
                    .collect::<Vec<_>>();
                let mut obj = Map::new();
                obj.insert(signature.clone(), Json::Array(operands));
                Json::Object(obj)
            }
        }
    }

    /// Parses a JSON-Logic expression back into a rule tree.
    ///
    /// Scalars, arrays, and objects that cannot be read as an operator
    /// application are literal leaves; `{}` is the unset state. A single-key
    /// object whose key is a registered signature becomes an operation (a
    /// non-array payload is treated as one operand). The parse fails when an
    /// unknown key carries an operand array, or when a known operator's
    /// operand count falls outside its cardinality bounds.
    pub fn from_json_logic(registry: &OperatorRegistry, json: &Json) -> Result<RuleNode, ParseError> {
        let Json::Object(obj) = json else {
            return Ok(RuleNode::Value(json.clone()));
        };
        if obj.is_empty() {
            return Ok(RuleNode::Empty);
        }
        if obj.len() != 1 {
            // Multi-key objects cannot be operator applications; keep them
            // as a literal leaf.
            return Ok(RuleNode::Value(json.clone()));
        }

        let (key, payload) = obj.iter().next().expect("object has exactly one entry");

        let Some(op) = registry.find(key) else {
            if payload.is_array() {
                return Err(ParseError::malformed(format!(
                    "'{}' is not a known operator signature",
                    key
                )));
            }
            return Ok(RuleNode::Value(json.clone()));
        };

        let children = match payload {
            Json::Array(operands) => operands
                .iter()
                .map(|operand| Self::from_json_logic(registry, operand))
                .collect::<Result<Vec<_>, _>>()?,
            single => vec![Self::from_json_logic(registry, single)?],
        };

        if children.len() < op.cardinality.min || children.len() > op.cardinality.max {
            return Err(ParseError::malformed(format!(
                "operator '{}' takes {}..={} operands, found {}",
                op.signature,
                op.cardinality.min,
                op.cardinality.max,
                children.len()
            )));
        }

        Ok(RuleNode::Operation {
            signature: op.signature.clone(),
            children,
        })
    }
}
