//! # Kumiki - JSON-Logic Rule-Tree Editing Model
//!
//! **Kumiki** is the schema and tree model behind a visual JSON-Logic rule
//! builder. It owns everything with actual logic in such a UI: the operator
//! catalog, the per-child field-type resolution, the structural rules for
//! editing a rule tree, and the JSON-Logic wire codec. Rendering is left to
//! an external layer that asks this crate what to draw at each position and
//! feeds user edits back in.
//!
//! ## Core Workflow
//!
//! 1.  **List operators**: `OperatorRegistry::builtin()` exposes the operator
//!     catalog in display order; `operators_allowed_under` filters it per
//!     tree position using each operator's containment rules.
//! 2.  **Resolve fields**: for each operand position of a selected operator,
//!     `OperatorDefinition::field_type_at` names the editor to render.
//! 3.  **Edit the tree**: every mutation (`with_operator`,
//!     `with_appended_operand`, `with_removed_operand`, `with_child`) returns
//!     a new `RuleNode`, never mutating in place.
//! 4.  **Serialize and evaluate**: `to_json_logic` / `from_json_logic`
//!     convert between the tree and standard JSON-Logic syntax; a
//!     [`LogicBackend`](backend::LogicBackend) implementation evaluates the
//!     result against data.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiki::prelude::*;
//!
//! # fn main() -> Result<(), EditError> {
//! let registry = OperatorRegistry::builtin();
//!
//! // Build `{"==": ["1", "1"]}` the way the UI would: pick an operator,
//! // then fill in its operands.
//! let rule = RuleNode::Empty
//!     .with_operator(registry, "==")?
//!     .with_child(0, RuleNode::value("1"))
//!     .with_child(1, RuleNode::value("1"));
//!
//! let expression = rule.to_json_logic(registry);
//! assert_eq!(expression, serde_json::json!({"==": ["1", "1"]}));
//!
//! // The wire form round-trips.
//! let parsed = RuleNode::from_json_logic(registry, &expression).unwrap();
//! assert_eq!(parsed, rule);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod prelude;
pub mod schema;
pub mod tree;
pub mod validate;
