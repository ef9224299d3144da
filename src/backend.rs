use serde_json::Value as Json;

/// The seam for the external JSON-Logic evaluator.
///
/// Evaluation semantics live outside this crate; the editing model only
/// promises that what it serializes is standard JSON-Logic. A backend is
/// expected to be pure, synchronous, and total within this scope (no I/O),
/// and its result passes through to the caller unmodified.
pub trait LogicBackend {
    /// Applies a serialized JSON-Logic expression to a data context.
    fn apply(&self, rule: &Json, data: &Json) -> Json;
}
