use super::FieldType;
use serde::Serialize;

/// Display grouping for the operator dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatorCategory {
    Value,
    HigherOrder,
    Accessor,
    Statement,
    Logical,
    Numeric,
    Arithmetic,
}

/// Operand-count bounds for an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cardinality {
    pub min: usize,
    pub max: usize,
}

impl Cardinality {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// An operator that takes exactly one operand. Such operators serialize
    /// their lone child unwrapped instead of as a one-element array.
    pub fn is_fixed_unary(&self) -> bool {
        self.min == 1 && self.max == 1
    }
}

/// How child indices map onto field types.
///
/// The only non-positional case in the builtin catalog is the `if` chain,
/// so the schedule is plain data rather than a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldSchedule {
    /// Index into the declared field list; indices past the end repeat the
    /// last entry. This is how variable-arity operators (`and`, `+`, `max`)
    /// support up to `cardinality.max` operands with one or two declared
    /// field types.
    Positional,
    /// The if/then/elseif/else alternation: index 0 is the condition (`Any`),
    /// odd indices are `then` branches, even indices past 0 are `else`
    /// branches.
    ConditionalChain,
}

/// A single entry of the operator catalog: the signature, how it renders, and
/// the structural rules for its operands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorDefinition {
    /// The JSON-Logic key identifying the operation (`"and"`, `"var"`, `"+"`).
    pub signature: String,
    /// Name shown in the operator dropdown.
    pub label: String,
    pub category: OperatorCategory,
    /// Declared child field types, in operand order. Never empty in a loaded
    /// registry.
    pub child_fields: Vec<FieldType>,
    pub cardinality: Cardinality,
    /// Signatures of operators this one may not be nested under.
    pub forbidden_ancestors: Vec<String>,
    pub schedule: FieldSchedule,
}

impl OperatorDefinition {
    pub fn new(
        signature: &str,
        label: &str,
        category: OperatorCategory,
        child_fields: Vec<FieldType>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            signature: signature.to_string(),
            label: label.to_string(),
            category,
            child_fields,
            cardinality,
            forbidden_ancestors: Vec::new(),
            schedule: FieldSchedule::Positional,
        }
    }

    pub fn forbidden_under<I, S>(mut self, ancestors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forbidden_ancestors = ancestors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_schedule(mut self, schedule: FieldSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Resolves the field type for the child at `index`.
    ///
    /// The schedule takes precedence; a `Positional` operator falls back to
    /// its last declared field type for indices past the declared list.
    pub fn field_type_at(&self, index: usize) -> FieldType {
        match self.schedule {
            FieldSchedule::ConditionalChain => {
                if index == 0 {
                    FieldType::Any
                } else if index % 2 == 1 {
                    FieldType::with_text("then")
                } else {
                    FieldType::with_text("else")
                }
            }
            FieldSchedule::Positional => self
                .child_fields
                .get(index)
                .or_else(|| self.child_fields.last())
                .cloned()
                // Registry validation rejects empty field lists at load time.
                .expect("operator declares at least one child field type"),
        }
    }
}
