//! Prelude module for convenient imports
//!
//! Re-exports the types a rendering layer needs to drive the editing model:
//! the registry and schema types, the rule tree and its mutation operations,
//! the containment validator, and the error taxonomy.

// Schema: registry, operator definitions, field types
pub use crate::schema::{
    Cardinality, FieldSchedule, FieldType, OperatorCategory, OperatorDefinition, OperatorRegistry,
};

// The rule tree (mutation engine and codec are inherent methods on it)
pub use crate::tree::RuleNode;

// Containment validation
pub use crate::validate::{MASTER, is_allowed_under};

// External evaluator seam
pub use crate::backend::LogicBackend;

// Error types
pub use crate::error::{EditError, ParseError, SchemaError};
