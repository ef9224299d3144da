use super::OperatorDefinition;
use super::catalog;
use crate::error::SchemaError;
use ahash::AHashMap;
use itertools::Itertools;
use std::sync::OnceLock;

/// An immutable, order-preserving catalog of operator definitions.
///
/// Lookups go through a signature index; iteration preserves the declared
/// display order used by the operator dropdown. Validation happens once at
/// construction, so every definition handed out by a registry satisfies the
/// catalog invariants (unique signatures, at least one child field type,
/// `min <= max`).
#[derive(Debug)]
pub struct OperatorRegistry {
    operators: Vec<OperatorDefinition>,
    index: AHashMap<String, usize>,
}

impl OperatorRegistry {
    /// Builds a registry from a custom operator table, validating it.
    pub fn new(operators: Vec<OperatorDefinition>) -> Result<Self, SchemaError> {
        if let Some(signature) = operators
            .iter()
            .map(|op| op.signature.as_str())
            .duplicates()
            .next()
        {
            return Err(SchemaError::DuplicateSignature {
                signature: signature.to_string(),
            });
        }

        for op in &operators {
            if op.child_fields.is_empty() {
                return Err(SchemaError::EmptyFieldList {
                    signature: op.signature.clone(),
                });
            }
            if op.cardinality.min > op.cardinality.max {
                return Err(SchemaError::InvalidCardinality {
                    signature: op.signature.clone(),
                    min: op.cardinality.min,
                    max: op.cardinality.max,
                });
            }
        }

        let index = operators
            .iter()
            .enumerate()
            .map(|(i, op)| (op.signature.clone(), i))
            .collect();

        Ok(Self { operators, index })
    }

    /// The process-wide builtin catalog, initialized on first use and never
    /// mutated afterwards.
    pub fn builtin() -> &'static OperatorRegistry {
        static BUILTIN: OnceLock<OperatorRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            OperatorRegistry::new(catalog::default_operators())
                .expect("builtin operator catalog is valid")
        })
    }

    /// All operators, in declared display order.
    pub fn operators(&self) -> &[OperatorDefinition] {
        &self.operators
    }

    /// Looks up an operator by its signature.
    pub fn find(&self, signature: &str) -> Option<&OperatorDefinition> {
        self.index.get(signature).map(|&i| &self.operators[i])
    }

    /// The dropdown view for a tree position: operators in display order,
    /// minus those forbidden under any signature in `ancestors`.
    pub fn operators_allowed_under<'a>(
        &'a self,
        ancestors: &'a [&'a str],
    ) -> impl Iterator<Item = &'a OperatorDefinition> {
        self.operators
            .iter()
            .filter(move |op| crate::validate::is_allowed_under(op, ancestors))
    }
}
