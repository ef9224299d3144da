//! The mutation engine: user edits applied with an immutable-update
//! discipline. Every operation borrows the node and returns a rebuilt tree,
//! which keeps undo/redo and re-render boundaries trivial for the caller.

use super::RuleNode;
use crate::error::EditError;
use crate::schema::OperatorRegistry;

impl RuleNode {
    /// Replaces this node's operator, resetting its children to
    /// `cardinality.min` freshly initialized defaults as resolved by the
    /// operator's field schedule.
    pub fn with_operator(
        &self,
        registry: &OperatorRegistry,
        signature: &str,
    ) -> Result<RuleNode, EditError> {
        let op = registry
            .find(signature)
            .ok_or_else(|| EditError::UnknownOperator {
                signature: signature.to_string(),
            })?;

        let children = (0..op.cardinality.min)
            .map(|i| RuleNode::default_for(&op.field_type_at(i)))
            .collect();

        Ok(RuleNode::Operation {
            signature: op.signature.clone(),
            children,
        })
    }

    /// Appends one freshly initialized operand. A no-op at `cardinality.max`
    /// (the UI disables the control there) and on non-operation nodes.
    pub fn with_appended_operand(&self, registry: &OperatorRegistry) -> RuleNode {
        let RuleNode::Operation {
            signature,
            children,
        } = self
        else {
            return self.clone();
        };
        let Some(op) = registry.find(signature) else {
            return self.clone();
        };
        if children.len() >= op.cardinality.max {
            return self.clone();
        }

        let mut children = children.clone();
        children.push(RuleNode::default_for(&op.field_type_at(children.len())));
        RuleNode::Operation {
            signature: signature.clone(),
            children,
        }
    }

    /// Removes the operand at `index`. A no-op when the result would fall
    /// below `cardinality.min`, when `index` is out of bounds, or on
    /// non-operation nodes.
    pub fn with_removed_operand(&self, registry: &OperatorRegistry, index: usize) -> RuleNode {
        let RuleNode::Operation {
            signature,
            children,
        } = self
        else {
            return self.clone();
        };
        let Some(op) = registry.find(signature) else {
            return self.clone();
        };
        if index >= children.len() || children.len() <= op.cardinality.min {
            return self.clone();
        }

        let mut children = children.clone();
        children.remove(index);
        RuleNode::Operation {
            signature: signature.clone(),
            children,
        }
    }

    /// Replaces the child at `index` with a new value or subtree.
    ///
    /// # Panics
    ///
    /// Panics if this node is not an operation or `index` is out of bounds.
    /// Callers edit through positions the resolver handed them, so either is
    /// a programming error rather than a recoverable state.
    pub fn with_child(&self, index: usize, child: RuleNode) -> RuleNode {
        let RuleNode::Operation {
            signature,
            children,
        } = self
        else {
            panic!("with_child called on a non-operation node");
        };
        assert!(
            index < children.len(),
            "child index {} out of bounds for operator '{}' with {} operands",
            index,
            signature,
            children.len()
        );

        let mut children = children.clone();
        children[index] = child;
        RuleNode::Operation {
            signature: signature.clone(),
            children,
        }
    }
}
