use crate::schema::FieldType;

/// A node of the rule tree being edited.
///
/// The tree is a single owned value: children belong exclusively to their
/// parent, and every edit produces a new tree rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleNode {
    /// The unset state a fresh field starts in. Serializes as `{}`.
    Empty,
    /// A raw JSON literal leaf.
    Value(serde_json::Value),
    /// An operator application with ordered operands.
    Operation {
        signature: String,
        children: Vec<RuleNode>,
    },
}

impl RuleNode {
    pub fn value(v: impl Into<serde_json::Value>) -> Self {
        RuleNode::Value(v.into())
    }

    pub fn operation(signature: &str, children: Vec<RuleNode>) -> Self {
        RuleNode::Operation {
            signature: signature.to_string(),
            children,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RuleNode::Empty)
    }

    /// The operator signature, if this node is an operation.
    pub fn signature(&self) -> Option<&str> {
        match self {
            RuleNode::Operation { signature, .. } => Some(signature),
            _ => None,
        }
    }

    pub fn children(&self) -> &[RuleNode] {
        match self {
            RuleNode::Operation { children, .. } => children,
            _ => &[],
        }
    }

    /// The initial value a freshly created child of the given field type
    /// starts with. Text-backed fields start as the empty string, everything
    /// else as the unset state.
    pub(crate) fn default_for(field: &FieldType) -> RuleNode {
        match field {
            FieldType::Input | FieldType::Accessor | FieldType::HigherOrder => {
                RuleNode::Value(serde_json::Value::String(String::new()))
            }
            FieldType::Any | FieldType::WithText(_) => RuleNode::Empty,
        }
    }
}

impl Default for RuleNode {
    fn default() -> Self {
        RuleNode::Empty
    }
}
