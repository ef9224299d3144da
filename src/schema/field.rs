use serde::Serialize;
use std::fmt;

/// The kind of editor a child position of an operator asks the rendering
/// layer for.
///
/// This is a closed union: the rendering layer dispatches on it with a single
/// exhaustive match. `WithText` carries the label shown next to the wrapped
/// field (`"then"` / `"else"` in the builtin catalog).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "camelCase")]
pub enum FieldType {
    /// Operator dropdown; resolves at edit time to an operator or a raw value.
    Any,
    /// Plain value input.
    Input,
    /// Data accessor path (the `var` operator's payload).
    Accessor,
    /// Collection path fed to a higher-order operator.
    HigherOrder,
    /// An `Any` field rendered behind a fixed text label.
    WithText(String),
}

impl FieldType {
    /// Shorthand for the labeled variant.
    pub fn with_text(label: impl Into<String>) -> Self {
        FieldType::WithText(label.into())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Any => write!(f, "any"),
            FieldType::Input => write!(f, "input"),
            FieldType::Accessor => write!(f, "accessor"),
            FieldType::HigherOrder => write!(f, "higher-order"),
            FieldType::WithText(label) => write!(f, "any ({})", label),
        }
    }
}
