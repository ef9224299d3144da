//! Containment validation: which operators may appear under which ancestors.

use crate::schema::OperatorDefinition;

/// Pseudo-signature of the root editor position. It never appears in the
/// registry; it only shows up at the head of ancestor chains.
pub const MASTER: &str = "master";

/// Returns whether `candidate` may be nested at a position whose ancestor
/// operators (nearest first or root first, order is irrelevant) are
/// `ancestors`.
///
/// False iff any ancestor signature is listed in the candidate's
/// `forbidden_ancestors`. Pure and cheap; the rendering layer calls this per
/// dropdown render without caching.
pub fn is_allowed_under(candidate: &OperatorDefinition, ancestors: &[&str]) -> bool {
    !ancestors
        .iter()
        .any(|a| candidate.forbidden_ancestors.iter().any(|f| f == a))
}
