use rustc_hash::FxHashSet;

use crate::reserved::ReservedWords;

/// Why a candidate alias was turned down. Drives escalation; never reported
/// to callers of `register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Reserved,
    InUse,
    /// Reserved by the caller for one file through `ImportRegistry::reserve`.
    LocalName,
}

pub fn check_alias(
    candidate: &str,
    used: &FxHashSet<String>,
    reserved: &ReservedWords,
) -> Result<(), Rejection> {
    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }
    if reserved.contains(candidate) {
        return Err(Rejection::Reserved);
    }
    if used.contains(candidate) {
        return Err(Rejection::InUse);
    }
    Ok(())
}

/// `true` when `candidate` is non-empty, not reserved and not already used.
pub fn is_valid_alias(
    candidate: &str,
    used: &FxHashSet<String>,
    reserved: &ReservedWords,
) -> bool {
    check_alias(candidate, used, reserved).is_ok()
}
