//! Decides which canonical keys are extracted from each source.

use std::collections::BTreeSet;

use crate::Selection;

/// Produce the canonical keys to extract for one source.
///
/// `discover` enumerates the keys the source can offer and is only invoked
/// for [`Selection::All`]. Explicit lists are not filtered against what the
/// source actually contains.
pub(crate) fn select_keys<F>(
    selection: &Selection,
    required: &BTreeSet<String>,
    discover: F,
) -> BTreeSet<String>
where
    F: FnOnce() -> BTreeSet<String>,
{
    match selection {
        Selection::Required => required.clone(),
        Selection::All => discover(),
        Selection::Explicit(keys) => canonical(keys),
    }
}

/// Lower-case every key and drop duplicates.
///
/// Names are otherwise kept as given: an empty or padded required key stays
/// in the set and is reported as missing when no source supplies it.
pub(crate) fn canonical(keys: &[String]) -> BTreeSet<String> {
    keys.iter().map(|key| key.to_ascii_lowercase()).collect()
}
