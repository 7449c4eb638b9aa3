//! Completed-versus-eligible counting.

use tally_models::{ProgressResult, Section, StateSnapshot};

/// Counts completed and eligible items across sections.
///
/// `out_of` starts at the total checklist length and drops by one for
/// every ignored item; `completed` counts items with the completion flag
/// set. The two checks are independent and both apply to an item that is
/// simultaneously completed and ignored, so `completed` can exceed
/// `out_of`. Missing flag state is an empty map: nothing completed,
/// nothing ignored.
///
/// No percentage is derived here; see [`ProgressResult::percent`].
pub fn aggregate(sections: &[Section], snapshot: &StateSnapshot) -> ProgressResult {
    let mut out_of: usize = sections.iter().map(|s| s.checklist.len()).sum();
    let mut completed = 0;

    for item in sections.iter().flat_map(|s| s.checklist.iter()) {
        let id = item.id();
        if snapshot.completion.is_set(&id) {
            completed += 1;
        }
        if snapshot.ignore.is_set(&id) {
            out_of -= 1;
        }
    }

    ProgressResult::new(completed, out_of)
}
