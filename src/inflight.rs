//! In-Flight Write Tracking
//!
//! Writes (update/delete) are single-flight per tool id: while one write for
//! an id is unsettled, further writes for that id are ignored. Without this,
//! an update and a delete racing for the same id would leave the list in
//! whichever state answered last.

use std::collections::HashSet;

/// Claim an id for a write. Returns false when a write for that id is
/// already in flight; the caller must then skip the remote call entirely.
pub fn claim(inflight: &mut HashSet<String>, id: &str) -> bool {
    inflight.insert(id.to_string())
}

/// Release an id once its write has settled, success or failure.
pub fn release(inflight: &mut HashSet<String>, id: &str) {
    inflight.remove(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_for_same_id_is_rejected() {
        let mut inflight = HashSet::new();
        assert!(claim(&mut inflight, "a"));
        assert!(!claim(&mut inflight, "a"));
    }

    #[test]
    fn distinct_ids_do_not_block_each_other() {
        let mut inflight = HashSet::new();
        assert!(claim(&mut inflight, "a"));
        assert!(claim(&mut inflight, "b"));
    }

    #[test]
    fn release_allows_the_next_write() {
        let mut inflight = HashSet::new();
        assert!(claim(&mut inflight, "a"));
        release(&mut inflight, "a");
        assert!(claim(&mut inflight, "a"));
    }
}
