//! Deterministic fragment id assignment

use crate::types::{Fragment, IdentifiedFragment};

/// Assign each fragment a stable id of the form `source_path:page:position`.
///
/// The position counter is a streaming fold over the input order: it
/// increments while the page key matches the immediately preceding
/// fragment's key and resets to zero on any change. Only the previous
/// element is consulted, never a global set of seen pages, so a page key
/// that reappears non-contiguously starts a fresh run at position 0. That
/// means ids from the earlier run can be reproduced by the later one; this
/// is long-standing behavior that downstream consumers may rely on, so it
/// is kept as-is rather than deduplicated here.
///
/// Pure function of the input sequence and its order; no I/O.
pub fn assign_fragment_ids(fragments: Vec<Fragment>) -> Vec<IdentifiedFragment> {
    let mut identified = Vec::with_capacity(fragments.len());
    let mut last_page_key: Option<String> = None;
    let mut position = 0u32;

    for fragment in fragments {
        let page_key = fragment.page_key();

        if last_page_key.as_deref() == Some(page_key.as_str()) {
            position += 1;
        } else {
            position = 0;
        }

        let id = format!("{}:{}", page_key, position);
        last_page_key = Some(page_key);

        identified.push(IdentifiedFragment {
            id,
            position,
            fragment,
        });
    }

    identified
}
