/// Index of the section the viewport is currently in, given the document-order
/// section tops, or `None` when no section's start has been reached yet.
///
/// A section qualifies once `scroll_y` has passed its top minus the lookahead
/// margin; when several qualify, the last one in document order wins.
#[inline]
pub fn active_index(tops: &[f64], scroll_y: f64, margin: f64) -> Option<usize> {
    let mut current = None;
    for (i, top) in tops.iter().enumerate() {
        if scroll_y >= top - margin {
            current = Some(i);
        }
    }
    current
}
