//! Positional reordering of a sequence.

/// Moves the element at `from` so that it ends up at index `to`.
///
/// The element is removed first and then reinserted, so moving forward needs
/// no index correction: `[a, b, c]` with `from = 0, to = 2` yields
/// `[b, c, a]`. Returns `false` without touching the sequence when
/// `from == to` or either index is out of bounds.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}
