//! Positional filtering of signature lists by usage masks

/// Keeps the elements of `items` whose corresponding entry in `mask` is
/// `true`, preserving their order.
///
/// Panics if `items` and `mask` differ in length, a mask is only ever valid
/// for the signature it was computed from.
pub fn apply_mask<T: Clone>(items: &[T], mask: &[bool]) -> Vec<T> {
    assert_eq!(
        items.len(),
        mask.len(),
        "usage mask length does not match list length"
    );

    items
        .iter()
        .zip(mask)
        .filter(|(_, used)| **used)
        .map(|(item, _)| item.clone())
        .collect()
}

/// Number of entries marked as used
pub fn count_used(mask: &[bool]) -> usize {
    mask.iter().filter(|used| **used).count()
}

/// Whether the mask marks anything as unused
pub fn has_unused(mask: &[bool]) -> bool {
    mask.iter().any(|used| !used)
}
