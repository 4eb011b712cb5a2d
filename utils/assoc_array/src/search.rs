use core::borrow::Borrow;

/// Returns the index of the first element whose key equals `key`, scanning
/// in order. Unlike a sorted search, no ordering is assumed, so this is
/// always `O(n)`.
pub(crate) fn linear_search_by_key<'a, K, T, I>(items: I, key: &K) -> Option<usize>
where
    K: PartialEq + ?Sized,
    T: Borrow<K> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().position(|item| item.borrow() == key)
}
