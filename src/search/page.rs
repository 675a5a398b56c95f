/// Results shown per page, matching the UI grid
pub const PAGE_SIZE: usize = 20;

/// 1-based page slice over a sorted collection, clipped to its bounds.
/// Pages past the end are empty rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + page_size, items.len());
    &items[start..end]
}
