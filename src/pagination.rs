use serde::Serialize;

/// One page of a listing, newest-first. `number` is 1-based and already
/// clamped into range.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: i64, total_items: i64, per_page: i64) -> Self {
        let total_pages = total_pages(total_items, per_page);
        Self {
            has_next: number < total_pages,
            has_previous: number > 1,
            items,
            number,
            total_pages,
            total_items,
        }
    }
}

/// An empty listing still has one (empty) page.
pub fn total_pages(total_items: i64, per_page: i64) -> i64 {
    if total_items <= 0 {
        1
    } else {
        (total_items + per_page - 1) / per_page
    }
}

/// Requested page number -> page actually served. Anything that is not a
/// positive integer falls back to the first page; anything past the end is
/// clamped to the last page, never an error.
pub fn clamp_page(requested: Option<i64>, total_items: i64, per_page: i64) -> i64 {
    let last = total_pages(total_items, per_page);
    match requested {
        Some(n) if n > last => last,
        Some(n) if n >= 1 => n,
        _ => 1,
    }
}

/// OFFSET for a clamped page number.
pub fn offset(page: i64, per_page: i64) -> i64 {
    (page - 1) * per_page
}
