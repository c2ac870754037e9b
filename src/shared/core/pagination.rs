use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(total: u64, limit: u64, offset: u64) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset.saturating_add(limit) < total,
        }
    }
}

/// One page of a collection together with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub meta: PaginationMeta,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Slices `items` (already filtered and ordered) to the requested window.
    pub fn new(items: Vec<T>, offset: u64, limit: u64) -> Self {
        let meta = PaginationMeta::new(items.len() as u64, limit, offset);
        Self {
            meta,
            data: paginate(items, offset, limit),
        }
    }
}

/// Keeps at most `limit` items starting at `offset`. Out of range offsets yield an empty page.
pub fn paginate<T>(items: Vec<T>, offset: u64, limit: u64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}
