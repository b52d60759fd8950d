/// Offset-based window over a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Request for a 1-based page number; page 0 is read as page 1.
    ///
    /// `None` when the window does not fit a SQL `BIGINT` limit/offset.
    ///
    /// ```
    /// use people_admin_db::repository::pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::for_page(20, 2), Some(PageRequest::new(20, 20)));
    /// assert_eq!(PageRequest::for_page(20, usize::MAX), None);
    /// ```
    pub fn for_page(page_size: usize, page_number: usize) -> Option<Self> {
        let offset = (page_number.max(1) - 1).checked_mul(page_size)?;
        if i64::try_from(offset).is_err() || i64::try_from(page_size).is_err() {
            return None;
        }
        Some(Self::new(page_size, offset))
    }
}

/// One page of a list view plus the size of the whole list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of items across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    pub fn empty(page: PageRequest) -> Self {
        Self::new(Vec::new(), 0, page.limit, page.offset)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// 1-based
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.offset / self.limit + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}
