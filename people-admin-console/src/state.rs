use people_admin_db::repository::pagination::PageRequest;
use people_admin_db::rules::ExpiryShiftMode;
use people_admin_postgres::PostgresRepositories;
use std::sync::Arc;

use crate::error::{ConsoleError, ConsoleResult};

/// Largest page a list view serves, whatever the request asks for
pub const MAX_PAGE_SIZE: usize = 1000;

#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<PostgresRepositories>,
    pub shift_mode: ExpiryShiftMode,
    pub page_size: usize,
}

impl AppState {
    pub fn new(repos: Arc<PostgresRepositories>, shift_mode: ExpiryShiftMode, page_size: usize) -> Self {
        Self {
            repos,
            shift_mode,
            page_size,
        }
    }

    /// Page request for a 1-based page number, using the configured page
    /// size when none is given and capping it at [`MAX_PAGE_SIZE`]
    pub fn page_request(&self, page: Option<usize>, page_size: Option<usize>) -> ConsoleResult<PageRequest> {
        let page_size = page_size.unwrap_or(self.page_size).clamp(1, MAX_PAGE_SIZE);
        let page = page.unwrap_or(1);
        PageRequest::for_page(page_size, page)
            .ok_or_else(|| ConsoleError::validation(format!("page {page} is out of range")))
    }
}
