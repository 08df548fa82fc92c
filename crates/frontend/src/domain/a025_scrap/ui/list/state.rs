use contracts::domain::a025_scrap::Scrap;
use leptos::prelude::*;

use super::columns::ScrapColumn;
use super::filter::filter_scraps;
use crate::shared::list_utils::{page_count, page_slice, sort_list, PageSize, SortState};

/// Page-level state of the scrap screen
#[derive(Clone, Debug, Default)]
pub struct ScrapListState {
    /// Source list as last loaded (plus local create/update results)
    pub items: Vec<Scrap>,
    pub search_query: String,
    pub is_loading: bool,
    /// User-visible notification of the last failure
    pub error: Option<String>,
    /// Bumped on each new notification so a stale auto-dismiss can't hide a newer one
    pub error_seq: u64,
    pub is_drawer_open: bool,
    /// Record being edited; `None` while adding
    pub editing: Option<Scrap>,
}

impl ScrapListState {
    /// Records matching the current search, in source order
    pub fn filtered(&self) -> Vec<Scrap> {
        let term = Some(self.search_query.as_str()).filter(|q| !q.is_empty());
        filter_scraps(&self.items, term)
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    pub fn replace_all(&mut self, items: Vec<Scrap>) {
        self.items = items;
        self.is_loading = false;
    }

    /// Failed refresh: keep the data, show the message
    pub fn fail(&mut self, message: String) -> u64 {
        self.is_loading = false;
        self.error = Some(message);
        self.error_seq += 1;
        self.error_seq
    }

    pub fn dismiss_error(&mut self, seq: u64) {
        if self.error_seq == seq {
            self.error = None;
        }
    }

    pub fn apply_created(&mut self, scrap: Scrap) {
        self.items.insert(0, scrap);
    }

    pub fn apply_updated(&mut self, scrap: Scrap) {
        if let Some(existing) = self.items.iter_mut().find(|s| s.id == scrap.id) {
            *existing = scrap;
        }
    }

    pub fn open_add_drawer(&mut self) {
        self.editing = None;
        self.is_drawer_open = true;
    }

    /// Opens the drawer for the record with this id, if it is loaded
    pub fn open_edit_drawer(&mut self, id: &str) {
        if let Some(scrap) = self.items.iter().find(|s| s.id == id) {
            self.editing = Some(scrap.clone());
            self.is_drawer_open = true;
        }
    }

    pub fn close_drawer(&mut self) {
        self.is_drawer_open = false;
        self.editing = None;
    }
}

pub fn create_state() -> RwSignal<ScrapListState> {
    RwSignal::new(ScrapListState::default())
}

/// Sort and pagination state owned by the scrap table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrapTableState {
    pub sort: SortState<ScrapColumn>,
    /// 0-indexed
    pub page: usize,
    pub page_size: PageSize,
}

impl ScrapTableState {
    pub fn toggle_sort(&mut self, column: ScrapColumn) {
        self.sort.toggle(column);
        self.page = 0;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 0;
    }

    pub fn total_pages(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        if self.page + 1 < self.total_pages(total) {
            self.page += 1;
        }
    }

    /// Sorted rows of the current page
    pub fn visible_rows(&self, rows: &[Scrap]) -> Vec<Scrap> {
        let mut sorted = rows.to_vec();
        sort_list(&mut sorted, &self.sort);
        page_slice(&sorted, self.page, self.page_size).to_vec()
    }
}
