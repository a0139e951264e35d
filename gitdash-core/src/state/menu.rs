use super::layout::MENU_ROWS_PER_ITEM;
use crate::dispatch::MenuAction;

/// Selection over the fixed `MenuAction::ALL` list.
#[derive(Debug, Clone)]
pub struct MenuList {
    selected: usize,
    scroll_offset: usize,
    height: usize,
}

impl Default for MenuList {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuList {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll_offset: 0,
            height: usize::from(MENU_ROWS_PER_ITEM),
        }
    }

    pub fn items(&self) -> &'static [MenuAction] {
        &MenuAction::ALL
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_action(&self) -> MenuAction {
        MenuAction::ALL[self.selected]
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of entries that fit on screen at once.
    pub fn page_items(&self) -> usize {
        (self.height / usize::from(MENU_ROWS_PER_ITEM)).max(1)
    }

    /// Set the number of rows available to the list.
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.keep_selection_visible();
    }

    /// Move selection by delta, clamping to bounds
    pub fn move_selection(&mut self, delta: i32) {
        let amount = delta.unsigned_abs() as usize;
        if delta > 0 {
            self.move_down_by(amount);
        } else {
            self.move_up_by(amount);
        }
    }

    pub fn page_up(&mut self) {
        self.move_up_by(self.page_items());
    }

    pub fn page_down(&mut self) {
        self.move_down_by(self.page_items());
    }

    pub fn half_page_up(&mut self) {
        self.move_up_by((self.page_items() / 2).max(1));
    }

    pub fn half_page_down(&mut self) {
        self.move_down_by((self.page_items() / 2).max(1));
    }

    pub fn move_to_top(&mut self) {
        self.selected = 0;
        self.keep_selection_visible();
    }

    pub fn move_to_bottom(&mut self) {
        self.selected = MenuAction::ALL.len() - 1;
        self.keep_selection_visible();
    }

    fn move_up_by(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
        self.keep_selection_visible();
    }

    fn move_down_by(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n).min(MenuAction::ALL.len() - 1);
        self.keep_selection_visible();
    }

    fn keep_selection_visible(&mut self) {
        let page = self.page_items();
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + page {
            self.scroll_offset = self.selected + 1 - page;
        }
        let max_offset = MenuAction::ALL.len().saturating_sub(page);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
