/// Scrollable window onto a block of text.
///
/// `scroll_offset` always stays within `0..=max(0, line_count - height)` and
/// `height` is at least 1.
#[derive(Debug, Clone)]
pub struct Viewport {
    content: String,
    line_count: usize,
    scroll_offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            line_count: 0,
            scroll_offset: 0,
            height: 1,
        }
    }

    /// Replace the content and scroll back to the top.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.line_count = self.content.lines().count();
        self.scroll_offset = 0;
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.clamp();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_offset(&self) -> usize {
        self.line_count.saturating_sub(self.height)
    }

    /// Percentage of the content scrolled past, for the footer.
    pub fn scroll_percent(&self) -> usize {
        let max = self.max_offset();
        if max == 0 {
            100
        } else {
            self.scroll_offset * 100 / max
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let amount = delta.unsigned_abs() as usize;
        if delta < 0 {
            self.scroll_offset = self.scroll_offset.saturating_sub(amount);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_add(amount);
        }
        self.clamp();
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((self.height / 2).max(1));
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down((self.height / 2).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height);
    }

    pub fn goto_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.scroll_offset = self.max_offset();
    }

    /// Lines currently inside the window.
    pub fn visible_lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .lines()
            .skip(self.scroll_offset)
            .take(self.height)
    }

    fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(n);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(lines: usize) -> String {
        (0..lines)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_set_content_scrolls_to_top() {
        let mut vp = Viewport::new();
        vp.set_height(3);
        vp.set_content(numbered(10));
        vp.goto_bottom();
        assert_eq!(vp.scroll_offset(), 7);

        vp.set_content("clean");
        assert_eq!(vp.scroll_offset(), 0);
        assert_eq!(vp.content(), "clean");
        assert_eq!(vp.line_count(), 1);
    }

    #[test]
    fn test_offset_stays_in_bounds_for_any_scroll() {
        let deltas = [-100, -3, -1, 0, 1, 2, 5, 100, i32::MAX, i32::MIN];
        for lines in [0, 1, 2, 5, 17, 40] {
            for height in [1, 2, 3, 10, 50] {
                let mut vp = Viewport::new();
                vp.set_height(height);
                vp.set_content(numbered(lines));
                let max = lines.saturating_sub(height);
                for delta in deltas {
                    vp.scroll_by(delta);
                    assert!(
                        vp.scroll_offset() <= max,
                        "offset {} > {max} (lines={lines}, height={height}, delta={delta})",
                        vp.scroll_offset()
                    );
                    vp.page_down();
                    assert!(vp.scroll_offset() <= max);
                    vp.half_page_down();
                    assert!(vp.scroll_offset() <= max);
                    vp.page_up();
                    vp.half_page_up();
                    assert!(vp.scroll_offset() <= max);
                }
                vp.goto_bottom();
                assert_eq!(vp.scroll_offset(), max);
            }
        }
    }

    #[test]
    fn test_shrinking_height_keeps_offset_valid_and_growing_reclamps() {
        let mut vp = Viewport::new();
        vp.set_height(2);
        vp.set_content(numbered(10));
        vp.goto_bottom();
        assert_eq!(vp.scroll_offset(), 8);

        vp.set_height(6);
        assert_eq!(vp.scroll_offset(), 4);

        vp.set_height(0);
        assert_eq!(vp.height(), 1);
        assert!(vp.scroll_offset() <= vp.max_offset());
    }

    #[test]
    fn test_visible_lines_window() {
        let mut vp = Viewport::new();
        vp.set_height(2);
        vp.set_content(numbered(5));
        vp.scroll_by(2);
        let visible: Vec<_> = vp.visible_lines().collect();
        assert_eq!(visible, vec!["line 2", "line 3"]);
    }

    #[test]
    fn test_scroll_percent() {
        let mut vp = Viewport::new();
        vp.set_height(5);
        vp.set_content("short");
        assert_eq!(vp.scroll_percent(), 100);

        vp.set_content(numbered(15));
        assert_eq!(vp.scroll_percent(), 0);
        vp.scroll_by(5);
        assert_eq!(vp.scroll_percent(), 50);
        assert_eq!(vp.scroll_offset(), 5);
        assert!(vp.scroll_offset() < vp.max_offset());
    }
}
