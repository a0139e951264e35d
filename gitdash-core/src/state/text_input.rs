use unicode_segmentation::UnicodeSegmentation;

/// Multi-line text field for the commit message.
///
/// `cursor` is a byte offset into `buffer`; it is always within
/// `0..=buffer.len()` and on a grapheme boundary. Edits are ignored while the
/// field is unfocused.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
    focused: bool,
    /// Column kept across consecutive vertical moves
    goal_column: Option<usize>,
    width: usize,
    height: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            height: 1,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height.max(1);
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.goal_column = None;
    }

    /// Zero-based index of the line holding the cursor.
    pub fn cursor_row(&self) -> usize {
        self.buffer[..self.cursor].matches('\n').count()
    }

    /// Text between the start of the cursor's line and the cursor.
    pub fn text_before_cursor_on_line(&self) -> &str {
        &self.buffer[self.line_start(self.cursor)..self.cursor]
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.focused {
            return;
        }
        self.goal_column = None;
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) -> bool {
        if !self.focused || self.cursor == 0 {
            return false;
        }
        self.goal_column = None;
        let prev = self.prev_boundary(self.cursor);
        self.buffer.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if !self.focused || self.cursor >= self.buffer.len() {
            return false;
        }
        self.goal_column = None;
        let next = self.next_boundary(self.cursor);
        self.buffer.replace_range(self.cursor..next, "");
        true
    }

    /// Delete back to the start of the previous word, skipping whitespace first.
    pub fn delete_word_backward(&mut self) {
        if !self.focused {
            return;
        }
        self.goal_column = None;
        let spans: Vec<(usize, bool)> = self.buffer[..self.cursor]
            .grapheme_indices(true)
            .map(|(i, g)| (i, g.chars().all(char::is_whitespace)))
            .collect();

        let mut start = self.cursor;
        let mut iter = spans.iter().rev().peekable();
        while let Some(&(i, _)) = iter.next_if(|(_, ws)| *ws) {
            start = i;
        }
        while let Some(&(i, _)) = iter.next_if(|(_, ws)| !*ws) {
            start = i;
        }

        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        self.goal_column = None;
        self.cursor = self.prev_boundary(self.cursor);
    }

    pub fn move_right(&mut self) {
        self.goal_column = None;
        self.cursor = self.next_boundary(self.cursor);
    }

    pub fn move_line_start(&mut self) {
        self.goal_column = None;
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.goal_column = None;
        self.cursor = self.line_end(self.cursor);
    }

    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.vertical_column();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.advance_graphemes(prev_start, start - 1, column);
    }

    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.buffer.len() {
            self.cursor = end;
            return;
        }
        let column = self.vertical_column();
        let next_start = end + 1;
        let next_end = self.line_end(next_start);
        self.cursor = self.advance_graphemes(next_start, next_end, column);
    }

    fn vertical_column(&mut self) -> usize {
        let column = self
            .goal_column
            .unwrap_or_else(|| self.text_before_cursor_on_line().graphemes(true).count());
        self.goal_column = Some(column);
        column
    }

    fn line_start(&self, pos: usize) -> usize {
        self.buffer[..pos].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.buffer[pos..]
            .find('\n')
            .map_or(self.buffer.len(), |i| pos + i)
    }

    /// Byte offset `n` graphemes after `start`, clamped to `end`.
    fn advance_graphemes(&self, start: usize, end: usize, n: usize) -> usize {
        self.buffer[start..end]
            .grapheme_indices(true)
            .nth(n)
            .map_or(end, |(i, _)| start + i)
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.buffer[..pos]
            .grapheme_indices(true)
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.buffer[pos..]
            .graphemes(true)
            .next()
            .map_or(pos, |g| pos + g.len())
    }
}
