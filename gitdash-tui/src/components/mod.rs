pub mod commit_input;
pub mod menu;
pub mod output;
pub mod title;

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Frame, Terminal, backend::TestBackend};

    /// Render with `draw` into a test terminal and return the screen as text.
    pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(draw).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut output = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                output.push_str(buffer[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }
}
