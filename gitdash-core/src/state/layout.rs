//! Screen geometry shared by the model (for widget sizes) and the renderer.

/// Outer margin around everything, in cells.
pub const MARGIN_X: u16 = 2;
pub const MARGIN_Y: u16 = 1;
/// Title banner plus one blank line.
pub const TITLE_ROWS: u16 = 2;

/// Output box: border plus one row of padding above and below.
pub const OUTPUT_FRAME_Y: u16 = 2 + 2;
pub const OUTPUT_FOOTER_ROWS: u16 = 1;

/// Commit screen: prompt line and a blank line above the bordered input.
pub const COMMIT_PROMPT_ROWS: u16 = 2;
pub const INPUT_FRAME: u16 = 2;
pub const INPUT_MAX_ROWS: u16 = 8;

/// Each menu entry takes a label row, a description row and a spacer.
pub const MENU_ROWS_PER_ITEM: u16 = 3;
/// Menu heading plus one blank line.
pub const MENU_HEADER_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Widget sizes derived from the terminal size. The menu and the output
/// viewport only scroll vertically, so only their row counts are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub menu_rows: u16,
    pub viewport_rows: u16,
    pub input: Size,
}

impl Dimensions {
    pub fn from_terminal(width: u16, height: u16) -> Self {
        let body_w = width.saturating_sub(2 * MARGIN_X);
        let body_h = height.saturating_sub(2 * MARGIN_Y + TITLE_ROWS);

        Self {
            menu_rows: body_h.saturating_sub(MENU_HEADER_ROWS).max(1),
            viewport_rows: body_h
                .saturating_sub(OUTPUT_FRAME_Y + OUTPUT_FOOTER_ROWS)
                .max(1),
            input: Size {
                width: body_w.saturating_sub(INPUT_FRAME).max(1),
                height: body_h
                    .saturating_sub(COMMIT_PROMPT_ROWS + INPUT_FRAME)
                    .clamp(1, INPUT_MAX_ROWS),
            },
        }
    }
}
