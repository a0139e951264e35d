/// Every user interaction produces an Action. UI never directly calls git.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Select,
    GoBack,
    Quit,

    // Movement (menu selection, or viewport scrolling on the output screen)
    MoveSelection(i32),
    HalfPageUp,
    HalfPageDown,
    PageUp,
    PageDown,
    MoveTop,
    MoveBottom,

    // Text editing (commit message)
    InsertChar(char),
    InsertNewline,
    DeleteBackwardChar,
    DeleteForwardChar,
    DeleteBackwardWord,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    SubmitCommit,
}
