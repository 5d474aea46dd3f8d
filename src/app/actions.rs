use super::state::Focus;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,

    FocusNext,
    FocusPrev,
    SetFocus(Focus),

    InputChar(char),
    Backspace,
    ClearInput,

    StartLookup,
    SaveLyrics,
    ToggleDarkMode,
    ToggleHelp,

    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,

    Resize,
}
