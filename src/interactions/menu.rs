use crate::config;

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Inline style for one of the three toggle-button bars. Open folds the
/// outer bars into an X and hides the middle one; closed restores the
/// resting stack.
pub fn toggle_line_style(line: usize, state: MenuState) -> &'static str {
    match (state, line) {
        (MenuState::Open, 0) => "transform: rotate(45deg) translate(5px, 5px);",
        (MenuState::Open, 1) => "opacity: 0;",
        (MenuState::Open, 2) => "transform: rotate(-45deg) translate(7px, -6px);",
        (MenuState::Closed, 1) => "opacity: 1;",
        _ => "transform: none;",
    }
}

/// True once the viewport is wider than the breakpoint where the mobile
/// menu stops existing.
pub fn past_desktop_breakpoint(viewport_width: f64) -> bool {
    viewport_width > config::DESKTOP_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_and_round_trips() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert!(state.toggled().is_open());
        assert_eq!(state.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn menu_state_follows_last_toggle() {
        let opens = [true, true, true];
        let state = opens
            .iter()
            .fold(MenuState::Closed, |state, _| state.toggled());
        assert!(state.is_open());
    }

    #[test]
    fn open_lines_fold_into_an_x() {
        assert!(toggle_line_style(0, MenuState::Open).contains("rotate(45deg)"));
        assert_eq!(toggle_line_style(1, MenuState::Open), "opacity: 0;");
        assert!(toggle_line_style(2, MenuState::Open).contains("rotate(-45deg)"));
    }

    #[test]
    fn closed_lines_rest_flat() {
        assert_eq!(toggle_line_style(0, MenuState::Closed), "transform: none;");
        assert_eq!(toggle_line_style(1, MenuState::Closed), "opacity: 1;");
        assert_eq!(toggle_line_style(2, MenuState::Closed), "transform: none;");
    }

    #[test]
    fn breakpoint_is_strictly_greater() {
        assert!(!past_desktop_breakpoint(1024.0));
        assert!(past_desktop_breakpoint(1025.0));
        assert!(!past_desktop_breakpoint(375.0));
    }
}
