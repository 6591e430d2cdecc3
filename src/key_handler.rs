use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    View,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    NextView,
    PrevView,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Select,
    Help,
    Search,
    InputChar(char),
    Backspace,
    None,
}

#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key press.
    ///
    /// Returns `KeyAction::None` on timeout so the caller can run its tick.
    pub fn poll(&mut self, timeout: Duration) -> color_eyre::Result<KeyAction> {
        if !event::poll(timeout)? {
            return Ok(KeyAction::None);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            _ => Ok(KeyAction::None),
        }
    }

    /// Maps raw keys. Printable characters stay characters; whether they
    /// are text or shortcuts is decided by [`ActionProcessor`].
    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => KeyAction::Quit,
            (KeyModifiers::CONTROL, KeyCode::Char('f') | KeyCode::Char('F')) => KeyAction::Search,
            (_, KeyCode::Esc) => KeyAction::Back,
            (_, KeyCode::Tab) => KeyAction::NextView,
            (_, KeyCode::BackTab) => KeyAction::PrevView,
            (_, KeyCode::Up) => KeyAction::NavigateUp,
            (_, KeyCode::Down) => KeyAction::NavigateDown,
            (_, KeyCode::Left) => KeyAction::NavigateLeft,
            (_, KeyCode::Right) => KeyAction::NavigateRight,
            (_, KeyCode::Enter) => KeyAction::Select,
            (_, KeyCode::Backspace) => KeyAction::Backspace,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => KeyAction::InputChar(c),
            _ => KeyAction::None,
        }
    }
}

/// What the app should do in response to a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    ToggleHelp,
    FocusMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    NavigateTo(Route),
    Up,
    Down,
    Left,
    Right,
    Submit,
    Cancel,
    NextField,
    PrevField,
    Char(char),
    Backspace,
    Search,
    Logout,
    ToggleNotifications,
    /// A page-level shortcut key, interpreted by the current page.
    Shortcut(char),
    None,
}

/// Context passed to the processor to enable decision-making
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub route: Route,
    pub focus: Focus,
    pub show_help: bool,
    /// A text field has the keyboard.
    pub text_input: bool,
    /// A dialog, form or panel is open on the current page.
    pub modal_open: bool,
    pub authenticated: bool,
    /// The initial session query has not completed yet.
    pub loading: bool,
}

/// Stateless action processor: takes action + context, returns a command.
pub struct ActionProcessor;

impl ActionProcessor {
    pub fn process(action: KeyAction, ctx: &ActionContext) -> Command {
        // only quitting is allowed until the session is known
        if ctx.loading {
            return match action {
                KeyAction::Quit | KeyAction::InputChar('q') => Command::Quit,
                _ => Command::None,
            };
        }
        if ctx.show_help {
            return match action {
                KeyAction::Quit => Command::Quit,
                KeyAction::Back | KeyAction::Help | KeyAction::InputChar('?') => {
                    Command::ToggleHelp
                }
                _ => Command::None,
            };
        }
        match action {
            KeyAction::Quit => Command::Quit,
            KeyAction::Help => Command::ToggleHelp,
            KeyAction::Back => Self::handle_back(ctx),
            KeyAction::NextView => {
                if ctx.text_input || ctx.modal_open || ctx.route == Route::Login {
                    Command::NextField
                } else {
                    Command::NavigateTo(ctx.route.next())
                }
            }
            KeyAction::PrevView => {
                if ctx.text_input || ctx.modal_open || ctx.route == Route::Login {
                    Command::PrevField
                } else {
                    Command::NavigateTo(ctx.route.prev())
                }
            }
            KeyAction::NavigateUp => Self::vertical(ctx, true),
            KeyAction::NavigateDown => Self::vertical(ctx, false),
            KeyAction::NavigateLeft => Command::Left,
            KeyAction::NavigateRight => Command::Right,
            KeyAction::Select => {
                if ctx.focus == Focus::Menu && ctx.route.requires_auth() && !ctx.modal_open {
                    Command::MenuSelect
                } else {
                    Command::Submit
                }
            }
            KeyAction::Search => Command::Search,
            KeyAction::Backspace if ctx.text_input => Command::Backspace,
            KeyAction::Backspace => Command::None,
            KeyAction::InputChar(c) if ctx.text_input => Command::Char(c),
            KeyAction::InputChar(c) => Self::handle_shortcut(c, ctx),
            KeyAction::None => Command::None,
        }
    }

    fn handle_back(ctx: &ActionContext) -> Command {
        // the login form always has the keyboard, so Esc leaves the app there
        if ctx.route == Route::Login {
            return Command::Quit;
        }
        if ctx.text_input || ctx.modal_open {
            return Command::Cancel;
        }
        if ctx.focus == Focus::Menu {
            return Command::Quit;
        }
        Command::FocusMenu
    }

    fn vertical(ctx: &ActionContext, up: bool) -> Command {
        let in_menu = ctx.focus == Focus::Menu && ctx.route.requires_auth() && !ctx.modal_open;
        match (in_menu, up) {
            (true, true) => Command::MenuUp,
            (true, false) => Command::MenuDown,
            (false, true) => Command::Up,
            (false, false) => Command::Down,
        }
    }

    fn handle_shortcut(c: char, ctx: &ActionContext) -> Command {
        match c {
            'q' => Command::Quit,
            '?' => Command::ToggleHelp,
            'k' => Self::vertical(ctx, true),
            'j' => Self::vertical(ctx, false),
            'h' => Command::Left,
            'l' => Command::Right,
            '/' => Command::Search,
            'L' if ctx.authenticated => Command::Logout,
            'b' if ctx.authenticated && ctx.route.requires_auth() => Command::ToggleNotifications,
            '1'..='4' if ctx.authenticated && !ctx.modal_open => {
                let index = c as usize - '1' as usize;
                Command::NavigateTo(Route::MENU[index])
            }
            other => Command::Shortcut(other),
        }
    }
}
