use crate::ui::app::{App, InputMode};
use crate::ui::form::FormIntent;
use crate::view::SortKey;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Routes a key press to whichever surface has focus: the form dialog, the
/// delete confirmation, the detail dialog, the search box, then the table.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.form().is_visible() {
        handle_form_key(app, key);
        return;
    }

    if app.confirm().is_visible() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    if app.detail().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.close_detail(),
            KeyCode::Char('e') => app.open_edit(),
            KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),
            KeyCode::Char('r') => app.refresh_detail(),
            _ => {}
        }
        return;
    }

    if app.mode() == InputMode::Search {
        match key.code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter | KeyCode::Down | KeyCode::Tab => app.finish_search(),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_push(ch.encode_utf8(&mut [0; 4]));
            }
            _ => {}
        }
        return;
    }

    handle_table_key(app, key);
}

/// Bracketed paste goes to the focused text input, if any.
pub fn handle_paste(app: &mut App, text: String) {
    if app.form().is_visible() {
        app.dispatch_form(FormIntent::Paste(text));
    } else if app.mode() == InputMode::Search {
        let line = text.lines().next().unwrap_or("");
        app.search_push(line);
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }
    match key.code {
        KeyCode::Esc => app.dispatch_form(FormIntent::Close),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::NextField),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::PrevField),
        KeyCode::Enter => app.dispatch_form(FormIntent::Newline),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input(ch));
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('t') => app.sort_by(SortKey::Title),
        KeyCode::Char('p') => app.sort_by(SortKey::Price),
        KeyCode::Char('d') => app.sort_by(SortKey::CreationAt),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::PageUp => {
            app.previous_page();
        }
        KeyCode::Right | KeyCode::PageDown => {
            app.next_page();
        }
        KeyCode::Home => {
            app.first_page();
        }
        KeyCode::End => {
            app.last_page();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.cycle_page_size(1),
        KeyCode::Char('-') => app.cycle_page_size(-1),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('e') => app.open_edit(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('s') => app.export_csv(),
        KeyCode::Char('r') => app.request_reload(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = App::new(&Config::default());
        app.open_create();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn typing_goes_to_search_box() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.search_input(), "q");

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode(), InputMode::Normal);
        assert_eq!(app.search_input(), "");
    }

    #[test]
    fn esc_closes_form_without_quitting() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, press(KeyCode::Char('n')));
        assert!(app.form().is_visible());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.form().is_visible());
        assert!(!app.should_quit());
    }

    #[test]
    fn paste_into_search_keeps_first_line() {
        let mut app = App::new(&Config::default());
        app.start_search();
        handle_paste(&mut app, "lamp\nchair".to_string());
        assert_eq!(app.search_input(), "lamp");
    }
}
