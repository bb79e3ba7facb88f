use crate::app::{App, Focus, Mode};
use crate::input::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// 处理键盘输入
/// 返回 false 表示应该退出应用
pub fn handle_key_input(app: &mut App, key: KeyEvent) -> bool {
    // Windows 上松开按键也会产生事件
    if key.kind == KeyEventKind::Release {
        return true;
    }

    if app.mode == Mode::Help {
        return handle_help_mode(app, key);
    }

    match match_key(app.focus, key) {
        Some(Command::Quit) => false,
        Some(cmd) => {
            execute_command(app, cmd);
            true
        }
        None => {
            if app.focus == Focus::Search {
                app.search_key(key);
            }
            true
        }
    }
}

/// 把按键映射为命令；输入框中的普通按键返回 None，交给输入框处理
pub fn match_key(focus: Focus, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Tab => return Some(Command::FocusNext),
        KeyCode::BackTab => return Some(Command::FocusPrev),
        KeyCode::F(1) => return Some(Command::ToggleHelp),
        _ => {}
    }

    if focus == Focus::Search {
        return None;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Command::TaskDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::TaskUp),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => Some(Command::TogglePin),
        KeyCode::Char('/') | KeyCode::Char('i') => Some(Command::FocusSearch),
        KeyCode::Char('?') => Some(Command::ToggleHelp),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

/// 处理帮助模式的按键
fn handle_help_mode(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1) => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
    true
}

fn execute_command(app: &mut App, cmd: Command) {
    match cmd {
        Command::Quit => {}
        Command::FocusNext => app.focus = app.focus.next(),
        Command::FocusPrev => app.focus = app.focus.prev(),
        Command::FocusSearch => app.focus = Focus::Search,
        Command::TaskUp => app.select_prev(),
        Command::TaskDown => app.select_next(),
        Command::TogglePin => app.click_selected_pin(),
        Command::ToggleHelp => {
            app.mode = match app.mode {
                Mode::Help => Mode::Normal,
                Mode::Normal => Mode::Help,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_search_focus_passes_text_keys() {
        assert_eq!(match_key(Focus::Search, key(KeyCode::Char('q'))), None);
        assert_eq!(match_key(Focus::Search, key(KeyCode::Char('j'))), None);
        assert_eq!(match_key(Focus::Search, key(KeyCode::Enter)), None);
        assert_eq!(match_key(Focus::Search, key(KeyCode::Tab)), Some(Command::FocusNext));
        assert_eq!(
            match_key(Focus::Search, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_list_focus_commands() {
        assert_eq!(match_key(Focus::All, key(KeyCode::Char('j'))), Some(Command::TaskDown));
        assert_eq!(match_key(Focus::Pinned, key(KeyCode::Up)), Some(Command::TaskUp));
        assert_eq!(match_key(Focus::All, key(KeyCode::Char(' '))), Some(Command::TogglePin));
        assert_eq!(match_key(Focus::All, key(KeyCode::Char('/'))), Some(Command::FocusSearch));
        assert_eq!(match_key(Focus::All, key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(match_key(Focus::All, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_end_to_end_keys() {
        let mut app = App::new(Config::default()).unwrap();
        for c in "Write report".chars() {
            assert!(handle_key_input(&mut app, key(KeyCode::Char(c))));
        }
        assert!(handle_key_input(&mut app, key(KeyCode::Enter)));
        assert_eq!(app.tracker.tasks().len(), 1);

        // Tab 两次到任务列表，p 置顶
        handle_key_input(&mut app, key(KeyCode::Tab));
        handle_key_input(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::All);
        handle_key_input(&mut app, key(KeyCode::Char('p')));
        assert!(app.tracker.tasks()[0].pinned);

        handle_key_input(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.mode, Mode::Help);
        // 帮助模式下 q 只关闭帮助
        assert!(handle_key_input(&mut app, key(KeyCode::Char('q'))));
        assert_eq!(app.mode, Mode::Normal);

        assert!(!handle_key_input(&mut app, key(KeyCode::Char('q'))));
    }
}
