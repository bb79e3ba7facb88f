use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, TextArea};

use ratatui::{
    layout::Rect,
    style::{Color as RatatuiColor, Style as RatatuiStyle},
    widgets::Paragraph,
    Frame,
};

/// 输入动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// 内容已修改
    Edited,
    /// 回车
    Submit,
    /// 仅移动光标或无关按键
    Continue,
}

/// 单行搜索输入框
///
/// 注意：tui-textarea 依赖的 crossterm 版本与本项目不同，
/// 按键这里手动转换，不使用 `TextArea::input`
pub struct SearchInput {
    textarea: TextArea<'static>,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchInput {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Nord 配色
        textarea.set_style(RatatuiStyle::default()
            .fg(RatatuiColor::Rgb(236, 239, 244)));
        textarea.set_cursor_style(RatatuiStyle::default()
            .bg(RatatuiColor::Rgb(136, 192, 208))
            .fg(RatatuiColor::Rgb(46, 52, 64)));
        textarea.set_cursor_line_style(RatatuiStyle::default());
        textarea.set_placeholder_text("输入任务，回车添加；输入内容同时用于过滤");
        textarea.set_placeholder_style(RatatuiStyle::default().fg(RatatuiColor::DarkGray));

        Self { textarea }
    }

    /// 当前内容（单行）
    pub fn value(&self) -> String {
        self.textarea.lines().join("")
    }

    /// 替换内容，光标移到末尾
    pub fn set_value(&mut self, value: &str) {
        let mut fresh = Self::new();
        fresh.textarea.insert_str(value);
        *self = fresh;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match key.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.textarea.insert_char(c);
                InputAction::Edited
            }
            KeyCode::Backspace => edited(self.textarea.delete_char()),
            KeyCode::Delete => edited(self.textarea.delete_next_char()),
            KeyCode::Left => {
                self.textarea.move_cursor(CursorMove::Back);
                InputAction::Continue
            }
            KeyCode::Right => {
                self.textarea.move_cursor(CursorMove::Forward);
                InputAction::Continue
            }
            KeyCode::Home => {
                self.textarea.move_cursor(CursorMove::Head);
                InputAction::Continue
            }
            KeyCode::End => {
                self.textarea.move_cursor(CursorMove::End);
                InputAction::Continue
            }
            _ => InputAction::Continue,
        }
    }

    /// 渲染输入框，未聚焦时不显示光标
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        if focused {
            f.render_widget(&self.textarea, area);
        } else {
            let paragraph = Paragraph::new(self.value())
                .style(RatatuiStyle::default().fg(RatatuiColor::Gray));
            f.render_widget(paragraph, area);
        }
    }
}

fn edited(changed: bool) -> InputAction {
    if changed {
        InputAction::Edited
    } else {
        InputAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_editing() {
        let mut input = SearchInput::new();
        for c in "milk".chars() {
            assert_eq!(input.handle_key(key(KeyCode::Char(c))), InputAction::Edited);
        }
        assert_eq!(input.value(), "milk");

        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputAction::Edited);
        assert_eq!(input.value(), "mil");

        input.handle_key(key(KeyCode::Home));
        // 行首再删除不算修改
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), InputAction::Continue);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), InputAction::Submit);
    }

    #[test]
    fn test_ctrl_chars_not_inserted() {
        let mut input = SearchInput::new();
        let action = input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, InputAction::Continue);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_set_value() {
        let mut input = SearchInput::new();
        input.set_value("abc");
        input.handle_key(key(KeyCode::Char('d')));
        assert_eq!(input.value(), "abcd");

        input.set_value("");
        assert_eq!(input.value(), "");
    }
}
