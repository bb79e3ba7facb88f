pub mod help;
mod statusbar;
mod task_list;
pub mod text_input;

use crate::app::{App, Focus, Mode};
use crate::view::{Region, View};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// 主渲染函数
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // 输入框
            Constraint::Length(1),      // 错误提示
            Constraint::Percentage(35), // 置顶任务
            Constraint::Min(3),         // 全部任务
            Constraint::Length(1),      // 状态栏
        ])
        .split(f.area());

    render_search(f, chunks[0], app);
    render_error(f, chunks[1], app);
    task_list::render(
        f,
        chunks[2],
        "置顶",
        Region::PinnedTasks,
        (Region::NoPinned, "没有置顶的任务"),
        app,
    );
    task_list::render(
        f,
        chunks[3],
        "任务",
        Region::AllTasks,
        (Region::NoTasks, "没有匹配的任务"),
        app,
    );
    statusbar::render(f, chunks[4], app);

    // 渲染帮助面板（如果处于帮助模式）
    if app.mode == Mode::Help {
        help::render(f, f.area());
    }
}

/// 渲染输入框
fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Search && app.mode == Mode::Normal;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" 搜索 / 添加 ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .border_type(ratatui::widgets::BorderType::Rounded);

    let inner = block.inner(area);
    f.render_widget(block, area);
    app.search.render(f, inner, is_focused);
}

/// 渲染错误提示条
fn render_error(f: &mut Frame, area: Rect, app: &App) {
    if !app.tracker.view().is_visible(Region::Error) {
        return;
    }

    let paragraph = Paragraph::new(format!(" ✗ {}", app.config.error_message)).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    /// 屏幕内容（去掉空格，宽字符后的占位格也是空格）
    fn screen(app: &App) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out.replace(' ', "")
    }

    fn submit(app: &mut App, text: &str) {
        for c in text.chars() {
            app.search_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.search_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn test_render_empty_screen() {
        let app = App::new(Config::default()).unwrap();
        let out = screen(&app);
        assert!(out.contains("没有置顶的任务"));
        assert!(out.contains("没有匹配的任务"));
        assert!(!out.contains("任务内容不能为空"));
    }

    #[test]
    fn test_render_tasks_and_error() {
        let mut app = App::new(Config::default()).unwrap();
        submit(&mut app, "Buy milk");
        submit(&mut app, " ");

        let out = screen(&app);
        assert!(out.contains("Buymilk"));
        assert!(out.contains("任务内容不能为空"));
        assert!(!out.contains("没有匹配的任务"));
    }
}
