use crate::app::{App, Focus, Mode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// 渲染状态栏（Helix 风格）
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mode_text = match (app.mode, app.focus) {
        (Mode::Help, _) => ("HELP", Color::Blue),
        (Mode::Normal, Focus::Search) => ("INPUT", Color::Green),
        (Mode::Normal, Focus::Pinned) => ("PINNED", Color::Yellow),
        (Mode::Normal, Focus::All) => ("TASKS", Color::Cyan),
    };

    let tasks = app.tracker.tasks();
    let pinned = tasks.iter().filter(|t| t.pinned).count();

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", mode_text.0),
            Style::default()
                .fg(Color::Black)
                .bg(mode_text.1)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} 个任务 | {} 个置顶 ", tasks.len(), pinned)),
        Span::styled(" Tab 切换  ? 帮助", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Black));

    f.render_widget(paragraph, area);
}
