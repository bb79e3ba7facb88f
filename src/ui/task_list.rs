use crate::app::App;
use crate::view::{Region, View};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// 渲染一个任务容器，容器为空且占位可见时显示占位文字
pub fn render(
    f: &mut Frame,
    area: Rect,
    title: &str,
    region: Region,
    placeholder: (Region, &str),
    app: &App,
) {
    let is_focused = app.focus.list_region() == Some(region);
    let fragments = app.fragments(region);

    // 简洁配色：聚焦=白色，非聚焦=灰色
    let (border_color, title_style) = if is_focused {
        (Color::White, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
    } else {
        (Color::DarkGray, Style::default().fg(Color::Gray))
    };

    let block = Block::default()
        .title(format!(" {} ({}) ", title, fragments.len()))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .border_type(ratatui::widgets::BorderType::Rounded);

    let (placeholder_region, placeholder_text) = placeholder;
    if fragments.is_empty() {
        let text = if app.tracker.view().is_visible(placeholder_region) {
            placeholder_text
        } else {
            ""
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(paragraph, area);
        return;
    }

    let selected_idx = app.selected_index(region);
    let items: Vec<ListItem> = fragments
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            let is_selected = is_focused && i == selected_idx;

            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(41, 98, 218))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let selection_indicator = if is_selected {
                Span::styled("▶ ", Style::default().fg(Color::White))
            } else {
                Span::raw("  ")
            };

            // 置顶按钮
            let pin = if fragment.is_pinned() {
                Span::styled("[📌]", Style::default().fg(Color::Yellow))
            } else {
                Span::styled("[  ]", Style::default().fg(Color::DarkGray))
            };

            ListItem::new(Line::from(vec![
                Span::raw(" "),
                selection_indicator,
                pin,
                Span::raw(" "),
                Span::raw(fragment.text.as_str()),
            ]))
            .style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
