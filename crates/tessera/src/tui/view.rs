//! Rendering
//!
//! Standalone functions taking the state and theme by reference, so the
//! terminal can be borrowed mutably by `draw` at the same time.

use super::item::{ListItem as _, TemplateItem};
use super::state::{App, Page, Status};
use super::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};
use tessera_core::{ProgressEvent, generate_preview};

const LIST_TITLE: &str = "Existing templates";
const FIELD_NAME: &str = "Enter iterations";
const INPUT_PLACEHOLDER: &str = "enter number";
const MAIN_HELP: &str =
    "↑/k up • ↓/j down • / filter • h preview • enter spawn • ctrl+e edit • x delete • q quit";

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    match app.page {
        Page::Main => render_main(frame, area, app, theme),
        Page::Spawn => render_spawn(frame, area, app, theme),
        Page::Spawning | Page::Finished => render_progress(frame, area, app, theme),
    }
}

fn render_main(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let [hint, status, title, list, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(left);

    let hint_text = format!(
        "  enter to spawn | templates loaded from {}",
        app.config.path
    );
    frame.render_widget(Paragraph::new(hint_text).style(theme.hint), hint);

    if let Some(line) = status_line(app, theme) {
        frame.render_widget(Paragraph::new(line), status);
    }

    let mut title_spans = vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", LIST_TITLE), theme.title),
    ];
    if app.filter.editing || !app.filter.query.is_empty() {
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(format!("/{}", app.filter.query), theme.status));
    }
    frame.render_widget(Paragraph::new(Line::from(title_spans)), title);

    render_template_list(frame, list, app, theme);
    frame.render_widget(
        Paragraph::new(format!("  {}", MAIN_HELP)).style(theme.hint),
        help,
    );

    if app.show_preview {
        render_preview_pane(frame, right, app, theme);
    }
}

fn status_line<'a>(app: &'a App, theme: &Theme) -> Option<Line<'a>> {
    app.status.as_ref().map(|status| match status {
        Status::Info(msg) => Line::from(Span::styled(format!("  {}", msg), theme.status)),
        Status::Error(msg) => Line::from(Span::styled(format!("  Error: {}", msg), theme.error)),
    })
}

fn render_template_list(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let visible = app.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .filter_map(|&i| app.config.templates.get(i))
        .map(|template| {
            let item = TemplateItem(template);
            ListItem::new(Text::from(vec![
                Line::from(format!("  {}", item.title())),
                Line::from(Span::styled(
                    format!("  {}", item.description()),
                    theme.item_description,
                )),
                Line::default(),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.cursor.min(visible.len() - 1)));
    }

    let list = List::new(items).highlight_style(theme.selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_preview_pane(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let widget = match app.selected() {
        Some(template) => Paragraph::new(generate_preview(template, &theme.preview_box))
            .style(theme.border),
        None => Paragraph::new(Span::styled(
            "no templates loaded",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    };
    let [_, pane] = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
    frame.render_widget(widget, pane);
}

fn render_spawn(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let input = if app.iterations.value().is_empty() {
        Span::styled(INPUT_PLACEHOLDER, theme.placeholder)
    } else {
        Span::raw(app.iterations.value())
    };
    let template = app.selected().map(|t| t.name.as_str()).unwrap_or_default();

    let text = Text::from(vec![
        Line::default(),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", FIELD_NAME), theme.field_name),
        ]),
        Line::from(vec![Span::raw("    > "), input]),
        Line::default(),
        Line::from(Span::styled(
            format!("  {} | enter to spawn | esc back | q quit", template),
            theme.hint,
        )),
    ]);
    frame.render_widget(Paragraph::new(text), area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let [log_area, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let lines: Vec<Line> = app
        .log
        .iter()
        .map(|event| {
            let style = match event {
                ProgressEvent::Started { .. } => theme.hint,
                ProgressEvent::CreatedFile { .. } => theme.status,
                ProgressEvent::Failed { .. } => theme.error,
            };
            Line::from(Span::styled(format!("  {}", event), style))
        })
        .collect();

    // Keep the newest lines on screen.
    let overflow = lines.len().saturating_sub(log_area.height as usize);
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        log_area,
    );

    let footer_text = match app.page {
        Page::Spawning => Span::styled("  spawning...", theme.hint),
        _ if app.failed() => Span::styled("  failed | press any key to exit", theme.error),
        _ => Span::styled("  done | press any key to exit", theme.status),
    };
    frame.render_widget(Paragraph::new(Line::from(footer_text)), footer);
}
