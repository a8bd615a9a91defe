//! Frame rendering: fixed header bar, scrolled page viewport, status bar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::page::{ACCENT_COLOR, DIM_COLOR, TEXT_COLOR};
use crate::site::{SITE, Section};

const BG_COLOR: Color = Color::Rgb(21, 21, 21);
const BAR_BG_COLOR: Color = Color::Rgb(37, 37, 38);

pub fn render(app: &mut App, f: &mut Frame) {
    let size = f.size();
    f.render_widget(Block::default().style(Style::default().bg(BG_COLOR)), size);

    let menu_rows = if app.is_narrow() && app.menu_open {
        Section::ALL.len() as u16
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 + menu_rows),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    render_header(app, f, chunks[0]);
    render_page(app, f, chunks[1]);
    render_status(app, f, chunks[2]);
}

fn render_header(app: &mut App, f: &mut Frame, area: Rect) {
    let dict = app.locale.dictionary();
    app.nav_hit_boxes.clear();

    let brand = Line::from(vec![
        Span::styled(
            format!(" {} ", SITE.company.name.to_uppercase()),
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}]", app.locale.locale().as_str().to_uppercase()),
            Style::default().fg(TEXT_COLOR),
        ),
    ]);

    let mut lines = vec![brand];

    if app.is_narrow() {
        lines.push(Line::from(Span::styled(
            format!(" ☰ {} [n]", dict.nav_toggle_label),
            Style::default().fg(TEXT_COLOR),
        )));
        if app.menu_open {
            for (i, section) in Section::ALL.into_iter().enumerate() {
                let label = section.label(dict);
                lines.push(Line::from(vec![
                    Span::styled("   ▸ ", Style::default().fg(ACCENT_COLOR)),
                    Span::styled(label, Style::default().fg(TEXT_COLOR)),
                ]));
                app.nav_hit_boxes.push((
                    section,
                    Rect {
                        x: area.x + 3,
                        y: area.y + 2 + i as u16,
                        width: label.width() as u16 + 2,
                        height: 1,
                    },
                ));
            }
        }
    } else {
        let mut spans = vec![Span::raw("  ")];
        let mut x = area.x + 2;
        for section in Section::ALL {
            let label = section.label(dict);
            let width = label.width() as u16;
            app.nav_hit_boxes.push((
                section,
                Rect {
                    x,
                    y: area.y + 1,
                    width,
                    height: 1,
                },
            ));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(TEXT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("   "));
            x += width + 3;
        }
        spans.push(Span::styled(
            dict.brand.tagline,
            Style::default().fg(DIM_COLOR),
        ));
        lines.push(Line::from(spans));
    }

    let header = Paragraph::new(lines).style(Style::default().bg(BAR_BG_COLOR).fg(TEXT_COLOR));
    f.render_widget(header, area);
}

fn render_page(app: &mut App, f: &mut Frame, area: Rect) {
    app.page.set_viewport_height(area.height);
    let paragraph = Paragraph::new(app.page.lines().to_vec())
        .style(Style::default().bg(BG_COLOR))
        .scroll((app.page.scroll_row(), 0));
    f.render_widget(paragraph, area);
}

fn render_status(app: &App, f: &mut Frame, area: Rect) {
    let dict = app.locale.dictionary();
    let next = app.locale.locale().next();
    let text = format!(
        " q ✕ · l → {} · [s m p c] · ⇥ {} · ↑↓ ",
        dict.language_switcher.locale_names[next.index()],
        dict.nav.contact,
    );
    let status = Paragraph::new(text).style(Style::default().bg(ACCENT_COLOR).fg(Color::White));
    f.render_widget(status, area);
}
