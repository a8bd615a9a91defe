//! The brochure laid out as one tall column of styled lines.
//!
//! The page owns the scroll state and implements [`Document`], so the
//! resolver's math runs against real layout data. `scroll_to` only sets
//! an animation target; the tick event eases the position toward it.

use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::contact::{ContactForm, Field, FormStatus};
use crate::i18n::Dictionary;
use crate::nav::Document;
use crate::site::{SITE, Section};

pub const ACCENT_COLOR: Color = Color::Rgb(252, 76, 2);
pub const TEXT_COLOR: Color = Color::Rgb(220, 220, 220);
pub const DIM_COLOR: Color = Color::Rgb(140, 140, 140);

const STAT_BAR_WIDTH: usize = 20;

pub struct Page {
    width: u16,
    viewport_height: u16,
    lines: Vec<Line<'static>>,
    anchors: HashMap<&'static str, usize>,
    scroll: f32,
    target: Option<i64>,
}

impl Page {
    pub fn build(dict: &'static Dictionary, form: &ContactForm, width: u16) -> Self {
        let mut page = Self {
            width,
            viewport_height: 0,
            lines: Vec::new(),
            anchors: HashMap::new(),
            scroll: 0.0,
            target: None,
        };
        page.lay_out(dict, form);
        page
    }

    /// Rebuilds the line content in place, keeping the scroll position.
    /// Called on locale change, terminal resize and form edits.
    pub fn relayout(&mut self, dict: &'static Dictionary, form: &ContactForm, width: u16) {
        self.width = width;
        self.lines.clear();
        self.anchors.clear();
        self.lay_out(dict, form);
        self.clamp_scroll();
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn scroll_row(&self) -> u16 {
        self.scroll.round().max(0.0) as u16
    }

    pub fn anchor_row(&self, id: &str) -> Option<usize> {
        self.anchors.get(id).copied()
    }

    /// Height of the area the page is drawn into; bounds the scroll range.
    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        self.clamp_scroll();
    }

    /// Advances the scroll animation one frame.
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };
        let target = target as f32;
        let delta = target - self.scroll;
        if delta.abs() <= 0.75 {
            self.scroll = target;
            self.target = None;
        } else {
            // Ease out, but always cover at least one row per frame.
            let step = (delta * 0.35).abs().max(1.0);
            self.scroll += step.copysign(delta);
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.target.is_some()
    }

    /// Immediate manual scroll; cancels any running animation.
    pub fn scroll_by(&mut self, delta: i64) {
        self.target = None;
        self.scroll = (self.scroll + delta as f32).max(0.0);
        self.clamp_scroll();
    }

    pub fn scroll_home(&mut self) {
        self.target = None;
        self.scroll = 0.0;
    }

    pub fn scroll_end(&mut self) {
        self.target = None;
        self.scroll = self.max_scroll() as f32;
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height as usize)
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll() as f32;
        if self.scroll > max {
            self.scroll = max;
        }
    }

    // --- layout ---

    fn content_width(&self) -> usize {
        (self.width.saturating_sub(4) as usize).max(20)
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        self.lines.push(Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        )));
        let rule_width = text.width().min(self.content_width());
        self.lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(rule_width)),
            Style::default().fg(ACCENT_COLOR),
        )));
    }

    fn paragraph(&mut self, text: &str, style: Style) {
        let width = self.content_width();
        for row in wrap(text, width) {
            self.lines.push(Line::from(Span::styled(format!("  {row}"), style)));
        }
    }

    fn body(&mut self, text: &str) {
        self.paragraph(text, Style::default().fg(TEXT_COLOR));
    }

    fn dim(&mut self, text: &str) {
        self.paragraph(text, Style::default().fg(DIM_COLOR));
    }

    fn bullet(&mut self, text: &str) {
        let width = self.content_width().saturating_sub(4).max(16);
        for (i, row) in wrap(text, width).into_iter().enumerate() {
            let prefix = if i == 0 { "  • " } else { "    " };
            self.lines.push(Line::from(vec![
                Span::styled(prefix.to_string(), Style::default().fg(ACCENT_COLOR)),
                Span::styled(row, Style::default().fg(TEXT_COLOR)),
            ]));
        }
    }

    fn stat_bar(&mut self, label: &str, percent: u8) {
        let filled = (percent as usize * STAT_BAR_WIDTH) / 100;
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(STAT_BAR_WIDTH - filled)
        );
        self.lines.push(Line::from(vec![
            Span::styled(format!("    {label:<30} "), Style::default().fg(DIM_COLOR)),
            Span::styled(bar, Style::default().fg(ACCENT_COLOR)),
            Span::styled(format!(" {percent:>3} %"), Style::default().fg(TEXT_COLOR)),
        ]));
    }

    fn anchor(&mut self, id: &'static str) {
        self.anchors.insert(id, self.lines.len());
    }

    fn lay_out(&mut self, dict: &'static Dictionary, form: &ContactForm) {
        self.hero(dict);
        self.services(dict);
        self.materials(dict);
        self.printers(dict);
        self.contact(dict, form);
        self.footer(dict);
    }

    fn hero(&mut self, dict: &'static Dictionary) {
        self.blank();
        self.lines.push(Line::from(Span::styled(
            format!("  {}", SITE.company.name.to_uppercase()),
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
        )));
        self.dim(dict.brand.tagline);
        self.blank();
        self.paragraph(
            dict.hero.title,
            Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD),
        );
        self.body(dict.hero.subtitle);
        self.blank();
        self.lines.push(Line::from(vec![
            Span::styled(
                format!("  [{}] {}", Section::Services.hotkey(), dict.hero.primary_cta),
                Style::default().fg(ACCENT_COLOR),
            ),
            Span::styled(
                format!("   [{}] {}", Section::Contact.hotkey(), dict.hero.secondary_cta),
                Style::default().fg(ACCENT_COLOR),
            ),
        ]));
        self.blank();
    }

    fn services(&mut self, dict: &'static Dictionary) {
        self.blank();
        self.anchor(Section::Services.anchor());
        self.heading(dict.services.title);
        self.blank();
        for highlight in dict.services.highlights {
            self.bullet(highlight);
        }
        self.blank();
    }

    fn materials(&mut self, dict: &'static Dictionary) {
        self.blank();
        self.anchor(Section::Materials.anchor());
        self.heading(dict.materials.title);
        self.blank();
        for (card, material) in dict.materials.cards.iter().zip(&SITE.materials) {
            self.lines.push(Line::from(Span::styled(
                format!("  {}", card.title),
                Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD),
            )));
            self.dim(card.description);
            self.stat_bar(card.stat_temperature, material.temperature);
            self.stat_bar(card.stat_strength, material.strength);
            self.stat_bar(card.stat_uv, material.uv_resistance);
            self.blank();
        }
    }

    fn printers(&mut self, dict: &'static Dictionary) {
        self.blank();
        self.anchor(Section::Printers.anchor());
        self.heading(dict.printers.title);
        self.blank();
        for (card, printer) in dict.printers.cards.iter().zip(&SITE.printers) {
            self.body(card.alt);
            self.lines.push(Line::from(Span::styled(
                format!("    {}  {}  ({})", card.credit, card.credit_url, printer.image),
                Style::default().fg(DIM_COLOR),
            )));
            self.blank();
        }
    }

    fn contact(&mut self, dict: &'static Dictionary, form: &ContactForm) {
        self.blank();
        self.anchor(Section::Contact.anchor());
        self.heading(dict.contact.title);
        self.blank();
        self.body(dict.contact.description);
        self.dim(dict.contact.note);
        self.dim(dict.contact.response_time);
        self.blank();

        self.form_field(dict.contact_form.name_label, dict.contact_form.name_placeholder, form, Field::Name);
        self.form_field(dict.contact_form.email_label, dict.contact_form.email_placeholder, form, Field::Email);
        self.form_field(dict.contact_form.message_label, dict.contact_form.message_placeholder, form, Field::Message);
        self.blank();

        let status_line = match form.status() {
            FormStatus::Idle => Span::styled(
                format!("  ⏎ {}", dict.contact_form.submit),
                Style::default().fg(ACCENT_COLOR),
            ),
            FormStatus::Sending => Span::styled(
                format!("  {}", dict.contact_form.sending),
                Style::default().fg(DIM_COLOR),
            ),
            FormStatus::Success => Span::styled(
                format!("  ✓ {}", dict.contact_form.success_message),
                Style::default().fg(Color::Green),
            ),
            FormStatus::Error => Span::styled(
                format!("  ✗ {}", dict.contact_form.error_message),
                Style::default().fg(Color::Red),
            ),
        };
        self.lines.push(Line::from(status_line));
        self.blank();
    }

    fn form_field(
        &mut self,
        label: &'static str,
        placeholder: &'static str,
        form: &ContactForm,
        field: Field,
    ) {
        let focused = form.focus() == field;
        let value = form.value(field);
        let (shown, style) = if value.is_empty() {
            (placeholder.to_string(), Style::default().fg(DIM_COLOR))
        } else {
            (value.to_string(), Style::default().fg(TEXT_COLOR))
        };
        let marker = if focused { "▌" } else { " " };
        let label_style = if focused {
            Style::default().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_COLOR)
        };
        self.lines.push(Line::from(vec![
            Span::styled(format!("  {marker}{label:<8} "), label_style),
            Span::styled(shown, style),
        ]));
    }

    fn footer(&mut self, dict: &'static Dictionary) {
        self.blank();
        self.lines.push(Line::from(Span::styled(
            format!("  {}", "═".repeat(self.content_width())),
            Style::default().fg(DIM_COLOR),
        )));
        self.blank();

        self.heading(dict.footer.contact_heading);
        self.dim(&format!(
            "{}: {}, {} {}, {}",
            dict.footer.address_label,
            SITE.contact.street,
            SITE.contact.zip,
            SITE.contact.city,
            SITE.contact.country
        ));
        self.dim(&format!("{}: {}", dict.footer.phone_label, SITE.contact.phone));
        self.dim(&format!("{}: {}", dict.footer.email_label, SITE.contact.email));
        self.blank();

        self.heading(dict.footer.legal_heading);
        self.dim(SITE.company.legal_name);
        self.dim(dict.footer.legal_placeholder);
        self.blank();

        self.heading(dict.footer.map_heading);
        self.dim(dict.footer.map_title);
        self.dim(&format!("{} (zoom {})", SITE.map.query, SITE.map.zoom));
        self.blank();

        self.dim(&format!(
            "{} {} · {}",
            dict.footer.powered_by, dict.footer.powered_by_name, dict.footer.rights_reserved
        ));
        self.blank();
    }
}

impl Document for Page {
    fn viewport_width(&self) -> u32 {
        self.width as u32
    }

    fn scroll_offset(&self) -> i64 {
        self.scroll.round() as i64
    }

    fn anchor_top(&self, id: &str) -> Option<i64> {
        self.anchors
            .get(id)
            .map(|row| *row as i64 - self.scroll_offset())
    }

    fn scroll_to(&mut self, top: i64) {
        let max = self.max_scroll() as i64;
        self.target = Some(top.clamp(0, max.max(0)));
    }
}

/// Greedy word wrap by display width. Overlong words are hard-broken so
/// a line never exceeds `width` columns.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        while word.width() > width {
            // Hard break: take as many chars as fit on an empty row.
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut taken = 0;
            let mut taken_width = 0;
            for ch in word.chars() {
                let w = ch.to_string().width();
                if taken_width + w > width {
                    break;
                }
                taken += ch.len_utf8();
                taken_width += w;
            }
            if taken == 0 {
                // Single glyph wider than the row; emit it anyway.
                taken = word.chars().next().map_or(0, |ch| ch.len_utf8());
            }
            rows.push(word[..taken].to_string());
            word = &word[taken..];
        }
        if word.is_empty() {
            continue;
        }
        let sep = if current.is_empty() { 0 } else { 1 };
        if current_width + sep + word.width() > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word.width();
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
