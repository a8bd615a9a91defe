//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, info};
use ratatui::layout::Rect;

use crate::contact::ContactForm;
use crate::event::Event;
use crate::i18n::LocaleContext;
use crate::nav::{ScrollMetrics, ScrollResolver};
use crate::page::Page;
use crate::site::{SITE, Section};

/// Row/column-scaled header compensation for the terminal front end.
/// Below 80 columns the header collapses into the toggleable menu and
/// grows, so targets are pulled up a little further.
pub const TUI_SCROLL_METRICS: ScrollMetrics = ScrollMetrics {
    narrow_below: 80,
    wide_offset: 5,
    narrow_offset: 7,
};

const PAGE_STEP: i64 = 10;

pub struct App {
    pub running: bool,
    pub locale: LocaleContext,
    pub page: Page,
    pub form: ContactForm,
    /// Collapsed-header menu, only meaningful on narrow terminals.
    pub menu_open: bool,
    /// When set, keystrokes edit the contact form instead of navigating.
    pub form_active: bool,
    /// Window title needs re-applying (locale changed).
    pub title_dirty: bool,
    /// Clickable header regions, refreshed by the renderer every frame.
    pub nav_hit_boxes: Vec<(Section, Rect)>,
    resolver: ScrollResolver,
    width: u16,
}

impl App {
    pub fn new(width: u16, _height: u16) -> Self {
        let locale = LocaleContext::new(Some(SITE.default_locale));
        let form = ContactForm::new();
        let page = Page::build(locale.dictionary(), &form, width);
        Self {
            running: true,
            locale,
            page,
            form,
            menu_open: false,
            form_active: false,
            title_dirty: true,
            nav_hit_boxes: Vec::new(),
            resolver: ScrollResolver::new(TUI_SCROLL_METRICS),
            width,
        }
    }

    pub fn is_narrow(&self) -> bool {
        (self.width as u32) < TUI_SCROLL_METRICS.narrow_below
    }

    pub fn window_title(&self) -> &'static str {
        self.locale.dictionary().metadata.default_title
    }

    pub fn tick(&mut self) {
        self.page.tick();
        if self.form.poll() {
            self.refresh_page();
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            Event::Resize(width, _height) => self.handle_resize(width),
            Event::Tick => self.tick(),
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.form_active {
            self.handle_form_keys(key_event);
            return;
        }
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.quit(),
            (KeyCode::Char('q'), _) => self.quit(),
            (KeyCode::Char('l'), _) => self.cycle_locale(),
            (KeyCode::Char('n'), _) => self.toggle_menu(),
            (KeyCode::Tab, _) => {
                self.form_active = true;
                self.navigate(Section::Contact);
            }
            (KeyCode::Esc, _) => {
                if self.menu_open {
                    self.menu_open = false;
                }
            }
            (KeyCode::Char('G'), _) => self.page.scroll_end(),
            (KeyCode::Char('g'), _) => self.page.scroll_home(),
            (KeyCode::Up, _) => self.page.scroll_by(-1),
            (KeyCode::Down, _) => self.page.scroll_by(1),
            (KeyCode::PageUp, _) => self.page.scroll_by(-PAGE_STEP),
            (KeyCode::PageDown, _) => self.page.scroll_by(PAGE_STEP),
            (KeyCode::Home, _) => self.page.scroll_home(),
            (KeyCode::End, _) => self.page.scroll_end(),
            (KeyCode::Char(ch), _) => self.handle_section_key(ch),
            _ => {}
        }
    }

    fn handle_section_key(&mut self, ch: char) {
        if let Some(digit) = ch.to_digit(10) {
            let idx = digit as usize;
            if (1..=Section::ALL.len()).contains(&idx) {
                self.navigate(Section::ALL[idx - 1]);
            }
            return;
        }
        if let Some(section) = Section::ALL.iter().find(|s| s.hotkey() == ch) {
            self.navigate(*section);
        }
    }

    fn handle_form_keys(&mut self, key_event: KeyEvent) {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            (KeyCode::Esc, _) => self.form_active = false,
            (KeyCode::Tab, _) => self.form.focus_next(),
            (KeyCode::BackTab, _) => self.form.focus_prev(),
            (KeyCode::Enter, _) => self.form.submit(),
            (KeyCode::Backspace, _) => self.form.backspace(),
            (KeyCode::Char(ch), _) => self.form.input_char(ch),
            _ => {}
        }
        self.refresh_page();
    }

    fn handle_mouse_event(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::ScrollUp => self.page.scroll_by(-3),
            MouseEventKind::ScrollDown => self.page.scroll_by(3),
            MouseEventKind::Down(MouseButton::Left) => {
                let point = Rect {
                    x: event.column,
                    y: event.row,
                    width: 1,
                    height: 1,
                };
                let hit = self
                    .nav_hit_boxes
                    .iter()
                    .find(|(_, area)| area.intersects(point))
                    .map(|(section, _)| *section);
                if let Some(section) = hit {
                    self.navigate(section);
                }
            }
            _ => {}
        }
    }

    pub fn handle_resize(&mut self, width: u16) {
        self.width = width;
        if !self.is_narrow() {
            self.menu_open = false;
        }
        self.refresh_page();
    }

    /// Scrolls to a section through the resolver. When the collapsed
    /// menu triggered the navigation, the resolver's completion callback
    /// closes it.
    pub fn navigate(&mut self, section: Section) {
        debug!("navigate to #{}", section.anchor());
        let mut close_menu = false;
        if self.menu_open {
            self.resolver
                .navigate_to_then(&mut self.page, section.anchor(), || close_menu = true);
        } else {
            self.resolver.navigate_to(&mut self.page, section.anchor());
        }
        if close_menu {
            self.menu_open = false;
        }
    }

    fn cycle_locale(&mut self) {
        let next = self.locale.locale().next();
        info!("switching locale to {}", next.as_str());
        self.locale.set_locale(next);
        self.title_dirty = true;
        self.refresh_page();
    }

    fn toggle_menu(&mut self) {
        if self.is_narrow() {
            self.menu_open = !self.menu_open;
        }
    }

    fn refresh_page(&mut self) {
        self.page
            .relayout(self.locale.dictionary(), &self.form, self.width);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn language_key_cycles_the_locale() {
        let mut app = App::new(100, 30);
        assert_eq!(app.locale.locale(), Locale::Cs);
        app.handle_event(key(KeyCode::Char('l')));
        assert_eq!(app.locale.locale(), Locale::En);
        assert!(app.title_dirty);
        app.handle_event(key(KeyCode::Char('l')));
        assert_eq!(app.locale.locale(), Locale::Cs);
    }

    #[test]
    fn section_hotkeys_start_a_scroll() {
        let mut app = App::new(100, 30);
        app.page.set_viewport_height(10);
        app.handle_event(key(KeyCode::Char('m')));
        assert!(app.page.is_scrolling());
    }

    #[test]
    fn digit_keys_map_to_sections() {
        let mut app = App::new(100, 30);
        app.page.set_viewport_height(10);
        app.handle_event(key(KeyCode::Char('4')));
        assert!(app.page.is_scrolling());
    }

    #[test]
    fn narrow_menu_closes_after_navigating() {
        let mut app = App::new(60, 30);
        app.page.set_viewport_height(10);
        assert!(app.is_narrow());
        app.handle_event(key(KeyCode::Char('n')));
        assert!(app.menu_open);
        app.navigate(Section::Contact);
        assert!(!app.menu_open);
    }

    #[test]
    fn menu_toggle_is_ignored_on_wide_terminals() {
        let mut app = App::new(120, 30);
        app.handle_event(key(KeyCode::Char('n')));
        assert!(!app.menu_open);
    }

    #[test]
    fn resize_to_wide_drops_the_menu() {
        let mut app = App::new(60, 30);
        app.handle_event(key(KeyCode::Char('n')));
        assert!(app.menu_open);
        app.handle_event(Event::Resize(120, 40));
        assert!(!app.menu_open);
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = App::new(100, 30);
        app.handle_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn form_mode_captures_characters() {
        let mut app = App::new(100, 30);
        app.page.set_viewport_height(10);
        app.handle_event(key(KeyCode::Tab));
        assert!(app.form_active);
        app.handle_event(key(KeyCode::Char('J')));
        app.handle_event(key(KeyCode::Char('a')));
        assert_eq!(app.form.value(crate::contact::Field::Name), "Ja");
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.form_active);
    }
}
