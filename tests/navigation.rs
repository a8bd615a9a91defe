//! End-to-end navigation over the real page layout.

use voxelforge::contact::ContactForm;
use voxelforge::i18n::{self, Locale};
use voxelforge::nav::{Document, ScrollMetrics, ScrollResolver};
use voxelforge::page::Page;
use voxelforge::site::Section;

const TUI_METRICS: ScrollMetrics = ScrollMetrics {
    narrow_below: 80,
    wide_offset: 5,
    narrow_offset: 7,
};

fn build_page(locale: Locale, width: u16) -> Page {
    let mut page = Page::build(i18n::lookup(locale), &ContactForm::new(), width);
    page.set_viewport_height(20);
    page
}

fn settle(page: &mut Page) {
    for _ in 0..500 {
        if !page.is_scrolling() {
            return;
        }
        page.tick();
    }
    panic!("scroll animation did not settle");
}

#[test]
fn resolver_lands_a_header_offset_above_the_section() {
    let resolver = ScrollResolver::new(TUI_METRICS);
    let mut page = build_page(Locale::Cs, 100);
    let anchor = page.anchor_row(Section::Services.anchor()).unwrap() as i64;

    resolver.navigate_to(&mut page, "services");
    settle(&mut page);
    assert_eq!(page.scroll_offset(), anchor - TUI_METRICS.wide_offset);
}

#[test]
fn marked_and_bare_anchors_land_on_the_same_row() {
    let resolver = ScrollResolver::new(TUI_METRICS);

    let mut bare = build_page(Locale::Cs, 100);
    resolver.navigate_to(&mut bare, "services");
    settle(&mut bare);

    let mut marked = build_page(Locale::Cs, 100);
    resolver.navigate_to(&mut marked, "#services");
    settle(&mut marked);

    assert_eq!(bare.scroll_offset(), marked.scroll_offset());
}

#[test]
fn narrow_terminals_use_the_taller_header_offset() {
    let resolver = ScrollResolver::new(TUI_METRICS);

    let mut narrow = build_page(Locale::Cs, 79);
    let narrow_anchor = narrow.anchor_row(Section::Materials.anchor()).unwrap() as i64;
    resolver.navigate_to(&mut narrow, "materials");
    settle(&mut narrow);
    assert_eq!(narrow.scroll_offset(), narrow_anchor - TUI_METRICS.narrow_offset);

    let mut wide = build_page(Locale::Cs, 80);
    let wide_anchor = wide.anchor_row(Section::Materials.anchor()).unwrap() as i64;
    resolver.navigate_to(&mut wide, "materials");
    settle(&mut wide);
    assert_eq!(wide.scroll_offset(), wide_anchor - TUI_METRICS.wide_offset);
}

#[test]
fn missing_anchor_leaves_the_page_untouched() {
    let resolver = ScrollResolver::new(TUI_METRICS);
    let mut page = build_page(Locale::Cs, 100);
    page.scroll_by(12);
    let before = page.scroll_offset();

    let mut callback_ran = false;
    resolver.navigate_to_then(&mut page, "#does-not-exist", || callback_ran = true);
    settle(&mut page);

    assert_eq!(page.scroll_offset(), before);
    assert!(!callback_ran);
}

#[test]
fn navigation_survives_a_locale_switch() {
    let resolver = ScrollResolver::new(TUI_METRICS);
    let mut page = build_page(Locale::Cs, 100);
    resolver.navigate_to(&mut page, "contact");
    settle(&mut page);

    // Same session, new dictionary: anchors move but stay resolvable.
    page.relayout(i18n::lookup(Locale::En), &ContactForm::new(), 100);
    let anchor = page.anchor_row(Section::Printers.anchor()).unwrap() as i64;
    resolver.navigate_to(&mut page, "printers");
    settle(&mut page);
    assert_eq!(page.scroll_offset(), anchor - TUI_METRICS.wide_offset);
}
