//! Section navigation: anchor resolution and scroll-target math.
//!
//! The resolver never touches the screen itself. It talks to whatever
//! implements [`Document`], which keeps the math identical between the
//! terminal front end and plain test doubles.

/// Header compensation parameters.
///
/// A fixed navigation bar overlaps the top of the viewport, so scroll
/// targets are pulled up by its height. Narrow viewports get a taller
/// header. The defaults carry the site's pixel contract (breakpoint at
/// 768, offsets 72 wide / 80 narrow); the TUI passes row-scaled values
/// through the same struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Viewport widths strictly below this use the narrow offset.
    pub narrow_below: u32,
    pub wide_offset: i64,
    pub narrow_offset: i64,
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self {
            narrow_below: 768,
            wide_offset: 72,
            narrow_offset: 80,
        }
    }
}

impl ScrollMetrics {
    pub fn header_offset(&self, viewport_width: u32) -> i64 {
        if viewport_width < self.narrow_below {
            self.narrow_offset
        } else {
            self.wide_offset
        }
    }
}

/// The scrollable surface the resolver operates on.
pub trait Document {
    fn viewport_width(&self) -> u32;

    /// Current scroll position from the top of the document.
    fn scroll_offset(&self) -> i64;

    /// Top edge of the anchor with the given id, relative to the
    /// viewport. `None` when no such anchor exists.
    fn anchor_top(&self, id: &str) -> Option<i64>;

    /// Command an animated scroll. Fire-and-forget: callers never wait
    /// for the animation.
    fn scroll_to(&mut self, top: i64);
}

/// Strips a leading anchor marker so `"services"` and `"#services"`
/// address the same target.
pub fn normalize_anchor(target: &str) -> &str {
    target.strip_prefix('#').unwrap_or(target)
}

#[derive(Debug, Default)]
pub struct ScrollResolver {
    metrics: ScrollMetrics,
}

impl ScrollResolver {
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self { metrics }
    }

    pub fn navigate_to<D: Document>(&self, doc: &mut D, target: &str) {
        self.navigate_to_then(doc, target, || {});
    }

    /// Navigates and then runs `on_done` synchronously, after the scroll
    /// has been initiated. A missing anchor is a benign no-op (it can
    /// only happen before content is laid out) and skips the callback.
    pub fn navigate_to_then<D, F>(&self, doc: &mut D, target: &str, on_done: F)
    where
        D: Document,
        F: FnOnce(),
    {
        let id = normalize_anchor(target);
        let Some(top) = doc.anchor_top(id) else {
            return;
        };
        let offset = self.metrics.header_offset(doc.viewport_width());
        let position = top + doc.scroll_offset() - offset;
        doc.scroll_to(position);
        on_done();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeDocument {
        width: u32,
        scroll: i64,
        anchors: HashMap<&'static str, i64>,
        commands: Vec<i64>,
    }

    impl FakeDocument {
        fn new(width: u32, scroll: i64, anchors: &[(&'static str, i64)]) -> Self {
            Self {
                width,
                scroll,
                anchors: anchors.iter().copied().collect(),
                commands: Vec::new(),
            }
        }
    }

    impl Document for FakeDocument {
        fn viewport_width(&self) -> u32 {
            self.width
        }

        fn scroll_offset(&self) -> i64 {
            self.scroll
        }

        fn anchor_top(&self, id: &str) -> Option<i64> {
            self.anchors.get(id).map(|top| top - self.scroll)
        }

        fn scroll_to(&mut self, top: i64) {
            self.commands.push(top);
        }
    }

    #[test]
    fn anchor_marker_is_normalized() {
        assert_eq!(normalize_anchor("services"), "services");
        assert_eq!(normalize_anchor("#services"), "services");

        let resolver = ScrollResolver::default();
        let mut plain = FakeDocument::new(1024, 300, &[("contact", 2000)]);
        let mut marked = FakeDocument::new(1024, 300, &[("contact", 2000)]);
        resolver.navigate_to(&mut plain, "contact");
        resolver.navigate_to(&mut marked, "#contact");
        assert_eq!(plain.commands, marked.commands);
        assert_eq!(plain.commands.len(), 1);
    }

    #[test]
    fn breakpoint_switches_header_offset() {
        let resolver = ScrollResolver::default();
        let mut narrow = FakeDocument::new(767, 0, &[("materials", 900)]);
        let mut wide = FakeDocument::new(768, 0, &[("materials", 900)]);
        resolver.navigate_to(&mut narrow, "materials");
        resolver.navigate_to(&mut wide, "materials");
        assert_eq!(narrow.commands, vec![900 - 80]);
        assert_eq!(wide.commands, vec![900 - 72]);
        assert_eq!(wide.commands[0] - narrow.commands[0], 80 - 72);
    }

    #[test]
    fn missing_target_is_a_no_op_and_skips_the_callback() {
        let resolver = ScrollResolver::default();
        let mut doc = FakeDocument::new(1024, 0, &[("services", 100)]);
        let mut called = false;
        resolver.navigate_to_then(&mut doc, "#does-not-exist", || called = true);
        assert!(doc.commands.is_empty());
        assert!(!called);
    }

    #[test]
    fn callback_runs_after_the_scroll_is_initiated() {
        let resolver = ScrollResolver::default();
        let mut doc = FakeDocument::new(1024, 0, &[("services", 100)]);
        let mut called = false;
        resolver.navigate_to_then(&mut doc, "services", || called = true);
        assert_eq!(doc.commands.len(), 1);
        assert!(called);
    }

    #[test]
    fn wide_viewport_example_scenario() {
        // Anchor 1200 below the top of the document, no scroll yet,
        // wide viewport: 1200 + 0 - 72 = 1128.
        let resolver = ScrollResolver::default();
        let mut doc = FakeDocument::new(1024, 0, &[("services", 1200)]);
        resolver.navigate_to(&mut doc, "services");
        assert_eq!(doc.commands, vec![1128]);
    }

    #[test]
    fn scroll_offset_feeds_into_the_target() {
        // anchor_top is viewport-relative, so adding the current scroll
        // lands on the same absolute target wherever we start from.
        let resolver = ScrollResolver::default();
        let mut doc = FakeDocument::new(1024, 500, &[("contact", 2400)]);
        resolver.navigate_to(&mut doc, "contact");
        assert_eq!(doc.commands, vec![2400 - 72]);
    }

    #[test]
    fn custom_metrics_flow_through() {
        let resolver = ScrollResolver::new(ScrollMetrics {
            narrow_below: 80,
            wide_offset: 5,
            narrow_offset: 7,
        });
        let mut doc = FakeDocument::new(79, 0, &[("printers", 40)]);
        resolver.navigate_to(&mut doc, "printers");
        assert_eq!(doc.commands, vec![40 - 7]);
    }
}
