//! Locale domain, translation dictionaries and the current-locale cell.
//!
//! The locale set is closed: every UI string exists for every variant of
//! [`Locale`], so lookups are total and need no error path. Dictionaries
//! are immutable statics built once at compile time.

mod cs;
mod en;

/// A supported UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Cs,
    En,
}

/// Locale used when no explicit default is supplied.
pub const FALLBACK_LOCALE: Locale = Locale::Cs;

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Cs, Locale::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::Cs => "cs",
            Locale::En => "en",
        }
    }

    /// Position inside [`Locale::ALL`], usable as an array index.
    pub const fn index(self) -> usize {
        match self {
            Locale::Cs => 0,
            Locale::En => 1,
        }
    }

    /// The locale after this one, wrapping around. Drives the
    /// language-toggle key.
    pub const fn next(self) -> Locale {
        match self {
            Locale::Cs => Locale::En,
            Locale::En => Locale::Cs,
        }
    }
}

/// The complete set of user-facing strings for one locale.
///
/// Schema-complete by construction: a missing field is a compile error,
/// so there is no per-key fallback anywhere in the crate.
pub struct Dictionary {
    pub locale: Locale,
    pub language_switcher: LanguageSwitcher,
    pub brand: Brand,
    pub nav_toggle_label: &'static str,
    pub nav: Nav,
    pub hero: Hero,
    pub services: ServicesSection,
    pub materials: MaterialsSection,
    pub printers: PrintersSection,
    pub contact: ContactSection,
    pub contact_form: ContactFormCopy,
    pub footer: Footer,
    pub metadata: Metadata,
}

pub struct LanguageSwitcher {
    pub label: &'static str,
    pub aria_label: &'static str,
    /// Display name for each locale, indexed by [`Locale::index`].
    pub locale_names: [&'static str; 2],
}

pub struct Brand {
    pub logo_alt: &'static str,
    pub tagline: &'static str,
}

pub struct Nav {
    pub services: &'static str,
    pub materials: &'static str,
    pub printers: &'static str,
    pub contact: &'static str,
}

pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub primary_cta_aria: &'static str,
    pub secondary_cta: &'static str,
    pub secondary_cta_aria: &'static str,
    pub background_alt: &'static str,
}

pub struct ServicesSection {
    pub title: &'static str,
    pub highlights: &'static [&'static str],
    pub highlights_aria: &'static str,
}

pub struct MaterialsSection {
    pub title: &'static str,
    pub aria_label: &'static str,
    pub color_toggle_label: &'static str,
    /// Aligned by index with the material ratings in the site config.
    pub cards: [MaterialCard; 6],
}

pub struct MaterialCard {
    pub title: &'static str,
    pub description: &'static str,
    pub stat_temperature: &'static str,
    pub stat_strength: &'static str,
    pub stat_uv: &'static str,
}

pub struct PrintersSection {
    pub title: &'static str,
    pub cards: [PrinterCard; 2],
}

pub struct PrinterCard {
    pub alt: &'static str,
    pub credit: &'static str,
    pub credit_url: &'static str,
}

pub struct ContactSection {
    pub title: &'static str,
    pub background_alt: &'static str,
    pub description: &'static str,
    pub note: &'static str,
    pub response_time: &'static str,
}

pub struct ContactFormCopy {
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub attachment_label: &'static str,
    pub attachment_primary_action: &'static str,
    pub attachment_secondary_text: &'static str,
    pub attachment_help: &'static str,
    pub remove_attachment: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
    pub success_message: &'static str,
    pub error_message: &'static str,
    pub file_selected: &'static str,
}

pub struct Footer {
    pub navigation_heading: &'static str,
    pub contact_heading: &'static str,
    pub legal_heading: &'static str,
    pub map_heading: &'static str,
    pub address_label: &'static str,
    pub phone_label: &'static str,
    pub email_label: &'static str,
    pub save_contact: &'static str,
    pub powered_by: &'static str,
    pub powered_by_name: &'static str,
    pub rights_reserved: &'static str,
    pub map_title: &'static str,
    pub address_placeholder: &'static str,
    pub legal_placeholder: &'static str,
}

pub struct Metadata {
    pub default_title: &'static str,
    pub title_template: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub og_title: &'static str,
    pub og_description: &'static str,
    pub twitter_title: &'static str,
    pub twitter_description: &'static str,
}

/// Total lookup: every supported locale has a complete dictionary.
pub const fn lookup(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::Cs => &cs::CS,
        Locale::En => &en::EN,
    }
}

/// Session-scoped current-locale state.
///
/// Owned by the `App`; only user-interaction handlers call
/// [`LocaleContext::set_locale`], so writes are naturally serialized by
/// the single-threaded event dispatch. The held value is always a member
/// of the supported set and there is no unset state.
pub struct LocaleContext {
    current: Locale,
}

impl LocaleContext {
    /// `None` falls back to [`FALLBACK_LOCALE`]; a default is mandatory.
    pub fn new(default: Option<Locale>) -> Self {
        Self {
            current: default.unwrap_or(FALLBACK_LOCALE),
        }
    }

    pub fn locale(&self) -> Locale {
        self.current
    }

    /// Convenience composition of [`lookup`] over the live locale.
    pub fn dictionary(&self) -> &'static Dictionary {
        lookup(self.current)
    }

    pub fn set_locale(&mut self, next: Locale) {
        self.current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flattens every string in a dictionary so tests can assert on all
    /// of them at once.
    fn all_strings(d: &Dictionary) -> Vec<&'static str> {
        let mut out = vec![
            d.language_switcher.label,
            d.language_switcher.aria_label,
            d.brand.logo_alt,
            d.brand.tagline,
            d.nav_toggle_label,
            d.nav.services,
            d.nav.materials,
            d.nav.printers,
            d.nav.contact,
            d.hero.title,
            d.hero.subtitle,
            d.hero.primary_cta,
            d.hero.primary_cta_aria,
            d.hero.secondary_cta,
            d.hero.secondary_cta_aria,
            d.hero.background_alt,
            d.services.title,
            d.services.highlights_aria,
            d.materials.title,
            d.materials.aria_label,
            d.materials.color_toggle_label,
            d.printers.title,
            d.contact.title,
            d.contact.background_alt,
            d.contact.description,
            d.contact.note,
            d.contact.response_time,
            d.contact_form.name_label,
            d.contact_form.name_placeholder,
            d.contact_form.email_label,
            d.contact_form.email_placeholder,
            d.contact_form.message_label,
            d.contact_form.message_placeholder,
            d.contact_form.attachment_label,
            d.contact_form.attachment_primary_action,
            d.contact_form.attachment_secondary_text,
            d.contact_form.attachment_help,
            d.contact_form.remove_attachment,
            d.contact_form.submit,
            d.contact_form.sending,
            d.contact_form.success_message,
            d.contact_form.error_message,
            d.contact_form.file_selected,
            d.footer.navigation_heading,
            d.footer.contact_heading,
            d.footer.legal_heading,
            d.footer.map_heading,
            d.footer.address_label,
            d.footer.phone_label,
            d.footer.email_label,
            d.footer.save_contact,
            d.footer.powered_by,
            d.footer.powered_by_name,
            d.footer.rights_reserved,
            d.footer.map_title,
            d.footer.address_placeholder,
            d.footer.legal_placeholder,
            d.metadata.default_title,
            d.metadata.title_template,
            d.metadata.description,
            d.metadata.og_title,
            d.metadata.og_description,
            d.metadata.twitter_title,
            d.metadata.twitter_description,
        ];
        out.extend(d.language_switcher.locale_names);
        out.extend(d.services.highlights.iter().copied());
        out.extend(d.metadata.keywords.iter().copied());
        for card in &d.materials.cards {
            out.extend([
                card.title,
                card.description,
                card.stat_temperature,
                card.stat_strength,
                card.stat_uv,
            ]);
        }
        for card in &d.printers.cards {
            out.extend([card.alt, card.credit, card.credit_url]);
        }
        out
    }

    #[test]
    fn every_locale_has_a_complete_non_empty_dictionary() {
        for locale in Locale::ALL {
            let dict = lookup(locale);
            assert_eq!(dict.locale, locale);
            for s in all_strings(dict) {
                assert!(!s.is_empty(), "empty string in {:?} dictionary", locale);
            }
            assert!(!dict.services.highlights.is_empty());
            assert!(!dict.metadata.keywords.is_empty());
        }
    }

    #[test]
    fn context_defaults_to_fallback_locale() {
        let ctx = LocaleContext::new(None);
        assert_eq!(ctx.locale(), Locale::Cs);
        assert_eq!(ctx.dictionary().locale, Locale::Cs);
    }

    #[test]
    fn explicit_default_is_honored() {
        let ctx = LocaleContext::new(Some(Locale::En));
        assert_eq!(ctx.locale(), Locale::En);
    }

    #[test]
    fn set_locale_round_trips_for_every_locale() {
        let mut ctx = LocaleContext::new(None);
        for locale in Locale::ALL {
            ctx.set_locale(locale);
            assert_eq!(ctx.locale(), locale);
            assert_eq!(ctx.dictionary().locale, locale);
        }
    }

    #[test]
    fn repeated_set_locale_is_idempotent() {
        let mut ctx = LocaleContext::new(None);
        ctx.set_locale(Locale::En);
        let first = ctx.dictionary();
        ctx.set_locale(Locale::En);
        let second = ctx.dictionary();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn next_cycles_through_the_whole_domain() {
        assert_eq!(Locale::Cs.next(), Locale::En);
        assert_eq!(Locale::En.next(), Locale::Cs);
    }
}
