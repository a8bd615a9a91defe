//! Static site configuration.
//!
//! Everything here is a compile-time constant, so the default locale and
//! all structural data are resolvable at build time with no per-request
//! logic behind them.

use crate::i18n::{Dictionary, Locale};

/// One of the four in-page navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Services,
    Materials,
    Printers,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::Materials,
        Section::Printers,
        Section::Contact,
    ];

    /// The anchor id the scroll resolver looks up.
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::Materials => "materials",
            Section::Printers => "printers",
            Section::Contact => "contact",
        }
    }

    pub fn label(self, dict: &Dictionary) -> &'static str {
        match self {
            Section::Services => dict.nav.services,
            Section::Materials => dict.nav.materials,
            Section::Printers => dict.nav.printers,
            Section::Contact => dict.nav.contact,
        }
    }

    /// Mnemonic key that navigates to this section.
    pub const fn hotkey(self) -> char {
        match self {
            Section::Services => 's',
            Section::Materials => 'm',
            Section::Printers => 'p',
            Section::Contact => 'c',
        }
    }
}

pub struct Company {
    pub name: &'static str,
    pub legal_name: &'static str,
}

pub struct ContactInfo {
    pub street: &'static str,
    pub city: &'static str,
    pub zip: &'static str,
    pub country: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

/// Numeric material ratings in percent; the matching copy lives in the
/// dictionary, aligned by index.
pub struct MaterialSpec {
    pub id: &'static str,
    pub temperature: u8,
    pub strength: u8,
    pub uv_resistance: u8,
}

pub struct PrinterSpec {
    pub image: &'static str,
}

pub struct MapConfig {
    pub query: &'static str,
    pub zoom: u8,
}

pub struct PoweredBy {
    pub name: &'static str,
    pub url: &'static str,
}

pub struct SiteConfig {
    pub default_locale: Locale,
    pub base_url: &'static str,
    pub company: Company,
    pub contact: ContactInfo,
    pub materials: [MaterialSpec; 6],
    pub printers: [PrinterSpec; 2],
    pub map: MapConfig,
    pub powered_by: PoweredBy,
}

pub static SITE: SiteConfig = SiteConfig {
    default_locale: Locale::Cs,
    base_url: "https://voxelforge.studio",
    company: Company {
        name: "VoxelForge Studio",
        legal_name: "VoxelForge Studio s.r.o.",
    },
    contact: ContactInfo {
        street: "Technologická 12",
        city: "Praha 7",
        zip: "170 00",
        country: "Česká republika",
        phone: "+420 000 000 000",
        email: "info@voxelforge.studio",
    },
    materials: [
        MaterialSpec { id: "pla", temperature: 52, strength: 65, uv_resistance: 55 },
        MaterialSpec { id: "petg", temperature: 68, strength: 53, uv_resistance: 75 },
        MaterialSpec { id: "abs", temperature: 90, strength: 45, uv_resistance: 30 },
        MaterialSpec { id: "tpu", temperature: 73, strength: 50, uv_resistance: 30 },
        MaterialSpec { id: "pc", temperature: 93, strength: 63, uv_resistance: 95 },
        MaterialSpec { id: "asa", temperature: 93, strength: 45, uv_resistance: 95 },
    ],
    printers: [
        PrinterSpec { image: "MMU3_whole.jpg" },
        PrinterSpec { image: "P1.jpg" },
    ],
    map: MapConfig {
        query: "Technologická 12, Praha 7",
        zoom: 15,
    },
    powered_by: PoweredBy {
        name: "Studio Umbra",
        url: "https://studioumbra.example",
    },
};
