//! English dictionary.

use super::{
    Brand, ContactFormCopy, ContactSection, Dictionary, Footer, Hero, LanguageSwitcher, Locale,
    MaterialCard, MaterialsSection, Metadata, Nav, PrinterCard, PrintersSection, ServicesSection,
};

pub(super) static EN: Dictionary = Dictionary {
    locale: Locale::En,
    language_switcher: LanguageSwitcher {
        label: "Language",
        aria_label: "Toggle site language",
        locale_names: ["Czech", "English"],
    },
    brand: Brand {
        logo_alt: "VoxelForge Studio minimalist company logo",
        tagline: "A digital workshop for product teams and innovators.",
    },
    nav_toggle_label: "Toggle navigation",
    nav: Nav {
        services: "Services",
        materials: "Materials",
        printers: "Technology",
        contact: "Contact",
    },
    hero: Hero {
        title: "Reliable 3D printing without the guesswork",
        subtitle: "High-end prototypes and short runs with a focus on quality, sustainability, and clear communication.",
        primary_cta: "What we print",
        primary_cta_aria: "Skip to the services overview",
        secondary_cta: "Write to us",
        secondary_cta_aria: "Skip to the contact form",
        background_alt: "Abstract 3D scene with futuristic shapes",
    },
    services: ServicesSection {
        title: "How we help",
        highlights: &[
            "Pre-print engineering review",
            "Dimensional QA and finishing",
            "Express prototypes within 48 hours",
        ],
        highlights_aria: "Key production services we provide",
    },
    materials: MaterialsSection {
        title: "Materials",
        aria_label: "Available 3D printing materials",
        color_toggle_label: "Available colours",
        cards: [
            MaterialCard {
                title: "PLA",
                description: "Easy-to-print and eco-friendly material ideal for prototypes and decorative pieces. Not suitable for heat or outdoor use due to deformation around 52 °C.",
                stat_temperature: "Heat resistance (52 °C)",
                stat_strength: "Strength (65 MPa)",
                stat_uv: "UV resistance",
            },
            MaterialCard {
                title: "PETG",
                description: "Durable and chemically resistant material for functional parts. Offers partial UV resistance but is not ideal for long-term outdoor exposure.",
                stat_temperature: "Heat resistance (68 °C)",
                stat_strength: "Strength (53 MPa)",
                stat_uv: "UV resistance",
            },
            MaterialCard {
                title: "ABS",
                description: "Robust plastic that can be smoothed with acetone, well-suited for technical prints. Not UV stable.",
                stat_temperature: "Heat resistance (90 °C)",
                stat_strength: "Strength (45 MPa)",
                stat_uv: "UV resistance",
            },
            MaterialCard {
                title: "TPU",
                description: "Flexible, rubber-like material for covers, seals, or damping parts. Unsuitable for precise or highly stressed structures.",
                stat_temperature: "Heat resistance (73 °C)",
                stat_strength: "Strength (50 MPa)",
                stat_uv: "UV resistance",
            },
            MaterialCard {
                title: "PC",
                description: "Extremely strong and heat-resistant plastic for mechanically stressed parts.",
                stat_temperature: "Heat resistance (93 °C)",
                stat_strength: "Strength (63 MPa)",
                stat_uv: "UV resistance",
            },
            MaterialCard {
                title: "ASA",
                description: "Highly UV and weather resistant material ideal for outdoor components. Mechanically strong and dimensionally stable, a successor to ABS.",
                stat_temperature: "Heat resistance (93 °C)",
                stat_strength: "Strength (45 MPa)",
                stat_uv: "UV resistance",
            },
        ],
    },
    printers: PrintersSection {
        title: "Tools we rely on",
        cards: [
            PrinterCard {
                alt: "Prusa MK3S+ primed for precise prototype printing",
                credit: "© Prusa Research",
                credit_url: "https://prusa3d.com",
            },
            PrinterCard {
                alt: "Bambu Lab P1S delivering functional prototypes",
                credit: "© Bambu Lab",
                credit_url: "https://bambulab.com/en",
            },
        ],
    },
    contact: ContactSection {
        title: "Let's collaborate",
        background_alt: "Warm gradient with 3D shapes representing collaboration",
        description: "Tell us how we can help. We respond within one business day.",
        note: "Shared files are used solely to process your request.",
        response_time: "We usually reply within 24 hours on business days.",
    },
    contact_form: ContactFormCopy {
        name_label: "Name",
        name_placeholder: "Your name",
        email_label: "Email",
        email_placeholder: "name@company.com",
        message_label: "Message",
        message_placeholder: "Tell us about your project",
        attachment_label: "Attachment (optional)",
        attachment_primary_action: "Click to upload",
        attachment_secondary_text: "or drag & drop a file",
        attachment_help: "Secure upload, up to 10 MB.",
        remove_attachment: "Remove file",
        submit: "Send message",
        sending: "Sending...",
        success_message: "Thanks! We will reply shortly.",
        error_message: "Something went wrong. Please try again or reach out later.",
        file_selected: "File selected",
    },
    footer: Footer {
        navigation_heading: "Navigation",
        contact_heading: "Contact",
        legal_heading: "Business info",
        map_heading: "Where we work",
        address_label: "Location",
        phone_label: "Phone",
        email_label: "Email",
        save_contact: "Save contact",
        powered_by: "Crafted by",
        powered_by_name: "Studio Umbra",
        rights_reserved: "All rights reserved.",
        map_title: "Regions served by VoxelForge Studio",
        address_placeholder: "We share details once we start working together.",
        legal_placeholder: "Business details available upon request.",
    },
    metadata: Metadata {
        default_title: "Reliable on-demand 3D printing | VoxelForge Studio",
        title_template: "%s | VoxelForge Studio",
        description: "VoxelForge Studio delivers custom 3D printing with meticulous QA, sustainable material choices, and transparent collaboration.",
        keywords: &[
            "3D printing",
            "On-demand 3D printing",
            "Rapid prototyping",
            "Short-run production",
            "VoxelForge Studio",
            "Product development",
        ],
        og_title: "VoxelForge Studio – dependable 3D printing",
        og_description: "Your partner for precise prototypes and short-run manufacturing with proactive support.",
        twitter_title: "VoxelForge Studio | Reliable on-demand 3D printing",
        twitter_description: "Premium quality, sustainable materials, and transparent timelines for your next project.",
    },
};
