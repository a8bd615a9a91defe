//! Czech dictionary (the fallback locale).

use super::{
    Brand, ContactFormCopy, ContactSection, Dictionary, Footer, Hero, LanguageSwitcher, Locale,
    MaterialCard, MaterialsSection, Metadata, Nav, PrinterCard, PrintersSection, ServicesSection,
};

pub(super) static CS: Dictionary = Dictionary {
    locale: Locale::Cs,
    language_switcher: LanguageSwitcher {
        label: "Jazyk",
        aria_label: "Přepnout jazyk webu",
        locale_names: ["Čeština", "English"],
    },
    brand: Brand {
        logo_alt: "VoxelForge Studio - minimalistické logo společnosti",
        tagline: "Digitální dílna pro produktové týmy a inovátory.",
    },
    nav_toggle_label: "Přepnout navigaci",
    nav: Nav {
        services: "Služby",
        materials: "Materiály",
        printers: "Technologie",
        contact: "Kontakt",
    },
    hero: Hero {
        title: "Precizní 3D tisk bez starostí",
        subtitle: "Špičkové prototypy a malé série s důrazem na kvalitu, udržitelnost a otevřenou komunikaci.",
        primary_cta: "Co tiskneme",
        primary_cta_aria: "Přejít na přehled služeb a parametrů 3D tisku",
        secondary_cta: "Napište nám",
        secondary_cta_aria: "Přejít na kontaktní formulář",
        background_alt: "Abstraktní 3D scéna s futuristickými tvary",
    },
    services: ServicesSection {
        title: "Co pro vás zajistíme",
        highlights: &[
            "Technická konzultace před výrobou",
            "Kontrolní měření a dokončení dílů",
            "Expresní prototypy do 48 hodin",
        ],
        highlights_aria: "Klíčové služby a procesy 3D tisku",
    },
    materials: MaterialsSection {
        title: "Materiály",
        aria_label: "Seznam dostupných 3D tiskových materiálů",
        color_toggle_label: "Dostupné barvy",
        cards: [
            MaterialCard {
                title: "PLA",
                description: "Snadno tisknutelný a ekologický materiál ideální pro prototypy a dekorace. Nevhodný do tepla nebo venkovních podmínek kvůli deformaci už při 52 °C.",
                stat_temperature: "Teplotní odolnost (52 °C)",
                stat_strength: "Pevnost (65 MPa)",
                stat_uv: "UV odolnost",
            },
            MaterialCard {
                title: "PETG",
                description: "Pevný a chemicky odolný materiál vhodný na funkční díly. Částečně odolává UV záření, ale není ideální pro dlouhodobé venkovní použití.",
                stat_temperature: "Teplotní odolnost (68 °C)",
                stat_strength: "Pevnost (53 MPa)",
                stat_uv: "UV odolnost",
            },
            MaterialCard {
                title: "ABS",
                description: "Odolný plast s možností chemického vyhlazení acetonem, vhodný pro technické výtisky. Není UV stabilní.",
                stat_temperature: "Teplotní odolnost (90 °C)",
                stat_strength: "Pevnost (45 MPa)",
                stat_uv: "UV odolnost",
            },
            MaterialCard {
                title: "TPU",
                description: "Flexibilní materiál pro kryty, těsnění nebo tlumicí prvky. Nevhodný pro přesné nebo vysoce zatěžované konstrukce.",
                stat_temperature: "Teplotní odolnost (73 °C)",
                stat_strength: "Pevnost (50 MPa)",
                stat_uv: "UV odolnost",
            },
            MaterialCard {
                title: "PC",
                description: "Velmi pevný a teplotně odolný plast vhodný pro mechanicky namáhané díly.",
                stat_temperature: "Teplotní odolnost (93 °C)",
                stat_strength: "Pevnost (63 MPa)",
                stat_uv: "UV odolnost",
            },
            MaterialCard {
                title: "ASA",
                description: "Materiál vysoce odolný vůči UV i počasí, ideální pro venkovní součástky. Mechanicky pevný a rozměrově stabilní, nástupce ABS.",
                stat_temperature: "Teplotní odolnost (93 °C)",
                stat_strength: "Pevnost (45 MPa)",
                stat_uv: "UV odolnost",
            },
        ],
    },
    printers: PrintersSection {
        title: "Technologie, na které spoléháme",
        cards: [
            PrinterCard {
                alt: "Prusa MK3S+ připravená na precizní tisk prototypů",
                credit: "© Prusa Research",
                credit_url: "https://prusa3d.com",
            },
            PrinterCard {
                alt: "Bambu Lab P1S při výrobě funkčních prototypů",
                credit: "© Bambu Lab",
                credit_url: "https://bambulab.com/en",
            },
        ],
    },
    contact: ContactSection {
        title: "Spojte se s námi",
        background_alt: "Oranžový gradient s 3D objekty symbolizující spolupráci",
        description: "Napište nám, co potřebujete vytisknout. Ozveme se nejpozději do jednoho pracovního dne.",
        note: "Sdílené podklady používáme pouze pro zpracování poptávky.",
        response_time: "Reagujeme zpravidla do 24 hodin v pracovních dnech.",
    },
    contact_form: ContactFormCopy {
        name_label: "Jméno",
        name_placeholder: "Vaše jméno",
        email_label: "Email",
        email_placeholder: "např. jana@firma.cz",
        message_label: "Zpráva",
        message_placeholder: "Jak vám můžeme pomoci?",
        attachment_label: "Příloha (volitelné)",
        attachment_primary_action: "Klikněte pro nahrání",
        attachment_secondary_text: "nebo přetáhněte soubor",
        attachment_help: "Bezpečné nahrání, maximálně 10 MB.",
        remove_attachment: "Odebrat soubor",
        submit: "Odeslat zprávu",
        sending: "Odesílání...",
        success_message: "Děkujeme! Ozveme se co nejdříve.",
        error_message: "Odeslání se nepodařilo. Zkuste to prosím znovu nebo napište později.",
        file_selected: "Vybraný soubor",
    },
    footer: Footer {
        navigation_heading: "Navigace",
        contact_heading: "Kontakt",
        legal_heading: "Firemní informace",
        map_heading: "Kde působíme",
        address_label: "Sídlo",
        phone_label: "Telefon",
        email_label: "Email",
        save_contact: "Uložit kontakt",
        powered_by: "Vyvinuto týmem",
        powered_by_name: "Studio Umbra",
        rights_reserved: "Všechna práva vyhrazena.",
        map_title: "Mapa regionů, kde VoxelForge Studio působí",
        address_placeholder: "Údaje sdělíme po navázání spolupráce.",
        legal_placeholder: "Firemní údaje jsou dostupné na vyžádání.",
    },
    metadata: Metadata {
        default_title: "Precizní zakázkový 3D tisk | VoxelForge Studio",
        title_template: "%s | VoxelForge Studio",
        description: "VoxelForge Studio nabízí zakázkový 3D tisk s důrazem na kvalitu, udržitelnost a důslednou kontrolu výstupů.",
        keywords: &[
            "3D tisk",
            "Zakázkový 3D tisk",
            "Prototypy",
            "Malosériová výroba",
            "VoxelForge Studio",
            "Průmyslový design",
        ],
        og_title: "VoxelForge Studio – spolehlivý 3D tisk",
        og_description: "Partner pro precizní prototypy a malé série. Od první konzultace po finální dodání.",
        twitter_title: "VoxelForge Studio | Precizní 3D tisk na zakázku",
        twitter_description: "Špičková kvalita, transparentní komunikace a férové termíny pro vaše projekty.",
    },
};
