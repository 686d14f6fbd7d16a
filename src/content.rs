//! Static content configuration: every record the sections render is a
//! fixed table defined here, read-only after module load. Image
//! references are served from /assets/.

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GridItem {
    pub label: &'static str,
    pub image: &'static str,
}

pub const GRID_ITEMS: [GridItem; 6] = [
    GridItem { label: "Indoor", image: "/assets/pic1.jpg" },
    GridItem { label: "Outdoor", image: "/assets/pic2.jpg" },
    GridItem { label: "Flex lights", image: "/assets/pic3.jpg" },
    GridItem { label: "The Factory", image: "/assets/pic2.jpg" },
    GridItem { label: "Lumina Collection", image: "/assets/pic1.jpg" },
    GridItem { label: "Stilnovo", image: "/assets/pic3.jpg" },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CatalogueItem {
    pub kind: &'static str,
    pub category: Option<&'static str>,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
}

pub const CATALOGUES: [CatalogueItem; 6] = [
    CatalogueItem {
        kind: "Catalogue",
        category: None,
        title: "MAESTRO",
        subtitle: "quattro.1",
        image: "/assets/pic1.jpg",
    },
    CatalogueItem {
        kind: "Brochure",
        category: Some("BOLLARDS"),
        title: "BUZZER_Q",
        subtitle: "2025",
        image: "/assets/pic2.jpg",
    },
    CatalogueItem {
        kind: "Brochure",
        category: Some("BOLLARDS"),
        title: "BOND PRO",
        subtitle: "2025",
        image: "/assets/pic3.jpg",
    },
    CatalogueItem {
        kind: "Catalogue",
        category: None,
        title: "PRODUCT",
        subtitle: "Series",
        image: "/assets/pic1.jpg",
    },
    CatalogueItem {
        kind: "Brochure",
        category: None,
        title: "OUTDOOR",
        subtitle: "2025",
        image: "/assets/pic2.jpg",
    },
    CatalogueItem {
        kind: "Catalogue",
        category: None,
        title: "INDOOR",
        subtitle: "2025",
        image: "/assets/pic3.jpg",
    },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ServicePanel {
    pub tag: &'static str,
    /// Rendered one line per entry.
    pub title: [&'static str; 2],
    pub description: &'static str,
    pub image: &'static str,
}

pub const SERVICES: [ServicePanel; 5] = [
    ServicePanel {
        tag: "A 360° System",
        title: ["Lumina", "Collection"],
        description: "Your complete lighting ecosystem designed for seamless integration across every architectural space.",
        image: "/assets/pic1.jpg",
    },
    ServicePanel {
        tag: "Tailor-Made Solutions",
        title: ["Custom Projects", "for Every Space"],
        description: "One Project, One Bespoke Light. Precision-crafted solutions tailored to your unique requirements.",
        image: "/assets/pic2.jpg",
    },
    ServicePanel {
        tag: "Custom Finishes",
        title: ["Finishes", "Catalogue"],
        description: "Adapt every detail to your project with our extensive range of custom finishes and premium materials.",
        image: "/assets/pic3.jpg",
    },
    ServicePanel {
        tag: "Smart Integration",
        title: ["Intelligent", "Lighting Control"],
        description: "Seamlessly connect your lighting with modern smart-home and building-management systems for effortless control.",
        image: "/assets/pic1.jpg",
    },
    ServicePanel {
        tag: "Sustainable Design",
        title: ["Energy Efficient", "Solutions"],
        description: "Award-winning designs that reduce energy consumption while delivering exceptional illumination quality.",
        image: "/assets/pic2.jpg",
    },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeroCard {
    pub label: &'static str,
    pub image: &'static str,
    /// Final fanned-out horizontal offset in px.
    pub x: f64,
    /// Final rotation in degrees.
    pub rotate_deg: f64,
}

pub const HERO_CARDS: [HeroCard; 4] = [
    HeroCard { label: "Indoor Collection", image: "/assets/pic1.jpg", x: -260.0, rotate_deg: -12.0 },
    HeroCard { label: "Outdoor Series", image: "/assets/pic2.jpg", x: -90.0, rotate_deg: -4.0 },
    HeroCard { label: "Lumina Light Group", image: "/assets/pic3.jpg", x: 90.0, rotate_deg: 4.0 },
    HeroCard { label: "Stilnovo", image: "/assets/pic1.jpg", x: 260.0, rotate_deg: 12.0 },
];

pub const HERO_FEATURES: [&str; 3] = [
    "Energy efficient",
    "Award-winning design",
    "Global delivery",
];

pub const NAV_LINKS: [&str; 4] = ["Home", "About Us", "Contact", "Products"];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "Contacts",
        links: &["Sales Network", "Press Contacts", "Contacts"],
    },
    FooterColumn {
        title: "Resources",
        links: &["Catalogues", "Projects", "Outdoor", "Indoor"],
    },
    FooterColumn {
        title: "Lumina Light Group",
        links: &["Work with us", "News", "Events"],
    },
    FooterColumn {
        title: "Helpful",
        links: &["Research & development", "Warranty", "Newsletter", "Plugin", "Certificates"],
    },
];

pub const SOCIAL_LINKS: [&str; 7] = [
    "Instagram",
    "Facebook",
    "Twitter",
    "Linkedin",
    "Youtube",
    "Pinterest",
    "Spotify",
];

pub const PARTNERS: [&str; 3] = ["STYLEPARK", "archiproducts", "ArchiEXPO"];

pub const FOOTER_LEGAL_LINKS: [&str; 5] = [
    "Credits",
    "Workspace",
    "Privacy Policy",
    "Cookie Policy",
    "Whistleblowing",
];

pub const FOOTER_LEGAL_TEXT: &str = "LUMINA LIGHT S.R.L. A SOCIO UNICO © 2024 - Company subject to management and coordination by Minulamp S.r.l. Cap. Soc. € 1.000.000 i.v. - R.I. TV/ C.F e P.IVA 01220530263";
