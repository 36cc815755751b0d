//! Static copy for the page sections

/// Top navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Section anchor the entry scrolls to
    pub target: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", target: "top" },
    NavItem { label: "Features", target: "features" },
    NavItem { label: "Discover", target: "discover" },
    NavItem { label: "Contact", target: "contact" },
];

/// Footer navigation. "Home" lands on the hero like the top bar does.
pub const FOOTER_LINKS: [NavItem; 3] = [
    NavItem { label: "Home", target: "top" },
    NavItem { label: "Discover", target: "discover" },
    NavItem { label: "Contact", target: "contact" },
];

pub const LOGO: &str = "LOGO";
pub const HERO_TITLE: &str = "The new S-Class Saloon.";
pub const SCROLL_HINT: &str = "S C R O L L   T O   E N T E R";

/// Which side of a feature block carries the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureCopy {
    pub kicker: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub side: Side,
}

pub const FEATURES: [FeatureCopy; 3] = [
    FeatureCopy {
        kicker: "S-Class Saloon",
        title: "Where vision becomes presence.",
        body: "More than a vehicle. Design that commands attention, intelligence that \
               anticipates your needs, and comfort that transcends expectation.",
        side: Side::Left,
    },
    FeatureCopy {
        kicker: "Design",
        title: "Designed to be unmistakable.",
        body: "Every line and every contour speaks a language of distinction, moving the \
               idea of a flagship forward from every angle.",
        side: Side::Right,
    },
    FeatureCopy {
        kicker: "Craftsmanship",
        title: "The art of arrival.",
        body: "Surfaces that tell a story of uncompromising craft. Selected materials and \
               hand-finished details, elegant from the first touch.",
        side: Side::Left,
    },
];

pub const DISCOVER_TITLE: &str = "Discover more S-Class.";

/// Discover cards; card `i` shows slide `i` behind the section while hovered
pub const DISCOVER_CARDS: [&str; 3] = [
    "Discover S-Class Saloon, long version",
    "Discover S-Class Saloon",
    "Discover MANUFAKTUR",
];

pub const CONTACT_KICKER: &str = "CONTACT";
pub const CONTACT_TITLE: &str = "Contact us.";
pub const CONTACT_BODY: &str = "Have a question, want a quote, or want to collaborate? \
                                Message us on Instagram or WhatsApp. We usually reply within the day.";

/// (channel, handle, blurb)
pub const CONTACT_CHANNELS: [(&str, &str, &str); 2] = [
    ("INSTAGRAM", "@your_username", "DM us for updates, inquiries, and collaborations."),
    ("WHATSAPP", "+62 812-3456-7890", "Chat directly for fast responses and bookings."),
];

pub const FOOTER_TAGLINE: &str = "Crafted with precision. Designed with intention.";

/// Default slide captions when no images are configured
pub const PLACEHOLDER_SLIDES: [&str; 3] = ["Exterior", "Detail", "Interior"];
