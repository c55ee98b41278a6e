//! Copy and contact details shown on the page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "Pure Vision transformed our kitchen. Fast, tidy and the color choice was perfect.",
        author: "— Jenna P., Homeowner",
    },
    Testimonial {
        quote: "Great communication, on time, and excellent finish. Highly recommended.",
        author: "— Marcus D.",
    },
    Testimonial {
        quote: "Would definitely use their service again. Absolutely fantastic!",
        author: "— Ronan M.",
    },
    Testimonial {
        quote: "Professional crew and very careful when working around furniture.",
        author: "— Leslie R.",
    },
    Testimonial {
        quote: "Quick, clean, and very professional. Im delighted!",
        author: "— Fionnuala K.",
    },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        icon: "🎨",
        title: "Interior Painting",
        blurb: "Wall & ceiling painting, trim, doors, and cabinetry finishes with clean lines and neat prep.",
    },
    Service {
        icon: "🏢",
        title: "Commercial Painting",
        blurb: "Minimal disruption, fast turnaround, and high-quality finishes for commercial properties.",
    },
    Service {
        icon: "✨",
        title: "Specialty Services",
        blurb: "Cabinet refinishing, decorative finishes and color consulting.",
    },
];

pub const SHIELD_ICON: &str = "M12 1L3 5v6c0 5 3.7 9.5 9 10 5.3-.5 9-5 9-10V5l-9-4z";
pub const PERSON_ICON: &str =
    "M12 12c2.7 0 5-2.3 5-5s-2.3-5-5-5-5 2.3-5 5 2.3 5 5 5zM12 14c-4.4 0-8 2-8 4v2h16v-2c0-2-3.6-4-8-4z";

/// (svg path, label)
pub const FEATURES: [(&str, &str); 3] = [
    (SHIELD_ICON, "Quality Workmanship"),
    (PERSON_ICON, "Experienced Team"),
    (SHIELD_ICON, "Transparent Pricing"),
];

/// (placeholder fill, caption)
pub const GALLERY: [(&str, &str); 3] = [
    ("#e9e9e9", "Interior — Living Room"),
    ("#dff3ff", "Exterior — Cottage"),
    ("#eef7f0", "Commercial Office"),
];

pub const BUSINESS_NAME: &str = "Pure Vision Painting";
pub const SERVICE_AREA: &str = "Dublin, Ireland";
pub const STRUCTURED_DATA_PHONE: &str = "123-456-7890";

pub const PHONE_DISPLAY: &str = "087-3498258";
pub const PHONE_LINK: &str = "tel:0873498258";
pub const CALL_LINK: &str = "tel:+353873498258";
pub const EMAIL: &str = "info.purevisionpainting@gmail.com";
pub const WHATSAPP_NUMBER: &str = "353873498258";
pub const WHATSAPP_GREETING: &str = "Hi Pure Vision, I'd like a free painting quote.";
pub const WHATSAPP_ICON: &str = "https://upload.wikimedia.org/wikipedia/commons/6/6b/WhatsApp.svg";

pub fn mailto_link() -> String {
    format!("mailto:{}", EMAIL)
}

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

pub mod seo {
    pub const TITLE: &str = "Pure Vision Painting — Dublin | Interior & Commercial Painting";
    pub const DESCRIPTION: &str = "Serving Dublin and nearby towns with professional interior and commercial painting — specialist work for cottages, fences and select exterior details. Free quotes.";
    pub const KEYWORDS: &str = "painting dublin, interior painting, commercial painting, cottage painting, fence painting, cabinet refinishing, color consultancy";
    pub const ROBOTS: &str = "index,follow";
    pub const THEME_COLOR: &str = "#0f3240";
    pub const SOCIAL_TITLE: &str = "Pure Vision Painting — Dublin";
    pub const OG_DESCRIPTION: &str =
        "Professional interior and commercial painting serving Dublin and nearby towns. Request a free quote.";
    pub const TWITTER_DESCRIPTION: &str =
        "Interior, commercial and select exterior painting services. Free quotes.";
    pub const BUSINESS_DESCRIPTION: &str = "Professional interior and commercial painting serving Dublin and nearby towns. Specialist cottage and fence work available. Free quotes.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_greeting() {
        let link = whatsapp_link();
        assert!(link.starts_with("https://wa.me/353873498258?text=Hi%20Pure%20Vision"));
        assert!(!link.contains(' '));
        assert!(link.contains("I%27d"));
    }

    #[test]
    fn mailto_points_at_business_inbox() {
        assert_eq!(mailto_link(), "mailto:info.purevisionpainting@gmail.com");
    }
}
