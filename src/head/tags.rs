use serde::Serialize;

use crate::content::{self, seo};
use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

/// A single element the page adds to `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Meta {
        attr: MetaAttr,
        key: &'static str,
        content: String,
    },
    Link {
        rel: &'static str,
        href: String,
    },
    JsonLd(String),
}

/// Where the page is being served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub href: String,
    pub origin: String,
}

pub fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Resolves an asset path against the page origin. Absolute URLs are returned as-is.
pub fn absolute_url(path: &str, origin: &str) -> String {
    if path.is_empty() {
        String::new()
    } else if is_absolute(path) {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", origin, path)
    } else {
        format!("{}/{}", origin, path)
    }
}

#[derive(Serialize)]
struct Place<'a> {
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocalBusiness<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    image: &'a str,
    telephone: &'a str,
    area_served: Vec<Place<'a>>,
    description: &'a str,
    url: &'a str,
}

fn meta(attr: MetaAttr, key: &'static str, content: impl Into<String>) -> HeadTag {
    HeadTag::Meta {
        attr,
        key,
        content: content.into(),
    }
}

/// Title plus every tag for the page, in insertion order.
pub fn page_head(location: &PageLocation, logo: &str) -> Result<(&'static str, Vec<HeadTag>), PageError> {
    use MetaAttr::{Name, Property};

    let image = absolute_url(logo, &location.origin);
    let business = LocalBusiness {
        context: "https://schema.org",
        kind: "HomeAndConstructionBusiness",
        name: content::BUSINESS_NAME,
        image: &image,
        telephone: content::STRUCTURED_DATA_PHONE,
        area_served: vec![Place {
            kind: "Place",
            name: content::SERVICE_AREA,
        }],
        description: seo::BUSINESS_DESCRIPTION,
        url: &location.origin,
    };
    let json_ld = serde_json::to_string(&business)?;

    let tags = vec![
        meta(Name, "description", seo::DESCRIPTION),
        meta(Name, "keywords", seo::KEYWORDS),
        meta(Name, "robots", seo::ROBOTS),
        meta(Name, "theme-color", seo::THEME_COLOR),
        meta(Property, "og:title", seo::SOCIAL_TITLE),
        meta(Property, "og:description", seo::OG_DESCRIPTION),
        meta(Property, "og:type", "website"),
        meta(Property, "og:url", location.href.as_str()),
        meta(Property, "og:image", image.as_str()),
        meta(Name, "twitter:card", "summary_large_image"),
        meta(Name, "twitter:title", seo::SOCIAL_TITLE),
        meta(Name, "twitter:description", seo::TWITTER_DESCRIPTION),
        meta(Name, "twitter:image", image.as_str()),
        HeadTag::Link {
            rel: "canonical",
            href: location.href.clone(),
        },
        HeadTag::JsonLd(json_ld),
    ];
    Ok((seo::TITLE, tags))
}
