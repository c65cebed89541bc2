//! Tech-stack catalog and icon loading.
//!
//! The catalog is a fixed mapping of category to ordered display entries.
//! Icons resolve against the Iconify CDN and arrive as SVG bytes, rendered
//! as data URIs; an in-process cache makes repeated marquee copies share one
//! fetch per identifier.

use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

use base64::Engine;
use tokio::sync::Mutex;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TechItem {
    pub name: &'static str,
    /// Iconify identifier, `set:name`.
    pub icon: &'static str,
    /// Brand color applied to monochrome icon sets.
    pub color: &'static str,
}

pub const FRONTEND: &[TechItem] = &[
    TechItem {
        name: "Angular",
        icon: "skill-icons:angular-dark",
        color: "#DD0031",
    },
    TechItem {
        name: "React",
        icon: "skill-icons:react-dark",
        color: "#61DAFB",
    },
    TechItem {
        name: "Next.js",
        icon: "skill-icons:nextjs-dark",
        color: "#FFFFFF",
    },
    TechItem {
        name: "Tailwind CSS",
        icon: "skill-icons:tailwindcss-dark",
        color: "#38BDF8",
    },
    TechItem {
        name: "shadcn/ui",
        icon: "simple-icons:shadcnui",
        color: "#FFFFFF",
    },
    TechItem {
        name: "Figma",
        icon: "skill-icons:figma-dark",
        color: "#F24E1E",
    },
    TechItem {
        name: "Vercel",
        icon: "skill-icons:vercel-dark",
        color: "#FFFFFF",
    },
];

pub const BACKEND: &[TechItem] = &[
    TechItem {
        name: "Express.js",
        icon: "skill-icons:expressjs-dark",
        color: "#FFFFFF",
    },
    TechItem {
        name: "NestJS",
        icon: "skill-icons:nestjs-dark",
        color: "#E0234E",
    },
    TechItem {
        name: "FastAPI",
        icon: "skill-icons:fastapi",
        color: "#009688",
    },
    TechItem {
        name: "MySQL",
        icon: "skill-icons:mysql-dark",
        color: "#4479A1",
    },
    TechItem {
        name: "PostgreSQL",
        icon: "skill-icons:postgresql-dark",
        color: "#336791",
    },
    TechItem {
        name: "Oracle",
        icon: "simple-icons:oracle",
        color: "#F80000",
    },
    TechItem {
        name: "Supabase",
        icon: "skill-icons:supabase-dark",
        color: "#3ECF8E",
    },
    TechItem {
        name: "Docker",
        icon: "skill-icons:docker",
        color: "#2496ED",
    },
    TechItem {
        name: "AWS",
        icon: "skill-icons:aws-dark",
        color: "#FF9900",
    },
    TechItem {
        name: "Swagger",
        icon: "simple-icons:swagger",
        color: "#85EA2D",
    },
    TechItem {
        name: "Postman",
        icon: "skill-icons:postman",
        color: "#FF6C37",
    },
];

pub const LANGUAGES: &[TechItem] = &[
    TechItem {
        name: "TypeScript",
        icon: "skill-icons:typescript",
        color: "#3178C6",
    },
    TechItem {
        name: "Python",
        icon: "skill-icons:python-dark",
        color: "#3776AB",
    },
    TechItem {
        name: "Java",
        icon: "skill-icons:java-dark",
        color: "#ED8B00",
    },
];

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("malformed icon identifier: {0}")]
    BadIdentifier(String),
    #[error("icon fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// `set:name` → single-icon CDN URL. The brand color rides along as a query
/// parameter; Iconify applies it to `currentColor` sets and ignores it for
/// full-color ones.
pub fn iconify_url(icon: &str, color: &str) -> Result<String, IconError> {
    let (set, name) = icon
        .split_once(':')
        .ok_or_else(|| IconError::BadIdentifier(icon.to_string()))?;
    if set.is_empty() || name.is_empty() {
        return Err(IconError::BadIdentifier(icon.to_string()));
    }
    Ok(format!(
        "https://api.iconify.design/{set}/{name}.svg?color={}",
        urlencoding::encode(color)
    ))
}

/// Base64 data URI for SVG bytes.
pub(crate) fn svg_data_uri(bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:image/svg+xml;base64,{encoded}")
}

fn client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

fn cache() -> &'static Mutex<HashMap<String, String>> {
    static CACHE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Fetch one icon and return it as a data URI. Cached per identifier, so
/// the four copies of a marquee strip cost one request each, not four.
pub async fn load_icon(item: &TechItem) -> Result<String, IconError> {
    if let Some(hit) = cache().lock().await.get(item.icon) {
        return Ok(hit.clone());
    }

    let url = iconify_url(item.icon, item.color)?;
    let bytes = client()
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let uri = svg_data_uri(&bytes);

    cache()
        .lock()
        .await
        .insert(item.icon.to_string(), uri.clone());
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_the_expected_categories() {
        assert_eq!(FRONTEND.len(), 7);
        assert_eq!(BACKEND.len(), 11);
        assert_eq!(LANGUAGES.len(), 3);
    }

    #[test]
    fn catalog_entries_are_well_formed() {
        let all = FRONTEND.iter().chain(BACKEND).chain(LANGUAGES);
        let mut names = std::collections::HashSet::new();
        for item in all {
            assert!(names.insert(item.name), "duplicate entry: {}", item.name);
            assert!(item.color.starts_with('#') && item.color.len() == 7);
            iconify_url(item.icon, item.color).expect(item.icon);
        }
    }

    #[test]
    fn url_splits_set_and_name() {
        let url = iconify_url("skill-icons:typescript", "#3178C6").unwrap();
        assert_eq!(
            url,
            "https://api.iconify.design/skill-icons/typescript.svg?color=%233178C6"
        );
    }

    #[test]
    fn malformed_identifiers_are_rejected() {
        assert!(matches!(
            iconify_url("typescript", "#fff"),
            Err(IconError::BadIdentifier(_))
        ));
        assert!(matches!(
            iconify_url(":typescript", "#fff"),
            Err(IconError::BadIdentifier(_))
        ));
        assert!(matches!(
            iconify_url("skill-icons:", "#fff"),
            Err(IconError::BadIdentifier(_))
        ));
    }

    #[test]
    fn data_uri_is_base64_svg() {
        let uri = svg_data_uri(b"<svg/>");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
