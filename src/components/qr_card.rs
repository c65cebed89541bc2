//! QR contact card.
//!
//! Encodes a URL as a scannable QR code rendered to an SVG data URL. Falls
//! back to the raw text if generation fails.

use base64::Engine;
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::theme::colors;

/// Generate a QR code data URL from a string.
///
/// Rendered as SVG for crisp scaling, light modules on the void background.
/// Returns None if QR code generation fails.
fn qr_data_url(data: &str) -> Option<String> {
    let code = QrCode::new(data.as_bytes()).ok()?;

    let svg_string = code
        .render()
        .min_dimensions(160, 160)
        .dark_color(svg::Color(colors::TEXT_PRIMARY))
        .light_color(svg::Color(colors::VOID_BLACK))
        .build();

    let encoded = base64::engine::general_purpose::STANDARD.encode(svg_string.as_bytes());
    Some(format!("data:image/svg+xml;base64,{}", encoded))
}

#[component]
pub fn QrCard(
    /// The data to encode
    data: String,
    /// Caption under the code
    label: String,
    /// Optional size in pixels
    #[props(default = 160)]
    size: u32,
) -> Element {
    let data_for_memo = data.clone();
    let qr_url = use_memo(move || qr_data_url(&data_for_memo));

    match qr_url() {
        Some(url) => rsx! {
            div { class: "qr-card",
                img {
                    class: "qr-card-img",
                    src: "{url}",
                    alt: "{label}",
                    width: "{size}",
                    height: "{size}",
                }
                span { class: "qr-card-label", "{label}" }
            }
        },
        None => rsx! {
            div { class: "qr-card qr-card--fallback",
                code { class: "qr-card-fallback-text", "{data}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_encode_to_svg_data_urls() {
        let url = qr_data_url("https://github.com/VarithPheng").unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn encoded_payload_is_valid_base64() {
        let url = qr_data_url("https://t.me/Varith_Pheng").unwrap();
        let payload = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert!(String::from_utf8(decoded).unwrap().contains("<svg"));
    }
}
