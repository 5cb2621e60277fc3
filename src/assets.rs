use base64::Engine;
use image::ImageFormat;
use url::{Host, Url};

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/600x400/E8F0FE/333333.png?text=Veh%C3%ADculo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpeg",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
        }
    }
}

/// Where the renderer should take the vehicle picture from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    Embedded { kind: ImageKind, data: Vec<u8> },
    Placeholder,
}

impl ImageSource {
    /// Resolves the operator-supplied value; anything unusable falls back to
    /// the placeholder picture.
    pub fn resolve(raw: Option<&str>) -> ImageSource {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return ImageSource::Placeholder;
        };
        if raw.starts_with("data:") {
            return match decode_data_uri(raw) {
                Some((kind, data)) => ImageSource::Embedded { kind, data },
                None => ImageSource::Placeholder,
            };
        }
        if is_http_url(raw) {
            ImageSource::Url(raw.to_string())
        } else {
            ImageSource::Placeholder
        }
    }

    pub fn is_acceptable(raw: &str) -> bool {
        !matches!(ImageSource::resolve(Some(raw)), ImageSource::Placeholder)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder)
    }

    /// The URL a renderer should fetch, or `None` for embedded bytes.
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Url(url) => Some(url),
            ImageSource::Placeholder => Some(PLACEHOLDER_IMAGE_URL),
            ImageSource::Embedded { .. } => None,
        }
    }
}

fn is_http_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => is_dns_name(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

// Parsed domains are already lowercased and punycode-encoded.
fn is_dns_name(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-')
        })
}

fn decode_data_uri(raw: &str) -> Option<(ImageKind, Vec<u8>)> {
    let rest = raw.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let declared = match mime.trim().to_ascii_lowercase().as_str() {
        "image/png" => ImageKind::Png,
        "image/jpeg" | "image/jpg" => ImageKind::Jpeg,
        _ => return None,
    };
    let data = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .ok()?;
    let sniffed = match image::guess_format(&data).ok()? {
        ImageFormat::Png => ImageKind::Png,
        ImageFormat::Jpeg => ImageKind::Jpeg,
        _ => return None,
    };
    if sniffed != declared {
        return None;
    }
    Some((sniffed, data))
}
