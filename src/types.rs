//! Core data structures for Gravatar URL construction.

use std::fmt;

/// Base URL of the avatar image endpoint.
pub const AVATAR_BASE_URL: &str = "https://gravatar.com/avatar";

/// Base URL of the profile endpoint.
pub const PROFILE_BASE_URL: &str = "https://gravatar.com";

/// Protocol tokens accepted by [`Protocol::from_token`].
pub const PROTOCOLS: [&str; 3] = ["https", "http", "auto"];

/// Rating tokens accepted by [`Rating::from_token`].
pub const RATINGS: [&str; 4] = ["g", "pg", "r", "x"];

/// Built-in default image tokens. Any other string is passed through as a custom fallback.
pub const DEFAULT_IMAGES: [&str; 8] = [
    "404",
    "mp",
    "identicon",
    "monsterid",
    "mavatar",
    "retro",
    "robohash",
    "blank",
];

/// Profile format tokens accepted by [`ProfileFormat::from_token`].
pub const PROFILE_FORMATS: [&str; 4] = ["JSON", "XML", "VCF", "QR_CODE"];

/// Scheme of the generated avatar URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// The URL starts with `https`
    Https,
    /// The URL starts with `http`
    Http,
    /// Protocol-agnostic URL starting with `//`
    Auto,
}

impl Protocol {
    /// Token used for this protocol.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
            Protocol::Auto => "auto",
        }
    }

    /// Parse a protocol token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "https" => Some(Protocol::Https),
            "http" => Some(Protocol::Http),
            "auto" => Some(Protocol::Auto),
            _ => None,
        }
    }
}

/// Audience rating of the images the service may return.
///
/// - `g`: suitable for display on all websites with any audience type
/// - `pg`: may contain rude gestures, provocatively dressed individuals, mild violence
/// - `r`: may contain harsh profanity, intense violence, nudity, or hard drug use
/// - `x`: may contain hardcore sexual imagery or extremely disturbing violence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    G,
    Pg,
    R,
    X,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::G => "g",
            Rating::Pg => "pg",
            Rating::R => "r",
            Rating::X => "x",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "g" => Some(Rating::G),
            "pg" => Some(Rating::Pg),
            "r" => Some(Rating::R),
            "x" => Some(Rating::X),
            _ => None,
        }
    }
}

/// Image served when the email has no avatar (or when forced).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultImage {
    /// Do not serve an image, respond with HTTP 404
    NotFound,
    /// Mystery person silhouette
    MysteryPerson,
    /// Geometric pattern based on the email hash
    Identicon,
    /// Generated monster
    MonsterId,
    /// Generated face
    Mavatar,
    /// 8-bit arcade-style pixelated face
    Retro,
    /// Generated robot
    RoboHash,
    /// Transparent PNG
    Blank,
    /// Any other value, typically the URL of a fallback image
    Custom(String),
}

impl DefaultImage {
    pub fn as_str(&self) -> &str {
        match self {
            DefaultImage::NotFound => "404",
            DefaultImage::MysteryPerson => "mp",
            DefaultImage::Identicon => "identicon",
            DefaultImage::MonsterId => "monsterid",
            DefaultImage::Mavatar => "mavatar",
            DefaultImage::Retro => "retro",
            DefaultImage::RoboHash => "robohash",
            DefaultImage::Blank => "blank",
            DefaultImage::Custom(value) => value,
        }
    }

    /// Map a token to its built-in variant, or keep it verbatim as [`DefaultImage::Custom`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "404" => DefaultImage::NotFound,
            "mp" => DefaultImage::MysteryPerson,
            "identicon" => DefaultImage::Identicon,
            "monsterid" => DefaultImage::MonsterId,
            "mavatar" => DefaultImage::Mavatar,
            "retro" => DefaultImage::Retro,
            "robohash" => DefaultImage::RoboHash,
            "blank" => DefaultImage::Blank,
            other => DefaultImage::Custom(other.to_string()),
        }
    }
}

impl From<&str> for DefaultImage {
    fn from(value: &str) -> Self {
        DefaultImage::from_token(value)
    }
}

impl From<String> for DefaultImage {
    fn from(value: String) -> Self {
        DefaultImage::from_token(&value)
    }
}

impl fmt::Display for DefaultImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional display parameters for an avatar URL.
///
/// Every field is independent; `None` leaves the corresponding URL part untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Scheme of the resulting URL (defaults to https)
    pub protocol: Option<Protocol>,
    /// Highest rating allowed
    pub rating: Option<Rating>,
    /// Fallback image
    pub default_image: Option<DefaultImage>,
    /// Always serve the default image
    pub force_default: Option<bool>,
    /// Edge length of the image in pixels
    pub size: Option<u32>,
    /// Append `.jpg` to the path
    pub include_extension: Option<bool>,
}

impl AvatarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn default_image(mut self, default_image: impl Into<DefaultImage>) -> Self {
        self.default_image = Some(default_image.into());
        self
    }

    pub fn force_default(mut self, force_default: bool) -> Self {
        self.force_default = Some(force_default);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn include_extension(mut self, include_extension: bool) -> Self {
        self.include_extension = Some(include_extension);
        self
    }

    /// Build options from loosely-typed key/value pairs.
    ///
    /// Accepts both the camelCase names and the short query keys (`s`, `d`, `f`, `r`).
    /// Unrecognized keys and values that fail to parse are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravurl::{AvatarOptions, Rating};
    ///
    /// let opts = AvatarOptions::from_pairs([("size", "80"), ("r", "pg"), ("color", "red")]);
    /// assert_eq!(opts.size, Some(80));
    /// assert_eq!(opts.rating, Some(Rating::Pg));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "size" | "s" => {
                    if let Ok(size) = value.parse::<u32>() {
                        options.size = Some(size);
                    }
                }
                "defaultImage" | "default_image" | "d" => {
                    options.default_image = Some(DefaultImage::from_token(value));
                }
                "forceDefault" | "force_default" | "f" => {
                    if let Some(flag) = parse_flag(value) {
                        options.force_default = Some(flag);
                    }
                }
                "rating" | "r" => {
                    if let Some(rating) = Rating::from_token(value) {
                        options.rating = Some(rating);
                    }
                }
                // "includeExtention" is the historical spelling some callers still send
                "includeExtension" | "include_extension" | "includeExtention" => {
                    if let Some(flag) = parse_flag(value) {
                        options.include_extension = Some(flag);
                    }
                }
                "protocol" => {
                    if let Some(protocol) = Protocol::from_token(value) {
                        options.protocol = Some(protocol);
                    }
                }
                _ => {}
            }
        }

        options
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "y" | "yes" => Some(true),
        "false" | "0" | "n" | "no" => Some(false),
        _ => None,
    }
}

/// Output representation of a profile URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Xml,
    Vcf,
    QrCode,
}

impl ProfileFormat {
    /// Path extension appended after the identifier.
    pub fn suffix(&self) -> &'static str {
        match self {
            ProfileFormat::Json => "json",
            ProfileFormat::Xml => "xml",
            ProfileFormat::Vcf => "vcf",
            ProfileFormat::QrCode => "qr",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileFormat::Json => "JSON",
            ProfileFormat::Xml => "XML",
            ProfileFormat::Vcf => "VCF",
            ProfileFormat::QrCode => "QR_CODE",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "JSON" => Some(ProfileFormat::Json),
            "XML" => Some(ProfileFormat::Xml),
            "VCF" => Some(ProfileFormat::Vcf),
            "QR_CODE" => Some(ProfileFormat::QrCode),
            _ => None,
        }
    }
}

/// Format-specific extra value for a profile URL.
///
/// `Text` is used as the JSONP callback name with [`ProfileFormat::Json`],
/// `Number` as the QR code edge length with [`ProfileFormat::QrCode`].
/// Any other pairing is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileExtra {
    Text(String),
    Number(u32),
}

impl From<&str> for ProfileExtra {
    fn from(value: &str) -> Self {
        ProfileExtra::Text(value.to_string())
    }
}

impl From<String> for ProfileExtra {
    fn from(value: String) -> Self {
        ProfileExtra::Text(value)
    }
}

impl From<u32> for ProfileExtra {
    fn from(value: u32) -> Self {
        ProfileExtra::Number(value)
    }
}
