use std::fmt;

use serde::{Deserialize, Serialize};

/// Model identifiers accepted by [`ImageRequest::validate`](crate::ImageRequest::validate)
pub const ALLOWED_MODELS: [&str; 2] = ["dall-e-2", "dall-e-3"];

/// Image generation models
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageModel {
    #[serde(rename = "dall-e-2")]
    DallE2,

    /// Highest-capability model, used by [`ImageRequest::simple`](crate::ImageRequest::simple)
    #[default]
    #[serde(rename = "dall-e-3")]
    DallE3,

    /// Any other identifier. Rejected by validation unless it spells an allowed model.
    #[serde(untagged)]
    Custom(String),
}

impl ImageModel {
    pub fn as_str(&self) -> &str {
        match self {
            ImageModel::DallE2 => "dall-e-2",
            ImageModel::DallE3 => "dall-e-3",
            ImageModel::Custom(s) => s,
        }
    }

    /// Whether this identifier is on the allow-list
    pub fn is_supported(&self) -> bool {
        ALLOWED_MODELS.contains(&self.as_str())
    }
}

impl fmt::Display for ImageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ImageModel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "dall-e-2" => ImageModel::DallE2,
            "dall-e-3" => ImageModel::DallE3,
            _ => ImageModel::Custom(s),
        }
    }
}

impl From<&str> for ImageModel {
    fn from(s: &str) -> Self {
        ImageModel::from(s.to_string())
    }
}

/// Requested pixel dimensions. Not validated; unknown tokens go through as `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    S256x256,

    #[serde(rename = "512x512")]
    S512x512,

    #[default]
    #[serde(rename = "1024x1024")]
    S1024x1024,

    #[serde(rename = "1792x1024")]
    S1792x1024,

    #[serde(rename = "1024x1792")]
    S1024x1792,

    #[serde(untagged)]
    Custom(String),
}

impl ImageSize {
    pub fn as_str(&self) -> &str {
        match self {
            ImageSize::S256x256 => "256x256",
            ImageSize::S512x512 => "512x512",
            ImageSize::S1024x1024 => "1024x1024",
            ImageSize::S1792x1024 => "1792x1024",
            ImageSize::S1024x1792 => "1024x1792",
            ImageSize::Custom(s) => s,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ImageSize {
    fn from(s: String) -> Self {
        match s.as_str() {
            "256x256" => ImageSize::S256x256,
            "512x512" => ImageSize::S512x512,
            "1024x1024" => ImageSize::S1024x1024,
            "1792x1024" => ImageSize::S1792x1024,
            "1024x1792" => ImageSize::S1024x1792,
            _ => ImageSize::Custom(s),
        }
    }
}

impl From<&str> for ImageSize {
    fn from(s: &str) -> Self {
        ImageSize::from(s.to_string())
    }
}
