use serde::{Deserialize, Deserializer, Serialize};

/// Response from the image generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
    /// Generated images, in the order the provider returned them.
    /// A missing or `null` list decodes as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<ImageData>,
}

/// Image data item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// Where the generated image can be retrieved. Empty when the provider omitted it.
    #[serde(default)]
    pub url: String,
    /// Prompt as rewritten by the provider (`dall-e-3` only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ImageData>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ImageData>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ImageResponse {
    /// Retrieval URLs in response order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|image| image.url.as_str())
    }

    pub fn first_url(&self) -> Option<&str> {
        self.data.first().map(|image| image.url.as_str())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl IntoIterator for ImageResponse {
    type Item = ImageData;
    type IntoIter = std::vec::IntoIter<ImageData>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
