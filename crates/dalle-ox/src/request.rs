use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{DallERequestError, ImageModel, ImageSize};

/// Request body for `POST /images/generations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(builder_type(vis = "pub"), state_mod(vis = "pub"))]
pub struct ImageRequest {
    /// Model used to generate the images
    #[builder(into, default)]
    pub model: ImageModel,

    /// Text description of the desired image(s). Must not be empty.
    #[builder(into)]
    pub prompt: String,

    /// Number of images to generate
    #[builder(default = 1)]
    pub n: u32,

    /// Requested pixel dimensions
    #[builder(into, default)]
    pub size: ImageSize,
}

impl ImageRequest {
    /// A single `1024x1024` image from `dall-e-3`
    pub fn simple(prompt: impl Into<String>) -> Self {
        Self {
            model: ImageModel::DallE3,
            prompt: prompt.into(),
            n: 1,
            size: ImageSize::S1024x1024,
        }
    }

    /// Check the request before it is sent.
    ///
    /// The prompt is checked first, so an empty prompt is reported even when
    /// the model is also unsupported.
    pub fn validate(&self) -> Result<(), DallERequestError> {
        if self.prompt.is_empty() {
            return Err(DallERequestError::EmptyPrompt);
        }

        if !self.model.is_supported() {
            return Err(DallERequestError::UnsupportedModel(
                self.model.as_str().to_string(),
            ));
        }

        Ok(())
    }
}
