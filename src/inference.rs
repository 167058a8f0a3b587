use std::fmt;

use gloo::net::http::Request;
use web_sys::{Blob, FormData};

use crate::config::INFERENCE_ENDPOINT;
use crate::types::IterationCount;

/// Filename the serialized sketch travels under in the multipart body
const UPLOAD_FILENAME: &str = "drawing.png";

#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Endpoint answered outside the 2xx range
    Status(u16),
    /// Request never completed
    Network(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::Status(code) => write!(f, "server responded with status {code}"),
            InferenceError::Network(reason) => write!(f, "request failed: {reason}"),
        }
    }
}

fn build_form(
    image: &Blob,
    prompt: &str,
    iterations: IterationCount,
) -> Result<FormData, InferenceError> {
    let form = FormData::new().map_err(|e| InferenceError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("image", image, UPLOAD_FILENAME)
        .map_err(|e| InferenceError::Network(format!("{e:?}")))?;
    form.append_with_str("prompt", prompt)
        .map_err(|e| InferenceError::Network(format!("{e:?}")))?;
    form.append_with_str("num_iterations", iterations.as_field())
        .map_err(|e| InferenceError::Network(format!("{e:?}")))?;
    Ok(form)
}

/// POST the sketch, prompt and iteration count; return the generated image
/// bytes. One call per user-triggered submission, no retries.
pub async fn generate_image(
    image: &Blob,
    prompt: &str,
    iterations: IterationCount,
) -> Result<Vec<u8>, InferenceError> {
    let form = build_form(image, prompt, iterations)?;

    let response = Request::post(INFERENCE_ENDPOINT)
        .body(form)
        .map_err(|e| InferenceError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| InferenceError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(InferenceError::Status(response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| InferenceError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            InferenceError::Status(500).to_string(),
            "server responded with status 500"
        );
        assert_eq!(
            InferenceError::Network("connection reset".to_string()).to_string(),
            "request failed: connection reset"
        );
    }
}
