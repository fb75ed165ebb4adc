/// Fetch and decode catalog images
///
/// Images are downloaded once, decoded with the `image` crate and downsized
/// so the card grid doesn't upload full-resolution textures.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("decode task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Decoded RGBA pixels ready for an iced image handle
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Build the shared HTTP client for image fetches
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(20))
        .user_agent(concat!("styleshift/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Download one image and decode it off the UI thread.
///
/// The error is flattened to a String so it can travel inside a `Message`.
pub async fn load_image(
    client: reqwest::Client,
    uri: String,
    max_size: u32,
) -> Result<Handle, String> {
    fetch_and_decode(&client, &uri, max_size)
        .await
        .map(DecodedImage::into_handle)
        .map_err(|e| e.to_string())
}

async fn fetch_and_decode(
    client: &reqwest::Client,
    uri: &str,
    max_size: u32,
) -> Result<DecodedImage, LoadError> {
    let bytes = client
        .get(uri)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    debug!("Fetched {} KB from {}", bytes.len() / 1024, uri);

    // Spawn blocking because decoding and resizing are CPU-bound
    let decoded = tokio::task::spawn_blocking(move || decode_rgba(&bytes, max_size)).await??;
    Ok(decoded)
}

/// Decode encoded image bytes, shrinking to fit a `max_size` square.
///
/// Aspect ratio is preserved and smaller images are left at their size.
pub fn decode_rgba(bytes: &[u8], max_size: u32) -> Result<DecodedImage, LoadError> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > max_size || img.height() > max_size {
        img.resize(max_size, max_size, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
