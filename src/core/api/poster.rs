//! Loading of movie posters
//!
//! Posters can come in any resolution the lookup service happens to find, so
//! they are thumbnailed to a size that is good enough for the GUI before being
//! handed over as raw rgba pixels.

use bytes::Bytes;
use image::GenericImageView;
use reqwest::Client;
use tracing::error;

const POSTER_MAX_WIDTH: u32 = 480;
const POSTER_MAX_HEIGHT: u32 = 853;

/// A decoded poster ready to be displayed
#[derive(Debug, Clone)]
pub struct Poster {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

/// Decodes the poster image bytes, thumbnailing posters larger than needed
pub fn decode_poster(bytes: &[u8]) -> Result<Poster, image::ImageError> {
    let img = image::load_from_memory(bytes)?;

    let (width, height) = img.dimensions();
    let img = if width > POSTER_MAX_WIDTH || height > POSTER_MAX_HEIGHT {
        img.thumbnail(POSTER_MAX_WIDTH, POSTER_MAX_HEIGHT)
    } else {
        img
    };

    let rgba = img.to_rgba8();

    Ok(Poster {
        width: rgba.width(),
        height: rgba.height(),
        rgba: Bytes::from(rgba.into_raw()),
    })
}

/// Downloads the poster from the provided url
///
/// Failures are logged and give `None`, a missing poster is never an error
/// worth bothering the user with.
pub async fn load_poster(client: Client, poster_url: String) -> Option<Poster> {
    let response = client
        .get(&poster_url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| error!("failed to download poster '{}': {}", poster_url, err))
        .ok()?;

    let bytes = response
        .bytes()
        .await
        .map_err(|err| error!("failed to read poster '{}': {}", poster_url, err))
        .ok()?;

    tokio::task::spawn_blocking(move || decode_poster(&bytes))
        .await
        .map_err(|err| error!("poster decoding task failed: {}", err))
        .ok()?
        .map_err(|err| error!("failed to decode poster '{}': {}", poster_url, err))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbImage::from_pixel(width, height, Rgb([143, 101, 147]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn large_posters_get_thumbnailed() {
        let poster = decode_poster(&png_bytes(1000, 1500)).unwrap();

        assert!(poster.width <= POSTER_MAX_WIDTH);
        assert!(poster.height <= POSTER_MAX_HEIGHT);
        assert_eq!(
            poster.rgba.len(),
            (poster.width * poster.height * 4) as usize
        );
    }

    #[test]
    fn small_posters_keep_their_size() {
        let poster = decode_poster(&png_bytes(300, 450)).unwrap();

        assert_eq!((poster.width, poster.height), (300, 450));
    }

    #[test]
    fn garbage_is_not_a_poster() {
        assert!(decode_poster(b"definitely not an image").is_err());
    }
}
