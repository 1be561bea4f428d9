//! PNG export of the TIA frame buffer (feature `screenshot`).

use std::path::Path;

use thiserror::Error;

use super::{FRAME_HEIGHT, FRAME_WIDTH, Tia};

#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("frame buffer does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32 },
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Tia {
    /// Write the current frame buffer to `path` as an RGBA PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ScreenshotError> {
        let width = FRAME_WIDTH as u32;
        let height = FRAME_HEIGHT as u32;
        let img = image::RgbaImage::from_raw(width, height, self.frame_buffer.clone())
            .ok_or(ScreenshotError::BufferSize { width, height })?;
        img.save_with_format(path, image::ImageFormat::Png)?;
        log::debug!("saved {width}x{height} frame");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_a_png() {
        let tia = Tia::new();
        let path = std::env::temp_dir().join(format!("arvcs-shot-{}.png", std::process::id()));
        tia.save_png(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let _ = std::fs::remove_file(&path);
    }
}
