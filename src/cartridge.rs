/*!
Cartridge ROM images for the 4 KiB ROM window at $1000-$1FFF.

Features:
- Load a raw (headerless) ROM image from bytes or from a file path
- Validate the image size; only the two classic sizes exist without bank
  switching

Mapping rules:
- 2 KiB image: appears at $1000-$17FF and is mirrored at $1800-$1FFF.
- 4 KiB image: fills $1000-$1FFF directly.
*/

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::bus::Bus;
use crate::bus::memory_map::ROM_START;

/// Size of the cartridge window.
pub const ROM_WINDOW: usize = 0x1000;
/// Smallest supported image.
pub const HALF_ROM: usize = 0x0800;

#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("ROM image is empty")]
    Empty,
    #[error("ROM image is {0} bytes; at most 4096 fit without bank switching")]
    TooLarge(usize),
    #[error("ROM image is {0} bytes; expected 2048 or 4096")]
    UnsupportedSize(usize),
    #[error("failed to read ROM image: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cartridge {
    rom: Vec<u8>,
}

impl Cartridge {
    /// Validate a raw image.
    pub fn from_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        match data.len() {
            0 => Err(CartridgeError::Empty),
            HALF_ROM | ROM_WINDOW => Ok(Self { rom: data.to_vec() }),
            n if n > ROM_WINDOW => Err(CartridgeError::TooLarge(n)),
            n => Err(CartridgeError::UnsupportedSize(n)),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    pub fn size(&self) -> usize {
        self.rom.len()
    }

    /// True for 2 KiB images, which appear twice in the window.
    pub fn is_mirrored(&self) -> bool {
        self.rom.len() == HALF_ROM
    }

    /// Copy the image into the ROM window of `bus`.
    pub fn install(&self, bus: &mut Bus) {
        for offset in (0..ROM_WINDOW).step_by(self.rom.len()) {
            bus.load(ROM_START + offset as u16, &self.rom);
        }
        log::debug!(
            "cartridge installed: {} bytes{}",
            self.rom.len(),
            if self.is_mirrored() { ", mirrored" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_validation() {
        assert!(matches!(
            Cartridge::from_bytes(&[]),
            Err(CartridgeError::Empty)
        ));
        assert!(matches!(
            Cartridge::from_bytes(&[0; 100]),
            Err(CartridgeError::UnsupportedSize(100))
        ));
        assert!(matches!(
            Cartridge::from_bytes(&[0; 8192]),
            Err(CartridgeError::TooLarge(8192))
        ));
        assert!(Cartridge::from_bytes(&[0; 2048]).is_ok());
        assert!(Cartridge::from_bytes(&[0; 4096]).is_ok());
    }

    #[test]
    fn two_kib_image_is_mirrored() {
        let mut image = vec![0u8; HALF_ROM];
        image[0] = 0xA9;
        image[HALF_ROM - 1] = 0x42;
        let cart = Cartridge::from_bytes(&image).unwrap();
        assert!(cart.is_mirrored());
        let mut bus = Bus::new();
        cart.install(&mut bus);
        assert_eq!(bus.read(0x1000), 0xA9);
        assert_eq!(bus.read(0x1800), 0xA9);
        assert_eq!(bus.read(0x17FF), 0x42);
        assert_eq!(bus.read(0x1FFF), 0x42);
    }

    #[test]
    fn four_kib_image_fills_window() {
        let image: Vec<u8> = (0..ROM_WINDOW).map(|i| (i / 256) as u8).collect();
        let cart = Cartridge::from_bytes(&image).unwrap();
        let mut bus = Bus::new();
        cart.install(&mut bus);
        assert_eq!(bus.read(0x1000), 0x00);
        assert_eq!(bus.read(0x1F00), 0x0F);
        assert!(!cart.is_mirrored());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Cartridge::from_file("/nonexistent/arvcs.bin").unwrap_err();
        assert!(matches!(err, CartridgeError::Io(_)));
        assert!(err.to_string().starts_with("failed to read ROM image"));
    }
}
