///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{im::Vector, Color, Data, Lens};

use crate::error::WheelError;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Palette
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Colors handed out to new sectors, in order, wrapping around.
pub const SECTOR_PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
];

pub const DEFAULT_SECTOR_COUNT: usize = 6;

pub fn palette_color(index: usize) -> &'static str {
    SECTOR_PALETTE[index % SECTOR_PALETTE.len()]
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Sector
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Data, Lens, PartialEq, Eq, Debug)]
pub struct Sector {
    pub id: usize,
    pub text: String,
    pub color: String,
}

impl Sector {
    pub fn new(id: usize, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            color: color.into(),
        }
    }

    /// Parses the display color of the sector.
    pub fn display_color(&self) -> Result<Color, WheelError> {
        Color::from_hex_str(&self.color).map_err(|_| WheelError::InvalidColor(self.color.clone()))
    }
}

/// The wheel a fresh widget starts with.
pub fn default_sectors() -> Vector<Sector> {
    (0..DEFAULT_SECTOR_COUNT)
        .map(|index| Sector::new(index + 1, format!("Prize {}", index + 1), palette_color(index)))
        .collect()
}
