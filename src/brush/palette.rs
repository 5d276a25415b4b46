use egui::Color32;
use serde::{Deserialize, Serialize};

/// The fixed brush palette, bound to keys `1`..`8` in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrushColor {
    #[default]
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl BrushColor {
    pub const ALL: [BrushColor; 8] = [
        BrushColor::Black,
        BrushColor::White,
        BrushColor::Red,
        BrushColor::Green,
        BrushColor::Blue,
        BrushColor::Yellow,
        BrushColor::Magenta,
        BrushColor::Cyan,
    ];

    pub fn color32(self) -> Color32 {
        match self {
            Self::Black => Color32::BLACK,
            Self::White => Color32::WHITE,
            Self::Red => Color32::from_rgb(255, 0, 0),
            Self::Green => Color32::from_rgb(0, 255, 0),
            Self::Blue => Color32::from_rgb(0, 0, 255),
            Self::Yellow => Color32::from_rgb(255, 255, 0),
            Self::Magenta => Color32::from_rgb(255, 0, 255),
            Self::Cyan => Color32::from_rgb(0, 255, 255),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Magenta => "Magenta",
            Self::Cyan => "Cyan",
        }
    }

    /// Palette entry for a 1-based slot, as printed on the number keys.
    pub fn from_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }

    /// Outline that stays visible on top of this color.
    pub fn outline(self) -> Color32 {
        match self {
            Self::Black | Self::Blue => Color32::WHITE,
            _ => Color32::BLACK,
        }
    }
}

impl From<BrushColor> for Color32 {
    fn from(color: BrushColor) -> Self {
        color.color32()
    }
}
