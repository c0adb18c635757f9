use crate::data::{BlockRecord, DotRecord};
use glam::Vec2;
use smallvec::SmallVec;

/// Packed RGB color, parsed from the `0xRRGGBB` hex values the data payload
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// A marker point attached to a block: a category tag, a stroke color, and a
/// local offset within the owning block. Dots are owned exclusively by their
/// block and never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub dot_type: String,
    pub color: Color,
    pub offset: Vec2,
}

impl Dot {
    pub fn from_record(record: &DotRecord) -> Self {
        Self {
            dot_type: record.dot_type.clone(),
            color: Color::from_hex(record.color),
            offset: Vec2::new(record.x, record.y),
        }
    }

    /// Derived scene-space point: owning block position plus local offset.
    pub fn global_point(&self, block_position: Vec2) -> Vec2 {
        block_position + self.offset
    }
}

/// A positioned visual unit. Intrinsic size and the dot sequence are fixed at
/// creation; only `position` mutates, and only the layout engine writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub title: String,
    pub position: Vec2,
    width: f32,
    height: f32,
    dots: SmallVec<[Dot; 4]>,
}

impl Block {
    pub fn from_record(record: &BlockRecord) -> Self {
        Self {
            title: record.title.clone(),
            position: Vec2::ZERO,
            width: record.width,
            height: record.height,
            dots: record.dots.iter().map(Dot::from_record).collect(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }
}
