//! Size-dependent geometry of the dollar icon

pub const FILL_COLOR: [u8; 4] = [0, 124, 255, 255];
pub const OUTLINE_COLOR: [u8; 4] = [0, 86, 179, 255];
pub const GLYPH_COLOR: [u8; 4] = [255, 255, 255, 255];
pub const RING_COLOR: [u8; 4] = [255, 255, 255, 128];

pub const GLYPH: &str = "$";

/// Sizes below this get no inner ring
pub const RING_MIN_SIZE: u32 = 32;

/// Circle given by an inclusive pixel bounding box `[min, min, max, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleBox {
    pub min: u32,
    pub max: u32,
}

impl CircleBox {
    /// Box inset by `margin` on every side of a `size` canvas
    pub fn inset(size: u32, margin: u32) -> Self {
        Self {
            min: margin,
            max: size.saturating_sub(margin),
        }
    }

    pub fn center(&self) -> f32 {
        (self.min + self.max + 1) as f32 / 2.0
    }

    /// Zero when the box is inverted (margin larger than half the canvas)
    pub fn radius(&self) -> f32 {
        if self.max < self.min {
            0.0
        } else {
            (self.max - self.min + 1) as f32 / 2.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub bounds: CircleBox,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    pub size: u32,
    pub circle: CircleBox,
    pub outline_width: u32,
    pub font_size: u32,
    pub ring: Option<Ring>,
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let margin = (size / 16).max(1);
        let ring = (size >= RING_MIN_SIZE).then(|| Ring {
            bounds: CircleBox::inset(size, size / 4),
            width: (size / 64).max(1),
        });

        Self {
            size,
            circle: CircleBox::inset(size, margin),
            outline_width: (size / 32).max(1),
            font_size: (size / 3).max(8),
            ring,
        }
    }
}
