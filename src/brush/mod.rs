mod footprint;
mod palette;

pub use footprint::BrushFootprint;
pub use palette::BrushColor;

use egui::{Color32, ColorImage};

use crate::raster::Point;

/// The paintbrush: palette color, radius and the footprint cached for that radius.
///
/// Radius range policy lives with the caller; the brush accepts any radius.
#[derive(Debug, Clone)]
pub struct Brush {
    color: BrushColor,
    radius: i32,
    footprint: BrushFootprint,
    /// Bumped on every color or radius change so cursor textures can be re-keyed.
    revision: u64,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(BrushColor::Black, 5)
    }
}

impl Brush {
    pub fn new(color: BrushColor, radius: i32) -> Self {
        Self {
            color,
            radius,
            footprint: BrushFootprint::new(radius),
            revision: 0,
        }
    }

    pub fn color(&self) -> BrushColor {
        self.color
    }

    pub fn set_color(&mut self, color: BrushColor) {
        if self.color != color {
            log::debug!("Paintbrush color is now: {}", color.name());
            self.color = color;
            self.revision += 1;
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Change the radius, regenerating the footprint only if it differs.
    pub fn set_radius(&mut self, radius: i32) {
        if self.radius != radius {
            self.regenerate_footprint(radius);
            log::info!("Paintbrush radius is now: {}", radius);
        }
    }

    /// Rebuild the footprint for `radius` unconditionally. The brush adopts
    /// the radius too, so footprint, thickness and cursor always agree.
    pub fn regenerate_footprint(&mut self, radius: i32) {
        self.radius = radius;
        self.footprint.regenerate(radius);
        self.revision += 1;
    }

    pub fn footprint(&self) -> &BrushFootprint {
        &self.footprint
    }

    /// Stroke thickness painted by this brush (the disk diameter).
    pub fn thickness(&self) -> f32 {
        (self.radius * 2) as f32
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All canvas pixels covered by the brush placed at `center`.
    pub fn dab(&self, center: Point) -> Vec<Point> {
        self.footprint.instantiate(center)
    }

    /// Cursor sprite: the footprint in brush color, rim pixels in the outline color.
    ///
    /// The sprite is `2r + 1` pixels square with the brush centre in the middle
    /// pixel; everything outside the disk is transparent.
    pub fn cursor_image(&self) -> ColorImage {
        let radius = self.footprint.radius();
        let side = (radius * 2 + 1).max(1) as usize;
        let mut image = ColorImage::new([side, side], Color32::TRANSPARENT);

        let mut paint = |offset: Point, color: Color32| {
            let x = (offset.x + radius) as usize;
            let y = (offset.y + radius) as usize;
            if x < side && y < side {
                image.pixels[y * side + x] = color;
            }
        };

        for offset in self.footprint.offsets() {
            paint(*offset, self.color.color32());
        }
        for offset in self.footprint.edge_offsets() {
            paint(offset, self.color.outline());
        }

        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_brush() {
        let brush = Brush::default();
        assert_eq!(brush.color(), BrushColor::Black);
        assert_eq!(brush.radius(), 5);
        assert_eq!(brush.thickness(), 10.0);
        assert_eq!(brush.footprint().len(), 97);
    }

    #[test]
    fn test_set_radius_regenerates_once() {
        let mut brush = Brush::default();
        let before = brush.revision();

        brush.set_radius(5);
        assert_eq!(brush.revision(), before);

        brush.set_radius(7);
        assert_eq!(brush.revision(), before + 1);
        assert_eq!(brush.footprint().radius(), 7);
        assert_eq!(brush.dab(Point::new(100, 200)).len(), 177);
    }

    #[test]
    fn test_regenerate_footprint_keeps_radius_in_step() {
        let mut brush = Brush::default();
        brush.regenerate_footprint(9);

        assert_eq!(brush.radius(), 9);
        assert_eq!(brush.footprint().radius(), 9);
        assert_eq!(brush.thickness(), 18.0);
        assert_eq!(brush.cursor_image().size, [19, 19]);
    }

    #[test]
    fn test_set_color() {
        let mut brush = Brush::default();
        brush.set_color(BrushColor::Red);
        assert_eq!(brush.color(), BrushColor::Red);
        assert_eq!(brush.color().color32(), Color32::from_rgb(255, 0, 0));
        assert_eq!(brush.revision(), 1);
    }

    #[test]
    fn test_palette_slots() {
        assert_eq!(BrushColor::from_slot(1), Some(BrushColor::Black));
        assert_eq!(BrushColor::from_slot(3), Some(BrushColor::Red));
        assert_eq!(BrushColor::from_slot(8), Some(BrushColor::Cyan));
        assert_eq!(BrushColor::from_slot(0), None);
        assert_eq!(BrushColor::from_slot(9), None);
    }

    #[test]
    fn test_cursor_image_layout() {
        let brush = Brush::new(BrushColor::Black, 5);
        let image = brush.cursor_image();
        assert_eq!(image.size, [11, 11]);

        // Centre is brush color, the rim on the axis is outlined, corners are clear.
        assert_eq!(image.pixels[5 * 11 + 5], Color32::BLACK);
        assert_eq!(image.pixels[5 * 11 + 10], Color32::WHITE);
        assert_eq!(image.pixels[0], Color32::TRANSPARENT);
    }
}
