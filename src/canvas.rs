use egui::{Color32, ColorImage, Context, Pos2, TextureHandle, TextureId, TextureOptions};

use crate::brush::BrushFootprint;
use crate::raster::{Point, line_interpolate};

/// Anything strokes can be drawn onto.
pub trait Surface {
    /// Color an erased stroke is painted with.
    fn background(&self) -> Color32;

    fn fill_convex_polygon(&mut self, vertices: &[Pos2], color: Color32);
}

/// Fixed-size CPU pixel buffer, uploaded to the GPU on `present`.
///
/// Coordinates outside the canvas are ignored rather than reported.
pub struct Canvas {
    image: ColorImage,
    background: Color32,
    texture: Option<TextureHandle>,
    dirty: bool,
}

// Custom Debug implementation so the pixel buffer isn't dumped
impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("size", &self.image.size)
            .field("background", &self.background)
            .field("uploaded", &self.texture.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        Self {
            image: ColorImage::new([width, height], background),
            background,
            texture: None,
            dirty: true,
        }
    }

    pub fn width(&self) -> usize {
        self.image.size[0]
    }

    pub fn height(&self) -> usize {
        self.image.size[1]
    }

    pub fn image(&self) -> &ColorImage {
        &self.image
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    fn index(&self, point: Point) -> Option<usize> {
        self.contains(point)
            .then(|| point.y as usize * self.width() + point.x as usize)
    }

    pub fn get_pixel(&self, point: Point) -> Option<Color32> {
        self.index(point).map(|i| self.image.pixels[i])
    }

    /// Returns true if the pixel existed and changed color.
    pub fn set_pixel(&mut self, point: Point, color: Color32) -> bool {
        let Some(i) = self.index(point) else {
            return false;
        };
        if self.image.pixels[i] == color {
            return false;
        }
        self.image.pixels[i] = color;
        self.dirty = true;
        true
    }

    /// Paint every point, returning how many pixels changed.
    pub fn stamp(&mut self, points: &[Point], color: Color32) -> usize {
        points.iter().filter(|p| self.set_pixel(**p, color)).count()
    }

    /// Drag a footprint from `from` to `to`: each offset is interpolated from
    /// its place around `from` to the matching place around `to`.
    pub fn sweep(&mut self, footprint: &BrushFootprint, from: Point, to: Point, color: Color32) -> usize {
        footprint
            .offsets()
            .iter()
            .map(|offset| {
                let line = line_interpolate(from.offset(*offset), to.offset(*offset));
                self.stamp(&line, color)
            })
            .sum()
    }

    pub fn clear(&mut self) {
        let background = self.background;
        self.image.pixels.fill(background);
        self.dirty = true;
    }

    pub fn count_pixels(&self, color: Color32) -> usize {
        self.image.pixels.iter().filter(|p| **p == color).count()
    }

    /// Upload the pixel buffer if it changed since the last upload.
    pub fn present(&mut self, ctx: &Context) -> TextureId {
        let handle = match self.texture.take() {
            Some(mut handle) => {
                if self.dirty {
                    handle.set(self.image.clone(), TextureOptions::NEAREST);
                }
                handle
            }
            None => ctx.load_texture("canvas", self.image.clone(), TextureOptions::NEAREST),
        };
        self.dirty = false;
        let id = handle.id();
        self.texture = Some(handle);
        id
    }
}

impl Surface for Canvas {
    fn background(&self) -> Color32 {
        self.background
    }

    /// Scanline fill sampling pixel centres.
    fn fill_convex_polygon(&mut self, vertices: &[Pos2], color: Color32) {
        if vertices.len() < 3 {
            return;
        }

        let (min_y, max_y) = vertices
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));
        let first_row = (min_y - 0.5).ceil().max(0.0) as i32;
        let last_row = ((max_y - 0.5).floor() as i32).min(self.height() as i32 - 1);

        for row in first_row..=last_row {
            let sample_y = row as f32 + 0.5;
            let mut span: Option<(f32, f32)> = None;

            for (i, a) in vertices.iter().enumerate() {
                let b = vertices[(i + 1) % vertices.len()];
                let crosses = (a.y <= sample_y && sample_y < b.y) || (b.y <= sample_y && sample_y < a.y);
                if !crosses {
                    continue;
                }
                let x = a.x + (sample_y - a.y) * (b.x - a.x) / (b.y - a.y);
                span = Some(match span {
                    Some((lo, hi)) => (lo.min(x), hi.max(x)),
                    None => (x, x),
                });
            }

            let Some((lo, hi)) = span else {
                continue;
            };
            let first_col = (lo - 0.5).ceil().max(0.0) as i32;
            let last_col = ((hi - 0.5).floor() as i32).min(self.width() as i32 - 1);
            for col in first_col..=last_col {
                self.set_pixel(Point::new(col, row), color);
            }
        }
    }
}
