use std::f32::consts::PI;
use std::fmt;

use egui::{Color32, Pos2};
use uuid::Uuid;

use crate::canvas::Surface;
use crate::raster::Point;

/// Vertices in one semicircular cap.
const CAP_VERTICES: usize = 15;
/// Total vertices of the capsule outline (two caps).
pub const CAPSULE_VERTICES: usize = CAP_VERTICES * 2;

/// One thick segment of a brush path, drawn as a capsule with round caps so
/// consecutive segments of a gesture join without gaps.
///
/// Only the end point may change, and only while the stroke is still the
/// in-progress tail of a gesture. Once committed the geometry is frozen.
#[derive(Clone, PartialEq)]
pub struct Stroke {
    start: Point,
    end: Point,
    thickness: f32,
    color: Color32,
    /// Opaque tag for whoever produced the stroke. Local strokes carry `None`.
    owner: Option<Uuid>,
    vertices: Vec<Pos2>,
}

impl fmt::Debug for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stroke")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("thickness", &self.thickness)
            .field("color", &self.color)
            .field("owner", &self.owner)
            .finish()
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) to ({},{})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

impl Stroke {
    pub fn new(start: Point, end: Point, thickness: f32, color: Color32, owner: Option<Uuid>) -> Self {
        Self {
            start,
            end,
            thickness,
            color,
            owner,
            vertices: capsule(start, end, thickness),
        }
    }

    /// A zero-length stroke: a single round dab at `at`.
    pub fn dot(at: Point, thickness: f32, color: Color32, owner: Option<Uuid>) -> Self {
        Self::new(at, at, thickness, color, owner)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn owner(&self) -> Option<Uuid> {
        self.owner
    }

    /// Capsule outline in canvas coordinates, [`CAPSULE_VERTICES`] long.
    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    pub fn set_endpoint(&mut self, end: Point) {
        self.end = end;
        self.vertices = capsule(self.start, self.end, self.thickness);
    }

    pub fn render_ink(&self, surface: &mut dyn Surface) {
        surface.fill_convex_polygon(&self.vertices, self.color);
    }

    /// Paint over the stroke in the surface background color.
    pub fn render_erased(&self, surface: &mut dyn Surface) {
        let background = surface.background();
        surface.fill_convex_polygon(&self.vertices, background);
    }

    pub fn render_redo(&self, surface: &mut dyn Surface) {
        self.render_ink(surface);
    }
}

/// Sweep a half-width arc of π around each endpoint, perpendicular to the
/// segment direction. Points are centred on pixel centres.
fn capsule(start: Point, end: Point, thickness: f32) -> Vec<Pos2> {
    let half = thickness / 2.0;
    let a = Pos2::new(start.x as f32 + 0.5, start.y as f32 + 0.5);
    let b = Pos2::new(end.x as f32 + 0.5, end.y as f32 + 0.5);
    let heading = (b.y - a.y).atan2(b.x - a.x);

    let mut vertices = Vec::with_capacity(CAPSULE_VERTICES);
    for (center, flip) in [(b, 1.0), (a, -1.0)] {
        for index in 0..CAP_VERTICES {
            let angle = index as f32 * PI / (CAP_VERTICES - 1) as f32 - PI / 2.0 + heading;
            vertices.push(Pos2::new(
                center.x + angle.cos() * half * flip,
                center.y + angle.sin() * half * flip,
            ));
        }
    }
    vertices
}
