//! Integer rasterization: line interpolation and filled circles.
//!
//! Neither routine touches floating point, so both are safe to call on the
//! per-pixel path. `circle_fill` is still O(r²) and is meant to be cached
//! (see [`crate::brush::BrushFootprint`]).

use std::collections::BTreeSet;

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by another point used as an offset.
    pub const fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    /// Floor a float position (e.g. an egui pointer position) to a pixel.
    pub fn from_pos(pos: egui::Pos2) -> Self {
        Self::new(pos.x.floor() as i32, pos.y.floor() as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Half a unit in 16.16 fixed point, added so the short axis rounds to nearest.
const HALF: i64 = 0x8000;

/// Every pixel on the segment `from..=to`, in walking order.
///
/// The axis with the larger delta is stepped one pixel at a time while the
/// other accumulates a 16.16 fixed-point increment. Both endpoints are always
/// included; a zero-length segment yields its single point.
///
/// The accumulator is 64-bit, so any endpoints whose deltas fit in `i32` work,
/// not just those within ±32768 of the origin.
pub fn line_interpolate(from: Point, to: Point) -> Vec<Point> {
    let mut short_len = to.y - from.y;
    let mut long_len = to.x - from.x;
    let y_longer = short_len.abs() > long_len.abs();
    if y_longer {
        std::mem::swap(&mut short_len, &mut long_len);
    }

    let increment = if long_len == 0 {
        0
    } else {
        (i64::from(short_len) << 16) / i64::from(long_len)
    };

    let mut pixels = Vec::with_capacity(long_len.unsigned_abs() as usize + 1);

    if y_longer {
        let mut j = HALF + (i64::from(from.x) << 16);
        let end = from.y + long_len;
        if long_len > 0 {
            for y in from.y..=end {
                pixels.push(Point::new((j >> 16) as i32, y));
                j += increment;
            }
        } else {
            for y in (end..=from.y).rev() {
                pixels.push(Point::new((j >> 16) as i32, y));
                j -= increment;
            }
        }
    } else {
        let mut j = HALF + (i64::from(from.y) << 16);
        let end = from.x + long_len;
        if long_len > 0 {
            for x in from.x..=end {
                pixels.push(Point::new(x, (j >> 16) as i32));
                j += increment;
            }
        } else {
            for x in (end..=from.x).rev() {
                pixels.push(Point::new(x, (j >> 16) as i32));
                j -= increment;
            }
        }
    }

    pixels
}

fn insert_octants(set: &mut BTreeSet<Point>, x: i32, y: i32) {
    for (px, py) in [(x, y), (x, -y), (-x, y), (-x, -y), (y, x), (y, -x), (-y, x), (-y, -x)] {
        set.insert(Point::new(px, py));
    }
}

/// Filled disk of `radius` centred on the origin, as unique offsets in
/// ascending `(x, y)` order.
///
/// The rim comes from a midpoint circle walk mirrored into all eight
/// octants; the interior is a dense scan of `j² + k² < r²`.
pub fn circle_fill(radius: i32) -> Vec<Point> {
    let mut disk = BTreeSet::new();

    let mut x = 0;
    let mut y = -radius;
    let mut f_m = 1 - radius;
    let mut dir_east = 3;
    let mut dir_northeast = -(radius << 1) + 5;
    insert_octants(&mut disk, x, y);

    while x < -y {
        if f_m <= 0 {
            f_m += dir_east;
        } else {
            f_m += dir_northeast;
            dir_northeast += 2;
            y += 1;
        }
        dir_east += 2;
        dir_northeast += 2;
        x += 1;
        insert_octants(&mut disk, x, y);
    }

    let radius_sq = radius * radius;
    for j in 0..radius {
        for k in 0..radius {
            if j * j + k * k < radius_sq {
                disk.insert(Point::new(j, k));
                disk.insert(Point::new(j, -k));
                disk.insert(Point::new(-j, k));
                disk.insert(Point::new(-j, -k));
            }
        }
    }

    disk.into_iter().collect()
}
