use egui::Color32;
use mini_paint::{Brush, BrushColor, BrushFootprint, Canvas, Point, Stroke, line_interpolate};

fn canvas() -> Canvas {
    Canvas::new(320, 240, Color32::WHITE)
}

#[test]
fn test_dab_paints_exactly_the_footprint() {
    let mut canvas = canvas();
    let brush = Brush::default();
    let center = Point::new(100, 200);

    assert_eq!(canvas.stamp(&brush.dab(center), Color32::BLACK), 97);
    assert_eq!(canvas.count_pixels(Color32::BLACK), 97);

    assert_eq!(canvas.get_pixel(Point::new(105, 200)), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(Point::new(100, 195)), Some(Color32::BLACK));
    for outside in [(106, 200), (94, 200), (100, 206), (100, 194)] {
        assert_eq!(canvas.get_pixel(outside.into()), Some(Color32::WHITE), "{outside:?}");
    }
}

#[test]
fn test_larger_brush_in_red() {
    let mut canvas = canvas();
    let mut brush = Brush::default();
    brush.set_color(BrushColor::Red);
    brush.set_radius(7);

    let painted = canvas.stamp(&brush.dab(Point::new(50, 50)), brush.color().color32());
    assert_eq!(painted, 177);
    assert_eq!(canvas.count_pixels(Color32::from_rgb(255, 0, 0)), 177);
}

#[test]
fn test_dab_near_the_edge_is_clipped() {
    let mut canvas = canvas();
    let brush = Brush::default();
    let painted = canvas.stamp(&brush.dab(Point::new(0, 0)), Color32::BLACK);
    assert!(painted > 0 && painted < 97);
    assert_eq!(canvas.count_pixels(Color32::BLACK), painted);
}

#[test]
fn test_sweep_leaves_no_gaps() {
    let mut canvas = canvas();
    let footprint = BrushFootprint::new(5);
    let from = Point::new(100, 200);
    let to = Point::new(120, 220);

    canvas.stamp(&footprint.instantiate(from), Color32::BLACK);
    canvas.sweep(&footprint, from, to, Color32::BLACK);

    for a in footprint.instantiate(from) {
        for b in footprint.instantiate(to) {
            for p in line_interpolate(a, b) {
                assert_eq!(canvas.get_pixel(p), Some(Color32::BLACK), "gap at {p:?}");
            }
        }
    }
}

#[test]
fn test_stroke_ink_then_erase() {
    let mut canvas = canvas();
    let stroke = Stroke::new(Point::new(100, 100), Point::new(140, 100), 10.0, Color32::BLACK, None);

    stroke.render_ink(&mut canvas);
    for inside in [(100, 100), (120, 100), (140, 100), (120, 96), (120, 104)] {
        assert_eq!(canvas.get_pixel(inside.into()), Some(Color32::BLACK), "{inside:?}");
    }
    for outside in [(120, 110), (120, 90), (94, 100), (146, 100)] {
        assert_eq!(canvas.get_pixel(outside.into()), Some(Color32::WHITE), "{outside:?}");
    }

    stroke.render_erased(&mut canvas);
    assert_eq!(canvas.count_pixels(Color32::WHITE), 320 * 240);
}

#[test]
fn test_stroke_off_canvas_is_clipped() {
    let mut canvas = canvas();
    let stroke = Stroke::new(Point::new(-50, -50), Point::new(10, 10), 10.0, Color32::BLACK, None);
    stroke.render_ink(&mut canvas);

    assert_eq!(canvas.get_pixel(Point::new(5, 5)), Some(Color32::BLACK));
    assert_eq!(canvas.get_pixel(Point::new(200, 200)), Some(Color32::WHITE));
}
