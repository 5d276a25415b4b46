use egui::PointerButton;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brush::{Brush, BrushColor};
use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::history::HistoryEngine;
use crate::input::{Action, EventSource, InputEvent, action_for_key_press, action_for_key_release};
use crate::raster::Point;
use crate::stroke::Stroke;

/// How undone strokes leave the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Clear and redraw the live strokes oldest first
    #[default]
    Replay,
    /// Paint undone strokes in the background color, leaving the rest as is
    Overpaint,
}

/// Whether the host loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Exit,
}

/// Gates texture uploads to at most one per interval.
///
/// The caller supplies the clock, so there is no hidden global timer.
#[derive(Debug, Clone)]
pub struct FrameBudget {
    interval: f64,
    last: Option<f64>,
}

impl FrameBudget {
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval: interval_secs,
            last: None,
        }
    }

    /// True if more than one interval has passed since the last ready frame.
    pub fn ready(&mut self, now: f64) -> bool {
        match self.last {
            Some(last) if now - last <= self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// One painting session: brush, history and canvas driven by input batches.
///
/// Each tick runs [`PaintSession::update`] (input -> history) and then
/// [`PaintSession::render`] (history -> canvas), in that order.
#[derive(Debug)]
pub struct PaintSession {
    history: HistoryEngine,
    brush: Brush,
    canvas: Canvas,
    render_mode: RenderMode,
    budget: FrameBudget,
    min_radius: i32,
    max_radius: i32,
    radius_step: i32,
    /// Tag put on strokes made here. Always `None` for a local session.
    owner: Option<Uuid>,

    button_held: bool,
    pointer: Option<Point>,
    /// Previous brush sample of the open gesture
    last_sample: Option<Point>,

    /// Live strokes `[0, painted)` are on the canvas
    painted: usize,
    /// Live strokes `[painted, restored_to)` came back through redo
    restored_to: usize,
    /// Canvas must be cleared and replayed
    stale: bool,
}

impl PaintSession {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            history: HistoryEngine::new(),
            brush: Brush::new(config.initial_color, config.initial_radius),
            canvas: Canvas::new(config.canvas_width, config.canvas_height, config.background_color()),
            render_mode: config.render_mode,
            budget: FrameBudget::new(config.frame_interval_secs),
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            radius_step: config.radius_step,
            owner: None,
            button_held: false,
            pointer: None,
            last_sample: None,
            painted: 0,
            restored_to: 0,
            stale: false,
        }
    }

    /// Update pass: drain one batch of input and apply it.
    pub fn update(&mut self, source: &mut dyn EventSource) -> SessionControl {
        let mut control = SessionControl::Continue;
        for event in source.poll_events() {
            if self.handle_event(event) == SessionControl::Exit {
                control = SessionControl::Exit;
            }
        }
        control
    }

    pub fn handle_event(&mut self, event: InputEvent) -> SessionControl {
        match event {
            InputEvent::PointerMoved(pos) => {
                self.pointer = Some(pos);
                if self.button_held {
                    self.sample(pos);
                }
            }
            InputEvent::PointerPressed {
                pos,
                button: PointerButton::Primary,
            } => {
                self.pointer = Some(pos);
                self.button_held = true;
                self.sample(pos);
            }
            InputEvent::PointerReleased {
                button: PointerButton::Primary,
                ..
            } => {
                self.button_held = false;
                self.close_gesture();
            }
            InputEvent::PointerPressed { .. } | InputEvent::PointerReleased { .. } => {}
            InputEvent::KeyPressed(key) => {
                if let Some(action) = action_for_key_press(key) {
                    return self.apply(action);
                }
            }
            InputEvent::KeyReleased(key) => {
                if let Some(action) = action_for_key_release(key) {
                    return self.apply(action);
                }
            }
            InputEvent::CloseRequested => {
                log::info!("Window closed");
                return SessionControl::Exit;
            }
        }
        SessionControl::Continue
    }

    pub fn apply(&mut self, action: Action) -> SessionControl {
        match action {
            Action::SelectColor(color) => self.set_brush_color(color),
            Action::ShrinkBrush => {
                if self.brush.radius() > self.min_radius {
                    let radius = (self.brush.radius() - self.radius_step).max(self.min_radius);
                    self.set_brush_radius(radius);
                }
            }
            Action::GrowBrush => {
                if self.brush.radius() < self.max_radius {
                    let radius = (self.brush.radius() + self.radius_step).min(self.max_radius);
                    self.set_brush_radius(radius);
                }
            }
            Action::Undo => {
                self.undo();
            }
            Action::Redo => {
                self.redo();
            }
            Action::Quit => {
                log::info!("Quit requested");
                return SessionControl::Exit;
            }
        }
        SessionControl::Continue
    }

    pub fn set_brush_color(&mut self, color: BrushColor) {
        self.brush.set_color(color);
    }

    /// Set the radius as given; range policy is applied by [`Self::apply`].
    pub fn set_brush_radius(&mut self, radius: i32) {
        self.brush.set_radius(radius);
    }

    /// Add one brush sample to the open gesture, starting one if needed.
    fn sample(&mut self, pos: Point) {
        if !self.canvas.contains(pos) || self.last_sample == Some(pos) {
            return;
        }
        self.history.begin_gesture();

        let thickness = self.brush.thickness();
        let color = self.brush.color().color32();
        let stroke = match self.last_sample {
            Some(prev) => Stroke::new(prev, pos, thickness, color, self.owner),
            None => Stroke::dot(pos, thickness, color, self.owner),
        };
        self.history.enqueue(stroke);
        self.last_sample = Some(pos);
    }

    fn close_gesture(&mut self) {
        self.last_sample = None;
        if self.history.is_drawing() {
            self.history.end_gesture();
        }
    }

    pub fn undo(&mut self) -> usize {
        self.close_gesture();
        let before = self.history.live().len();
        let count = self.history.undo();
        if count == 0 {
            return 0;
        }
        let after = before - count;

        match self.render_mode {
            RenderMode::Replay => {
                if self.painted > after {
                    self.stale = true;
                }
            }
            RenderMode::Overpaint => {
                // Newest first; strokes at index >= painted never reached the canvas.
                for (k, stroke) in self.history.recently_undone(count).iter().enumerate() {
                    if before - 1 - k < self.painted {
                        stroke.render_erased(&mut self.canvas);
                    }
                }
            }
        }
        self.painted = self.painted.min(after);
        self.restored_to = self.restored_to.min(after);
        count
    }

    pub fn redo(&mut self) -> usize {
        self.close_gesture();
        let count = self.history.redo();
        if count > 0 {
            self.restored_to = self.history.live().len();
        }
        count
    }

    /// Render pass: commit queued strokes and bring the canvas up to date.
    ///
    /// Returns true when the frame budget allows presenting the canvas.
    pub fn render(&mut self, now: f64) -> bool {
        if self.history.pending_len() > 0 {
            self.history.commit();
        }

        if self.stale {
            self.canvas.clear();
            self.painted = 0;
            self.restored_to = 0;
            self.stale = false;
        }

        let live = self.history.live();
        for (index, stroke) in live.iter().enumerate().skip(self.painted) {
            if index < self.restored_to {
                stroke.render_redo(&mut self.canvas);
            } else {
                stroke.render_ink(&mut self.canvas);
            }
        }
        self.painted = live.len();
        self.restored_to = 0;

        self.budget.ready(now)
    }

    pub fn history(&self) -> &HistoryEngine {
        &self.history
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Last known pointer position in canvas pixels
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn is_button_held(&self) -> bool {
        self.button_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget_gates_by_interval() {
        let mut budget = FrameBudget::new(0.0111);
        assert!(budget.ready(0.0));
        assert!(!budget.ready(0.005));
        assert!(!budget.ready(0.0111));
        assert!(budget.ready(0.02));
        assert!(!budget.ready(0.025));
    }

    #[test]
    fn test_zero_interval_is_always_ready_after_time_moves() {
        let mut budget = FrameBudget::new(0.0);
        assert!(budget.ready(1.0));
        assert!(budget.ready(1.5));
    }
}
