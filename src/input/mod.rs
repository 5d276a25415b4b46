use egui::{Context, Key, PointerButton, Rect};

mod bindings;
mod scripted;

pub use bindings::{Action, action_for_key_press, action_for_key_release};
pub use scripted::ScriptedEvents;

use crate::raster::Point;

/// Input the paint session reacts to. Positions are in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved (with or without buttons held)
    PointerMoved(Point),
    PointerPressed { pos: Point, button: PointerButton },
    PointerReleased { pos: Point, button: PointerButton },
    KeyPressed(Key),
    KeyReleased(Key),
    /// The window is being closed
    CloseRequested,
}

/// A per-frame batch of input events.
pub trait EventSource {
    /// Drain the events gathered since the previous call.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Converts egui's raw input into canvas-space [`InputEvent`]s.
#[derive(Debug, Default)]
pub struct EguiEventSource {
    events: Vec<InputEvent>,
}

impl EguiEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's egui events, relative to the canvas placed at `canvas_rect`.
    pub fn capture(&mut self, ctx: &Context, canvas_rect: Rect) {
        let to_canvas = |pos: egui::Pos2| Point::from_pos((pos - canvas_rect.min).to_pos2());

        ctx.input(|input| {
            for event in &input.events {
                match event {
                    egui::Event::PointerMoved(pos) => {
                        self.events.push(InputEvent::PointerMoved(to_canvas(*pos)));
                    }
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed,
                        ..
                    } => {
                        let pos = to_canvas(*pos);
                        self.events.push(if *pressed {
                            InputEvent::PointerPressed { pos, button: *button }
                        } else {
                            InputEvent::PointerReleased { pos, button: *button }
                        });
                    }
                    egui::Event::Key {
                        key,
                        pressed,
                        repeat: false,
                        ..
                    } => {
                        self.events.push(if *pressed {
                            InputEvent::KeyPressed(*key)
                        } else {
                            InputEvent::KeyReleased(*key)
                        });
                    }
                    _ => {}
                }
            }

            if input.viewport().close_requested() {
                self.events.push(InputEvent::CloseRequested);
            }
        });
    }
}

impl EventSource for EguiEventSource {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}
