#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod raster;
pub mod session;
pub mod stroke;

pub use app::PaintApp;
pub use brush::{Brush, BrushColor, BrushFootprint};
pub use canvas::{Canvas, Surface};
pub use config::PaintConfig;
pub use error::{PaintError, PaintResult};
pub use history::HistoryEngine;
pub use input::{Action, EguiEventSource, EventSource, InputEvent, ScriptedEvents};
pub use raster::{Point, circle_fill, line_interpolate};
pub use session::{FrameBudget, PaintSession, RenderMode, SessionControl};
pub use stroke::Stroke;
