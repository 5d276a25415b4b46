use egui::{Color32, Rect, TextureHandle, TextureId, TextureOptions, pos2, vec2};

use crate::brush::Brush;
use crate::config::PaintConfig;
use crate::input::{Action, EguiEventSource};
use crate::session::{PaintSession, SessionControl};

pub const USAGE: &str = "How to use:\n\
    \tPress numbers [1, 2, 3, 4, 5, 6, 7, 8] to change paintbrush color\n\
    \tPress Z to undo\n\
    \tPress Y to redo\n\
    \tPress , to decrease paintbrush size\n\
    \tPress . to increase paintbrush size\n\
    \tPress Esc to quit";

/// Height reserved for the status bar under the canvas
pub const STATUS_BAR_HEIGHT: f32 = 28.0;

const FULL_UV: Rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

/// Brush cursor texture, rebuilt only when the brush revision moves.
#[derive(Default)]
struct CursorSprite {
    handle: Option<TextureHandle>,
    revision: Option<u64>,
}

impl CursorSprite {
    fn texture(&mut self, ctx: &egui::Context, brush: &Brush) -> TextureId {
        let handle = match self.handle.take() {
            Some(mut handle) => {
                if self.revision != Some(brush.revision()) {
                    handle.set(brush.cursor_image(), TextureOptions::NEAREST);
                }
                handle
            }
            None => ctx.load_texture("brush_cursor", brush.cursor_image(), TextureOptions::NEAREST),
        };
        self.revision = Some(brush.revision());
        let id = handle.id();
        self.handle = Some(handle);
        id
    }
}

/// The eframe host: feeds egui input to the session and shows its canvas.
pub struct PaintApp {
    session: PaintSession,
    events: EguiEventSource,
    canvas_texture: Option<TextureId>,
    cursor: CursorSprite,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> Self {
        let mut session = PaintSession::new(config);
        let canvas_texture = Some(session.canvas_mut().present(&cc.egui_ctx));

        Self {
            session,
            events: EguiEventSource::new(),
            canvas_texture,
            cursor: CursorSprite::default(),
        }
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let brush = self.session.brush();
            ui.label(format!("Color: {}", brush.color().name()));
            ui.label(format!("Radius: {}", brush.radius()));
            ui.separator();

            let history = self.session.history();
            let (can_undo, can_redo) = (history.can_undo(), history.can_redo());
            ui.label(format!("Strokes: {}", history.live().len()));
            ui.label(format!("Undo stack size: {}", history.undo_counts().len()));
            ui.label(format!("Redo stack size: {}", history.redo_counts().len()));
            ui.separator();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                self.session.apply(Action::Undo);
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                self.session.apply(Action::Redo);
            }
        });
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| self.status_bar(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let canvas = self.session.canvas();
                let size = vec2(canvas.width() as f32, canvas.height() as f32);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
                let rect = response.rect;

                // Update pass
                self.events.capture(ctx, rect);
                if self.session.update(&mut self.events) == SessionControl::Exit {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                // Render pass
                let now = ctx.input(|i| i.time);
                if self.session.render(now) || self.canvas_texture.is_none() {
                    self.canvas_texture = Some(self.session.canvas_mut().present(ctx));
                }
                if let Some(texture) = self.canvas_texture {
                    painter.image(texture, rect, FULL_UV, Color32::WHITE);
                }

                if response.hovered() {
                    ctx.set_cursor_icon(egui::CursorIcon::None);
                    if let Some(pointer) = self.session.pointer() {
                        let brush = self.session.brush();
                        let texture = self.cursor.texture(ctx, brush);
                        let side = (brush.radius() * 2 + 1) as f32;
                        let center = rect.min + vec2(pointer.x as f32 + 0.5, pointer.y as f32 + 0.5);
                        painter.image(
                            texture,
                            Rect::from_center_size(center, vec2(side, side)),
                            FULL_UV,
                            Color32::WHITE,
                        );
                    }
                }
            });

        ctx.request_repaint();
    }
}
