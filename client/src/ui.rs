use std::path::Path;
use std::time::Duration;

use eframe::egui;
use snake_common::games::snake::{Color, FieldSize, InputEvent, Key, Point, Sprite};
use tokio::sync::mpsc;

use crate::bridge::{DrawCommand, Frame};
use crate::config::DisplayConfig;
use crate::sprites::{Sprites, fallback_color};
use crate::state::{MusicState, SharedState};

pub const STATUS_BAR_HEIGHT: f32 = 28.0;
const TEXT_SIZE: f32 = 30.0;

pub struct SnakeApp {
    shared_state: SharedState,
    input_tx: mpsc::UnboundedSender<InputEvent>,
    sprites: Sprites,
    display: DisplayConfig,
    field_size: FieldSize,
    quit_sent: bool,
}

impl SnakeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        shared_state: SharedState,
        input_tx: mpsc::UnboundedSender<InputEvent>,
        display: DisplayConfig,
        field_size: FieldSize,
    ) -> Self {
        shared_state.set_context(cc.egui_ctx.clone());
        let sprites = Sprites::load(&cc.egui_ctx, Path::new(&display.resources_dir));
        Self {
            shared_state,
            input_tx,
            sprites,
            display,
            field_size,
            quit_sent: false,
        }
    }

    pub fn window_size(display: &DisplayConfig, field_size: &FieldSize) -> [f32; 2] {
        let cell = display.cell_size_px as f32;
        [
            field_size.width as f32 * cell,
            field_size.height as f32 * cell + STATUS_BAR_HEIGHT,
        ]
    }

    fn send(&mut self, event: InputEvent) {
        if self.quit_sent {
            return;
        }
        if event == InputEvent::Quit {
            self.quit_sent = true;
        }
        // The game thread may already be gone; closing is handled below.
        let _ = self.input_tx.send(event);
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let keys = ctx.input(|i| {
            [
                (egui::Key::ArrowUp, Key::Up),
                (egui::Key::ArrowDown, Key::Down),
                (egui::Key::ArrowLeft, Key::Left),
                (egui::Key::ArrowRight, Key::Right),
                (egui::Key::Escape, Key::Escape),
                (egui::Key::Enter, Key::Return),
            ]
            .into_iter()
            .filter(|(egui_key, _)| i.key_pressed(*egui_key))
            .map(|(_, key)| key)
            .collect::<Vec<_>>()
        });

        for key in keys {
            self.send(InputEvent::KeyDown(key));
        }
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let music = match self.shared_state.music_state() {
                MusicState::Playing => "♪ playing",
                MusicState::Paused => "♪ paused",
                MusicState::Stopped => "♪ off",
            };
            ui.label(music);
            if self.display.show_event_log
                && let Some(last) = self.shared_state.event_log().last()
            {
                ui.separator();
                ui.label(last.as_str());
            }
        });
    }

    fn paint_frame(&self, ui: &mut egui::Ui, frame: &Frame) {
        let cell = self.display.cell_size_px as f32;
        let canvas_size = egui::vec2(
            self.field_size.width as f32 * cell,
            self.field_size.height as f32 * cell,
        );
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::hover());
        let canvas = response.rect;

        for command in &frame.commands {
            match command {
                DrawCommand::Clear(color) => {
                    painter.rect_filled(canvas, 0.0, to_color32(*color));
                }
                DrawCommand::Sprite(Sprite::Background, _) => {
                    if let Some(texture) = self.sprites.texture(Sprite::Background) {
                        painter.image(texture.id(), canvas, full_uv(), egui::Color32::WHITE);
                    }
                }
                DrawCommand::Sprite(sprite, point) => {
                    let rect = cell_rect(canvas.min, *point, cell);
                    if !canvas.intersects(rect) {
                        continue;
                    }
                    match self.sprites.texture(*sprite) {
                        Some(texture) => {
                            painter.image(texture.id(), rect, full_uv(), egui::Color32::WHITE);
                        }
                        None => {
                            if let Some(color) = fallback_color(*sprite) {
                                painter.rect_filled(rect.shrink(1.0), 4.0, color);
                            }
                        }
                    }
                }
                DrawCommand::Text(text, point) => {
                    painter.text(
                        cell_rect(canvas.min, *point, cell).min,
                        egui::Align2::LEFT_TOP,
                        text,
                        egui::FontId::proportional(TEXT_SIZE),
                        to_color32(Color::TEXT),
                    );
                }
            }
        }
    }
}

fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

fn cell_rect(origin: egui::Pos2, point: Point, cell: f32) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + point.x as f32 * cell,
            origin.y + point.y as f32 * cell,
        ),
        egui::vec2(cell, cell),
    )
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shared_state.should_close() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.send(InputEvent::Quit);
        }

        self.handle_input(ctx);

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| self.render_status_bar(ui));

        let frame = self.shared_state.frame();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.paint_frame(ui, &frame));

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
