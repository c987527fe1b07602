//! Native window display for rendered frames.
//!
//! `show_frame` opens an `eframe` window, uploads the intensity buffer as a
//! texture, and blocks the calling thread until a key is pressed or the
//! window is closed. No timeout; the process suspends here.
use eframe::{
    NativeOptions,
    egui::{self, ViewportBuilder},
};
use tracing::info;

use crate::core::processing::pipeline::GrayFrame;
use crate::error::{Error, Result};

/// Largest initial window extent; frames beyond this are shown scaled down.
const MAX_WINDOW_SIDE: f32 = 1440.0;
const MIN_WINDOW_SIDE: f32 = 128.0;

/// Initial window size for a frame, preserving aspect ratio.
fn window_size(width: usize, height: usize) -> [f32; 2] {
    let w = width as f32;
    let h = height as f32;

    let shrink = (MAX_WINDOW_SIDE / w.max(h)).min(1.0);
    let grow = (MIN_WINDOW_SIDE / w.max(h)).max(1.0);
    let scale = shrink * grow;

    [(w * scale).round(), (h * scale).round()]
}

struct ViewerApp {
    frame: GrayFrame,
    texture: Option<egui::TextureHandle>,
}

impl ViewerApp {
    fn new(frame: GrayFrame) -> Self {
        Self {
            frame,
            texture: None,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.texture.get_or_insert_with(|| {
            let image = egui::ColorImage::from_gray(
                [self.frame.width, self.frame.height],
                &self.frame.data,
            );
            ctx.load_texture("frame", image, egui::TextureOptions::NEAREST)
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new(&*texture).shrink_to_fit());
            });
        });

        let key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// Show `frame` in a window titled `title` and wait for a keypress.
pub fn show_frame(title: &str, frame: GrayFrame) -> Result<()> {
    let size = window_size(frame.width, frame.height);
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size),
        ..Default::default()
    };

    info!(
        "Opening window \"{}\" for a {}x{} frame, press any key to close",
        title, frame.width, frame.height
    );

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(frame)))),
    )
    .map_err(|e| Error::Display(e.to_string()))
}
