// src/display/gui.rs
//! Histogram window (egui)

use super::{Histogram, HistogramRenderer, X_LABEL, Y_LABEL};
use crate::error::{GpsError, Result};
use eframe::egui;

/// Opens a native window and blocks until the user closes it
pub struct GuiRenderer {
    size: [f32; 2],
}

impl GuiRenderer {
    pub fn new() -> Self {
        Self {
            size: [800.0, 600.0],
        }
    }
}

impl Default for GuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistogramRenderer for GuiRenderer {
    fn render(&mut self, histogram: &Histogram, title: &str) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.size)
                .with_title(title),
            ..Default::default()
        };

        let app = HistogramApp {
            histogram: histogram.clone(),
            title: title.to_string(),
        };

        eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(app))))
            .map_err(|e| GpsError::Gui(e.to_string()))
    }
}

struct HistogramApp {
    histogram: Histogram,
    title: String,
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(&self.title));
            ui.separator();
            draw_histogram(ui, &self.histogram);
        });
    }
}

fn draw_histogram(ui: &mut egui::Ui, histogram: &Histogram) {
    let size = ui.available_size();
    let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let margin = egui::vec2(60.0, 40.0);
    let plot = egui::Rect::from_min_max(rect.min + margin, rect.max - margin);
    let axis = egui::Stroke::new(1.0, egui::Color32::GRAY);

    // Axes
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    let max = histogram.max_count().max(1) as f32;
    let bar_width = plot.width() / histogram.bins() as f32;
    for (i, &count) in histogram.counts.iter().enumerate() {
        let height = plot.height() * count as f32 / max;
        let x = plot.left() + bar_width * i as f32;
        let bar = egui::Rect::from_min_max(
            egui::pos2(x, plot.bottom() - height),
            egui::pos2(x + bar_width, plot.bottom()),
        );
        painter.rect_filled(bar, 0.0, egui::Color32::from_rgb(0, 150, 255));
        painter.rect_stroke(bar, 0.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
    }

    let font = egui::FontId::proportional(12.0);
    let text_color = egui::Color32::LIGHT_GRAY;
    let first = histogram.edges.first().copied().unwrap_or(0.0);
    let last = histogram.edges.last().copied().unwrap_or(0.0);

    painter.text(
        plot.left_bottom() + egui::vec2(0.0, 4.0),
        egui::Align2::CENTER_TOP,
        format!("{:.2}", first),
        font.clone(),
        text_color,
    );
    painter.text(
        plot.right_bottom() + egui::vec2(0.0, 4.0),
        egui::Align2::CENTER_TOP,
        format!("{:.2}", last),
        font.clone(),
        text_color,
    );
    painter.text(
        plot.left_top() - egui::vec2(6.0, 0.0),
        egui::Align2::RIGHT_CENTER,
        format!("{}", histogram.max_count()),
        font.clone(),
        text_color,
    );
    painter.text(
        egui::pos2(plot.center().x, plot.bottom() + 20.0),
        egui::Align2::CENTER_TOP,
        X_LABEL,
        font.clone(),
        text_color,
    );
    painter.text(
        egui::pos2(rect.left() + 4.0, plot.center().y),
        egui::Align2::LEFT_CENTER,
        Y_LABEL,
        font,
        text_color,
    );
}
