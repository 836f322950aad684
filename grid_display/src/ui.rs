// ui.rs - Controls and canvas for the simulation viewer

use std::time::Duration;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use conway::PATTERNS;

use crate::viewer::LifeViewer;

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_finished(false);
        let running = self.is_running();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("▶ Start").clicked() {
                    self.start();
                }

                if ui.add_enabled(running, egui::Button::new("⏹ Stop")).clicked() {
                    self.stop();
                }

                ui.separator();

                // Seed dropdown
                ui.label("Seed:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(self.pattern_name())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.selected_pattern, 0, "Random");
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i + 1, pattern.name);
                        }
                    });

                ui.separator();

                ui.label(self.status.as_str());
            });

            ui.separator();

            // Run settings, applied on the next Start
            ui.add_enabled_ui(!running, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Rows:");
                    ui.add(egui::DragValue::new(&mut self.config.rows).clamp_range(1..=200));
                    ui.label("Cols:");
                    ui.add(egui::DragValue::new(&mut self.config.cols).clamp_range(1..=200));
                    ui.label("Generations:");
                    ui.add(
                        egui::DragValue::new(&mut self.config.generations)
                            .clamp_range(0..=1_000_000),
                    );
                    ui.checkbox(&mut self.config.stop_on_cycle, "Stop on cycle");
                });

                ui.horizontal(|ui| {
                    ui.label("Speed:");
                    ui.add(egui::Slider::new(&mut self.speed, 0.5..=90.0).suffix(" gen/sec"));
                    ui.label("Density:");
                    ui.add(egui::Slider::new(&mut self.config.density, 0.0..=1.0));
                });
            });

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            let Some(frame) = self.latest_frame() else {
                ui.label("Press Start to seed a grid and run it.");
                return;
            };
            let grid = &frame.grid;

            ui.label(format!("Generation: {}", frame.generation));

            // Draw the grid, shrinking cells to fit the panel
            let spacing = 0.5;
            let fit = (ui.available_width() + spacing) / grid.cols() as f32 - spacing;
            let box_size = fit.clamp(2.0, 15.0);

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * grid.cols() as f32 - spacing,
                (box_size + spacing) * grid.rows() as f32 - spacing,
            );

            let (_response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            // Fill background
            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for (row, cells) in grid.iter_rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            ui.separator();

            // Statistics
            let total = grid.rows() * grid.cols();
            let live_cells = grid.population();

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Keep polling so a finished run is noticed
        if running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
