use client_core::{config::ClientSettings, RegionView, ResultIcon, StyleClass};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        orchestration::{collect_form, dispatch_backend_command},
    },
    ui::form::{default_fields, FormField},
};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xd3, 0x2f, 0x2f);

fn icon_color(icon: ResultIcon) -> egui::Color32 {
    let [r, g, b] = icon.rgb();
    egui::Color32::from_rgb(r, g, b)
}

fn style_color(class: StyleClass) -> egui::Color32 {
    match class {
        StyleClass::Ckd => icon_color(ResultIcon::WarningTriangle),
        StyleClass::NotCkd => icon_color(ResultIcon::Checkmark),
    }
}

pub struct PredictorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    fields: Vec<FormField>,
    regions: RegionView,
    status: String,
}

impl PredictorApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        settings: &ClientSettings,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            fields: default_fields(),
            regions: RegionView::default(),
            status: format!("Scoring server: {}", settings.server_url),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            event.apply(&mut self.regions, &mut self.status);
        }
    }

    fn submit(&mut self) {
        let form = collect_form(&self.fields);
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Submit { form },
            &mut self.status,
        );
    }

    /// Returns true when the form was submitted this frame.
    fn show_form(&mut self, ui: &mut egui::Ui) -> bool {
        let mut submitted = false;
        egui::Grid::new("prediction-form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for field in &mut self.fields {
                    ui.label(egui::RichText::new(field.label).strong());
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut field.value)
                            .id_salt(field.name)
                            .hint_text(field.hint)
                            .desired_width(180.0),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submitted = true;
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        if ui
            .add_sized([ui.available_width(), 34.0], egui::Button::new("Predict"))
            .clicked()
        {
            submitted = true;
        }
        submitted
    }

    fn show_result(&self, ui: &mut egui::Ui) {
        if self.regions.result_hidden {
            return;
        }
        let text_color = self
            .regions
            .style_class
            .map(style_color)
            .unwrap_or_else(|| ui.visuals().text_color());

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if let Some(icon) = self.regions.icon {
                        ui.label(
                            egui::RichText::new(icon.glyph())
                                .size(22.0)
                                .color(icon_color(icon)),
                        );
                    }
                    ui.label(
                        egui::RichText::new(&self.regions.prediction_text)
                            .strong()
                            .color(text_color),
                    );
                });
                ui.label(&self.regions.probability_text);
            });
    }

    fn show_error(&self, ui: &mut egui::Ui) {
        if self.regions.error_hidden {
            return;
        }
        ui.label(egui::RichText::new(&self.regions.error_text).color(ERROR_COLOR));
    }
}

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut submitted = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Kidney Disease Predictor");
            ui.add_space(8.0);
            submitted = self.show_form(ui);
            ui.add_space(12.0);
            self.show_result(ui);
            self.show_error(ui);
            if !self.status.is_empty() {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(&self.status).weak().small());
            }
        });

        if submitted {
            self.submit();
        }

        // Worker events arrive without a repaint signal.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
