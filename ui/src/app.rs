use chrono::Utc;
use quickqr_states::Time;

use quickqr_business::GenerateCompute;

use crate::{state::State, widgets};

pub struct QuickqrApp {
    pub state: State,
}

impl QuickqrApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for QuickqrApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        self.state.ctx.update::<Time>(|t| *t.as_mut() = Utc::now());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                widgets::policy_toggle(&mut self.state.ctx, ui);
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading("QR Code Generator");
                ui.label("Create QR codes instantly");
            });
            ui.add_space(12.0);

            widgets::url_input(&mut self.state.ctx, ui);
            ui.add_space(8.0);
            widgets::generate_button(&mut self.state.ctx, ui);
            ui.add_space(12.0);
            widgets::qr_display(&mut self.state.ctx, ui);

            powered_by_egui_and_eframe(ui);
        });

        // Keep frames coming while a delay task is pending, so its
        // completion renders without further input events.
        if self
            .state
            .ctx
            .cached::<GenerateCompute>()
            .is_some_and(|c| c.is_generating())
        {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        // Run background jobs
        self.state.ctx.run_computed();
    }
}

fn powered_by_egui_and_eframe(ui: &mut egui::Ui) {
    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.label("Powered by ");
            ui.hyperlink_to("egui", "https://github.com/emilk/egui");
            ui.label(" and ");
            ui.hyperlink_to(
                "eframe",
                "https://github.com/emilk/egui/tree/master/crates/eframe",
            );
            ui.label(".");
        });
    });
}
