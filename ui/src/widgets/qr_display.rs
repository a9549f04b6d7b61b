use egui::{Color32, Frame, Margin, Response, RichText, TextureOptions, Ui};
use log::{error, info};
use quickqr_business::{
    GenerateCompute, GenerationPhase, GeneratorState, ResetGenerationCommand, render_qr_image,
};
use quickqr_states::StateCtx;

use crate::utils::colors::COLOR_RED;

/// Pixel size requested for the rasterized QR code.
const QR_IMAGE_SIZE: usize = 220;

/// QR image card plus the caption echoing the submitted text.
///
/// The texture is rendered once per submission and cached in
/// [`GeneratorState`]; a renderer failure is logged, shown inline, and
/// resets the lifecycle so the user is never stuck on an empty "result".
pub fn qr_display(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let phase = state_ctx
        .cached::<GenerateCompute>()
        .map(|c| c.phase().clone())
        .unwrap_or_default();

    let response = ui
        .vertical_centered(|ui| {
            if let GenerationPhase::Displayed { text } = &phase {
                if state_ctx.state::<GeneratorState>().qr_texture.is_none() {
                    match render_qr_image(text, QR_IMAGE_SIZE) {
                        Ok(image) => {
                            info!("QR code generated successfully for: {text}");
                            let texture = ui.ctx().load_texture(
                                "qr_code_display",
                                image,
                                TextureOptions::NEAREST,
                            );
                            state_ctx.state_mut::<GeneratorState>().qr_texture = Some(texture);
                        }
                        Err(err) => {
                            error!("QR rendering failed for {text:?}: {err}");
                            state_ctx.state_mut::<GeneratorState>().render_error =
                                Some(err.to_string());
                            state_ctx.dispatch(ResetGenerationCommand);
                            // The Idle reset sits in the channel until the
                            // next frame; schedule one so it does not wait
                            // for further input.
                            ui.ctx().request_repaint();
                        }
                    }
                }

                let state = state_ctx.state::<GeneratorState>();
                if let Some(texture) = &state.qr_texture {
                    Frame::NONE
                        .fill(Color32::WHITE)
                        .inner_margin(Margin::same(8))
                        .corner_radius(4.0)
                        .show(ui, |ui| {
                            ui.image(texture);
                        });
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("QR Code for: {text}")).weak());
                }
            }

            if let Some(error) = &state_ctx.state::<GeneratorState>().render_error {
                ui.colored_label(COLOR_RED, format!("Error: {error}"));
            }
        })
        .response;

    response
}
