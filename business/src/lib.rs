//! Domain logic for the QuickQR app.
//!
//! UI code stays "dumb": it reads states and computes out of the
//! `StateCtx`, renders, and dispatches commands. Everything the screen
//! decides lives here: validation policy, the generation lifecycle, QR
//! rasterizing.

mod generate_compute;
mod generator;
mod qr;
mod validation;
mod validation_compute;

pub use generate_compute::{
    GENERATION_DELAY, GenerateCommand, GenerateCompute, GenerationPhase, ResetGenerationCommand,
};
pub use generator::GeneratorState;
pub use qr::{RenderError, render_qr_image};
pub use validation::{UrlPolicy, validate};
pub use validation_compute::ValidationCompute;
