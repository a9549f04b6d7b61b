//! Integration test for the renderer failure path: input that encodes to
//! nothing (too long for any QR version) must surface an inline error and
//! return the lifecycle to idle instead of leaving an empty "result".

mod common;

use std::time::Duration;

use crate::common::{new_harness, set_input, step_frames};
use kittest::Queryable;
use quickqr_business::{GENERATION_DELAY, GenerateCompute, GeneratorState};

async fn wait_past_delay() {
    tokio::time::sleep(GENERATION_DELAY + Duration::from_millis(200)).await;
}

#[tokio::test]
async fn oversized_payload_reports_error_and_recovers() {
    let mut harness = new_harness();
    step_frames(&mut harness, 2);

    // QR codes cap out around 3 KB; 8000 bytes cannot encode.
    harness
        .query_by_label("Allow any text")
        .expect("toggle rendered")
        .click();
    step_frames(&mut harness, 2);
    set_input(&mut harness, &"a".repeat(8000));
    step_frames(&mut harness, 3);

    harness
        .query_by_label("Generate QR Code")
        .expect("button rendered")
        .click();
    step_frames(&mut harness, 2);
    wait_past_delay().await;
    step_frames(&mut harness, 3);

    {
        let app = harness.state();
        let state = app.state.ctx.state::<GeneratorState>();
        assert!(state.render_error.is_some(), "renderer failure is recorded");
        assert!(state.qr_texture.is_none(), "no texture on failure");
        let compute = app.state.ctx.cached::<GenerateCompute>().expect("recorded");
        assert!(
            !compute.is_displayed(),
            "failure resets the lifecycle instead of lingering in displayed"
        );
    }
    assert!(
        harness.query_by_label_contains("Error:").is_some(),
        "failure is shown inline"
    );

    // A fresh, encodable submission clears the error and succeeds.
    set_input(&mut harness, "https://example.com");
    step_frames(&mut harness, 3);
    harness
        .query_by_label("Generate QR Code")
        .expect("button rendered")
        .click();
    step_frames(&mut harness, 2);
    wait_past_delay().await;
    step_frames(&mut harness, 3);

    let app = harness.state();
    let state = app.state.ctx.state::<GeneratorState>();
    assert!(state.render_error.is_none(), "new submission drops the error");
    assert!(state.qr_texture.is_some());
    assert!(
        harness
            .query_by_label_contains("QR Code for: https://example.com")
            .is_some()
    );
}
