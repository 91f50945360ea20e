//! Lifecycle integration tests for imshell.
//!
//! Drives the public `Lifecycle` state machine through whole-run scenarios:
//! startup, interleaved event streams, termination and one-shot teardown.
//! GPU and window resources are platform-dependent and are not created here;
//! the frame-disposition function covers the render/skip decision instead.

use imshell::{lifecycle::frame_disposition, FrameDisposition, Lifecycle, Phase, Signal};

const SURFACE_ID: u64 = 42;

/// A full run: init, a busy event stream, a close request, teardown.
#[test]
fn full_run_scenario() {
    let mut lifecycle = Lifecycle::new();
    assert_eq!(lifecycle.phase(), Phase::Uninitialized);
    assert!(!lifecycle.is_running());

    // Init: the surface id recorded here scopes close-request matching.
    lifecycle.start(SURFACE_ID);
    assert_eq!(lifecycle.phase(), Phase::Running);

    // A busy steady state: input events, close requests from foreign windows.
    let stream = [
        Signal::Other,
        Signal::CloseRequested(SURFACE_ID + 1),
        Signal::Other,
        Signal::Other,
        Signal::CloseRequested(0),
        Signal::Other,
    ];
    for signal in stream {
        assert!(!lifecycle.observe(signal), "{signal:?} must not terminate");
        assert!(lifecycle.is_running());
    }

    // First frames would render: visible window, texture, 1280x720 framebuffer.
    assert_eq!(
        frame_disposition(false, true, 1280, 720),
        FrameDisposition::Render
    );

    // The matching close request terminates.
    assert!(lifecycle.observe(Signal::CloseRequested(SURFACE_ID)));
    assert_eq!(lifecycle.phase(), Phase::Terminating);
    assert!(!lifecycle.is_running());

    // Teardown runs exactly once.
    assert!(lifecycle.finish());
    assert_eq!(lifecycle.phase(), Phase::Stopped);
    assert!(!lifecycle.finish());
    assert_eq!(lifecycle.phase(), Phase::Stopped);
}

/// Quit-type signals terminate without any window id involved.
#[test]
fn quit_signal_ends_the_run() {
    let mut lifecycle = Lifecycle::new();
    lifecycle.start(SURFACE_ID);

    assert!(!lifecycle.observe(Signal::Other));
    assert!(lifecycle.observe(Signal::Quit));
    assert_eq!(lifecycle.phase(), Phase::Terminating);
}

/// Degenerate frames keep submitting but never open a render pass; a
/// minimized window does not even get that far.
#[test]
fn degenerate_frames_skip_rendering() {
    // Swapchain returned no texture.
    assert_eq!(
        frame_disposition(false, false, 1280, 720),
        FrameDisposition::SubmitOnly
    );
    // Zero-area framebuffer, either dimension.
    assert_eq!(
        frame_disposition(false, true, 0, 720),
        FrameDisposition::SubmitOnly
    );
    assert_eq!(
        frame_disposition(false, true, 1280, 0),
        FrameDisposition::SubmitOnly
    );
    // Minimized wins over everything, including a perfectly good frame.
    assert_eq!(
        frame_disposition(true, true, 1280, 720),
        FrameDisposition::Skip
    );
}
