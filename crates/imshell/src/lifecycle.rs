//! The run lifecycle: a small state machine the windowing callbacks drive.
//!
//! The platform runtime invokes exactly one callback at a time, so nothing
//! here needs synchronization; the machine only decides *when* the main loop
//! leaves its steady state and whether teardown has already run.

/// Progress of one process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Before the window and GPU context exist.
    #[default]
    Uninitialized,
    /// Steady state: frames and events are being processed.
    Running,
    /// A terminating signal was observed; no further frame work happens.
    Terminating,
    /// Teardown has run. Terminal.
    Stopped,
}

/// A platform event reduced to what the lifecycle reacts to.
///
/// Everything else the platform delivers is forwarded to the UI bridge and
/// otherwise ignored at the application level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Application-level quit request; not tied to any window.
    Quit,
    /// Close request reported by the window with the given id.
    CloseRequested(u64),
    /// Any other event.
    Other,
}

/// Tracks the phase of the run and decides when to leave the main loop.
#[derive(Debug, Default)]
pub struct Lifecycle {
    phase: Phase,
    surface_id: Option<u64>,
}

impl Lifecycle {
    /// Creates a lifecycle in the `Uninitialized` phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether frame and event work may happen.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Marks startup complete. `surface_id` identifies the one window whose
    /// close requests terminate the run; close requests from any other id are
    /// ignored.
    pub fn start(&mut self, surface_id: u64) {
        debug_assert_eq!(self.phase, Phase::Uninitialized);
        self.surface_id = Some(surface_id);
        self.phase = Phase::Running;
    }

    /// Feeds one event to the machine. Returns true when the main loop should
    /// exit: a quit signal (any window), or a close request whose id exactly
    /// matches the surface id recorded at startup.
    pub fn observe(&mut self, signal: Signal) -> bool {
        if self.phase == Phase::Running {
            match signal {
                Signal::Quit => self.phase = Phase::Terminating,
                Signal::CloseRequested(id) if Some(id) == self.surface_id => {
                    self.phase = Phase::Terminating;
                }
                Signal::CloseRequested(_) | Signal::Other => {}
            }
        }
        self.phase == Phase::Terminating
    }

    /// Marks teardown complete. Returns true only the first time, so the
    /// reverse-order release sequence runs exactly once.
    pub fn finish(&mut self) -> bool {
        if self.phase == Phase::Stopped {
            return false;
        }
        self.phase = Phase::Stopped;
        true
    }
}

/// What one iteration of the frame loop does with the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDisposition {
    /// Minimized surface: no encoder, no UI frame, no state changes.
    Skip,
    /// No usable swapchain texture or a zero-area framebuffer: the frame's
    /// empty command buffer is still submitted, but no render pass is recorded.
    SubmitOnly,
    /// Record and submit the UI render pass.
    Render,
}

/// Decides what one iteration does. Minimized dominates everything else;
/// otherwise a render pass happens only with a texture and a non-zero area.
#[must_use]
pub fn frame_disposition(
    minimized: bool,
    texture_acquired: bool,
    width: u32,
    height: u32,
) -> FrameDisposition {
    if minimized {
        FrameDisposition::Skip
    } else if texture_acquired && width > 0 && height > 0 {
        FrameDisposition::Render
    } else {
        FrameDisposition::SubmitOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE_ID: u64 = 7;
    const OTHER_ID: u64 = 8;

    fn running() -> Lifecycle {
        let mut lifecycle = Lifecycle::new();
        lifecycle.start(SURFACE_ID);
        lifecycle
    }

    #[test]
    fn test_stays_running_without_terminating_signal() {
        let mut lifecycle = running();
        for _ in 0..100 {
            assert!(!lifecycle.observe(Signal::Other));
            assert!(!lifecycle.observe(Signal::CloseRequested(OTHER_ID)));
        }
        assert_eq!(lifecycle.phase(), Phase::Running);
    }

    #[test]
    fn test_close_request_requires_exact_id_match() {
        let mut lifecycle = running();
        assert!(!lifecycle.observe(Signal::CloseRequested(OTHER_ID)));
        assert_eq!(lifecycle.phase(), Phase::Running);

        assert!(lifecycle.observe(Signal::CloseRequested(SURFACE_ID)));
        assert_eq!(lifecycle.phase(), Phase::Terminating);
    }

    #[test]
    fn test_quit_transitions_regardless_of_window() {
        let mut lifecycle = running();
        assert!(lifecycle.observe(Signal::Quit));
        assert_eq!(lifecycle.phase(), Phase::Terminating);
    }

    #[test]
    fn test_signals_after_terminating_change_nothing() {
        let mut lifecycle = running();
        lifecycle.observe(Signal::Quit);
        assert!(lifecycle.observe(Signal::Other));
        assert!(lifecycle.observe(Signal::CloseRequested(SURFACE_ID)));
        assert_eq!(lifecycle.phase(), Phase::Terminating);
    }

    #[test]
    fn test_signals_before_start_are_ignored() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.observe(Signal::Quit));
        assert_eq!(lifecycle.phase(), Phase::Uninitialized);
    }

    #[test]
    fn test_teardown_runs_exactly_once() {
        let mut lifecycle = running();
        lifecycle.observe(Signal::Quit);
        assert!(lifecycle.finish());
        assert!(!lifecycle.finish());
        assert_eq!(lifecycle.phase(), Phase::Stopped);
    }

    #[test]
    fn test_minimized_skips_the_whole_iteration() {
        assert_eq!(frame_disposition(true, true, 1280, 720), FrameDisposition::Skip);
        assert_eq!(frame_disposition(true, false, 0, 0), FrameDisposition::Skip);
    }

    #[test]
    fn test_render_pass_needs_texture_and_area() {
        assert_eq!(
            frame_disposition(false, true, 1280, 720),
            FrameDisposition::Render
        );
        assert_eq!(
            frame_disposition(false, false, 1280, 720),
            FrameDisposition::SubmitOnly
        );
        assert_eq!(
            frame_disposition(false, true, 0, 720),
            FrameDisposition::SubmitOnly
        );
        assert_eq!(
            frame_disposition(false, true, 1280, 0),
            FrameDisposition::SubmitOnly
        );
    }
}
