//! Viewport tracking across window resizes.

use ambient_net_core::{ResizePolicy, Viewport};

/// What a resize asks of the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    pub viewport: Viewport,
    /// The viewport differs from the previous one.
    pub changed: bool,
    /// Node positions should be scattered afresh.
    pub reinitialize: bool,
}

/// Owns the current viewport and applies the resize policy.
#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: Viewport,
    policy: ResizePolicy,
}

impl ViewportController {
    pub fn new(viewport: Viewport, policy: ResizePolicy) -> Self {
        Self { viewport, policy }
    }

    /// Sizes the initial viewport from the window width.
    pub fn from_window_width(window_width: f64, policy: ResizePolicy) -> Self {
        Self::new(Viewport::from_window_width(window_width), policy)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Handles a window resize notification.
    pub fn on_window_resize(&mut self, window_width: f64) -> ResizeOutcome {
        self.set_viewport(Viewport::from_window_width(window_width))
    }

    /// Replaces the viewport with an explicit size.
    ///
    /// Positions are only reinitialized when the policy asks for it and the
    /// size actually changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ResizeOutcome {
        let changed = viewport != self.viewport;
        self.viewport = viewport;
        ResizeOutcome {
            viewport,
            changed,
            reinitialize: changed && self.policy == ResizePolicy::Reinitialize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_viewport_follows_window() {
        let c = ViewportController::from_window_width(1280.0, ResizePolicy::Preserve);
        assert_eq!(c.viewport(), Viewport::new(980.0, 441.0).unwrap());
    }

    #[test]
    fn resize_with_preserve_never_reinitializes() {
        let mut c = ViewportController::from_window_width(980.0, ResizePolicy::Preserve);
        let outcome = c.on_window_resize(600.0);
        assert!(outcome.changed);
        assert!(!outcome.reinitialize);
        assert_eq!(outcome.viewport.width(), 600.0);
        assert_eq!(outcome.viewport.height(), 270.0);
        assert_eq!(c.viewport(), outcome.viewport);
    }

    #[test]
    fn resize_with_reinitialize_policy() {
        let mut c = ViewportController::from_window_width(980.0, ResizePolicy::Reinitialize);
        assert!(c.on_window_resize(600.0).reinitialize);
    }

    #[test]
    fn same_size_resize_is_not_a_change() {
        let mut c = ViewportController::from_window_width(1500.0, ResizePolicy::Reinitialize);
        // both widths cap to 980
        let outcome = c.on_window_resize(2000.0);
        assert!(!outcome.changed);
        assert!(!outcome.reinitialize);
    }
}
