//! Drag-to-resize session with frame coalescing.
//!
//! Pointer-move events arrive much faster than frames are painted. Each move
//! only records the latest pointer position in the pending frame task; the
//! resize itself is computed once per frame, always from the widths captured
//! when the drag began, so the result depends only on the latest position.
//! Widths set from outside the drag replace that snapshot (see
//! [`DragController::rebase`]).

use super::resize::{BOUNDARY_COUNT, resize_panels};
use crate::scheduler::ScheduledTask;
use crate::state::PanelWidths;
use std::time::Instant;

/// An in-progress boundary drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Boundary being dragged (0 or 1)
    pub boundary: usize,
    /// Pointer x when the drag began (or was last rebased)
    pub start_x: f64,
    /// Panel weights when the drag began (or were last rebased)
    pub start_widths: PanelWidths,
    /// Most recent pointer x seen
    pub last_x: f64,
}

/// Owns the active drag and its pending frame
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
    frame: ScheduledTask<f64>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `boundary`. Rejected for unknown boundaries.
    pub fn begin(&mut self, boundary: usize, pointer_x: f64, widths: PanelWidths) -> bool {
        if boundary >= BOUNDARY_COUNT || !pointer_x.is_finite() {
            return false;
        }
        self.frame.cancel();
        self.session = Some(DragSession {
            boundary,
            start_x: pointer_x,
            start_widths: widths,
            last_x: pointer_x,
        });
        log::debug!("Drag started on boundary {} at x={:.1}", boundary, pointer_x);
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_pending()
    }

    /// Record a pointer move; the resize runs on the next frame.
    ///
    /// Returns false if no drag is active.
    pub fn pointer_moved(&mut self, pointer_x: f64, now: Instant) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !pointer_x.is_finite() {
            return false;
        }
        session.last_x = pointer_x;
        match self.frame.payload_mut() {
            Some(latest) => *latest = pointer_x,
            None => {
                self.frame.arm(now, pointer_x);
            }
        }
        true
    }

    /// Compute the widths for the pending frame, if one is due
    pub fn on_frame(&mut self, now: Instant, total_px: f64, min_px: f64) -> Option<PanelWidths> {
        let pointer_x = self.frame.take_due(now)?;
        self.compute(pointer_x, total_px, min_px)
    }

    /// Finish the drag, flushing a pending frame immediately
    pub fn end(&mut self, total_px: f64, min_px: f64) -> Option<PanelWidths> {
        let result = self
            .frame
            .take_now()
            .and_then(|pointer_x| self.compute(pointer_x, total_px, min_px));
        if self.session.take().is_some() {
            log::debug!("Drag ended");
        }
        result
    }

    /// Widths were replaced outside the drag.
    ///
    /// The pending frame is dropped and the drag continues from `widths`
    /// at the latest pointer position, so later moves are relative to the
    /// new layout. Returns false if no drag is active.
    pub fn rebase(&mut self, widths: PanelWidths) -> bool {
        self.frame.cancel();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.start_widths = widths;
        session.start_x = session.last_x;
        log::debug!("Drag rebased at x={:.1}", session.last_x);
        true
    }

    /// Abandon the drag and any pending frame
    pub fn cancel(&mut self) {
        self.frame.cancel();
        self.session = None;
    }

    fn compute(&self, pointer_x: f64, total_px: f64, min_px: f64) -> Option<PanelWidths> {
        let session = self.session.as_ref()?;
        resize_panels(
            &session.start_widths,
            session.boundary,
            pointer_x - session.start_x,
            total_px,
            min_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::resize::pixel_widths;

    #[test]
    fn test_moves_coalesce_into_one_frame() {
        let now = Instant::now();
        let mut drag = DragController::new();
        assert!(drag.begin(0, 300.0, PanelWidths::default()));

        drag.pointer_moved(310.0, now);
        drag.pointer_moved(320.0, now);
        drag.pointer_moved(350.0, now);

        let widths = drag.on_frame(now, 1200.0, 150.0).unwrap();
        let px = pixel_widths(&widths, 1200.0);
        assert!((px[0] - 350.0).abs() < 1e-9);
        assert!(!drag.has_pending_frame());
        assert!(drag.on_frame(now, 1200.0, 150.0).is_none());
    }

    #[test]
    fn test_moves_without_drag_are_ignored() {
        let mut drag = DragController::new();
        assert!(!drag.pointer_moved(10.0, Instant::now()));
        assert!(!drag.has_pending_frame());
    }

    #[test]
    fn test_end_flushes_pending_frame() {
        let now = Instant::now();
        let mut drag = DragController::new();
        drag.begin(1, 900.0, PanelWidths::default());
        drag.pointer_moved(850.0, now);

        let widths = drag.end(1200.0, 150.0).unwrap();
        let px = pixel_widths(&widths, 1200.0);
        assert!((px[2] - 350.0).abs() < 1e-9);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_cancel_drops_frame() {
        let now = Instant::now();
        let mut drag = DragController::new();
        drag.begin(0, 0.0, PanelWidths::default());
        drag.pointer_moved(40.0, now);
        drag.cancel();
        assert!(drag.on_frame(now, 1200.0, 150.0).is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_rebase_continues_from_new_widths() {
        let now = Instant::now();
        let mut drag = DragController::new();
        drag.begin(0, 300.0, PanelWidths::default());
        drag.pointer_moved(350.0, now);
        drag.on_frame(now, 1200.0, 150.0).unwrap();

        drag.pointer_moved(360.0, now);
        assert!(drag.rebase(PanelWidths::new([1.0, 1.0, 1.0]).unwrap()));
        assert!(!drag.has_pending_frame());
        assert_eq!(drag.session().map(|s| s.start_x), Some(360.0));

        drag.pointer_moved(370.0, now);
        let px = pixel_widths(&drag.on_frame(now, 1200.0, 150.0).unwrap(), 1200.0);
        assert!((px[0] - 410.0).abs() < 1e-9);
        assert!((px[1] - 390.0).abs() < 1e-9);
        assert!((px[2] - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_rebase_without_drag() {
        let mut drag = DragController::new();
        assert!(!drag.rebase(PanelWidths::default()));
    }

    #[test]
    fn test_rejects_unknown_boundary() {
        let mut drag = DragController::new();
        assert!(!drag.begin(2, 0.0, PanelWidths::default()));
    }
}
