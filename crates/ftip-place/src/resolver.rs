#![forbid(unsafe_code)]

//! Placement resolution.
//!
//! # Algorithm
//!
//! 1. Place the panel on the preferred side, `offset` away from the trigger
//!    along the main axis and aligned per [`Alignment`] on the cross axis.
//! 2. If the panel's outer main-axis edge leaves `[0, viewport]`, flip to the
//!    opposite side once. The flipped result is kept even if it overflows too.
//! 3. Clamp the cross-axis coordinate into
//!    `[padding, viewport - panel - padding]`.
//!
//! # Invariants
//!
//! 1. Same request, same result, bit for bit.
//! 2. At most one flip per call.
//! 3. The cross-axis coordinate stays inside the padded viewport whenever the
//!    panel plus both paddings fits; otherwise it is pinned to `padding`.

use ftip_core::geometry::{Rect, Size};

use crate::placement::{Alignment, Axis, Placement, Side};

/// Caller-tunable placement parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    /// Preferred placement.
    pub placement: Placement,
    /// Gap between trigger and panel along the main axis (includes any arrow).
    pub offset: f64,
    /// Minimum distance between the panel and the viewport edge on the cross axis.
    pub boundary_padding: f64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            placement: Placement::TOP,
            offset: 8.0,
            boundary_padding: 8.0,
        }
    }
}

/// One snapshot of everything the resolver needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    /// Trigger bounds in viewport coordinates.
    pub trigger: Rect,
    /// Measured panel size.
    pub panel: Size,
    /// Viewport size.
    pub viewport: Size,
    /// Placement parameters.
    pub options: PlacementOptions,
}

impl PlacementRequest {
    /// Create a request.
    pub const fn new(trigger: Rect, panel: Size, viewport: Size, options: PlacementOptions) -> Self {
        Self {
            trigger,
            panel,
            viewport,
            options,
        }
    }

    /// Whether the panel has been laid out and every input is a real number.
    ///
    /// Callers must not resolve requests that fail this check; the result
    /// would be well-defined but meaningless.
    pub fn is_measurable(&self) -> bool {
        !self.panel.is_empty()
            && self.panel.width.is_finite()
            && self.panel.height.is_finite()
            && self.trigger.is_finite()
            && self.viewport.width.is_finite()
            && self.viewport.height.is_finite()
            && self.options.offset.is_finite()
            && self.options.boundary_padding.is_finite()
    }
}

/// Resolved panel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionResult {
    /// Panel top edge in viewport coordinates.
    pub top: f64,
    /// Panel left edge in viewport coordinates.
    pub left: f64,
    /// Placement actually used (differs from the preferred one after a flip).
    pub placement: Placement,
}

impl PositionResult {
    /// The panel's bounds at this position.
    pub fn rect(&self, panel: Size) -> Rect {
        Rect::new(self.top, self.left, panel.width, panel.height)
    }
}

/// Resolve the panel position for `req`.
pub fn resolve(req: &PlacementRequest) -> PositionResult {
    let PlacementRequest {
        trigger,
        panel,
        viewport,
        options,
    } = *req;

    let mut placement = options.placement;
    let (mut top, mut left) = naive_position(trigger, panel, placement, options.offset);

    if overflows_main_axis(placement.side, top, left, panel, viewport) {
        let flipped = placement.flipped();
        crate::trace!(
            from = %placement,
            to = %flipped,
            "main axis overflow, flipping"
        );
        placement = flipped;
        (top, left) = naive_position(trigger, panel, placement, options.offset);
    }

    match placement.side.cross_axis() {
        Axis::Horizontal => {
            left = clamp_cross(left, panel.width, viewport.width, options.boundary_padding);
        }
        Axis::Vertical => {
            top = clamp_cross(top, panel.height, viewport.height, options.boundary_padding);
        }
    }

    PositionResult {
        top,
        left,
        placement,
    }
}

/// Position before any flip or clamp, as `(top, left)`.
fn naive_position(trigger: Rect, panel: Size, placement: Placement, offset: f64) -> (f64, f64) {
    let cross_h = || match placement.align {
        Alignment::Center => trigger.center_x() - panel.width / 2.0,
        Alignment::Start => trigger.left,
        Alignment::End => trigger.right() - panel.width,
    };
    let cross_v = || match placement.align {
        Alignment::Center => trigger.center_y() - panel.height / 2.0,
        Alignment::Start => trigger.top,
        Alignment::End => trigger.bottom() - panel.height,
    };

    match placement.side {
        Side::Top => (trigger.top - panel.height - offset, cross_h()),
        Side::Bottom => (trigger.bottom() + offset, cross_h()),
        Side::Left => (cross_v(), trigger.left - panel.width - offset),
        Side::Right => (cross_v(), trigger.right() + offset),
    }
}

fn overflows_main_axis(side: Side, top: f64, left: f64, panel: Size, viewport: Size) -> bool {
    match side {
        Side::Top => top < 0.0,
        Side::Bottom => top + panel.height > viewport.height,
        Side::Left => left < 0.0,
        Side::Right => left + panel.width > viewport.width,
    }
}

/// Clamp into `[padding, dim - size - padding]`, pinning to `padding` when
/// that range is empty. Never panics, unlike `f64::clamp`.
fn clamp_cross(value: f64, size: f64, dim: f64, padding: f64) -> f64 {
    let lo = padding;
    let hi = dim - size - padding;
    if hi < lo { lo } else { value.max(lo).min(hi) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const PANEL: Size = Size::new(80.0, 30.0);

    fn request(trigger: Rect, placement: Placement) -> PlacementRequest {
        PlacementRequest::new(
            trigger,
            PANEL,
            VIEWPORT,
            PlacementOptions {
                placement,
                offset: 8.0,
                boundary_padding: 8.0,
            },
        )
    }

    fn trigger() -> Rect {
        Rect::new(100.0, 100.0, 40.0, 20.0)
    }

    // ── Naive placement ───────────────────────────────────────────────

    #[test]
    fn top_without_flip() {
        let pos = resolve(&request(trigger(), Placement::TOP));
        assert_eq!(pos.top, 62.0); // 100 - 30 - 8
        assert_eq!(pos.left, 80.0); // 100 + 20 - 40
        assert_eq!(pos.placement, Placement::TOP);
    }

    #[test]
    fn bottom_without_flip() {
        let pos = resolve(&request(trigger(), Placement::BOTTOM));
        assert_eq!(pos.top, 128.0); // 100 + 20 + 8
        assert_eq!(pos.left, 80.0);
        assert_eq!(pos.placement, Placement::BOTTOM);
    }

    #[test]
    fn left_and_right_center_vertically() {
        let left = resolve(&request(trigger(), Placement::LEFT));
        assert_eq!(left.left, 12.0); // 100 - 80 - 8
        assert_eq!(left.top, 95.0); // 110 - 15
        let right = resolve(&request(trigger(), Placement::RIGHT));
        assert_eq!(right.left, 148.0); // 140 + 8
        assert_eq!(right.top, 95.0);
    }

    #[test]
    fn start_and_end_alignment() {
        let start = resolve(&request(trigger(), Placement::TOP_START));
        assert_eq!(start.left, 100.0);
        let end = resolve(&request(trigger(), Placement::TOP_END));
        assert_eq!(end.left, 60.0); // 140 - 80

        let rstart = resolve(&request(trigger(), Placement::RIGHT_START));
        assert_eq!(rstart.top, 100.0);
        let rend = resolve(&request(trigger(), Placement::RIGHT_END));
        assert_eq!(rend.top, 90.0); // 120 - 30
    }

    // ── Flip ──────────────────────────────────────────────────────────

    #[test]
    fn top_flips_to_bottom_near_viewport_top() {
        let t = Rect::new(10.0, 100.0, 40.0, 20.0);
        let pos = resolve(&request(t, Placement::TOP));
        assert_eq!(pos.top, 38.0); // 10 + 20 + 8
        assert_eq!(pos.left, 80.0);
        assert_eq!(pos.placement, Placement::BOTTOM);
    }

    #[test]
    fn bottom_flips_to_top_near_viewport_bottom() {
        let t = Rect::new(570.0, 100.0, 40.0, 20.0);
        let pos = resolve(&request(t, Placement::BOTTOM));
        assert_eq!(pos.placement, Placement::TOP);
        assert_eq!(pos.top, 532.0); // 570 - 30 - 8
    }

    #[test]
    fn horizontal_flips() {
        let near_left = Rect::new(100.0, 20.0, 40.0, 20.0);
        assert_eq!(
            resolve(&request(near_left, Placement::LEFT)).placement,
            Placement::RIGHT
        );
        let near_right = Rect::new(100.0, 740.0, 40.0, 20.0);
        let pos = resolve(&request(near_right, Placement::RIGHT));
        assert_eq!(pos.placement, Placement::LEFT);
        assert_eq!(pos.left, 652.0); // 740 - 80 - 8
    }

    #[test]
    fn flip_keeps_alignment() {
        let t = Rect::new(10.0, 100.0, 40.0, 20.0);
        let pos = resolve(&request(t, Placement::TOP_END));
        assert_eq!(pos.placement, Placement::BOTTOM_END);
        assert_eq!(pos.left, 60.0);
    }

    #[test]
    fn flipped_overflow_is_kept() {
        // Viewport too short for either side: flip once, do not flip back.
        let req = PlacementRequest::new(
            Rect::new(20.0, 100.0, 40.0, 20.0),
            Size::new(80.0, 50.0),
            Size::new(800.0, 60.0),
            PlacementOptions::default(),
        );
        let pos = resolve(&req);
        assert_eq!(pos.placement, Placement::BOTTOM);
        assert_eq!(pos.top, 48.0);
        assert!(pos.top + 50.0 > 60.0, "flipped result still overflows");
    }

    #[test]
    fn exact_fit_does_not_flip() {
        // top == 0 is inside the viewport.
        let t = Rect::new(38.0, 100.0, 40.0, 20.0);
        let pos = resolve(&request(t, Placement::TOP));
        assert_eq!(pos.top, 0.0);
        assert_eq!(pos.placement, Placement::TOP);
    }

    // ── Clamp ─────────────────────────────────────────────────────────

    #[test]
    fn cross_axis_clamped_at_left_edge() {
        let t = Rect::new(100.0, 0.0, 10.0, 20.0);
        let pos = resolve(&request(t, Placement::BOTTOM));
        assert_eq!(pos.left, 8.0);
    }

    #[test]
    fn cross_axis_clamped_at_right_edge() {
        let t = Rect::new(100.0, 790.0, 10.0, 20.0);
        let pos = resolve(&request(t, Placement::TOP));
        assert_eq!(pos.left, 712.0); // 800 - 80 - 8
    }

    #[test]
    fn vertical_cross_axis_clamped() {
        let t = Rect::new(-50.0, 300.0, 40.0, 20.0);
        let pos = resolve(&request(t, Placement::RIGHT));
        assert_eq!(pos.top, 8.0);
    }

    #[test]
    fn panel_wider_than_viewport_pins_to_padding() {
        let req = PlacementRequest::new(
            trigger(),
            Size::new(1000.0, 30.0),
            VIEWPORT,
            PlacementOptions::default(),
        );
        let pos = resolve(&req);
        assert_eq!(pos.left, 8.0);
    }

    #[test]
    fn main_axis_is_not_clamped() {
        let t = Rect::new(10.0, 100.0, 40.0, 20.0);
        let req = PlacementRequest::new(
            t,
            Size::new(80.0, 700.0),
            VIEWPORT,
            PlacementOptions::default(),
        );
        let pos = resolve(&req);
        assert_eq!(pos.placement, Placement::BOTTOM);
        assert_eq!(pos.top, 38.0);
    }

    // ── Measurability ─────────────────────────────────────────────────

    #[test]
    fn unmeasured_panel_is_not_measurable() {
        let mut req = request(trigger(), Placement::TOP);
        assert!(req.is_measurable());
        req.panel = Size::new(0.0, 0.0);
        assert!(!req.is_measurable());
        req.panel = Size::new(f64::INFINITY, 10.0);
        assert!(!req.is_measurable());
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        let req = PlacementRequest::new(
            Rect::new(f64::NAN, f64::INFINITY, -5.0, 0.0),
            Size::new(f64::NAN, -1.0),
            Size::new(0.0, 0.0),
            PlacementOptions {
                placement: Placement::LEFT_END,
                offset: f64::NAN,
                boundary_padding: 50.0,
            },
        );
        let _ = resolve(&req);
    }

    #[test]
    fn result_rect_uses_panel_size() {
        let pos = resolve(&request(trigger(), Placement::TOP));
        assert_eq!(pos.rect(PANEL), Rect::new(62.0, 80.0, 80.0, 30.0));
    }

    #[test]
    fn default_options() {
        let opts = PlacementOptions::default();
        assert_eq!(opts.placement, Placement::TOP);
        assert_eq!(opts.offset, 8.0);
        assert_eq!(opts.boundary_padding, 8.0);
    }
}
