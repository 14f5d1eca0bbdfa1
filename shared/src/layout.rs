//! Dual-pane split layout arithmetic
//!
//! The layout engine holds one continuously adjustable split ratio and a
//! tri-state display mode. The ratio is clamped to [10, 90] so neither
//! pane can be fully collapsed by dragging; collapse happens only through
//! explicit mode selection, which overrides the ratio-driven widths. The
//! browser layer feeds pointer geometry in and reads widths/visibility
//! out; everything here is plain arithmetic.

use serde::{Deserialize, Serialize};

/// Lower clamp of the split ratio, percent
pub const MIN_SPLIT: f64 = 10.0;
/// Upper clamp of the split ratio, percent
pub const MAX_SPLIT: f64 = 90.0;
/// Initial split ratio, percent
pub const DEFAULT_SPLIT: f64 = 50.0;

/// Which panes are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Both,
    LeftOnly,
    RightOnly,
}

/// Live state of the dual-pane layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    split_ratio: f64,
    mode: SplitMode,
    dragging: bool,
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self {
            split_ratio: DEFAULT_SPLIT,
            mode: SplitMode::Both,
            dragging: false,
        }
    }
}

impl SplitLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ratio(&self) -> f64 {
        self.split_ratio
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Ratio for a pointer at `client_x` over a container spanning
    /// `[container_left, container_left + container_width]`, clamped.
    pub fn ratio_from_pointer(client_x: f64, container_left: f64, container_width: f64) -> f64 {
        if container_width <= 0.0 {
            return DEFAULT_SPLIT;
        }
        let ratio = (client_x - container_left) / container_width * 100.0;
        ratio.clamp(MIN_SPLIT, MAX_SPLIT)
    }

    /// Start a drag session. Dragging is only possible while both panes
    /// are shown.
    pub fn begin_drag(&mut self) -> bool {
        if self.mode != SplitMode::Both {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Update the ratio from pointer geometry. Ignored outside a drag
    /// session.
    pub fn drag_to(&mut self, client_x: f64, container_left: f64, container_width: f64) {
        if !self.dragging {
            return;
        }
        self.split_ratio = Self::ratio_from_pointer(client_x, container_left, container_width);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Change the display mode. A mode change mid-drag abandons the drag
    /// session; the ratio itself is left untouched so restoring `Both`
    /// restores the previous split unchanged.
    pub fn set_mode(&mut self, mode: SplitMode) {
        if mode != self.mode {
            self.dragging = false;
        }
        self.mode = mode;
    }

    /// Left pane width in percent, after mode overrides
    pub fn left_width_pct(&self) -> f64 {
        match self.mode {
            SplitMode::Both => self.split_ratio,
            SplitMode::LeftOnly => 100.0,
            SplitMode::RightOnly => 0.0,
        }
    }

    /// Right pane width in percent, after mode overrides
    pub fn right_width_pct(&self) -> f64 {
        match self.mode {
            SplitMode::Both => 100.0 - self.split_ratio,
            SplitMode::LeftOnly => 0.0,
            SplitMode::RightOnly => 100.0,
        }
    }

    pub fn left_visible(&self) -> bool {
        self.mode != SplitMode::RightOnly
    }

    pub fn right_visible(&self) -> bool {
        self.mode != SplitMode::LeftOnly
    }

    /// The divider is only shown (and draggable) when both panes are
    pub fn divider_visible(&self) -> bool {
        self.mode == SplitMode::Both
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Container geometry used throughout: left edge 0, width 1000.
    const LEFT: f64 = 0.0;
    const WIDTH: f64 = 1000.0;

    #[test]
    fn pointer_ratio_clamps_to_bounds() {
        // 3% -> clamped up to 10
        assert_eq!(SplitLayout::ratio_from_pointer(30.0, LEFT, WIDTH), 10.0);
        // 97% -> clamped down to 90
        assert_eq!(SplitLayout::ratio_from_pointer(970.0, LEFT, WIDTH), 90.0);
        // In-range positions pass through
        assert_eq!(SplitLayout::ratio_from_pointer(400.0, LEFT, WIDTH), 40.0);
    }

    #[test]
    fn degenerate_container_keeps_the_default() {
        assert_eq!(SplitLayout::ratio_from_pointer(100.0, 0.0, 0.0), DEFAULT_SPLIT);
    }

    #[test]
    fn drag_session_updates_the_ratio() {
        let mut layout = SplitLayout::new();
        assert!(layout.begin_drag());
        layout.drag_to(300.0, LEFT, WIDTH);
        assert_eq!(layout.ratio(), 30.0);
        layout.end_drag();

        // Moves outside a session are ignored
        layout.drag_to(700.0, LEFT, WIDTH);
        assert_eq!(layout.ratio(), 30.0);
    }

    #[test]
    fn no_dragging_outside_both_mode() {
        let mut layout = SplitLayout::new();
        layout.set_mode(SplitMode::LeftOnly);
        assert!(!layout.begin_drag());
        assert!(!layout.is_dragging());
    }

    #[test]
    fn mode_change_mid_drag_abandons_the_session() {
        let mut layout = SplitLayout::new();
        layout.begin_drag();
        layout.set_mode(SplitMode::RightOnly);
        assert!(!layout.is_dragging());
        layout.drag_to(300.0, LEFT, WIDTH);
        assert_eq!(layout.ratio(), DEFAULT_SPLIT);
    }

    #[test]
    fn left_only_forces_widths_and_hides_the_rest() {
        let mut layout = SplitLayout::new();
        layout.begin_drag();
        layout.drag_to(250.0, LEFT, WIDTH);
        layout.end_drag();
        assert_eq!(layout.ratio(), 25.0);

        layout.set_mode(SplitMode::LeftOnly);
        assert_eq!(layout.left_width_pct(), 100.0);
        assert_eq!(layout.right_width_pct(), 0.0);
        assert!(layout.left_visible());
        assert!(!layout.right_visible());
        assert!(!layout.divider_visible());
    }

    #[test]
    fn restoring_both_restores_the_previous_ratio() {
        let mut layout = SplitLayout::new();
        layout.begin_drag();
        layout.drag_to(250.0, LEFT, WIDTH);
        layout.end_drag();

        layout.set_mode(SplitMode::RightOnly);
        layout.set_mode(SplitMode::Both);
        assert_eq!(layout.ratio(), 25.0);
        assert_eq!(layout.left_width_pct(), 25.0);
        assert_eq!(layout.right_width_pct(), 75.0);
        assert!(layout.divider_visible());
    }
}
