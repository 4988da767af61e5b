//! Viewport clamp
//!
//! The camera centres on the player but never shows anything outside the
//! world rectangle. When the world is smaller than the viewport along an
//! axis the offset on that axis is pinned to 0.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Top-left corner of the visible region in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
        }
    }

    /// Recompute the offset for `focus` inside a world of `world_size`
    pub fn follow(&mut self, focus: Vec2, world_size: Vec2) {
        self.offset = clamp_offset(focus, self.viewport, world_size);
    }
}

/// `clamp(focus - viewport/2, 0, world - viewport)` per axis
#[inline]
pub fn clamp_offset(focus: Vec2, viewport: Vec2, world_size: Vec2) -> Vec2 {
    let max = (world_size - viewport).max(Vec2::ZERO);
    (focus - viewport * 0.5).clamp(Vec2::ZERO, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamps_at_far_edge() {
        let offset = clamp_offset(
            Vec2::new(2990.0, 1000.0),
            Vec2::new(800.0, 600.0),
            Vec2::new(3000.0, 2000.0),
        );
        assert_eq!(offset.x, 2200.0);
        assert_eq!(offset.y, 700.0);
    }

    #[test]
    fn test_clamps_at_origin() {
        let offset = clamp_offset(
            Vec2::new(10.0, 10.0),
            Vec2::new(800.0, 600.0),
            Vec2::new(3000.0, 2000.0),
        );
        assert_eq!(offset, Vec2::ZERO);
    }

    #[test]
    fn test_small_world_collapses_to_zero() {
        let mut camera = Camera::new(Vec2::new(800.0, 600.0));
        camera.follow(Vec2::new(300.0, 200.0), Vec2::new(500.0, 400.0));
        assert_eq!(camera.offset, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn view_never_leaves_world(
            fx in -500.0f32..4000.0,
            fy in -500.0f32..4000.0,
            ww in 100.0f32..4000.0,
            wh in 100.0f32..4000.0,
        ) {
            let viewport = Vec2::new(800.0, 600.0);
            let offset = clamp_offset(Vec2::new(fx, fy), viewport, Vec2::new(ww, wh));
            prop_assert!(offset.x >= 0.0 && offset.y >= 0.0);
            if ww >= viewport.x {
                prop_assert!(offset.x + viewport.x <= ww + 1e-3);
            } else {
                prop_assert_eq!(offset.x, 0.0);
            }
            if wh >= viewport.y {
                prop_assert!(offset.y + viewport.y <= wh + 1e-3);
            } else {
                prop_assert_eq!(offset.y, 0.0);
            }
        }
    }
}
