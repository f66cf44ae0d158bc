//! Snap-to-grid and position constraint
//!
//! Pure coordinate math: grid rounding, container clamping and edge
//! snapping. Inputs are always coerced into range; no errors are possible.

use crate::{Bounds, Point, Size};

/// Distance from a container boundary at which a position snaps onto it
pub const EDGE_SNAP_THRESHOLD: f32 = 10.0;

/// Snap a coordinate to the nearest multiple of `grid_size`
///
/// Returns the input unchanged when snapping is disabled or the grid
/// size is not positive.
pub fn snap(value: f32, grid_size: f32, enabled: bool) -> f32 {
    if !enabled || grid_size <= 0.0 {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Constrain a candidate position to the container
///
/// Each coordinate is grid-snapped, clamped into `[0, max]` where `max`
/// is the container extent minus the block extent, and finally forced
/// onto a boundary when within [`EDGE_SNAP_THRESHOLD`] of it. Snapping
/// happens before clamping so the result never escapes the container
/// even when `max` is not a grid multiple.
pub fn constrain(
    candidate: Point,
    size: Size,
    bounds: Bounds,
    grid_size: f32,
    snap_enabled: bool,
) -> Point {
    let max_x = (bounds.width - size.width).max(0.0);
    let max_y = (bounds.height - size.height).max(0.0);

    let x = snap(candidate.x, grid_size, snap_enabled).clamp(0.0, max_x);
    let y = snap(candidate.y, grid_size, snap_enabled).clamp(0.0, max_y);

    Point::new(snap_to_edges(x, max_x), snap_to_edges(y, max_y))
}

/// Force a coordinate onto a boundary when within the snap threshold
fn snap_to_edges(value: f32, max: f32) -> f32 {
    if value < EDGE_SNAP_THRESHOLD {
        0.0
    } else if value > max - EDGE_SNAP_THRESHOLD {
        max
    } else {
        value
    }
}

/// Check whether a position sits near any container boundary
///
/// Used for transient "snapping to edge" feedback while dragging.
pub fn near_edge(position: Point, size: Size, bounds: Bounds) -> bool {
    let max_x = (bounds.width - size.width).max(0.0);
    let max_y = (bounds.height - size.height).max(0.0);

    position.x <= EDGE_SNAP_THRESHOLD
        || position.y <= EDGE_SNAP_THRESHOLD
        || position.x >= max_x - EDGE_SNAP_THRESHOLD
        || position.y >= max_y - EDGE_SNAP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(1000.0, 1200.0)
    }

    #[test]
    fn test_snap_disabled_is_identity() {
        assert_eq!(snap(37.0, 20.0, false), 37.0);
        assert_eq!(snap(-3.5, 10.0, false), -3.5);
    }

    #[test]
    fn test_snap_rounds_to_nearest_multiple() {
        assert_eq!(snap(37.0, 20.0, true), 40.0);
        assert_eq!(snap(29.0, 20.0, true), 20.0);
        assert_eq!(snap(30.0, 20.0, true), 40.0);
        assert_eq!(snap(0.0, 20.0, true), 0.0);
    }

    #[test]
    fn test_snap_is_idempotent() {
        for value in [0.0, 5.0, 13.0, 37.5, 583.0, 999.0] {
            for grid in [10.0, 20.0, 50.0] {
                let once = snap(value, grid, true);
                assert_eq!(snap(once, grid, true), once);
            }
        }
    }

    #[test]
    fn test_constrain_stays_in_bounds() {
        let size = Size::new(400.0, 120.0);
        for x in [-500.0, 0.0, 123.0, 599.0, 601.0, 5000.0] {
            for y in [-500.0, 0.0, 583.0, 1079.0, 1081.0, 5000.0] {
                for snap_enabled in [false, true] {
                    let p = constrain(Point::new(x, y), size, bounds(), 20.0, snap_enabled);
                    assert!(p.x >= 0.0 && p.x <= 600.0, "x={} out of range", p.x);
                    assert!(p.y >= 0.0 && p.y <= 1080.0, "y={} out of range", p.y);
                }
            }
        }
    }

    #[test]
    fn test_constrain_in_bounds_when_max_not_grid_multiple() {
        // max_x = 1000 - 402 = 598: rounding after a clamp would yield 600
        let size = Size::new(402.0, 100.0);
        let p = constrain(Point::new(597.0, 100.0), size, bounds(), 20.0, true);
        assert!(p.x <= 598.0);
    }

    #[test]
    fn test_constrain_edge_snap_low() {
        let size = Size::new(400.0, 120.0);
        // Grid rounds 5 -> 0, inside the edge band either way
        let p = constrain(Point::new(5.0, 583.0), size, bounds(), 20.0, true);
        assert_eq!(p, Point::new(0.0, 580.0));
    }

    #[test]
    fn test_constrain_edge_snap_high() {
        let size = Size::new(400.0, 120.0);
        let p = constrain(Point::new(595.0, 1075.0), size, bounds(), 20.0, false);
        assert_eq!(p, Point::new(600.0, 1080.0));
    }

    #[test]
    fn test_constrain_within_threshold_returns_boundary() {
        let size = Size::new(400.0, 120.0);
        for v in [0.0, 3.0, 9.9] {
            let p = constrain(Point::new(v, v), size, bounds(), 20.0, false);
            assert_eq!(p, Point::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_constrain_oversized_block_pins_to_origin() {
        let size = Size::new(2000.0, 3000.0);
        let p = constrain(Point::new(300.0, 300.0), size, bounds(), 20.0, true);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_near_edge() {
        let size = Size::new(200.0, 100.0);
        assert!(near_edge(Point::new(5.0, 400.0), size, bounds()));
        assert!(near_edge(Point::new(400.0, 8.0), size, bounds()));
        assert!(near_edge(Point::new(795.0, 400.0), size, bounds()));
        assert!(!near_edge(Point::new(400.0, 400.0), size, bounds()));
    }
}
