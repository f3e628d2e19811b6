/// Pointer-driven rotation applied to the splash visuals. Presentation only;
/// the sequence timers never consult it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

/// Degrees swept across the full viewport on each axis, so the rotation
/// stays within roughly ±10 degrees.
const TILT_RANGE_DEG: f64 = 20.0;

/// Maps a pointer position to a tilt. The vertical axis is inverted so the
/// content leans away from the cursor.
pub fn tilt_from_pointer(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Tilt {
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return Tilt::default();
    }
    Tilt {
        x: (client_x / viewport_w - 0.5) * TILT_RANGE_DEG,
        y: (client_y / viewport_h - 0.5) * -TILT_RANGE_DEG,
    }
}

impl Tilt {
    /// Transform for the entry screen content, at a 0.2 scale.
    pub fn entry_style(&self) -> String {
        format!(
            "transform: rotateX({:.2}deg) rotateY({:.2}deg) translateZ(20px);",
            self.y * 0.2,
            self.x * 0.2
        )
    }

    /// Transform for the revealed logo, at a gentler 0.1 scale.
    pub fn revealed_style(&self) -> String {
        format!(
            "transform: rotateX({:.2}deg) rotateY({:.2}deg);",
            self.y * 0.1,
            self.x * 0.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_is_level() {
        let tilt = tilt_from_pointer(400.0, 300.0, 800.0, 600.0);
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn corners_hit_the_ten_degree_bound() {
        let top_left = tilt_from_pointer(0.0, 0.0, 800.0, 600.0);
        assert_eq!(top_left.x, -10.0);
        assert_eq!(top_left.y, 10.0);

        let bottom_right = tilt_from_pointer(800.0, 600.0, 800.0, 600.0);
        assert_eq!(bottom_right.x, 10.0);
        assert_eq!(bottom_right.y, -10.0);
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let below_center = tilt_from_pointer(400.0, 600.0, 800.0, 600.0);
        assert!(below_center.y < 0.0);
    }

    #[test]
    fn degenerate_viewport_stays_level() {
        assert_eq!(tilt_from_pointer(10.0, 10.0, 0.0, 0.0), Tilt::default());
    }

    #[test]
    fn entry_scale_is_twice_the_revealed_scale() {
        let tilt = Tilt { x: 10.0, y: -10.0 };
        assert_eq!(
            tilt.entry_style(),
            "transform: rotateX(-2.00deg) rotateY(2.00deg) translateZ(20px);"
        );
        assert_eq!(
            tilt.revealed_style(),
            "transform: rotateX(-1.00deg) rotateY(1.00deg);"
        );
    }
}
