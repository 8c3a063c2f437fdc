/// Horizontal travel in px; vertical travel is half of it.
pub const PARALLAX_STRENGTH: f64 = 12.0;
pub const RESTING_TRANSFORM: &str = "translate3d(0,0,0)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Translation of the hero content for a pointer at (`client_x`, `client_y`).
/// Moves opposite to the pointer, measured from the container's center.
pub fn parallax_offset(client_x: f64, client_y: f64, bounds: Bounds) -> (f64, f64) {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return (0.0, 0.0);
    }

    let x = (client_x - bounds.left) / bounds.width - 0.5;
    let y = (client_y - bounds.top) / bounds.height - 0.5;

    (-x * PARALLAX_STRENGTH, -y * (PARALLAX_STRENGTH / 2.0))
}

pub fn parallax_transform(offset: (f64, f64)) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", offset.0, offset.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 800.0,
        height: 400.0,
    };

    #[test]
    fn center_is_at_rest() {
        assert_eq!(parallax_offset(500.0, 250.0, HERO), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_half_strength_in_opposite_direction() {
        assert_eq!(parallax_offset(100.0, 50.0, HERO), (6.0, 3.0));
        assert_eq!(parallax_offset(900.0, 450.0, HERO), (-6.0, -3.0));
    }

    #[test]
    fn degenerate_container_does_not_move() {
        let collapsed = Bounds {
            width: 0.0,
            ..HERO
        };
        assert_eq!(parallax_offset(10.0, 10.0, collapsed), (0.0, 0.0));
    }

    #[test]
    fn transform_is_formatted_in_pixels() {
        assert_eq!(
            parallax_transform((-6.0, 3.0)),
            "translate3d(-6.00px, 3.00px, 0)"
        );
    }
}
