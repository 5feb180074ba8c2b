use crate::enums::Axis;

/// Axis-aligned clipping plane in world space. The normal is the unit
/// vector of the axis; the origin tracks the matching navigation offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlane {
    pub axis: Axis,
    pub origin: [f64; 3],
    pub normal: [f64; 3],
}

/// Compute the three clipping planes for the given `(x, y, z)` offsets.
/// Pure function of its input; recomputed on every offset change.
pub fn planes_for(offsets: (usize, usize, usize)) -> [ClipPlane; 3] {
    let (x, y, z) = offsets;
    [
        ClipPlane {
            axis: Axis::X,
            origin: [x as f64, 0.0, 0.0],
            normal: Axis::X.unit_normal(),
        },
        ClipPlane {
            axis: Axis::Y,
            origin: [0.0, y as f64, 0.0],
            normal: Axis::Y.unit_normal(),
        },
        ClipPlane {
            axis: Axis::Z,
            origin: [0.0, 0.0, z as f64],
            normal: Axis::Z.unit_normal(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planes_track_offsets() {
        let [px, py, pz] = planes_for((3, 4, 5));

        assert_eq!(px.origin, [3.0, 0.0, 0.0]);
        assert_eq!(px.normal, [1.0, 0.0, 0.0]);

        assert_eq!(py.origin, [0.0, 4.0, 0.0]);
        assert_eq!(py.normal, [0.0, 1.0, 0.0]);

        assert_eq!(pz.origin, [0.0, 0.0, 5.0]);
        assert_eq!(pz.normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn planes_are_pure_over_offsets() {
        assert_eq!(planes_for((0, 0, 0)), planes_for((0, 0, 0)));
        assert_ne!(planes_for((1, 0, 0)), planes_for((0, 0, 0)));
    }
}
