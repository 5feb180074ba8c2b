use crate::backend::RenderBackend;

/// A world-space reference line with its physical length. Derived from the
/// current camera projection; recomputed on every camera change and never
/// cached, the projection lives outside this crate.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleBar {
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub distance: f64,
    pub label: String,
}

/// Projects a fixed-length display-space bar into world space through the
/// renderer's `display -> world` transform.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBarProjector {
    pixel_length: f64,
    margin: f64,
}

impl ScaleBarProjector {
    pub fn new(pixel_length: f64, margin: f64) -> Self {
        Self {
            pixel_length,
            margin,
        }
    }

    /// Compute the bar for the current view. `display_to_world` maps a
    /// display-space point to homogeneous `(x, y, z, w)` world coordinates;
    /// components are divided by `w` when it is nonzero.
    ///
    /// The bar is anchored `margin` pixels in from the right edge of the
    /// half-width viewport, `margin` pixels up from the bottom.
    pub fn project<F>(&self, viewport_width: u32, display_to_world: F) -> ScaleBar
    where
        F: Fn(f64, f64) -> [f64; 4],
    {
        let x2 = f64::from(viewport_width) / 2.0 - self.margin;
        let y = self.margin;

        let start = Self::dehomogenize(display_to_world(x2 - self.pixel_length, y));
        let end = Self::dehomogenize(display_to_world(x2, y));
        let distance = Self::distance(start, end);

        ScaleBar {
            start,
            end,
            distance,
            label: format!("{distance:.2} mm"),
        }
    }

    /// Same as [`project`](Self::project), using a backend's projection
    pub fn project_with<B: RenderBackend>(&self, viewport_width: u32, backend: &B) -> ScaleBar {
        self.project(viewport_width, |x, y| backend.display_to_world(x, y))
    }

    fn dehomogenize([x, y, z, w]: [f64; 4]) -> [f64; 3] {
        if w != 0.0 {
            [x / w, y / w, z / w]
        } else {
            [x, y, z]
        }
    }

    fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        let dz = b[2] - a[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(x: f64, y: f64) -> [f64; 4] {
        [x, y, 0.0, 1.0]
    }

    #[test]
    fn identity_projection_recovers_pixel_length() {
        let projector = ScaleBarProjector::new(100.0, 20.0);
        let bar = projector.project(400, identity);

        assert_eq!(bar.start, [80.0, 20.0, 0.0]);
        assert_eq!(bar.end, [180.0, 20.0, 0.0]);
        assert_eq!(bar.distance, 100.0);
        assert_eq!(bar.label, "100.00 mm");
    }

    #[test]
    fn homogeneous_coordinate_scales_the_result() {
        let projector = ScaleBarProjector::new(100.0, 20.0);
        let bar = projector.project(400, |x, y| [x, y, 0.0, 2.0]);
        assert_eq!(bar.distance, 50.0);
        assert_eq!(bar.label, "50.00 mm");
    }

    #[test]
    fn zero_w_skips_dehomogenization() {
        let projector = ScaleBarProjector::new(100.0, 20.0);
        let bar = projector.project(400, |x, y| [x, y, 0.0, 0.0]);
        assert_eq!(bar.distance, 100.0);
    }

    #[test]
    fn label_keeps_two_decimal_places() {
        let projector = ScaleBarProjector::new(1.0, 0.0);
        let bar = projector.project(2, |x, y| [x / 3.0, y, 0.0, 1.0]);
        assert_eq!(bar.label, "0.33 mm");
    }
}
