use crate::clipping::ClipPlane;
use crate::orientation::RendererVolume;

/// The capability surface a rendering backend exposes to this crate.
///
/// The engine never names a concrete rendering API; the windowing layer
/// wires its renderer up behind these three operations and passes the
/// context object in explicitly.
pub trait RenderBackend {
    /// Take ownership of a freshly oriented volume for display
    fn upload_volume(&mut self, volume: &RendererVolume);

    /// Replace the active clipping planes
    fn set_clip_planes(&mut self, planes: &[ClipPlane; 3]);

    /// Map a display-space point to homogeneous world coordinates under
    /// the current camera
    fn display_to_world(&self, x: f64, y: f64) -> [f64; 4];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipping::planes_for;
    use crate::orientation::OrientationMapper;
    use crate::scale_bar::ScaleBarProjector;
    use crate::volume::Volume;

    #[derive(Default)]
    struct RecordingBackend {
        uploads: usize,
        planes: Option<[ClipPlane; 3]>,
    }

    impl RenderBackend for RecordingBackend {
        fn upload_volume(&mut self, volume: &RendererVolume) {
            assert_eq!(volume.layout.components, 1);
            self.uploads += 1;
        }

        fn set_clip_planes(&mut self, planes: &[ClipPlane; 3]) {
            self.planes = Some(*planes);
        }

        fn display_to_world(&self, x: f64, y: f64) -> [f64; 4] {
            [x, y, 0.0, 1.0]
        }
    }

    #[test]
    fn backend_receives_volume_and_planes() {
        let volume = Volume::synthetic_gradient((4, 4, 4));
        let mut backend = RecordingBackend::default();

        backend.upload_volume(&OrientationMapper::to_oriented(&volume));
        backend.set_clip_planes(&planes_for((1, 2, 3)));

        assert_eq!(backend.uploads, 1);
        assert_eq!(backend.planes, Some(planes_for((1, 2, 3))));
    }

    #[test]
    fn scale_bar_can_use_backend_projection() {
        let backend = RecordingBackend::default();
        let bar = ScaleBarProjector::new(100.0, 20.0).project_with(400, &backend);
        assert_eq!(bar.distance, 100.0);
    }
}
