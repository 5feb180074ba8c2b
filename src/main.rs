use tomo_volume::{FrameCompositor, Orientation, VolumeStore};

fn main() {
    let mut store = VolumeStore::new();
    store.generate_synthetic((64, 48, 48));
    let volume = store
        .volume()
        .expect("synthetic volume should be generated");

    let slice = volume
        .slice(Orientation::Coronal, volume.dim().1 / 2)
        .expect("center index should be in range");
    let (rows, cols) = slice.dim();
    let pixels: Vec<u8> = slice.iter().copied().collect();
    let image = image::GrayImage::from_raw(cols as u32, rows as u32, pixels)
        .expect("pixel buffer should match slice dimensions");
    image
        .save("coronal_center.png")
        .expect("should have written slice image");

    let compositor = FrameCompositor::new(volume);
    let (width, height) = compositor.frame_dimensions();
    println!(
        "{} frames of {width}x{height} at {} fps",
        compositor.frames().len(),
        compositor.fps()
    );
}
