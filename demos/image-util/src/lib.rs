use image::{Rgb, RgbImage};
use ndarray::Array2;

/// Black → red → yellow → white ramp for `s` in `[0, 1]`.
fn hot(s: f64) -> Rgb<u8> {
    let s = s.max(0.0).min(1.0);
    let channel = |lo: f64| ((s - lo) * 3.0 * 256.0).max(0.0).min(255.0) as u8;

    Rgb([channel(0.0), channel(1.0 / 3.0), channel(2.0 / 3.0)])
}

/// Write `x` as a PNG, mapping `[t_min, t_max]` onto the hot ramp.
///
/// Values outside the range are clamped. The file lands at
/// `out/{prefix}_{index:06}.png`.
pub fn save_heatmap(
    prefix: &str,
    index: usize,
    x: &Array2<f64>,
    t_min: f64,
    t_max: f64,
) -> anyhow::Result<()> {
    anyhow::ensure!(t_max > t_min, "empty colour range [{}, {}]", t_min, t_max);

    let shape = x.dim();

    let mut img = RgbImage::new(shape.0 as u32, shape.1 as u32);

    for i in 0..shape.0 {
        for j in 0..shape.1 {
            let s = (x[[i, j]] - t_min) / (t_max - t_min);
            img.put_pixel(i as u32, j as u32, hot(s));
        }
    }

    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}
