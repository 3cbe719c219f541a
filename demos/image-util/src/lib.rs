use image::imageops::{self, FilterType};
use image::{GrayImage, Rgb, RgbImage};
use ndarray::{Array, Array2};
use std::path::Path;

/// Load a grayscale image as an n×n temperature field.
///
/// Darker pixels become hotter cells (intensities are inverted), rows are
/// flipped so that row 0 is the image bottom, and the border ring is forced
/// to the fixed boundary value 0.
pub fn load_field<P: AsRef<Path>>(path: P, n: usize) -> anyhow::Result<Array2<f64>> {
    anyhow::ensure!(n >= 3, "field side {} is below the minimum of 3", n);

    let img = image::open(path)?.to_luma8();

    Ok(field_from_image(&img, n))
}

/// The resampling part of [`load_field`], split out so it can be fed
/// synthetic images.
pub fn field_from_image(img: &GrayImage, n: usize) -> Array2<f64> {
    let img = imageops::resize(img, n as u32, n as u32, FilterType::Triangle);

    let mut u = Array::from_shape_fn((n, n), |(i, j)| {
        let l = img.get_pixel(j as u32, (n - 1 - i) as u32).0[0];
        f64::from(255 - l)
    });

    for k in 0..n {
        u[[k, 0]] = 0.0;
        u[[k, n - 1]] = 0.0;
        u[[0, k]] = 0.0;
        u[[n - 1, k]] = 0.0;
    }

    u
}

/// Save a field as a grayscale PNG frame, mapping `[0, vmax]` to `[0, 255]`.
pub fn save_monochrome(
    prefix: &str,
    index: usize,
    x: &Array2<f64>,
    vmax: f64,
) -> anyhow::Result<()> {
    let shape = x.dim();

    let mut img = RgbImage::new(shape.0 as u32, shape.1 as u32);

    for i in 0..shape.0 {
        for j in 0..shape.1 {
            let l = (x[[i, j]] / vmax * 256.0).max(0.0).min(255.0) as u8;
            img.put_pixel(i as u32, j as u32, Rgb([l, l, l]));
        }
    }

    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}

/// Save a field as a PNG frame on a fixed cold-to-hot colour scale.
///
/// Values are clamped to `[vmin, vmax]` before mapping, so the scale stays
/// the same across a whole frame sequence.
pub fn save_heatmap(
    prefix: &str,
    index: usize,
    x: &Array2<f64>,
    vmin: f64,
    vmax: f64,
) -> anyhow::Result<()> {
    let shape = x.dim();

    let mut img = RgbImage::new(shape.0 as u32, shape.1 as u32);

    for i in 0..shape.0 {
        for j in 0..shape.1 {
            let t = ((x[[i, j]] - vmin) / (vmax - vmin)).max(0.0).min(1.0);
            img.put_pixel(i as u32, j as u32, heat_rgb(t));
        }
    }

    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cold blue through white to hot red, `t` in `[0, 1]`.
fn heat_rgb(t: f64) -> Rgb<u8> {
    const COLD: [f64; 3] = [0.2, 0.4, 1.0];
    const HOT: [f64; 3] = [1.0, 0.3, 0.1];

    let mut rgb = [0u8; 3];
    for (c, e) in rgb.iter_mut().enumerate() {
        let v = if t < 0.5 {
            lerp(COLD[c], 1.0, t * 2.0)
        } else {
            lerp(1.0, HOT[c], (t - 0.5) * 2.0)
        };
        *e = (v * 255.0).round() as u8;
    }

    Rgb(rgb)
}
