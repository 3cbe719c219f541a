use heat2d::d2::{check_field, step, DiffusionParams};
use ndarray::Array;

fn main() -> anyhow::Result<()> {
    const N: usize = 400;
    const N_FRAME: usize = 64;

    let params = DiffusionParams::with_max_dt(2.0, 1.0)?;

    let mut u = Array::zeros((N, N));
    u[[N / 2, N / 2]] = 1000.0;
    check_field(&u)?;

    std::fs::create_dir_all("out")?;

    for f in 1..=N_FRAME {
        image_util::save_monochrome("hotspot", f, &u, 1000.0)?;
        u = step(&u, &params);

        eprint!("\r {} / {}", f, N_FRAME);
    }
    eprintln!();

    Ok(())
}
