use heat2d::d2::{check_field, step, DiffusionParams};

fn main() -> anyhow::Result<()> {
    const N: usize = 100;
    const N_FRAME: usize = 500;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "smiley.jpg".to_string());

    let params = DiffusionParams::with_max_dt(2.0, 1.0)?;

    let mut u = image_util::load_field(&path, N)?;
    check_field(&u)?;

    std::fs::create_dir_all("out")?;

    for f in 1..=N_FRAME {
        image_util::save_heatmap("animate", f, &u, 0.0, 255.0)?;
        u = step(&u, &params);

        eprint!("\r {} / {}", f, N_FRAME);
    }
    eprintln!();

    Ok(())
}
