use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use harmonist::cli::Args;
use harmonist::harmony::{self, Harmony};
use harmonist::preview;
use harmonist::tui::{self, TuiApp};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let locked = harmony::parse_locked_colors(args.colors.as_deref().unwrap_or(""))
        .context("failed to read locked colors")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.tui {
        let harmony: Harmony = args.harmony.parse()?;
        return tui::run(TuiApp::new(locked, args.count, harmony, rng));
    }

    let palette = harmony::generate_named(&locked, args.count, &args.harmony, &mut rng);
    info!(
        "{} colors ({} locked) with {}",
        palette.len(),
        locked.len(),
        args.harmony
    );

    let rendered = args.format.render(&palette);
    match &args.output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("failed to write palette to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    if args.preview {
        preview::render_swatches(&mut std::io::stdout().lock(), &palette)
            .context("failed to print preview")?;
    }

    Ok(())
}
