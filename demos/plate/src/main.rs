use cgmath::point2;
use clap::Parser;
use heatplate::d2::{Frames, HotCircle, PlateParams};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Animate heat spreading out of a hot disc on a cool plate.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Plate width
    #[arg(long, default_value_t = 10.0)]
    width: f64,
    /// Plate height
    #[arg(long, default_value_t = 10.0)]
    height: f64,
    #[arg(long, default_value_t = 0.1)]
    dx: f64,
    #[arg(long, default_value_t = 0.1)]
    dy: f64,
    /// Thermal diffusivity
    #[arg(short = 'D', long, default_value_t = 10.0)]
    diffusivity: f64,
    #[arg(long, default_value_t = 300.0)]
    t_cool: f64,
    #[arg(long, default_value_t = 700.0)]
    t_hot: f64,
    /// Hot disc centre, x
    #[arg(long, default_value_t = 5.0)]
    cx: f64,
    /// Hot disc centre, y
    #[arg(long, default_value_t = 5.0)]
    cy: f64,
    #[arg(long, default_value_t = 2.0)]
    radius: f64,
    /// Number of PNG frames to write
    #[arg(short = 'n', long, default_value_t = 1010)]
    frames: usize,
    /// Restart the plate after this many frames (0 never restarts)
    #[arg(long, default_value_t = 1010)]
    restart_every: usize,
    /// File name prefix under `out/`
    #[arg(long, default_value = "plate")]
    prefix: String,
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let params = PlateParams {
        width: args.width,
        height: args.height,
        dx: args.dx,
        dy: args.dy,
        diffusivity: args.diffusivity,
        t_cool: args.t_cool,
        t_hot: args.t_hot,
    };
    let circle = HotCircle::new(point2(args.cx, args.cy), args.radius)?;
    let mut frames = Frames::new(&params, circle)?;

    info!(
        nx = frames.grid().nx(),
        ny = frames.grid().ny(),
        dt = frames.grid().dt(),
        "plate ready"
    );

    std::fs::create_dir_all("out")?;

    for f in 1..=args.frames {
        let frame = frames.next().expect("plate frames never end");

        image_util::save_heatmap(
            &args.prefix,
            f,
            &frame.field,
            params.t_cool,
            params.t_hot,
        )?;

        if args.restart_every > 0 && f % args.restart_every == 0 {
            frames.restart();
        }

        eprint!("\r {} / {} ({:.1} ms)", f, args.frames, frame.elapsed * 1000.0);
    }
    eprintln!();

    info!(frames = args.frames, "done");

    Ok(())
}
