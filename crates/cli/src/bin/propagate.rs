use anyhow::{Context, bail};
use clap::Parser;
use relative_motion::frames::Frame;
use relative_motion::kepler::{derive_angular_momentum, true_anomaly_at_time};
use relative_motion::stm::{propagate_hcw, propagate_ya};
use relative_motion::types::constants::MU_EARTH;
use relative_motion::types::{OrbitalElements, RelativeState, Vector3};
use relmo_cli::{format_state, init_tracing, parse_vector3, state_header};
use tracing::info;

/// Propagate a single relative state with the elliptic closed-form solver.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "One-shot analytical relative-motion propagation"
)]
struct Cli {
    /// Chief eccentricity in [0, 1)
    #[arg(long, default_value_t = 0.0)]
    eccentricity: f64,

    /// Chief specific angular momentum (m^2/s)
    #[arg(long, conflicts_with = "rev_per_day")]
    angular_momentum: Option<f64>,

    /// Chief mean motion (rev/day), used to derive the angular momentum
    #[arg(long)]
    rev_per_day: Option<f64>,

    /// Gravitational parameter (m^3/s^2)
    #[arg(long, default_value_t = MU_EARTH)]
    mu: f64,

    /// Initial true anomaly (rad)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    theta0: f64,

    /// Elapsed time (s); negative propagates backwards
    #[arg(long, allow_negative_numbers = true)]
    dt: f64,

    /// Frame of the input and output states (RIC or LVLH)
    #[arg(long, default_value = "RIC")]
    frame: Frame,

    /// Initial relative position "p1,p2,p3" (m)
    #[arg(long, value_parser = parse_vector3, allow_negative_numbers = true)]
    position: Vector3,

    /// Initial relative velocity "v1,v2,v3" (m/s)
    #[arg(long, value_parser = parse_vector3, allow_negative_numbers = true)]
    velocity: Vector3,

    /// Also evaluate the circular (HCW) closed form; requires e = 0
    #[arg(long, default_value_t = false)]
    hcw: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let h = match (cli.angular_momentum, cli.rev_per_day) {
        (Some(h), _) => h,
        (None, Some(rev_per_day)) => derive_angular_momentum(cli.eccentricity, rev_per_day, cli.mu)
            .context("deriving angular momentum")?,
        (None, None) => bail!("one of --angular-momentum or --rev-per-day is required"),
    };
    let elements = OrbitalElements::new(cli.eccentricity, h, cli.mu);
    let initial = RelativeState::new(cli.position, cli.velocity);

    let theta_f = true_anomaly_at_time(&elements, cli.theta0, cli.dt);
    info!(theta_f, "final true anomaly");
    let state = propagate_ya(&initial, &elements, cli.theta0, theta_f, cli.dt, cli.frame)?;

    println!("=== Relative Motion ({}) ===", cli.frame);
    println!("Eccentricity    : {:.6}", elements.eccentricity);
    println!("Ang. momentum   : {:.6e} m^2/s", elements.angular_momentum);
    println!("Period          : {:.3} s", elements.period());
    println!(
        "True anomaly    : {:.9} -> {:.9} rad over {:.3} s",
        cli.theta0, theta_f, cli.dt
    );
    println!();
    println!("{}", state_header("state"));
    println!("{}", format_state("initial", &initial));
    println!("{}", format_state("YA", &state));

    if cli.hcw {
        if elements.eccentricity != 0.0 {
            bail!("--hcw requires a circular chief orbit (eccentricity 0)");
        }
        let reference = propagate_hcw(&initial, elements.mean_motion(), cli.dt, cli.frame);
        let (dpos, dvel) = state.distance_to(&reference);
        println!("{}", format_state("HCW", &reference));
        println!();
        println!("|YA - HCW|      : {dpos:.3e} m, {dvel:.3e} m/s");
    }

    Ok(())
}
