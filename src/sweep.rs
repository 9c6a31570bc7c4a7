//! Scenario sweep: propagate one initial relative state over a grid of elapsed times.

use relmo_config::{OrbitSizeConfig, ScenarioConfig};
use relmo_core::{OrbitalElements, RelativeState};
use relmo_export::summary::{FinalState, Summary};
use relmo_export::table::Record;
use relmo_frames::Frame;
use relmo_kepler::{KeplerError, derive_angular_momentum, orbital_period, true_anomaly_at_time};
use relmo_stm::{PropagationError, propagate_hcw, propagate_ya};
use thiserror::Error;
use tracing::debug;

/// Upper bound on the number of samples a single sweep may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Kepler(#[from] KeplerError),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error("step must be a positive finite number of seconds, got {0}")]
    InvalidStep(f64),
    #[error("duration must be a non-negative finite number of seconds, got {0}")]
    InvalidDuration(f64),
    #[error("sweep would produce more than {MAX_SAMPLES} samples")]
    TooManySamples,
}

/// State at one sample time, in the scenario frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_s: f64,
    pub theta_rad: f64,
    pub state: RelativeState,
    /// Circular closed-form reference, present only for e = 0 with comparison enabled.
    pub hcw: Option<RelativeState>,
}

impl Sample {
    /// Position and velocity distance between the elliptic solution and the HCW reference.
    pub fn hcw_deviation(&self) -> Option<(f64, f64)> {
        self.hcw.map(|reference| self.state.distance_to(&reference))
    }
}

#[derive(Debug, Clone)]
pub struct SweepReport {
    pub name: String,
    pub frame: Frame,
    pub elements: OrbitalElements,
    pub period_s: f64,
    pub samples: Vec<Sample>,
}

impl SweepReport {
    /// Flatten the samples into CSV rows.
    pub fn records(&self) -> Vec<Record> {
        self.samples
            .iter()
            .map(|sample| {
                let deviation = sample.hcw_deviation();
                let [x, y, z] = sample.state.position;
                let [vx, vy, vz] = sample.state.velocity;
                Record {
                    time_s: sample.time_s,
                    theta_rad: sample.theta_rad,
                    x_m: x,
                    y_m: y,
                    z_m: z,
                    vx_m_s: vx,
                    vy_m_s: vy,
                    vz_m_s: vz,
                    hcw_dpos_m: deviation.map(|d| d.0),
                    hcw_dvel_m_s: deviation.map(|d| d.1),
                }
            })
            .collect()
    }

    /// Largest HCW deviation over the sweep, if any sample carries a reference.
    pub fn max_hcw_deviation(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .filter_map(Sample::hcw_deviation)
            .reduce(|acc, d| (acc.0.max(d.0), acc.1.max(d.1)))
    }

    pub fn summary(&self) -> Summary<'_> {
        let max_deviation = self.max_hcw_deviation();
        Summary {
            scenario: &self.name,
            frame: self.frame.name(),
            eccentricity: self.elements.eccentricity,
            angular_momentum_m2_s: self.elements.angular_momentum,
            mu_m3_s2: self.elements.mu,
            period_s: self.period_s,
            sample_count: self.samples.len(),
            final_state: self.samples.last().map(|sample| FinalState {
                time_s: sample.time_s,
                theta_rad: sample.theta_rad,
                position_m: sample.state.position,
                velocity_m_s: sample.state.velocity,
            }),
            max_hcw_dpos_m: max_deviation.map(|d| d.0),
            max_hcw_dvel_m_s: max_deviation.map(|d| d.1),
        }
    }
}

/// Build the chief orbit from a scenario, deriving `h` from mean motion when needed.
pub fn resolve_elements(config: &ScenarioConfig) -> Result<OrbitalElements, SweepError> {
    let h = match config.orbit {
        OrbitSizeConfig::AngularMomentum {
            angular_momentum_m2_s,
        } => angular_momentum_m2_s,
        OrbitSizeConfig::MeanMotion {
            mean_motion_rev_per_day,
        } => derive_angular_momentum(
            config.eccentricity,
            mean_motion_rev_per_day,
            config.mu_m3_s2,
        )?,
    };
    Ok(OrbitalElements::new(config.eccentricity, h, config.mu_m3_s2))
}

/// Elapsed times `0, step, 2 step, ...` with the final sample clamped to `duration_s`.
pub fn sample_times(duration_s: f64, step_s: f64) -> Result<Vec<f64>, SweepError> {
    if !duration_s.is_finite() || duration_s < 0.0 {
        return Err(SweepError::InvalidDuration(duration_s));
    }
    if !step_s.is_finite() || step_s <= 0.0 {
        return Err(SweepError::InvalidStep(step_s));
    }
    if duration_s / step_s > MAX_SAMPLES as f64 {
        return Err(SweepError::TooManySamples);
    }

    let slack = step_s * 1e-9;
    let mut times = Vec::new();
    let mut index = 0_usize;
    loop {
        let t = index as f64 * step_s;
        if t >= duration_s - slack {
            break;
        }
        times.push(t);
        index += 1;
    }
    times.push(duration_s);
    Ok(times)
}

/// Run a scenario through the elliptic solver, with the HCW reference on circular orbits.
pub fn run_sweep(config: &ScenarioConfig) -> Result<SweepReport, SweepError> {
    let elements = resolve_elements(config)?;
    let times = sample_times(config.duration_s, config.step_s)?;
    let initial = RelativeState::from(config.initial);
    let theta0 = config.theta0_rad;
    let compare = config.compare_hcw && elements.eccentricity == 0.0;
    let n = elements.mean_motion();

    debug!(
        scenario = %config.name,
        samples = times.len(),
        compare,
        "running sweep"
    );

    let mut samples = Vec::with_capacity(times.len());
    for time_s in times {
        let theta_rad = true_anomaly_at_time(&elements, theta0, time_s);
        let state = propagate_ya(&initial, &elements, theta0, theta_rad, time_s, config.frame)?;
        let hcw = compare.then(|| propagate_hcw(&initial, n, time_s, config.frame));
        samples.push(Sample {
            time_s,
            theta_rad,
            state,
            hcw,
        });
    }

    Ok(SweepReport {
        name: config.name.clone(),
        frame: config.frame,
        elements,
        period_s: orbital_period(&elements),
        samples,
    })
}
