//! Export helpers for CSV tables and JSON summaries.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod table {
    use std::io::{self, Write};

    use serde::Serialize;

    /// CSV row emitted for one propagation sample.
    ///
    /// State components follow the scenario frame's axis order. The HCW columns
    /// stay empty when no circular reference was computed.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record {
        pub time_s: f64,
        pub theta_rad: f64,
        pub x_m: f64,
        pub y_m: f64,
        pub z_m: f64,
        pub vx_m_s: f64,
        pub vy_m_s: f64,
        pub vz_m_s: f64,
        pub hcw_dpos_m: Option<f64>,
        pub hcw_dvel_m_s: Option<f64>,
    }

    /// Write all records, header first.
    pub fn write_records<W: Write>(writer: W, records: &[Record]) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record)?;
        }
        csv.flush()
    }
}

pub mod summary {
    use std::io::{self, Write};

    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// Final relative state as exported in the summary.
    #[derive(Debug, Clone, Serialize)]
    pub struct FinalState {
        pub time_s: f64,
        pub theta_rad: f64,
        pub position_m: [f64; 3],
        pub velocity_m_s: [f64; 3],
    }

    /// JSON envelope describing a finished sweep.
    #[derive(Debug, Clone, Serialize)]
    pub struct Summary<'a> {
        pub scenario: &'a str,
        pub frame: &'a str,
        pub eccentricity: f64,
        pub angular_momentum_m2_s: f64,
        pub mu_m3_s2: f64,
        pub period_s: f64,
        pub sample_count: usize,
        pub final_state: Option<FinalState>,
        pub max_hcw_dpos_m: Option<f64>,
        pub max_hcw_dvel_m_s: Option<f64>,
    }

    /// Pretty-print the summaries as one JSON array, one element per scenario.
    pub fn write_summaries<W: Write>(
        mut writer: W,
        summaries: &[Summary<'_>],
    ) -> io::Result<()> {
        to_writer_pretty(&mut writer, summaries)?;
        writeln!(writer)?;
        writer.flush()
    }
}
