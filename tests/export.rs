use relative_motion::export::summary::{FinalState, Summary, write_summaries};
use relative_motion::export::table::{Record, write_records};
use relative_motion::export::writer_for_path;

fn record(time_s: f64, hcw: Option<(f64, f64)>) -> Record {
    Record {
        time_s,
        theta_rad: 0.5,
        x_m: 1.0,
        y_m: 2.0,
        z_m: 3.0,
        vx_m_s: 0.1,
        vy_m_s: 0.2,
        vz_m_s: 0.3,
        hcw_dpos_m: hcw.map(|d| d.0),
        hcw_dvel_m_s: hcw.map(|d| d.1),
    }
}

#[test]
fn csv_has_header_and_blank_reference_columns() {
    let mut buffer = Vec::new();
    write_records(&mut buffer, &[record(0.0, None), record(60.0, Some((1e-9, 2e-12)))]).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "time_s,theta_rad,x_m,y_m,z_m,vx_m_s,vy_m_s,vz_m_s,hcw_dpos_m,hcw_dvel_m_s"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(",,"));
    assert!(lines[2].starts_with("60.0,"));
}

#[test]
fn summaries_form_one_json_array() {
    let summary = Summary {
        scenario: "demo",
        frame: "RIC",
        eccentricity: 0.1,
        angular_momentum_m2_s: 5.409e10,
        mu_m3_s2: 3.986_004_418e14,
        period_s: 5_800.0,
        sample_count: 2,
        final_state: Some(FinalState {
            time_s: 60.0,
            theta_rad: 0.1,
            position_m: [1.0, 2.0, 3.0],
            velocity_m_s: [0.0, 0.0, 0.0],
        }),
        max_hcw_dpos_m: None,
        max_hcw_dvel_m_s: None,
    };
    let mut buffer = Vec::new();
    let second = Summary {
        scenario: "other",
        final_state: None,
        ..summary.clone()
    };
    write_summaries(&mut buffer, &[summary, second]).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["scenario"], "demo");
    assert_eq!(entries[0]["sample_count"], 2);
    assert_eq!(entries[0]["final_state"]["position_m"][2], 3.0);
    assert!(entries[0]["max_hcw_dpos_m"].is_null());
    assert_eq!(entries[1]["scenario"], "other");
    assert!(entries[1]["final_state"].is_null());
}

#[test]
fn writer_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/table.csv");
    {
        let writer = writer_for_path(&path).unwrap();
        write_records(writer, &[record(0.0, None)]).unwrap();
    }
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("time_s,"));
}
