//! Connectivity report for a sample two-row facility.
//!
//! Purpose
//! - Show the full engine round trip on a layout shaped like the host UI's
//!   starter floor: two rows of storage units with bottom doors, a column of
//!   units with left doors, a triangular corner office, and one access point.
//! - Print the proximity graph in both modes, the BFS tree from lock 0, and the
//!   AP coverage, as JSON on stdout.
//!
//! The builders' `debug!` events go to stderr.

use floorlink::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn sample_layout() -> Layout {
    let mut units = Vec::new();
    for (row, y) in [(0, 150.0), (1, 300.0)] {
        for k in 0..4 {
            let id = format!("{}{k}", ["A", "B"][row]);
            units.push(
                Unit::rect(id, 250.0 + 75.0 * k as f64, y, 75.0, 75.0)
                    .with_door(Door::locked(Side::Bottom)),
            );
        }
    }
    for k in 0..3 {
        units.push(
            Unit::rect(format!("C{k}"), 650.0, 150.0 + 75.0 * k as f64, 75.0, 75.0)
                .with_door(Door::locked(Side::Left)),
        );
    }
    units.push(
        Unit::triangle("office", Orientation::Se, 100.0, 450.0, 100.0, 100.0)
            .with_door(Door::locked(Side::Hypotenuse)),
    );
    Layout {
        units,
        access_points: vec![AccessPoint::new("ap-main", 450.0, 450.0, 400.0)],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SubscriberBuilder::default()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let params = Params::default();
    params.validate()?;
    let layout = sample_layout();
    let locks = layout.locks();

    let exhaustive = layout.proximity_graph(&params, GraphMode::Exhaustive);
    let nearest = layout.proximity_graph(&params, GraphMode::default());
    let reach = layout.reachability(&params, 0);
    let unreachable = reach
        .as_ref()
        .map(|r| r.unreachable(locks.len()))
        .unwrap_or_default();

    let report = serde_json::json!({
        "version": floorlink::VERSION,
        "params": params,
        "locks": locks,
        "edges": { "exhaustive": exhaustive, "nearest": nearest },
        "reachability": reach,
        "unreachable": unreachable,
        "apLinks": layout.ap_links(&params),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
