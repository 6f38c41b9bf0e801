//! Traffic Light
//!
//! Drives the three-colour cycle through eleven changes, printing the
//! light after each one.
//!
//! Key concepts:
//! - The host delegates every change to the active state
//! - Each colour knows only its successor
//! - Reporting before a colour is set is an error, not a default
//!
//! Run with: cargo run --example traffic_light

use signalbox::{StateError, StateHost, TrafficLight};

const CHANGES: usize = 11;

fn main() -> Result<(), StateError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut traffic_light = StateHost::new();
    traffic_light.set_state(TrafficLight::Red);

    for _ in 0..CHANGES {
        traffic_light.transition()?;
        println!("{}", traffic_light.report()?);
    }

    Ok(())
}
