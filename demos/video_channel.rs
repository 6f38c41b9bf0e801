//! Video Channel
//!
//! Channels are subjects, viewers are observers. Every upload is announced
//! to the channel's current subscribers in the order they subscribed.
//!
//! Key concepts:
//! - Several subjects can share the same observer
//! - Unsubscribing only affects later uploads
//! - A failing subscriber does not stop the others from being notified
//!
//! Run with: cargo run --example video_channel

use signalbox::observer::{Observer, ObserverError, Subject};
use std::sync::Arc;

#[derive(Clone, Debug)]
struct Upload {
    channel: String,
    title: String,
}

struct Channel {
    name: String,
    subscribers: Subject<Upload>,
}

impl Channel {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subscribers: Subject::new(),
        }
    }

    fn upload_video(&self, title: &str) {
        println!("{} uploaded video named: {}", self.name, title);
        let upload = Upload {
            channel: self.name.clone(),
            title: title.to_string(),
        };
        if let Err(report) = self.subscribers.publish(&upload) {
            for failure in &report.failures {
                println!("  (not delivered: {failure})");
            }
        }
    }
}

struct Viewer {
    name: String,
}

impl Observer<Upload> for Viewer {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, upload: &Upload) -> Result<(), ObserverError> {
        println!(
            "Hey {}! {} has posted a new video named: {}, check it out if you're interested.",
            self.name, upload.channel, upload.title
        );
        Ok(())
    }
}

/// A viewer whose inbox is full.
struct Offline;

impl Observer<Upload> for Offline {
    fn name(&self) -> &str {
        "Offline"
    }

    fn receive(&self, _upload: &Upload) -> Result<(), ObserverError> {
        Err(ObserverError::Unavailable {
            observer: "Offline".to_string(),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let tech_burner = Channel::new("TechBurner Channel");
    let t_series = Channel::new("TSeries Channel");

    let max: Arc<dyn Observer<Upload>> = Arc::new(Viewer {
        name: "Max".to_string(),
    });
    let jack: Arc<dyn Observer<Upload>> = Arc::new(Viewer {
        name: "Jack".to_string(),
    });

    tech_burner.subscribers.subscribe(Arc::clone(&max));
    tech_burner.subscribers.subscribe(Arc::clone(&jack));
    t_series.subscribers.subscribe(Arc::clone(&max));
    let jack_on_t_series = t_series.subscribers.subscribe(Arc::clone(&jack));

    tech_burner.upload_video("Design patterns");
    tech_burner.upload_video("Basic Programming");

    t_series.upload_video("New Bollywood movies");
    t_series.subscribers.unsubscribe(jack_on_t_series);
    t_series.upload_video("New Tollywood movies");

    tech_burner.subscribers.subscribe(Arc::new(Offline));
    tech_burner.upload_video("Observer pattern");
}
