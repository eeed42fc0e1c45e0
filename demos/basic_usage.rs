//! Basic emitter usage example
//!
//! Sends a handful of events to a Graylog TCP input, falling back to
//! `logfile.log` when the collector is not reachable.
//!
//! Run with: cargo run --example basic_usage

use gelf_emitter::gelf_warn;
use gelf_emitter::prelude::*;
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== GELF Emitter - Basic Usage Example ===\n");

    let mut config = EmitterConfig::new();
    config.set_fallback_to_file(true);
    config.set_error_handler(|err| println!("Error {}", err));
    config.set_endpoint_address("172.22.29.1");
    config.set_endpoint_port(12201);
    config.set_transport("tcp");
    config.set_app_name("DemoApp");
    config.set_component_name("DemoComponent");

    for i in 0..5 {
        let second = chrono::Utc::now().format("%S");
        let outcome = config
            .new_event()
            .info()
            .add_param("iteration", i.to_string())
            .message(format!("{} Test", second));
        println!("event {}: {}", i, outcome);
        thread::sleep(Duration::from_secs(1));
    }

    let outcome = gelf_warn!(config, "finished after {} events", 5);
    println!("summary event: {}", outcome);

    let metrics = config.metrics();
    println!(
        "\ndelivered={} fallback={} reported={}",
        metrics.delivered(),
        metrics.fallback_written(),
        metrics.reported()
    );
}
