//! Basic example showcasing the three-way parameter diff.
//!
//! Run with:
//! ```shell
//! cargo run --example basic_usage
//! ```

use parametreur::{compute_difference, ParameterSet};

fn main() {
    // The configuration the user asked for.
    let mut desired = ParameterSet::new();
    desired.set("max_connections", "500");
    desired.set("log_statement", "ddl");
    desired.track("shared_buffers"); // tracked, but left to the engine default

    // What the engine currently reports.
    let mut current = ParameterSet::new();
    current.set("max_connections", "100");
    current.set("log_statement", "ddl");
    current.set("idle_timeout", "60");

    let diff = compute_difference(Some(&desired), Some(&current));

    println!("to apply:");
    for (name, value) in diff.added.iter() {
        println!("  {name} = {}", value.as_deref().unwrap_or("<unset>"));
    }
    println!("unchanged:");
    for name in diff.unchanged.names() {
        println!("  {name}");
    }
    println!("to reset:");
    for (name, value) in diff.removed.iter() {
        println!("  {name} (was {})", value.as_deref().unwrap_or("<unset>"));
    }

    println!("synced: {}", diff.is_synced());
}
