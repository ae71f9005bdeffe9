//! Simulated reconcile pass: diff the desired configuration against the
//! applied one, send the changes out in bounded batches, and stop retrying
//! on terminal errors.
//!
//! Run with:
//! ```shell
//! cargo run --example reconcile_loop
//! ```

use std::collections::BTreeMap;

use parametreur::{chunk_parameters, compute_difference, ParameterError, ParameterSet, Result};

/// Downstream APIs commonly cap the number of parameters per modify call.
const MAX_PARAMETERS_PER_CALL: usize = 2;

/// Pretend engine that accepts a fixed catalog of modifiable parameters.
struct Engine {
    catalog: BTreeMap<&'static str, bool>,
    applied: ParameterSet,
}

impl Engine {
    fn new() -> Self {
        let catalog = BTreeMap::from([
            ("log_statement", true),
            ("max_connections", true),
            ("shared_buffers", true),
            ("wal_level", false),
        ]);
        Self {
            catalog,
            applied: ParameterSet::new(),
        }
    }

    fn modify(&mut self, batch: &ParameterSet) -> Result<()> {
        for name in batch.names() {
            match self.catalog.get(name.as_str()) {
                None => return Err(ParameterError::unknown_parameter(name)),
                Some(false) => return Err(ParameterError::unmodifiable_parameter(name)),
                Some(true) => {}
            }
        }
        self.applied.extend(batch.clone());
        Ok(())
    }
}

fn reconcile(engine: &mut Engine, desired: &ParameterSet) -> Result<()> {
    let diff = compute_difference(Some(desired), Some(&engine.applied));
    if diff.is_synced() {
        println!("nothing to do");
        return Ok(());
    }

    for batch in chunk_parameters(&diff.added, MAX_PARAMETERS_PER_CALL)? {
        if batch.is_empty() {
            continue;
        }
        println!("modifying {} parameter(s)", batch.len());
        engine.modify(&batch)?;
    }

    for name in diff.removed.names() {
        println!("resetting {name} to the engine default");
        engine.applied.remove(name);
    }

    Ok(())
}

fn main() {
    let mut engine = Engine::new();

    let mut desired = ParameterSet::new();
    desired.set("max_connections", "500");
    desired.set("log_statement", "ddl");
    desired.set("shared_buffers", "2GB");

    if let Err(err) = reconcile(&mut engine, &desired) {
        eprintln!("reconcile failed: {err}");
        return;
    }
    println!("first pass applied: {} parameter(s)", engine.applied.len());

    // A second pass with the same input converges to a no-op.
    if let Err(err) = reconcile(&mut engine, &desired) {
        eprintln!("reconcile failed: {err}");
        return;
    }

    // A typo in the desired configuration is rejected by the engine. The
    // error is terminal: requeueing cannot help until the user fixes it.
    desired.set("max_connectoins", "501");
    match reconcile(&mut engine, &desired) {
        Ok(()) => unreachable!("the engine must reject the typo"),
        Err(err) => {
            eprintln!("reconcile failed: {err}");
            if err.is_terminal() {
                eprintln!("giving up until the requested configuration changes");
            }
        }
    }
}
