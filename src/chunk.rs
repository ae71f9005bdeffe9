//! Bounded-size partitioning of parameter sets for batched API calls.

use std::mem;

use tracing::debug;

use crate::error::{ParameterError, Result};
use crate::set::ParameterSet;

/// Splits `input` into chunks of at most `chunk_size` entries each.
///
/// Every entry lands in exactly one chunk and at least one chunk is always
/// returned, so an empty input yields a single empty chunk. Fails when
/// `chunk_size` is zero.
pub fn chunk_parameters(input: &ParameterSet, chunk_size: usize) -> Result<Vec<ParameterSet>> {
    ensure_chunk_size(chunk_size)?;

    let mut chunks = Vec::new();
    let mut chunk = ParameterSet::new();
    for (name, value) in input.iter() {
        if chunk.len() == chunk_size {
            chunks.push(mem::take(&mut chunk));
        }
        chunk.insert(name.clone(), value.clone());
    }
    chunks.push(chunk);

    debug!(
        entries = input.len(),
        chunks = chunks.len(),
        "chunked parameter set"
    );

    Ok(chunks)
}

/// Splits `input` with the sealing rule of the original splitter.
///
/// Kept for parity with deployed behavior: the entry that finds the current
/// chunk full seals it and is itself discarded, joining neither the sealed
/// chunk nor the next one. One entry is therefore lost per chunk boundary
/// crossed. Use [`chunk_parameters`] unless that exact historical behavior
/// is required. Fails when `chunk_size` is zero.
pub fn chunk_parameters_compat(
    input: &ParameterSet,
    chunk_size: usize,
) -> Result<Vec<ParameterSet>> {
    ensure_chunk_size(chunk_size)?;

    let mut chunks = Vec::new();
    let mut chunk = ParameterSet::new();
    let mut filled = 0;
    for (name, value) in input.iter() {
        if filled < chunk_size {
            chunk.insert(name.clone(), value.clone());
            filled += 1;
        } else {
            // Seal the chunk; the sealing entry is dropped, not carried over.
            chunks.push(mem::take(&mut chunk));
            filled = 0;
        }
    }
    chunks.push(chunk);

    debug!(
        entries = input.len(),
        chunks = chunks.len(),
        "chunked parameter set (compat)"
    );

    Ok(chunks)
}

/// Rejects chunk sizes that cannot produce a valid partition.
fn ensure_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(ParameterError::invalid_chunk_size(chunk_size));
    }
    Ok(())
}
