//! Binary PCB files.
//!
//! A PCB file is a flat sequence of fixed-size records, one per process,
//! in native byte order:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | remaining burst time (`u32`) |
//! | 4 | 4 | priority (`u32`) |
//! | 8 | 4 | arrival (`u32`) |
//! | 12 | 1 | started (`0` / non-zero) |
//! | 13 | 3 | padding |
//!
//! This matches the in-memory layout of the equivalent C struct, so files
//! written by C tooling on the same platform load unchanged.

use std::fs;
use std::path::Path;

use bytemuck::{Pod, Zeroable};
use log::{info, warn};

use crate::error::LoadError;
use crate::models::ProcessControlBlock;

/// Size of one on-disk record in bytes.
pub const RECORD_SIZE: usize = std::mem::size_of::<PcbRecord>();

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct PcbRecord {
    remaining_burst_time: u32,
    priority: u32,
    arrival: u32,
    started: u8,
    _padding: [u8; 3],
}

impl From<&ProcessControlBlock> for PcbRecord {
    fn from(pcb: &ProcessControlBlock) -> Self {
        Self {
            remaining_burst_time: pcb.remaining_burst_time,
            priority: pcb.priority,
            arrival: pcb.arrival,
            started: u8::from(pcb.started),
            _padding: [0; 3],
        }
    }
}

impl From<PcbRecord> for ProcessControlBlock {
    fn from(record: PcbRecord) -> Self {
        Self {
            remaining_burst_time: record.remaining_burst_time,
            priority: record.priority,
            arrival: record.arrival,
            started: record.started != 0,
        }
    }
}

/// Decodes a byte buffer into process control blocks.
///
/// Fails if the buffer is empty or not a whole number of records.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<ProcessControlBlock>, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(LoadError::Truncated {
            len: bytes.len(),
            record_size: RECORD_SIZE,
        });
    }

    Ok(bytes
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| ProcessControlBlock::from(bytemuck::pod_read_unaligned::<PcbRecord>(chunk)))
        .collect())
}

/// Encodes process control blocks into the on-disk record format.
pub fn encode_records(pcbs: &[ProcessControlBlock]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pcbs.len() * RECORD_SIZE);
    for pcb in pcbs {
        bytes.extend_from_slice(bytemuck::bytes_of(&PcbRecord::from(pcb)));
    }
    bytes
}

/// Loads a ready queue from a PCB file.
pub fn load_process_control_blocks(
    path: impl AsRef<Path>,
) -> Result<Vec<ProcessControlBlock>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let pcbs = decode_records(&bytes).inspect_err(|err| {
        warn!("rejecting {}: {}", path.display(), err);
    })?;
    info!("loaded {} processes from {}", pcbs.len(), path.display());
    Ok(pcbs)
}

/// Writes a ready queue to a PCB file, replacing any existing file.
pub fn save_process_control_blocks(
    path: impl AsRef<Path>,
    pcbs: &[ProcessControlBlock],
) -> Result<(), LoadError> {
    let path = path.as_ref();
    fs::write(path, encode_records(pcbs))?;
    info!("wrote {} processes to {}", pcbs.len(), path.display());
    Ok(())
}
