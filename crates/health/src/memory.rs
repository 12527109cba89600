//! Process memory sampling.

use sysinfo::System;

use crate::report::MemoryUsage;
use crate::{HealthError, Result};

const BYTES_PER_MIB: f64 = (1024 * 1024) as f64;

fn to_mib(bytes: u64) -> u64 {
    (bytes as f64 / BYTES_PER_MIB).round() as u64
}

/// Samples resident and virtual memory for the current process.
///
/// `used` is the resident set, `total` the virtual mapping, and `external`
/// the non-resident remainder, each rounded to the nearest MiB.
pub fn sample() -> Result<MemoryUsage> {
    let pid = sysinfo::get_current_pid().map_err(|err| HealthError::Memory(err.to_string()))?;

    let mut system = System::new();
    if !system.refresh_process(pid) {
        return Err(HealthError::Memory(format!("process {pid} not visible")));
    }
    let process = system
        .process(pid)
        .ok_or_else(|| HealthError::Memory(format!("process {pid} not visible")))?;

    let resident = process.memory();
    let virtual_size = process.virtual_memory();

    Ok(MemoryUsage {
        used: to_mib(resident),
        total: to_mib(virtual_size),
        external: to_mib(virtual_size.saturating_sub(resident)),
    })
}
