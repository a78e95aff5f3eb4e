// Author: Lukas Bower
// Purpose: Two-phase shared-heap descriptor exchange through the config blob.

//! Handoff of the shared crypto-heap descriptor between boot stages.
//!
//! The earlier stage records the descriptor with [`write_heap_info`] before
//! transferring control; the later stage retrieves it with
//! [`read_heap_info`]. The phases never overlap and the blob itself is the
//! only state carried between them.

use log::error;

use crate::config::{self, ConfigError};
use crate::fdt;

/// Two-cell property holding the shared heap base address.
pub const PROP_HEAP_ADDR: &str = "mbedtls_heap_addr";

/// Single-cell property holding the shared heap size in bytes.
pub const PROP_HEAP_SIZE: &str = "mbedtls_heap_size";

const HEAP_ADDR_CELLS: usize = 2;
const HEAP_SIZE_CELLS: usize = 1;

/// Address and size of the shared crypto working heap.
///
/// Not `Copy`: [`write_heap_info`] consumes the descriptor by value, so a
/// caller cannot reuse the written values without re-reading them from the
/// blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapDescriptor {
    /// Base address of the heap region.
    pub addr: u64,
    /// Size of the heap region in bytes.
    pub size: u32,
}

/// Failure classes of the producer phase.
///
/// Callers must branch on the variant: a platform without the shared-heap
/// property slots reports [`HandoffError::Unsupported`], which the producer
/// may tolerate, while [`HandoffError::Malformed`] means the whole config
/// path is untrustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    /// The blob failed validation or the marker node is absent.
    #[error("config blob malformed or `arm,tb_fw` node missing")]
    Malformed,
    /// The heap property slots are not present in the config.
    #[error("shared-heap properties not present in config blob")]
    Unsupported,
}

/// Records the shared-heap descriptor in the config blob (producer phase).
///
/// Writes the address (2 cells) then the size (1 cell) into pre-existing
/// property slots; a failed address write short-circuits and the size slot
/// is left untouched. Any write failure reports
/// [`HandoffError::Unsupported`] so the caller can decide whether a platform
/// without a shared heap is acceptable.
pub fn write_heap_info(blob: &mut [u8], desc: HeapDescriptor) -> Result<(), HandoffError> {
    let node = config::validate_and_locate(blob).map_err(|err| {
        error!("[bootcfg] invalid tb_fw config, cannot record shared-heap info: {err}");
        HandoffError::Malformed
    })?;

    let HeapDescriptor { addr, size } = desc;

    if let Err(err) =
        fdt::write_cells_inplace(blob, node.offset(), PROP_HEAP_ADDR, HEAP_ADDR_CELLS, addr)
    {
        error!("[bootcfg] unable to write config property `{PROP_HEAP_ADDR}`: {err}");
        return Err(HandoffError::Unsupported);
    }

    if let Err(err) = fdt::write_cells_inplace(
        blob,
        node.offset(),
        PROP_HEAP_SIZE,
        HEAP_SIZE_CELLS,
        u64::from(size),
    ) {
        error!("[bootcfg] unable to write config property `{PROP_HEAP_SIZE}`: {err}");
        return Err(HandoffError::Unsupported);
    }

    Ok(())
}

/// Retrieves the shared-heap descriptor from the config blob (consumer phase).
///
/// Only call this once a config blob is known to be present; an absent blob
/// is a caller bug. Reads the address (2 cells) then the size (1 cell) in
/// that fixed order, short-circuiting on the first failure. On `Err` no
/// descriptor exists, so the failed outputs of the original contract cannot
/// be observed at all.
pub fn read_heap_info(blob: &[u8]) -> Result<HeapDescriptor, ConfigError> {
    debug_assert!(!blob.is_empty(), "config blob must be present");

    let node = config::validate_and_locate(blob).map_err(|err| {
        error!("[bootcfg] invalid tb_fw config, cannot retrieve shared-heap info: {err}");
        err
    })?;

    let addr = fdt::read_cells(blob, node.offset(), PROP_HEAP_ADDR, HEAP_ADDR_CELLS)
        .map_err(|err| {
            error!("[bootcfg] error while reading `{PROP_HEAP_ADDR}` from config: {err}");
            config::property_error(PROP_HEAP_ADDR, err)
        })?;

    let size = fdt::read_cells(blob, node.offset(), PROP_HEAP_SIZE, HEAP_SIZE_CELLS)
        .map_err(|err| {
            error!("[bootcfg] error while reading `{PROP_HEAP_SIZE}` from config: {err}");
            config::property_error(PROP_HEAP_SIZE, err)
        })?;

    // Single cell, always fits 32 bits.
    Ok(HeapDescriptor {
        addr,
        size: size as u32,
    })
}
