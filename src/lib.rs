// Author: Lukas Bower
// Purpose: Boot-stage config-tree validation and shared-heap handoff.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![no_std]

//! Validation and handoff policy for the boot-time config tree.
//!
//! Platform configuration arrives at boot as a flattened binary tree blob.
//! Before anything in it is trusted, [`validate_and_locate`] confirms the
//! blob is structurally sound and finds the node tagged with the
//! [`TB_FW_COMPATIBLE`] marker. Typed readers and writers then access a
//! fixed set of properties under that node with strict width and domain
//! checks, and [`write_heap_info`] / [`read_heap_info`] mediate the
//! one-writer-one-reader exchange of the shared crypto-heap descriptor
//! between boot stages.
//!
//! The crate holds no state of its own; the caller-owned blob is the only
//! persistent artifact, borrowed for the duration of each call.

#[cfg(test)]
extern crate std;

pub mod fdt;

mod config;
mod handoff;

pub use config::{
    read_disable_auth, validate_and_locate, ConfigError, ConfigNode, PROP_DISABLE_AUTH,
    TB_FW_COMPATIBLE,
};
pub use handoff::{
    read_heap_info, write_heap_info, HandoffError, HeapDescriptor, PROP_HEAP_ADDR, PROP_HEAP_SIZE,
};
