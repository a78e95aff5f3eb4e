// Author: Lukas Bower
// Purpose: Validate the boot config blob and read typed firmware properties.

//! Policy layer over the tree primitives.
//!
//! Nothing in the blob is trusted until [`validate_and_locate`] has accepted
//! the header and found the `arm,tb_fw` marker node. Property readers take
//! the resulting [`ConfigNode`] handle and enforce cell widths and value
//! domains strictly; a malformed tree is rejected, never repaired.

use log::{debug, warn};

use crate::fdt::{self, FdtError};

/// Compatibility marker identifying the firmware config node.
pub const TB_FW_COMPATIBLE: &str = "arm,tb_fw";

/// Single-cell boolean property that disables image authentication.
pub const PROP_DISABLE_AUTH: &str = "disable_auth";

/// Errors surfaced by the config validation and property-read paths.
///
/// The variants are deliberately distinct so callers and operators can tell
/// "config corrupt" from "feature not present" from "config present but
/// semantically invalid".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The blob failed the structural header check or the tree walk.
    #[error("config blob failed structural validation")]
    MalformedBlob,
    /// No node carries the `arm,tb_fw` compatibility marker.
    #[error("no node compatible with `arm,tb_fw` in config blob")]
    NodeNotFound,
    /// The named property is absent or has the wrong cell width.
    #[error("config property `{0}` missing or wrong width")]
    PropertyMissing(&'static str),
    /// The named property holds a value outside its allowed domain.
    #[error("config property `{0}` holds out-of-domain value {1}")]
    InvalidValue(&'static str, u32),
}

/// Handle to the validated `arm,tb_fw` node inside a config blob.
///
/// Only obtainable from [`validate_and_locate`]; a handle is tied to the
/// blob it was resolved against and must not be carried across blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigNode(usize);

impl ConfigNode {
    /// Structure-block offset of the node, as consumed by the primitives.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.0
    }
}

/// Confirms `blob` is a well-formed config tree and locates the marker node.
///
/// Runs the structural header check first and only then searches for the
/// first node compatible with [`TB_FW_COMPATIBLE`]. Must succeed before any
/// property access; read-only. Passing an empty blob is a caller bug and
/// trips the precondition check in debug builds.
pub fn validate_and_locate(blob: &[u8]) -> Result<ConfigNode, ConfigError> {
    debug_assert!(!blob.is_empty(), "config blob must be present");

    if let Err(err) = fdt::check_header(blob) {
        warn!("[bootcfg] invalid blob passed as tb_fw config: {err}");
        return Err(ConfigError::MalformedBlob);
    }

    match fdt::node_offset_by_compatible(blob, TB_FW_COMPATIBLE) {
        Ok(offset) => {
            debug!("[bootcfg] found `{TB_FW_COMPATIBLE}` in the config");
            Ok(ConfigNode(offset))
        }
        Err(FdtError::NodeNotFound) => {
            warn!("[bootcfg] compatible `{TB_FW_COMPATIBLE}` not found in the config");
            Err(ConfigError::NodeNotFound)
        }
        Err(err) => {
            warn!("[bootcfg] config structure walk failed: {err}");
            Err(ConfigError::MalformedBlob)
        }
    }
}

pub(crate) fn property_error(name: &'static str, err: FdtError) -> ConfigError {
    match err {
        FdtError::PropertyMissing | FdtError::PropertyWidth => ConfigError::PropertyMissing(name),
        _ => ConfigError::MalformedBlob,
    }
}

/// Reads the `disable_auth` cell and constrains it to the boolean domain.
///
/// The property must be a single cell holding 0 or 1; any other value is
/// [`ConfigError::InvalidValue`], never coerced. `node` must have been
/// resolved by [`validate_and_locate`] against this same blob.
pub fn read_disable_auth(blob: &[u8], node: ConfigNode) -> Result<u32, ConfigError> {
    debug_assert!(
        matches!(validate_and_locate(blob), Ok(current) if current == node),
        "stale config node handle"
    );

    let raw = fdt::read_cells(blob, node.offset(), PROP_DISABLE_AUTH, 1).map_err(|err| {
        warn!("[bootcfg] read failed for `{PROP_DISABLE_AUTH}`: {err}");
        property_error(PROP_DISABLE_AUTH, err)
    })?;

    // Single cell, always fits 32 bits.
    let value = raw as u32;
    if value > 1 {
        warn!("[bootcfg] invalid value {value} for `{PROP_DISABLE_AUTH}` cell");
        return Err(ConfigError::InvalidValue(PROP_DISABLE_AUTH, value));
    }

    debug!("[bootcfg] `{PROP_DISABLE_AUTH}` cell found with value {value}");
    Ok(value)
}
