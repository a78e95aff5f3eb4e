// Author: Lukas Bower
// Purpose: Flattened config-tree primitives: header check, node lookup, cell access.

//! Minimal primitives over the flattened config-tree blob.
//!
//! The surface is deliberately four operations: [`check_header`],
//! [`node_offset_by_compatible`], [`read_cells`] and [`write_cells_inplace`].
//! There is no tree editing; writes only overwrite existing property
//! payloads and the blob is never grown.

use core::mem::size_of;
use core::ops::Range;
use core::str;

const FDT_MAGIC: u32 = 0xD00D_FEEDu32;
const FDT_HEADER_LEN: usize = 10 * size_of::<u32>();
const FDT_PROP_MAX_LEN: usize = 4 << 20; // 4 MiB hard cap.
const MAX_NODE_DEPTH: usize = 32;
const CELL_SIZE: usize = size_of::<u32>();

const FDT_BEGIN_NODE: u32 = 0x0000_0001;
const FDT_END_NODE: u32 = 0x0000_0002;
const FDT_PROP: u32 = 0x0000_0003;
const FDT_NOP: u32 = 0x0000_0004;
const FDT_END: u32 = 0x0000_0009;

/// Errors produced while validating or traversing a config-tree blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FdtError {
    /// The blob was shorter than the minimum tree header length.
    #[error("blob shorter than header")]
    TooShort,
    /// The blob did not begin with the `0xd00dfeed` magic value.
    #[error("blob magic mismatch")]
    BadMagic,
    /// Reported offsets or lengths exceeded the declared blob length.
    #[error("blob section exceeds bounds")]
    Bounds,
    /// Encountered truncated data while walking the structure block.
    #[error("structure block truncated")]
    Truncated,
    /// A string field was missing its terminating null byte.
    #[error("string missing terminator")]
    UnterminatedString,
    /// A string field could not be converted from UTF-8.
    #[error("string invalid UTF-8")]
    BadString,
    /// A property declared an excessively large payload.
    #[error("property payload too large")]
    PropertyTooLarge,
    /// An unexpected structure token was encountered.
    #[error("token 0x{0:08x} invalid")]
    InvalidToken(u32),
    /// The structure block terminated while nodes were still open.
    #[error("structure block ended prematurely")]
    UnexpectedEnd,
    /// Nodes were nested deeper than the supported limit.
    #[error("node nesting exceeds limit")]
    DepthExceeded,
    /// No node carried the requested `compatible` string.
    #[error("no node with requested compatible string")]
    NodeNotFound,
    /// The named property is absent from the node.
    #[error("property not present")]
    PropertyMissing,
    /// The property payload width does not match the requested cell count.
    #[error("property width mismatch")]
    PropertyWidth,
    /// The requested cell count is outside the supported range.
    #[error("unsupported cell count")]
    CellCount,
    /// The value does not fit in the requested cell width.
    #[error("value does not fit cell width")]
    ValueWidth,
}

/// Structure and strings block slices resolved from a validated header.
struct Blocks<'a> {
    structure: &'a [u8],
    strings: &'a [u8],
    /// Absolute blob offset where the structure block begins.
    structure_start: usize,
}

fn read_be_u32(blob: &[u8], offset: usize) -> Result<u32, FdtError> {
    let end = offset
        .checked_add(size_of::<u32>())
        .ok_or(FdtError::Bounds)?;
    if end > blob.len() {
        return Err(FdtError::TooShort);
    }

    let bytes: [u8; 4] = blob[offset..end]
        .try_into()
        .expect("slice length verified via bounds check");
    Ok(u32::from_be_bytes(bytes))
}

fn bounded_range(len: usize, offset: u32, size: u32) -> Result<Range<usize>, FdtError> {
    let start = usize::try_from(offset).map_err(|_| FdtError::Bounds)?;
    let span = usize::try_from(size).map_err(|_| FdtError::Bounds)?;
    let end = start.checked_add(span).ok_or(FdtError::Bounds)?;
    if end > len {
        return Err(FdtError::Bounds);
    }
    Ok(start..end)
}

fn blocks(blob: &[u8]) -> Result<Blocks<'_>, FdtError> {
    if blob.len() < FDT_HEADER_LEN {
        return Err(FdtError::TooShort);
    }

    let magic = read_be_u32(blob, 0)?;
    if magic != FDT_MAGIC {
        return Err(FdtError::BadMagic);
    }

    let totalsize = read_be_u32(blob, 4)?;
    let off_dt_struct = read_be_u32(blob, 8)?;
    let off_dt_strings = read_be_u32(blob, 12)?;
    let size_dt_strings = read_be_u32(blob, 32)?;
    let size_dt_struct = read_be_u32(blob, 36)?;

    let total = usize::try_from(totalsize).map_err(|_| FdtError::Bounds)?;
    if total < FDT_HEADER_LEN || total > blob.len() {
        return Err(FdtError::Bounds);
    }

    let structure = bounded_range(total, off_dt_struct, size_dt_struct)?;
    let strings = bounded_range(total, off_dt_strings, size_dt_strings)?;
    let structure_start = structure.start;

    Ok(Blocks {
        structure: &blob[structure],
        strings: &blob[strings],
        structure_start,
    })
}

/// Verifies the blob carries a sane tree header.
///
/// Checks the magic value, the declared total size against the supplied
/// buffer, and that the structure and strings blocks lie within the blob.
pub fn check_header(blob: &[u8]) -> Result<(), FdtError> {
    blocks(blob).map(|_| ())
}

fn align_up(value: usize, align: usize) -> Result<usize, FdtError> {
    if align == 0 || !align.is_power_of_two() {
        return Err(FdtError::Bounds);
    }
    let mask = align - 1;
    value
        .checked_add(mask)
        .map(|aligned| aligned & !mask)
        .ok_or(FdtError::Bounds)
}

fn read_cstr(blob: &[u8], offset: usize) -> Result<&str, FdtError> {
    if offset >= blob.len() {
        return Err(FdtError::Bounds);
    }
    let tail = &blob[offset..];
    let len = tail
        .iter()
        .position(|&byte| byte == 0)
        .ok_or(FdtError::UnterminatedString)?;
    str::from_utf8(&tail[..len]).map_err(|_| FdtError::BadString)
}

/// Events yielded while walking the structure block.
enum Event<'a> {
    /// A node began at the given structure-block offset.
    Begin { offset: usize },
    /// The innermost open node ended.
    End,
    /// A property with its resolved name and payload location.
    Prop {
        name: &'a str,
        value: &'a [u8],
        /// Structure-block offset of the payload, for in-place writes.
        value_offset: usize,
    },
}

/// Offset-tracking walker over the structure block tokens.
struct Walker<'a> {
    structure: &'a [u8],
    strings: &'a [u8],
    offset: usize,
    depth: usize,
    finished: bool,
}

impl<'a> Walker<'a> {
    const ALIGNMENT: usize = 4;

    fn new(structure: &'a [u8], strings: &'a [u8], offset: usize) -> Self {
        Self {
            structure,
            strings,
            offset,
            depth: 0,
            finished: false,
        }
    }

    fn read_u32(&self, offset: usize) -> Result<u32, FdtError> {
        match read_be_u32(self.structure, offset) {
            Ok(value) => Ok(value),
            Err(FdtError::TooShort) => Err(FdtError::Truncated),
            Err(err) => Err(err),
        }
    }

    fn align_offset(&mut self, value: usize) -> Result<(), FdtError> {
        self.offset = align_up(value, Self::ALIGNMENT)?;
        if self.offset > self.structure.len() {
            return Err(FdtError::Truncated);
        }
        Ok(())
    }

    fn next(&mut self) -> Result<Option<Event<'a>>, FdtError> {
        loop {
            if self.finished {
                return Ok(None);
            }
            if self.offset >= self.structure.len() {
                return Err(FdtError::Truncated);
            }

            let token_offset = self.offset;
            let token = self.read_u32(self.offset)?;
            self.offset = self
                .offset
                .checked_add(size_of::<u32>())
                .ok_or(FdtError::Bounds)?;

            match token {
                FDT_BEGIN_NODE => return self.begin_node(token_offset),
                FDT_END_NODE => {
                    if self.depth == 0 {
                        return Err(FdtError::UnexpectedEnd);
                    }
                    self.depth -= 1;
                    return Ok(Some(Event::End));
                }
                FDT_PROP => return self.property(),
                FDT_NOP => continue,
                FDT_END => {
                    if self.depth != 0 {
                        return Err(FdtError::UnexpectedEnd);
                    }
                    self.finished = true;
                    return Ok(None);
                }
                other => return Err(FdtError::InvalidToken(other)),
            }
        }
    }

    fn begin_node(&mut self, token_offset: usize) -> Result<Option<Event<'a>>, FdtError> {
        if self.depth >= MAX_NODE_DEPTH {
            return Err(FdtError::DepthExceeded);
        }
        let name_start = self.offset;
        if name_start >= self.structure.len() {
            return Err(FdtError::Truncated);
        }
        let name_len = self.structure[name_start..]
            .iter()
            .position(|&byte| byte == 0)
            .ok_or(FdtError::UnterminatedString)?;
        let name_end = name_start.checked_add(name_len).ok_or(FdtError::Bounds)?;
        // Node names are not consumed here, but a non-UTF-8 name still
        // disqualifies the blob.
        str::from_utf8(&self.structure[name_start..name_end]).map_err(|_| FdtError::BadString)?;
        let after_null = name_end.checked_add(1).ok_or(FdtError::Bounds)?;
        self.align_offset(after_null)?;
        self.depth += 1;
        Ok(Some(Event::Begin {
            offset: token_offset,
        }))
    }

    fn property(&mut self) -> Result<Option<Event<'a>>, FdtError> {
        let base = self.offset;
        let len_u32 = self.read_u32(base)?;
        let nameoff_u32 = self.read_u32(base + size_of::<u32>())?;
        self.offset = base
            .checked_add(2 * size_of::<u32>())
            .ok_or(FdtError::Bounds)?;

        let len = usize::try_from(len_u32).map_err(|_| FdtError::Bounds)?;
        if len > FDT_PROP_MAX_LEN {
            return Err(FdtError::PropertyTooLarge);
        }
        let nameoff = usize::try_from(nameoff_u32).map_err(|_| FdtError::Bounds)?;

        let value_offset = self.offset;
        let data_end = value_offset.checked_add(len).ok_or(FdtError::Bounds)?;
        if data_end > self.structure.len() {
            return Err(FdtError::Truncated);
        }
        let name = read_cstr(self.strings, nameoff)?;
        let value = &self.structure[value_offset..data_end];
        self.align_offset(data_end)?;
        Ok(Some(Event::Prop {
            name,
            value,
            value_offset,
        }))
    }
}

/// Returns the structure-block offset of the first node whose `compatible`
/// property contains `compatible`.
///
/// The search runs from the start of the blob and is deterministic: a given
/// blob always resolves to the same offset. Structural violations met during
/// the walk surface as the corresponding [`FdtError`] variant.
pub fn node_offset_by_compatible(blob: &[u8], compatible: &str) -> Result<usize, FdtError> {
    let blocks = blocks(blob)?;
    let mut walker = Walker::new(blocks.structure, blocks.strings, 0);
    let mut open = [0usize; MAX_NODE_DEPTH];
    let mut depth = 0usize;

    while let Some(event) = walker.next()? {
        match event {
            Event::Begin { offset, .. } => {
                // The walker bounds depth before yielding Begin.
                open[depth] = offset;
                depth += 1;
            }
            Event::End => depth -= 1,
            Event::Prop { name, value, .. } if name == "compatible" && depth > 0 => {
                // The payload is a NUL-separated string list.
                let matched = value
                    .split(|&byte| byte == 0)
                    .any(|entry| entry == compatible.as_bytes());
                if matched {
                    return Ok(open[depth - 1]);
                }
            }
            Event::Prop { .. } => {}
        }
    }

    Err(FdtError::NodeNotFound)
}

/// Resolves the absolute payload range of `name` directly under `node`.
///
/// Only properties of the node itself are visible; the scan stops at the
/// node's first child, since properties precede subnodes in a valid tree.
fn prop_payload_range(blob: &[u8], node: usize, name: &str) -> Result<Range<usize>, FdtError> {
    let blocks = blocks(blob)?;
    if node >= blocks.structure.len() {
        return Err(FdtError::Bounds);
    }

    let mut walker = Walker::new(blocks.structure, blocks.strings, node);
    match walker.next()? {
        Some(Event::Begin { .. }) => {}
        _ => return Err(FdtError::NodeNotFound),
    }

    while let Some(event) = walker.next()? {
        match event {
            Event::Prop {
                name: prop,
                value,
                value_offset,
            } if prop == name => {
                let start = blocks
                    .structure_start
                    .checked_add(value_offset)
                    .ok_or(FdtError::Bounds)?;
                let end = start.checked_add(value.len()).ok_or(FdtError::Bounds)?;
                return Ok(start..end);
            }
            Event::Prop { .. } => {}
            Event::Begin { .. } | Event::End => break,
        }
    }

    Err(FdtError::PropertyMissing)
}

fn check_cell_count(cells: usize) -> Result<(), FdtError> {
    // 1 cell carries a 32-bit value, 2 cells a 64-bit value.
    if cells == 0 || cells > 2 {
        return Err(FdtError::CellCount);
    }
    Ok(())
}

/// Reads `cells` big-endian cells of the named property under `node`.
///
/// The payload must be exactly `cells * 4` bytes: an absent property fails
/// with [`FdtError::PropertyMissing`] and any size mismatch with
/// [`FdtError::PropertyWidth`]. There are no partial reads. Two-cell values
/// assemble with the first cell as the high word.
pub fn read_cells(blob: &[u8], node: usize, name: &str, cells: usize) -> Result<u64, FdtError> {
    check_cell_count(cells)?;
    let range = prop_payload_range(blob, node, name)?;
    if range.len() != cells * CELL_SIZE {
        return Err(FdtError::PropertyWidth);
    }

    let mut value = 0u64;
    for chunk in blob[range].chunks_exact(CELL_SIZE) {
        let bytes: [u8; 4] = chunk
            .try_into()
            .expect("chunks_exact yields cell-sized chunks");
        value = (value << 32) | u64::from(u32::from_be_bytes(bytes));
    }
    Ok(value)
}

/// Overwrites the payload of an existing property in place.
///
/// The property must already exist with exactly `cells * 4` bytes reserved;
/// no slot is ever created and the blob is never grown. A value that does
/// not fit the requested width fails with [`FdtError::ValueWidth`] rather
/// than being truncated.
pub fn write_cells_inplace(
    blob: &mut [u8],
    node: usize,
    name: &str,
    cells: usize,
    value: u64,
) -> Result<(), FdtError> {
    check_cell_count(cells)?;
    if cells == 1 && value > u64::from(u32::MAX) {
        return Err(FdtError::ValueWidth);
    }

    let range = prop_payload_range(blob, node, name)?;
    if range.len() != cells * CELL_SIZE {
        return Err(FdtError::PropertyWidth);
    }

    for (index, chunk) in blob[range].chunks_exact_mut(CELL_SIZE).enumerate() {
        let shift = 32 * (cells - 1 - index);
        let cell = (value >> shift) as u32;
        chunk.copy_from_slice(&cell.to_be_bytes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::vec;
    use std::vec::Vec;

    const RSVMAP_LEN: usize = 16;

    struct SampleBlob {
        blob: Vec<u8>,
        structure_offset: usize,
        node_offset: usize,
        disable_auth_payload: usize,
    }

    fn push_be32(buf: &mut Vec<u8>, value: u32) {
        buf.extend_from_slice(&value.to_be_bytes());
    }

    fn push_string(strings: &mut Vec<u8>, value: &str) -> usize {
        let offset = strings.len();
        strings.extend_from_slice(value.as_bytes());
        strings.push(0);
        offset
    }

    fn pad(structure: &mut Vec<u8>) {
        while structure.len() % 4 != 0 {
            structure.push(0);
        }
    }

    fn begin_node(structure: &mut Vec<u8>, name: &str) -> usize {
        let offset = structure.len();
        push_be32(structure, FDT_BEGIN_NODE);
        structure.extend_from_slice(name.as_bytes());
        structure.push(0);
        pad(structure);
        offset
    }

    fn push_prop(structure: &mut Vec<u8>, nameoff: usize, payload: &[u8]) -> usize {
        push_be32(structure, FDT_PROP);
        push_be32(structure, u32::try_from(payload.len()).unwrap());
        push_be32(structure, u32::try_from(nameoff).unwrap());
        let payload_offset = structure.len();
        structure.extend_from_slice(payload);
        pad(structure);
        payload_offset
    }

    fn seal(structure: Vec<u8>, strings: Vec<u8>) -> (Vec<u8>, usize) {
        let off_dt_struct = FDT_HEADER_LEN + RSVMAP_LEN;
        let off_dt_strings = off_dt_struct + structure.len();
        let totalsize = off_dt_strings + strings.len();

        let mut blob = Vec::with_capacity(totalsize);
        push_be32(&mut blob, FDT_MAGIC);
        push_be32(&mut blob, u32::try_from(totalsize).unwrap());
        push_be32(&mut blob, u32::try_from(off_dt_struct).unwrap());
        push_be32(&mut blob, u32::try_from(off_dt_strings).unwrap());
        push_be32(&mut blob, u32::try_from(FDT_HEADER_LEN).unwrap());
        push_be32(&mut blob, 17);
        push_be32(&mut blob, 16);
        push_be32(&mut blob, 0);
        push_be32(&mut blob, u32::try_from(strings.len()).unwrap());
        push_be32(&mut blob, u32::try_from(structure.len()).unwrap());
        blob.resize(blob.len() + RSVMAP_LEN, 0);
        blob.extend_from_slice(&structure);
        blob.extend_from_slice(&strings);

        (blob, off_dt_struct)
    }

    fn build_sample_blob() -> SampleBlob {
        let mut structure = Vec::new();
        let mut strings = Vec::new();

        let compatible_off = push_string(&mut strings, "compatible");
        let disable_auth_off = push_string(&mut strings, "disable_auth");
        let heap_addr_off = push_string(&mut strings, "mbedtls_heap_addr");
        let heap_size_off = push_string(&mut strings, "mbedtls_heap_size");
        let serial_off = push_string(&mut strings, "serial-number");

        begin_node(&mut structure, "");
        push_prop(&mut structure, serial_off, &0x1234_5678u32.to_be_bytes());

        let node_offset = begin_node(&mut structure, "tb_fw");
        push_prop(&mut structure, compatible_off, b"arm,tb_fw\0");
        let disable_auth_payload =
            push_prop(&mut structure, disable_auth_off, &1u32.to_be_bytes());
        let mut addr = Vec::new();
        addr.extend_from_slice(&0x0000_0004u32.to_be_bytes());
        addr.extend_from_slice(&0x0400_1000u32.to_be_bytes());
        push_prop(&mut structure, heap_addr_off, &addr);
        push_prop(&mut structure, heap_size_off, &0x800u32.to_be_bytes());
        push_be32(&mut structure, FDT_END_NODE);

        push_be32(&mut structure, FDT_END_NODE);
        push_be32(&mut structure, FDT_END);

        let (blob, structure_offset) = seal(structure, strings);
        SampleBlob {
            blob,
            structure_offset,
            node_offset,
            disable_auth_payload,
        }
    }

    #[test]
    fn accepts_well_formed_header() {
        let sample = build_sample_blob();
        assert_eq!(check_header(&sample.blob), Ok(()));
    }

    #[test]
    fn rejects_short_blob() {
        assert_eq!(check_header(&[0u8; 8]), Err(FdtError::TooShort));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut sample = build_sample_blob();
        sample.blob[0] = 0xff;
        assert_eq!(check_header(&sample.blob), Err(FdtError::BadMagic));
    }

    #[test]
    fn rejects_truncated_totalsize() {
        let sample = build_sample_blob();
        let declared = sample.blob.len();
        let short = &sample.blob[..declared - 4];
        assert_eq!(check_header(short), Err(FdtError::Bounds));
    }

    #[test]
    fn finds_node_by_compatible() {
        let sample = build_sample_blob();
        let offset = node_offset_by_compatible(&sample.blob, "arm,tb_fw")
            .expect("marker node present");
        assert_eq!(offset, sample.node_offset);
    }

    #[test]
    fn reports_missing_compatible() {
        let sample = build_sample_blob();
        assert_eq!(
            node_offset_by_compatible(&sample.blob, "arm,other"),
            Err(FdtError::NodeNotFound)
        );
    }

    #[test]
    fn reads_single_cell() {
        let sample = build_sample_blob();
        let value = read_cells(&sample.blob, sample.node_offset, "disable_auth", 1)
            .expect("single cell present");
        assert_eq!(value, 1);
    }

    #[test]
    fn assembles_two_cells_high_first() {
        let sample = build_sample_blob();
        let value = read_cells(&sample.blob, sample.node_offset, "mbedtls_heap_addr", 2)
            .expect("two cells present");
        assert_eq!(value, 0x0000_0004_0400_1000);
    }

    #[test]
    fn missing_property_is_distinct_from_width_mismatch() {
        let sample = build_sample_blob();
        assert_eq!(
            read_cells(&sample.blob, sample.node_offset, "no-such-prop", 1),
            Err(FdtError::PropertyMissing)
        );
        assert_eq!(
            read_cells(&sample.blob, sample.node_offset, "disable_auth", 2),
            Err(FdtError::PropertyWidth)
        );
    }

    #[test]
    fn rejects_unsupported_cell_count() {
        let sample = build_sample_blob();
        assert_eq!(
            read_cells(&sample.blob, sample.node_offset, "disable_auth", 3),
            Err(FdtError::CellCount)
        );
    }

    #[test]
    fn parent_properties_invisible_under_child() {
        let sample = build_sample_blob();
        assert_eq!(
            read_cells(&sample.blob, sample.node_offset, "serial-number", 1),
            Err(FdtError::PropertyMissing)
        );
    }

    #[test]
    fn writes_cells_in_place() {
        let mut sample = build_sample_blob();
        write_cells_inplace(
            &mut sample.blob,
            sample.node_offset,
            "mbedtls_heap_addr",
            2,
            0xdead_beef_cafe_f00d,
        )
        .expect("slot exists");

        let value = read_cells(&sample.blob, sample.node_offset, "mbedtls_heap_addr", 2)
            .expect("written value readable");
        assert_eq!(value, 0xdead_beef_cafe_f00d);
    }

    #[test]
    fn write_emits_big_endian_cells() {
        let mut sample = build_sample_blob();
        write_cells_inplace(&mut sample.blob, sample.node_offset, "disable_auth", 1, 0)
            .expect("slot exists");

        let payload = sample.structure_offset + sample.disable_auth_payload;
        assert_eq!(&sample.blob[payload..payload + 4], &[0, 0, 0, 0]);
    }

    #[test]
    fn write_rejects_value_wider_than_slot() {
        let mut sample = build_sample_blob();
        assert_eq!(
            write_cells_inplace(
                &mut sample.blob,
                sample.node_offset,
                "disable_auth",
                1,
                u64::from(u32::MAX) + 1,
            ),
            Err(FdtError::ValueWidth)
        );
    }

    #[test]
    fn write_never_creates_properties() {
        let mut sample = build_sample_blob();
        let before = sample.blob.clone();
        assert_eq!(
            write_cells_inplace(&mut sample.blob, sample.node_offset, "no-such-prop", 1, 7),
            Err(FdtError::PropertyMissing)
        );
        assert_eq!(sample.blob, before);
    }

    #[test]
    fn walk_rejects_bad_name_offset() {
        let mut sample = build_sample_blob();
        // Corrupt the nameoff field of the first property under the root.
        let root_prop_nameoff = sample.structure_offset + 8 + 2 * size_of::<u32>();
        sample.blob[root_prop_nameoff..root_prop_nameoff + 4]
            .copy_from_slice(&0xFFFF_FFFFu32.to_be_bytes());

        assert_eq!(
            node_offset_by_compatible(&sample.blob, "arm,tb_fw"),
            Err(FdtError::Bounds)
        );
    }

    #[test]
    fn walk_caps_property_length() {
        let mut sample = build_sample_blob();
        let root_prop_len = sample.structure_offset + 8 + size_of::<u32>();
        let capped = u32::try_from(FDT_PROP_MAX_LEN).unwrap().saturating_add(1);
        sample.blob[root_prop_len..root_prop_len + 4].copy_from_slice(&capped.to_be_bytes());

        assert_eq!(
            node_offset_by_compatible(&sample.blob, "arm,tb_fw"),
            Err(FdtError::PropertyTooLarge)
        );
    }

    #[test]
    fn walk_rejects_invalid_token() {
        let (blob, _) = seal(
            {
                let mut structure = Vec::new();
                push_be32(&mut structure, 0x0000_0007);
                structure
            },
            vec![0],
        );
        assert_eq!(
            node_offset_by_compatible(&blob, "arm,tb_fw"),
            Err(FdtError::InvalidToken(7))
        );
    }
}
