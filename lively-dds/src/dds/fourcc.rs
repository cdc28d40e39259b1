//! Format recovery for DDS headers from lenient writers.
//!
//! Some tools write the FourCC or the RGB bit count one field away from
//! where the DDS layout puts it. The decoder resolves both through fixed,
//! ordered probe lists; the first probe that yields a value wins.

use crate::dds::types::{DdsError, DdsHeader, FourCc, DDS_FILE_HEADER_SIZE, PIXEL_FORMAT_OFFSET};

/// Absolute offset of the pixel format FourCC field.
const CANONICAL_FOURCC_OFFSET: usize = PIXEL_FORMAT_OFFSET + 8;

/// Absolute offset of the pixel format flags field, where some writers
/// place the FourCC instead.
const ALTERNATE_FOURCC_OFFSET: usize = PIXEL_FORMAT_OFFSET + 4;

/// A location that may hold the FourCC tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourCcProbe {
    /// The pixel format FourCC field.
    Canonical,
    /// The pixel format word preceding the FourCC field.
    Alternate,
    /// Any 4-byte window of the header, tags tried in DXT1, DXT3, DXT5, DX10 order.
    HeaderScan,
}

impl FourCcProbe {
    /// Probes in the order the decoder tries them.
    pub const PROBE_ORDER: [FourCcProbe; 3] = [
        FourCcProbe::Canonical,
        FourCcProbe::Alternate,
        FourCcProbe::HeaderScan,
    ];

    /// Look for a recognized tag at this probe's location.
    ///
    /// `bytes` is the whole file, starting at the magic. Returns `None` if
    /// the location holds no recognized tag or the file is too short.
    pub fn probe(&self, bytes: &[u8]) -> Option<FourCc> {
        if bytes.len() < DDS_FILE_HEADER_SIZE {
            return None;
        }

        let tag_at = |offset: usize| FourCc::from_tag(&bytes[offset..offset + 4]);

        match self {
            FourCcProbe::Canonical => tag_at(CANONICAL_FOURCC_OFFSET),
            FourCcProbe::Alternate => tag_at(ALTERNATE_FOURCC_OFFSET),
            FourCcProbe::HeaderScan => {
                let header = &bytes[4..DDS_FILE_HEADER_SIZE];
                FourCc::ALL.into_iter().find(|fourcc| {
                    let tag = fourcc.tag();
                    header.windows(4).any(|window| window == tag)
                })
            }
        }
    }
}

/// Resolve the FourCC of a DDS file.
///
/// A non-zero canonical field is authoritative. When it is zero the
/// remaining probes are tried in order. `Ok(None)` means the file carries
/// no tag and holds uncompressed pixels.
///
/// # Errors
///
/// Returns [`DdsError::Format`] if the canonical field holds an
/// unrecognized non-zero tag.
pub fn resolve_fourcc(bytes: &[u8]) -> Result<Option<(FourCc, FourCcProbe)>, DdsError> {
    if bytes.len() < DDS_FILE_HEADER_SIZE {
        return Err(DdsError::Format(format!(
            "data too short for header: {} < {}",
            bytes.len(),
            DDS_FILE_HEADER_SIZE
        )));
    }

    let canonical = &bytes[CANONICAL_FOURCC_OFFSET..CANONICAL_FOURCC_OFFSET + 4];
    if canonical != [0, 0, 0, 0] {
        return match FourCc::from_tag(canonical) {
            Some(fourcc) => Ok(Some((fourcc, FourCcProbe::Canonical))),
            None => Err(DdsError::Format(format!(
                "unsupported FourCC {:?}",
                String::from_utf8_lossy(canonical)
            ))),
        };
    }

    for probe in FourCcProbe::PROBE_ORDER {
        match probe.probe(bytes) {
            Some(fourcc) => {
                if probe != FourCcProbe::Canonical {
                    tracing::warn!(
                        fourcc = %fourcc,
                        probe = ?probe,
                        "FourCC recovered from non-canonical header location"
                    );
                }
                return Ok(Some((fourcc, probe)));
            }
            None => tracing::trace!(probe = ?probe, "No FourCC found"),
        }
    }

    Ok(None)
}

/// A header field that may hold the RGB bit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitCountProbe {
    /// The pixel format RGB bit count field.
    Canonical,
    /// The pixel format red mask slot.
    RedMaskSlot,
    /// The pitch-or-linear-size field.
    Pitch,
}

impl BitCountProbe {
    /// Probes in the order the decoder tries them.
    pub const PROBE_ORDER: [BitCountProbe; 3] = [
        BitCountProbe::Canonical,
        BitCountProbe::RedMaskSlot,
        BitCountProbe::Pitch,
    ];

    /// Read this probe's field, `None` if it is zero.
    pub fn probe(&self, header: &DdsHeader) -> Option<u32> {
        let value = match self {
            BitCountProbe::Canonical => header.pixel_format.rgb_bit_count,
            BitCountProbe::RedMaskSlot => header.pixel_format.r_bit_mask,
            BitCountProbe::Pitch => header.pitch_or_linear_size,
        };
        (value != 0).then_some(value)
    }
}

/// Resolve the RGB bit count of an uncompressed DDS header.
///
/// Returns `None` when every probed field is zero.
pub fn resolve_bit_count(header: &DdsHeader) -> Option<(u32, BitCountProbe)> {
    for probe in BitCountProbe::PROBE_ORDER {
        match probe.probe(header) {
            Some(bit_count) => {
                if probe != BitCountProbe::Canonical {
                    tracing::warn!(
                        bit_count,
                        probe = ?probe,
                        "Bit count recovered from non-canonical header field"
                    );
                }
                return Some((bit_count, probe));
            }
            None => tracing::trace!(probe = ?probe, "No bit count found"),
        }
    }
    None
}
