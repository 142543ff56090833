// File: xpm.rs
// Description: Post-processing of Gromacs mean-distance matrices in XPM
// format. Extracts residue pairs of the two interacting chains that come
// into contact in any trajectory frame.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Matrix symbols at or below this byte count as a contact. The Gromacs
/// color map orders symbols by distance, short distances first.
pub const CONTACT_SYMBOL_MAX: u8 = b'N';

/// One frame of the contact map; `frame[row][col]` is true when the residue
/// pair is in contact.
pub type ContactFrame = Vec<Vec<bool>>;

/// Parse the per-frame contact matrices out of an XPM dump.
///
/// Frames are blocks of `first_len + second_len + 1` pixel rows, each
/// preceded by `header_lines` non-pixel lines. Pixel rows are quoted, one
/// symbol per residue, and run top-down, so rows are reversed to make the
/// row index a residue index.
pub fn parse_contact_frames(
    lines: &[String],
    header_lines: usize,
    first_len: usize,
    second_len: usize,
) -> Result<Vec<ContactFrame>, String> {
    let step = first_len + second_len + 1;
    let mut frames = Vec::new();
    let mut start = header_lines;
    while start < lines.len() {
        if start + step > lines.len() {
            return Err(format!(
                "truncated frame at line {}: expected {} pixel rows, found {}",
                start,
                step,
                lines.len() - start
            ));
        }
        let mut frame: ContactFrame = Vec::with_capacity(step);
        for (offset, line) in lines[start..start + step].iter().enumerate() {
            let bytes = line.as_bytes();
            if bytes.len() < step + 1 {
                return Err(format!("pixel row at line {} is too short", start + offset));
            }
            // Skip the opening quote, one byte per residue
            let row: Vec<bool> = bytes[1..step + 1]
                .iter()
                .map(|&symbol| symbol <= CONTACT_SYMBOL_MAX)
                .collect();
            frame.push(row);
        }
        frame.reverse();
        frames.push(frame);
        start += step + header_lines;
    }
    Ok(frames)
}

/// Residue pairs `(f, s)` with `f` on the first chain and `s` on the second
/// (both 0-indexed over the concatenated residue range) that are in contact
/// in at least one frame.
pub fn interchain_contacts(frames: &[ContactFrame], first_len: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    if frames.is_empty() {
        return pairs;
    }
    let size = frames[0].len();
    for f in 0..size {
        for s in 0..size {
            if f < first_len && first_len <= s && frames.iter().any(|frame| frame[f][s]) {
                pairs.push((f, s));
            }
        }
    }
    pairs
}

pub fn read_xpm_lines<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    reader.lines().collect()
}
