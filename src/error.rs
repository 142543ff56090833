// File: error.rs
// Description: Typed errors for the pulling-geometry core

use std::error::Error;
use std::fmt;

/// Precondition and invariant violations of the pulling-geometry core.
/// None of these are recoverable at the point of detection; the batch
/// driver decides whether to skip the replicate or abort.
#[derive(Debug, Clone, PartialEq)]
pub enum PullingError {
    /// Wrong chain or residue counts in the input structure.
    StructureShape(String),
    /// Residue index out of range or the residue has no CA atom.
    InvalidResidue(String),
    /// Zero-length basis vector between the two anchors.
    DegenerateGeometry(String),
    /// Internal perpendicularity check failed. Indicates broken basis
    /// construction, not bad input.
    Geometry(String),
}

impl fmt::Display for PullingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullingError::StructureShape(msg) => write!(f, "structure shape: {}", msg),
            PullingError::InvalidResidue(msg) => write!(f, "invalid residue: {}", msg),
            PullingError::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {}", msg),
            PullingError::Geometry(msg) => write!(f, "geometry: {}", msg),
        }
    }
}

impl Error for PullingError {}
