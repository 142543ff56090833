//! # About project
//!
//! Dmdpull prepares, launches and post-processes piDMD pulling simulations
//! of a two-chain protein complex. The geometric core places randomized
//! pulling handles (single-residue dummy chains) around the axis between two
//! anchor residues; the pipeline modules expand energy-constraint templates,
//! lay out batch job directories for a grid-engine cluster and extract
//! interchain contacts from Gromacs XPM maps.

pub mod cli;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod structure;
pub mod utils;

pub mod prelude {
    pub use crate::error::PullingError;
    pub use crate::geometry::pulling::{place_pulling_dummies, resolve_ca};
    pub use crate::geometry::sampler::sample_cone_offset;
    pub use crate::structure::coordinate::Coordinate;
    pub use crate::structure::core::{Chain, Residue, Structure};
    pub use crate::structure::io::pdb::Reader as PDBReader;
    pub use crate::structure::io::pdb::write_structure;
    pub use crate::utils::log::{log_msg, print_log_msg, DONE, FAIL, INFO, WARN};
}
