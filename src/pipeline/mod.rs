//! Glue around the external piDMD, grid-engine and Gromacs tooling:
//! constraint-file templating, batch job layout and submission, and
//! contact-map post-processing.

pub mod constraints;
pub mod launch;
pub mod xpm;
