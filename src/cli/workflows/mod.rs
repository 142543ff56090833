//! # Workflows
//! One module per CLI subcommand: pulling-geometry generation, constraint
//! expansion, batch launching and XPM contact extraction.

pub mod gen_constraints;
pub mod gen_pulling;
pub mod launch_batch;
pub mod xpm_contacts;
