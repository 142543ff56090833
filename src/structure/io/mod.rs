//!
pub mod parser;
pub mod pdb;
