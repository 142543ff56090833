pub mod atom;
pub mod coordinate;
pub mod core;
pub mod io;
