// File: atom.rs
// Description: Single PDB atom record

use crate::structure::coordinate::Coordinate;

pub const CA: &[u8; 4] = b" CA ";

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub atom_name: [u8; 4],
    pub atom_serial: u64,
    pub occupancy: f32,
    pub b_factor: f32,
}

impl Atom {
    pub fn new(
        x: f32, y: f32, z: f32, atom_name: [u8; 4], atom_serial: u64,
        occupancy: f32, b_factor: f32,
    ) -> Atom {
        Atom { x, y, z, atom_name, atom_serial, occupancy, b_factor }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate { x: self.x, y: self.y, z: self.z }
    }

    pub fn set_coordinate(&mut self, coord: &Coordinate) {
        self.x = coord.x;
        self.y = coord.y;
        self.z = coord.z;
    }

    pub fn is_ca(&self) -> bool {
        &self.atom_name == CA
    }

    /// Element symbol derived from the atom name columns. First alphabetic
    /// character of the name field; good enough for protein heavy atoms.
    pub fn element(&self) -> u8 {
        for &byte in self.atom_name.iter() {
            if byte.is_ascii_alphabetic() {
                return byte;
            }
        }
        b' '
    }
}
