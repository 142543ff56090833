// Common functions for testing

use dmdpull::structure::atom::Atom;
use dmdpull::structure::core::{Chain, Residue, Structure};

pub const TOY_PDB: &str = "data/pulling_toy.pdb";

fn ca_only_residue(name: [u8; 3], serial: u64, x: f32, y: f32, z: f32) -> Residue {
    let mut residue = Residue::new(name, serial);
    residue.atoms.push(Atom::new(x, y, z, *b" CA ", serial, 1.0, 0.0));
    residue
}

/// Synthetic pulling complex: two CA-only chains laid out as straight
/// strands 12 Angstrom apart, plus a single-residue dummy chain.
pub fn build_pulling_complex(len_a: usize, len_b: usize) -> Structure {
    let mut structure = Structure::new();

    let mut chain_a = Chain::new(b'A');
    for i in 0..len_a {
        chain_a
            .residues
            .push(ca_only_residue(*b"ALA", i as u64 + 1, i as f32 * 3.8, 0.0, 0.0));
    }
    let mut chain_b = Chain::new(b'B');
    for i in 0..len_b {
        chain_b
            .residues
            .push(ca_only_residue(*b"GLY", i as u64 + 1, i as f32 * 3.8, 12.0, 0.0));
    }
    let mut chain_c = Chain::new(b'C');
    chain_c.residues.push(ca_only_residue(*b"GLY", 1, 100.0, 100.0, 100.0));

    structure.chains.push(chain_a);
    structure.chains.push(chain_b);
    structure.chains.push(chain_c);
    structure
}
