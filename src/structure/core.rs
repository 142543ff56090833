// File: core.rs
// Description: Hierarchical structure model (chains -> residues -> atoms),
// kept at full atom resolution for mutation and re-writing.

use crate::structure::atom::Atom;
use crate::structure::coordinate::Coordinate;

/// One residue with its ordered atom list. `Clone` produces an independent
/// deep copy; cloned residues never alias the original's atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub name: [u8; 3],
    pub serial: u64,
    pub atoms: Vec<Atom>,
}

impl Residue {
    pub fn new(name: [u8; 3], serial: u64) -> Residue {
        Residue { name, serial, atoms: Vec::new() }
    }

    pub fn atom(&self, atom_name: &[u8; 4]) -> Option<&Atom> {
        self.atoms.iter().find(|a| &a.atom_name == atom_name)
    }

    pub fn ca(&self) -> Option<&Atom> {
        self.atom(crate::structure::atom::CA)
    }
}

/// One chain with its ordered residue list. Residue access elsewhere in the
/// crate is 1-indexed, following the PDB convention of the input files.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: u8,
    pub residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: u8) -> Chain {
        Chain { id, residues: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Rigid translation of every atom in the chain. Identity rotation;
    /// only CA-relative placement matters for the pulling handles.
    pub fn translate(&mut self, shift: &Coordinate) {
        for residue in self.residues.iter_mut() {
            for atom in residue.atoms.iter_mut() {
                atom.x += shift.x;
                atom.y += shift.y;
                atom.z += shift.z;
            }
        }
    }
}

/// Ordered collection of chains parsed from one PDB file.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub chains: Vec<Chain>,
}

impl Structure {
    pub fn new() -> Structure {
        Structure { chains: Vec::new() }
    }

    pub fn num_chains(&self) -> usize {
        self.chains.len()
    }

    pub fn num_residues(&self) -> usize {
        self.chains.iter().map(|c| c.len()).sum()
    }

    /// Insert a chain right after the chain with the given id, or at the end
    /// when no such chain exists.
    pub fn insert_chain_after(&mut self, after_id: u8, chain: Chain) {
        match self.chains.iter().position(|c| c.id == after_id) {
            Some(idx) => self.chains.insert(idx + 1, chain),
            None => self.chains.push(chain),
        }
    }

    /// Append one parsed atom, opening a new chain or residue whenever the
    /// chain id or residue serial changes. `record` stores the previous
    /// chain id and residue serial, as in a line-by-line PDB scan.
    pub fn update(
        &mut self, atom: Atom, chain_id: u8, res_name: [u8; 3], res_serial: u64,
        record: &mut (u8, u64),
    ) {
        if record.0 != chain_id || self.chains.is_empty() {
            self.chains.push(Chain::new(chain_id));
            record.0 = chain_id;
            record.1 = 0;
        }
        let chain = self.chains.last_mut().unwrap();
        if record.1 != res_serial || chain.residues.is_empty() {
            chain.residues.push(Residue::new(res_name, res_serial));
            record.1 = res_serial;
        }
        chain.residues.last_mut().unwrap().atoms.push(atom);
    }
}

impl Default for Structure {
    fn default() -> Self {
        Structure::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ca_atom(x: f32, y: f32, z: f32, serial: u64) -> Atom {
        Atom::new(x, y, z, *b" CA ", serial, 1.0, 0.0)
    }

    #[test]
    fn test_update_groups_chains_and_residues() {
        let mut structure = Structure::new();
        let mut record = (b' ', 0u64);
        structure.update(ca_atom(0.0, 0.0, 0.0, 1), b'A', *b"ALA", 1, &mut record);
        structure.update(ca_atom(1.0, 0.0, 0.0, 2), b'A', *b"GLY", 2, &mut record);
        structure.update(ca_atom(2.0, 0.0, 0.0, 3), b'B', *b"SER", 1, &mut record);

        assert_eq!(structure.num_chains(), 2);
        assert_eq!(structure.chains[0].len(), 2);
        assert_eq!(structure.chains[1].len(), 1);
        assert_eq!(structure.num_residues(), 3);
    }

    #[test]
    fn test_translate_moves_all_atoms() {
        let mut chain = Chain::new(b'C');
        let mut residue = Residue::new(*b"GLY", 1);
        residue.atoms.push(ca_atom(1.0, 2.0, 3.0, 1));
        residue.atoms.push(Atom::new(2.0, 2.0, 3.0, *b" N  ", 2, 1.0, 0.0));
        chain.residues.push(residue);

        chain.translate(&Coordinate::new(10.0, -1.0, 0.5));
        assert_eq!(
            chain.residues[0].atoms[0].coordinate(),
            Coordinate::new(11.0, 1.0, 3.5)
        );
        assert_eq!(
            chain.residues[0].atoms[1].coordinate(),
            Coordinate::new(12.0, 1.0, 3.5)
        );
    }

    #[test]
    fn test_residue_clone_is_independent() {
        let mut residue = Residue::new(*b"GLY", 1);
        residue.atoms.push(ca_atom(1.0, 1.0, 1.0, 1));
        let mut copy = residue.clone();
        copy.atoms[0].set_coordinate(&Coordinate::new(9.0, 9.0, 9.0));
        assert_eq!(residue.atoms[0].coordinate(), Coordinate::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_insert_chain_after() {
        let mut structure = Structure::new();
        structure.chains.push(Chain::new(b'A'));
        structure.chains.push(Chain::new(b'B'));
        structure.chains.push(Chain::new(b'C'));
        structure.insert_chain_after(b'C', Chain::new(b'D'));
        let ids: Vec<u8> = structure.chains.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![b'A', b'B', b'C', b'D']);
    }
}
