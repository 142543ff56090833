// File: pdb.rs
// Description: PDB reading and writing. Output must stay parseable by the
// external piDMD and Gromacs tooling, so records are written with the
// standard fixed columns.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::structure::core::Structure;
use crate::structure::io::parser::parse_line;

/// A PDB reader
#[derive(Debug)]
pub struct Reader<R: io::Read> {
    /// The underlying reader
    pub reader: R,
}

impl Reader<File> {
    pub fn new(file: File) -> Self {
        Reader { reader: file }
    }

    /// Read from a file path
    pub fn from_file<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self, &'static str> {
        File::open(&path)
            .map(Reader::new)
            .map_err(|_e| "Error opening file")
    }

    pub fn read_structure(&self) -> Result<Structure, &'static str> {
        let reader = BufReader::new(&self.reader);
        read_from_lines(reader)
    }

    pub fn read_structure_from_gz(&self) -> Result<Structure, &'static str> {
        let reader = BufReader::new(GzDecoder::new(&self.reader));
        read_from_lines(reader)
    }
}

fn read_from_lines<B: BufRead>(reader: B) -> Result<Structure, &'static str> {
    let mut structure = Structure::new();
    let mut record = (b' ', 0u64);

    // Reading each line of PDB, parse and build the chain hierarchy.
    for line in reader.lines() {
        if let Ok(atomline) = line {
            if atomline.starts_with("ATOM  ") {
                match parse_line(&atomline) {
                    Ok(parsed) => {
                        structure.update(
                            parsed.atom,
                            parsed.chain,
                            parsed.res_name,
                            parsed.res_serial,
                            &mut record,
                        );
                    }
                    // Conversion error. Just skip the line.
                    Err(_e) => continue,
                }
            }
        } else {
            return Err("Error reading line");
        }
    }
    Ok(structure)
}

/// Write a structure as ATOM records with serially renumbered atoms,
/// a TER after each chain and a final END.
pub fn write_structure<W: Write>(writer: &mut W, structure: &Structure) -> io::Result<()> {
    let mut serial: u64 = 1;
    for chain in structure.chains.iter() {
        for residue in chain.residues.iter() {
            let res_name = std::str::from_utf8(&residue.name).unwrap_or("UNK");
            for atom in residue.atoms.iter() {
                let atom_name = std::str::from_utf8(&atom.atom_name).unwrap_or(" X  ");
                writeln!(
                    writer,
                    "ATOM  {:>5} {} {} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}",
                    serial,
                    atom_name,
                    res_name,
                    chain.id as char,
                    residue.serial,
                    atom.x,
                    atom.y,
                    atom.z,
                    atom.occupancy,
                    atom.b_factor,
                    atom.element() as char,
                )?;
                serial += 1;
            }
        }
        writeln!(writer, "TER")?;
    }
    writeln!(writer, "END")?;
    Ok(())
}

pub fn write_structure_to_file<P: AsRef<Path>>(path: P, structure: &Structure) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_structure(&mut writer, structure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_read_pdb() {
        let path = Path::new("data/pulling_toy.pdb");
        let file = File::open(&path).unwrap();
        let reader = Reader::new(file);
        let structure = reader.read_structure().unwrap();
        assert_eq!(structure.num_chains(), 3);
        assert_eq!(structure.chains[0].len(), 4);
        assert_eq!(structure.chains[1].len(), 4);
        assert_eq!(structure.chains[2].len(), 1);
    }

    #[test]
    fn test_write_read_round_trip() {
        let path = Path::new("data/pulling_toy.pdb");
        let file = File::open(&path).unwrap();
        let structure = Reader::new(file).read_structure().unwrap();

        let mut buffer: Vec<u8> = Vec::new();
        write_structure(&mut buffer, &structure).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("END\n"));

        let reparsed = read_from_lines(text.as_bytes()).unwrap();
        assert_eq!(reparsed.num_chains(), structure.num_chains());
        assert_eq!(reparsed.num_residues(), structure.num_residues());
        // Coordinates survive the fixed-column round trip at 3 decimals
        let ca_before = structure.chains[0].residues[0].ca().unwrap().coordinate();
        let ca_after = reparsed.chains[0].residues[0].ca().unwrap().coordinate();
        assert!(ca_before.distance(&ca_after) < 1e-3);
    }

    #[test]
    fn test_written_atoms_are_renumbered() {
        let path = Path::new("data/pulling_toy.pdb");
        let structure = Reader::from_file(path).unwrap().read_structure().unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        write_structure(&mut buffer, &structure).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let serials: Vec<u64> = text
            .lines()
            .filter(|l| l.starts_with("ATOM  "))
            .map(|l| l[6..11].trim().parse::<u64>().unwrap())
            .collect();
        let expected: Vec<u64> = (1..=serials.len() as u64).collect();
        assert_eq!(serials, expected);
    }
}
