// File: parser.rs
// Description: Column-wise parsing of PDB ATOM records

use crate::structure::atom::Atom;

/// One parsed ATOM record together with the fields that place it in the
/// chain/residue hierarchy.
#[derive(Debug)]
pub struct AtomLine {
    pub atom: Atom,
    pub chain: u8,
    pub res_name: [u8; 3],
    pub res_serial: u64,
}

pub fn parse_line(line: &str) -> Result<AtomLine, &'static str> {
    // Check line length is enough to index b_factor
    match line.len() {
        67..=80 => {}
        _ => return Err("Line length is not 80 characters long"),
    }
    // Parse line
    let x = line[30..38].trim().parse::<f32>();
    let y = line[38..46].trim().parse::<f32>();
    let z = line[46..54].trim().parse::<f32>();
    let atom_name = parse_atom(&line[12..16]);
    let atom_serial = line[6..11].trim().parse::<u64>();
    let res_name = parse_residue(&line[17..20]);
    let res_serial = line[22..26].trim().parse::<u64>();
    let chain = line[21..22].as_bytes()[0];
    let occupancy = line[54..60].trim().parse::<f32>();
    let b_factor = line[60..66].trim().parse::<f32>();

    // Check if all the parsing was successful
    match (x, y, z, atom_name, atom_serial, res_name, res_serial, occupancy, b_factor) {
        (
            Ok(x),
            Ok(y),
            Ok(z),
            Ok(atom_name),
            Ok(atom_serial),
            Ok(res_name),
            Ok(res_serial),
            Ok(occupancy),
            Ok(b_factor),
        ) => Ok(AtomLine {
            atom: Atom::new(x, y, z, atom_name, atom_serial, occupancy, b_factor),
            chain,
            res_name,
            res_serial,
        }),
        _ => Err("Error parsing line"),
    }
}

pub fn parse_atom(name: &str) -> Result<[u8; 4], &'static str> {
    let bytes = name.as_bytes();
    // Check atom name is 4 ASCII characters
    match bytes.len() {
        4 => Ok([bytes[0], bytes[1], bytes[2], bytes[3]]),
        _ => Err("Atom name is not 4 characters long"),
    }
}

pub fn parse_residue(name: &str) -> Result<[u8; 3], &'static str> {
    let bytes = name.as_bytes();
    // Check residue name is 3 ASCII characters
    match bytes.len() {
        3 => Ok([bytes[0], bytes[1], bytes[2]]),
        _ => Err("Residue name is not 3 characters long"),
    }
}
