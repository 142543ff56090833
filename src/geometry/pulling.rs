// File: pulling.rs
// Description: Placement of the two dummy pulling handles around the axis
// between the anchor residues of an interacting chain pair.

use rand::Rng;

use crate::error::PullingError;
use crate::geometry::sampler::sample_cone_offset;
use crate::structure::core::{Chain, Structure};
use crate::structure::coordinate::Coordinate;

/// Id given to the cloned dummy chain.
pub const NEW_DUMMY_CHAIN_ID: u8 = b'D';

/// CA coordinate of the residue at the given 1-indexed position.
pub fn resolve_ca(chain: &Chain, res_n: usize) -> Result<Coordinate, PullingError> {
    if res_n == 0 || res_n > chain.len() {
        return Err(PullingError::InvalidResidue(format!(
            "residue {} requested from chain {} with {} residues",
            res_n, chain.id as char, chain.len()
        )));
    }
    let residue = &chain.residues[res_n - 1];
    match residue.ca() {
        Some(atom) => Ok(atom.coordinate()),
        None => Err(PullingError::InvalidResidue(format!(
            "no CA atom in residue {} of chain {}",
            res_n, chain.id as char
        ))),
    }
}

/// Place two pulling handles on a 3-chain structure.
///
/// The structure must hold the two interacting chains followed by a
/// single-residue dummy chain. A basis line is drawn between the CA atoms of
/// `chain_a_res` (first chain, 1-indexed) and `chain_b_res` (second chain);
/// a cone of aperture `max_angle` degrees and height `target_len` is erected
/// past each anchor along that line, and one position is sampled inside each
/// cone. The existing dummy chain is translated so its CA sits on the first
/// position; an independent copy of it (chain `D`) is inserted after it and
/// translated to the second.
///
/// On error the structure may have been partially mutated; callers must
/// discard it and treat the replicate as failed.
pub fn place_pulling_dummies<R: Rng>(
    structure: &mut Structure,
    chain_a_res: usize,
    chain_b_res: usize,
    target_len: f32,
    max_angle: f32,
    rng: &mut R,
) -> Result<(), PullingError> {
    if structure.num_chains() != 3 {
        return Err(PullingError::StructureShape(format!(
            "expected exactly 3 chains, found {}",
            structure.num_chains()
        )));
    }

    let anchor_a = resolve_ca(&structure.chains[0], chain_a_res)?;
    let anchor_b = resolve_ca(&structure.chains[1], chain_b_res)?;

    let diff = anchor_a.sub(&anchor_b);
    let diff_norm = diff.norm();
    if diff_norm == 0.0 {
        return Err(PullingError::DegenerateGeometry(
            "anchor CA atoms coincide, pulling axis is undefined".to_string(),
        ));
    }
    let unit_offset = diff.scale(target_len / diff_norm);

    // Un-perturbed handle positions, target_len past each anchor in
    // opposite directions along the axis
    let basic_a = anchor_a.add(&unit_offset);
    let basic_b = anchor_b.sub(&unit_offset);

    let offset_c = sample_cone_offset(rng, &unit_offset, max_angle)?;
    let offset_d = sample_cone_offset(rng, &unit_offset, max_angle)?;
    let pos_c = basic_a.add(&offset_c);
    let pos_d = basic_b.add(&offset_d);

    let chain_c = &structure.chains[2];
    if chain_c.len() != 1 {
        return Err(PullingError::StructureShape(format!(
            "dummy chain {} must hold exactly 1 residue, found {}",
            chain_c.id as char,
            chain_c.len()
        )));
    }
    let dummy_ca = match chain_c.residues[0].ca() {
        Some(atom) => atom.coordinate(),
        None => {
            return Err(PullingError::InvalidResidue(format!(
                "no CA atom in the dummy residue of chain {}",
                chain_c.id as char
            )))
        }
    };

    let mut chain_d = Chain::new(NEW_DUMMY_CHAIN_ID);
    chain_d.residues.push(chain_c.residues[0].clone());
    chain_d.translate(&pos_d.sub(&dummy_ca));

    let dummy_chain_id = structure.chains[2].id;
    structure.chains[2].translate(&pos_c.sub(&dummy_ca));
    structure.insert_chain_after(dummy_chain_id, chain_d);

    Ok(())
}
