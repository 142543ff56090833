use rand::rngs::StdRng;
use rand::SeedableRng;

use dmdpull::geometry::pulling::{place_pulling_dummies, resolve_ca};
use dmdpull::structure::coordinate::Coordinate;
use dmdpull::structure::io::pdb::{write_structure_to_file, Reader};
use dmdpull::utils::stats::{ks_critical, ks_statistic};

mod common;
use common::loader;

const TEST_REPETITIONS: usize = 50;

fn get_angle(vector_1: &Coordinate, vector_2: &Coordinate) -> f32 {
    vector_1.angle_deg(vector_2)
}

#[test]
fn test_pulling_scenario() {
    // Complex of the reference size: 198 + 265 residues
    let template = loader::build_pulling_complex(198, 265);
    let chain_a_res = 50;
    let chain_b_res = 100;
    let distance = 80.0f32;
    let max_angle = 30.0f32;
    let max_dist = distance / max_angle.to_radians().cos();

    let residue_name = template.chains[2].residues[0].name;
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..TEST_REPETITIONS {
        let mut structure = template.clone();
        place_pulling_dummies(
            &mut structure, chain_a_res, chain_b_res, distance, max_angle, &mut rng,
        )
        .unwrap();

        assert_eq!(structure.num_chains(), 4);
        let chain_c = &structure.chains[2];
        let chain_d = &structure.chains[3];
        assert_eq!(chain_c.id, b'C');
        assert_eq!(chain_c.len(), 1);
        assert_eq!(chain_c.residues[0].name, residue_name);
        assert_eq!(chain_d.id, b'D');
        assert_eq!(chain_d.len(), 1);
        assert_eq!(chain_d.residues[0].name, residue_name);

        let anchor_a = resolve_ca(&structure.chains[0], chain_a_res).unwrap();
        let anchor_b = resolve_ca(&structure.chains[1], chain_b_res).unwrap();
        let basis = anchor_a.sub(&anchor_b);
        let c_ca = chain_c.residues[0].ca().unwrap().coordinate();
        let d_ca = chain_d.residues[0].ca().unwrap().coordinate();

        let c_dist = anchor_a.distance(&c_ca);
        assert!(c_dist >= distance - 1e-2 && c_dist <= max_dist + 1e-2, "c_dist = {}", c_dist);
        let d_dist = anchor_b.distance(&d_ca);
        assert!(d_dist >= distance - 1e-2 && d_dist <= max_dist + 1e-2, "d_dist = {}", d_dist);

        let c_angle = get_angle(&c_ca.sub(&anchor_a), &basis);
        assert!(c_angle <= max_angle + 1e-2, "c_angle = {}", c_angle);
        let d_angle = get_angle(&anchor_b.sub(&d_ca), &basis);
        assert!(d_angle <= max_angle + 1e-2, "d_angle = {}", d_angle);
    }
}

#[test]
fn test_pulling_angle_distribution() {
    // Small aperture so the pulled angle is uniform on [0, max_angle] up to
    // the tangent flattening, which stays far below the KS critical value
    let repetitions = 300;
    let template = loader::build_pulling_complex(60, 60);
    let distance = 60.0f32;
    let max_angle = 12.0f32;

    let mut rng = StdRng::seed_from_u64(7);
    let mut c_angles = Vec::with_capacity(repetitions);
    let mut d_angles = Vec::with_capacity(repetitions);
    for _ in 0..repetitions {
        let mut structure = template.clone();
        place_pulling_dummies(&mut structure, 20, 40, distance, max_angle, &mut rng).unwrap();

        let anchor_a = resolve_ca(&structure.chains[0], 20).unwrap();
        let anchor_b = resolve_ca(&structure.chains[1], 40).unwrap();
        let basis = anchor_a.sub(&anchor_b);
        let c_ca = structure.chains[2].residues[0].ca().unwrap().coordinate();
        let d_ca = structure.chains[3].residues[0].ca().unwrap().coordinate();

        c_angles.push(get_angle(&c_ca.sub(&anchor_a), &basis) as f64);
        d_angles.push(get_angle(&anchor_b.sub(&d_ca), &basis) as f64);
    }

    let scale = max_angle as f64;
    let c_d = ks_statistic(&c_angles, |angle| angle / scale);
    let d_d = ks_statistic(&d_angles, |angle| angle / scale);
    assert!(c_d < ks_critical(repetitions), "KS statistic for chain C: {}", c_d);
    assert!(d_d < ks_critical(repetitions), "KS statistic for chain D: {}", d_d);
}

#[test]
fn test_pulling_from_pdb_file_round_trip() {
    let structure = Reader::from_file(loader::TOY_PDB)
        .unwrap()
        .read_structure()
        .unwrap();
    assert_eq!(structure.num_chains(), 3);

    let mut structure = structure;
    let mut rng = StdRng::seed_from_u64(31);
    place_pulling_dummies(&mut structure, 2, 3, 40.0, 20.0, &mut rng).unwrap();
    assert_eq!(structure.num_chains(), 4);

    let out_path = std::env::temp_dir().join("dmdpull_pulling_round_trip.pdb");
    write_structure_to_file(&out_path, &structure).unwrap();
    let reread = Reader::from_file(&out_path).unwrap().read_structure().unwrap();
    assert_eq!(reread.num_chains(), 4);
    assert_eq!(reread.chains[3].id, b'D');
    assert_eq!(reread.chains[3].len(), 1);

    let written_ca = structure.chains[3].residues[0].ca().unwrap().coordinate();
    let reread_ca = reread.chains[3].residues[0].ca().unwrap().coordinate();
    assert!(written_ca.distance(&reread_ca) < 1e-3);
    std::fs::remove_file(&out_path).ok();
}
