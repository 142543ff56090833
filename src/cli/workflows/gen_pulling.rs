// File: gen_pulling.rs
// Description: Workflow for the pulling-geometry generator. Reads a 3-chain
// PDB, places the two dummy pulling handles and writes the 4-chain result.
// Typed errors from the core are translated to FAIL logs and exit codes
// here; the core itself never exits.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::AppArgs;
use crate::geometry::pulling::place_pulling_dummies;
use crate::structure::io::pdb::{write_structure_to_file, Reader};
use crate::utils::log::{print_log_msg, DONE, FAIL, INFO};

pub const HELP_DUMMIES: &str = "\
USAGE: dmdpull dummies -i <PDB> -o <OUT> -f <RES_A> -s <RES_B> -d <DIST> -a <ANGLE> [OPTIONS]
Options:
    -i, --pdb <PATH>         PDB file with three chains: two interacting and one dummy
    -o, --out <PATH>         Path of the output structure
    -f, --c1-res <INT>       Residue number on the first chain (1-indexed)
    -s, --c2-res <INT>       Residue number on the second chain (1-indexed)
    -d, --distance <FLOAT>   How far past the anchors to place the dummy residues
    -a, --max-angle <FLOAT>  Maximum angle between basis line and sampled direction
    --seed <INT>             Seed for the random placement (default: entropy)
    -v, --verbose            Print verbose messages
    -h, --help               Print this help menu
";

pub fn generate_pulling_geometry(env: AppArgs) {
    match env {
        AppArgs::Dummies {
            pdb,
            out,
            chain_a_res,
            chain_b_res,
            distance,
            max_angle,
            seed,
            verbose,
            help,
        } => {
            if help {
                eprintln!("{}", HELP_DUMMIES);
                std::process::exit(0);
            }
            let (pdb, out, chain_a_res, chain_b_res, distance, max_angle) =
                match (pdb, out, chain_a_res, chain_b_res, distance, max_angle) {
                    (Some(p), Some(o), Some(a), Some(b), Some(d), Some(m)) => (p, o, a, b, d, m),
                    _ => {
                        print_log_msg(FAIL, "Missing required arguments");
                        eprintln!("{}", HELP_DUMMIES);
                        std::process::exit(1);
                    }
                };

            let reader = Reader::from_file(&pdb).unwrap_or_else(|e| {
                print_log_msg(FAIL, &format!("{}: {}", e, pdb));
                std::process::exit(1);
            });
            let structure = if pdb.ends_with(".gz") {
                reader.read_structure_from_gz()
            } else {
                reader.read_structure()
            };
            let mut structure = structure.unwrap_or_else(|e| {
                print_log_msg(FAIL, &format!("{}: {}", e, pdb));
                std::process::exit(1);
            });

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            if verbose {
                print_log_msg(
                    INFO,
                    &format!(
                        "Placing dummies {} past residues A:{} and B:{}, aperture {} degrees",
                        distance, chain_a_res, chain_b_res, max_angle
                    ),
                );
            }

            if let Err(e) = place_pulling_dummies(
                &mut structure, chain_a_res, chain_b_res, distance, max_angle, &mut rng,
            ) {
                print_log_msg(FAIL, &e.to_string());
                std::process::exit(1);
            }

            if let Err(e) = write_structure_to_file(&out, &structure) {
                print_log_msg(FAIL, &format!("Unable to write {}: {}", out, e));
                std::process::exit(1);
            }
            if verbose {
                print_log_msg(DONE, &format!("Wrote pulling geometry to {}", out));
            }
        }
        _ => {
            eprintln!("{}", HELP_DUMMIES);
            std::process::exit(1);
        }
    }
}
