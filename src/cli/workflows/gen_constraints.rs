// File: gen_constraints.rs
// Description: Workflow for expanding an atom-pair constraints template into
// a piDMD constraints file with a stepped potential.

use crate::cli::AppArgs;
use crate::pipeline::constraints::process_constraints_template;
use crate::utils::log::{print_log_msg, FAIL};

pub const HELP_CONSTRAINTS: &str = "\
USAGE: dmdpull constraints -c <TEMPLATE> -o <OUT> -n <MIN> -x <MAX> -s <STEP>
Options:
    -c, --conf <PATH>    File with atom pair constraints
    -o, --out <PATH>     Output constraints file
    -n, --min <INT>      Max distance with the lowest potential energy
    -x, --max <INT>      Min distance with zero potential energy
    -s, --step <FLOAT>   Potential step, in reduced piDMD units
    -h, --help           Print this help menu
";

pub fn generate_constraints(env: AppArgs) {
    match env {
        AppArgs::Constraints { template, out, min_dist, max_dist, energy_step, help } => {
            if help {
                eprintln!("{}", HELP_CONSTRAINTS);
                std::process::exit(0);
            }
            let (template, out, min_dist, max_dist, energy_step) =
                match (template, out, min_dist, max_dist, energy_step) {
                    (Some(c), Some(o), Some(n), Some(x), Some(s)) => (c, o, n, x, s),
                    _ => {
                        print_log_msg(FAIL, "Missing required arguments");
                        eprintln!("{}", HELP_CONSTRAINTS);
                        std::process::exit(1);
                    }
                };
            if let Err(e) = process_constraints_template(&template, &out, min_dist, max_dist, energy_step) {
                print_log_msg(FAIL, &format!("Constraint expansion failed: {}", e));
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("{}", HELP_CONSTRAINTS);
            std::process::exit(1);
        }
    }
}
