// File: launch_batch.rs
// Description: Workflow for laying out and submitting one batch of pulling
// simulations, one job per repetition x force level. Parameters come from a
// TOML config or from flags; the resolved config is recorded next to the
// generated job tree.

use crate::cli::AppArgs;
use crate::pipeline::launch::{read_launch_config_from_file, run_batch, LaunchConfig};
use crate::utils::log::{print_log_msg, DONE, FAIL};

pub const HELP_LAUNCH: &str = "\
USAGE: dmdpull launch [-C <CONFIG>] [OPTIONS]
Options:
    -C, --config <PATH>      TOML file with the launch parameters; flags below override nothing when given
    -r, --repetitions <INT>  Number of repetitions of the MD simulation for each force
    -f, --force-levels <INT> Number of force levels to apply
    -d, --divisor <INT>      Scale factor of applied force
    -s, --structure <STR>    Structure name; its infiles/ directory holds templates and in.pdb
    -n, --min-dist <INT>     Maximum distance of lowest energy
    -x, --max-dist <INT>     Minimum distance with zero energy
    -b, --box <INT>          Size of the simulation box
    -p, --pidmd-dir <PATH>   Directory with the piDMD executables
    -o, --out-dir <PATH>     Where to store the job directories
    -q, --queue <STR>        SGE queue name
    -t, --threads <INT>      Number of threads for job preparation (default 1)
    -v, --verbose            Print verbose messages
    -h, --help               Print this help menu
";

pub fn launch_batch(env: AppArgs) {
    match env {
        AppArgs::Launch {
            config,
            repetitions,
            force_levels,
            divisor,
            structure_name,
            min_dist,
            max_dist,
            box_size,
            pidmd_dir,
            out_dir,
            queue,
            threads,
            verbose: _,
            help,
        } => {
            if help {
                eprintln!("{}", HELP_LAUNCH);
                std::process::exit(0);
            }
            let config = if let Some(config_path) = config {
                read_launch_config_from_file(&config_path).unwrap_or_else(|e| {
                    print_log_msg(FAIL, &format!("Unable to read {}: {}", config_path, e));
                    std::process::exit(1);
                })
            } else {
                match (
                    repetitions, force_levels, divisor, structure_name, min_dist,
                    max_dist, box_size, pidmd_dir, out_dir, queue,
                ) {
                    (
                        Some(repetitions), Some(force_levels), Some(divisor), Some(structure_name),
                        Some(min_dist), Some(max_dist), Some(box_size), Some(pidmd_dir),
                        Some(out_dir), Some(queue),
                    ) => LaunchConfig {
                        repetitions, force_levels, divisor, structure_name,
                        min_dist, max_dist, box_size, pidmd_dir, out_dir, queue,
                    },
                    _ => {
                        print_log_msg(FAIL, "Missing required arguments (or pass --config)");
                        eprintln!("{}", HELP_LAUNCH);
                        std::process::exit(1);
                    }
                }
            };

            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok();

            match run_batch(&config) {
                Ok(submitted) => {
                    print_log_msg(DONE, &format!("Submitted {} jobs", submitted));
                }
                Err(e) => {
                    print_log_msg(FAIL, &format!("Batch launch failed: {}", e));
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("{}", HELP_LAUNCH);
            std::process::exit(1);
        }
    }
}
