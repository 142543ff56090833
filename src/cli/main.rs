//

use dmdpull::cli::workflows::gen_constraints::generate_constraints;
use dmdpull::cli::workflows::gen_pulling::generate_pulling_geometry;
use dmdpull::cli::workflows::launch_batch::launch_batch;
use dmdpull::cli::workflows::xpm_contacts::xpm_contacts;
use dmdpull::cli::AppArgs;

const HELP: &str = "\
USAGE: dmdpull dummies [OPTIONS] -i <PDB> -o <OUT>
       dmdpull constraints [OPTIONS] -c <TEMPLATE> -o <OUT>
       dmdpull launch [OPTIONS]
       dmdpull xpm [OPTIONS] -i <XPM>

SUBCOMMANDS:
  dummies      Place randomized pulling handles on a 3-chain structure
  constraints  Expand an atom-pair constraints template with a stepped potential
  launch       Lay out and submit a batch of pulling simulations
  xpm          Extract interchain contact pairs from a Gromacs XPM matrix
OPTIONS:
  -h, --help   Print this help menu (per subcommand after the subcommand)
";

fn parse_arg() -> Result<AppArgs, Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some("dummies") => Ok(AppArgs::Dummies {
            pdb: args.opt_value_from_str(["-i", "--pdb"])?,
            out: args.opt_value_from_str(["-o", "--out"])?,
            chain_a_res: args.opt_value_from_str(["-f", "--c1-res"])?,
            chain_b_res: args.opt_value_from_str(["-s", "--c2-res"])?,
            distance: args.opt_value_from_str(["-d", "--distance"])?,
            max_angle: args.opt_value_from_str(["-a", "--max-angle"])?,
            seed: args.opt_value_from_str("--seed")?,
            verbose: args.contains(["-v", "--verbose"]),
            help: args.contains(["-h", "--help"]),
        }),
        Some("constraints") => Ok(AppArgs::Constraints {
            template: args.opt_value_from_str(["-c", "--conf"])?,
            out: args.opt_value_from_str(["-o", "--out"])?,
            min_dist: args.opt_value_from_str(["-n", "--min"])?,
            max_dist: args.opt_value_from_str(["-x", "--max"])?,
            energy_step: args.opt_value_from_str(["-s", "--step"])?,
            help: args.contains(["-h", "--help"]),
        }),
        Some("launch") => Ok(AppArgs::Launch {
            config: args.opt_value_from_str(["-C", "--config"])?,
            repetitions: args.opt_value_from_str(["-r", "--repetitions"])?,
            force_levels: args.opt_value_from_str(["-f", "--force-levels"])?,
            divisor: args.opt_value_from_str(["-d", "--divisor"])?,
            structure_name: args.opt_value_from_str(["-s", "--structure"])?,
            min_dist: args.opt_value_from_str(["-n", "--min-dist"])?,
            max_dist: args.opt_value_from_str(["-x", "--max-dist"])?,
            box_size: args.opt_value_from_str(["-b", "--box"])?,
            pidmd_dir: args.opt_value_from_str(["-p", "--pidmd-dir"])?,
            out_dir: args.opt_value_from_str(["-o", "--out-dir"])?,
            queue: args.opt_value_from_str(["-q", "--queue"])?,
            threads: args.value_from_str(["-t", "--threads"]).unwrap_or(1),
            verbose: args.contains(["-v", "--verbose"]),
            help: args.contains(["-h", "--help"]),
        }),
        Some("xpm") => Ok(AppArgs::XpmContacts {
            input: args.opt_value_from_str(["-i", "--inp"])?,
            header_lines: args.opt_value_from_str(["-r", "--header"])?,
            first_len: args.opt_value_from_str(["-f", "--fst"])?,
            second_len: args.opt_value_from_str(["-s", "--snd"])?,
            help: args.contains(["-h", "--help"]),
        }),
        Some(_) => Err("Invalid subcommand".into()),
        None => Ok(AppArgs::Global {
            help: args.contains(["-h", "--help"]),
        }),
    }
}

fn main() {
    let parsed_args = parse_arg().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    match parsed_args {
        AppArgs::Global { help } => {
            if help {
                println!("{}", HELP);
            } else {
                println!("No subcommand specified. Try `dmdpull --help` for more information.");
            }
        }
        env @ AppArgs::Dummies { .. } => generate_pulling_geometry(env),
        env @ AppArgs::Constraints { .. } => generate_constraints(env),
        env @ AppArgs::Launch { .. } => launch_batch(env),
        env @ AppArgs::XpmContacts { .. } => xpm_contacts(env),
    }
}
