// File: xpm_contacts.rs
// Description: Workflow for extracting interchain contact pairs from a
// Gromacs XPM distance matrix. Pairs are printed to stdout, one per line.

use crate::cli::AppArgs;
use crate::pipeline::xpm::{interchain_contacts, parse_contact_frames, read_xpm_lines};
use crate::utils::log::{print_log_msg, FAIL};

pub const HELP_XPM: &str = "\
USAGE: dmdpull xpm -i <XPM> -r <HDR> -f <FST> -s <SND>
Options:
    -i, --inp <PATH>   XPM file obtained from Gromacs
    -r, --header <INT> Number of lines preceding the distance data of each frame
    -f, --fst <INT>    Length of the first chain
    -s, --snd <INT>    Length of the second chain
    -h, --help         Print this help menu
";

pub fn xpm_contacts(env: AppArgs) {
    match env {
        AppArgs::XpmContacts { input, header_lines, first_len, second_len, help } => {
            if help {
                eprintln!("{}", HELP_XPM);
                std::process::exit(0);
            }
            let (input, header_lines, first_len, second_len) =
                match (input, header_lines, first_len, second_len) {
                    (Some(i), Some(h), Some(f), Some(s)) => (i, h, f, s),
                    _ => {
                        print_log_msg(FAIL, "Missing required arguments");
                        eprintln!("{}", HELP_XPM);
                        std::process::exit(1);
                    }
                };
            let lines = read_xpm_lines(&input).unwrap_or_else(|e| {
                print_log_msg(FAIL, &format!("Unable to read {}: {}", input, e));
                std::process::exit(1);
            });
            let frames = parse_contact_frames(&lines, header_lines, first_len, second_len)
                .unwrap_or_else(|e| {
                    print_log_msg(FAIL, &e);
                    std::process::exit(1);
                });
            for (f, s) in interchain_contacts(&frames, first_len) {
                println!("{} {}", f, s);
            }
        }
        _ => {
            eprintln!("{}", HELP_XPM);
            std::process::exit(1);
        }
    }
}
