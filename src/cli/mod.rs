//! Command line interface for dmdpull

// Arguments of CLI app are defined here

pub mod workflows;

pub enum AppArgs {
    Global {
        help: bool,
    },
    Dummies {
        pdb: Option<String>,
        out: Option<String>,
        chain_a_res: Option<usize>,
        chain_b_res: Option<usize>,
        distance: Option<f32>,
        max_angle: Option<f32>,
        seed: Option<u64>,
        verbose: bool,
        help: bool,
    },
    Constraints {
        template: Option<String>,
        out: Option<String>,
        min_dist: Option<i32>,
        max_dist: Option<i32>,
        energy_step: Option<f64>,
        help: bool,
    },
    Launch {
        config: Option<String>,
        repetitions: Option<usize>,
        force_levels: Option<usize>,
        divisor: Option<usize>,
        structure_name: Option<String>,
        min_dist: Option<i32>,
        max_dist: Option<i32>,
        box_size: Option<usize>,
        pidmd_dir: Option<String>,
        out_dir: Option<String>,
        queue: Option<String>,
        threads: usize,
        verbose: bool,
        help: bool,
    },
    XpmContacts {
        input: Option<String>,
        header_lines: Option<usize>,
        first_len: Option<usize>,
        second_len: Option<usize>,
        help: bool,
    },
}
