// File: launch.rs
// Description: Batch launcher for pulling simulations. Lays out one job
// directory per repetition x force level, extracts constraint templates with
// the piDMD complex binary, expands the dynamic constraints with the scaled
// force and submits the simulation binary through the grid engine.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use rayon::prelude::*;
use toml::map::Map;

use crate::pipeline::constraints::process_constraints_template;
use crate::utils::log::{print_log_msg, FAIL, INFO};

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchConfig {
    pub repetitions: usize,
    pub force_levels: usize,
    pub divisor: usize,
    pub structure_name: String,
    pub min_dist: i32,
    pub max_dist: i32,
    pub box_size: usize,
    pub pidmd_dir: String,
    pub out_dir: String,
    pub queue: String,
}

impl LaunchConfig {
    pub fn from_toml(toml: &toml::Value) -> Self {
        Self {
            repetitions: toml["repetitions"].as_integer().unwrap() as usize,
            force_levels: toml["force_levels"].as_integer().unwrap() as usize,
            divisor: toml["divisor"].as_integer().unwrap() as usize,
            structure_name: toml["structure_name"].as_str().unwrap().to_string(),
            min_dist: toml["min_dist"].as_integer().unwrap() as i32,
            max_dist: toml["max_dist"].as_integer().unwrap() as i32,
            box_size: toml["box_size"].as_integer().unwrap() as usize,
            pidmd_dir: toml["pidmd_dir"].as_str().unwrap().to_string(),
            out_dir: toml["out_dir"].as_str().unwrap().to_string(),
            queue: toml["queue"].as_str().unwrap().to_string(),
        }
    }

    pub fn to_toml(&self) -> toml::Value {
        let mut map = Map::new();
        map.insert("repetitions".to_string(), toml::Value::Integer(self.repetitions as i64));
        map.insert("force_levels".to_string(), toml::Value::Integer(self.force_levels as i64));
        map.insert("divisor".to_string(), toml::Value::Integer(self.divisor as i64));
        map.insert("structure_name".to_string(), toml::Value::String(self.structure_name.clone()));
        map.insert("min_dist".to_string(), toml::Value::Integer(self.min_dist as i64));
        map.insert("max_dist".to_string(), toml::Value::Integer(self.max_dist as i64));
        map.insert("box_size".to_string(), toml::Value::Integer(self.box_size as i64));
        map.insert("pidmd_dir".to_string(), toml::Value::String(self.pidmd_dir.clone()));
        map.insert("out_dir".to_string(), toml::Value::String(self.out_dir.clone()));
        map.insert("queue".to_string(), toml::Value::String(self.queue.clone()));
        toml::Value::Table(map)
    }
}

pub fn write_launch_config_to_file(path: &str, config: &LaunchConfig) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    let toml = config.to_toml();
    file.write_all(toml::to_string(&toml).unwrap().as_bytes())
}

pub fn read_launch_config_from_file(path: &str) -> io::Result<LaunchConfig> {
    let content = fs::read_to_string(path)?;
    let toml = toml::from_str::<toml::Value>(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(LaunchConfig::from_toml(&toml))
}

/// One simulation replicate: a repetition index and a scaled force level.
#[derive(Debug, Clone)]
pub struct Job {
    pub repetition: usize,
    pub force: f64,
    pub dir: PathBuf,
}

/// Directory name of a force level: integral forces print without the
/// decimal part, matching the existing job trees.
pub fn force_dir_name(force: f64) -> String {
    if force == force.trunc() {
        format!("{}", force as i64)
    } else {
        format!("{}", force)
    }
}

pub fn job_list(config: &LaunchConfig) -> Vec<Job> {
    let mut jobs = Vec::new();
    for rep in 0..config.repetitions {
        for level in 0..config.force_levels {
            let force = level as f64 / config.divisor as f64;
            let dir = Path::new(&config.out_dir)
                .join(rep.to_string())
                .join(force_dir_name(force));
            jobs.push(Job { repetition: rep, force, dir });
        }
    }
    jobs
}

fn run_checked(command: &mut Command, what: &str) -> io::Result<()> {
    let status = command.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} exited with {}", what, status),
        ))
    }
}

/// Create the job directory and its constraint files. The piDMD complex
/// binary is run twice against the structure's dynamic and static templates;
/// the dynamic output is expanded with the job's force as energy step and
/// concatenated with the static constraints.
pub fn prepare_job(config: &LaunchConfig, job: &Job) -> io::Result<()> {
    fs::create_dir_all(&job.dir)?;

    let complex_bin = Path::new(&config.pidmd_dir).join("complex.linux");
    let parameter_dir = Path::new(&config.pidmd_dir).join("parameter");
    let in_pdb = format!("{}/infiles/in.pdb", config.structure_name);
    let dynamic_template = format!("{}/infiles/dynamic_constraints_template", config.structure_name);
    let static_template = format!("{}/infiles/static_constraints_template", config.structure_name);

    let tmp_constraints = job.dir.join("tmp_cons");
    let dynamic_constraints = job.dir.join("dynamic_constraints");
    let static_constraints = job.dir.join("static_constraints");
    let constraints = job.dir.join("constraints");
    let param_file = job.dir.join("param");
    let state_file = job.dir.join("state");

    let launch_params = |template: &str, out: &Path| -> Command {
        let mut command = Command::new(&complex_bin);
        command
            .arg("-P").arg(&parameter_dir)
            .arg("-I").arg(&in_pdb)
            .arg("-D").arg(config.box_size.to_string())
            .arg("-p").arg(&param_file)
            .arg("-s").arg(&state_file)
            .arg("-C").arg(template)
            .arg("-c").arg(out)
            .stdout(Stdio::null());
        command
    };

    run_checked(&mut launch_params(&dynamic_template, &tmp_constraints), "complex.linux")?;
    run_checked(&mut launch_params(&static_template, &static_constraints), "complex.linux")?;

    process_constraints_template(
        &tmp_constraints,
        &dynamic_constraints,
        config.min_dist,
        config.max_dist,
        job.force,
    )?;

    let mut combined = fs::read_to_string(&dynamic_constraints)?;
    combined.push_str(&fs::read_to_string(&static_constraints)?);
    fs::write(&constraints, combined)?;
    Ok(())
}

/// Submit one prepared job through qsub.
pub fn submit_job(config: &LaunchConfig, job: &Job) -> io::Result<()> {
    let dmd_bin = Path::new(&config.pidmd_dir).join("pdmd.linux");
    let mut command = Command::new("qsub");
    command
        .arg("-b").arg("y")
        .arg("-cwd")
        .arg("-N").arg(format!("DMD_R_{}", config.structure_name))
        .arg("-q").arg(&config.queue)
        .arg(&dmd_bin)
        .arg("-i").arg("inputs/relaxation.input")
        .arg("-p").arg(job.dir.join("param"))
        .arg("-s").arg(job.dir.join("state"))
        .arg("-c").arg(job.dir.join("constraints"));
    run_checked(&mut command, "qsub")
}

/// Prepare all job directories in parallel, then submit the prepared ones
/// in order. Failed replicates are logged and skipped; there are no retries.
/// Returns the number of submitted jobs.
pub fn run_batch(config: &LaunchConfig) -> io::Result<usize> {
    fs::create_dir_all(&config.out_dir)?;
    let config_path = Path::new(&config.out_dir).join("launch.toml");
    write_launch_config_to_file(config_path.to_str().unwrap(), config)?;

    let jobs = job_list(config);
    print_log_msg(INFO, &format!("Preparing {} job directories", jobs.len()));

    let prepared: Vec<&Job> = jobs
        .par_iter()
        .filter_map(|job| match prepare_job(config, job) {
            Ok(()) => Some(job),
            Err(e) => {
                print_log_msg(
                    FAIL,
                    &format!("Skipping job {}: {}", job.dir.display(), e),
                );
                None
            }
        })
        .collect();

    let mut submitted = 0;
    for job in prepared {
        match submit_job(config, job) {
            Ok(()) => submitted += 1,
            Err(e) => print_log_msg(
                FAIL,
                &format!("Submission failed for {}: {}", job.dir.display(), e),
            ),
        }
    }
    Ok(submitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_config() -> LaunchConfig {
        LaunchConfig {
            repetitions: 2,
            force_levels: 3,
            divisor: 2,
            structure_name: "1sq0".to_string(),
            min_dist: 35,
            max_dist: 45,
            box_size: 300,
            pidmd_dir: "/opt/pidmd".to_string(),
            out_dir: "runs".to_string(),
            queue: "all.q".to_string(),
        }
    }

    #[test]
    fn test_force_dir_name() {
        assert_eq!(force_dir_name(0.0), "0");
        assert_eq!(force_dir_name(1.0), "1");
        assert_eq!(force_dir_name(0.5), "0.5");
        assert_eq!(force_dir_name(1.25), "1.25");
    }

    #[test]
    fn test_job_list_layout() {
        let config = toy_config();
        let jobs = job_list(&config);
        assert_eq!(jobs.len(), 6);
        assert_eq!(jobs[0].dir, PathBuf::from("runs/0/0"));
        assert_eq!(jobs[1].dir, PathBuf::from("runs/0/0.5"));
        assert_eq!(jobs[2].dir, PathBuf::from("runs/0/1"));
        assert_eq!(jobs[5].dir, PathBuf::from("runs/1/1"));
        assert_eq!(jobs[4].force, 0.5);
    }

    #[test]
    fn test_launch_config_toml_round_trip() {
        let config = toy_config();
        let path = std::env::temp_dir().join("dmdpull_launch_config_test.toml");
        write_launch_config_to_file(path.to_str().unwrap(), &config).unwrap();
        let loaded = read_launch_config_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }
}
