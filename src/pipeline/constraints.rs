// File: constraints.rs
// Description: Expansion of piDMD energy-constraint templates. Each template
// line names an atom pair; the expanded line appends a stepped square-well
// potential over the requested distance range. The byte format is consumed
// by the piDMD binaries and must not change.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Expand one template line of the form `"{atom1} {atom2} ..."` into
/// `"{atom1} {atom2} 2.4 {d} {-step} ..."` for every distance in
/// `min_dist..=max_dist`.
pub fn expand_constraint_line(
    line: &str,
    min_dist: i32,
    max_dist: i32,
    energy_step: f64,
) -> Result<String, &'static str> {
    let mut fields = line.split_whitespace();
    let first = fields.next().ok_or("Constraint line has no atom fields")?;
    let second = fields.next().ok_or("Constraint line has only one atom field")?;

    let mut expanded = format!("{} {} 2.4", first, second);
    for dist in min_dist..=max_dist {
        expanded.push_str(&format!(" {} {}", dist, -energy_step));
    }
    Ok(expanded)
}

pub fn process_constraints_template<P: AsRef<Path>, Q: AsRef<Path>>(
    template_path: P,
    out_path: Q,
    min_dist: i32,
    max_dist: i32,
    energy_step: f64,
) -> io::Result<()> {
    let reader = BufReader::new(File::open(template_path)?);
    let mut writer = BufWriter::new(File::create(out_path)?);
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let expanded = expand_constraint_line(&line, min_dist, max_dist, energy_step)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", expanded)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_line_format() {
        let expanded = expand_constraint_line("12 345", 5, 7, 0.5).unwrap();
        assert_eq!(expanded, "12 345 2.4 5 -0.5 6 -0.5 7 -0.5");
    }

    #[test]
    fn test_expand_line_single_distance() {
        let expanded = expand_constraint_line("1 2 extra ignored", 4, 4, 1.25).unwrap();
        assert_eq!(expanded, "1 2 2.4 4 -1.25");
    }

    #[test]
    fn test_expand_line_missing_fields() {
        assert!(expand_constraint_line("", 1, 3, 0.1).is_err());
        assert!(expand_constraint_line("42", 1, 3, 0.1).is_err());
    }

    #[test]
    fn test_process_template_file() {
        let dir = std::env::temp_dir();
        let template_path = dir.join("dmdpull_constraints_template_test");
        let out_path = dir.join("dmdpull_constraints_out_test");
        std::fs::write(&template_path, "1 2\n3 4\n\n").unwrap();

        process_constraints_template(&template_path, &out_path, 2, 3, 0.1).unwrap();
        let out = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(out, "1 2 2.4 2 -0.1 3 -0.1\n3 4 2.4 2 -0.1 3 -0.1\n");

        std::fs::remove_file(&template_path).ok();
        std::fs::remove_file(&out_path).ok();
    }
}
