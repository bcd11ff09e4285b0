use super::load_target;
use crate::cli::RangesArgs;
use crate::error::{CliError, Result};
use protex::core::models::subunit::Target;
use protex::validation::ranges::RangeConstraints;
use std::fmt::Write;
use tracing::info;

pub fn run(args: RangesArgs) -> Result<()> {
    let target = load_target(&args.target)?;
    print!("{}", render(&target, args.subunit.as_deref())?);
    Ok(())
}

fn render(target: &Target, only: Option<&str>) -> Result<String> {
    let subunits: Vec<_> = match only {
        Some(name) => vec![target.subunit_by_name(name).ok_or_else(|| {
            CliError::Argument(format!(
                "Target '{}' has no subunit named '{}'.",
                target.target_name, name
            ))
        })?],
        None => target.subunits.iter().collect(),
    };
    info!("Reporting bounds for {} subunit(s).", subunits.len());

    let constraints = RangeConstraints::new(&target.subunits);
    let width = subunits.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = format!("Target '{}'\n", target.target_name);
    for subunit in subunits {
        let bounds = constraints.bounds(subunit.id)?;
        let _ = writeln!(
            out,
            "  {:<width$}  copies 1..={:<4} residues 1..={}",
            subunit.name,
            bounds.max_copies,
            bounds.max_residue,
            width = width
        );
    }
    Ok(out)
}
