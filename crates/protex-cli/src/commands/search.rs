use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use protex::core::io::inventory::{TargetRow, load_inventory};
use protex::validation::search::SearchSet;
use std::fmt::Write;
use tracing::info;

pub fn run(args: SearchArgs) -> Result<()> {
    let rows = load_inventory(&args.inventory).map_err(|e| CliError::FileParsing {
        path: args.inventory.clone(),
        source: e.into(),
    })?;
    let search = SearchSet::parse(&args.query);
    let matches = search.filter_targets(&rows);
    info!("{} of {} target(s) match.", matches.len(), rows.len());
    print!("{}", render(&matches));
    Ok(())
}

fn render(rows: &[&TargetRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{} subunit(s)\t{} gene(s)\t{} plasmid(s)",
            row.target_name.as_deref().unwrap_or("-"),
            row.project_name,
            row.partner,
            row.protein_class,
            row.subunit_count,
            row.gene_count,
            row.plasmid_count
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use protex::core::io::inventory::parse_inventory;

    const INVENTORY: &str = r#"
        [[targets]]
        target-name = "TP53 Tetramer"
        project-name = "Oncology"
        subunit-count = 1

        [[targets]]
        target-name = "MDM2"

        [[targets]]
        partner = "Acme"
    "#;

    #[test]
    fn rows_matching_any_term_are_rendered() {
        let rows = parse_inventory(INVENTORY, "inline").unwrap();
        let search = SearchSet::parse("tp53tetramer, nothing");
        let out = render(&search.filter_targets(&rows));
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("TP53 Tetramer\tOncology\t"));
        assert!(out.contains("1 subunit(s)"));
    }

    #[test]
    fn empty_query_lists_named_targets() {
        let rows = parse_inventory(INVENTORY, "inline").unwrap();
        let out = render(&SearchSet::parse("").filter_targets(&rows));
        assert_eq!(out.lines().count(), 2);
    }
}
