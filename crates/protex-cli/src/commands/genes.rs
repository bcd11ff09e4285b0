use super::load_target;
use crate::cli::GenesArgs;
use crate::error::{CliError, Result};
use protex::core::io::fasta::{FastaEntry, FastaFile};
use protex::core::io::traits::SequenceFile;
use protex::workflows;
use tracing::info;

pub fn run(args: GenesArgs) -> Result<()> {
    let target = load_target(&args.target)?;

    info!("Reading genes from {:?}", &args.fasta);
    let entries = FastaFile::read_from_path(&args.fasta).map_err(|e| CliError::FileParsing {
        path: args.fasta.clone(),
        source: e.into(),
    })?;

    let genes = workflows::genes::stage(&target, &args.subunit, &entries)?;

    println!(
        "{} gene(s) can be added to subunit '{}':",
        genes.len(),
        args.subunit
    );
    for gene in &genes {
        println!("  {} ({} bp)", gene.dna_fasta_description, gene.dna_sequence.len());
    }

    if let Some(output) = &args.output {
        let records: Vec<FastaEntry> = genes
            .iter()
            .map(|g| FastaEntry::new(&g.dna_fasta_description, &g.dna_sequence))
            .collect();
        info!("Writing {} accepted gene(s) to {:?}", records.len(), output);
        FastaFile::write_to_path(&records, output).map_err(|e| CliError::Other(e.into()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use protex::validation::genes::GeneUploadError;
    use protex::workflows::error::WorkflowError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const TARGET: &str = r#"
        target-name = "p53"

        [[subunits]]
        id = 1
        name = "TP53"
        copies = 1
        amino-acid-sequence = "MCDE"

        [[subunits.genes]]
        dna-fasta-description = "TP53_v1"
        dna-sequence = "ATGTGC"
    "#;

    fn genes_args(dir: &Path, fasta: &str, output: bool) -> GenesArgs {
        let target = dir.join("target.toml");
        let fasta_path = dir.join("upload.fasta");
        fs::write(&target, TARGET).unwrap();
        fs::write(&fasta_path, fasta).unwrap();
        GenesArgs {
            target,
            subunit: "TP53".into(),
            fasta: fasta_path,
            output: output.then(|| dir.join("accepted.fasta")),
        }
    }

    #[test]
    fn accepted_genes_are_written_to_output() {
        let dir = tempdir().unwrap();
        let args = genes_args(dir.path(), ">TP53_v2\nATGTGC\nGAT\n>TP53_no_stop\nATG\n", true);
        run(args).unwrap();

        let written = FastaFile::read_from_path(dir.path().join("accepted.fasta")).unwrap();
        assert_eq!(
            written,
            vec![
                FastaEntry::new("TP53_v2", "ATGTGCGAT"),
                FastaEntry::new("TP53_no_stop", "ATG"),
            ]
        );
    }

    #[test]
    fn wrong_subunit_rejects_the_upload() {
        let dir = tempdir().unwrap();
        let args = genes_args(dir.path(), ">TP53_v2\nATG\n>TP54_v1\nATG\n", true);
        let err = run(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Workflow(WorkflowError::GeneUpload(GeneUploadError::WrongSubunit(_)))
        ));
        assert_eq!(
            err.to_string(),
            "Attempted to add a gene to wrong subunit (TP54). No genes were added."
        );
        assert!(!dir.path().join("accepted.fasta").exists());
    }

    #[test]
    fn duplicate_gene_rejects_the_upload() {
        let dir = tempdir().unwrap();
        let args = genes_args(dir.path(), ">TP53_v1\nATG\n", false);
        assert_eq!(
            run(args).unwrap_err().to_string(),
            "Attempted to add a duplicate gene (TP53_v1). No genes were added."
        );
    }

    #[test]
    fn malformed_fasta_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let args = genes_args(dir.path(), "ATG\n>TP53_v2\nATG\n", false);
        assert!(matches!(run(args), Err(CliError::FileParsing { .. })));
    }
}
