use crate::{
    config::OutputPaths,
    ensembl::{GenomeService, RegionSequence},
    error::{PromoterError, RemoteLookupError},
    output::PromoterWriters,
    species::Species,
};
use log::{debug, info, warn};
use promoter_engine::{GeneRecord, PromoterInterval, orient};

/// Everything the emitters need for one gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoterRecord {
    pub gene_name: String,
    pub gene: GeneRecord,
    pub interval: PromoterInterval,
    pub region: RegionSequence,
    /// Promoter read 5'->3' on the gene's strand.
    pub sequence: String,
}

impl PromoterRecord {
    pub fn fasta_header(&self) -> String {
        format!(">{} | {}", self.gene_name, self.region.header)
    }

    /// Forward-strand promoter, as served for the region.
    pub fn forward_sequence(&self) -> &str {
        &self.region.sequence
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub genes_written: usize,
    pub paths: OutputPaths,
}

/// Looks up `gene_name`, fetches its promoter and orients it. Both remote
/// calls finish before anything is returned.
pub fn build_promoter_record<S: GenomeService + ?Sized>(
    service: &S,
    species: Species,
    gene_name: &str,
) -> Result<PromoterRecord, RemoteLookupError> {
    let gene = service.lookup_symbol(species, gene_name)?;
    let interval = gene.promoter_interval();
    debug!(
        "{gene_name}: gene {}:{}-{} strand {}, promoter {}-{} ({} bp)",
        gene.seq_region_name,
        gene.start,
        gene.end,
        gene.strand,
        interval.start,
        interval.end,
        interval.width()
    );
    let region = service.fetch_region(&gene.species, &gene.seq_region_name, interval)?;
    let sequence = orient(&region.sequence, gene.strand);
    Ok(PromoterRecord {
        gene_name: gene_name.to_string(),
        gene,
        interval,
        region,
        sequence,
    })
}

/// Processes `gene_names` in order and writes the three output files.
///
/// The first failure stops the run. Output files still hold every gene
/// processed before it, and no file is ahead of another.
pub fn run<S: GenomeService + ?Sized>(
    service: &S,
    species: Species,
    gene_names: &[String],
    paths: &OutputPaths,
) -> Result<RunReport, PromoterError> {
    info!(
        "Fetching promoters for {} gene(s) in {}",
        gene_names.len(),
        species.canonical_name()
    );
    let mut writers = PromoterWriters::create(paths)?;

    for gene_name in gene_names {
        info!("Processing {gene_name}");
        let written = build_promoter_record(service, species, gene_name)
            .map_err(PromoterError::from)
            .and_then(|record| writers.write(&record));
        if let Err(e) = written {
            let done = writers.len();
            if let Err(finish_err) = writers.finish() {
                warn!("Could not finish output files after {done} gene(s): {finish_err}");
            }
            return Err(e);
        }
    }

    if writers.is_empty() {
        warn!("No gene names given, writing headers only");
    }
    let genes_written = writers.len();
    let paths = writers.finish()?;
    info!(
        "Wrote {genes_written} promoter(s) to {}, {} and {}",
        paths.gene_info.display(),
        paths.sam.display(),
        paths.fasta.display()
    );
    Ok(RunReport {
        genes_written,
        paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGenomeService;
    use promoter_engine::Strand;
    use std::fs;
    use tempfile::tempdir;

    fn gene(start: i64, end: i64, strand: Strand, seq_region_name: &str) -> GeneRecord {
        GeneRecord {
            start,
            end,
            strand,
            seq_region_name: seq_region_name.to_string(),
            species: "homo_sapiens".to_string(),
        }
    }

    fn region(header: &str, sequence: &str) -> RegionSequence {
        RegionSequence {
            header: header.to_string(),
            sequence: sequence.to_string(),
        }
    }

    fn add_gene(
        service: &mut MockGenomeService,
        symbol: &str,
        record: GeneRecord,
        header: &str,
        sequence: &str,
    ) {
        let interval = record.promoter_interval();
        service.add_region(
            &record.species,
            &record.seq_region_name,
            interval,
            region(header, sequence),
        );
        service.add_gene(Species::Human, symbol, record);
    }

    fn names(genes: &[&str]) -> Vec<String> {
        genes.iter().map(|g| g.to_string()).collect()
    }

    #[test]
    fn test_tp53_forward_strand_end_to_end() {
        let td = tempdir().unwrap();
        let paths = OutputPaths::in_dir(td.path());
        let body = "A".repeat(1000);
        let mut service = MockGenomeService::new();
        add_gene(
            &mut service,
            "TP53",
            gene(100_000, 105_000, Strand::Forward, "17"),
            "17:99000-99999",
            &body,
        );

        let report = run(&service, Species::Human, &names(&["TP53"]), &paths).unwrap();
        assert_eq!(report.genes_written, 1);
        assert_eq!(
            service.calls(),
            vec!["lookup:TP53".to_string(), "region:17:99000:99999".to_string()]
        );

        let csv = fs::read_to_string(&paths.gene_info).unwrap();
        assert_eq!(
            csv,
            "gene_name,promoter_start,promoter_end,gene_start,gene_end,strand\n\
             TP53,99000,99999,100000,105000,1\n"
        );

        let sam = fs::read_to_string(&paths.sam).unwrap();
        let rows: Vec<&str> = sam.lines().collect();
        assert_eq!(rows.len(), 2);
        let cols: Vec<&str> = rows[1].split('\t').collect();
        assert_eq!(cols.len(), 11);
        assert_eq!(cols[0], ">TP53 | 17:99000-99999");
        assert_eq!(cols[2], "17");
        assert_eq!(cols[3], "99000");
        assert_eq!(cols[5], "1000M");
        assert_eq!(cols[9], body);

        let fasta = fs::read_to_string(&paths.fasta).unwrap();
        assert_eq!(fasta, format!(">TP53 | 17:99000-99999\n{body}"));
    }

    #[test]
    fn test_reverse_strand_gene_is_complemented_only_in_fasta() {
        let td = tempdir().unwrap();
        let paths = OutputPaths::in_dir(td.path());
        let mut service = MockGenomeService::new();
        add_gene(
            &mut service,
            "BRCA1",
            gene(43_044_295, 43_125_483, Strand::Reverse, "17"),
            "chromosome:GRCh38:17:43125484:43126483:1",
            "AAACCG",
        );

        let record = build_promoter_record(&service, Species::Human, "BRCA1").unwrap();
        assert_eq!(record.interval.start, 43_125_484);
        assert_eq!(record.interval.end, 43_126_483);
        assert_eq!(record.sequence, "CGGTTT");
        assert_eq!(record.forward_sequence(), "AAACCG");

        run(&service, Species::Human, &names(&["BRCA1"]), &paths).unwrap();
        let csv = fs::read_to_string(&paths.gene_info).unwrap();
        assert!(csv.ends_with("BRCA1,43125484,43126483,43044295,43125483,-1\n"));

        let sam = fs::read_to_string(&paths.sam).unwrap();
        let cols: Vec<&str> = sam.lines().nth(1).unwrap().split('\t').collect();
        assert_eq!(cols[3], "43125484");
        assert_eq!(cols[9], "AAACCG");

        let fasta = fs::read_to_string(&paths.fasta).unwrap();
        assert_eq!(
            fasta,
            ">BRCA1 | chromosome:GRCh38:17:43125484:43126483:1\nCGGTTT"
        );
    }

    #[test]
    fn test_failure_stops_run_with_outputs_aligned() {
        let td = tempdir().unwrap();
        let paths = OutputPaths::in_dir(td.path());
        let mut service = MockGenomeService::new();
        add_gene(
            &mut service,
            "TP53",
            gene(100_000, 105_000, Strand::Forward, "17"),
            "17:99000-99999",
            "ACGT",
        );
        add_gene(
            &mut service,
            "EGFR",
            gene(55_019_017, 55_211_628, Strand::Forward, "7"),
            "7:55018017-55019016",
            "GGCC",
        );

        let err = run(
            &service,
            Species::Human,
            &names(&["TP53", "NOT_A_GENE", "EGFR"]),
            &paths,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PromoterError::Remote(RemoteLookupError::Status { status: 400, .. })
        ));
        assert!(!service.calls().contains(&"lookup:EGFR".to_string()));

        let csv = fs::read_to_string(&paths.gene_info).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(!csv.contains("EGFR"));
        let sam = fs::read_to_string(&paths.sam).unwrap();
        assert_eq!(sam.lines().count(), 2);
        let fasta = fs::read_to_string(&paths.fasta).unwrap();
        assert_eq!(fasta, ">TP53 | 17:99000-99999\nACGT");
    }

    #[test]
    fn test_sequence_failure_writes_no_partial_row() {
        let td = tempdir().unwrap();
        let paths = OutputPaths::in_dir(td.path());
        let mut service = MockGenomeService::new();
        service.add_gene(
            Species::Human,
            "TP53",
            gene(100_000, 105_000, Strand::Forward, "17"),
        );

        let err = run(&service, Species::Human, &names(&["TP53"]), &paths).unwrap_err();
        assert!(matches!(err, PromoterError::Remote(_)));
        assert_eq!(
            service.calls(),
            vec!["lookup:TP53".to_string(), "region:17:99000:99999".to_string()]
        );
        assert_eq!(fs::read_to_string(&paths.gene_info).unwrap().lines().count(), 1);
        assert_eq!(fs::read_to_string(&paths.sam).unwrap().lines().count(), 1);
        assert_eq!(fs::read_to_string(&paths.fasta).unwrap(), "");
    }

    #[test]
    fn test_multiple_genes_keep_input_order() {
        let td = tempdir().unwrap();
        let paths = OutputPaths::in_dir(td.path());
        let mut service = MockGenomeService::new();
        add_gene(
            &mut service,
            "B",
            gene(5_000, 6_000, Strand::Reverse, "2"),
            "2:6001-7000",
            "TTTA",
        );
        add_gene(
            &mut service,
            "A",
            gene(3_000, 4_000, Strand::Forward, "1"),
            "1:2000-2999",
            "CCGA",
        );

        let report = run(&service, Species::Human, &names(&["B", "A"]), &paths).unwrap();
        assert_eq!(report.genes_written, 2);
        let fasta = fs::read_to_string(&paths.fasta).unwrap();
        assert_eq!(fasta, ">B | 2:6001-7000\nTAAA\n>A | 1:2000-2999\nCCGA");
        let csv = fs::read_to_string(&paths.gene_info).unwrap();
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows, vec!["B,6001,7000,5000,6000,-1", "A,2000,2999,3000,4000,1"]);
    }
}
