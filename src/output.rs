use crate::{config::OutputPaths, error::PromoterError, pipeline::PromoterRecord};
use csv::WriterBuilder;
use log::warn;
use promoter_engine::{PROMOTER_LENGTH, Strand};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Seek, SeekFrom, Write},
    path::Path,
};

const GENE_INFO_HEADER: [&str; 6] = [
    "gene_name",
    "promoter_start",
    "promoter_end",
    "gene_start",
    "gene_end",
    "strand",
];

const SAM_HEADER: [&str; 11] = [
    "QNAME", "FLAG", "RNAME", "POS", "MAPQ", "CIGAR", "RNEXT", "PNEXT", "TLEN", "SEQ", "QUAL",
];

const SAM_MAPQ_UNAVAILABLE: u8 = 255;

#[derive(Debug, Serialize)]
struct GeneInfoRow<'a> {
    gene_name: &'a str,
    promoter_start: i64,
    promoter_end: i64,
    gene_start: i64,
    gene_end: i64,
    strand: Strand,
}

impl<'a> From<&'a PromoterRecord> for GeneInfoRow<'a> {
    fn from(record: &'a PromoterRecord) -> Self {
        Self {
            gene_name: &record.gene_name,
            promoter_start: record.interval.start,
            promoter_end: record.interval.end,
            gene_start: record.gene.start,
            gene_end: record.gene.end,
            strand: record.gene.strand,
        }
    }
}

/// One unpaired, unaligned SAM-like line placing the promoter on its
/// sequence region.
#[derive(Debug, Serialize)]
struct SamRow<'a> {
    qname: String,
    flag: u16,
    rname: &'a str,
    pos: i64,
    mapq: u8,
    cigar: String,
    rnext: &'a str,
    pnext: i64,
    tlen: i64,
    seq: &'a str,
    qual: &'a str,
}

impl<'a> From<&'a PromoterRecord> for SamRow<'a> {
    fn from(record: &'a PromoterRecord) -> Self {
        Self {
            qname: record.fasta_header(),
            flag: 0,
            rname: &record.gene.seq_region_name,
            pos: record.interval.start,
            mapq: SAM_MAPQ_UNAVAILABLE,
            cigar: format!("{PROMOTER_LENGTH}M"),
            rnext: "*",
            pnext: 0,
            tlen: 0,
            seq: record.forward_sequence(),
            qual: "*",
        }
    }
}

/// The three output files of a run. Table rows go straight to their
/// files; FASTA records are kept in memory until [`PromoterWriters::finish`].
pub struct PromoterWriters {
    paths: OutputPaths,
    gene_info: File,
    sam: File,
    fasta: BufWriter<File>,
    fasta_records: Vec<String>,
}

impl PromoterWriters {
    pub fn create(paths: &OutputPaths) -> Result<Self, PromoterError> {
        let mut gene_info = create_file(&paths.gene_info)?;
        let header = encode(b',', |w| w.write_record(GENE_INFO_HEADER))?;
        gene_info
            .write_all(&header)
            .map_err(|e| PromoterError::io(&paths.gene_info, e))?;

        let mut sam = create_file(&paths.sam)?;
        let header = encode(b'\t', |w| w.write_record(SAM_HEADER))?;
        sam.write_all(&header)
            .map_err(|e| PromoterError::io(&paths.sam, e))?;

        let fasta = BufWriter::new(create_file(&paths.fasta)?);

        Ok(Self {
            paths: paths.clone(),
            gene_info,
            sam,
            fasta,
            fasta_records: vec![],
        })
    }

    /// Appends one gene to every output. Both table rows are encoded before
    /// either file is touched, and a failed append is cut back off both
    /// tables, so the files never disagree on how many genes they hold.
    pub fn write(&mut self, record: &PromoterRecord) -> Result<(), PromoterError> {
        let table_row = encode(b',', |w| w.serialize(GeneInfoRow::from(record)))?;
        let sam_row = encode(b'\t', |w| w.serialize(SamRow::from(record)))?;

        let table_len = end_of(&mut self.gene_info, &self.paths.gene_info)?;
        let sam_len = end_of(&mut self.sam, &self.paths.sam)?;
        if let Err(e) = self.gene_info.write_all(&table_row) {
            truncate(&mut self.gene_info, &self.paths.gene_info, table_len);
            return Err(PromoterError::io(&self.paths.gene_info, e));
        }
        if let Err(e) = self.sam.write_all(&sam_row) {
            truncate(&mut self.gene_info, &self.paths.gene_info, table_len);
            truncate(&mut self.sam, &self.paths.sam, sam_len);
            return Err(PromoterError::io(&self.paths.sam, e));
        }

        self.fasta_records
            .push(format!("{}\n{}", record.fasta_header(), record.sequence));
        Ok(())
    }

    /// Number of genes written so far.
    pub fn len(&self) -> usize {
        self.fasta_records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fasta_records.is_empty()
    }

    /// Flushes the table files and writes all FASTA records, separated by
    /// single newlines.
    pub fn finish(self) -> Result<OutputPaths, PromoterError> {
        let Self {
            paths,
            mut gene_info,
            mut sam,
            mut fasta,
            fasta_records,
        } = self;
        gene_info
            .flush()
            .map_err(|e| PromoterError::io(&paths.gene_info, e))?;
        sam.flush().map_err(|e| PromoterError::io(&paths.sam, e))?;
        fasta
            .write_all(fasta_records.join("\n").as_bytes())
            .and_then(|_| fasta.flush())
            .map_err(|e| PromoterError::io(&paths.fasta, e))?;
        Ok(paths)
    }
}

/// Renders one delimited record into memory.
fn encode<F>(delimiter: u8, fill: F) -> Result<Vec<u8>, PromoterError>
where
    F: FnOnce(&mut csv::Writer<Vec<u8>>) -> csv::Result<()>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_writer(vec![]);
    fill(&mut writer)?;
    writer
        .into_inner()
        .map_err(|e| PromoterError::Csv(e.into_error().into()))
}

fn create_file(path: &Path) -> Result<File, PromoterError> {
    File::create(path).map_err(|e| PromoterError::io(path, e))
}

fn end_of(file: &mut File, path: &Path) -> Result<u64, PromoterError> {
    file.seek(SeekFrom::End(0))
        .map_err(|e| PromoterError::io(path, e))
}

fn truncate(file: &mut File, path: &Path, len: u64) {
    let cut = file
        .set_len(len)
        .and_then(|_| file.seek(SeekFrom::Start(len)).map(|_| ()));
    if let Err(e) = cut {
        warn!("Could not cut '{}' back to {len} bytes: {e}", path.display());
    }
}
