use crate::ensembl::DEFAULT_ENSEMBL_SERVER;
use std::path::{Path, PathBuf};

pub const GENE_INFO_FILE: &str = "gene_info.csv";
pub const SAM_FILE: &str = "output.sam";
pub const FASTA_FILE: &str = "output.fasta";

/// Settings for one run. The command line always uses the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoterConfig {
    pub server: String,
    pub output_dir: PathBuf,
}

impl Default for PromoterConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_ENSEMBL_SERVER.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl PromoterConfig {
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::in_dir(&self.output_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub gene_info: PathBuf,
    pub sam: PathBuf,
    pub fasta: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            gene_info: dir.join(GENE_INFO_FILE),
            sam: dir.join(SAM_FILE),
            fasta: dir.join(FASTA_FILE),
        }
    }
}
