//! Upstream promoter sequences for a list of genes.
//!
//! Each gene symbol is looked up on the Ensembl REST API, the 1000 bases
//! upstream of it (strand-aware) are fetched, and the results are written
//! as `gene_info.csv`, `output.sam` and `output.fasta`.
//!
//! ```bash
//! get_promoter --species human --genes TP53,BRCA1
//! get_promoter -s mouse -f genes.txt
//! ```

pub mod about;
pub mod cli;
pub mod config;
pub mod ensembl;
pub mod error;
pub mod mock;
pub mod output;
pub mod pipeline;
pub mod species;

pub use cli::Args;
pub use ensembl::{EnsemblClient, GenomeService, RegionSequence};
pub use error::{PromoterError, RemoteLookupError};
pub use pipeline::{PromoterRecord, RunReport, build_promoter_record, run};
pub use species::Species;
