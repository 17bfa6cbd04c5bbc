use crate::strand::Strand;
use serde::{Deserialize, Serialize};

/// Width of every promoter region, in bases.
pub const PROMOTER_LENGTH: i64 = 1000;

/// A 1-based, inclusive genomic interval directly upstream of a gene.
///
/// Coordinates are signed and never clamped: a gene close to the start of
/// its sequence region yields a promoter that begins at or below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoterInterval {
    pub start: i64,
    pub end: i64,
}

impl PromoterInterval {
    /// Upstream is orientation-relative: below `gene_start` on the forward
    /// strand, above `gene_end` on the reverse strand.
    pub fn upstream_of(gene_start: i64, gene_end: i64, strand: Strand) -> Self {
        match strand {
            Strand::Forward => Self {
                start: gene_start - PROMOTER_LENGTH,
                end: gene_start - 1,
            },
            Strand::Reverse => Self {
                start: gene_end + 1,
                end: gene_end + PROMOTER_LENGTH,
            },
        }
    }

    /// Number of bases covered, both ends included.
    pub fn width(&self) -> i64 {
        self.end - self.start + 1
    }
}
