use crate::{interval::PromoterInterval, strand::Strand};
use serde::{Deserialize, Serialize};

/// Gene coordinates as reported by a symbol lookup. `start <= end`, both
/// 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub start: i64,
    pub end: i64,
    pub strand: Strand,
    pub seq_region_name: String,
    pub species: String,
}

impl GeneRecord {
    pub fn promoter_interval(&self) -> PromoterInterval {
        PromoterInterval::upstream_of(self.start, self.end, self.strand)
    }
}
