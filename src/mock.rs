//! In-memory [`GenomeService`] used to drive the pipeline without network
//! access.

use crate::{
    ensembl::{GenomeService, RegionSequence},
    error::RemoteLookupError,
    species::Species,
};
use promoter_engine::{GeneRecord, PromoterInterval};
use std::{cell::RefCell, collections::HashMap};

#[derive(Debug, Default)]
pub struct MockGenomeService {
    genes: HashMap<(Species, String), GeneRecord>,
    regions: HashMap<(String, String, i64, i64), RegionSequence>,
    calls: RefCell<Vec<String>>,
}

impl MockGenomeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_gene(&mut self, species: Species, symbol: &str, gene: GeneRecord) {
        self.genes.insert((species, symbol.to_string()), gene);
    }

    pub fn add_region(
        &mut self,
        species: &str,
        seq_region_name: &str,
        interval: PromoterInterval,
        region: RegionSequence,
    ) {
        self.regions.insert(
            (
                species.to_string(),
                seq_region_name.to_string(),
                interval.start,
                interval.end,
            ),
            region,
        );
    }

    /// Every request seen so far, in order, as `lookup:<symbol>` or
    /// `region:<seq_region>:<start>:<end>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GenomeService for MockGenomeService {
    fn lookup_symbol(
        &self,
        species: Species,
        symbol: &str,
    ) -> Result<GeneRecord, RemoteLookupError> {
        self.calls.borrow_mut().push(format!("lookup:{symbol}"));
        self.genes
            .get(&(species, symbol.to_string()))
            .cloned()
            .ok_or_else(|| RemoteLookupError::Status {
                url: format!("mock://lookup/symbol/{}/{symbol}", species.canonical_name()),
                status: 400,
            })
    }

    fn fetch_region(
        &self,
        species: &str,
        seq_region_name: &str,
        interval: PromoterInterval,
    ) -> Result<RegionSequence, RemoteLookupError> {
        self.calls.borrow_mut().push(format!(
            "region:{seq_region_name}:{}:{}",
            interval.start, interval.end
        ));
        let key = (
            species.to_string(),
            seq_region_name.to_string(),
            interval.start,
            interval.end,
        );
        self.regions
            .get(&key)
            .cloned()
            .ok_or_else(|| RemoteLookupError::Status {
                url: format!(
                    "mock://sequence/region/{species}/{seq_region_name}:{}:{}:1",
                    interval.start, interval.end
                ),
                status: 400,
            })
    }
}
