//! I/O-free core of the promoter fetcher: strand handling, promoter
//! interval arithmetic and reverse complement.

pub mod gene;
pub mod interval;
pub mod sequence;
pub mod strand;

pub use gene::GeneRecord;
pub use interval::{PROMOTER_LENGTH, PromoterInterval};
pub use sequence::{complement_base, orient, reverse_complement};
pub use strand::Strand;
