use crate::{error::RemoteLookupError, species::Species};
use bio::io::fasta;
use log::debug;
use promoter_engine::{GeneRecord, PromoterInterval};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

pub const DEFAULT_ENSEMBL_SERVER: &str = "https://rest.ensembl.org";

const JSON_CONTENT_TYPE: &str = "application/json";
const FASTA_CONTENT_TYPE: &str = "text/x-fasta";

/// Forward-strand sequence of a genomic region, as served by the
/// annotation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSequence {
    /// Header line without the leading `>`.
    pub header: String,
    /// Body with line breaks removed.
    pub sequence: String,
}

/// The two remote operations a promoter run needs.
pub trait GenomeService {
    fn lookup_symbol(&self, species: Species, symbol: &str)
    -> Result<GeneRecord, RemoteLookupError>;

    /// `species` is the canonical name echoed by [`GenomeService::lookup_symbol`].
    /// The region is always read on the forward strand.
    fn fetch_region(
        &self,
        species: &str,
        seq_region_name: &str,
        interval: PromoterInterval,
    ) -> Result<RegionSequence, RemoteLookupError>;
}

/// Splits a single-record FASTA text into header and contiguous sequence.
pub fn parse_region_fasta(text: &str) -> Result<RegionSequence, String> {
    let record = fasta::Reader::new(text.as_bytes())
        .records()
        .next()
        .ok_or_else(|| "response does not contain a FASTA record".to_string())?
        .map_err(|e| format!("could not parse FASTA response: {e}"))?;
    // bio splits the header into id and description; keep the raw line.
    let header = text
        .lines()
        .next()
        .and_then(|line| line.strip_prefix('>'))
        .unwrap_or_else(|| record.id())
        .to_string();
    let sequence = String::from_utf8(record.seq().to_vec())
        .map_err(|e| format!("sequence is not valid UTF-8: {e}"))?;
    Ok(RegionSequence { header, sequence })
}

/// Blocking client for the Ensembl REST API.
#[derive(Debug, Clone)]
pub struct EnsemblClient {
    server: String,
    http: Client,
}

impl EnsemblClient {
    pub fn new(server: &str) -> Result<Self, RemoteLookupError> {
        let server = server.trim_end_matches('/').to_string();
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| RemoteLookupError::Transport {
                url: server.clone(),
                source,
            })?;
        Ok(Self { server, http })
    }

    pub fn lookup_url(&self, species: Species, symbol: &str) -> String {
        format!(
            "{}/lookup/symbol/{}/{}?content-type={JSON_CONTENT_TYPE}",
            self.server,
            species.canonical_name(),
            symbol
        )
    }

    pub fn region_url(
        &self,
        species: &str,
        seq_region_name: &str,
        interval: PromoterInterval,
    ) -> String {
        format!(
            "{}/sequence/region/{}/{}:{}:{}:1?content-type={FASTA_CONTENT_TYPE}",
            self.server, species, seq_region_name, interval.start, interval.end
        )
    }

    fn get(&self, url: &str, content_type: &str) -> Result<Response, RemoteLookupError> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, content_type)
            .send()
            .map_err(|source| RemoteLookupError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteLookupError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    fn get_text(&self, url: &str, content_type: &str) -> Result<String, RemoteLookupError> {
        self.get(url, content_type)?
            .text()
            .map_err(|source| RemoteLookupError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

impl GenomeService for EnsemblClient {
    fn lookup_symbol(
        &self,
        species: Species,
        symbol: &str,
    ) -> Result<GeneRecord, RemoteLookupError> {
        let url = self.lookup_url(species, symbol);
        let body = self.get_text(&url, JSON_CONTENT_TYPE)?;
        serde_json::from_str(&body).map_err(|e| RemoteLookupError::Malformed {
            url,
            message: e.to_string(),
        })
    }

    fn fetch_region(
        &self,
        species: &str,
        seq_region_name: &str,
        interval: PromoterInterval,
    ) -> Result<RegionSequence, RemoteLookupError> {
        let url = self.region_url(species, seq_region_name, interval);
        let body = self.get_text(&url, FASTA_CONTENT_TYPE)?;
        parse_region_fasta(&body).map_err(|message| RemoteLookupError::Malformed { url, message })
    }
}
