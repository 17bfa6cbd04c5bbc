use clap::ValueEnum;
use std::fmt;

/// Species the annotation service can be queried for. The CLI accepts only
/// these keys; each maps to the scientific name used in request URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Species {
    Human,
    Mouse,
    Fly,
    Zebrafish,
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Human,
        Species::Mouse,
        Species::Fly,
        Species::Zebrafish,
    ];

    pub fn canonical_name(self) -> &'static str {
        match self {
            Species::Human => "homo_sapiens",
            Species::Mouse => "mus_musculus",
            Species::Fly => "drosophila_melanogaster",
            Species::Zebrafish => "danio_rerio",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Species::Human => "human",
            Species::Mouse => "mouse",
            Species::Fly => "fly",
            Species::Zebrafish => "zebrafish",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
