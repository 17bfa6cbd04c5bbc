/// Shown by `--version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nBuild ",
    env!("PROMOTER_BUILD_N"),
    "\nUpstream promoter sequences from the Ensembl REST API"
);
