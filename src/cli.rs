use crate::{about, error::PromoterError, species::Species};
use clap::{ArgGroup, Parser};
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(
    version,
    long_version = about::LONG_VERSION,
    about = "Get promoter sequences for a list of genes.",
    long_about = None,
    group(ArgGroup::new("input").required(true).multiple(false).args(["genes", "file"]))
)]
pub struct Args {
    /// Species genome to use
    #[arg(short = 's', long, value_enum)]
    pub species: Species,

    /// Comma-separated list of gene names
    #[arg(short = 'g', long)]
    pub genes: Option<String>,

    /// File containing a list of gene names, one per line
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "species={}", self.species)?;
        if let Some(genes) = &self.genes {
            write!(f, ", genes={genes}")?;
        }
        if let Some(file) = &self.file {
            write!(f, ", file={}", file.display())?;
        }
        Ok(())
    }
}

impl Args {
    /// Gene symbols to query, in input order.
    pub fn gene_names(&self) -> Result<Vec<String>, PromoterError> {
        match &self.file {
            Some(path) => read_gene_file(path),
            None => Ok(parse_gene_list(self.genes.as_deref().unwrap_or_default())),
        }
    }
}

fn clean_gene_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_string())
}

pub fn parse_gene_list(list: &str) -> Vec<String> {
    list.split(',').filter_map(clean_gene_name).collect()
}

/// One symbol per line; surrounding whitespace and blank lines are dropped.
pub fn parse_gene_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut genes = vec![];
    for line in reader.lines() {
        if let Some(name) = clean_gene_name(&line?) {
            genes.push(name);
        }
    }
    Ok(genes)
}

pub fn read_gene_file(path: &Path) -> Result<Vec<String>, PromoterError> {
    let file = File::open(path).map_err(|e| PromoterError::io(path, e))?;
    parse_gene_lines(BufReader::new(file)).map_err(|e| PromoterError::io(path, e))
}
