use crate::strand::Strand;

/// Watson-Crick complement of an upper-case canonical base. Anything else
/// (N, lower case, IUPAC ambiguity codes) is returned unchanged.
#[inline(always)]
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        _ => base,
    }
}

pub fn reverse_complement(dna: &str) -> String {
    dna.chars().rev().map(complement_base).collect()
}

/// Reads `forward` 5'->3' on `strand`.
pub fn orient(forward: &str, strand: Strand) -> String {
    match strand {
        Strand::Forward => forward.to_string(),
        Strand::Reverse => reverse_complement(forward),
    }
}
