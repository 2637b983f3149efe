use crate::enzyme::EnzymeSpec;

/// A single recognition-site match in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteOccurrence<'e> {
    /// 0-based index of the first base of the match
    pub position: usize,
    pub enzyme: &'e EnzymeSpec,
}

impl<'e> SiteOccurrence<'e> {
    /// Where the enzyme cuts the top strand for this match. `None` if the cut
    /// lies before the start of the sequence.
    pub fn cut_coordinate(&self) -> Option<usize> {
        self.enzyme.cut_coordinate(self.position)
    }

    /// One past the last base of the recognition site.
    pub fn site_end(&self) -> usize {
        self.position + self.enzyme.site_length()
    }
}

///
/// Find every recognition site of `enzymes` in `sequence`.
///
/// Matches of different enzymes may overlap; matches of the same enzyme do not
/// (scanning for an enzyme resumes after the end of its previous match).
/// Results are ordered by position, ties keep the order of `enzymes`.
///
/// # Arguments
/// - sequence: the sequence to scan, any case, IUPAC symbols allowed
/// - enzymes: the enzymes to search for
pub fn find_sites<'e>(sequence: &[u8], enzymes: &[&'e EnzymeSpec]) -> Vec<SiteOccurrence<'e>> {
    let mut sites = Vec::new();

    for &enzyme in enzymes {
        let pattern_length = enzyme.pattern_length();
        if pattern_length > sequence.len() {
            continue;
        }

        let last_start = sequence.len() - pattern_length;
        let mut position = 0;
        while position <= last_start {
            if enzyme.matches_at(sequence, position) {
                sites.push(SiteOccurrence { position, enzyme });
                position += pattern_length;
            } else {
                position += 1;
            }
        }
    }

    // stable: ties stay in enzyme order
    sites.sort_by_key(|site| site.position);

    sites
}
