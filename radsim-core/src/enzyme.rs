use std::fmt::{self, Display};

use crate::alphabet::{iupac_mask, mask_matches};
use crate::errors::DigestError;

///
/// A restriction enzyme: its recognition pattern and where it cuts.
///
/// The cut position is stored as a signed offset from the first base of the
/// matched recognition site to the top-strand cut, i.e. the number of site bases
/// lying 5' of the cut. `CTGCA^G` (PstI) has an offset of 5, `^GATC` (DpnII) an
/// offset of 0, and type IIS enzymes that cut downstream of their site have
/// offsets larger than the site length.
///
#[derive(Debug, Clone)]
pub struct EnzymeSpec {
    name: String,
    pattern: String,
    site_length: usize,
    cut_offset: isize,
    masks: Vec<u8>,
}

impl EnzymeSpec {
    ///
    /// Create a new enzyme whose site length is the length of its pattern.
    ///
    /// # Arguments
    /// - name: enzyme name, e.g. `PstI`
    /// - pattern: IUPAC recognition pattern, case-insensitive
    /// - cut_offset: offset of the top-strand cut from the start of the site
    pub fn new(name: &str, pattern: &str, cut_offset: isize) -> Result<EnzymeSpec, DigestError> {
        EnzymeSpec::with_site_length(name, pattern, pattern.len(), cut_offset)
    }

    ///
    /// Create a new enzyme with an explicit recognition-site length.
    ///
    pub fn with_site_length(
        name: &str,
        pattern: &str,
        site_length: usize,
        cut_offset: isize,
    ) -> Result<EnzymeSpec, DigestError> {
        let invalid = |reason: String| DigestError::InvalidEnzyme {
            name: name.to_string(),
            reason,
        };

        if name.trim().is_empty() {
            return Err(invalid("enzyme name is empty".to_string()));
        }
        if pattern.is_empty() {
            return Err(invalid("recognition pattern is empty".to_string()));
        }
        if site_length == 0 {
            return Err(invalid("site length must be greater than 0".to_string()));
        }

        let masks = pattern
            .bytes()
            .enumerate()
            .map(|(i, b)| match iupac_mask(b) {
                0 => Err(invalid(format!(
                    "pattern {} has a non-IUPAC character {:?} at position {}",
                    pattern, b as char, i
                ))),
                mask => Ok(mask),
            })
            .collect::<Result<Vec<u8>, DigestError>>()?;

        Ok(EnzymeSpec {
            name: name.to_string(),
            pattern: pattern.to_ascii_uppercase(),
            site_length,
            cut_offset,
            masks,
        })
    }

    ///
    /// Build an enzyme from a pattern that is already known to be valid IUPAC.
    /// Used for the built-in table, which is checked at compile time.
    ///
    pub(crate) fn from_checked(name: &str, pattern: &str, cut_offset: isize) -> EnzymeSpec {
        EnzymeSpec {
            name: name.to_string(),
            pattern: pattern.to_ascii_uppercase(),
            site_length: pattern.len(),
            cut_offset,
            masks: pattern.bytes().map(iupac_mask).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn site_length(&self) -> usize {
        self.site_length
    }

    pub fn cut_offset(&self) -> isize {
        self.cut_offset
    }

    /// Number of bases the pattern spans in the sequence.
    pub fn pattern_length(&self) -> usize {
        self.masks.len()
    }

    ///
    /// Check whether the recognition pattern matches `sequence` starting at `position`.
    ///
    /// Ambiguous sequence symbols only match if every base they stand for is
    /// allowed by the pattern.
    #[inline]
    pub fn matches_at(&self, sequence: &[u8], position: usize) -> bool {
        match sequence.get(position..position + self.masks.len()) {
            Some(window) => window
                .iter()
                .zip(self.masks.iter())
                .all(|(&b, &mask)| mask_matches(iupac_mask(b), mask)),
            None => false,
        }
    }

    /// Cut coordinate of a site starting at `position`, or `None` if the cut would
    /// fall before the start of the sequence.
    #[inline]
    pub fn cut_coordinate(&self, position: usize) -> Option<usize> {
        position.checked_add_signed(self.cut_offset)
    }
}

// enzymes are identified by name
impl PartialEq for EnzymeSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EnzymeSpec {}

impl Display for EnzymeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
