use std::fmt::{self, Display};

use crate::enzyme::EnzymeSpec;

///
/// How fragment boundaries are placed relative to the two sites that border it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentBounds {
    /// From the first base of the left recognition site to the last base of
    /// the right recognition site. Neighbouring fragments share a site.
    #[default]
    Sites,
    /// Exactly between the two cut coordinates. Neighbouring fragments abut.
    Cuts,
}

///
/// One digestion product: the half-open interval `[lhs, rhs)` of the source
/// sequence, plus the enzymes that produced each end.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'e> {
    pub lhs: usize,
    pub rhs: usize,
    pub lhs_enzyme: &'e EnzymeSpec,
    pub rhs_enzyme: &'e EnzymeSpec,
}

impl<'e> Fragment<'e> {
    pub fn len(&self) -> usize {
        self.rhs - self.lhs
    }

    pub fn is_empty(&self) -> bool {
        self.rhs <= self.lhs
    }

    /// Whether each end was cut by a different enzyme.
    pub fn has_mixed_ends(&self) -> bool {
        self.lhs_enzyme != self.rhs_enzyme
    }

    /// The fragment's subsequence of `sequence`.
    pub fn slice<'s>(&self, sequence: &'s [u8]) -> &'s [u8] {
        &sequence[self.lhs..self.rhs]
    }
}

impl Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]_{}[{}]",
            self.lhs, self.lhs_enzyme, self.rhs, self.rhs_enzyme
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_fragment_accessors() {
        let pst1 = EnzymeSpec::new("PstI", "CTGCAG", 5).unwrap();
        let eco_rv = EnzymeSpec::new("EcoRV", "GATATC", 3).unwrap();

        let frag = Fragment {
            lhs: 2,
            rhs: 19,
            lhs_enzyme: &pst1,
            rhs_enzyme: &eco_rv,
        };

        assert_eq!(frag.len(), 17);
        assert!(!frag.is_empty());
        assert!(frag.has_mixed_ends());
        assert_eq!(frag.to_string(), "2[PstI]_19[EcoRV]");

        let seq = b"NNCTGCAGacgtaGATATCacgtCTGCAGNN";
        assert_eq!(frag.slice(seq), b"CTGCAGacgtaGATATC");
    }

    #[rstest]
    fn test_same_enzyme_ends() {
        let pst1 = EnzymeSpec::new("PstI", "CTGCAG", 5).unwrap();
        let frag = Fragment {
            lhs: 13,
            rhs: 29,
            lhs_enzyme: &pst1,
            rhs_enzyme: &pst1,
        };
        assert!(!frag.has_mixed_ends());
    }
}
