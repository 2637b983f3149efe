//! The digestion engine: turns recognition sites into an ordered stream of fragments.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::iter::FusedIterator;

use log::trace;

use crate::alphabet::find_invalid_base;
use crate::catalog::EnzymeCatalog;
use crate::enzyme::EnzymeSpec;
use crate::errors::DigestError;
use crate::fragment::{Fragment, FragmentBounds};
use crate::sites::{SiteOccurrence, find_sites};

///
/// Digests sequences with one enzyme (single digest) or two (double digest).
///
/// A `Digestor` holds no per-sequence state, so one instance can be reused for
/// every record of a genome and shared between threads.
///
#[derive(Debug, Clone)]
pub struct Digestor {
    primary: EnzymeSpec,
    secondary: EnzymeSpec,
    bounds: FragmentBounds,
}

impl Digestor {
    ///
    /// Create a new digestor. Without a `secondary` enzyme the primary enzyme is
    /// used for both ends.
    ///
    pub fn new(primary: EnzymeSpec, secondary: Option<EnzymeSpec>) -> Digestor {
        let secondary = secondary.unwrap_or_else(|| primary.clone());
        Digestor {
            primary,
            secondary,
            bounds: FragmentBounds::default(),
        }
    }

    ///
    /// Create a new digestor by looking enzymes up in a catalog.
    ///
    /// # Arguments
    /// - catalog: the enzyme catalog
    /// - primary: name of the primary enzyme
    /// - secondary: name of the secondary enzyme, if any
    pub fn from_catalog(
        catalog: &EnzymeCatalog,
        primary: &str,
        secondary: Option<&str>,
    ) -> Result<Digestor, DigestError> {
        let primary = catalog.get(primary)?.clone();
        let secondary = match secondary {
            Some(name) => Some(catalog.get(name)?.clone()),
            None => None,
        };

        Ok(Digestor::new(primary, secondary))
    }

    pub fn with_bounds(mut self, bounds: FragmentBounds) -> Digestor {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> FragmentBounds {
        self.bounds
    }

    pub fn primary(&self) -> &EnzymeSpec {
        &self.primary
    }

    pub fn secondary(&self) -> &EnzymeSpec {
        &self.secondary
    }

    pub fn is_double_digest(&self) -> bool {
        self.primary != self.secondary
    }

    /// The distinct enzymes of this digest, primary first.
    pub fn enzyme_set(&self) -> Vec<&EnzymeSpec> {
        if self.is_double_digest() {
            vec![&self.primary, &self.secondary]
        } else {
            vec![&self.primary]
        }
    }

    ///
    /// Find all recognition sites of this digest's enzymes in `sequence`.
    ///
    /// Fails with [`DigestError::InvalidSequence`] if the sequence contains a
    /// character outside the IUPAC nucleotide alphabet.
    pub fn sites<'a>(&'a self, sequence: &[u8]) -> Result<Vec<SiteOccurrence<'a>>, DigestError> {
        if let Some((position, byte)) = find_invalid_base(sequence) {
            return Err(DigestError::InvalidSequence {
                position,
                character: byte as char,
            });
        }

        Ok(find_sites(sequence, &self.enzyme_set()))
    }

    ///
    /// Digest `sequence`, lazily yielding every fragment bordered by two cuts.
    ///
    /// Fragments come out in increasing order of their left boundary. The
    /// stretches before the first and after the last cut are never reported.
    ///
    /// # Arguments
    /// - sequence: the sequence to digest
    /// - min_length: shortest fragment to report (inclusive)
    /// - max_length: longest fragment to report (inclusive)
    /// - enforce_mixed_ends: only report fragments whose ends were cut by
    ///   different enzymes (ddRAD)
    pub fn iter_fragments<'a>(
        &'a self,
        sequence: &[u8],
        min_length: usize,
        max_length: usize,
        enforce_mixed_ends: bool,
    ) -> Result<FragmentIter<'a>, DigestError> {
        if min_length > max_length {
            return Err(DigestError::InvalidRange {
                min: min_length,
                max: max_length,
            });
        }

        let sites = self.sites(sequence)?;
        let site_count = sites.len();
        let cuts = self.collapse_cuts(sites, sequence.len());
        let cuts = match self.bounds {
            FragmentBounds::Sites => drop_overlapping_sites(cuts),
            FragmentBounds::Cuts => cuts,
        };
        trace!("{} sites, {} fragment boundaries", site_count, cuts.len());

        Ok(FragmentIter {
            cuts,
            next: 1,
            bounds: self.bounds,
            sequence_length: sequence.len(),
            min_length,
            max_length,
            enforce_mixed_ends,
        })
    }

    /// Map cut coordinates to the site that produced them, sorted by coordinate.
    ///
    /// Cuts that fall outside the sequence are dropped. When two sites cut at the
    /// same coordinate, the primary enzyme's site is kept.
    fn collapse_cuts<'a>(
        &'a self,
        sites: Vec<SiteOccurrence<'a>>,
        sequence_length: usize,
    ) -> Vec<(usize, SiteOccurrence<'a>)> {
        let mut cuts: BTreeMap<usize, SiteOccurrence<'a>> = BTreeMap::new();

        for site in sites {
            let cut = match site.cut_coordinate() {
                Some(cut) if cut <= sequence_length => cut,
                _ => continue,
            };

            match cuts.entry(cut) {
                Entry::Vacant(entry) => {
                    entry.insert(site);
                }
                Entry::Occupied(mut entry) => {
                    if *site.enzyme == self.primary && *entry.get().enzyme != self.primary {
                        entry.insert(site);
                    }
                }
            }
        }

        cuts.into_iter().collect()
    }
}

/// Walking in cut order, drop every site that starts before the end of the last
/// kept site. Kept sites neither overlap nor go backwards, so fragments spanning
/// from site start to site end are strictly increasing.
fn drop_overlapping_sites(
    cuts: Vec<(usize, SiteOccurrence<'_>)>,
) -> Vec<(usize, SiteOccurrence<'_>)> {
    let mut kept: Vec<(usize, SiteOccurrence)> = Vec::with_capacity(cuts.len());

    for (cut, site) in cuts {
        if let Some((_, last)) = kept.last() {
            if site.position < last.site_end() {
                trace!(
                    "dropping {} site at {}: overlaps {} site at {}",
                    site.enzyme, site.position, last.enzyme, last.position
                );
                continue;
            }
        }
        kept.push((cut, site));
    }

    kept
}

///
/// Lazy iterator over the fragments of one sequence. Created by
/// [`Digestor::iter_fragments`].
///
#[derive(Debug, Clone)]
pub struct FragmentIter<'a> {
    cuts: Vec<(usize, SiteOccurrence<'a>)>,
    next: usize,
    bounds: FragmentBounds,
    sequence_length: usize,
    min_length: usize,
    max_length: usize,
    enforce_mixed_ends: bool,
}

impl<'a> FragmentIter<'a> {
    /// Number of fragment boundaries: the distinct cut coordinates, less any
    /// sites dropped for overlapping a neighbour in [`FragmentBounds::Sites`] mode.
    pub fn cut_count(&self) -> usize {
        self.cuts.len()
    }

    fn candidate(&self, left: usize, right: usize) -> Option<Fragment<'a>> {
        let (left_cut, left_site) = self.cuts[left];
        let (right_cut, right_site) = self.cuts[right];

        let (lhs, rhs) = match self.bounds {
            FragmentBounds::Sites => (
                left_site.position,
                right_site.site_end().min(self.sequence_length),
            ),
            FragmentBounds::Cuts => (left_cut, right_cut),
        };

        if rhs <= lhs {
            return None;
        }

        Some(Fragment {
            lhs,
            rhs,
            lhs_enzyme: left_site.enzyme,
            rhs_enzyme: right_site.enzyme,
        })
    }

    fn accept(&self, fragment: &Fragment) -> bool {
        let length = fragment.len();
        if length < self.min_length || length > self.max_length {
            return false;
        }
        !self.enforce_mixed_ends || fragment.has_mixed_ends()
    }
}

impl<'a> Iterator for FragmentIter<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.cuts.len() {
            let right = self.next;
            self.next += 1;

            if let Some(fragment) = self.candidate(right - 1, right) {
                if self.accept(&fragment) {
                    return Some(fragment);
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cuts.len().saturating_sub(self.next)))
    }
}

impl FusedIterator for FragmentIter<'_> {}
