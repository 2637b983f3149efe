//! # In-silico restriction digestion for reduced-representation sequencing.
//!
//! This crate simulates what a restriction digest does to a genome, as used to plan
//! RAD-seq, GBS and ddRAD experiments: it finds every recognition site of one or two
//! enzymes in a sequence, places the cuts, and reports the fragments lying between
//! consecutive cuts.
//!
//! ## Quick Start
//!
//! ```rust
//! use radsim_core::{Digestor, EnzymeCatalog};
//!
//! let catalog = EnzymeCatalog::builtin();
//! let digestor = Digestor::from_catalog(&catalog, "PstI", Some("EcoRV")).unwrap();
//!
//! let sequence = b"NNCTGCAGacgtaGATATCacgtCTGCAGNN";
//! let fragments: Vec<_> = digestor
//!     .iter_fragments(sequence, 1, 10000, false)
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(fragments.len(), 2);
//! assert_eq!(fragments[0].slice(sequence), b"CTGCAGacgtaGATATC");
//! assert_eq!(fragments[0].rhs_enzyme.name(), "EcoRV");
//! ```
//!
//! Fragments are produced lazily, so a whole chromosome can be digested and written
//! out without holding every fragment in memory.
pub mod alphabet;
pub mod catalog;
pub mod consts;
pub mod digest;
pub mod enzyme;
pub mod errors;
pub mod fasta;
pub mod fragment;
pub mod histogram;
pub mod output;
pub mod sites;
pub mod utils;

// re-exports
pub use catalog::EnzymeCatalog;
pub use digest::{Digestor, FragmentIter};
pub use enzyme::EnzymeSpec;
pub use errors::DigestError;
pub use fasta::{FastaReader, FastaRecord, read_fasta};
pub use fragment::{Fragment, FragmentBounds};
pub use histogram::{Histogram, HistogramBin};
pub use sites::{SiteOccurrence, find_sites};
