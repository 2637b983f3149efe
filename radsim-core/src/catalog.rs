use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result};
use fxhash::FxHashMap as HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::alphabet::is_valid_base;
use crate::enzyme::EnzymeSpec;
use crate::errors::DigestError;

/// Commonly used enzymes for reduced-representation library preparation:
/// (name, recognition pattern, top-strand cut offset from the start of the site).
const BUILTIN_ENZYMES: &[(&str, &str, isize)] = &[
    ("AatII", "GACGTC", 5),
    ("AciI", "CCGC", 1),
    ("AluI", "AGCT", 2),
    ("ApeKI", "GCWGC", 1),
    ("ApoI", "RAATTY", 1),
    ("AseI", "ATTAAT", 2),
    ("BamHI", "GGATCC", 1),
    ("BclI", "TGATCA", 1),
    ("BglII", "AGATCT", 1),
    ("BsaI", "GGTCTC", 7),
    ("BstYI", "RGATCY", 1),
    ("ClaI", "ATCGAT", 2),
    ("Csp6I", "GTAC", 1),
    ("CviAII", "CATG", 1),
    ("DpnII", "GATC", 0),
    ("EaeI", "YGGCCR", 1),
    ("EcoRI", "GAATTC", 1),
    ("EcoRV", "GATATC", 3),
    ("EcoT22I", "ATGCAT", 5),
    ("HaeIII", "GGCC", 2),
    ("HhaI", "GCGC", 3),
    ("HindIII", "AAGCTT", 1),
    ("HpaII", "CCGG", 1),
    ("KpnI", "GGTACC", 5),
    ("MluCI", "AATT", 0),
    ("MseI", "TTAA", 1),
    ("MspI", "CCGG", 1),
    ("NcoI", "CCATGG", 1),
    ("NdeI", "CATATG", 2),
    ("NheI", "GCTAGC", 1),
    ("NlaIII", "CATG", 4),
    ("NotI", "GCGGCCGC", 2),
    ("NsiI", "ATGCAT", 5),
    ("PacI", "TTAATTAA", 5),
    ("PstI", "CTGCAG", 5),
    ("PvuII", "CAGCTG", 3),
    ("SacI", "GAGCTC", 5),
    ("SalI", "GTCGAC", 1),
    ("Sau3AI", "GATC", 0),
    ("SbfI", "CCTGCAGG", 6),
    ("ScaI", "AGTACT", 3),
    ("SmaI", "CCCGGG", 3),
    ("SpeI", "ACTAGT", 1),
    ("SphI", "GCATGC", 5),
    ("TaqI", "TCGA", 1),
    ("XbaI", "TCTAGA", 1),
    ("XhoI", "CTCGAG", 1),
];

/// Whether every entry has a name and a non-empty, all-IUPAC pattern.
const fn enzyme_table_is_valid(table: &[(&str, &str, isize)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let (name, pattern, _) = table[i];
        if name.is_empty() || name.as_bytes()[0].is_ascii_whitespace() || pattern.is_empty() {
            return false;
        }
        let bytes = pattern.as_bytes();
        let mut j = 0;
        while j < bytes.len() {
            if !is_valid_base(bytes[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    enzyme_table_is_valid(BUILTIN_ENZYMES),
    "invalid entry in the built-in enzyme table"
);

/// One enzyme entry of a catalog file.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct EnzymeRecord {
    pub name: String,
    pub pattern: String,
    pub cut_offset: isize,
    pub site_length: Option<usize>,
}

/// On-disk layout of a catalog file (TOML):
///
/// ```toml
/// [[enzymes]]
/// name = "PstI"
/// pattern = "CTGCAG"
/// cut_offset = 5
/// ```
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct CatalogConfig {
    pub enzymes: Vec<EnzymeRecord>,
}

///
/// An immutable lookup of restriction enzymes by name.
///
/// Lookups are case-insensitive; listing preserves insertion order.
///
#[derive(Debug, Clone, Default)]
pub struct EnzymeCatalog {
    enzymes: Vec<EnzymeSpec>,
    index: HashMap<String, usize>,
}

impl EnzymeCatalog {
    pub fn empty() -> EnzymeCatalog {
        EnzymeCatalog::default()
    }

    ///
    /// The catalog of enzymes shipped with radsim.
    ///
    pub fn builtin() -> EnzymeCatalog {
        let mut catalog = EnzymeCatalog::empty();
        for (name, pattern, cut_offset) in BUILTIN_ENZYMES {
            catalog.insert(EnzymeSpec::from_checked(name, pattern, *cut_offset));
        }
        catalog
    }

    ///
    /// Add an enzyme, replacing any existing entry with the same name.
    ///
    pub fn insert(&mut self, enzyme: EnzymeSpec) {
        let key = enzyme.name().to_lowercase();
        match self.index.get(&key) {
            Some(&idx) => self.enzymes[idx] = enzyme,
            None => {
                self.index.insert(key, self.enzymes.len());
                self.enzymes.push(enzyme);
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&EnzymeSpec, DigestError> {
        self.index
            .get(&name.to_lowercase())
            .map(|&idx| &self.enzymes[idx])
            .ok_or_else(|| DigestError::UnknownEnzyme(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnzymeSpec> {
        self.enzymes.iter()
    }

    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }

    ///
    /// Parse a catalog from the contents of a TOML file.
    ///
    pub fn from_toml_str(toml_str: &str) -> Result<EnzymeCatalog, DigestError> {
        let config: CatalogConfig = toml::from_str(toml_str)?;

        let mut catalog = EnzymeCatalog::empty();
        for record in config.enzymes {
            let site_length = record.site_length.unwrap_or(record.pattern.len());
            catalog.insert(EnzymeSpec::with_site_length(
                &record.name,
                &record.pattern,
                site_length,
                record.cut_offset,
            )?);
        }

        Ok(catalog)
    }

    ///
    /// Read a catalog from a TOML file.
    ///
    /// # Arguments
    /// - path: Path to the catalog file (a .toml) file.
    pub fn try_from(path: &Path) -> Result<EnzymeCatalog> {
        let toml_str = read_to_string(path)
            .with_context(|| format!("Failed to read enzyme catalog: {:?}", path))?;
        let catalog = EnzymeCatalog::from_toml_str(&toml_str)
            .with_context(|| format!("Invalid enzyme catalog: {:?}", path))?;

        Ok(catalog)
    }

    ///
    /// Add (or override) entries from a TOML catalog file.
    ///
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize> {
        let other = EnzymeCatalog::try_from(path)?;
        let added = other.len();
        debug!("Loaded {} enzymes from {:?}", added, path);
        for enzyme in other.enzymes {
            self.insert(enzyme);
        }
        Ok(added)
    }
}
