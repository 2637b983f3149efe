use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Unknown restriction enzyme: {0}. Run `radsim enzymes` to list the supported enzymes")]
    UnknownEnzyme(String),

    #[error("Invalid enzyme definition for {name}: {reason}")]
    InvalidEnzyme { name: String, reason: String },

    #[error("Invalid fragment length range: minimum ({min}) is greater than maximum ({max})")]
    InvalidRange { min: usize, max: usize },

    #[error("Invalid character {character:?} at position {position} of sequence")]
    InvalidSequence { position: usize, character: char },

    #[error("Can't parse enzyme catalog: {0}")]
    CatalogParseError(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
