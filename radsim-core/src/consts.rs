pub const DIGEST_CMD: &str = "digest";
pub const HIST_CMD: &str = "hist";
pub const ENZYMES_CMD: &str = "enzymes";
pub const SITES_CMD: &str = "sites";

pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 10000;
pub const DEFAULT_FASTA_WIDTH: usize = 80;
pub const DEFAULT_HIST_BINS: usize = 100;
pub const DEFAULT_SITE_WINDOW: usize = 0;
pub const DEFAULT_OUT: &str = "-";
