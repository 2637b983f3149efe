use std::io::{self, Write};

/// A bin of the fragment-length histogram. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBin {
    pub lower: usize,
    pub upper: usize,
    pub count: u64,
}

///
/// Histogram of fragment lengths with equal-width integer bins spanning the
/// shortest to the longest fragment.
///
/// When there are fewer distinct lengths in that span than requested bins,
/// the number of bins is reduced so that every bin covers at least one length.
///
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    ///
    /// Bin `lengths` into at most `n_bins` bins.
    ///
    /// # Arguments
    /// - lengths: fragment lengths, in any order
    /// - n_bins: requested number of bins
    pub fn from_lengths(lengths: &[usize], n_bins: usize) -> Histogram {
        let (Some(&min), Some(&max)) = (lengths.iter().min(), lengths.iter().max()) else {
            return Histogram::default();
        };
        if n_bins == 0 {
            return Histogram::default();
        }

        let span = max - min + 1;
        let n_bins = n_bins.min(span);

        // bin i starts at offset ceil(i * span / n_bins)
        let lower_offset = |i: usize| (i * span).div_ceil(n_bins);

        let mut bins: Vec<HistogramBin> = (0..n_bins)
            .map(|i| HistogramBin {
                lower: min + lower_offset(i),
                upper: min + lower_offset(i + 1) - 1,
                count: 0,
            })
            .collect();

        for &length in lengths {
            let index = ((length - min) * n_bins) / span;
            bins[index].count += 1;
        }

        Histogram { bins }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Write one `bin\tlower-upper\tcount` line per bin, bins numbered from 1.
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (i, bin) in self.bins.iter().enumerate() {
            writeln!(writer, "{}\t{}-{}\t{}", i + 1, bin.lower, bin.upper, bin.count)?;
        }
        Ok(())
    }
}
