use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// A buffered output stream: stdout, a plain file, or a gzip-compressed file.
///
/// Call [`DynamicWriter::finish`] once done; it flushes the buffer and, for
/// gzip output, writes the gzip trailer, reporting any failure.
///
pub enum DynamicWriter {
    Plain(BufWriter<Box<dyn Write>>),
    Gzip(BufWriter<GzEncoder<File>>),
}

impl DynamicWriter {
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(mut writer) => writer.flush(),
            DynamicWriter::Gzip(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            DynamicWriter::Plain(writer) => writer.write(buf),
            DynamicWriter::Gzip(writer) => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(writer) => writer.write_all(buf),
            DynamicWriter::Gzip(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            DynamicWriter::Plain(writer) => writer.flush(),
            DynamicWriter::Gzip(writer) => writer.flush(),
        }
    }
}

///
/// Get a buffered writer for a file, gzip-compressing if the path ends in `.gz`.
/// `-` writes to stdout.
///
/// # Arguments
///
/// - file_path: path to the file to write, or '-' for stdout
pub fn get_dynamic_writer(file_path_str: &str) -> Result<DynamicWriter> {
    if file_path_str == "-" {
        return Ok(DynamicWriter::Plain(BufWriter::new(
            Box::new(std::io::stdout()) as Box<dyn Write>
        )));
    }

    let path = Path::new(file_path_str);
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;

    match is_gzipped(path) {
        true => Ok(DynamicWriter::Gzip(BufWriter::new(GzEncoder::new(
            file,
            Compression::default(),
        )))),
        false => Ok(DynamicWriter::Plain(BufWriter::new(
            Box::new(file) as Box<dyn Write>
        ))),
    }
}
