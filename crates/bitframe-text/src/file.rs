use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bitframe_frame::BitSeq;

use crate::error::{Result, TextError};
use crate::reader::BitTextReader;
use crate::writer::BitTextWriter;

/// Path that selects stdin for input and stdout for output.
pub const STDIO_PATH: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Open a bit text source. `-` reads from stdin.
pub fn open_input(path: &Path) -> Result<BitTextReader<Box<dyn Read>>> {
    if is_stdio(path) {
        return Ok(BitTextReader::new(Box::new(std::io::stdin().lock())));
    }
    let file = File::open(path).map_err(|source| TextError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BitTextReader::new(Box::new(BufReader::new(file))))
}

/// Create a bit text sink, truncating any existing file. `-` writes to stdout.
pub fn create_output(path: &Path) -> Result<BitTextWriter<Box<dyn Write>>> {
    if is_stdio(path) {
        return Ok(BitTextWriter::new(Box::new(std::io::stdout().lock())));
    }
    let file = File::create(path).map_err(|source| TextError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BitTextWriter::new(Box::new(BufWriter::new(file))))
}

/// Read every bit from a bit text file.
pub fn read_bit_file(path: impl AsRef<Path>) -> Result<BitSeq> {
    let path = path.as_ref();
    let bits = open_input(path)?.read_to_end()?;
    tracing::debug!(path = %path.display(), bits = bits.len(), "read bit file");
    Ok(bits)
}

/// Write bits to a bit text file.
pub fn write_bit_file(path: impl AsRef<Path>, bits: &[bool]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_output(path)?;
    writer.write_bits(bits)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), bits = bits.len(), "wrote bit file");
    Ok(())
}
