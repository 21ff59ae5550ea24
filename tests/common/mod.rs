use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str = "command,id,name,description,amount";

/// Writes a commands CSV (header included) to a temporary file.
pub fn commands_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
