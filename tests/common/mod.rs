use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "action,position,amount,name,nickels,dimes,quarters";

/// Writes a machine script with the standard header followed by `rows`.
pub fn write_script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}
