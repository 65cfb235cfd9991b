use crate::application::machine::MachineSnapshot;
use crate::error::Result;
use std::io::Write;

/// Writes a [`MachineSnapshot`] as pretty-printed JSON.
pub struct SnapshotWriter<W: Write> {
    writer: W,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_snapshot(&mut self, snapshot: &MachineSnapshot) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, snapshot)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
