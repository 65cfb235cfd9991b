use crate::domain::event::MachineEvent;
use crate::error::{Result, VendingError};
use std::io::Read;

/// Reads machine events from a CSV script.
///
/// Expects the header `action,position,amount,name,nickels,dimes,quarters`.
/// Whitespace around fields is trimmed, empty fields read as absent, and short
/// records are accepted.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events, one per
    /// record. A malformed record yields an error without ending the iteration.
    pub fn events(self) -> impl Iterator<Item = Result<MachineEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(VendingError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::Action;

    #[test]
    fn test_reader_valid_stream() {
        let data = "action, position, amount, name, nickels, dimes, quarters\n\
                    add_product, 1, 50, Peanuts, , , \n\
                    insert, , 25, , , , \n\
                    press, 1, , , , , ";
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<MachineEvent>> = reader.events().collect();

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.action, Action::AddProduct);
        assert_eq!(first.name.as_deref(), Some("Peanuts"));
        assert_eq!(results[2].as_ref().unwrap(), &MachineEvent::press(1));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "action, position, amount, name, nickels, dimes, quarters\n\
                    refund, 1, , , , , \n\
                    insert, , ten, , , , \n\
                    cancel, , , , , , ";
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<MachineEvent>> = reader.events().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
