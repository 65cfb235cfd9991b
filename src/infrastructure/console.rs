use crate::domain::coin::Coin;
use crate::domain::ports::Dispenser;
use crate::domain::product::Slot;
use std::io::{self, Write};

/// Renders hardware notifications as text lines on any `Write` sink.
///
/// Write failures are logged and otherwise ignored; the hardware gives no
/// feedback to the machine.
pub struct ConsoleDispenser<W: Write> {
    out: W,
}

impl ConsoleDispenser<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleDispenser<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %e, "failed to write dispenser output");
        }
    }
}

impl<W: Write> Dispenser for ConsoleDispenser<W> {
    fn show_message(&mut self, message: &str) {
        self.line(message);
    }

    fn dispense_product(&mut self, slot: Slot, name: Option<&str>) {
        let text = match name {
            Some(name) => format!("Dispensing {name} from position {slot}"),
            None => format!("Dispensing ProductNum{slot} from position {slot}"),
        };
        self.line(&text);
    }

    fn dispense_coin(&mut self, coin: Coin) {
        self.line(&format!("Dispensing {coin}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut ConsoleDispenser<Vec<u8>>)) -> String {
        let mut dispenser = ConsoleDispenser::new(Vec::new());
        f(&mut dispenser);
        String::from_utf8(dispenser.into_inner()).unwrap()
    }

    #[test]
    fn test_named_product() {
        let out = render(|d| d.dispense_product(Slot::new(3), Some("Gum")));
        assert_eq!(out, "Dispensing Gum from position 3\n");
    }

    #[test]
    fn test_unnamed_product() {
        let out = render(|d| d.dispense_product(Slot::new(1), None));
        assert_eq!(out, "Dispensing ProductNum1 from position 1\n");
    }

    #[test]
    fn test_coins_and_messages() {
        let out = render(|d| {
            d.show_message("No item in position 3");
            d.dispense_coin(Coin::Quarter);
            d.dispense_coin(Coin::Nickel);
        });
        assert_eq!(
            out,
            "No item in position 3\nDispensing 25 cents\nDispensing 5 cents\n"
        );
    }
}
