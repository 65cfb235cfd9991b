use super::coin::Coin;
use super::product::Slot;

/// The machine's hardware: a display and the product and coin chutes.
///
/// Calls are fire-and-forget. The hardware reports nothing back, so the machine
/// must only ask for coins it actually holds.
pub trait Dispenser {
    fn show_message(&mut self, message: &str);
    fn dispense_product(&mut self, slot: Slot, name: Option<&str>);
    fn dispense_coin(&mut self, coin: Coin);
}

impl<D: Dispenser + ?Sized> Dispenser for Box<D> {
    fn show_message(&mut self, message: &str) {
        (**self).show_message(message)
    }

    fn dispense_product(&mut self, slot: Slot, name: Option<&str>) {
        (**self).dispense_product(slot, name)
    }

    fn dispense_coin(&mut self, coin: Coin) {
        (**self).dispense_coin(coin)
    }
}

pub type DispenserBox = Box<dyn Dispenser>;
