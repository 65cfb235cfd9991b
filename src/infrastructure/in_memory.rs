use crate::domain::coin::Coin;
use crate::domain::ports::Dispenser;
use crate::domain::product::Slot;

/// A notification sent to the hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispenseEvent {
    Message(String),
    Product { slot: Slot, name: Option<String> },
    Coin(Coin),
}

/// A dispenser that records every notification in order instead of driving
/// hardware.
///
/// Useful for tests and dry runs where the sequence of physical actions must be
/// inspected afterwards.
#[derive(Debug, Default, Clone)]
pub struct RecordingDispenser {
    events: Vec<DispenseEvent>,
}

impl RecordingDispenser {
    /// Creates an empty recording dispenser.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DispenseEvent] {
        &self.events
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DispenseEvent::Message(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn coins(&self) -> Vec<Coin> {
        self.events
            .iter()
            .filter_map(|event| match event {
                DispenseEvent::Coin(coin) => Some(*coin),
                _ => None,
            })
            .collect()
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<DispenseEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Dispenser for RecordingDispenser {
    fn show_message(&mut self, message: &str) {
        self.events.push(DispenseEvent::Message(message.to_string()));
    }

    fn dispense_product(&mut self, slot: Slot, name: Option<&str>) {
        self.events.push(DispenseEvent::Product {
            slot,
            name: name.map(str::to_string),
        });
    }

    fn dispense_coin(&mut self, coin: Coin) {
        self.events.push(DispenseEvent::Coin(coin));
    }
}
