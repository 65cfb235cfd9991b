use crate::application::machine::{AdminKey, MachineSnapshot, VendingMachine};
use crate::domain::event::{Action, MachineEvent};
use crate::domain::ports::Dispenser;
use crate::domain::product::Slot;
use crate::error::{Result, VendingError};

/// Replays machine events against a single [`VendingMachine`].
///
/// The engine holds the machine's admin key, so a script can mix customer and
/// operator actions. Events are applied one at a time in the order given; a
/// failing event leaves the machine as it was before that event.
pub struct VendingEngine<D: Dispenser> {
    machine: VendingMachine<D>,
    admin_key: AdminKey,
}

impl<D: Dispenser> VendingEngine<D> {
    /// Creates a new engine around an empty machine driving `dispenser`.
    pub fn new(dispenser: D) -> Self {
        let (machine, admin_key) = VendingMachine::new(dispenser);
        Self { machine, admin_key }
    }

    /// Applies one event.
    pub fn process_event(&mut self, event: MachineEvent) -> Result<()> {
        match event.action {
            Action::Insert => {
                let cents = event.amount.ok_or(VendingError::MissingValue("amount"))?;
                self.machine.add_user_money(cents)?;
            }
            Action::Press => {
                let slot = required_slot(event.position)?;
                self.machine.button_press(slot)?;
            }
            Action::Cancel => {
                self.machine.cancel_order();
            }
            Action::AddProduct => {
                let slot = required_slot(event.position)?;
                self.machine
                    .admin(&self.admin_key)?
                    .add_product(slot, event.amount, event.name)?;
            }
            Action::AddChange => {
                let nickels = required_count(event.nickels, "nickels")?;
                let dimes = required_count(event.dimes, "dimes")?;
                let quarters = required_count(event.quarters, "quarters")?;
                self.machine
                    .admin(&self.admin_key)?
                    .add_change(nickels, dimes, quarters)?;
            }
            Action::DispenseAllChange => {
                self.machine.admin(&self.admin_key)?.dispense_all_change();
            }
        }
        Ok(())
    }

    pub fn machine(&self) -> &VendingMachine<D> {
        &self.machine
    }

    /// Consumes the engine and returns the final state of the machine.
    pub fn into_snapshot(self) -> MachineSnapshot {
        self.machine.snapshot()
    }
}

fn required_slot(position: Option<i64>) -> Result<Slot> {
    let position = position.ok_or(VendingError::MissingValue("position"))?;
    Slot::try_from(position)
}

fn required_count(count: Option<i64>, field: &'static str) -> Result<u32> {
    let count = count.ok_or(VendingError::MissingValue(field))?;
    if count < 0 {
        return Err(VendingError::InvalidArgument(format!(
            "{field} count {count} must not be negative"
        )));
    }
    u32::try_from(count)
        .map_err(|_| VendingError::InvalidArgument(format!("{field} count {count} is too large")))
}
