use crate::domain::catalog::{Catalog, ProductSnapshot};
use crate::domain::coin::Coin;
use crate::domain::ports::Dispenser;
use crate::domain::product::{Price, Product, Slot};
use crate::domain::reserve::{CoinReserve, ReserveSnapshot};
use crate::error::{Result, VendingError};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

static NEXT_MACHINE_ID: AtomicU64 = AtomicU64::new(1);

/// Grants access to the admin operations of exactly one machine.
///
/// Issued once by [`VendingMachine::new`]. It cannot be cloned or built by hand.
#[derive(Debug)]
pub struct AdminKey {
    machine_id: u64,
}

/// What a button press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Nothing is stocked in the slot.
    Empty,
    /// The balance is below the price; the price was shown.
    PriceShown(Price),
    /// The product was dispensed along with `change`.
    Sold { slot: Slot, change: CoinReserve },
}

/// A single vending machine: the customer's inserted coins, the machine's change
/// supply, the product catalog and the hardware it drives.
///
/// Customer operations live directly on the machine. Admin operations require the
/// machine's [`AdminKey`] and are reached through [`VendingMachine::admin`].
pub struct VendingMachine<D: Dispenser> {
    id: u64,
    user: CoinReserve,
    machine: CoinReserve,
    catalog: Catalog,
    dispenser: D,
}

impl<D: Dispenser> VendingMachine<D> {
    /// Creates an empty machine and the admin key that unlocks it.
    pub fn new(dispenser: D) -> (Self, AdminKey) {
        let id = NEXT_MACHINE_ID.fetch_add(1, Ordering::Relaxed);
        let machine = Self {
            id,
            user: CoinReserve::new(),
            machine: CoinReserve::new(),
            catalog: Catalog::new(),
            dispenser,
        };
        (machine, AdminKey { machine_id: id })
    }

    /// Accepts one coin from the customer.
    pub fn add_user_money(&mut self, cents: i64) -> Result<Coin> {
        let coin = self.user.deposit(cents)?;
        debug!(%coin, balance = self.user.total_value(), "coin inserted");
        Ok(coin)
    }

    /// Price check or purchase for the product in `slot`.
    ///
    /// A purchase only goes ahead once exact change has been planned against the
    /// machine reserve plus the customer's own coins. If that plan fails the call
    /// returns [`VendingError::NotEnoughChange`] with nothing dispensed and both
    /// reserves unchanged.
    pub fn button_press(&mut self, slot: Slot) -> Result<PressOutcome> {
        let Some(product) = self.catalog.get(slot).cloned() else {
            self.dispenser
                .show_message(&format!("No item in position {slot}"));
            return Ok(PressOutcome::Empty);
        };

        let balance = self.user.total_value();
        let price = u64::from(product.price.cents());
        if balance < price {
            self.dispenser
                .show_message(&format!("Item in position {slot} costs {}", product.price));
            return Ok(PressOutcome::PriceShown(product.price));
        }

        let change_due = balance - price;
        let mut machine = self.machine.clone();
        machine.absorb(&self.user)?;
        let change = machine.take_change(change_due).inspect_err(|e| {
            warn!(%slot, change_due, error = %e, "sale refused");
        })?;

        self.dispenser.dispense_product(slot, product.name());
        self.machine = machine;
        self.user.clear();
        self.dispense_coins(&change);

        info!(%slot, price, change = change.total_value(), "product sold");
        Ok(PressOutcome::Sold { slot, change })
    }

    /// Returns every coin the customer inserted.
    pub fn cancel_order(&mut self) -> CoinReserve {
        let refund = std::mem::take(&mut self.user);
        self.dispense_coins(&refund);
        debug!(refund = refund.total_value(), "order cancelled");
        refund
    }

    /// Opens the admin operations with this machine's key.
    pub fn admin(&mut self, key: &AdminKey) -> Result<Admin<'_, D>> {
        if key.machine_id != self.id {
            return Err(VendingError::Unauthorized);
        }
        Ok(Admin { machine: self })
    }

    pub fn user_balance(&self) -> u64 {
        self.user.total_value()
    }

    pub fn machine_balance(&self) -> u64 {
        self.machine.total_value()
    }

    pub fn user_reserve(&self) -> &CoinReserve {
        &self.user
    }

    pub fn machine_reserve(&self) -> &CoinReserve {
        &self.machine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dispenser(&self) -> &D {
        &self.dispenser
    }

    pub fn dispenser_mut(&mut self) -> &mut D {
        &mut self.dispenser
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            user: self.user.snapshot(),
            machine: self.machine.snapshot(),
            products: self.catalog.snapshot(),
        }
    }

    fn dispense_coins(&mut self, coins: &CoinReserve) {
        for coin in coins.coins() {
            self.dispenser.dispense_coin(coin);
        }
    }
}

/// Admin view of a machine, obtained through [`VendingMachine::admin`].
pub struct Admin<'a, D: Dispenser> {
    machine: &'a mut VendingMachine<D>,
}

impl<D: Dispenser> Admin<'_, D> {
    /// Stocks a product in an empty slot. A missing or empty name is accepted
    /// with a warning on the display.
    ///
    /// Checks run in a fixed order: slot occupancy, then price, then name. A taken
    /// slot is reported even when the price is also invalid.
    pub fn add_product<P>(&mut self, slot: Slot, price: P, name: Option<String>) -> Result<()>
    where
        P: TryInto<Price>,
        VendingError: From<P::Error>,
    {
        if self.machine.catalog.is_occupied(slot) {
            return Err(VendingError::PositionOccupied(slot));
        }
        let price: Price = price.try_into()?;

        let product = Product::new(price, name);
        if product.name.is_none() {
            warn!(%slot, "product stocked without a name");
            self.machine
                .dispenser
                .show_message(&format!("Product name is missing for product in position {slot}"));
        }

        // Occupancy was checked above, so this insert cannot fail.
        self.machine.catalog.add_product(slot, product)?;
        debug!(%slot, %price, "product added");
        Ok(())
    }

    /// Loads coins into the change supply.
    pub fn add_change(&mut self, nickels: u32, dimes: u32, quarters: u32) -> Result<()> {
        self.machine
            .machine
            .absorb(&CoinReserve::with_counts(nickels, dimes, quarters))?;
        debug!(
            nickels,
            dimes,
            quarters,
            balance = self.machine.machine.total_value(),
            "change added"
        );
        Ok(())
    }

    /// Empties the change supply through the coin chute.
    pub fn dispense_all_change(&mut self) -> CoinReserve {
        let drained = std::mem::take(&mut self.machine.machine);
        self.machine.dispense_coins(&drained);
        debug!(drained = drained.total_value(), "change supply emptied");
        drained
    }
}

/// Serializable view of a machine's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    pub user: ReserveSnapshot,
    pub machine: ReserveSnapshot,
    pub products: Vec<ProductSnapshot>,
}
