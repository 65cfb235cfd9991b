use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Insert,
    Press,
    Cancel,
    AddProduct,
    AddChange,
    DispenseAllChange,
}

/// One row of a machine script.
///
/// Which fields are required depends on the action: `insert` reads `amount` as a
/// coin value, `add_product` reads it as the price.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct MachineEvent {
    pub action: Action,
    pub position: Option<i64>,
    pub amount: Option<i64>,
    pub name: Option<String>,
    pub nickels: Option<i64>,
    pub dimes: Option<i64>,
    pub quarters: Option<i64>,
}

impl MachineEvent {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            position: None,
            amount: None,
            name: None,
            nickels: None,
            dimes: None,
            quarters: None,
        }
    }

    pub fn insert(cents: i64) -> Self {
        Self {
            amount: Some(cents),
            ..Self::new(Action::Insert)
        }
    }

    pub fn press(position: i64) -> Self {
        Self {
            position: Some(position),
            ..Self::new(Action::Press)
        }
    }

    pub fn add_product(position: i64, price: i64, name: Option<&str>) -> Self {
        Self {
            position: Some(position),
            amount: Some(price),
            name: name.map(str::to_string),
            ..Self::new(Action::AddProduct)
        }
    }

    pub fn add_change(nickels: i64, dimes: i64, quarters: i64) -> Self {
        Self {
            nickels: Some(nickels),
            dimes: Some(dimes),
            quarters: Some(quarters),
            ..Self::new(Action::AddChange)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "action, position, amount, name, nickels, dimes, quarters";

    fn parse(row: &str) -> MachineEvent {
        let csv = format!("{HEADER}\n{row}");
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        reader
            .deserialize()
            .next()
            .unwrap()
            .expect("Failed to deserialize event")
    }

    #[test]
    fn test_insert_deserialization() {
        let event = parse("insert, , 25, , , , ");
        assert_eq!(event, MachineEvent::insert(25));
    }

    #[test]
    fn test_add_product_deserialization() {
        let event = parse("add_product, 1, 50, Peanuts, , , ");
        assert_eq!(event, MachineEvent::add_product(1, 50, Some("Peanuts")));
    }

    #[test]
    fn test_add_change_deserialization() {
        let event = parse("add_change, , , , 1, 2, 3");
        assert_eq!(event, MachineEvent::add_change(1, 2, 3));
    }

    #[test]
    fn test_cancel_has_no_fields() {
        let event = parse("cancel, , , , , , ");
        assert_eq!(event, MachineEvent::new(Action::Cancel));
    }
}
