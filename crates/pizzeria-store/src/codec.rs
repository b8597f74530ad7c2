//! # Record Codec
//!
//! Converts records to and from their one-line, `#`-delimited file form.
//!
//! ## Line Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Pizza  id#name#toppingCount#crustType#price#isSoldOut#softDeleted      │
//! │         3#Pepperoni#1#Thick#11.49#false#false                           │
//! │                                                                         │
//! │  Drink  id#name#price#isSoldOut#softDeleted                             │
//! │         1#Cola#1.99#false#false                                         │
//! │                                                                         │
//! │  Order  id#email#pizzaID#drinkID#drinkSize#orderDate#pizzaSize#status   │
//! │         7#ann@x.com#3#1#large#03/07/24#16#false                         │
//! │         8#bob@x.com#2#0#none#03/07/24#8#true      (no drink)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are positional. Booleans are `true` / `false`, prices carry two
//! decimals, dates are `MM/DD/YY`. An order without a drink stores drink id
//! `0` and size `none`; any other pairing of those two fields is rejected.

use chrono::NaiveDate;
use pizzeria_core::{
    CrustType, Drink, DrinkChoice, DrinkSize, Money, Order, OrderStatus, Pizza, PizzaSize,
    ORDER_DATE_FORMAT,
};

use crate::error::RecordError;

/// Field delimiter.
pub const DELIMITER: char = '#';

/// Drink id stored when no drink was ordered.
pub const NO_DRINK_ID: u32 = 0;

/// Drink size stored when no drink was ordered.
pub const NO_DRINK_SIZE: &str = "none";

/// A record kind that can be stored as one delimited line.
pub trait FlatRecord: Sized {
    /// Number of `#`-separated fields on a line.
    const FIELD_COUNT: usize;

    fn encode(&self) -> String;

    fn decode(line: &str) -> Result<Self, RecordError>;
}

// =============================================================================
// Field Helpers
// =============================================================================

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, RecordError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != expected {
        return Err(RecordError::WrongFieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_id(field: &'static str, value: &str) -> Result<u32, RecordError> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err(RecordError::invalid(field, value, "ids start at 1")),
        Ok(id) => Ok(id),
        Err(e) => Err(RecordError::invalid(field, value, e)),
    }
}

fn parse_count(field: &'static str, value: &str) -> Result<u32, RecordError> {
    value
        .trim()
        .parse()
        .map_err(|e| RecordError::invalid(field, value, e))
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, RecordError> {
    match value.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(RecordError::invalid(field, value, "expected true or false")),
    }
}

fn parse_money(field: &'static str, value: &str) -> Result<Money, RecordError> {
    value
        .parse::<Money>()
        .map_err(|e| RecordError::invalid(field, value, e))
}

fn parse_text(field: &'static str, value: &str) -> Result<String, RecordError> {
    let text = value.trim();
    if text.is_empty() {
        return Err(RecordError::invalid(field, value, "must not be empty"));
    }
    Ok(text.to_string())
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value.trim(), ORDER_DATE_FORMAT)
        .map_err(|e| RecordError::invalid(field, value, e))
}

// =============================================================================
// Pizza
// =============================================================================

impl FlatRecord for Pizza {
    const FIELD_COUNT: usize = 7;

    fn encode(&self) -> String {
        format!(
            "{}#{}#{}#{}#{}#{}#{}",
            self.id,
            self.name,
            self.topping_count,
            self.crust.label(),
            self.price.to_decimal_string(),
            self.is_sold_out,
            self.soft_deleted
        )
    }

    fn decode(line: &str) -> Result<Self, RecordError> {
        let f = split_fields(line, Self::FIELD_COUNT)?;

        Ok(Pizza {
            id: parse_id("id", f[0])?,
            name: parse_text("name", f[1])?,
            topping_count: parse_count("topping count", f[2])?,
            crust: f[3]
                .parse::<CrustType>()
                .map_err(|e| RecordError::invalid("crust type", f[3], e))?,
            price: parse_money("price", f[4])?,
            is_sold_out: parse_bool("sold out", f[5])?,
            soft_deleted: parse_bool("soft deleted", f[6])?,
        })
    }
}

// =============================================================================
// Drink
// =============================================================================

impl FlatRecord for Drink {
    const FIELD_COUNT: usize = 5;

    fn encode(&self) -> String {
        format!(
            "{}#{}#{}#{}#{}",
            self.id,
            self.name,
            self.price.to_decimal_string(),
            self.is_sold_out,
            self.soft_deleted
        )
    }

    fn decode(line: &str) -> Result<Self, RecordError> {
        let f = split_fields(line, Self::FIELD_COUNT)?;

        Ok(Drink {
            id: parse_id("id", f[0])?,
            name: parse_text("name", f[1])?,
            price: parse_money("price", f[2])?,
            is_sold_out: parse_bool("sold out", f[3])?,
            soft_deleted: parse_bool("soft deleted", f[4])?,
        })
    }
}

// =============================================================================
// Order
// =============================================================================

fn decode_drink(id_field: &str, size_field: &str) -> Result<Option<DrinkChoice>, RecordError> {
    let drink_id = parse_count("drink id", id_field)?;
    let no_size = size_field.trim().eq_ignore_ascii_case(NO_DRINK_SIZE);

    match (drink_id, no_size) {
        (NO_DRINK_ID, true) => Ok(None),
        (NO_DRINK_ID, false) => Err(RecordError::invalid(
            "drink size",
            size_field,
            "size given without a drink",
        )),
        (_, true) => Err(RecordError::invalid(
            "drink size",
            size_field,
            "drink given without a size",
        )),
        (drink_id, false) => {
            let size = size_field
                .parse::<DrinkSize>()
                .map_err(|e| RecordError::invalid("drink size", size_field, e))?;
            Ok(Some(DrinkChoice { drink_id, size }))
        }
    }
}

impl FlatRecord for Order {
    const FIELD_COUNT: usize = 8;

    fn encode(&self) -> String {
        let (drink_id, drink_size) = match self.drink {
            Some(choice) => (choice.drink_id, choice.size.label()),
            None => (NO_DRINK_ID, NO_DRINK_SIZE),
        };

        format!(
            "{}#{}#{}#{}#{}#{}#{}#{}",
            self.id,
            self.customer_email,
            self.pizza_id,
            drink_id,
            drink_size,
            self.formatted_date(),
            self.pizza_size.inches(),
            self.status.is_complete()
        )
    }

    fn decode(line: &str) -> Result<Self, RecordError> {
        let f = split_fields(line, Self::FIELD_COUNT)?;

        Ok(Order {
            id: parse_id("id", f[0])?,
            customer_email: parse_text("email", f[1])?,
            pizza_id: parse_id("pizza id", f[2])?,
            drink: decode_drink(f[3], f[4])?,
            order_date: parse_date("order date", f[5])?,
            pizza_size: f[6]
                .parse::<PizzaSize>()
                .map_err(|e| RecordError::invalid("pizza size", f[6], e))?,
            status: OrderStatus::from_complete_flag(parse_bool("order status", f[7])?),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pizza_line() {
        let pizza = Pizza {
            id: 3,
            name: "Pepperoni".to_string(),
            topping_count: 1,
            crust: CrustType::GlutenFree,
            price: Money::from_cents(1149),
            is_sold_out: true,
            soft_deleted: false,
        };

        let line = pizza.encode();
        assert_eq!(line, "3#Pepperoni#1#Gluten-Free#11.49#true#false");
        assert_eq!(Pizza::decode(&line).unwrap(), pizza);
    }

    #[test]
    fn test_drink_line() {
        let drink = Drink::decode("1#Cola#1.99#false#true").unwrap();
        assert_eq!(drink.id, 1);
        assert_eq!(drink.name, "Cola");
        assert_eq!(drink.price.cents(), 199);
        assert!(!drink.is_sold_out);
        assert!(drink.soft_deleted);
        assert_eq!(drink.encode(), "1#Cola#1.99#false#true");
    }

    #[test]
    fn test_order_line_with_drink() {
        let order = Order::decode("7#ann@x.com#3#1#large#03/07/24#16#false").unwrap();

        assert_eq!(order.id, 7);
        assert_eq!(order.pizza_id, 3);
        assert_eq!(
            order.drink,
            Some(DrinkChoice {
                drink_id: 1,
                size: DrinkSize::Large
            })
        );
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(order.pizza_size, PizzaSize::Large);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.encode(), "7#ann@x.com#3#1#large#03/07/24#16#false");
    }

    #[test]
    fn test_order_line_without_drink() {
        let order = Order::decode("8#bob@x.com#2#0#none#12/31/23#8#true").unwrap();
        assert_eq!(order.drink, None);
        assert_eq!(order.status, OrderStatus::Complete);
        assert_eq!(order.encode(), "8#bob@x.com#2#0#none#12/31/23#8#true");
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(
            Drink::decode("1#Cola#1.99#false").unwrap_err(),
            RecordError::WrongFieldCount {
                expected: 5,
                found: 4
            }
        );
        // A name containing the delimiter shifts every field
        assert!(Pizza::decode("1#Half#Half#2#Thin#9.99#false#false").is_err());
    }

    #[test]
    fn test_unparsable_fields() {
        assert!(Pizza::decode("x#Veggie#4#Thin#9.99#false#false").is_err());
        assert!(Pizza::decode("0#Veggie#4#Thin#9.99#false#false").is_err());
        assert!(Pizza::decode("1#Veggie#-4#Thin#9.99#false#false").is_err());
        assert!(Pizza::decode("1#Veggie#4#Deep#9.99#false#false").is_err());
        assert!(Pizza::decode("1#Veggie#4#Thin#cheap#false#false").is_err());
        assert!(Pizza::decode("1#Veggie#4#Thin#9.99#yes#false").is_err());
        assert!(Pizza::decode("1##4#Thin#9.99#false#false").is_err());

        assert!(Order::decode("1#a@x.com#1#0#none#2024-03-07#8#false").is_err());
        assert!(Order::decode("1#a@x.com#1#0#none#03/07/24#10#false").is_err());
    }

    #[test]
    fn test_drink_fields_must_agree() {
        assert!(Order::decode("1#a@x.com#1#0#small#03/07/24#8#false").is_err());
        assert!(Order::decode("1#a@x.com#1#2#none#03/07/24#8#false").is_err());
        assert!(Order::decode("1#a@x.com#1#2#venti#03/07/24#8#false").is_err());
    }

    #[test]
    fn test_boolean_case_is_tolerated() {
        let drink = Drink::decode("2#Tea#1.50#TRUE#False").unwrap();
        assert!(drink.is_sold_out);
        assert!(!drink.soft_deleted);
    }
}
