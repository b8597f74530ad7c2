//! # Domain Types
//!
//! Record types used throughout the pizzeria.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Pizza       │   │     Drink       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (u32)       │   │  id (u32)       │       │
//! │  │  name           │   │  name           │   │  customer_email │       │
//! │  │  topping_count  │   │  price          │   │  pizza_id (FK)  │──► Pizza
//! │  │  crust          │   │  is_sold_out    │   │  pizza_size     │       │
//! │  │  price          │   │  soft_deleted   │   │  drink (FK?)    │──► Drink
//! │  │  is_sold_out    │   └─────────────────┘   │  order_date     │       │
//! │  │  soft_deleted   │                         │  status         │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CrustType     │   │   PizzaSize     │   │   DrinkSize     │       │
//! │  │  Thin / Thick   │   │  8 / 12 / 16 in │   │  small / medium │       │
//! │  │  Stuffed / GF   │   └─────────────────┘   │  / large        │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every record kind has its own dense id sequence starting at 1, handed out
//! in insertion order by [`RecordSet::next_id`](crate::records::RecordSet::next_id).
//! Ids are never reused: nothing is physically deleted, removal only sets
//! `soft_deleted`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;
use crate::validation::{
    validate_email, validate_item_name, validate_price, validate_topping_count, ValidationResult,
};

/// Date format of order dates on disk and in reports: `MM/DD/YY`.
pub const ORDER_DATE_FORMAT: &str = "%m/%d/%y";

// =============================================================================
// Record Traits
// =============================================================================

/// A record with a numeric identity.
pub trait Identified {
    /// Entity name used in errors and log fields ("Pizza", "Drink", "Order").
    const ENTITY: &'static str;

    fn id(&self) -> u32;
}

/// A sellable menu entry (pizza or drink).
///
/// `MenuManager` in the store crate is generic over this trait, so add,
/// remove, edit and the availability listing are written once for both
/// menu kinds.
pub trait MenuItem: Identified + Clone {
    /// Caller-supplied fields for a new item (everything except id and flags).
    type Draft;

    /// A single-field change.
    type Edit;

    /// Builds a fresh item: not sold out, not removed.
    fn from_draft(id: u32, draft: Self::Draft) -> Self;

    fn validate_draft(draft: &Self::Draft) -> ValidationResult<()>;

    fn validate_edit(edit: &Self::Edit) -> ValidationResult<()>;

    /// Applies exactly one field change.
    fn apply_edit(&mut self, edit: Self::Edit);

    fn name(&self) -> &str;

    fn price(&self) -> Money;

    fn is_sold_out(&self) -> bool;

    fn is_soft_deleted(&self) -> bool;

    fn set_soft_deleted(&mut self, soft_deleted: bool);

    /// On sale right now: neither sold out nor removed.
    fn is_available(&self) -> bool {
        !self.is_sold_out() && !self.is_soft_deleted()
    }
}

// =============================================================================
// Crust Type
// =============================================================================

/// Pizza crust, one of a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrustType {
    Thin,
    Thick,
    Stuffed,
    GlutenFree,
}

impl CrustType {
    /// Every crust type in canonical order.
    pub const ALL: [CrustType; 4] = [
        CrustType::Thin,
        CrustType::Thick,
        CrustType::Stuffed,
        CrustType::GlutenFree,
    ];

    /// The label used on disk and in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            CrustType::Thin => "Thin",
            CrustType::Thick => "Thick",
            CrustType::Stuffed => "Stuffed",
            CrustType::GlutenFree => "Gluten-Free",
        }
    }
}

impl fmt::Display for CrustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CrustType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thin" => Ok(CrustType::Thin),
            "thick" => Ok(CrustType::Thick),
            "stuffed" => Ok(CrustType::Stuffed),
            "gluten-free" | "gluten free" | "glutenfree" => Ok(CrustType::GlutenFree),
            _ => Err(CoreError::unknown_category("crust type", s)),
        }
    }
}

// =============================================================================
// Pizza Size
// =============================================================================

/// Pizza diameter, one of 8, 12 or 16 inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PizzaSize {
    /// 8 inches.
    Small,
    /// 12 inches.
    Medium,
    /// 16 inches.
    Large,
}

impl PizzaSize {
    /// Every pizza size in canonical order.
    pub const ALL: [PizzaSize; 3] = [PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large];

    /// Diameter in inches.
    pub const fn inches(&self) -> u32 {
        match self {
            PizzaSize::Small => 8,
            PizzaSize::Medium => 12,
            PizzaSize::Large => 16,
        }
    }

    /// Looks a size up by its diameter.
    pub fn from_inches(inches: u32) -> Option<Self> {
        PizzaSize::ALL.into_iter().find(|size| size.inches() == inches)
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inches())
    }
}

impl FromStr for PizzaSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(PizzaSize::from_inches)
            .ok_or_else(|| CoreError::unknown_category("pizza size", s))
    }
}

// =============================================================================
// Drink Size
// =============================================================================

/// Cup size of an ordered drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkSize {
    Small,
    Medium,
    Large,
}

impl DrinkSize {
    /// Every drink size in canonical order.
    pub const ALL: [DrinkSize; 3] = [DrinkSize::Small, DrinkSize::Medium, DrinkSize::Large];

    pub const fn label(&self) -> &'static str {
        match self {
            DrinkSize::Small => "small",
            DrinkSize::Medium => "medium",
            DrinkSize::Large => "large",
        }
    }
}

impl fmt::Display for DrinkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DrinkSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(DrinkSize::Small),
            "medium" => Ok(DrinkSize::Medium),
            "large" => Ok(DrinkSize::Large),
            _ => Err(CoreError::unknown_category("drink size", s)),
        }
    }
}

// =============================================================================
// Pizza
// =============================================================================

/// A pizza on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: u32,
    pub name: String,
    pub topping_count: u32,
    pub crust: CrustType,
    pub price: Money,
    /// Temporarily unavailable; toggled independently of removal.
    pub is_sold_out: bool,
    /// Removed from the menu, kept for order history.
    pub soft_deleted: bool,
}

/// Fields for a new pizza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPizza {
    pub name: String,
    pub topping_count: u32,
    pub crust: CrustType,
    pub price: Money,
}

/// One field change on a pizza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PizzaEdit {
    Name(String),
    Price(Money),
    ToppingCount(u32),
    Crust(CrustType),
    SoldOut(bool),
}

impl Identified for Pizza {
    const ENTITY: &'static str = "Pizza";

    fn id(&self) -> u32 {
        self.id
    }
}

impl MenuItem for Pizza {
    type Draft = NewPizza;
    type Edit = PizzaEdit;

    fn from_draft(id: u32, draft: NewPizza) -> Self {
        Pizza {
            id,
            name: draft.name.trim().to_string(),
            topping_count: draft.topping_count,
            crust: draft.crust,
            price: draft.price,
            is_sold_out: false,
            soft_deleted: false,
        }
    }

    fn validate_draft(draft: &NewPizza) -> ValidationResult<()> {
        validate_item_name(&draft.name)?;
        validate_topping_count(draft.topping_count)?;
        validate_price(draft.price)
    }

    fn validate_edit(edit: &PizzaEdit) -> ValidationResult<()> {
        match edit {
            PizzaEdit::Name(name) => validate_item_name(name),
            PizzaEdit::Price(price) => validate_price(*price),
            PizzaEdit::ToppingCount(count) => validate_topping_count(*count),
            PizzaEdit::Crust(_) | PizzaEdit::SoldOut(_) => Ok(()),
        }
    }

    fn apply_edit(&mut self, edit: PizzaEdit) {
        match edit {
            PizzaEdit::Name(name) => self.name = name.trim().to_string(),
            PizzaEdit::Price(price) => self.price = price,
            PizzaEdit::ToppingCount(count) => self.topping_count = count,
            PizzaEdit::Crust(crust) => self.crust = crust,
            PizzaEdit::SoldOut(sold_out) => self.is_sold_out = sold_out,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }

    fn is_sold_out(&self) -> bool {
        self.is_sold_out
    }

    fn is_soft_deleted(&self) -> bool {
        self.soft_deleted
    }

    fn set_soft_deleted(&mut self, soft_deleted: bool) {
        self.soft_deleted = soft_deleted;
    }
}

// =============================================================================
// Drink
// =============================================================================

/// A drink on the menu. One price regardless of cup size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub is_sold_out: bool,
    pub soft_deleted: bool,
}

/// Fields for a new drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub name: String,
    pub price: Money,
}

/// One field change on a drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrinkEdit {
    Name(String),
    Price(Money),
    SoldOut(bool),
}

impl Identified for Drink {
    const ENTITY: &'static str = "Drink";

    fn id(&self) -> u32 {
        self.id
    }
}

impl MenuItem for Drink {
    type Draft = NewDrink;
    type Edit = DrinkEdit;

    fn from_draft(id: u32, draft: NewDrink) -> Self {
        Drink {
            id,
            name: draft.name.trim().to_string(),
            price: draft.price,
            is_sold_out: false,
            soft_deleted: false,
        }
    }

    fn validate_draft(draft: &NewDrink) -> ValidationResult<()> {
        validate_item_name(&draft.name)?;
        validate_price(draft.price)
    }

    fn validate_edit(edit: &DrinkEdit) -> ValidationResult<()> {
        match edit {
            DrinkEdit::Name(name) => validate_item_name(name),
            DrinkEdit::Price(price) => validate_price(*price),
            DrinkEdit::SoldOut(_) => Ok(()),
        }
    }

    fn apply_edit(&mut self, edit: DrinkEdit) {
        match edit {
            DrinkEdit::Name(name) => self.name = name.trim().to_string(),
            DrinkEdit::Price(price) => self.price = price,
            DrinkEdit::SoldOut(sold_out) => self.is_sold_out = sold_out,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Money {
        self.price
    }

    fn is_sold_out(&self) -> bool {
        self.is_sold_out
    }

    fn is_soft_deleted(&self) -> bool {
        self.soft_deleted
    }

    fn set_soft_deleted(&mut self, soft_deleted: bool) {
        self.soft_deleted = soft_deleted;
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Progress of an order. Moves from `InProgress` to `Complete` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    InProgress,
    Complete,
}

impl OrderStatus {
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, OrderStatus::Complete)
    }

    /// Maps the persisted flag (`true` = complete) to a status.
    #[inline]
    pub const fn from_complete_flag(complete: bool) -> Self {
        if complete {
            OrderStatus::Complete
        } else {
            OrderStatus::InProgress
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// The drink half of an order: which drink and what cup size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkChoice {
    pub drink_id: u32,
    pub size: DrinkSize,
}

/// A customer order: one pizza, optionally one drink.
///
/// `pizza_id` and `drink.drink_id` referenced available items when the order
/// was placed. Those items may be sold out or removed later; the order stays
/// valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer_email: String,
    pub pizza_id: u32,
    pub pizza_size: PizzaSize,
    /// `None` when no drink was ordered.
    pub drink: Option<DrinkChoice>,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
}

/// What a caller supplies to place an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub customer_email: String,
    pub pizza_id: u32,
    pub pizza_size: PizzaSize,
    pub drink: Option<DrinkChoice>,
}

impl OrderRequest {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_email(&self.customer_email)
    }
}

impl Order {
    /// Builds a new in-progress order dated `order_date`.
    pub fn from_request(id: u32, request: OrderRequest, order_date: NaiveDate) -> Self {
        Order {
            id,
            customer_email: request.customer_email.trim().to_string(),
            pizza_id: request.pizza_id,
            pizza_size: request.pizza_size,
            drink: request.drink,
            order_date,
            status: OrderStatus::InProgress,
        }
    }

    #[inline]
    pub fn drink_id(&self) -> Option<u32> {
        self.drink.map(|choice| choice.drink_id)
    }

    #[inline]
    pub fn drink_size(&self) -> Option<DrinkSize> {
        self.drink.map(|choice| choice.size)
    }

    /// The customer email folded to lowercase. Every per-customer match and
    /// grouping compares these keys.
    pub fn email_key(&self) -> String {
        fold_email(&self.customer_email)
    }

    /// Case-insensitive email comparison.
    pub fn placed_by(&self, email: &str) -> bool {
        self.email_key() == fold_email(email)
    }

    /// The order date as `MM/DD/YY`.
    pub fn formatted_date(&self) -> String {
        self.order_date.format(ORDER_DATE_FORMAT).to_string()
    }
}

fn fold_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Identified for Order {
    const ENTITY: &'static str = "Order";

    fn id(&self) -> u32 {
        self.id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
