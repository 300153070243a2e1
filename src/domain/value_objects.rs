/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an Order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh identity for a new order
    pub fn generate() -> Self {
        OrderId(Uuid::new_v4())
    }

    /// Parse an identity supplied from outside the domain
    pub fn parse(id: &str) -> DomainResult<Self> {
        Uuid::parse_str(id)
            .map(OrderId)
            .map_err(|_| DomainError::Validation(format!("invalid order id: {}", id)))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ValueObject for OrderId {}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an Invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    pub fn generate() -> Self {
        InvoiceId(Uuid::new_v4())
    }

    pub fn parse(id: &str) -> DomainResult<Self> {
        Uuid::parse_str(id)
            .map(InvoiceId)
            .map_err(|_| DomainError::Validation(format!("invalid invoice id: {}", id)))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ValueObject for InvoiceId {}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a Customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn generate() -> Self {
        CustomerId(Uuid::new_v4())
    }

    pub fn parse(id: &str) -> DomainResult<Self> {
        Uuid::parse_str(id)
            .map(CustomerId)
            .map_err(|_| DomainError::Validation(format!("invalid customer id: {}", id)))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ValueObject for CustomerId {}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::Validation(
                "quantity must be greater than 0".to_string(),
            ));
        }
        u32::try_from(value)
            .map(Quantity)
            .map_err(|_| DomainError::Validation(format!("quantity out of range: {}", value)))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive price, exact decimal (no floating point)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitPrice(Decimal);

impl UnitPrice {
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value <= Decimal::ZERO {
            return Err(DomainError::Validation(
                "unit price must be greater than 0".to_string(),
            ));
        }
        Ok(UnitPrice(value))
    }

    /// Parse a price from its decimal string form
    pub fn parse(value: &str) -> DomainResult<Self> {
        let decimal: Decimal = value
            .parse()
            .map_err(|_| DomainError::Validation(format!("invalid unit price: {}", value)))?;
        UnitPrice::new(decimal)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl ValueObject for UnitPrice {}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    value: String,
}

impl EmailAddress {
    pub fn new(address: impl Into<String>) -> DomainResult<Self> {
        let address = address.into();
        if address.is_empty() {
            return Err(DomainError::Validation(
                "email address cannot be empty".to_string(),
            ));
        }

        // Minimal shape check; delivery is the transport's problem
        if !address.contains('@') {
            return Err(DomainError::Validation(format!(
                "email address missing '@': {}",
                address
            )));
        }

        Ok(EmailAddress { value: address })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl ValueObject for EmailAddress {}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
