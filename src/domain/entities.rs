/// Domain entities
use super::base::Entity;
use super::value_objects::{CustomerId, EmailAddress, InvoiceId, OrderId, Quantity, UnitPrice};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// An Invoice is a single line item owned by at most one Order.
/// The back-reference is the owning order's id, not an owning link;
/// attach/detach happens only through the Order aggregate.
#[derive(Debug, Clone)]
pub struct Invoice {
    id: InvoiceId,
    order_id: Option<OrderId>,
    quantity: Quantity,
    unit_price: UnitPrice,
}

impl Invoice {
    /// Create a new, detached invoice
    pub fn new(id: InvoiceId, quantity: Quantity, unit_price: UnitPrice) -> Self {
        Invoice {
            id,
            order_id: None,
            quantity,
            unit_price,
        }
    }

    /// Reconstruct an invoice from persisted state
    pub fn hydrate(
        id: InvoiceId,
        order_id: Option<OrderId>,
        quantity: Quantity,
        unit_price: UnitPrice,
    ) -> Self {
        Invoice {
            id,
            order_id,
            quantity,
            unit_price,
        }
    }

    pub fn id(&self) -> &InvoiceId {
        &self.id
    }

    /// The owning order's id, or None when detached
    pub fn order_id(&self) -> Option<&OrderId> {
        self.order_id.as_ref()
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    /// quantity * unit price, exact
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity.value()) * self.unit_price.amount()
    }

    pub(crate) fn attach_to(&mut self, order_id: OrderId) {
        self.order_id = Some(order_id);
    }

    pub(crate) fn detach(&mut self) {
        self.order_id = None;
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A Customer known to the directory, notified on their birthday
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: EmailAddress,
    birth_date: NaiveDate,
}

impl Customer {
    pub fn new(id: CustomerId, name: String, email: EmailAddress, birth_date: NaiveDate) -> Self {
        Customer {
            id,
            name,
            email,
            birth_date,
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn price(s: &str) -> UnitPrice {
        UnitPrice::parse(s).unwrap()
    }

    #[test]
    fn test_new_invoice_is_detached() {
        let invoice = Invoice::new(InvoiceId::generate(), Quantity::new(2).unwrap(), price("9.99"));

        assert!(invoice.order_id().is_none());
        assert_eq!(invoice.quantity().value(), 2);
    }

    #[test]
    fn test_line_total() {
        let invoice = Invoice::new(InvoiceId::generate(), Quantity::new(3).unwrap(), price("19.99"));

        assert_eq!(invoice.line_total(), Decimal::from_str("59.97").unwrap());
    }

    #[test]
    fn test_attach_and_detach() {
        let order_id = OrderId::generate();
        let mut invoice =
            Invoice::new(InvoiceId::generate(), Quantity::new(1).unwrap(), price("5.00"));

        invoice.attach_to(order_id);
        assert_eq!(invoice.order_id(), Some(&order_id));

        invoice.detach();
        assert!(invoice.order_id().is_none());
    }

    #[test]
    fn test_customer_accessors() {
        let id = CustomerId::generate();
        let customer = Customer::new(
            id,
            "Ada".to_string(),
            EmailAddress::new("ada@example.com").unwrap(),
            NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        );

        assert_eq!(customer.id(), &id);
        assert_eq!(customer.name(), "Ada");
        assert_eq!(customer.email().as_str(), "ada@example.com");
        assert_eq!(
            customer.birth_date(),
            NaiveDate::from_ymd_opt(1990, 12, 10).unwrap()
        );
    }
}
