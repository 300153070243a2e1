/// Serializable views of the Order aggregate for the service boundary
use crate::domain::aggregates::Order;
use crate::domain::base::Entity;
use crate::domain::entities::Invoice;
use rust_decimal::Decimal;
use serde::Serialize;

/// Flat view of an invoice line item
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceView {
    pub id: String,
    pub order_id: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl From<&Invoice> for InvoiceView {
    fn from(invoice: &Invoice) -> Self {
        InvoiceView {
            id: invoice.id().to_string(),
            order_id: invoice.order_id().map(|id| id.to_string()),
            quantity: invoice.quantity().value(),
            unit_price: invoice.unit_price().amount(),
            line_total: invoice.line_total(),
        }
    }
}

/// Flat view of an order with all of its invoices
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: String,
    pub invoices: Vec<InvoiceView>,
    pub total: Decimal,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        OrderView {
            id: order.id().to_string(),
            invoices: order.invoices().iter().map(InvoiceView::from).collect(),
            total: order.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{InvoiceId, OrderId, Quantity, UnitPrice};
    use std::str::FromStr;

    #[test]
    fn test_order_view_from_aggregate() {
        let mut order = Order::new(OrderId::generate());
        order.add_invoice(Invoice::new(
            InvoiceId::generate(),
            Quantity::new(2).unwrap(),
            UnitPrice::parse("99.99").unwrap(),
        ));

        let view = OrderView::from(&order);

        assert_eq!(view.id, order.id().to_string());
        assert_eq!(view.invoices.len(), 1);
        assert_eq!(view.invoices[0].quantity, 2);
        assert_eq!(view.invoices[0].order_id, Some(order.id().to_string()));
        assert_eq!(view.total, Decimal::from_str("199.98").unwrap());
    }

    #[test]
    fn test_order_view_serializes_to_json() {
        let order = Order::new(OrderId::generate());
        let view = OrderView::from(&order);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["invoices"].as_array().unwrap().len(), 0);
        assert_eq!(json["total"], serde_json::json!("0"));
    }
}
