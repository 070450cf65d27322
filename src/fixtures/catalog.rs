//! JSON data fixtures: product catalogue, customer PII and admin orders.
//!
//! Each payload is a constant tree of `#[derive(Serialize)]` structs so the
//! key order in the output follows field declaration order. Output is
//! pretty-printed with a 2-space indent and every non-ASCII character escaped
//! as `\uXXXX` (UTF-16 units), matching what scanner assertions expect.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use super::FixtureResponse;
use crate::logger;

const JSON: &str = "application/json";

#[derive(Serialize)]
struct ProductsPayload {
    products: &'static [Product],
    meta: Meta,
}

#[derive(Serialize)]
struct Product {
    id: u64,
    title: &'static str,
    cost_price: f64,
    supplier_email: &'static str,
}

#[derive(Serialize)]
struct Meta {
    api_key: &'static str,
}

#[derive(Serialize)]
struct CustomersPayload {
    customers: &'static [Customer],
    warning: &'static str,
}

#[derive(Serialize)]
struct Customer {
    id: u64,
    email: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    phone: &'static str,
    addresses: &'static [Address],
}

#[derive(Serialize)]
struct Address {
    address1: &'static str,
    city: &'static str,
    zip: &'static str,
}

#[derive(Serialize)]
struct OrdersPayload {
    orders: &'static [Order],
    warning: &'static str,
}

#[derive(Serialize)]
struct Order {
    id: u64,
    customer_email: &'static str,
    billing_address: BillingAddress,
    payment_details: PaymentDetails,
}

#[derive(Serialize)]
struct BillingAddress {
    address1: &'static str,
}

#[derive(Serialize)]
struct PaymentDetails {
    last_four: &'static str,
    transaction_id: &'static str,
}

const PRODUCTS: ProductsPayload = ProductsPayload {
    products: &[Product {
        id: 1_234_567_890_123_456_789,
        title: "Demo Product",
        cost_price: 15.50,
        supplier_email: "supplier@demo-vulnerable.com",
    }],
    meta: Meta {
        api_key: "demo_access_token_exposed_in_json_response",
    },
};

const CUSTOMERS: CustomersPayload = CustomersPayload {
    customers: &[Customer {
        id: 1_111_111_111_111_111_111,
        email: "john.doe@vulnerable-demo.com",
        first_name: "John",
        last_name: "Doe",
        phone: "+1-555-0123",
        addresses: &[Address {
            address1: "123 Main St",
            city: "Demo City",
            zip: "12345",
        }],
    }],
    warning: "🔴 CRITICAL: Customer data exposed!",
};

const ADMIN_ORDERS: OrdersPayload = OrdersPayload {
    orders: &[Order {
        id: 3_333_333_333_333_333_333,
        customer_email: "customer@vulnerable-demo.com",
        billing_address: BillingAddress {
            address1: "456 Oak Ave",
        },
        payment_details: PaymentDetails {
            last_four: "4242",
            transaction_id: "demo_txn_vulnerable_123456",
        },
    }],
    warning: "🔴 CRITICAL: Admin data exposed!",
};

/// `PrettyFormatter` that writes non-ASCII characters as `\uXXXX` escapes
struct AsciiPrettyFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize a payload as pretty-printed, ASCII-only JSON
fn json_fixture<T: Serialize>(payload: &T) -> FixtureResponse {
    let mut body = Vec::new();
    let formatter = AsciiPrettyFormatter(PrettyFormatter::with_indent(b"  "));
    let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
    if let Err(e) = payload.serialize(&mut serializer) {
        logger::log_error(&format!("Failed to serialize JSON fixture: {e}"));
        body = b"{}".to_vec();
    }
    FixtureResponse::ok(JSON, body)
}

/// `/products.json`: product record with a supplier contact and a leaked
/// access token in `meta`
pub fn products() -> FixtureResponse {
    json_fixture(&PRODUCTS)
}

/// `/customers.json`: unauthenticated customer PII
pub fn customers() -> FixtureResponse {
    json_fixture(&CUSTOMERS)
}

/// `/admin/orders.json`: admin order with billing address and payment details
pub fn admin_orders() -> FixtureResponse {
    json_fixture(&ADMIN_ORDERS)
}
