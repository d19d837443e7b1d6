//! Purchase-order form: record types, pure state transitions and the HTTP
//! endpoints that drive them.

pub mod form;
pub mod model;
pub mod numeric;
pub mod routes;

pub use form::{FormCommand, PurchaseOrderForm};
pub use model::{LineItem, PurchaseOrderData};
