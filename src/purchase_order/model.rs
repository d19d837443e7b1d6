use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::numeric::deserialize_lenient;

pub const DEFAULT_BUYER_ORGANIZATION: &str = "Queens' College";
pub const DEFAULT_BUYER_ADDRESS: &str = "Khandwa Road, Indore (M.P.)";
pub const FIRST_ITEM_ID: &str = "1";

/// One row of the order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub qty: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub basic_cost: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub gst: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub total_cost: f64,
}

impl LineItem {
    /// A blank item with every number zeroed.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            qty: 0.0,
            basic_cost: 0.0,
            gst: 0.0,
            total_cost: 0.0,
        }
    }

    /// `qty * basic_cost + gst`. GST is a flat amount, not a rate.
    pub fn computed_total(&self) -> f64 {
        self.qty * self.basic_cost + self.gst
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    pub contact_person: String,
    pub company_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    pub bank: String,
    pub account_no: String,
    pub branch: String,
    pub ifsc_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OtherDetails {
    pub pan_no: String,
    pub gst_no: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Buyer {
    pub organization: String,
    pub address: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
}

impl Default for Buyer {
    fn default() -> Self {
        Self {
            organization: DEFAULT_BUYER_ORGANIZATION.to_string(),
            address: DEFAULT_BUYER_ADDRESS.to_string(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

/// Internal point of contact.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Poc {
    pub name: String,
    pub phone: String,
}

/// Quotation reference. `amount` is free text.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub quotation_no: String,
    pub date: String,
    pub amount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Terms {
    pub quality_assurance_item: String,
    pub delivery_timeline: String,
    pub compliance_quote_amount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseOrderData {
    pub po_no: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub vendor: Vendor,
    pub bank_details: BankDetails,
    pub other_details: OtherDetails,
    pub buyer: Buyer,
    pub poc: Poc,
    pub reference: Reference,
    pub items: Vec<LineItem>,
    pub terms: Terms,
}

impl Default for PurchaseOrderData {
    fn default() -> Self {
        Self {
            po_no: String::new(),
            date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            vendor: Vendor::default(),
            bank_details: BankDetails::default(),
            other_details: OtherDetails::default(),
            buyer: Buyer::default(),
            poc: Poc::default(),
            reference: Reference::default(),
            items: vec![LineItem::empty(FIRST_ITEM_ID)],
            terms: Terms::default(),
        }
    }
}

impl PurchaseOrderData {
    /// Sum of every item's `total_cost`, computed on each call.
    pub fn grand_total(&self) -> f64 {
        self.items.iter().map(|item| item.total_cost).sum()
    }
}

/// Form state as returned by the HTTP API.
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub data: PurchaseOrderData,
    pub grand_total: f64,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrandTotalResponse {
    pub grand_total: f64,
    pub item_count: usize,
}
