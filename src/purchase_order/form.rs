//! Purchase-order form state.
//!
//! `PurchaseOrderForm` owns one `PurchaseOrderData` snapshot. Every operation
//! borrows the current snapshot and returns the next one; nothing is mutated
//! behind the caller's back. Field addressing goes through closed enums so an
//! unknown section or field cannot be expressed.

use serde::Deserialize;
use std::collections::HashSet;
use utoipa::ToSchema;
use uuid::Uuid;

use super::model::{FormSnapshot, LineItem, PurchaseOrderData};
use super::numeric::parse_lenient;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TopLevelField {
    PoNo,
    Date,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum VendorField {
    ContactPerson,
    CompanyName,
    Address,
    Email,
    Phone,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum BankDetailsField {
    Bank,
    AccountNo,
    Branch,
    IfscCode,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum OtherDetailsField {
    PanNo,
    GstNo,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum BuyerField {
    Organization,
    Address,
    ContactPerson,
    Email,
    Phone,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PocField {
    Name,
    Phone,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceField {
    QuotationNo,
    Date,
    Amount,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum TermsField {
    QualityAssuranceItem,
    DeliveryTimeline,
    ComplianceQuoteAmount,
}

/// Replace one field inside one nested section.
///
/// JSON form: `{"section": "vendor", "field": "companyName", "value": "Acme"}`.
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum SectionUpdate {
    Vendor { field: VendorField, value: String },
    BankDetails { field: BankDetailsField, value: String },
    OtherDetails { field: OtherDetailsField, value: String },
    Buyer { field: BuyerField, value: String },
    Poc { field: PocField, value: String },
    Reference { field: ReferenceField, value: String },
    Terms { field: TermsField, value: String },
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    Description,
    Qty,
    BasicCost,
    Gst,
}

/// Every mutation the form accepts.
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum FormCommand {
    SetTopLevelField {
        field: TopLevelField,
        value: String,
    },
    SetField {
        update: SectionUpdate,
    },
    AddItem,
    RemoveItem {
        id: String,
    },
    UpdateItem {
        id: String,
        field: ItemField,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderForm {
    data: PurchaseOrderData,
}

impl Default for PurchaseOrderForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PurchaseOrderForm {
    /// Fresh form with the default record.
    pub fn new() -> Self {
        Self {
            data: PurchaseOrderData::default(),
        }
    }

    /// Wrap an existing record. An empty item list gets one blank item and
    /// every `total_cost` is recomputed from its quantity, cost and GST.
    pub fn from_data(mut data: PurchaseOrderData) -> Self {
        if data.items.is_empty() {
            data.items.push(LineItem::empty(fresh_item_id(&data.items)));
        }
        for item in &mut data.items {
            item.total_cost = item.computed_total();
        }
        Self { data }
    }

    pub fn data(&self) -> &PurchaseOrderData {
        &self.data
    }

    pub fn into_data(self) -> PurchaseOrderData {
        self.data
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            data: self.data.clone(),
            grand_total: self.grand_total(),
        }
    }

    pub fn grand_total(&self) -> f64 {
        self.data.grand_total()
    }

    pub fn apply(&self, command: FormCommand) -> Self {
        match command {
            FormCommand::SetTopLevelField { field, value } => {
                self.set_top_level_field(field, value)
            }
            FormCommand::SetField { update } => self.set_field(update),
            FormCommand::AddItem => self.add_item(),
            FormCommand::RemoveItem { id } => self.remove_item(&id),
            FormCommand::UpdateItem { id, field, value } => self.update_item(&id, field, &value),
        }
    }

    pub fn set_top_level_field(&self, field: TopLevelField, value: impl Into<String>) -> Self {
        let mut data = self.data.clone();
        let value = value.into();
        match field {
            TopLevelField::PoNo => data.po_no = value,
            TopLevelField::Date => data.date = value,
        }
        Self { data }
    }

    pub fn set_field(&self, update: SectionUpdate) -> Self {
        let mut data = self.data.clone();
        match update {
            SectionUpdate::Vendor { field, value } => {
                let vendor = &mut data.vendor;
                match field {
                    VendorField::ContactPerson => vendor.contact_person = value,
                    VendorField::CompanyName => vendor.company_name = value,
                    VendorField::Address => vendor.address = value,
                    VendorField::Email => vendor.email = value,
                    VendorField::Phone => vendor.phone = value,
                }
            }
            SectionUpdate::BankDetails { field, value } => {
                let bank = &mut data.bank_details;
                match field {
                    BankDetailsField::Bank => bank.bank = value,
                    BankDetailsField::AccountNo => bank.account_no = value,
                    BankDetailsField::Branch => bank.branch = value,
                    BankDetailsField::IfscCode => bank.ifsc_code = value,
                }
            }
            SectionUpdate::OtherDetails { field, value } => match field {
                OtherDetailsField::PanNo => data.other_details.pan_no = value,
                OtherDetailsField::GstNo => data.other_details.gst_no = value,
            },
            SectionUpdate::Buyer { field, value } => {
                let buyer = &mut data.buyer;
                match field {
                    BuyerField::Organization => buyer.organization = value,
                    BuyerField::Address => buyer.address = value,
                    BuyerField::ContactPerson => buyer.contact_person = value,
                    BuyerField::Email => buyer.email = value,
                    BuyerField::Phone => buyer.phone = value,
                }
            }
            SectionUpdate::Poc { field, value } => match field {
                PocField::Name => data.poc.name = value,
                PocField::Phone => data.poc.phone = value,
            },
            SectionUpdate::Reference { field, value } => {
                let reference = &mut data.reference;
                match field {
                    ReferenceField::QuotationNo => reference.quotation_no = value,
                    ReferenceField::Date => reference.date = value,
                    ReferenceField::Amount => reference.amount = value,
                }
            }
            SectionUpdate::Terms { field, value } => {
                let terms = &mut data.terms;
                match field {
                    TermsField::QualityAssuranceItem => terms.quality_assurance_item = value,
                    TermsField::DeliveryTimeline => terms.delivery_timeline = value,
                    TermsField::ComplianceQuoteAmount => terms.compliance_quote_amount = value,
                }
            }
        }
        Self { data }
    }

    /// Append a blank item with an id no existing item uses.
    pub fn add_item(&self) -> Self {
        let mut data = self.data.clone();
        let id = fresh_item_id(&data.items);
        log::debug!("Adding line item {}", id);
        data.items.push(LineItem::empty(id));
        Self { data }
    }

    /// Remove the item with `id`. The last remaining item is never removed.
    pub fn remove_item(&self, id: &str) -> Self {
        if self.data.items.len() <= 1 {
            log::debug!("Ignoring removal of the only line item {}", id);
            return self.clone();
        }
        let mut data = self.data.clone();
        data.items.retain(|item| item.id != id);
        Self { data }
    }

    /// Set one item field and recompute that item's total.
    pub fn update_item(&self, id: &str, field: ItemField, value: &str) -> Self {
        let mut data = self.data.clone();
        if let Some(item) = data.items.iter_mut().find(|item| item.id == id) {
            match field {
                ItemField::Description => item.description = value.to_string(),
                ItemField::Qty => item.qty = parse_lenient(value),
                ItemField::BasicCost => item.basic_cost = parse_lenient(value),
                ItemField::Gst => item.gst = parse_lenient(value),
            }
            item.total_cost = item.computed_total();
        }
        Self { data }
    }
}

fn fresh_item_id(items: &[LineItem]) -> String {
    let taken: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
    loop {
        let candidate = Uuid::new_v4().simple().to_string();
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
    }
}
