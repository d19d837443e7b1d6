//! Tool definition for purchase-order generation.

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;
use crate::purchase_order::model::PurchaseOrderData;

pub const TOOL_NAME: &str = "generate_purchase_order";

/// Arguments of the tool. Without `purchaseOrder` the server's current form
/// is rendered.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePurchaseOrderArgs {
    #[serde(default)]
    pub purchase_order: Option<PurchaseOrderData>,
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Render a purchase order as a Word (.docx) document. ",
            "Pass the full order as `purchaseOrder`, or omit it to render the order ",
            "currently held in the server's form. Line item totals are printed as given; ",
            "the net payable amount is recomputed from them."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn text_fields(names: &[&str]) -> Value {
    let properties: serde_json::Map<String, Value> = names
        .iter()
        .map(|name| (name.to_string(), json!({ "type": "string" })))
        .collect();
    json!({ "type": "object", "properties": properties })
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "purchaseOrder": {
                "type": "object",
                "description": "Purchase order to render",
                "properties": {
                    "poNo": { "type": "string", "description": "PO number, also used as file name" },
                    "date": { "type": "string", "description": "PO date (YYYY-MM-DD)" },
                    "vendor": text_fields(&["contactPerson", "companyName", "address", "email", "phone"]),
                    "bankDetails": text_fields(&["bank", "accountNo", "branch", "ifscCode"]),
                    "otherDetails": text_fields(&["panNo", "gstNo"]),
                    "buyer": text_fields(&["organization", "address", "contactPerson", "email", "phone"]),
                    "poc": text_fields(&["name", "phone"]),
                    "reference": text_fields(&["quotationNo", "date", "amount"]),
                    "items": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": { "type": "string" },
                                "description": { "type": "string" },
                                "qty": { "type": ["number", "string"] },
                                "basicCost": { "type": ["number", "string"] },
                                "gst": { "type": ["number", "string"], "description": "Flat GST amount" },
                                "totalCost": { "type": ["number", "string"] }
                            },
                            "required": ["id"]
                        }
                    },
                    "terms": text_fields(&["qualityAssuranceItem", "deliveryTimeline", "complianceQuoteAmount"])
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor() {
        let desc = descriptor();
        assert_eq!(desc.name, TOOL_NAME);
        assert!(desc.description.contains(".docx"));
        assert!(desc.input_schema["properties"]["purchaseOrder"]["properties"]["items"].is_object());
    }

    #[test]
    fn test_args_accept_string_numbers() {
        let args: GeneratePurchaseOrderArgs = serde_json::from_value(json!({
            "purchaseOrder": {
                "poNo": "PO-9",
                "items": [{ "id": "a", "qty": "2", "basicCost": 50, "gst": "oops", "totalCost": 100 }]
            }
        }))
        .unwrap();

        let po = args.purchase_order.unwrap();
        assert_eq!(po.items[0].qty, 2.0);
        assert_eq!(po.items[0].gst, 0.0);
        assert_eq!(po.buyer.organization, "Queens' College");
    }
}
