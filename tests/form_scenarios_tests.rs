mod common;

use po_docgen_server::purchase_order::form::{
    FormCommand, ItemField, PurchaseOrderForm, SectionUpdate, TermsField, TopLevelField,
};

#[test]
fn test_single_item_total_is_318() {
    let form = PurchaseOrderForm::new();
    let id = form.data().items[0].id.clone();
    let form = form
        .update_item(&id, ItemField::Qty, "3")
        .update_item(&id, ItemField::BasicCost, "100")
        .update_item(&id, ItemField::Gst, "18");

    assert_eq!(form.data().items[0].total_cost, 318.0);
    assert_eq!(form.grand_total(), 318.0);
}

#[test]
fn test_second_item_brings_total_to_418() {
    let form = common::two_item_form();
    assert_eq!(form.data().items[1].total_cost, 100.0);
    assert_eq!(form.grand_total(), 418.0);
    // repeated reads agree
    assert_eq!(form.grand_total(), form.grand_total());
}

#[test]
fn test_total_invariant_holds_after_every_update() {
    let mut form = common::two_item_form();
    let inputs = ["7", "abc", "2.5", "", "-1", "1e2", "12kg"];
    let fields = [ItemField::Qty, ItemField::BasicCost, ItemField::Gst];

    for (step, value) in inputs.iter().enumerate() {
        let id = form.data().items[step % 2].id.clone();
        form = form.update_item(&id, fields[step % fields.len()], value);
        for item in &form.data().items {
            assert_eq!(item.total_cost, item.qty * item.basic_cost + item.gst);
        }
        let sum: f64 = form.data().items.iter().map(|i| i.total_cost).sum();
        assert_eq!(form.grand_total(), sum);
    }
}

#[test]
fn test_gst_is_a_flat_amount() {
    let form = PurchaseOrderForm::new();
    let id = form.data().items[0].id.clone();
    let form = form
        .update_item(&id, ItemField::Qty, "10")
        .update_item(&id, ItemField::BasicCost, "10")
        .update_item(&id, ItemField::Gst, "18");
    assert_eq!(form.data().items[0].total_cost, 118.0);
}

#[test]
fn test_removing_last_item_keeps_it() {
    let form = common::two_item_form();
    let first = form.data().items[0].id.clone();
    let second = form.data().items[1].id.clone();

    let form = form.remove_item(&second);
    assert_eq!(form.data().items.len(), 1);

    let after = form.remove_item(&first);
    assert_eq!(after.data().items.len(), 1);
    assert_eq!(after.data().items[0].id, first);
}

#[test]
fn test_commands_replay_like_direct_calls() {
    let commands = vec![
        FormCommand::SetTopLevelField {
            field: TopLevelField::PoNo,
            value: "A/B?C".to_string(),
        },
        FormCommand::UpdateItem {
            id: "1".to_string(),
            field: ItemField::Qty,
            value: "3".to_string(),
        },
        FormCommand::UpdateItem {
            id: "1".to_string(),
            field: ItemField::BasicCost,
            value: "100".to_string(),
        },
        FormCommand::SetField {
            update: SectionUpdate::Terms {
                field: TermsField::QualityAssuranceItem,
                value: "laboratory furniture".to_string(),
            },
        },
    ];

    let form = commands
        .into_iter()
        .fold(PurchaseOrderForm::new(), |form, command| form.apply(command));

    assert_eq!(form.data().po_no, "A/B?C");
    assert_eq!(form.grand_total(), 300.0);
    assert_eq!(form.data().terms.quality_assurance_item, "laboratory furniture");
}
