//! Shared application state.
//!
//! Holds the single purchase-order form. Mutations compute the next snapshot
//! with the form's pure operations and swap it in under the write lock.

use parking_lot::RwLock;

use crate::config::ServerConfig;
use crate::document::{DirectorySink, PurchaseOrderGenerator};
use crate::purchase_order::form::PurchaseOrderForm;
use crate::purchase_order::model::{FormSnapshot, PurchaseOrderData};

pub struct AppState {
    form: RwLock<PurchaseOrderForm>,
    pub generator: PurchaseOrderGenerator,
    pub directory_sink: Option<DirectorySink>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_form(config, PurchaseOrderForm::new())
    }

    pub fn with_form(config: &ServerConfig, form: PurchaseOrderForm) -> Self {
        Self {
            form: RwLock::new(form),
            generator: PurchaseOrderGenerator::new(),
            directory_sink: config.output_dir.clone().map(DirectorySink::new),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.form.read().snapshot()
    }

    /// Clone of the current record for rendering outside the lock.
    pub fn current_data(&self) -> PurchaseOrderData {
        self.form.read().data().clone()
    }

    pub fn grand_total(&self) -> (f64, usize) {
        let form = self.form.read();
        (form.grand_total(), form.data().items.len())
    }

    /// Replace the form with `transition(current)` and return the new snapshot.
    pub fn update<F>(&self, transition: F) -> FormSnapshot
    where
        F: FnOnce(&PurchaseOrderForm) -> PurchaseOrderForm,
    {
        let mut form = self.form.write();
        let next = transition(&form);
        *form = next;
        form.snapshot()
    }

    pub fn reset(&self) -> FormSnapshot {
        self.update(|_| PurchaseOrderForm::new())
    }
}
