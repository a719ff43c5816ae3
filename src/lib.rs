//! # order-modal
//!
//! The submission workflow behind a "Place Order" modal: it holds the
//! customer's draft (name, phone, address), validates every field on submit,
//! aggregates the failures into one sentence, creates the order with a single
//! `POST /api/orders` and hands the confirmation path to the router.
//!
//! Rendering, routing and styling stay with the host UI. The workflow talks to
//! them through the [`OrderClient`](core::client::OrderClient) and
//! [`Navigator`](core::navigation::Navigator) traits and a close callback.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_modal::prelude::*;
//! use std::sync::Arc;
//!
//! let config = WorkflowConfig::from_yaml_file("order_modal.yaml")?;
//! let client = Arc::new(HttpOrderClient::from_config(&config)?);
//! let navigator = Arc::new(RecordingNavigator::new());
//!
//! let mut workflow = OrderSubmissionWorkflow::new(
//!     OrderLineItems::new(json!([{ "sku": "PIZZA-L", "qty": 2 }])),
//!     client,
//!     navigator.clone(),
//!     || println!("modal closed"),
//! )
//! .with_config(&config);
//!
//! workflow.set_name("Jane Doe");
//! workflow.set_phone("(555) 123-4567");
//! workflow.set_address("1 Main St");
//!
//! match workflow.submit().await {
//!     Ok(target) => println!("go to {}", target),
//!     Err(_) => println!("{}", workflow.error_message().unwrap_or_default()),
//! }
//! ```

pub mod config;
pub mod core;
pub mod workflow;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        client::{HttpOrderClient, OrderClient, OrderResponse},
        draft::{DraftOrderInput, OrderField},
        modal::{ModalEvent, ModalHandle},
        navigation::{Navigator, RecordingNavigator},
        order::{OrderConfirmationTarget, OrderId, OrderLineItems, OrderPayload, SubmittedOrder},
        validation::{FieldErrorState, ValidationFailure},
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, OrderError, OrderResult, SubmissionError, ValidationError,
    };

    // === Config ===
    pub use crate::config::WorkflowConfig;

    // === Workflow ===
    pub use crate::workflow::{OrderSubmissionWorkflow, WorkflowState};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{Value, json};
}
