//! Core module containing the draft, validation, wire types and collaborators

pub mod client;
pub mod draft;
pub mod error;
pub mod modal;
pub mod navigation;
pub mod order;
pub mod validation;

pub use client::{HttpOrderClient, OrderClient, OrderResponse};
pub use draft::{DraftOrderInput, OrderField};
pub use error::{OrderError, OrderResult};
pub use modal::{ModalEvent, ModalHandle};
pub use navigation::{Navigator, RecordingNavigator};
pub use order::{OrderConfirmationTarget, OrderId, OrderLineItems, OrderPayload, SubmittedOrder};
pub use validation::{FieldErrorState, ValidationFailure};
