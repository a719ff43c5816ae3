//! Order submission workflow
//!
//! [`OrderSubmissionWorkflow`] owns the draft and the field error flags of
//! one modal instance. A UI layer renders from [`draft`], [`errors`] and
//! [`error_message`] and forwards input events to the setters, [`submit`]
//! and [`dismiss`].
//!
//! [`draft`]: OrderSubmissionWorkflow::draft
//! [`errors`]: OrderSubmissionWorkflow::errors
//! [`error_message`]: OrderSubmissionWorkflow::error_message
//! [`submit`]: OrderSubmissionWorkflow::submit
//! [`dismiss`]: OrderSubmissionWorkflow::dismiss

pub mod state;

pub use state::WorkflowState;

use crate::config::WorkflowConfig;
use crate::core::client::OrderClient;
use crate::core::draft::{DraftOrderInput, OrderField};
use crate::core::error::{OrderResult, SubmissionError, ValidationError};
use crate::core::modal::{ModalEvent, ModalHandle};
use crate::core::navigation::Navigator;
use crate::core::order::{
    OrderConfirmationTarget, OrderLineItems, OrderPayload, SubmittedOrder,
};
use crate::core::validation::FieldErrorState;
use std::sync::Arc;

/// Message shown when the backend did not create the order
pub const SUBMISSION_FAILED_MESSAGE: &str = "Your order could not be placed. Please try again.";

/// Message shown when submitting again would not help
pub const SUBMISSION_UNAVAILABLE_MESSAGE: &str = "Your order could not be placed.";

/// Draft, validation and submission of one order
pub struct OrderSubmissionWorkflow {
    items: OrderLineItems,
    client: Arc<dyn OrderClient>,
    navigator: Arc<dyn Navigator>,
    modal: ModalHandle,
    confirmation_path: String,
    draft: DraftOrderInput,
    errors: FieldErrorState,
    state: WorkflowState,
    submission_error: Option<String>,
}

impl OrderSubmissionWorkflow {
    /// Create a workflow for `order`, closing the modal through `on_close`
    pub fn new(
        order: OrderLineItems,
        client: Arc<dyn OrderClient>,
        navigator: Arc<dyn Navigator>,
        on_close: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            items: order,
            client,
            navigator,
            modal: ModalHandle::new(on_close),
            confirmation_path: OrderConfirmationTarget::DEFAULT_PREFIX.to_string(),
            draft: DraftOrderInput::default(),
            errors: FieldErrorState::default(),
            state: WorkflowState::Editing,
            submission_error: None,
        }
    }

    /// Use the confirmation route from `config`
    pub fn with_config(mut self, config: &WorkflowConfig) -> Self {
        self.confirmation_path = config.confirmation_path.clone();
        self
    }

    // === Draft ===

    /// Update one field; validation waits for [`submit`](Self::submit)
    pub fn set_field(&mut self, field: OrderField, value: impl Into<String>) {
        self.draft.set(field, value);

        if self.state == WorkflowState::SubmissionFailed {
            self.state = WorkflowState::Editing;
            self.submission_error = None;
        }
    }

    /// Update a field addressed by its name (`"name"`, `"phone"`, `"address"`)
    pub fn set_field_by_name(&mut self, field: &str, value: impl Into<String>) -> OrderResult<()> {
        let field: OrderField = field.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set_field(OrderField::Name, value);
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.set_field(OrderField::Phone, value);
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.set_field(OrderField::Address, value);
    }

    // === Validation ===

    /// Flag `field` when `value` is empty or whitespace-only
    ///
    /// Returns true when the field is invalid.
    pub fn validate_required(&mut self, field: OrderField, value: &str) -> bool {
        self.errors.check_required(field, value)
    }

    /// Flag the phone when it is empty or has characters outside digits,
    /// parentheses, dashes and spaces
    ///
    /// Returns true when the phone is invalid.
    pub fn validate_phone(&mut self, value: &str) -> bool {
        self.errors.check_phone(value)
    }

    // === Submission ===

    /// Validate every field and, when all pass, create the order
    ///
    /// On success the navigator is sent to the confirmation path, which is
    /// also returned. Invalid fields block the request entirely.
    ///
    /// Dropping the returned future before it completes leaves the workflow
    /// in [`WorkflowState::SubmissionFailed`], ready for another attempt.
    pub async fn submit(&mut self) -> OrderResult<OrderConfirmationTarget> {
        if self.state.is_terminal() {
            return Err(SubmissionError::AlreadySubmitted.into());
        }

        // Full pass first, then swap in, so no partially updated flags are observable
        self.errors = FieldErrorState::evaluate(&self.draft);
        self.submission_error = None;

        if let Some(failure) = self.errors.failure() {
            tracing::debug!(fields = ?failure.fields, "order blocked by validation");
            self.state = WorkflowState::EditingWithErrors;
            return Err(ValidationError::Incomplete(failure).into());
        }

        let payload = OrderPayload::new(&self.draft, &self.items);
        let in_flight = InFlight::start(&mut self.state);

        match create_order(self.client.as_ref(), &self.confirmation_path, &payload).await {
            Ok(target) => {
                tracing::info!(path = %target, "order created");
                in_flight.finish(WorkflowState::Submitted);
                self.navigator.navigate(target.as_str());
                Ok(target)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    retryable = err.is_retryable(),
                    "order submission failed"
                );
                in_flight.finish(WorkflowState::SubmissionFailed);
                let message = if err.is_retryable() {
                    SUBMISSION_FAILED_MESSAGE
                } else {
                    SUBMISSION_UNAVAILABLE_MESSAGE
                };
                self.submission_error = Some(message.to_string());
                Err(err)
            }
        }
    }

    // === Modal ===

    /// Close the modal on the close button, a backdrop click or Escape
    ///
    /// Returns true when the caller's close callback ran.
    pub fn dismiss(&self, event: &ModalEvent) -> bool {
        self.modal.handle(event)
    }

    // === Rendering ===

    pub fn draft(&self) -> &DraftOrderInput {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrorState {
        &self.errors
    }

    pub fn items(&self) -> &OrderLineItems {
        &self.items
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// True when the latest validation flagged at least one field
    pub fn has_error(&self) -> bool {
        self.errors.has_error()
    }

    /// Text for the error banner, if any
    ///
    /// The aggregated validation message takes precedence over the
    /// submission failure message.
    pub fn error_message(&self) -> Option<String> {
        self.errors
            .message()
            .or_else(|| self.submission_error.clone())
    }
}

/// Holds the workflow in `Submitting` while the request runs
///
/// Dropped without [`finish`](Self::finish), e.g. when the submit future is
/// cancelled, it falls back to `SubmissionFailed`.
struct InFlight<'a> {
    state: &'a mut WorkflowState,
    done: bool,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a mut WorkflowState) -> Self {
        *state = WorkflowState::Submitting;
        Self { state, done: false }
    }

    fn finish(mut self, outcome: WorkflowState) {
        *self.state = outcome;
        self.done = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            tracing::debug!("order submission abandoned before completion");
            *self.state = WorkflowState::SubmissionFailed;
        }
    }
}

async fn create_order(
    client: &dyn OrderClient,
    confirmation_path: &str,
    payload: &OrderPayload,
) -> OrderResult<OrderConfirmationTarget> {
    let response = client.create_order(payload).await?;

    if !response.is_created() {
        return Err(SubmissionError::Rejected {
            status: response.status,
        }
        .into());
    }

    let order: SubmittedOrder = serde_json::from_str(&response.body)?;
    Ok(OrderConfirmationTarget::new(confirmation_path, &order.id))
}
