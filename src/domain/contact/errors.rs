use crate::domain::contact::models::receipt::DeliveryFailure;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    IncompleteSubmission,
    #[error("Name and email are required.")]
    IncompleteAcknowledgement,
}

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Delivery(#[from] DeliveryFailure),
}
