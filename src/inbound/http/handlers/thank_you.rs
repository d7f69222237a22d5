use crate::{
    domain::contact::{models::acknowledgement::AcknowledgementPayload, ports::ContactService},
    inbound::http::{errors::AppError, responses::delivered, SharedContactState},
};
use actix_web::{web, HttpResponse};

#[tracing::instrument(name = "Thanking a contact", skip(payload, state))]
pub async fn thank_you<CS: ContactService>(
    payload: web::Json<AcknowledgementPayload>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let receipt = state
        .contact_service()
        .acknowledge(payload.into_inner())
        .await?;

    Ok(delivered(&receipt))
}
