use crate::{
    domain::contact::{models::submission::SubmissionPayload, ports::ContactService},
    inbound::http::{errors::AppError, responses::delivered, SharedContactState},
};
use actix_web::{web, HttpResponse};

#[tracing::instrument(name = "Relaying a contact message", skip(payload, state))]
pub async fn send<CS: ContactService>(
    payload: web::Json<SubmissionPayload>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let receipt = state
        .contact_service()
        .submit(payload.into_inner())
        .await?;

    Ok(delivered(&receipt))
}
