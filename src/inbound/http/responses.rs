use crate::domain::contact::models::receipt::DeliveryReceipt;
use actix_web::HttpResponse;

#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

#[derive(serde::Serialize)]
pub struct SuccessResponse<'a> {
    status: Status,
    info: &'a DeliveryReceipt,
}

#[derive(serde::Serialize)]
pub struct FailureResponse {
    status: Status,
    error: String,
}

impl FailureResponse {
    pub fn new(error: String) -> Self {
        Self {
            status: Status::Fail,
            error,
        }
    }
}

pub fn delivered(receipt: &DeliveryReceipt) -> HttpResponse {
    HttpResponse::Ok().json(SuccessResponse {
        status: Status::Success,
        info: receipt,
    })
}
