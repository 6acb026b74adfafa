use crate::dto::*;
use crate::game::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::error::JsonPayloadError;
use actix_web::web;

pub async fn play<D: Draw + 'static>(
    dealer: web::Data<Dealer<D>>,
    req: web::Json<PlayRequest>,
) -> impl Responder {
    match dealer.evaluate(req.choice.as_deref()) {
        Err(e) => {
            log::debug!("{}: {:?}", e, req.choice);
            HttpResponse::BadRequest().json(ErrorResponse::invalid_choice())
        }
        Ok(outcome) => HttpResponse::Ok().json(PlayResponse::from(outcome)),
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Bodies that are not a JSON object with a string `choice` get the same
/// answer as an unknown choice.
pub fn rejected(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    log::debug!("unreadable play request: {}", err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::invalid_choice());
    InternalError::from_response(err, response).into()
}
