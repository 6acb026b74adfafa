use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header::ContentType;

const HOME: &str = include_str!("../../static/home.html");
const GAME: &str = include_str!("../../static/game.html");

pub async fn home() -> impl Responder {
    HttpResponse::Ok().content_type(ContentType::html()).body(HOME)
}

pub async fn game() -> impl Responder {
    HttpResponse::Ok().content_type(ContentType::html()).body(GAME)
}
