use super::*;
use crate::config::Config;
use crate::game::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        match config.seed {
            Some(seed) => {
                log::info!("opponent seeded with {}", seed);
                Self::serve(Dealer::new(Seeded::from(seed)), config).await
            }
            None => {
                log::info!("opponent draws from entropy");
                Self::serve(Dealer::new(Uniform), config).await
            }
        }
    }

    async fn serve<D>(dealer: Dealer<D>, config: Config) -> Result<(), std::io::Error>
    where
        D: Draw + 'static,
    {
        let dealer = web::Data::new(dealer);
        log::info!("starting arena server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(dealer.clone())
                .configure(routes::<D>)
        })
        .workers(config.workers.get())
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}

/// Mounts every route. Expects a `web::Data<Dealer<D>>` in app data.
#[rustfmt::skip]
pub fn routes<D>(cfg: &mut web::ServiceConfig)
where
    D: Draw + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(rejected))
        .route("/",         web::get().to(home))
        .route("/game/rps", web::get().to(game))
        .route("/play",     web::post().to(play::<D>))
        .route("/health",   web::get().to(health));
}
