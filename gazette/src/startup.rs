use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use crate::{
    configuration::Settings,
    dal::article_db::PgArticleSink,
    routes::{default_route, replay_route},
    services::{ChromeLauncher, Harvester},
};

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let harvester = web::Data::new(Harvester::new(
        ChromeLauncher,
        PgArticleSink::new(db_pool),
        settings,
    ));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .route(
                "/",
                web::get().to(default_route::default::<ChromeLauncher, PgArticleSink>),
            )
            .route(
                "/replay",
                web::get().to(replay_route::replay_checkpoint::<ChromeLauncher, PgArticleSink>),
            )
            .app_data(harvester.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
