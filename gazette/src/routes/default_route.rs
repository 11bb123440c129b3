use actix_web::{web, HttpResponse};

use crate::services::{ArticleSink, Harvester, Launcher};

/// Runs the whole harvest synchronously. Always acknowledges with `OK`;
/// failures only show up in the logs.
pub async fn default<L, S>(harvester: web::Data<Harvester<L, S>>) -> HttpResponse
where
    L: Launcher + 'static,
    S: ArticleSink + 'static,
{
    match harvester.harvest().await {
        Ok(report) => log::info!(
            "Run {} finished: {} categories, {} articles, {} stored",
            report.run_id,
            report.categories,
            report.articles,
            report.stored
        ),
        Err(e) => log::error!("Run failed: {}", e),
    }

    HttpResponse::Ok().body("OK")
}
