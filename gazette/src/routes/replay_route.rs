use actix_web::{web, HttpResponse};

use crate::{
    error::PipelineError,
    services::{ArticleSink, Harvester, Launcher},
};

pub async fn replay_checkpoint<L, S>(harvester: web::Data<Harvester<L, S>>) -> HttpResponse
where
    L: Launcher + 'static,
    S: ArticleSink + 'static,
{
    match harvester.replay().await {
        Ok(Some(stored)) => HttpResponse::Ok().body(format!("Stored {} rows", stored)),
        Ok(None) => HttpResponse::NotFound().body("No checkpoint configured"),
        Err(PipelineError::Checkpoint(e)) => {
            log::error!("Failed to read checkpoint: {}", e);
            HttpResponse::NotFound().body("No readable checkpoint")
        }
        Err(e) => {
            log::error!("Failed to replay checkpoint: {}", e);
            HttpResponse::InternalServerError().body("Replay failed")
        }
    }
}
