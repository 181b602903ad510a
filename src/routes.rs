use actix_web::{web, HttpResponse, Responder};
use log::debug;

use crate::cache::ReportCache;
use crate::domain::check::check as run_check;
use crate::error::KktError;
use crate::models::CheckRequest;

// ---------- Route handlers ----------

/// POST /check
pub async fn check(
    req: web::Json<CheckRequest>,
    cache: web::Data<ReportCache>,
) -> Result<HttpResponse, KktError> {
    let req = req.into_inner();
    let key = ReportCache::key(&req);

    if let Some(hit) = key.as_deref().and_then(|key| cache.get(key)) {
        debug!("report cache hit");
        return Ok(HttpResponse::Ok().json(hit));
    }

    // GLPK state is per thread: build, solve and check on one blocking worker
    let response = web::block(move || run_check(&req))
        .await
        .map_err(|err| KktError::Blocking(err.to_string()))??;

    if let Some(key) = key {
        cache.put(key, response.clone());
    }
    Ok(HttpResponse::Ok().json(response))
}

/// GET /health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// JSON extractor config answering malformed bodies with 400 `{"error": ...}`
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _| {
            let err_string = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "error": err_string })),
            )
            .into()
        })
}

/// Register the service routes; the app must provide `web::Data<ReportCache>`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/check", web::post().to(check))
        .route("/health", web::get().to(health_check));
}
