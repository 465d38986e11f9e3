use std::path::Path;

use axum::{
    extract::rejection::JsonRejection,
    routing::post,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, warn};

use crate::error::CalcResult;
use crate::interest::{
    calculate_compound_amount, find_interest_rate, validate_amount_inputs, validate_rate_inputs,
    AmountResult, RateResult,
};
use crate::models::{AmountRequest, RateRequest, TrigonometryRequest};
use crate::trigonometry::{calculate_sec_cot, find_pythagorean_triplet, hypotenuse, TrigResult};

/// JSON calculator endpoints, no static pages.
pub fn api_router() -> Router {
    Router::new()
        .route("/trigonometry", post(trigonometry_handler))
        .route("/interest/rate", post(interest_rate_handler))
        .route("/interest/amount", post(interest_amount_handler))
}

/// Full app: API routes, the form pages under `static_dir`, CORS and request tracing.
pub fn app(static_dir: &Path) -> Router {
    api_router()
        .route_service("/template1", ServeFile::new(static_dir.join("template1.html")))
        .route_service("/template2", ServeFile::new(static_dir.join("template2.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn logged<T>(endpoint: &str, result: CalcResult<T>) -> CalcResult<Json<T>> {
    result.map(Json).map_err(|e| {
        warn!("{} rejected: {}", endpoint, e);
        e
    })
}

fn solve_trigonometry(payload: Result<Json<TrigonometryRequest>, JsonRejection>) -> CalcResult<TrigResult> {
    let Json(req) = payload?;
    let perpendicular = req.perpendicular()?;
    let base = req.base()?;

    // any right triangle is accepted, integer triplets are just noted
    match find_pythagorean_triplet(perpendicular, base) {
        Some(t) => debug!("{}-{}-{} is a pythagorean triplet", t.a, t.b, t.c),
        None => debug!("{}-{} has an irrational hypotenuse", perpendicular, base),
    }

    calculate_sec_cot(perpendicular, base, hypotenuse(perpendicular, base))
}

fn solve_interest_rate(payload: Result<Json<RateRequest>, JsonRejection>) -> CalcResult<RateResult> {
    let Json(req) = payload?;
    let principal = req.principal()?;
    let amount = req.amount()?;
    let time = req.time()?;

    validate_rate_inputs(principal, amount, time)?;
    find_interest_rate(principal, amount, time)
}

fn solve_interest_amount(payload: Result<Json<AmountRequest>, JsonRejection>) -> CalcResult<AmountResult> {
    let Json(req) = payload?;
    let principal = req.principal()?;
    let rate = req.rate()?;
    let time = req.time()?;

    validate_amount_inputs(principal, rate, time)?;
    calculate_compound_amount(principal, rate, time)
}

/// POST /trigonometry
/// Body: { perpendicular: 7, base: 24 }
pub async fn trigonometry_handler(
    payload: Result<Json<TrigonometryRequest>, JsonRejection>,
) -> CalcResult<Json<TrigResult>> {
    logged("/trigonometry", solve_trigonometry(payload))
}

/// POST /interest/rate
/// Body: { principal: 12000, amount: 20736, time: 3 }
pub async fn interest_rate_handler(
    payload: Result<Json<RateRequest>, JsonRejection>,
) -> CalcResult<Json<RateResult>> {
    logged("/interest/rate", solve_interest_rate(payload))
}

/// POST /interest/amount
/// Body: { principal: 12000, rate: 20, time: 2 }
pub async fn interest_amount_handler(
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> CalcResult<Json<AmountResult>> {
    logged("/interest/amount", solve_interest_amount(payload))
}
