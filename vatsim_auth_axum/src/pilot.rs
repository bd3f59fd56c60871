use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

use vatsim_auth::{AtcStatistics, PilotRatingStatistics, VatsimPilotStatistics,
    fetch_pilot_statistics_core};

use super::error::IntoResponseError;
use super::session::AuthUser;

pub fn pilot_router() -> Router {
    Router::new()
        .route("/statistics", get(my_statistics))
        .route("/{cid}/statistics", get(pilot_statistics))
}

#[derive(Debug, Serialize)]
struct StatisticsResponse {
    success: bool,
    data: StatisticsData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatisticsData {
    cid: String,
    atc: Option<AtcStatistics>,
    pilot: Option<PilotRatingStatistics>,
    reg_date: String,
    last_rating_change: String,
    rating: i64,
    pilot_rating: i64,
    region: String,
    division: String,
}

impl From<VatsimPilotStatistics> for StatisticsResponse {
    fn from(stats: VatsimPilotStatistics) -> Self {
        Self {
            success: true,
            data: StatisticsData {
                cid: stats.id,
                atc: stats.atc,
                pilot: stats.pilot,
                reg_date: stats.reg_date,
                last_rating_change: stats.lastratingchange,
                rating: stats.rating,
                pilot_rating: stats.pilotrating,
                region: stats.region,
                division: stats.division,
            },
        }
    }
}

/// Network statistics for the authenticated pilot.
async fn my_statistics(
    auth_user: AuthUser,
) -> Result<Json<StatisticsResponse>, (StatusCode, String)> {
    let stats = fetch_pilot_statistics_core(&auth_user.cid)
        .await
        .into_response_error()?;
    Ok(Json(stats.into()))
}

/// Network statistics for any pilot by CID. Unknown CIDs answer 404, other
/// provider failures a gateway error.
async fn pilot_statistics(
    Path(cid): Path<String>,
) -> Result<Json<StatisticsResponse>, (StatusCode, String)> {
    let stats = fetch_pilot_statistics_core(&cid).await.into_response_error()?;
    Ok(Json(stats.into()))
}
