//! # Surah Handlers
//!
//! Read-only access to the surah reverse index.

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// A single surah as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahResponse {
    pub number: u32,
    pub name: String,
}

/// List every surah, ascending by number
///
/// ## Route
/// GET /api/surahs
pub async fn list_surahs(State(state): State<AppState>) -> Json<Vec<SurahResponse>> {
    let surahs = state
        .surahs
        .iter()
        .map(|(number, name)| SurahResponse {
            number,
            name: name.to_string(),
        })
        .collect();

    Json(surahs)
}

/// Look up a surah's name by number
///
/// ## Route
/// GET /api/surahs/{number}
///
/// ## Response
/// ```json
/// { "number": 2, "name": "Al-Baqarah" }
/// ```
///
/// Any integer is accepted: numbers no surah has (including ones too large
/// for `i64`) are 404. Segments that aren't integers at all are 400.
pub async fn get_surah(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> AppResult<Json<SurahResponse>> {
    let number = parse_surah_number(&segment)?
        .ok_or_else(|| AppError::NotFound(format!("surah {segment}")))?;

    let name = state
        .surahs
        .lookup(number)
        .ok_or_else(|| AppError::NotFound(format!("surah {number}")))?;

    // lookup only succeeds for numbers that fit in u32
    let number = u32::try_from(number).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(SurahResponse {
        number,
        name: name.to_string(),
    }))
}

/// Parse a path segment as an integer
///
/// `Ok(None)` means the segment is an integer outside the `i64` range, which
/// can't name a surah.
fn parse_surah_number(segment: &str) -> AppResult<Option<i64>> {
    if let Ok(number) = segment.parse::<i64>() {
        return Ok(Some(number));
    }

    let digits = segment
        .strip_prefix('-')
        .or_else(|| segment.strip_prefix('+'))
        .unwrap_or(segment);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    Err(AppError::BadRequest(format!(
        "surah number must be an integer, got '{segment}'"
    )))
}
