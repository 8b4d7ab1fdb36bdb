//! Alert Routes

use axum::{extract::Query, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use alert_gen::{batch_size, generate_alerts, rng_from_entropy, rng_from_offset, AlertCollection};

use crate::error::ApiError;

/// Query parameters for the alerts endpoint
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    /// Continuation token from a previous response. When present and
    /// valid, generation is reseeded from it and the batch is
    /// reproducible; when absent, output varies per call.
    pub offset: Option<String>,
}

/// Get a batch of mock alerts
pub async fn get_alerts(
    Query(params): Query<AlertQuery>,
) -> Result<Json<AlertCollection>, ApiError> {
    let mut rng = match params.offset.as_deref() {
        Some(raw) => {
            let offset = Uuid::parse_str(raw).map_err(|_| ApiError::InvalidOffset)?;
            rng_from_offset(&offset)
        }
        None => rng_from_entropy(),
    };

    let count = batch_size(&mut rng);
    let alerts = generate_alerts(&mut rng, count);

    // The next token is independent of the input seed; it is an opaque
    // handle for a future batch, not a chained cursor.
    let next_offset = Uuid::new_v4();

    info!(count, seeded = params.offset.is_some(), "generated alert batch");

    Ok(Json(AlertCollection::new(alerts, next_offset.to_string())))
}
