use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::debug;
use wren_consensus::primitives::{CommitteeIndex, Slot};

use crate::{error::ApiError, server::RpcState};

pub const SLOT: &str = "slot";
pub const COMMITTEE_INDEX: &str = "committee_index";

pub const GET_ATTESTATION_ROUTE: &str = "/validator/attestation";

/// `GET /validator/attestation` — returns an unsigned attestation for the
/// block at the given non-finalized slot.
///
/// The attestation carries a blank signature the caller is expected to
/// replace. This endpoint is not protected against slashing; signing the
/// returned attestation carelessly can result in a slashable offence.
/// Deprecated in favour of the `/eth/v1/validator/attestation_data` route.
pub async fn get_attestation(
    State(state): State<RpcState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let (slot, committee_index) = parse_attestation_params(&query)?;
    debug!(slot, committee_index, "creating unsigned attestation");

    match state
        .provider
        .create_unsigned_attestation(slot, committee_index)
        .await?
    {
        Some(attestation) => {
            // A serialization failure is an unexpected failure, not a 4xx.
            let body =
                serde_json::to_string(&attestation).map_err(|err| ApiError::Internal(err.into()))?;
            Ok((
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response())
        }
        None => Err(ApiError::NotFound),
    }
}

/// Validates the raw query pairs into a `(slot, committee index)` pair.
///
/// The mapping is multi-valued; when a name is repeated the first value wins.
fn parse_attestation_params(
    query: &[(String, String)],
) -> Result<(Slot, CommitteeIndex), ApiError> {
    let mut parameters: HashMap<&str, Vec<&str>> = HashMap::new();
    for (name, value) in query {
        parameters
            .entry(name.as_str())
            .or_default()
            .push(value.as_str());
    }

    if parameters.len() < 2 {
        return Err(ApiError::BadRequest(format!(
            "Please specify both {SLOT} and {COMMITTEE_INDEX}"
        )));
    }

    let slot = first_value(&parameters, SLOT)?
        .parse::<Slot>()
        .map_err(|_| ApiError::BadRequest(format!("'{SLOT}' must be a valid uint64 value")))?;

    let committee_index = first_value(&parameters, COMMITTEE_INDEX)?
        .parse::<i64>()
        .map_err(|_| {
            ApiError::BadRequest(format!("'{COMMITTEE_INDEX}' must be a valid int value"))
        })?;
    if committee_index < 0 {
        return Err(ApiError::BadRequest(format!(
            "'{COMMITTEE_INDEX}' needs to be greater than or equal to 0."
        )));
    }

    Ok((slot, committee_index as CommitteeIndex))
}

fn first_value<'a>(
    parameters: &HashMap<&str, Vec<&'a str>>,
    name: &str,
) -> Result<&'a str, ApiError> {
    match parameters.get(name).and_then(|values| values.first()) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(format!(
            "'{name}' cannot be null or empty."
        ))),
    }
}
