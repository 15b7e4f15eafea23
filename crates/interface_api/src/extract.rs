//! Extractors that reject malformed input with the API error body

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// JSON body; syntax and shape errors become `400 bad_request`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; unparsable identifiers become `400 bad_request`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Query string; unparsable values become `400 bad_request`
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
