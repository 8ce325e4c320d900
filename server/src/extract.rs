//! Request extractors whose rejections render as `ApiError`
//!
//! Malformed bodies and unparseable path ids answer 400 with the same
//! `{"error": ..}` body as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathId<T>(pub T);
