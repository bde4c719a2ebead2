//! Extractors whose rejections render as [`AppError`], so a malformed body
//! or id yields the same 500 `{error}` shape as a store failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::error::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
