use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use web_sys::{File, FormData, RequestCache};

use crate::{join_url, js_err};

// structs and types

pub type PhotoUuid = i64;

// the core photo record
//
// image_path is whatever the server stored for the file; it only becomes a fetchable
// location once it is joined with the base url (see display_url)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoUuid,
    pub description: String,
    pub image_path: String,
}

pub fn display_url(base: &str, image_path: &str) -> String {
    join_url(base, &format!("uploads/{}", image_path.trim_start_matches('/')))
}

// failure payloads
//
// the server reports errors as {"error": "..."}, but some middleware layers use "message"
// instead, so we accept either one
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorResp {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorResp>(body)
        .ok()
        .and_then(|resp| resp.error.or(resp.message))
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

// an unreadable error body still yields the per-operation message
pub fn failure_message<E: std::fmt::Display>(body: Result<String, E>, fallback: &str) -> String {
    match body {
        Ok(body) => error_message(&body, fallback),
        Err(err) => {
            debug!("could not read error body: {err}");
            fallback.to_string()
        }
    }
}

// messages

// fetch the full, server-ordered list of photos
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPhotosResp {
    pub photos: Vec<Photo>,
}

#[instrument(level = "debug")]
pub async fn list_photos(base: &str) -> anyhow::Result<ListPhotosResp> {
    let resp = Request::get(&join_url(base, "/api/photos"))
        .cache(RequestCache::NoStore)
        .send()
        .await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(failure_message(
            resp.text().await,
            "failed to list photos",
        )))
    }
}

// upload a new photo as a multipart form
//
// the server may or may not echo the created record back, so the photo is optional
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadPhotoResp {
    #[serde(default)]
    pub photo: Option<Photo>,
}

#[instrument(level = "debug", skip(file))]
pub async fn upload_photo(
    base: &str,
    description: &str,
    file: &File,
) -> anyhow::Result<UploadPhotoResp> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_str("description", description)
        .map_err(js_err)?;
    form.append_with_blob("image", file).map_err(js_err)?;

    let resp = Request::post(&join_url(base, "/api/upload"))
        .body(form)?
        .send()
        .await?;

    if resp.ok() {
        debug!("upload accepted");
        let body = resp.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    } else {
        Err(anyhow::Error::msg(failure_message(
            resp.text().await,
            "upload failed",
        )))
    }
}

// delete a photo and its file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePhotoResp {}

// the photo was already gone when we asked; callers can downcast for this
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PhotoNotFound(pub String);

#[instrument(level = "debug")]
pub async fn delete_photo(base: &str, photo_uuid: PhotoUuid) -> anyhow::Result<DeletePhotoResp> {
    let resp = Request::delete(&join_url(base, &format!("/api/photos/{photo_uuid}")))
        .send()
        .await?;

    if resp.ok() {
        Ok(DeletePhotoResp {})
    } else if resp.status() == 404 {
        Err(PhotoNotFound(failure_message(resp.text().await, "photo not found")).into())
    } else {
        Err(anyhow::Error::msg(failure_message(
            resp.text().await,
            "delete failed",
        )))
    }
}
