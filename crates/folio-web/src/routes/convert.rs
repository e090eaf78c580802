use axum::extract::{Multipart, State};
use axum::http::HeaderValue;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use folio_core::ingest::read_rows_from_slice;
use folio_core::naming::pdf_file_name;

use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the CSV.
pub const FILE_FIELD: &str = "file";

struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

/// Convert an uploaded review CSV into a PDF download.
pub async fn convert(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let upload = read_upload(&mut multipart).await?;
    let download_name = pdf_file_name(&upload.file_name);
    let disposition = HeaderValue::from_str(&content_disposition(&download_name))
        .map_err(|e| {
            ApiError::internal("the download name is invalid", format!("invalid download name: {e}"))
        })?;

    let logo_path = state.logo_path.clone();
    let upload_name = upload.file_name;
    let pdf = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, ApiError> {
        let rows = read_rows_from_slice(&upload.bytes)?;
        Ok(folio_export::render(&rows, &logo_path)?)
    })
    .await
    .map_err(|e| {
        ApiError::internal("the report could not be generated", format!("conversion task failed: {e}"))
    })??;

    tracing::info!(
        upload = %upload_name,
        download = %download_name,
        bytes = pdf.len(),
        "converted upload"
    );

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if file_name.is_empty() && bytes.is_empty() {
            break;
        }

        return Ok(Upload {
            file_name: if file_name.is_empty() {
                "report.csv".to_string()
            } else {
                file_name
            },
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::BadRequest("no CSV file was uploaded".to_string()))
}

/// `attachment` disposition with an ASCII fallback name and, when needed,
/// the UTF-8 name in RFC 5987 form.
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|ch| match ch {
            '"' | '\\' => '_',
            ' '..='~' => ch,
            _ => '_',
        })
        .collect();

    if file_name.is_ascii() && fallback == file_name {
        return format!("attachment; filename=\"{fallback}\"");
    }

    let mut encoded = String::new();
    for byte in file_name.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!' | b'#' | b'$' | b'&' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }

    format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
}
