//! Document endpoints

use crate::core::models::DocumentResponse;
use crate::server::middleware::current_user;
use crate::server::state::AppState;
use crate::utils::data::DataValidator;
use crate::utils::error::VaultError;
use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::http::header::{
    CONTENT_TYPE, ContentDisposition, DispositionType, HeaderValue,
};
use actix_web::{HttpRequest, HttpResponse, web};
use futures::StreamExt;
use tracing::info;

/// Configure document routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/documents")
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/my_documents", web::get().to(my_documents))
            .route("/download/{filename}", web::get().to(download)),
    );
}

/// Unfiltered listing of all documents, system-wide
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, VaultError> {
    let documents = state.documents.list().await?;

    let response: Vec<DocumentResponse> =
        documents.into_iter().map(DocumentResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Documents owned by the authenticated caller
pub async fn my_documents(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, VaultError> {
    let user = current_user(&req)?;
    let documents = state.documents.list_for_owner(user.id).await?;

    let response: Vec<DocumentResponse> =
        documents.into_iter().map(DocumentResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// PDF upload endpoint
///
/// Accepts multipart/form-data with a `document` file part and a
/// `digitalSignature` text part. A non-PDF part fails with 400 before
/// anything is written.
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> Result<HttpResponse, VaultError> {
    let user = current_user(&req)?;
    info!("Document upload for user {}", user.id);

    let mut file_data: Option<Vec<u8>> = None;
    let mut originalname = String::from("document.pdf");
    let mut digital_signature: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| VaultError::bad_request(format!("Invalid multipart data: {}", e)))?;

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match field_name.as_str() {
            "document" => {
                let is_pdf = field
                    .content_type()
                    .is_some_and(|mime| mime.essence_str() == "application/pdf");
                if !is_pdf {
                    return Err(VaultError::bad_request(
                        "Validation failed (expected type is application/pdf)",
                    ));
                }

                if let Some(cd) = field.content_disposition() {
                    if let Some(filename) = cd.get_filename() {
                        originalname = filename.to_string();
                    }
                }

                file_data = Some(read_field(&mut field).await?);
            }
            "digitalSignature" => {
                let bytes = read_field(&mut field).await?;
                let value = String::from_utf8(bytes).map_err(|_| {
                    VaultError::bad_request("digitalSignature must be valid UTF-8")
                })?;
                digital_signature = Some(value);
            }
            _ => {
                // Unknown parts are drained and discarded.
                let _ = read_field(&mut field).await?;
            }
        }
    }

    let content =
        file_data.ok_or_else(|| VaultError::bad_request("document file is required"))?;
    let signature = digital_signature
        .ok_or_else(|| VaultError::bad_request("digitalSignature should not be empty"))?;
    DataValidator::validate_required(&signature, "digitalSignature")?;

    let document = state
        .documents
        .create_upload(user.id, &originalname, &signature, &content)
        .await?;

    Ok(HttpResponse::Created().json(DocumentResponse::from(document)))
}

/// Streamed PDF download
///
/// The registry lookup runs first, so an unknown filename is a 404 before
/// the blob store is touched.
pub async fn download(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, VaultError> {
    let filename = path.into_inner();
    let (_document, blob_path) = state.documents.download(&filename).await?;

    let file = NamedFile::open_async(&blob_path)
        .await
        .map_err(|e| VaultError::FileStorage(format!("Failed to open stored blob: {}", e)))?;

    let mut response = file
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![],
        })
        .into_response(&req);
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/pdf"));

    Ok(response)
}

/// Drain one multipart field into memory
async fn read_field(field: &mut actix_multipart::Field) -> Result<Vec<u8>, VaultError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes =
            chunk.map_err(|e| VaultError::bad_request(format!("Error reading upload: {}", e)))?;
        data.extend_from_slice(&bytes);
    }
    Ok(data)
}
