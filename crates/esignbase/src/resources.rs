//! Template, document and credit operations
//!
//! Thin mappings onto `execute`: each operation has a fixed method and path,
//! turns a non-success status into `Error::Api` with the response body, and
//! decodes the JSON payload.

use esignbase_auth::OAuth2Client;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::ESignBaseClient;
use crate::download::DocumentDownload;
use crate::error::{Error, Result};
use crate::executor::RequestOptions;
use crate::metrics;
use crate::models::CreateDocumentRequest;

impl ESignBaseClient {
    /// `GET api/templates`
    pub async fn list_templates(&self, credential: &mut OAuth2Client) -> Result<Value> {
        self.request_json(
            credential,
            "list_templates",
            Method::GET,
            "api/templates",
            RequestOptions::new(),
        )
        .await
    }

    /// `GET api/template/{id}`
    pub async fn get_template(
        &self,
        credential: &mut OAuth2Client,
        template_id: &str,
    ) -> Result<Value> {
        self.request_json(
            credential,
            "get_template",
            Method::GET,
            &format!("api/template/{template_id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// `GET api/documents?limit=..&offset=..`
    pub async fn list_documents(
        &self,
        credential: &mut OAuth2Client,
        limit: u32,
        offset: u32,
    ) -> Result<Value> {
        let options = RequestOptions::new()
            .query("limit", limit)
            .query("offset", offset);
        self.request_json(credential, "list_documents", Method::GET, "api/documents", options)
            .await
    }

    /// `GET api/document/{id}`
    pub async fn get_document(
        &self,
        credential: &mut OAuth2Client,
        document_id: &str,
    ) -> Result<Value> {
        self.request_json(
            credential,
            "get_document",
            Method::GET,
            &format!("api/document/{document_id}"),
            RequestOptions::new(),
        )
        .await
    }

    /// `POST api/document`
    pub async fn create_document(
        &self,
        credential: &mut OAuth2Client,
        request: &CreateDocumentRequest,
    ) -> Result<Value> {
        let body = serde_json::to_value(request)
            .map_err(|e| Error::Encode(format!("serializing document request: {e}")))?;
        self.request_json(
            credential,
            "create_document",
            Method::POST,
            "api/document",
            RequestOptions::new().json(body),
        )
        .await
    }

    /// `GET api/document/download/{id}`, streamed.
    ///
    /// The status is checked before the download is handed out, so a failed
    /// request never yields a chunk.
    #[instrument(skip_all, fields(document_id = %document_id))]
    pub async fn download_document(
        &self,
        credential: &mut OAuth2Client,
        document_id: &str,
    ) -> Result<DocumentDownload> {
        let response = self
            .execute(
                credential,
                Method::GET,
                &format!("api/document/download/{document_id}"),
                RequestOptions::new().streaming(),
            )
            .await?;
        let response = check_status("download_document", response).await?;
        debug!(content_length = response.content_length(), "download started");
        Ok(DocumentDownload::new(document_id, response))
    }

    /// `DELETE api/document/{id}`
    pub async fn delete_document(
        &self,
        credential: &mut OAuth2Client,
        document_id: &str,
    ) -> Result<()> {
        let response = self
            .execute(
                credential,
                Method::DELETE,
                &format!("api/document/{document_id}"),
                RequestOptions::new(),
            )
            .await?;
        check_status("delete_document", response).await?;
        Ok(())
    }

    /// `GET api/credits`
    pub async fn get_credits(&self, credential: &mut OAuth2Client) -> Result<Value> {
        self.request_json(
            credential,
            "get_credits",
            Method::GET,
            "api/credits",
            RequestOptions::new(),
        )
        .await
    }

    async fn request_json(
        &self,
        credential: &mut OAuth2Client,
        operation: &'static str,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        let response = self.execute(credential, method, path, options).await?;
        let response = check_status(operation, response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| Error::Decode(format!("{operation}: {e}")))
    }
}

/// Pass a success response through; turn anything else into `Error::Api`.
async fn check_status(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    metrics::record_response(operation, status.as_u16());
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("<no body>"));
    Err(Error::Api {
        operation,
        status: status.as_u16(),
        body,
    })
}
