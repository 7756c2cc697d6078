//! REST client for the RAG backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, every request sent
//! with `credentials: include` so the backend's session cookie travels along.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the decoded error
//! envelope when the body has one. Nothing here retries or times out beyond
//! the browser's own defaults.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Document, Identity, LoginForm, QueryAnswer, SignupRequest, SignupResponse};
#[cfg(feature = "hydrate")]
use super::types::{DocumentSelection, ErrorBody, QueryRequest};
use crate::config;

/// Backend-relative endpoint paths.
pub mod paths {
    pub const VALIDATE: &str = "auth/validate";
    pub const LOGIN: &str = "auth/login";
    pub const SIGNUP: &str = "auth/signup";
    pub const LOGOUT: &str = "auth/logout";
    pub const UPLOAD: &str = "documents/upload";
    pub const LIST: &str = "documents/list";
    pub const SELECT: &str = "documents/select";
    pub const QUERY: &str = "rag/query";
}

/// Session endpoints the session store depends on.
///
/// Split out from [`HttpApi`] so the store can be driven by a scripted
/// backend in tests.
#[async_trait(?Send)]
pub trait SessionApi {
    /// Confirm the current cookie still maps to an identity.
    async fn validate(&self) -> Result<Identity, ApiError>;
    /// Invalidate the server-side session.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend-relative path.
    pub fn url(&self, path: &str) -> String {
        config::endpoint(&self.base_url, path)
    }

    /// Authenticate with `POST auth/login`; the backend sets the session cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the credentials are rejected.
    pub async fn login(&self, form: &LoginForm) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let params = web_sys::UrlSearchParams::new().map_err(js_error)?;
            for (key, value) in form.fields() {
                params.append(key, value);
            }
            let request = self
                .builder(Method::Post, paths::LOGIN)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(params);
            send(request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            Err(ApiError::Unavailable)
        }
    }

    /// Register a new account with `POST auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the account.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.builder(Method::Post, paths::SIGNUP).json(request)).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Upload one file as multipart field `file` to `POST documents/upload`.
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be built, the request fails, or the
    /// backend rejects the file.
    #[cfg(feature = "hydrate")]
    pub async fn upload_document(&self, file: &web_sys::File) -> Result<serde_json::Value, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(js_error)?;
        let resp = send(self.builder(Method::Post, paths::UPLOAD).body(form)).await?;
        decode(resp).await
    }

    /// Fetch the current user's documents from `GET documents/list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.builder(Method::Get, paths::LIST).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Toggle retrieval participation for `document_ids` via `POST documents/select`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects the ids.
    pub async fn select_documents(&self, document_ids: Vec<String>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = DocumentSelection::new(document_ids);
            send(self.builder(Method::Post, paths::SELECT).json(&body)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = document_ids;
            Err(ApiError::Unavailable)
        }
    }

    /// Ask a question with `POST rag/query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no answer could be generated.
    pub async fn ask(&self, question: &str) -> Result<QueryAnswer, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = QueryRequest { question: question.to_owned() };
            let resp = send(self.builder(Method::Post, paths::QUERY).json(&body)).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = question;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    fn builder(&self, method: Method, path: &str) -> gloo_net::http::RequestBuilder {
        let url = self.url(path);
        let builder = match method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
        };
        builder.credentials(web_sys::RequestCredentials::Include)
    }
}

#[async_trait(?Send)]
impl SessionApi for HttpApi {
    async fn validate(&self) -> Result<Identity, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.builder(Method::Get, paths::VALIDATE).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(self.builder(Method::Post, paths::LOGOUT).build()).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
}

#[cfg(feature = "hydrate")]
async fn send(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<ErrorBody>().await.ok();
        log::debug!("{} -> {status}", resp.url());
        return Err(ApiError::Status { status, body });
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
