//! HTTP surface: routes, CORS headers and JSON error mapping

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{debug, info, warn, error};
use serde::de::DeserializeOwned;
use crate::request::{ChatRequest, ErrorResponse, GenerationRequest};
use crate::DocGenHandler;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str
  = "authorization, x-client-info, apikey, content-type";

/// Build the router with all routes and the CORS response layer
pub fn router(handler: DocGenHandler) -> Router
{   Router::new()
      .route(
        "/generate-documentation",
        post(generate_documentation).options(preflight)
      )
      .route(
        "/chat-assistant",
        post(chat_assistant).options(preflight)
      )
      .route("/templates", get(list_templates))
      // input length is left to the gateway's own limits
      .layer(DefaultBodyLimit::disable())
      .layer(middleware::map_response(with_cors_headers))
      .with_state(handler)
}

/// Bind to the configured address and serve until the process exits
pub async fn serve(config: crate::config::ServerConfig)
  -> Result<(), crate::error::Error>
{   let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("docgen listening on {}", listener.local_addr()?);
    serve_on(listener, DocGenHandler::new(config.gateway)).await
}

/// Serve on an already bound listener
pub async fn serve_on(
  listener: tokio::net::TcpListener
, handler: DocGenHandler
) -> Result<(), crate::error::Error>
{   axum::serve(listener, router(handler)).await?;
    Ok(())
}

async fn with_cors_headers(mut response: Response) -> Response
{   let headers = response.headers_mut();
    headers.insert(
      header::ACCESS_CONTROL_ALLOW_ORIGIN,
      HeaderValue::from_static(ALLOW_ORIGIN)
    );
    headers.insert(
      header::ACCESS_CONTROL_ALLOW_HEADERS,
      HeaderValue::from_static(ALLOW_HEADERS)
    );
    response
}

async fn preflight() -> StatusCode
{   StatusCode::OK
}

async fn list_templates() -> Json<Vec<crate::TemplateInfo>>
{   Json(crate::Template::catalog())
}

async fn generate_documentation(
  State(handler): State<DocGenHandler>
, body: Bytes
) -> Response
{   debug!("POST /generate-documentation ({} bytes)", body.len());
    let request: GenerationRequest = match decode_body(&body)
    {   Ok(request) => request
      , Err(e) => return error_response(&e)
    };
    match handler.generate_documentation(request).await
    {   Ok(reply) => Json(reply).into_response()
      , Err(e) => error_response(&e)
    }
}

async fn chat_assistant(
  State(handler): State<DocGenHandler>
, body: Bytes
) -> Response
{   debug!("POST /chat-assistant ({} bytes)", body.len());
    let request: ChatRequest = match decode_body(&body)
    {   Ok(request) => request
      , Err(e) => return error_response(&e)
    };
    match handler.chat(request).await
    {   Ok(reply) => Json(reply).into_response()
      , Err(e) => error_response(&e)
    }
}

/// An empty body decodes as `{}` so validation can name the missing field
fn decode_body<T>(body: &[u8]) -> Result<T, crate::error::Error>
where
  T: DeserializeOwned + Default
{   if body.iter().all(u8::is_ascii_whitespace)
    {   return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
      crate::error::Error::InvalidBody(e.to_string())
    })
}

fn error_response(err: &crate::error::Error) -> Response
{   let status = StatusCode::from_u16(err.status_hint())
      .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if err.is_client_error()
    {   warn!("Request rejected ({}): {}", status, err);
    } else
    {   error!("Request failed ({}): {}", status, err);
    }
    (status, Json(ErrorResponse::from(err))).into_response()
}
