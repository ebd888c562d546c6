//! HTTP response handlers.
use anyhow::{anyhow, Result};
use tiny_http::{Header, Request, Response, StatusCode};

/// Responds to the request with a json body
pub fn send_json(request: Request, status: u16, body: &serde_json::Value) -> Result<()> {
    send_body(request, status, "application/json", body.to_string().into_bytes())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header {key}: {value}"))
}
