use gloo_net::http::Request;

use crate::config::BACKEND_URL;
use crate::error::RequestError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};

/// Exchange credentials for a token, identity and role.
pub async fn perform_login(email: &str, password: &str) -> Result<LoginResponse, RequestError> {
    let url = format!("{}/api/auth/login", BACKEND_URL);
    let body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| RequestError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.ok();
        return Err(RequestError::from_status(status, body.as_deref()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| RequestError::Network(format!("Parse error: {}", e)))
}

/// Register a new account. Registering an employee account is an admin action
/// and carries the admin's bearer token.
pub async fn register(
    request: &RegisterRequest,
    admin_token: Option<&str>,
) -> Result<(), RequestError> {
    let url = format!("{}/api/auth/register", BACKEND_URL);

    let mut builder = Request::post(&url);
    if let Some(token) = admin_token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .json(request)
        .map_err(|e| RequestError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.ok();
        return Err(RequestError::from_status(status, body.as_deref()));
    }

    Ok(())
}
