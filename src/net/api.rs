//! Endpoint helpers for the transit REST API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`. Otherwise: stubs
//! failing with a transport error, since these endpoints are only meaningful
//! in the browser.
//!
//! Every protected call carries `Authorization: Bearer <token>`, and a 401
//! from any of them maps to [`ApiError::Unauthorized`].

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
use crate::net::types::{PageResult, RouteDetail, VehicleLocation};

/// Base URL of the transit REST API.
pub const API_BASE: &str = match option_env!("TRANSIT_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8000",
};

/// Routes per listing page.
pub const PAGE_SIZE: u32 = 10;

/// Exchange credentials for an access token via `POST /login`.
///
/// The payload is form-encoded with the email under `username`, as the
/// token endpoint expects. A non-success response is a credential
/// rejection, never session expiry.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Transport)?;
        form.append("username", email);
        form.append("password", password);

        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|_| ApiError::Transport)?
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        if !resp.ok() {
            return Err(rejection(&resp, "Login failed").await);
        }

        #[derive(serde::Deserialize)]
        struct TokenResponse {
            access_token: String,
        }
        let body: TokenResponse = resp.json().await.map_err(|_| ApiError::Transport)?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Transport)
    }
}

/// Create an account via `POST /register`. Success carries no body and does
/// not log the user in.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "username": username,
        });
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/register"))
            .json(&payload)
            .map_err(|_| ApiError::Transport)?
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        if !resp.ok() {
            return Err(rejection(&resp, "Registration failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, email, password);
        Err(ApiError::Transport)
    }
}

/// Fetch one page of the route listing.
pub async fn fetch_routes_page(token: &str, page: u32) -> Result<PageResult, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE}/routes/routes?page={page}&size={PAGE_SIZE}");
        let resp = authorized(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        check_protected(&resp)?;
        resp.json().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, page);
        Err(ApiError::Transport)
    }
}

/// Fetch the full record for one route, nested schedules included.
pub async fn fetch_route_detail(token: &str, route_id: u64) -> Result<RouteDetail, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE}/routes/routes/{route_id}");
        let resp = authorized(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        check_protected(&resp)?;
        resp.json().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, route_id);
        Err(ApiError::Transport)
    }
}

/// Search trips between two stops.
///
/// Returns the raw body: the endpoint answers with either an array of trips
/// or a non-array "no matches" sentinel, and that classification belongs to
/// the search state, not the transport layer. A 401 is still detected here.
pub async fn search_departures(
    token: &str,
    from_stop: &str,
    to_stop: &str,
) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE}/routes/departures-between-stops/{from_stop}/{to_stop}");
        let resp = authorized(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        if resp.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        resp.json().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, from_stop, to_stop);
        Err(ApiError::Transport)
    }
}

/// Fetch a vehicle's current position.
pub async fn fetch_vehicle_location(
    token: &str,
    vehicle_id: u64,
) -> Result<VehicleLocation, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = format!("{API_BASE}/routes/vehicle/{vehicle_id}/location");
        let resp = authorized(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(|_| ApiError::Transport)?;
        check_protected(&resp)?;
        resp.json().await.map_err(|_| ApiError::Transport)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, vehicle_id);
        Err(ApiError::Transport)
    }
}

#[cfg(feature = "csr")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    token: &str,
) -> gloo_net::http::RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

#[cfg(feature = "csr")]
fn check_protected(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

/// Extract the server's `detail` message from an error body, falling back
/// to a generic message when there is none.
#[cfg(feature = "csr")]
async fn rejection(resp: &gloo_net::http::Response, fallback: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::Rejected(body.detail),
        Err(_) => ApiError::Rejected(fallback.to_owned()),
    }
}
