use crate::errors::GeoIpError;
use crate::types::IpData;
use reqwest::{Client, StatusCode};

#[cfg(feature = "tracing")]
use tracing::{debug, instrument};

/// Single GET used for reachability. Only the status is of interest; the body is dropped unread.
#[cfg_attr(feature = "tracing", instrument(skip(client)))]
pub async fn check_status(client: &Client, url: &str) -> Result<StatusCode, GeoIpError> {
    let res = client
        .get(url)
        .send()
        .await
        .map_err(|e| GeoIpError::from_request(e, url))?;

    #[cfg(feature = "tracing")]
    debug!(status = ?res.status(), "Probe answered");

    Ok(res.status())
}

/// Single lookup attempt. Anything but a 200 carrying a JSON object is an error.
#[cfg_attr(feature = "tracing", instrument(skip(client)))]
pub async fn send_request(client: &Client, url: &str) -> Result<IpData, GeoIpError> {
    let res = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| GeoIpError::from_request(e, url))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| GeoIpError::from_request(e, url))?;

    if status == StatusCode::OK {
        #[cfg(feature = "tracing")]
        debug!(status = ?status, body = %body, "Provider request successful");
        Ok(serde_json::from_str::<IpData>(&body)?)
    } else {
        Err(GeoIpError::ApiError { status, body })
    }
}
