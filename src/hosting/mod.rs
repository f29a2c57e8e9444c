//! Green-hosting verification.
//!
//! Queries The Green Web Foundation greencheck registry for a page's
//! hostname. Lookup failure is never fatal: every failure path degrades to a
//! conservative non-green descriptor so the analysis can proceed.

mod types;

use log::{debug, warn};
use url::Url;

pub use types::HostingDescriptor;
use types::GreencheckResponse;

/// Looks up a URL's hostname in the green-hosting registry.
///
/// `endpoint` is the registry base URL; the hostname is appended as a path
/// segment. The request runs on the short-timeout probe client, so a slow
/// registry cannot stall the analysis longer than the probe budget.
///
/// On a definitive verdict the descriptor carries the registry's answer,
/// with `hosted_by` defaulting to `"Unknown"` when the provider name is
/// absent. On a missing verdict, non-2xx response, decode failure, or any
/// transport error (timeouts included), the cause is logged at warn level
/// and the degraded descriptor is returned.
pub async fn check_hosting(client: &reqwest::Client, endpoint: &str, url: &Url) -> HostingDescriptor {
    let Some(host) = url.host_str() else {
        warn!("No hostname in {url}, skipping green-hosting lookup");
        return HostingDescriptor::degraded();
    };

    let lookup_url = format!("{}/{}", endpoint.trim_end_matches('/'), host);
    let response = match client.get(&lookup_url).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Green-hosting lookup failed for {host}: {e}");
            return HostingDescriptor::degraded();
        }
    };

    if !response.status().is_success() {
        warn!(
            "Green-hosting registry answered {} for {host}",
            response.status()
        );
        return HostingDescriptor::degraded();
    }

    let body = match response.json::<GreencheckResponse>().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not decode green-hosting response for {host}: {e}");
            return HostingDescriptor::degraded();
        }
    };

    match body.green {
        Some(is_green) => {
            debug!("Green-hosting verdict for {host}: green={is_green}");
            HostingDescriptor {
                is_green,
                hosted_by: body.hosted_by.unwrap_or_else(|| "Unknown".to_string()),
                hosted_by_website: body.hosted_by_website,
            }
        }
        None => {
            warn!("Green-hosting registry gave no verdict for {host}");
            HostingDescriptor::degraded()
        }
    }
}
