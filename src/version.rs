//! Build version label
//!
//! Deployments may serve `/version.json` (`{"version": "1.2.3"}`). The game
//! fetches it once at startup; any failure keeps the built-in default.

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::consts::DEFAULT_VERSION;

#[derive(Debug, Deserialize)]
struct VersionDocument {
    version: String,
}

/// Extract the version string from a `/version.json` body
pub fn parse_version(body: &str) -> anyhow::Result<String> {
    let doc: VersionDocument = serde_json::from_str(body).context("malformed version document")?;
    let version = doc.version.trim();
    if version.is_empty() {
        bail!("version document has an empty version");
    }
    Ok(version.to_string())
}

/// Text shown in the version label
pub fn label(version: &str) -> String {
    format!("v{}", version)
}

/// Use the fetched version, or fall back to the default
pub fn or_default(result: anyhow::Result<String>) -> String {
    match result {
        Ok(version) => version,
        Err(e) => {
            log::info!("Using default version info ({:#})", e);
            DEFAULT_VERSION.to_string()
        }
    }
}

/// Fetch and parse the deployment's version document
#[cfg(target_arch = "wasm32")]
pub async fn fetch_version(url: &str) -> anyhow::Result<String> {
    use anyhow::anyhow;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().context("no window")?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("request failed: {:?}", e))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch did not return a Response"))?;
    if !response.ok() {
        bail!("{} returned HTTP {}", url, response.status());
    }

    let text = response
        .text()
        .map_err(|e| anyhow!("unreadable body: {:?}", e))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| anyhow!("unreadable body: {:?}", e))?
        .as_string()
        .context("body is not text")?;

    parse_version(&body)
}
