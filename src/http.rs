//! Fetching JSON over HTTP with `ureq`. Enabled by the `http` feature.

use std::io::Read;

use serde_json::Value;

use crate::error::Error;
use crate::options::ParseOptions;
use crate::Result;

/// Decodes a response body as a JSON value.
pub fn read_json<R: Read>(body: R) -> Result<Value> {
    crate::parse::from_reader(body, &ParseOptions::default())
}

/// Sends a GET request and decodes the response body as JSON. Non-success
/// statuses are errors.
pub fn get_json(url: &str) -> Result<Value> {
    get_json_with_agent(&ureq::agent(), url)
}

pub fn get_json_with_agent(agent: &ureq::Agent, url: &str) -> Result<Value> {
    tracing::debug!(target: "serde_json_ext::http", url, "Sending GET request for JSON");
    let response = agent.get(url).set("Accept", "application/json").call();

    match response {
        Ok(resp) => read_json(resp.into_reader()),
        Err(ureq::Error::Status(code, _)) => {
            tracing::warn!(
                target: "serde_json_ext::http",
                url,
                status = code,
                "JSON request returned a non-success status"
            );
            Err(Error::http(format!("request to {url} failed with status {code}")))
        }
        Err(ureq::Error::Transport(err)) => {
            tracing::warn!(
                target: "serde_json_ext::http",
                url,
                error = %err,
                "JSON request failed in transport"
            );
            Err(Error::http(format!("request to {url} failed: {err}")))
        }
    }
}
