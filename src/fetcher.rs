use std::time::Duration;

use reqwest::redirect;
use scraper::Html;
use tracing::{debug, info};

use crate::error::{Error, Result};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::blocking::Client> {
    let redirect_policy = redirect::Policy::custom(|attempt| {
        if attempt.previous().len() > 100 {
            attempt.error("Too many redirects (>100)")
        } else {
            attempt.follow()
        }
    });

    reqwest::blocking::Client::builder()
        .redirect(redirect_policy)
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

pub fn fetch_html(client: &reqwest::blocking::Client, url: &str) -> Result<String> {
    let fetch = || -> reqwest::Result<String> {
        let resp = client.get(url).send()?.error_for_status()?;
        debug!(url, status = %resp.status(), "response received");
        resp.text()
    };

    let html = fetch().map_err(|source| Error::Fetch { url: url.to_string(), source })?;
    info!(url, bytes = html.len(), "fetched listing page");
    Ok(html)
}

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

pub fn fetch_document(client: &reqwest::blocking::Client, url: &str) -> Result<Html> {
    fetch_html(client, url).map(|html| parse_document(&html))
}
