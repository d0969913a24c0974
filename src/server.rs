//! Local HTTP server for the dashboard.
//!
//! ## Architecture
//!
//! A single-threaded `tiny_http` loop. Each request is one full
//! recompute-and-render pass over the cached dataset:
//! - `/` (optionally `?language=`) serves the dashboard page
//! - `/download/rankings.csv?language=` serves the ranking CSV
//! - `/download/institutions.csv` serves the full dataset CSV
//!
//! Routing lives in [`Dashboard::handle`], which is independent of the
//! socket so it can be exercised directly.

use crate::constants::{DATASET_DOWNLOAD_PATH, PAGE_PATH, RANKING_DOWNLOAD_PATH};
use crate::data::{CsvDownload, DataResult, Dataset, dataset_download, ranking_download};
use crate::render::{render_empty_page, render_page, render_trend_chart};
use crate::report::{Selection, build_report};
use crate::settings::DashboardSettings;
use anyhow::{Result, anyhow};
use std::sync::Arc;
use tiny_http::{Header, Response, Server, StatusCode};
use tracing::{debug, error, info, warn};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Response produced by the router
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Download file name, sent as `Content-Disposition: attachment`
    pub attachment: Option<String>,
}

impl HttpReply {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: HTML_CONTENT_TYPE,
            body,
            attachment: None,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT_CONTENT_TYPE,
            body: body.to_string(),
            attachment: None,
        }
    }

    fn download(download: CsvDownload) -> Self {
        Self {
            status: 200,
            content_type: download.content_type,
            body: download.body,
            attachment: Some(download.file_name),
        }
    }
}

/// The dashboard application: cached dataset plus settings
pub struct Dashboard {
    dataset: Arc<Dataset>,
    settings: DashboardSettings,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>, settings: DashboardSettings) -> Self {
        Self { dataset, settings }
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Route one request
    pub fn handle(&self, method: &str, url: &str) -> HttpReply {
        if !matches!(method, "GET" | "HEAD") {
            return HttpReply::text(405, "Method Not Allowed");
        }

        let (path, query) = split_url(url);
        let language = query.and_then(|q| query_param(q, "language"));

        match path {
            PAGE_PATH => self.page(language.as_deref()),
            RANKING_DOWNLOAD_PATH => self.ranking_csv(language.as_deref()),
            DATASET_DOWNLOAD_PATH => self.export(dataset_download(&self.dataset)),
            _ => HttpReply::text(404, "Not Found"),
        }
    }

    fn page(&self, requested: Option<&str>) -> HttpReply {
        let Some(selection) = Selection::resolve(&self.dataset, requested) else {
            return HttpReply::html(render_empty_page(&self.settings));
        };

        let report = build_report(&self.dataset, &selection, &self.settings);
        let chart = match render_trend_chart(&report.trend, &report.language, &self.settings.labels)
        {
            Ok(chart) => chart,
            Err(e) => {
                error!("Failed to render trend chart for {}: {}", report.language, e);
                None
            }
        };

        HttpReply::html(render_page(
            &report,
            &self.dataset.languages(),
            chart.as_deref(),
            &self.settings,
        ))
    }

    fn ranking_csv(&self, requested: Option<&str>) -> HttpReply {
        let Some(selection) = Selection::resolve(&self.dataset, requested) else {
            return HttpReply::text(404, "No languages in dataset");
        };

        let report = build_report(&self.dataset, &selection, &self.settings);
        self.export(ranking_download(&report.language, &report.ranking))
    }

    fn export(&self, download: DataResult<CsvDownload>) -> HttpReply {
        match download {
            Ok(download) => HttpReply::download(download),
            Err(e) => {
                error!("CSV export failed: {}", e);
                HttpReply::text(500, "Export failed")
            }
        }
    }
}

/// Bind the listening socket
pub fn bind(address: &str) -> Result<Server> {
    Server::http(address).map_err(|e| anyhow!("Failed to start server on {}: {}", address, e))
}

/// Serve requests one at a time until the server shuts down
pub fn serve(server: Server, dashboard: &Dashboard) -> Result<()> {
    info!("Serving dashboard at {}", dashboard.settings().dashboard_url());

    for request in server.incoming_requests() {
        let method = request.method().to_string();
        let url = request.url().to_string();

        let reply = dashboard.handle(&method, &url);
        debug!("{} {} -> {}", method, url, reply.status);

        let headers = reply_headers(&reply);
        let mut response =
            Response::from_string(reply.body).with_status_code(StatusCode(reply.status));
        for header in headers {
            response = response.with_header(header);
        }

        if let Err(e) = request.respond(response) {
            warn!("Failed to send response for {}: {}", url, e);
        }
    }

    Ok(())
}

/// Helper to create HTTP headers, returning None if the bytes are invalid
fn create_header(name: &[u8], value: &[u8]) -> Option<Header> {
    Header::from_bytes(name, value).ok()
}

/// Content-Type and, for downloads, Content-Disposition
fn reply_headers(reply: &HttpReply) -> Vec<Header> {
    let mut headers = Vec::with_capacity(2);
    let mut push = |name: &str, value: String| {
        match create_header(name.as_bytes(), value.as_bytes()) {
            Some(header) => headers.push(header),
            None => warn!("Dropping invalid {} header: {:?}", name, value),
        }
    };

    push("Content-Type", reply.content_type.to_string());
    if let Some(file_name) = &reply.attachment {
        push("Content-Disposition", content_disposition(file_name));
    }
    headers
}

/// Attachment disposition for `file_name`.
///
/// Header values must be ASCII: `filename` carries an ASCII fallback with
/// other characters replaced by `_`, and `filename*` the percent-encoded
/// UTF-8 name.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| match c {
            ' '..='~' if c != '"' && c != '\\' => c,
            _ => '_',
        })
        .collect();
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(file_name)
    )
}

fn split_url(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}

/// First value of `name` in a form-encoded query string
fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode_component(key)? == name {
            decode_component(value)
        } else {
            None
        }
    })
}

/// Decode one form component; `+` stands for a space
fn decode_component(component: &str) -> Option<String> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}
