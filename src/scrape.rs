//! The scrape module fetches the catalog page, extracts its courses and saves
//! them to a CSV file.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use reqwest::Client;
use url::Url;

use crate::catalog::CatalogTable;
use crate::error::{CatalogError, Result};
use crate::parse::extract_courses;

/// Outcome of a scrape run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeReport {
    /// No course anchors were found, nothing was written.
    NoData,
    /// `count` courses were written to `path`.
    Written { count: usize, path: PathBuf },
}

/// Fetches the catalog page with a single GET request.
///
/// A non-success status is logged but the body is still returned as HTML.
///
/// # Errors
///
/// Returns [`CatalogError::Network`] if the request or reading the body fails.
pub async fn fetch_catalog(client: &Client, url: &Url) -> Result<String> {
    info!("Fetching data from {url}");
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("Catalog responded with {status}, parsing the body anyway");
    }

    Ok(response.text().await?)
}

/// Reports the table and writes it to `output`, replacing any existing file.
/// An empty table is reported as [`ScrapeReport::NoData`] and no file is written.
///
/// # Arguments
///
/// * `table` - Extracted courses
/// * `output` - Path of the CSV file
/// * `preview` - Number of courses to log as a sample
///
/// # Errors
///
/// Returns an error if the CSV file cannot be written.
pub fn persist_catalog(table: &CatalogTable, output: &Path, preview: usize) -> Result<ScrapeReport> {
    if table.is_empty() {
        warn!("No courses found. Check if the HTML structure matches expectations.");
        return Ok(ScrapeReport::NoData);
    }

    info!("Total courses found: {}", table.len());
    let sample = table.preview(preview);
    if !sample.is_empty() {
        info!("Sample of first {} courses:", sample.len());
        for course in sample {
            info!(
                "{}\t{}\t{}",
                course.course_code, course.course_name, course.credits
            );
        }
    }

    table.write_csv(output)?;
    info!("Data saved to {}", output.display());

    Ok(ScrapeReport::Written {
        count: table.len(),
        path: output.to_path_buf(),
    })
}

/// Fetches the catalog at `url` and saves its courses to `output`.
///
/// # Errors
///
/// Returns an error if:
/// * The catalog cannot be fetched
/// * The CSV file cannot be written
pub async fn scrape_catalog(
    client: &Client,
    url: &Url,
    output: &Path,
    preview: usize,
) -> Result<ScrapeReport> {
    let html = fetch_catalog(client, url).await?;
    persist_catalog(&extract_courses(&html), output, preview)
}

/// Extracts courses from a saved copy of the catalog page.
///
/// # Errors
///
/// Returns an error if:
/// * The HTML file cannot be read or is not UTF-8
/// * The CSV file cannot be written
pub fn extract_file(html_path: &Path, output: &Path, preview: usize) -> Result<ScrapeReport> {
    info!("Reading catalog from {}", html_path.display());
    let bytes = fs::read(html_path).map_err(|e| CatalogError::io(html_path, e))?;
    let html = String::from_utf8(bytes)?;
    persist_catalog(&extract_courses(&html), output, preview)
}
