//! One extraction run: origin → feed → flat records → workbook.
//!
//! Every failure is logged here with its full cause chain and collapsed into
//! [`RunOutcome::Failed`]; callers only ever see the three terminal outcomes.

use std::path::Path;

use anyhow::Context;
use shopxl_core::{AppConfig, RunOutcome};
use shopxl_export::{export_filename, write_workbook};
use shopxl_scraper::{CatalogClient, Origin};

pub(crate) fn build_catalog_client(config: &AppConfig) -> anyhow::Result<CatalogClient> {
    CatalogClient::new(config.request_timeout_secs, &config.user_agent)
        .map(|client| client.with_inter_request_delay(config.inter_request_delay_ms))
        .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))
}

/// Runs a full export for `shop_url`, writing `<hostname>_products.xlsx`
/// into `output_dir` when at least one variant was found.
pub(crate) async fn run_export(
    client: &CatalogClient,
    shop_url: &str,
    output_dir: &Path,
) -> RunOutcome {
    match try_export(client, shop_url, output_dir).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(shop_url, error = %format!("{e:#}"), "export failed");
            RunOutcome::Failed
        }
    }
}

async fn try_export(
    client: &CatalogClient,
    shop_url: &str,
    output_dir: &Path,
) -> anyhow::Result<RunOutcome> {
    let origin = Origin::parse(shop_url)?;
    tracing::info!(origin = %origin, "starting extraction");

    let records = client
        .extract(&origin)
        .await
        .with_context(|| format!("failed to extract products from {origin}"))?;

    if records.is_empty() {
        tracing::warn!(origin = %origin, "feed returned no products");
        return Ok(RunOutcome::NoProducts);
    }

    let path = output_dir.join(export_filename(origin.hostname()));
    write_workbook(&records, &path)
        .with_context(|| format!("failed to export {} records", records.len()))?;

    Ok(RunOutcome::Exported {
        count: records.len(),
        path,
    })
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
