//! `qex fetch` command implementation
//!
//! Downloads the dataset's product images into a local directory. Images
//! already present are skipped, so the command is safe to rerun. A failed
//! download is logged and counted, not fatal: the pipeline will fail
//! loudly later on any row whose artifact is still missing.

use crate::dataset::{self, DatasetRow};
use crate::error::Result;
use crate::progress;
use futures::StreamExt;
use std::path::Path;
use tracing::{info, warn};

/// Download all dataset images with bounded concurrency
pub async fn run(dataset_path: &Path, images_dir: &Path, concurrency: usize) -> Result<()> {
    std::fs::create_dir_all(images_dir)?;

    let rows = dataset::read_rows(dataset_path)?;
    let links = unique_links(&rows);
    info!(
        rows = rows.len(),
        images = links.len(),
        dir = %images_dir.display(),
        "Fetching dataset images"
    );

    let client = reqwest::Client::new();
    let pb = progress::create_progress_bar(links.len() as u64, "Downloading images");

    let outcomes: Vec<bool> = futures::stream::iter(links.into_iter().map(|link| {
        let client = client.clone();
        let target = images_dir.join(dataset::image_file_name(&link));
        let pb = pb.clone();
        async move {
            let ok = match download_image(&client, &link, &target).await {
                Ok(()) => true,
                Err(error) => {
                    warn!(link = %link, error = %error, "Image download failed");
                    false
                }
            };
            pb.inc(1);
            ok
        }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect()
    .await;

    pb.finish_with_message("Downloads complete".to_string());

    let failed = outcomes.iter().filter(|ok| !**ok).count();
    if failed > 0 {
        warn!(failed, "Some images could not be downloaded; rerun 'qex fetch' or expect those rows to fail");
    }

    Ok(())
}

/// Links in first-appearance order, each downloaded once.
fn unique_links(rows: &[DatasetRow]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .filter(|row| seen.insert(row.image_link.as_str()))
        .map(|row| row.image_link.clone())
        .collect()
}

async fn download_image(client: &reqwest::Client, link: &str, target: &Path) -> Result<()> {
    if target.exists() {
        return Ok(());
    }

    let response = client.get(link).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tokio::fs::write(target, &bytes).await?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use qex_common::types::EntityType;

    fn row(index: u64, link: &str) -> DatasetRow {
        DatasetRow {
            index,
            image_link: link.to_string(),
            entity_name: EntityType::Width,
        }
    }

    #[test]
    fn test_unique_links_preserve_order() {
        let rows = vec![
            row(0, "https://img.example.com/a.jpg"),
            row(1, "https://img.example.com/b.jpg"),
            row(2, "https://img.example.com/a.jpg"),
        ];

        assert_eq!(
            unique_links(&rows),
            vec![
                "https://img.example.com/a.jpg".to_string(),
                "https://img.example.com/b.jpg".to_string(),
            ]
        );
    }
}
