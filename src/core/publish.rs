//! Static output of the page and its assets.

use crate::core::page::PageRenderer;
use crate::core::sections::{LinkMode, RESUME_FILE};
use crate::domain::ports::Storage;
use crate::utils::error::{PortfolioError, Result};

pub const INDEX_FILE: &str = "index.html";
pub const RADAR_FILE: &str = "skills_radar.json";

/// Reads the resume through `storage`, reporting a missing file as `NotFound`.
pub async fn read_resume<S: Storage>(storage: &S, path: &str) -> Result<Vec<u8>> {
    match storage.read_file(path).await {
        Ok(data) => Ok(data),
        Err(PortfolioError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Resume not found at {}", path);
            Err(PortfolioError::NotFound {
                resource: "Resume".to_string(),
            })
        }
        Err(e) => Err(e),
    }
}

/// Writes a self-contained site: the page with static links, the radar
/// figure, and a copy of the resume. Returns the written file names.
pub async fn publish_static<A: Storage, O: Storage>(
    renderer: &PageRenderer,
    assets: &A,
    output: &O,
) -> Result<Vec<&'static str>> {
    let resume_path = renderer.config().assets.resume_path.as_str();
    let resume = read_resume(assets, resume_path).await?;

    let page = renderer.clone().with_links(LinkMode::Static);
    let html = page.render_default().to_html();
    output.write_file(INDEX_FILE, html.as_bytes()).await?;
    tracing::debug!("Wrote {} ({} bytes)", INDEX_FILE, html.len());

    let figure = serde_json::to_vec_pretty(&renderer.chart().to_figure_json()?)?;
    output.write_file(RADAR_FILE, &figure).await?;

    output.write_file(RESUME_FILE, &resume).await?;
    tracing::debug!("Copied resume from {}", resume_path);

    Ok(vec![INDEX_FILE, RADAR_FILE, RESUME_FILE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::config::toml_config::SiteConfig;
    use crate::domain::model::PortfolioContent;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_resume_maps_to_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let result = read_resume(&storage, "resume.pdf").await;
        assert!(matches!(result, Err(PortfolioError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_publish_fails_without_resume() {
        let assets = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let renderer =
            PageRenderer::new(SiteConfig::default(), PortfolioContent::builtin().unwrap());

        let result = publish_static(
            &renderer,
            &LocalStorage::new(assets.path()),
            &LocalStorage::new(output.path()),
        )
        .await;

        assert!(matches!(result, Err(PortfolioError::NotFound { .. })));
        assert!(!output.path().join(INDEX_FILE).exists());
    }
}
