use std::{path::Path, sync::Arc};

use anyhow::Context;
use foodcheck_core::{
    application::create_service,
    domain::{
        common::FoodcheckConfig,
        food_analysis::{entities::ImagePayload, ports::FoodAnalysisService},
        upload::{resolve_mime_type, sanitize_filename},
    },
};

use crate::args::Args;

/// One-shot analysis of a local image, printed to stdout.
pub async fn analyze_file(args: Arc<Args>, path: &Path) -> Result<(), anyhow::Error> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let filename = path
        .file_name()
        .and_then(|name| sanitize_filename(&name.to_string_lossy()))
        .with_context(|| format!("{} has no usable file name", path.display()))?;
    let mime_type = resolve_mime_type(None, &filename);

    let service = create_service(FoodcheckConfig::from(args.as_ref().clone())).await?;
    let analysis = service
        .analyze_image(filename, ImagePayload::new(data, mime_type))
        .await?;

    println!("{}", analysis.ingredients);
    println!("{}", analysis.allergens);

    Ok(())
}
