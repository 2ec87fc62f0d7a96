use crate::dom;
use globe_core::texture::{decode_texture, TextureImage};
use globe_core::{parse_countries, Dataset, MarkerSource, SceneContext, ViewerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Start the texture and dataset downloads. Failures are logged; the globe
/// keeps rendering with the placeholder surface and no bars.
pub fn spawn_loads(
    config: &ViewerConfig,
    scene: Rc<RefCell<SceneContext>>,
    pending_texture: Rc<RefCell<Option<TextureImage>>>,
) {
    if let Some(url) = config.texture_url.clone() {
        spawn_local(async move {
            match load_texture(&url).await {
                Ok(image) => *pending_texture.borrow_mut() = Some(image),
                Err(e) => log::error!("[assets] texture {url}: {e:#}"),
            }
        });
    }
    if let MarkerSource::Dataset(url) = &config.markers {
        let url = url.clone();
        let config = config.clone();
        spawn_local(async move {
            match load_dataset(&url).await {
                Ok(dataset) => {
                    let mut rng = StdRng::from_entropy();
                    scene
                        .borrow_mut()
                        .populate(&config, &dataset.records, &mut rng);
                    log::info!(
                        "[assets] {} markers from {url} ({} rows skipped)",
                        dataset.records.len(),
                        dataset.rejected.len()
                    );
                }
                Err(e) => log::error!("[assets] dataset {url}: {e:#}"),
            }
        });
    }
}

async fn load_texture(url: &str) -> anyhow::Result<TextureImage> {
    let bytes = dom::fetch_bytes(url).await?;
    Ok(decode_texture(&bytes)?)
}

async fn load_dataset(url: &str) -> anyhow::Result<Dataset> {
    let bytes = dom::fetch_bytes(url).await?;
    Ok(parse_countries(&bytes)?)
}
