//! `refresh` - fetch the full collection and render the cache.

use std::path::Path;

use anyhow::{Context, Result};

use store_bridge::ObserverBridge;
use store_core::{DataStore, Loader};
use store_posts::DevicePost;

use super::{open_http_store, open_mock_store, render};

pub async fn run(data_dir: &Path, mock: bool) -> Result<()> {
    if mock {
        refresh(open_mock_store(data_dir).await?).await
    } else {
        refresh(open_http_store(data_dir).await?).await
    }
}

/// The presentation pattern: subscribe through a bridge, trigger a load,
/// and re-render from `fetch()` when the change signal fires.
async fn refresh<L>(store: DataStore<L>) -> Result<()>
where
    L: Loader<Device = DevicePost>,
{
    let bridge = ObserverBridge::consuming(store.subscribe());
    let mut changes = bridge.subscribe();

    eprintln!("loading...");
    store.load().await.context("refresh failed")?;
    changes.changed().await;

    render(&store.fetch());
    Ok(())
}
