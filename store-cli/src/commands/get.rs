//! `get` - fetch a single post by id and render the cache.

use std::path::Path;

use anyhow::{Context, Result};

use store_bridge::ObserverBridge;
use store_core::{DataStore, Loader};
use store_posts::{DevicePost, NetworkPost};
use store_types::EntityId;

use super::{open_http_store, open_mock_store, render};

pub async fn run(data_dir: &Path, mock: bool, id: u64) -> Result<()> {
    let id = EntityId::new(id);
    if mock {
        let store = open_mock_store(data_dir).await?;
        // Canned single-item response, matching the collection's shape
        store.loader().insert_item(
            id,
            NetworkPost {
                id: id.value(),
                user_id: 1,
                title: format!("Mock #{id}"),
                body: "Mock Body".to_string(),
            },
        );
        get(store, id).await
    } else {
        get(open_http_store(data_dir).await?, id).await
    }
}

async fn get<L>(store: DataStore<L>, id: EntityId) -> Result<()>
where
    L: Loader<Device = DevicePost>,
{
    let bridge = ObserverBridge::consuming(store.subscribe());
    let mut changes = bridge.subscribe();

    eprintln!("loading post {id}...");
    store
        .load_one(id)
        .await
        .with_context(|| format!("failed to load post {id}"))?;
    changes.changed().await;

    render(&store.fetch());
    Ok(())
}
