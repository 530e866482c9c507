//! Command implementations for the post-store CLI.

pub mod get;
pub mod refresh;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use store_core::{DataStore, JsonFileStore, Loader, MockLoader};
use store_posts::{DevicePost, NetworkPost, PostLoader, StoredPost};

/// Resolve the data directory, creating it if needed.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir,
        None => ProjectDirs::from("io", "syncstore", "post-store")
            .context("could not determine a data directory; pass --data-dir")?
            .data_dir()
            .to_path_buf(),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;
    Ok(dir)
}

fn post_file(data_dir: &Path) -> JsonFileStore<StoredPost> {
    JsonFileStore::new(data_dir.join("posts.json"))
}

/// Open a store over the real HTTP loader.
pub async fn open_http_store(data_dir: &Path) -> Result<DataStore<PostLoader>> {
    DataStore::open(PostLoader::new(), post_file(data_dir))
        .await
        .context("failed to open the post store")
}

/// Open a store over a mock loader seeded with canned posts.
pub async fn open_mock_store(data_dir: &Path) -> Result<DataStore<MockLoader<DevicePost>>> {
    let loader = MockLoader::new();
    loader.set_collection(vec![NetworkPost {
        id: 1,
        user_id: 1,
        title: "Mock Title".to_string(),
        body: "Mock Body".to_string(),
    }]);
    DataStore::open(loader, post_file(data_dir))
        .await
        .context("failed to open the post store")
}

/// Render a cache snapshot as an id/title listing.
pub fn render(posts: &[DevicePost]) {
    if posts.is_empty() {
        println!("(no posts cached)");
        return;
    }
    for post in posts {
        println!("{:>5}  {}", post.id, post.title);
    }
}

/// Render the current snapshot of a store.
pub fn render_store<L>(store: &DataStore<L>)
where
    L: Loader<Device = DevicePost>,
{
    render(&store.fetch());
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_types::EntityId;

    #[test]
    fn explicit_data_dir_is_created_and_used() {
        let tmp = tempfile::TempDir::new().unwrap();
        let wanted = tmp.path().join("nested").join("data");

        let resolved = resolve_data_dir(Some(wanted.clone())).unwrap();

        assert_eq!(resolved, wanted);
        assert!(wanted.is_dir());
    }

    #[tokio::test]
    async fn mock_show_renders_cached_state_without_loading() {
        let tmp = tempfile::TempDir::new().unwrap();

        // First run persists the canned post
        let store = open_mock_store(tmp.path()).await.unwrap();
        store.load().await.unwrap();
        drop(store);

        // A later mock show hydrates the same cache and stays off the loader
        let reopened = open_mock_store(tmp.path()).await.unwrap();
        let posts = reopened.fetch();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Mock Title");
        assert_eq!(reopened.loader().load_all_calls(), 0);

        show::run(tmp.path(), true).await.unwrap();
    }

    #[tokio::test]
    async fn mock_store_round_trip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let store = open_mock_store(tmp.path()).await.unwrap();

        store.load().await.unwrap();

        let posts = store.fetch();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, EntityId::new(1));
        assert_eq!(posts[0].title, "Mock Title");
    }
}
