pub mod create_admin;
pub mod update_admin;

use tracker_db::UserStore;

use log::warn;

/// Ensure the unique username index exists.
///
/// A failure (typically duplicate usernames already in the collection) does
/// not stop the command: the upsert still refuses to add a second record for
/// the same username, it just loses the guard against concurrent writers.
pub async fn ensure_indexes_or_warn(store: &dyn UserStore) {
    if let Err(e) = store.ensure_indexes().await {
        warn!("Could not ensure unique username index: {}", e);
    }
}
