//! Favorites store backed by the settings registry.

use std::fmt;
use std::sync::{Arc, RwLock};

use futures::future::join_all;
use serde_json::{Value, json};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use favorites_core::config::FavoritesConfig;
use favorites_core::error::AppError;
use favorites_core::ids::{command, setting};
use favorites_core::result::AppResult;
use favorites_core::traits::command::CommandExecutor;
use favorites_core::traits::contents::ContentsProbe;
use favorites_core::traits::settings::SettingsRegistry;
use favorites_entity::favorite::sort_for_display;
use favorites_entity::{Favorite, FavoritesMenu, FavoritesSettings};
use favorites_providers::settings::to_settings_json;

use super::events::FavoritesEvent;
use crate::projector::{MenuProjector, VisibilityState};

/// Capacity of the favorites event channel.
const EVENT_BUFFER: usize = 64;

/// Snapshot of the last reload.
#[derive(Debug, Default)]
struct ManagerState {
    /// Favorites of every root, in stored order.
    favorites: Vec<Favorite>,
    /// Last loaded `showWidget` preference.
    show_widget: bool,
    /// Last projected menu.
    menu: FavoritesMenu,
    /// Last evaluated panel visibility.
    visibility: VisibilityState,
    /// Whether a reload has published yet.
    loaded: bool,
}

/// Owns the favorites list.
///
/// The settings registry is the source of truth. Every mutation writes the
/// complete favorites array back and then reloads, so in-memory state only
/// changes through [`reload`](Self::reload). Mutations and reloads are
/// serialized by an internal lock held from read to reload.
///
/// Subscribers see one `FavoritesChanged`/`VisibilityChanged` pair per
/// change. A reload that reads back the snapshot already published, such
/// as the settings echo of the store's own write, notifies nobody.
pub struct FavoritesManager {
    /// Root whose favorites are exposed.
    server_root: String,
    /// Schema holding the favorites.
    schema_id: String,
    /// Persistence.
    settings: Arc<dyn SettingsRegistry>,
    /// Path existence checks.
    contents: Arc<dyn ContentsProbe>,
    /// Host command executor.
    commands: Arc<dyn CommandExecutor>,
    /// Menu builder.
    projector: MenuProjector,
    /// Last reloaded state.
    state: RwLock<ManagerState>,
    /// Serializes read-mutate-persist-reload cycles.
    mutation_lock: Mutex<()>,
    /// Change notifications.
    events: broadcast::Sender<FavoritesEvent>,
    /// Settings listener started by [`init`](Self::init).
    listener: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl fmt::Debug for FavoritesManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesManager")
            .field("server_root", &self.server_root)
            .field("schema_id", &self.schema_id)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl FavoritesManager {
    /// Create a manager. Nothing is loaded until [`init`](Self::init) or
    /// [`reload`](Self::reload) runs.
    pub fn new(
        config: &FavoritesConfig,
        settings: Arc<dyn SettingsRegistry>,
        contents: Arc<dyn ContentsProbe>,
        commands: Arc<dyn CommandExecutor>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            server_root: config.server_root.clone(),
            schema_id: config.schema_id.clone(),
            settings,
            contents,
            commands,
            projector: MenuProjector::new(),
            state: RwLock::new(ManagerState::default()),
            mutation_lock: Mutex::new(()),
            events,
            listener: std::sync::Mutex::new(None),
        }
    }

    /// Start following settings changes, then load the current favorites.
    ///
    /// Calling `init` again only reloads.
    pub async fn init(self: &Arc<Self>) -> AppResult<()> {
        self.start_listener();
        self.reload().await?;
        info!(
            server_root = %self.server_root,
            favorites = self.favorites().len(),
            "Favorites manager initialized"
        );
        Ok(())
    }

    fn start_listener(self: &Arc<Self>) {
        let mut slot = self.listener.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_some() {
            return;
        }

        let mut rx = self.settings.subscribe();
        let manager = Arc::downgrade(self);
        let schema_id = self.schema_id.clone();

        *slot = Some(tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) if event.schema_id != schema_id => continue,
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Settings listener lagged, reloading favorites");
                    }
                    Err(RecvError::Closed) => break,
                }

                let Some(manager) = manager.upgrade() else {
                    break;
                };
                if let Err(e) = manager.reload().await {
                    warn!(error = %e, "Failed to reload favorites after settings change");
                }
            }
            debug!("Settings listener stopped");
        }));
    }

    /// Subscribe to store notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.events.subscribe()
    }

    /// The server root identifier.
    pub fn server_root(&self) -> &str {
        &self.server_root
    }

    /// The settings schema holding the favorites.
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    // ── Queries ────────────────────────────────────────────────

    /// Favorites of the active root, hidden ones included, in stored order.
    pub fn favorites(&self) -> Vec<Favorite> {
        self.read_state()
            .favorites
            .iter()
            .filter(|f| f.root == self.server_root)
            .cloned()
            .collect()
    }

    /// Non-hidden favorites of the active root, optionally in display order.
    pub fn visible_favorites(&self, sort: bool) -> Vec<Favorite> {
        let mut visible: Vec<Favorite> = self
            .favorites()
            .into_iter()
            .filter(|f| !f.hidden)
            .collect();
        if sort {
            sort_for_display(&mut visible);
        }
        visible
    }

    /// Whether a visible favorite exists at `path` under the active root.
    pub fn has_favorite(&self, path: &str) -> bool {
        self.read_state()
            .favorites
            .iter()
            .any(|f| !f.hidden && f.matches(&self.server_root, path))
    }

    /// Whether the favorites panel should be shown.
    pub fn is_visible(&self) -> bool {
        self.read_state().visibility.is_visible()
    }

    /// Panel visibility as of the last reload.
    pub fn visibility(&self) -> VisibilityState {
        self.read_state().visibility
    }

    /// The `showWidget` preference as of the last reload.
    pub fn show_widget(&self) -> bool {
        self.read_state().show_widget
    }

    /// The favorites submenu as of the last reload.
    pub fn menu(&self) -> FavoritesMenu {
        self.read_state().menu.clone()
    }

    // ── Mutations ──────────────────────────────────────────────

    /// Pin a favorite.
    ///
    /// An empty root is replaced by the active root. A hidden entry at the
    /// same path is revealed instead; a visible one makes this a no-op.
    pub async fn add_favorite(&self, favorite: Favorite) -> AppResult<()> {
        let mut favorite = favorite;
        if favorite.root.is_empty() {
            favorite.root = self.server_root.clone();
        }
        let path = favorite.path.clone();
        let root = self.server_root.clone();

        self.mutate("add", &path, move |favorites| {
            match favorites.iter_mut().find(|f| f.matches(&root, &favorite.path)) {
                Some(existing) if existing.hidden => {
                    existing.hidden = false;
                    true
                }
                Some(_) => false,
                None => {
                    favorites.push(favorite);
                    true
                }
            }
        })
        .await
    }

    /// Unpin the favorite at `path`. Defaults are hidden, others deleted.
    pub async fn remove_favorite(&self, path: &str) -> AppResult<()> {
        let root = self.server_root.clone();
        self.mutate("remove", path, move |favorites| {
            let Some(index) = favorites.iter().position(|f| f.matches(&root, path)) else {
                return false;
            };
            if favorites[index].default {
                favorites[index].hidden = true;
            } else {
                favorites.remove(index);
            }
            true
        })
        .await
    }

    /// Set the display name of the favorite at `path`.
    pub async fn rename_favorite(&self, path: &str, display_name: &str) -> AppResult<()> {
        let root = self.server_root.clone();
        let display_name = display_name.to_string();
        self.mutate("rename", path, move |favorites| {
            match favorites.iter_mut().find(|f| f.matches(&root, path)) {
                Some(favorite) => {
                    favorite.name = Some(display_name);
                    true
                }
                None => false,
            }
        })
        .await
    }

    /// Un-hide every default favorite and drop all user additions.
    ///
    /// The settings document is overwritten, so `showWidget` falls back to
    /// its schema default.
    pub async fn restore_defaults(&self) -> AppResult<()> {
        self.reset_to_defaults(false).await
    }

    /// Hide every default favorite and drop all user additions.
    ///
    /// Like [`restore_defaults`](Self::restore_defaults), this overwrites
    /// the settings document.
    pub async fn clear_favorites(&self) -> AppResult<()> {
        self.reset_to_defaults(true).await
    }

    async fn reset_to_defaults(&self, hidden: bool) -> AppResult<()> {
        let _guard = self.mutation_lock.lock().await;

        let defaults: Vec<Favorite> = self
            .load_stored_favorites()
            .await?
            .into_iter()
            .filter(|f| f.default)
            .map(|mut f| {
                f.hidden = hidden;
                f
            })
            .collect();

        info!(
            defaults = defaults.len(),
            hidden, "Resetting favorites to defaults"
        );
        self.upload_settings(&FavoritesSettings::favorites(defaults))
            .await?;
        self.apply_reload().await
    }

    /// Merge-write the given keys, then reload.
    pub async fn save_settings(&self, settings: FavoritesSettings) -> AppResult<()> {
        let _guard = self.mutation_lock.lock().await;
        self.write_settings(&settings).await?;
        self.apply_reload().await
    }

    /// Replace the whole settings document, then reload.
    pub async fn overwrite_settings(&self, settings: FavoritesSettings) -> AppResult<()> {
        let _guard = self.mutation_lock.lock().await;
        self.upload_settings(&settings).await?;
        self.apply_reload().await
    }

    /// Remove `favorite` if its path no longer exists.
    ///
    /// Returns `true` when it was removed. Probe failures other than
    /// "not found" are logged and leave the favorite in place.
    pub async fn remove_favorite_if_invalid(&self, favorite: &Favorite) -> AppResult<bool> {
        match self.contents.get(&favorite.path).await {
            Ok(_) => Ok(false),
            Err(e) if e.is_not_found() => {
                info!(path = %favorite.path, "Removing favorite of missing path");
                self.remove_favorite(&favorite.path).await?;
                Ok(true)
            }
            Err(e) => {
                warn!(path = %favorite.path, error = %e, "Failed to check favorite path");
                Ok(false)
            }
        }
    }

    /// Check every visible favorite and remove those whose path is gone.
    /// Returns the number removed.
    pub async fn prune_invalid(&self) -> AppResult<usize> {
        let visible = self.visible_favorites(false);
        let results = join_all(
            visible
                .iter()
                .map(|favorite| self.remove_favorite_if_invalid(favorite)),
        )
        .await;

        let mut removed = 0;
        for result in results {
            if result? {
                removed += 1;
            }
        }
        if removed > 0 {
            info!(removed, "Pruned favorites of missing paths");
        }
        Ok(removed)
    }

    // ── Host actions ───────────────────────────────────────────

    /// Open a favorite through the host's "open favorite" command.
    pub async fn handle_click(&self, favorite: &Favorite) -> AppResult<()> {
        self.commands
            .execute(command::OPEN_FAVORITE, json!({ "favorite": favorite }))
            .await?;
        Ok(())
    }

    /// Navigate the file browser to `path`; the empty path opens the root.
    pub async fn open_path(&self, path: &str) -> AppResult<Value> {
        let target = if path.is_empty() { "/" } else { path };
        debug!(path = target, "Opening favorite");
        self.commands
            .execute(command::FILEBROWSER_OPEN_PATH, json!({ "path": target }))
            .await
    }

    // ── Reload ─────────────────────────────────────────────────

    /// Re-read favorites and `showWidget` from settings, rebuild the menu,
    /// and notify subscribers.
    ///
    /// Waits for any in-flight mutation, so a reload never publishes a
    /// snapshot older than one a mutation already published.
    pub async fn reload(&self) -> AppResult<()> {
        let _guard = self.mutation_lock.lock().await;
        self.apply_reload().await
    }

    /// Reload body; the caller holds the mutation lock.
    async fn apply_reload(&self) -> AppResult<()> {
        let favorites = self.load_stored_favorites().await?;
        let show_widget = self.load_show_widget().await?;

        let (visible, visibility) = {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            if state.loaded && state.show_widget == show_widget && state.favorites == favorites {
                debug!("Favorites unchanged since last reload");
                return Ok(());
            }
            state.loaded = true;
            state.favorites = favorites;
            state.show_widget = show_widget;

            let mut visible: Vec<Favorite> = state
                .favorites
                .iter()
                .filter(|f| f.root == self.server_root && !f.hidden)
                .cloned()
                .collect();
            sort_for_display(&mut visible);

            state.menu = self.projector.project(&visible, show_widget);

            let visibility = VisibilityState::evaluate(show_widget, visible.len());
            if visibility != state.visibility {
                info!(visible = visibility.is_visible(), "Favorites panel visibility changed");
            }
            state.visibility = visibility;
            (visible, visibility)
        };

        debug!(visible = visible.len(), show_widget, "Favorites reloaded");
        // No subscribers is fine.
        let _ = self.events.send(FavoritesEvent::FavoritesChanged(visible));
        let _ = self
            .events
            .send(FavoritesEvent::VisibilityChanged(visibility.is_visible()));
        Ok(())
    }

    // ── Internals ──────────────────────────────────────────────

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, ManagerState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply `op` to the stored favorites of every root; persist and reload
    /// when it reports a change.
    async fn mutate<F>(&self, operation: &str, path: &str, op: F) -> AppResult<()>
    where
        F: FnOnce(&mut Vec<Favorite>) -> bool,
    {
        let _guard = self.mutation_lock.lock().await;

        let mut favorites = self.load_stored_favorites().await?;
        if !op(&mut favorites) {
            debug!(operation, path, "Favorites unchanged");
            return Ok(());
        }

        self.write_settings(&FavoritesSettings::favorites(favorites))
            .await?;
        info!(operation, path, "Favorites updated");
        self.apply_reload().await
    }

    /// Favorites of every root as persisted; legacy entries get the
    /// active root.
    async fn load_stored_favorites(&self) -> AppResult<Vec<Favorite>> {
        let value = self
            .settings
            .get(&self.schema_id, setting::FAVORITES_KEY)
            .await?;

        let mut favorites: Vec<Favorite> = match value.composite {
            None | Some(Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value(raw).map_err(|e| {
                AppError::settings(format!("Invalid favorites in '{}': {e}", self.schema_id))
            })?,
        };
        for favorite in favorites.iter_mut().filter(|f| f.root.is_empty()) {
            favorite.root = self.server_root.clone();
        }
        Ok(favorites)
    }

    async fn load_show_widget(&self) -> AppResult<bool> {
        let value = self
            .settings
            .get(&self.schema_id, setting::SHOW_WIDGET_KEY)
            .await?;
        Ok(value
            .composite
            .as_ref()
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    /// Merge-style write of the keys present in `settings`.
    async fn write_settings(&self, settings: &FavoritesSettings) -> AppResult<()> {
        if let Some(favorites) = &settings.favorites {
            self.settings
                .set(
                    &self.schema_id,
                    setting::FAVORITES_KEY,
                    serde_json::to_value(favorites)?,
                )
                .await?;
        }
        if let Some(show_widget) = settings.show_widget {
            self.settings
                .set(
                    &self.schema_id,
                    setting::SHOW_WIDGET_KEY,
                    Value::Bool(show_widget),
                )
                .await?;
        }
        Ok(())
    }

    /// Full-document replacement.
    async fn upload_settings(&self, settings: &FavoritesSettings) -> AppResult<()> {
        let raw = to_settings_json(settings)?;
        self.settings.upload(&self.schema_id, &raw).await
    }
}

impl Drop for FavoritesManager {
    fn drop(&mut self) {
        let slot = self.listener.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}
