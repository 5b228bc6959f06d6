//! Integration tests for the favorites store.

mod helpers;

use std::time::Duration;

use serde_json::json;

use favorites_core::traits::settings::SettingsRegistry;
use favorites_entity::{Favorite, FavoritesSettings};
use favorites_service::FavoritesEvent;

use helpers::{ROOT, TestApp};

#[tokio::test]
async fn test_add_twice_yields_one_entry() {
    let app = TestApp::new(json!({})).await;
    let favorite = Favorite::new(ROOT, "notes.md", "file");

    app.manager.add_favorite(favorite.clone()).await.unwrap();
    app.manager.add_favorite(favorite).await.unwrap();

    let matching: Vec<_> = app
        .stored_favorites()
        .into_iter()
        .filter(|f| f.matches(ROOT, "notes.md") && !f.hidden)
        .collect();
    assert_eq!(matching.len(), 1);
}

#[tokio::test]
async fn test_remove_hides_default_and_deletes_custom() {
    let app = TestApp::new(json!({"favorites": [
        {"root": ROOT, "path": "home", "contentType": "directory", "default": true},
        {"root": ROOT, "path": "mine", "contentType": "directory"}
    ]}))
    .await;

    app.manager.remove_favorite("home").await.unwrap();
    app.manager.remove_favorite("mine").await.unwrap();

    let stored = app.stored_favorites();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].path, "home");
    assert!(stored[0].hidden);
}

#[tokio::test]
async fn test_foreign_root_entries_are_untouched() {
    let app = TestApp::new(json!({"favorites": [
        {"root": "/other", "path": "shared", "contentType": "directory"}
    ]}))
    .await;

    assert!(!app.manager.has_favorite("shared"));
    app.manager
        .add_favorite(Favorite::directory(ROOT, "shared"))
        .await
        .unwrap();
    app.manager.remove_favorite("shared").await.unwrap();

    let stored = app.stored_favorites();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].root, "/other");
}

#[tokio::test]
async fn test_display_order_groups_by_content_type() {
    let app = TestApp::new(json!({"favorites": [
        {"root": ROOT, "path": "b.txt", "contentType": "file"},
        {"root": ROOT, "path": "x/Zeta", "contentType": "directory"},
        {"root": ROOT, "path": "a.txt", "contentType": "file"},
        {"root": ROOT, "path": "alpha", "contentType": "directory"},
        {"root": ROOT, "path": "B.txt", "contentType": "file"}
    ]}))
    .await;

    assert_eq!(
        app.visible_paths(),
        vec!["x/Zeta", "alpha", "B.txt", "a.txt", "b.txt"]
    );
    let unsorted: Vec<String> = app
        .manager
        .visible_favorites(false)
        .into_iter()
        .map(|f| f.path)
        .collect();
    assert_eq!(unsorted[0], "b.txt");
}

#[tokio::test]
async fn test_visibility_gating() {
    let app = TestApp::new(json!({"showWidget": false})).await;

    app.manager
        .add_favorite(Favorite::directory(ROOT, "data"))
        .await
        .unwrap();
    assert!(!app.manager.is_visible());

    app.manager
        .save_settings(FavoritesSettings::show_widget(true))
        .await
        .unwrap();
    assert!(app.manager.is_visible());

    app.manager.remove_favorite("data").await.unwrap();
    assert!(!app.manager.is_visible());
}

#[tokio::test]
async fn test_clear_discards_custom_favorites() {
    let app = TestApp::new(json!({"favorites": [
        {"root": ROOT, "path": "A", "contentType": "directory", "default": true, "hidden": true},
        {"root": ROOT, "path": "B", "contentType": "directory"}
    ]}))
    .await;

    app.manager.clear_favorites().await.unwrap();

    assert_eq!(
        app.stored_document(),
        json!({"favorites": [
            {"root": ROOT, "path": "A", "contentType": "directory", "default": true, "hidden": true}
        ]})
    );
}

#[tokio::test]
async fn test_restore_discards_custom_and_reveals_defaults() {
    let app = TestApp::new(json!({"favorites": [
        {"root": ROOT, "path": "A", "contentType": "directory", "default": true, "hidden": true},
        {"root": ROOT, "path": "B", "contentType": "directory"}
    ]}))
    .await;

    app.manager.restore_defaults().await.unwrap();

    let stored = app.stored_favorites();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].default && !stored[0].hidden);
    assert_eq!(app.visible_paths(), vec!["A"]);
}

#[tokio::test]
async fn test_rename_unknown_path_writes_nothing() {
    let app = TestApp::new(json!({"favorites": [
        {"root": ROOT, "path": "docs", "contentType": "directory"}
    ]}))
    .await;

    app.manager.rename_favorite("nope", "Nope").await.unwrap();

    assert_eq!(app.settings.write_count(), 0);
}

#[tokio::test]
async fn test_end_to_end_default_removal() {
    let app = TestApp::new(json!({
        "favorites": [{"root": "/r", "path": "docs", "contentType": "directory", "default": true}],
        "showWidget": true
    }))
    .await;

    let visible = app.manager.visible_favorites(true);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].display_name(), "docs");
    assert!(app.manager.is_visible());

    app.manager.remove_favorite("docs").await.unwrap();

    let stored = app.stored_favorites();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].hidden);
    assert!(app.manager.visible_favorites(true).is_empty());
    assert!(!app.manager.is_visible());
}

#[tokio::test]
async fn test_concurrent_adds_keep_every_entry() {
    let app = TestApp::new(json!({})).await;

    let (a, b) = tokio::join!(
        app.manager.add_favorite(Favorite::directory(ROOT, "a")),
        app.manager.add_favorite(Favorite::directory(ROOT, "b")),
    );
    a.unwrap();
    b.unwrap();

    let mut paths: Vec<String> = app.stored_favorites().into_iter().map(|f| f.path).collect();
    paths.sort();
    assert_eq!(paths, vec!["a", "b"]);
}

#[tokio::test]
async fn test_prune_against_filesystem() {
    let app = TestApp::new(json!({"favorites": [
        {"root": ROOT, "path": "", "contentType": "directory", "default": true},
        {"root": ROOT, "path": "present", "contentType": "directory"},
        {"root": ROOT, "path": "missing", "contentType": "directory"},
        {"root": ROOT, "path": "old-default", "contentType": "directory", "default": true}
    ]}))
    .await;
    app.mkdir("present");

    let removed = app.manager.prune_invalid().await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(app.visible_paths(), vec!["", "present"]);
    let stored = app.stored_favorites();
    assert!(stored.iter().any(|f| f.path == "old-default" && f.hidden));
    assert!(!stored.iter().any(|f| f.path == "missing"));
}

#[tokio::test]
async fn test_external_settings_change_is_picked_up() {
    let app = TestApp::new(json!({"showWidget": true})).await;
    let mut events = app.manager.subscribe();

    app.settings
        .set(
            &app.config.schema_id,
            "favorites",
            json!([{"root": ROOT, "path": "from-elsewhere", "contentType": "directory"}]),
        )
        .await
        .unwrap();

    let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("no reload after external change")
        .unwrap();
    assert!(matches!(event, FavoritesEvent::FavoritesChanged(ref v) if v.len() == 1));
    assert!(app.manager.has_favorite("from-elsewhere"));
    assert!(app.manager.is_visible());
}

#[tokio::test]
async fn test_schema_defaults_seed_home_favorite() {
    let app = TestApp::with_schema_defaults(json!({})).await;

    let visible = app.manager.visible_favorites(true);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].display_name(), "Home");
    assert!(visible[0].default);
    assert!(app.manager.show_widget());

    app.manager.remove_favorite("").await.unwrap();
    assert!(app.stored_favorites()[0].hidden);
    assert!(!app.manager.is_visible());
}
