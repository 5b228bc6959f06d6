//! Integration tests for the favorites commands.

mod helpers;

use serde_json::json;

use favorites_core::ids::command;
use favorites_core::traits::command::CommandExecutor;
use favorites_entity::Favorite;

use helpers::{ROOT, TestApp};

#[tokio::test]
async fn test_pin_and_unpin_from_file_browser() {
    let app = TestApp::new(json!({})).await;
    let args = json!({"path": "report.ipynb", "contentType": "notebook"});

    assert_eq!(
        app.commands
            .execute(command::ADD_OR_REMOVE_FAVORITE, args.clone())
            .await
            .unwrap(),
        json!(true)
    );
    assert_eq!(app.stored_favorites()[0].content_type, "notebook");
    assert_eq!(
        app.commands
            .label(command::ADD_OR_REMOVE_FAVORITE, &args)
            .await
            .unwrap(),
        "Remove Favorite"
    );

    assert_eq!(
        app.commands
            .execute(command::ADD_OR_REMOVE_FAVORITE, args)
            .await
            .unwrap(),
        json!(false)
    );
    assert!(app.stored_favorites().is_empty());
}

#[tokio::test]
async fn test_click_opens_path_in_file_browser() {
    let app = TestApp::new(json!({})).await;

    app.manager
        .handle_click(&Favorite::directory(ROOT, "projects/alpha"))
        .await
        .unwrap();
    app.manager
        .handle_click(&Favorite::directory(ROOT, ""))
        .await
        .unwrap();

    assert_eq!(app.browser.opened(), vec!["projects/alpha", "/"]);
}

#[tokio::test]
async fn test_open_favorite_label_is_full_path() {
    let app = TestApp::new(json!({})).await;
    let args = json!({"favorite": Favorite::directory(ROOT, "data")});

    assert_eq!(
        app.commands
            .label(command::OPEN_FAVORITE, &args)
            .await
            .unwrap(),
        "/r/data"
    );
}

#[tokio::test]
async fn test_rename_then_remove() {
    let app = TestApp::new(json!({"favorites": [
        {"root": ROOT, "path": "data/raw", "contentType": "directory"}
    ]}))
    .await;

    app.commands
        .execute(
            command::RENAME_FAVORITE,
            json!({"path": "data/raw", "displayName": "Raw data"}),
        )
        .await
        .unwrap();
    let favorite = &app.manager.favorites()[0];
    assert_eq!(favorite.display_name(), "Raw data");
    assert_eq!(favorite.display_dirname(), "");

    app.commands
        .execute(command::REMOVE_FAVORITE, json!({"path": "data/raw"}))
        .await
        .unwrap();
    assert!(app.manager.favorites().is_empty());
}

#[tokio::test]
async fn test_remove_requires_path() {
    let app = TestApp::new(json!({})).await;
    let err = app
        .commands
        .execute(command::REMOVE_FAVORITE, json!({}))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("path"));
}

#[tokio::test]
async fn test_unknown_command_fails() {
    let app = TestApp::new(json!({})).await;
    assert!(
        app.commands
            .execute("jupyterlab-favorites:nope", json!({}))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_clear_then_restore_via_commands() {
    let app = TestApp::with_schema_defaults(json!({"favorites": [
        {"root": ROOT, "path": "", "contentType": "directory", "default": true, "name": "Home"},
        {"root": ROOT, "path": "mine", "contentType": "directory"}
    ]}))
    .await;

    app.commands
        .execute(command::CLEAR_FAVORITES, json!({}))
        .await
        .unwrap();
    assert!(app.visible_paths().is_empty());
    assert!(!app.manager.is_visible());

    app.commands
        .execute(command::RESTORE_DEFAULTS, json!({}))
        .await
        .unwrap();
    assert_eq!(app.visible_paths(), vec![""]);
    // The overwritten document no longer pins showWidget; the schema default applies.
    assert!(app.manager.show_widget());
    assert!(app.manager.is_visible());
}
