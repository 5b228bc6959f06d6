//! Integration tests for the favorites menu and panel visibility.

mod helpers;

use serde_json::{Value, json};

use favorites_core::ids::command;
use favorites_core::traits::command::CommandExecutor;
use favorites_entity::{Favorite, FavoritesSettings, MenuEntry};
use favorites_service::VisibilityState;

use helpers::{ROOT, TestApp};

/// Execute a menu row the way the host menu does.
async fn run_row(app: &TestApp, command_id: &str, args: Value) {
    assert!(app.commands.is_visible(command_id, &args).await.unwrap());
    app.commands.execute(command_id, args).await.unwrap();
}

fn labels(app: &TestApp) -> Vec<String> {
    app.manager
        .menu()
        .items
        .iter()
        .map(|e| e.label().unwrap_or("---").to_string())
        .collect()
}

#[tokio::test]
async fn test_menu_without_favorites() {
    let app = TestApp::new(json!({"showWidget": true})).await;

    assert_eq!(
        labels(&app),
        vec!["Hide Favorites Widget", "Restore Defaults", "Clear Favorites"]
    );
    assert_eq!(app.manager.visibility(), VisibilityState::Hidden);
}

#[tokio::test]
async fn test_menu_lists_visible_favorites_in_display_order() {
    let app = TestApp::new(json!({
        "showWidget": false,
        "favorites": [
            {"root": ROOT, "path": "z.md", "contentType": "file"},
            {"root": ROOT, "path": "data", "contentType": "directory"},
            {"root": ROOT, "path": "gone", "contentType": "directory", "default": true, "hidden": true}
        ]
    }))
    .await;

    assert_eq!(
        labels(&app),
        vec![
            "/r/data",
            "/r/z.md",
            "---",
            "Show Favorites Widget",
            "Restore Defaults",
            "Clear Favorites",
        ]
    );
}

#[tokio::test]
async fn test_menu_rebuilt_after_each_mutation() {
    let app = TestApp::new(json!({"showWidget": true})).await;

    app.manager
        .add_favorite(Favorite::directory(ROOT, "data"))
        .await
        .unwrap();
    assert_eq!(app.manager.menu().len(), 5);
    assert_eq!(app.manager.visibility(), VisibilityState::Visible);

    app.manager
        .save_settings(FavoritesSettings::show_widget(false))
        .await
        .unwrap();
    assert_eq!(labels(&app)[2], "Show Favorites Widget");
    assert_eq!(app.manager.visibility(), VisibilityState::Hidden);
}

#[tokio::test]
async fn test_menu_rows_execute_through_registry() {
    let app = TestApp::new(json!({
        "showWidget": true,
        "favorites": [{"root": ROOT, "path": "data", "contentType": "directory"}]
    }))
    .await;

    let menu = app.manager.menu();
    for entry in [&menu.items[0], &menu.items[2]] {
        let MenuEntry::Command {
            command_id, args, ..
        } = entry
        else {
            panic!("expected a command row");
        };
        run_row(&app, command_id, args.clone()).await;
    }

    assert_eq!(app.browser.opened(), vec!["data"]);
    assert!(!app.manager.show_widget());
}

#[tokio::test]
async fn test_toggle_row_label_follows_preference() {
    let app = TestApp::new(json!({
        "showWidget": true,
        "favorites": [{"root": ROOT, "path": "data", "contentType": "directory"}]
    }))
    .await;

    let args = json!({"showWidget": app.manager.show_widget()});
    assert_eq!(
        app.commands
            .label(command::TOGGLE_FAVORITES_WIDGET, &args)
            .await
            .unwrap(),
        "Hide Favorites Widget"
    );
}
