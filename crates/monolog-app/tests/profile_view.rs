mod common;

use common::{StubApi, test_profile};
use monolog_app::profile::{LOAD_ERROR, ProfileState, ProfileView, SAVE_ERROR};

#[tokio::test]
async fn shows_loading_until_mounted_then_fields() {
    let api = StubApi::new(test_profile());
    let mut view = ProfileView::new(&api);

    assert!(view.is_loading());
    assert!(view.render().contains("Loading..."));

    view.mount().await;

    let page = view.render();
    assert!(page.contains("Test User"));
    assert!(page.contains("test@example.com"));
    assert!(page.contains("[Edit]"));
    assert!(!page.contains("Loading"));
}

#[tokio::test]
async fn fetch_happens_once_per_mount() {
    let api = StubApi::new(test_profile());
    let mut view = ProfileView::new(&api);

    view.mount().await;
    view.mount().await;

    assert_eq!(api.fetches(), 1);
}

#[tokio::test]
async fn server_error_shows_error_instead_of_fields() {
    let api = StubApi::failing_fetch();
    let mut view = ProfileView::new(&api);

    view.mount().await;

    assert_eq!(view.state(), &ProfileState::Error(LOAD_ERROR.to_string()));
    let page = view.render();
    assert!(page.to_lowercase().contains("error"));
    assert!(!page.contains("Test User"));
    assert!(!view.edit());
}

#[tokio::test]
async fn edit_and_save_shows_the_echoed_name() {
    let api = StubApi::new(test_profile());
    let mut view = ProfileView::new(&api);
    view.mount().await;

    assert!(view.edit());
    assert!(view.render().contains("Name: Test User"));
    view.set_draft("  Updated Name  ");
    assert!(view.save().await);

    // The stub trims like the server does; the view shows whatever came back.
    assert_eq!(view.profile().unwrap().name, "Updated Name");
    assert_eq!(
        view.profile().unwrap().email.as_deref(),
        Some("test@example.com")
    );
    assert!(matches!(view.state(), ProfileState::Loaded(_)));
    assert!(view.render().contains("Updated Name"));
}

#[tokio::test]
async fn cancel_discards_the_draft() {
    let api = StubApi::new(test_profile());
    let mut view = ProfileView::new(&api);
    view.mount().await;

    view.edit();
    view.set_draft("Someone Else");
    assert!(view.cancel());

    assert_eq!(view.state(), &ProfileState::Loaded(test_profile()));
    assert!(view.render().contains("Test User"));
    assert_eq!(api.updates(), 0);
}

#[tokio::test]
async fn failed_save_stays_in_edit_mode_with_error() {
    let api = StubApi::failing_update();
    let mut view = ProfileView::new(&api);
    view.mount().await;
    view.edit();
    view.set_draft("Updated Name");

    assert!(!view.save().await);

    match view.state() {
        ProfileState::Editing {
            draft, save_error, ..
        } => {
            assert_eq!(draft, "Updated Name");
            assert_eq!(save_error.as_deref(), Some(SAVE_ERROR));
        }
        other => panic!("expected editing, got {other:?}"),
    }
    assert!(view.render().contains(SAVE_ERROR));
    assert_eq!(view.profile().unwrap().name, "Test User");
}

#[tokio::test]
async fn edit_actions_are_ignored_outside_their_states() {
    let api = StubApi::new(test_profile());
    let mut view = ProfileView::new(&api);

    assert!(!view.edit());
    assert!(!view.set_draft("x"));
    assert!(!view.cancel());
    assert!(!view.save().await);
    assert_eq!(api.updates(), 0);
}
