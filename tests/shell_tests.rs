//! End-to-end behaviour of the shell: loading, reset, error channels and the
//! transient error timer.

mod common;

use common::{ACME_URL, FakeFetcher, TestShell, sample_tree};
use repo_shell::layout::{LayoutGeometry, LayoutMode};
use repo_shell::notify::{
    ErrorChannel, INVALID_URL_MESSAGE, SESSION_CORRUPTED_MESSAGE, UNKNOWN_LOAD_ERROR_MESSAGE,
};
use repo_shell::repo::FetchError;
use repo_shell::repo::github::status_error;
use repo_shell::scheduler::Clock;
use repo_shell::session::MemoryStore;
use repo_shell::shell::SESSION_SAVE_FAILED_PREFIX;
use repo_shell::state::{Action, PanelWidths, RepositoryRef};
use repo_shell_config::layout_constants::SESSION_STORAGE_KEY;
use std::time::Duration;

#[test]
fn test_load_populates_state_and_persists() {
    let mut t = TestShell::new();
    let fetcher = FakeFetcher::returning(Ok(sample_tree()));

    assert!(t.shell.load_repository(ACME_URL, &fetcher));

    let state = t.shell.state();
    assert_eq!(
        state.repository_info,
        Some(RepositoryRef::new("acme", "widget"))
    );
    assert_eq!(state.file_tree, sample_tree());
    assert!(!state.is_loading);
    assert!(state.operation_error.is_none());
    assert_eq!(
        fetcher.requests.lock().as_slice(),
        &[RepositoryRef::new("acme", "widget")]
    );

    let record = t.record().expect("session record written");
    assert_eq!(record["repoUrl"], ACME_URL);
    assert_eq!(record["repoInfo"]["owner"], "acme");
    assert_eq!(record["repoInfo"]["repo"], "widget");
    assert_eq!(record["fileTree"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_reload_restores_previous_session() {
    let mut t = TestShell::new();
    let fetcher = FakeFetcher::returning(Ok(sample_tree()));
    t.shell.load_repository(ACME_URL, &fetcher);
    let widths = PanelWidths::new([1.5, 1.5, 1.0]).unwrap();
    t.shell.dispatch(Action::SetPanelWidths(widths));

    let reloaded = TestShell::with_store(t.store.clone());
    let state = reloaded.shell.state();
    assert_eq!(state.repository_locator, ACME_URL);
    assert_eq!(
        state.repository_info,
        Some(RepositoryRef::new("acme", "widget"))
    );
    assert_eq!(state.file_tree, sample_tree());
    assert_eq!(state.panel_widths, widths);
    assert!(state.session_error.is_none());
    assert!(!state.is_loading);
}

#[test]
fn test_loading_message_names_repository() {
    let mut t = TestShell::new();
    t.shell.set_repository_locator(ACME_URL);
    let ticket = t.shell.begin_load().expect("valid locator");

    let state = t.shell.state();
    assert!(state.is_loading);
    assert!(state.loading_message.contains("acme/widget"));
    assert_eq!(ticket.generation, state.load_generation);
}

#[test]
fn test_invalid_url_never_fetches() {
    let mut t = TestShell::new();
    let fetcher = FakeFetcher::returning(Ok(sample_tree()));

    assert!(!t.shell.load_repository("not-a-url", &fetcher));

    assert_eq!(fetcher.request_count(), 0);
    let state = t.shell.state();
    assert!(!state.is_loading);
    assert_eq!(state.operation_error.as_deref(), Some(INVALID_URL_MESSAGE));
    assert!(state.repository_info.is_none());
}

#[test]
fn test_api_failure_sets_operation_error() {
    let mut t = TestShell::new();
    let fetcher = FakeFetcher::returning(Err(status_error(404)));

    assert!(!t.shell.load_repository(ACME_URL, &fetcher));

    let state = t.shell.state();
    assert!(!state.is_loading);
    assert!(state.repository_info.is_none());
    assert!(state.file_tree.is_empty());
    assert_eq!(
        state.operation_error,
        Some(status_error(404).user_message())
    );
}

#[test]
fn test_untyped_failure_uses_generic_message() {
    let mut t = TestShell::new();
    let fetcher = FakeFetcher::returning(Err(FetchError::Unknown("socket closed".to_string())));

    t.shell.load_repository(ACME_URL, &fetcher);

    assert_eq!(
        t.shell.state().operation_error.as_deref(),
        Some(UNKNOWN_LOAD_ERROR_MESSAGE)
    );
}

#[test]
fn test_new_load_replaces_previous_error() {
    let mut t = TestShell::new();
    let fetcher = FakeFetcher::new();
    fetcher.push(Err(status_error(500)));
    fetcher.push(Ok(sample_tree()));

    t.shell.load_repository(ACME_URL, &fetcher);
    assert!(t.shell.state().operation_error.is_some());

    assert!(t.shell.load_repository(ACME_URL, &fetcher));
    assert!(t.shell.state().operation_error.is_none());
    assert_eq!(t.shell.state().file_tree, sample_tree());
}

#[test]
fn test_late_result_after_reset_is_dropped() {
    let mut t = TestShell::new();
    t.shell.set_repository_locator(ACME_URL);
    let ticket = t.shell.begin_load().expect("valid locator");

    t.shell.reset();
    assert!(!t.shell.complete_load(ticket, Ok(sample_tree())));

    let state = t.shell.state();
    assert!(!state.is_loading);
    assert!(state.repository_info.is_none());
    assert!(state.file_tree.is_empty());
    assert!(state.repository_locator.is_empty());
    assert!(t.record().is_none());
}

#[test]
fn test_reset_clears_record_and_keeps_panel_widths() {
    let mut t = TestShell::new();
    let fetcher = FakeFetcher::returning(Ok(sample_tree()));
    t.shell.load_repository(ACME_URL, &fetcher);
    let widths = PanelWidths::new([1.0, 1.0, 2.0]).unwrap();
    t.shell.dispatch(Action::SetPanelWidths(widths));
    assert!(t.store.contains(SESSION_STORAGE_KEY));

    t.shell.reset();

    assert!(!t.store.contains(SESSION_STORAGE_KEY));
    let state = t.shell.state();
    assert!(state.repository_info.is_none());
    assert!(state.repository_locator.is_empty());
    assert_eq!(state.panel_widths, widths);

    // nothing written back, so a reload starts from defaults
    let reloaded = TestShell::with_store(t.store.clone());
    assert!(reloaded.shell.state().repository_info.is_none());
    assert_eq!(reloaded.shell.state().panel_widths, PanelWidths::default());
}

#[test]
fn test_corrupt_record_reports_session_error() {
    let store = MemoryStore::new();
    store.insert_raw(SESSION_STORAGE_KEY, "{\"repoUrl\": ");

    let t = TestShell::with_store(store);

    let state = t.shell.state();
    assert_eq!(state.session_error.as_deref(), Some(SESSION_CORRUPTED_MESSAGE));
    assert!(state.repository_info.is_none());
    assert_eq!(state.panel_widths, PanelWidths::default());
    let banner = t.shell.visible_error().expect("banner shown");
    assert_eq!(banner.channel, ErrorChannel::Session);
}

#[test]
fn test_clear_error_follows_banner_priority() {
    let store = MemoryStore::new();
    store.insert_raw(SESSION_STORAGE_KEY, "garbage");
    let mut t = TestShell::with_store(store);
    let fetcher = FakeFetcher::returning(Err(status_error(404)));
    t.shell.load_repository(ACME_URL, &fetcher);
    t.shell
        .dispatch(Action::SetTransientError(Some("notice".to_string())));

    assert_eq!(t.shell.clear_error(), Some(ErrorChannel::Session));
    assert!(t.shell.state().session_error.is_none());
    assert!(t.shell.state().operation_error.is_some());

    assert_eq!(t.shell.clear_error(), Some(ErrorChannel::Transient));
    assert!(t.shell.state().transient_error.is_none());

    // dismissing the load error resets the shell
    assert_eq!(t.shell.clear_error(), Some(ErrorChannel::Operation));
    assert!(t.shell.state().operation_error.is_none());
    assert!(t.shell.state().repository_locator.is_empty());
    assert!(t.record().is_none());

    assert_eq!(t.shell.clear_error(), None);
}

#[test]
fn test_transient_error_dismissed_after_timeout() {
    let mut t = TestShell::new();
    let timeout = t.shell.options().transient_error_timeout;
    t.shell
        .dispatch(Action::SetTransientError(Some("Saved elsewhere".to_string())));

    t.clock.advance(timeout - Duration::from_millis(1));
    assert!(!t.shell.tick());
    assert!(t.shell.state().transient_error.is_some());

    t.clock.advance(Duration::from_millis(1));
    assert!(t.shell.tick());
    assert!(t.shell.state().transient_error.is_none());
    assert!(t.shell.transient_deadline().is_none());
}

#[test]
fn test_replacing_transient_error_restarts_timer() {
    let mut t = TestShell::new();
    let timeout = t.shell.options().transient_error_timeout;
    t.shell
        .dispatch(Action::SetTransientError(Some("first".to_string())));
    t.clock.advance(Duration::from_millis(3000));
    t.shell
        .dispatch(Action::SetTransientError(Some("second".to_string())));
    let restarted_at = t.clock.now();

    t.clock.advance(Duration::from_millis(2500));
    assert!(!t.shell.tick());
    assert_eq!(t.shell.state().transient_error.as_deref(), Some("second"));

    assert_eq!(t.shell.transient_deadline(), Some(restarted_at + timeout));
    t.clock.advance(timeout);
    assert!(t.shell.tick());
    assert!(t.shell.state().transient_error.is_none());
}

#[test]
fn test_failed_write_surfaces_transient_error() {
    let store = MemoryStore::new();
    store.set_fail_writes(true);
    let mut t = TestShell::with_store(store);

    t.shell.set_repository_locator(ACME_URL);

    let state = t.shell.state();
    assert_eq!(state.repository_locator, ACME_URL);
    let message = state.transient_error.as_deref().expect("transient error set");
    assert!(message.starts_with(SESSION_SAVE_FAILED_PREFIX));
    assert!(t.shell.transient_deadline().is_some());
    assert_eq!(
        t.shell.visible_error().map(|b| b.channel),
        Some(ErrorChannel::Transient)
    );
}

#[test]
fn test_failed_record_removal_surfaces_transient_error() {
    let mut t = TestShell::new();
    t.shell.set_repository_locator(ACME_URL);
    t.store.set_fail_writes(true);

    t.shell.reset();

    assert!(t.shell.state().repository_locator.is_empty());
    assert!(t.shell.state().transient_error.is_some());
}

#[test]
fn test_narrow_viewport_uses_drawer_and_blocks_resize() {
    let mut t = TestShell::new();
    assert_eq!(t.shell.layout_mode(), LayoutMode::Grid);

    assert!(t.shell.on_viewport_resize(500.0));
    assert_eq!(t.shell.layout_mode(), LayoutMode::Drawer);
    assert_eq!(t.shell.geometry(), LayoutGeometry::Drawer { open: false });
    assert!(!t.shell.begin_resize(0, 300.0));
    assert!(!t.shell.begin_resize_at(302.0, 10.0));

    assert!(t.shell.toggle_drawer());
    assert_eq!(t.shell.geometry(), LayoutGeometry::Drawer { open: true });

    assert!(t.shell.on_viewport_resize(1024.0));
    assert_eq!(
        t.shell.geometry(),
        LayoutGeometry::Grid {
            template: "1fr 4px 2fr 4px 1fr".to_string()
        }
    );
}

#[test]
fn test_leaving_grid_cancels_drag() {
    let mut t = TestShell::new();
    assert!(t.shell.begin_resize(0, 300.0));
    t.shell.pointer_moved(400.0);

    t.shell.on_viewport_resize(600.0);

    assert!(!t.shell.is_dragging());
    assert!(!t.shell.on_frame());
    assert_eq!(t.shell.state().panel_widths, PanelWidths::default());
}
