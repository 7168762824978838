//! The application shell: owns the state and every side effect around it.
//!
//! Components never mutate [`ApplicationState`] directly. They call into the
//! shell, which runs the reducer and then performs the follow-up work the new
//! state calls for:
//!
//! - session write-back when a persisted field changed (never after a reset)
//! - starting, restarting or cancelling the transient-error dismiss timer
//! - committing coalesced drag frames as panel widths
//! - switching between the grid and the drawer layout
//!
//! Time is read from an injected [`Clock`]; the host event loop calls
//! [`Shell::tick`] and [`Shell::on_frame`] to let due timers fire.

use crate::layout::{
    DividerRect, DragController, LayoutGeometry, LayoutMode, LayoutSelector, PanelBounds,
    boundary_at, layout_panels, panel_area_width, resize_panels,
};
use crate::notify::{
    ErrorBanner, ErrorChannel, ErrorNotifier, INVALID_URL_MESSAGE, visible_error,
};
use crate::repo::{FetchError, RepoFetcher, parse_github_url};
use crate::scheduler::{Clock, SystemClock};
use crate::session::{PersistenceStore, SessionPersistence, persisted_fields_changed};
use crate::state::{Action, ApplicationState, FileNode, PanelWidths, RepositoryRef, reduce};
use repo_shell_config::Config;
use repo_shell_config::layout_constants::{
    DIVIDER_HIT_WIDTH_PX, DRAWER_BREAKPOINT_PX, MIN_PANEL_WIDTH_PX, RESIZE_HANDLE_WIDTH_PX,
    TRANSIENT_ERROR_TIMEOUT,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Prefix of the transient notice raised when a session write fails
pub const SESSION_SAVE_FAILED_PREFIX: &str = "Could not save session";

/// Tunables the shell needs from the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ShellOptions {
    pub min_panel_width_px: f64,
    pub default_panel_widths: PanelWidths,
    pub drawer_breakpoint_px: f64,
    pub resize_handle_width_px: f64,
    pub divider_hit_width_px: f64,
    pub transient_error_timeout: Duration,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            min_panel_width_px: MIN_PANEL_WIDTH_PX,
            default_panel_widths: PanelWidths::default(),
            drawer_breakpoint_px: DRAWER_BREAKPOINT_PX,
            resize_handle_width_px: RESIZE_HANDLE_WIDTH_PX,
            divider_hit_width_px: DIVIDER_HIT_WIDTH_PX,
            transient_error_timeout: TRANSIENT_ERROR_TIMEOUT,
        }
    }
}

impl ShellOptions {
    pub fn from_config(config: &Config) -> Self {
        let default_panel_widths = PanelWidths::new(config.default_panel_widths)
            .unwrap_or_else(|| {
                log::warn!(
                    "Invalid default_panel_widths {:?} in config, using built-in ratio",
                    config.default_panel_widths
                );
                PanelWidths::default()
            });
        Self {
            min_panel_width_px: config.min_panel_width_px,
            default_panel_widths,
            drawer_breakpoint_px: config.drawer_breakpoint_px,
            resize_handle_width_px: config.resize_handle_width_px,
            divider_hit_width_px: config.divider_hit_width_px,
            transient_error_timeout: config.transient_error_timeout(),
        }
    }

    /// Extra slop around a resize handle for pointer hit testing
    fn divider_hit_padding(&self) -> f64 {
        ((self.divider_hit_width_px - self.resize_handle_width_px) / 2.0).max(0.0)
    }
}

/// Identifies one load attempt; results are accepted only while it is current
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub repository: RepositoryRef,
}

pub struct Shell {
    state: ApplicationState,
    options: ShellOptions,
    session: SessionPersistence,
    notifier: ErrorNotifier,
    layout: LayoutSelector,
    drag: DragController,
    container: PanelBounds,
    clock: Arc<dyn Clock>,
}

impl Shell {
    /// Hydrate from `store` using wall-clock time
    pub fn new(store: Box<dyn PersistenceStore>, options: ShellOptions) -> Self {
        Self::with_clock(store, options, Arc::new(SystemClock))
    }

    pub fn with_clock(
        store: Box<dyn PersistenceStore>,
        options: ShellOptions,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = SessionPersistence::new(store);
        let state = session.hydrate(options.default_panel_widths);
        if let Some(message) = &state.session_error {
            log::warn!("Starting with session error: {}", message);
        }
        Self {
            state,
            notifier: ErrorNotifier::new(options.transient_error_timeout),
            layout: LayoutSelector::new(options.drawer_breakpoint_px),
            drag: DragController::new(),
            container: PanelBounds::default(),
            session,
            options,
            clock,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Run `action` through the reducer and carry out its side effects
    pub fn dispatch(&mut self, action: Action) {
        match &action {
            // An explicit set replaces the drag's starting point
            Action::SetPanelWidths(widths) => {
                self.drag.rebase(*widths);
            }
            Action::ResetPanelWidths(_) => self.drag.cancel(),
            _ => {}
        }
        self.apply(action);
    }

    /// Reduce and run side effects, leaving any drag untouched
    fn apply(&mut self, action: Action) {
        let now = self.clock.now();
        log::debug!("dispatch {}", action.name());

        let is_reset = matches!(action, Action::Reset);
        let sets_transient = matches!(action, Action::SetTransientError(Some(_)));

        let next = reduce(&self.state, action);
        let prev = std::mem::replace(&mut self.state, next);

        // Every new message restarts the timer, even if the text is unchanged
        if sets_transient {
            self.notifier.transient_set(now);
        } else if prev.transient_error.is_some() && self.state.transient_error.is_none() {
            self.notifier.cancel();
        }

        if is_reset {
            if let Err(e) = self.session.clear() {
                log::error!("Failed to remove saved session: {}", e);
                self.dispatch(Action::SetTransientError(Some(format!(
                    "Could not clear saved session: {e}"
                ))));
            }
        } else if persisted_fields_changed(&prev, &self.state) {
            self.persist();
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.session.save(&self.state) {
            log::error!("Failed to save session: {}", e);
            self.dispatch(Action::SetTransientError(Some(format!(
                "{SESSION_SAVE_FAILED_PREFIX}: {e}"
            ))));
        }
    }

    pub fn set_repository_locator(&mut self, locator: impl Into<String>) {
        self.dispatch(Action::SetRepositoryLocator(locator.into()));
    }

    /// Validate the current locator and start a load.
    ///
    /// An unparseable locator raises the operation error and returns `None`
    /// without starting anything.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        let Some(repository) = parse_github_url(&self.state.repository_locator) else {
            log::info!(
                "Rejected repository locator {:?}",
                self.state.repository_locator
            );
            self.dispatch(Action::SetOperationError(Some(
                INVALID_URL_MESSAGE.to_string(),
            )));
            return None;
        };

        self.dispatch(Action::StartLoad {
            message: format!("Loading {}…", repository.full_name()),
        });
        log::info!(
            "Loading {} (generation {})",
            repository.full_name(),
            self.state.load_generation
        );
        Some(LoadTicket {
            generation: self.state.load_generation,
            repository,
        })
    }

    /// Deliver the outcome of a load.
    ///
    /// Returns false when the ticket is stale (a newer load or a reset
    /// happened since) and the result was dropped.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<FileNode>, FetchError>,
    ) -> bool {
        let current = self.state.is_loading && self.state.load_generation == ticket.generation;
        if !current {
            log::debug!(
                "Dropping result for {} from generation {} (current {})",
                ticket.repository.full_name(),
                ticket.generation,
                self.state.load_generation
            );
        }

        let action = match result {
            Ok(file_tree) => {
                if current {
                    log::info!(
                        "Loaded {} ({} entries)",
                        ticket.repository.full_name(),
                        file_tree.len()
                    );
                }
                Action::LoadSucceeded {
                    generation: ticket.generation,
                    repository: ticket.repository,
                    file_tree,
                }
            }
            Err(e) => {
                if current {
                    log::warn!("Load of {} failed: {}", ticket.repository.full_name(), e);
                }
                Action::LoadFailed {
                    generation: ticket.generation,
                    message: e.user_message(),
                }
            }
        };
        self.dispatch(action);
        current
    }

    /// Set the locator and run a complete load with `fetcher`
    pub fn load_repository(&mut self, locator: &str, fetcher: &dyn RepoFetcher) -> bool {
        self.set_repository_locator(locator);
        let Some(ticket) = self.begin_load() else {
            return false;
        };
        let result = fetcher.fetch_repo_tree(&ticket.repository);
        let ok = result.is_ok();
        self.complete_load(ticket, result) && ok
    }

    /// Drop the repository and errors and forget the saved session
    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    /// Dismiss whatever the banner is showing.
    ///
    /// Session and transient errors are simply cleared; dismissing an
    /// operation error resets the shell.
    pub fn clear_error(&mut self) -> Option<ErrorChannel> {
        let channel = visible_error(&self.state)?.channel;
        match channel {
            ErrorChannel::Session => self.dispatch(Action::ClearSessionError),
            ErrorChannel::Transient => self.dispatch(Action::SetTransientError(None)),
            ErrorChannel::Operation => self.reset(),
        }
        Some(channel)
    }

    pub fn visible_error(&self) -> Option<ErrorBanner> {
        visible_error(&self.state)
    }

    /// When the transient error will be dismissed, if one is showing
    pub fn transient_deadline(&self) -> Option<Instant> {
        self.notifier.dismiss_deadline()
    }

    /// Fire the dismiss timer if it is due. Returns true if it fired.
    pub fn tick(&mut self) -> bool {
        if self.notifier.poll(self.clock.now()) {
            log::debug!("Transient error timed out");
            self.dispatch(Action::SetTransientError(None));
            return true;
        }
        false
    }

    /// Record the measured workspace rectangle
    pub fn set_container(&mut self, container: PanelBounds) {
        self.container = container;
    }

    pub fn container(&self) -> PanelBounds {
        self.container
    }

    fn panel_area_width(&self) -> f64 {
        panel_area_width(&self.container, self.options.resize_handle_width_px)
    }

    /// Panel and handle rectangles for the grid layout
    pub fn panel_layout(&self) -> Option<([PanelBounds; 3], [DividerRect; 2])> {
        if self.layout.mode() != LayoutMode::Grid {
            return None;
        }
        Some(layout_panels(
            &self.state.panel_widths,
            self.container,
            self.options.resize_handle_width_px,
        ))
    }

    pub fn geometry(&self) -> LayoutGeometry {
        self.layout
            .geometry(&self.state.panel_widths, self.options.resize_handle_width_px)
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// React to a new viewport width; leaving the grid abandons any drag
    pub fn on_viewport_resize(&mut self, viewport_width: f64) -> bool {
        let changed = self.layout.on_viewport_resize(viewport_width);
        if changed && !self.layout.resize_enabled() && self.drag.is_dragging() {
            log::debug!("Drawer layout active, cancelling drag");
            self.drag.cancel();
        }
        changed
    }

    pub fn toggle_drawer(&mut self) -> bool {
        self.layout.toggle_drawer()
    }

    pub fn drawer_open(&self) -> bool {
        self.layout.drawer_open()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Start dragging `boundary`. Not available in the drawer layout.
    pub fn begin_resize(&mut self, boundary: usize, pointer_x: f64) -> bool {
        if !self.layout.resize_enabled() {
            return false;
        }
        self.drag.begin(boundary, pointer_x, self.state.panel_widths)
    }

    /// Start dragging whichever handle is under the pointer
    pub fn begin_resize_at(&mut self, x: f64, y: f64) -> bool {
        let Some((_, dividers)) = self.panel_layout() else {
            return false;
        };
        match boundary_at(&dividers, x, y, self.options.divider_hit_padding()) {
            Some(boundary) => self.begin_resize(boundary, x),
            None => false,
        }
    }

    pub fn pointer_moved(&mut self, pointer_x: f64) -> bool {
        let now = self.clock.now();
        self.drag.pointer_moved(pointer_x, now)
    }

    /// Commit the pending drag frame. Returns true if the widths changed.
    pub fn on_frame(&mut self) -> bool {
        let now = self.clock.now();
        let resized = self.drag.on_frame(
            now,
            self.panel_area_width(),
            self.options.min_panel_width_px,
        );
        match resized {
            // Frame results derive from the drag's own snapshot; no rebase
            Some(widths) if widths != self.state.panel_widths => {
                self.apply(Action::SetPanelWidths(widths));
                true
            }
            _ => false,
        }
    }

    /// Finish the drag, flushing any pending frame
    pub fn end_resize(&mut self) -> bool {
        let resized = self
            .drag
            .end(self.panel_area_width(), self.options.min_panel_width_px);
        self.commit_widths(resized)
    }

    /// Move `boundary` by `delta_px` in one step, outside of any drag
    pub fn resize_boundary(&mut self, boundary: usize, delta_px: f64) -> bool {
        if !self.layout.resize_enabled() {
            return false;
        }
        let resized = resize_panels(
            &self.state.panel_widths,
            boundary,
            delta_px,
            self.panel_area_width(),
            self.options.min_panel_width_px,
        );
        self.commit_widths(resized)
    }

    pub fn reset_panel_widths(&mut self) {
        self.dispatch(Action::ResetPanelWidths(self.options.default_panel_widths));
    }

    fn commit_widths(&mut self, resized: Option<PanelWidths>) -> bool {
        match resized {
            Some(widths) if widths != self.state.panel_widths => {
                self.dispatch(Action::SetPanelWidths(widths));
                true
            }
            _ => false,
        }
    }

    /// Cancel every pending timer and frame; nothing fires afterwards
    pub fn unmount(&mut self) {
        self.notifier.cancel();
        self.drag.cancel();
        log::debug!("Shell unmounted");
    }
}
