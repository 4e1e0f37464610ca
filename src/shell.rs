//! The shell context: windows, workspaces, focus order and overlays.
//!
//! One `Shell` is constructed per process and handed to whatever drives it.
//! All state changes go through `&mut Shell`, either via the individual
//! operations or through [`Shell::update`], which dispatches a [`Command`].

use crossbeam_channel::{Receiver, Sender};
use ratatui::layout::Size;
use slotmap::SlotMap;

use crate::command::{Command, Outcome, PointerEvent, PointerOutcome, ShellEvent};
use crate::config::ShellConfig;
use crate::constants::{CASCADE_ORIGIN, CASCADE_STEP, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::content::{Content, ContentContext, ContentFactory, ContentKind};
use crate::error::{ShellError, ShellResult};
use crate::layout::floating::{HeaderAction, header_action_at, in_resize_grip};
use crate::overlay::{self, OverlayLayout, OverlayMetrics};
use crate::window::{FloatRect, FocusRing, GestureKind, Point, Window, WindowId};
use crate::workspace::{WorkspaceListing, WorkspaceManager};

pub struct Shell {
    windows: SlotMap<WindowId, Window>,
    workspaces: WorkspaceManager,
    ring: FocusRing<WindowId>,
    input_focus: Option<WindowId>,
    // window whose gesture is in progress; single pointer, so at most one
    grab: Option<WindowId>,
    factory: ContentFactory,
    metrics: OverlayMetrics,
    display: Size,
    overlays: OverlayLayout,
    subscribers: Vec<Sender<ShellEvent>>,
}

impl Shell {
    pub fn new(workspace_count: usize, metrics: OverlayMetrics, display: Size) -> Self {
        Self {
            windows: SlotMap::with_key(),
            workspaces: WorkspaceManager::new(workspace_count),
            ring: FocusRing::new(),
            input_focus: None,
            grab: None,
            factory: ContentFactory::default(),
            metrics,
            display,
            overlays: overlay::compute(display, &metrics),
            subscribers: Vec::new(),
        }
    }

    pub fn from_config(config: &ShellConfig, display: Size) -> Self {
        Self::new(config.workspace_count, config.overlay, display)
    }

    pub fn with_factory(mut self, factory: ContentFactory) -> Self {
        self.factory = factory;
        self
    }

    /// Receive lifecycle events. Events are delivered synchronously, in the
    /// order the operations happen.
    pub fn subscribe(&mut self) -> Receiver<ShellEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: ShellEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    pub fn window(&self, id: WindowId) -> ShellResult<&Window> {
        self.windows.get(id).ok_or(ShellError::StaleHandle(id))
    }

    pub fn window_mut(&mut self, id: WindowId) -> ShellResult<&mut Window> {
        self.windows.get_mut(id).ok_or(ShellError::StaleHandle(id))
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn workspaces(&self) -> &WorkspaceManager {
        &self.workspaces
    }

    pub fn active_workspace(&self) -> usize {
        self.workspaces.active()
    }

    /// Window receiving keyboard input.
    pub fn focused(&self) -> Option<WindowId> {
        self.input_focus
    }

    /// Global focus order, most recently focused first.
    pub fn focus_order(&self) -> Vec<WindowId> {
        self.ring.iter().collect()
    }

    pub fn grabbed(&self) -> Option<WindowId> {
        self.grab
    }

    pub fn metrics(&self) -> &OverlayMetrics {
        &self.metrics
    }

    pub fn display(&self) -> Size {
        self.display
    }

    pub fn overlays(&self) -> OverlayLayout {
        self.overlays
    }

    /// Open a window of `kind`, built by the content factory.
    pub fn launch(&mut self, kind: ContentKind, workspace: Option<usize>) -> ShellResult<WindowId> {
        self.workspaces
            .check_index(workspace.unwrap_or(self.workspaces.active()))?;
        let content = self.factory.create(kind)?;
        self.open_window(content, workspace)
    }

    /// Open a window hosting `content` in `workspace` (default: active) and
    /// focus it.
    pub fn open_window(
        &mut self,
        mut content: Box<dyn Content>,
        workspace: Option<usize>,
    ) -> ShellResult<WindowId> {
        let index = self
            .workspaces
            .check_index(workspace.unwrap_or(self.workspaces.active()))?;
        let bounds = self.cascade_bounds(index);
        content.mount(&ContentContext::new(true));
        let id = self.windows.insert(Window::new(content, bounds, index));
        self.workspaces.add_window(id, Some(index))?;
        tracing::debug!(window_id = ?id, workspace = index, %bounds, "opened window");
        self.emit(ShellEvent::WindowOpened(id));
        self.raise(id);
        Ok(id)
    }

    fn cascade_bounds(&self, index: usize) -> FloatRect {
        let area = overlay::content_area(self.display, &self.metrics);
        let n = self
            .workspaces
            .container(index)
            .map_or(0, |c| c.len()) as i32;
        let offset = CASCADE_ORIGIN + CASCADE_STEP * n;
        FloatRect::new(
            area.x as i32 + offset,
            area.y as i32 + offset,
            DEFAULT_WINDOW_WIDTH,
            DEFAULT_WINDOW_HEIGHT,
        )
    }

    /// Place a window explicitly, e.g. when a host restores a saved layout.
    pub fn set_window_bounds(&mut self, id: WindowId, bounds: FloatRect) -> ShellResult<()> {
        self.window_mut(id)?.set_bounds(bounds);
        Ok(())
    }

    /// Close `id`: notify subscribers, then drop the window and every
    /// reference to it. The handle is unusable afterwards.
    pub fn close(&mut self, id: WindowId) -> ShellResult<()> {
        let index = self.window(id)?.workspace();
        tracing::debug!(window_id = ?id, "closing window");
        if self.grab == Some(id) {
            self.end_gesture();
        }
        self.emit(ShellEvent::WindowClosed(id));
        self.workspaces.remove_window(id, index);
        self.ring.remove(id);
        if let Some(window) = self.windows.remove(id) {
            window.into_content().unmount();
        }
        if self.input_focus == Some(id) {
            self.input_focus = None;
            self.select_fallback_focus();
        }
        Ok(())
    }

    /// Hide `id` without removing it from its workspace or the focus ring.
    pub fn minimize(&mut self, id: WindowId) -> ShellResult<()> {
        let window = self.window_mut(id)?;
        if window.is_minimized() {
            return Ok(());
        }
        window.set_minimized(true);
        tracing::debug!(window_id = ?id, "minimized window");
        if self.grab == Some(id) {
            self.end_gesture();
        }
        if self.input_focus == Some(id) {
            self.input_focus = None;
            self.select_fallback_focus();
        }
        Ok(())
    }

    pub fn restore(&mut self, id: WindowId) -> ShellResult<()> {
        self.window_mut(id)?.set_minimized(false);
        Ok(())
    }

    /// Maximize into the content area below the panel, or restore the
    /// bounds saved by the previous maximize. A minimized window is shown
    /// again first, since the window is raised either way.
    pub fn toggle_maximize(&mut self, id: WindowId) -> ShellResult<()> {
        let target = overlay::maximized_bounds(self.display, &self.metrics);
        let window = self.window_mut(id)?;
        window.set_minimized(false);
        window.toggle_maximize(target);
        tracing::debug!(
            window_id = ?id,
            maximized = window.is_maximized(),
            bounds = %window.bounds(),
            "toggled maximize"
        );
        self.raise(id);
        Ok(())
    }

    /// Raise `id` in its workspace, move it to the front of the focus ring
    /// and give it input focus. Minimized windows are restored first.
    pub fn focus(&mut self, id: WindowId) -> ShellResult<()> {
        if self.window(id)?.is_minimized() {
            self.restore(id)?;
        }
        self.raise(id);
        Ok(())
    }

    fn raise(&mut self, id: WindowId) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        self.workspaces.bring_to_front(id, window.workspace());
        self.ring.raise(id);
        if self.input_focus != Some(id) {
            tracing::debug!(window_id = ?id, "focused window");
        }
        self.input_focus = Some(id);
    }

    // After the focused window goes away, hand focus to the most recently
    // focused window that is still visible in the active workspace.
    fn select_fallback_focus(&mut self) {
        let active = self.workspaces.active();
        let next = self.ring.iter().find(|id| {
            self.windows
                .get(*id)
                .is_some_and(|w| w.workspace() == active && !w.is_minimized())
        });
        if let Some(id) = next {
            self.raise(id);
        }
    }

    /// Rotate the focus ring one step forward and focus the new front,
    /// switching to its workspace when it lives elsewhere.
    pub fn cycle_next(&mut self) -> ShellResult<Option<WindowId>> {
        self.cycle(true)
    }

    pub fn cycle_prev(&mut self) -> ShellResult<Option<WindowId>> {
        self.cycle(false)
    }

    fn cycle(&mut self, forward: bool) -> ShellResult<Option<WindowId>> {
        let Some(next) = self.ring.rotate(forward) else {
            return Ok(None);
        };
        let workspace = self.window(next)?.workspace();
        self.focus(next)?;
        if workspace != self.workspaces.active() {
            self.switch_to(workspace);
        }
        Ok(Some(next))
    }

    /// Show workspace `index mod N`. Only visibility changes.
    pub fn switch_to(&mut self, index: usize) -> usize {
        let previous = self.workspaces.active();
        let active = self.workspaces.switch_to(index);
        if active != previous {
            tracing::debug!(from = previous, to = active, "switched workspace");
            self.emit(ShellEvent::WorkspaceSwitched(active));
        }
        active
    }

    pub fn switch_by(&mut self, delta: isize) -> usize {
        let target = {
            let count = self.workspaces.count() as isize;
            (self.workspaces.active() as isize + delta).rem_euclid(count) as usize
        };
        self.switch_to(target)
    }

    pub fn list_windows(&self) -> Vec<WorkspaceListing> {
        self.workspaces.list_windows()
    }

    /// Record a new display size and recompute the overlays.
    pub fn display_resized(&mut self, size: Size) -> OverlayLayout {
        self.display = size;
        self.overlays = overlay::compute(size, &self.metrics);
        tracing::debug!(width = size.width, height = size.height, "display resized");
        self.overlays
    }

    /// Topmost visible window of the active workspace under `point`.
    pub fn window_at(&self, point: Point) -> Option<WindowId> {
        self.workspaces
            .active_container()
            .windows()
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.windows
                    .get(*id)
                    .is_some_and(|w| !w.is_minimized() && w.bounds().contains(point))
            })
    }

    /// Start a drag or resize on `id` anchored at `anchor`. The window is
    /// raised as a side effect.
    pub fn begin_gesture(
        &mut self,
        id: WindowId,
        kind: GestureKind,
        anchor: Point,
    ) -> ShellResult<()> {
        if let Some(current) = self.grab {
            return Err(ShellError::GestureInProgress(current));
        }
        let window = self.window_mut(id)?;
        let initial = window.bounds();
        if !window.session_mut().begin(kind, anchor, initial) {
            return Err(ShellError::GestureInProgress(id));
        }
        self.grab = Some(id);
        tracing::debug!(window_id = ?id, ?kind, "gesture started");
        self.focus(id)
    }

    /// Drop any gesture in progress. Returns whether one was running.
    pub fn end_gesture(&mut self) -> bool {
        let Some(id) = self.grab.take() else {
            return false;
        };
        let ended = self
            .windows
            .get_mut(id)
            .is_some_and(|w| w.session_mut().end());
        tracing::debug!(window_id = ?id, "gesture ended");
        ended
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> ShellResult<PointerOutcome> {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => {
                let Some(id) = self.grab else {
                    return Ok(PointerOutcome::Passed {
                        target: self.window_at(point),
                    });
                };
                let window = self.window_mut(id)?;
                if let Some(bounds) = window.session().track(point) {
                    window.set_bounds(bounds);
                }
                Ok(PointerOutcome::Consumed)
            }
            PointerEvent::Up(point) => {
                if self.end_gesture() {
                    Ok(PointerOutcome::Consumed)
                } else {
                    Ok(PointerOutcome::Passed {
                        target: self.window_at(point),
                    })
                }
            }
        }
    }

    fn pointer_down(&mut self, point: Point) -> ShellResult<PointerOutcome> {
        if let Some(current) = self.grab {
            tracing::debug!(window_id = ?current, "ignoring pointer-down during gesture");
            return Ok(PointerOutcome::Consumed);
        }
        let Some(id) = self.window_at(point) else {
            return Ok(PointerOutcome::Passed { target: None });
        };
        let bounds = self.window(id)?.bounds();
        match header_action_at(bounds, point) {
            Some(HeaderAction::Drag) => self.begin_gesture(id, GestureKind::Drag, point)?,
            Some(HeaderAction::Minimize) => self.minimize(id)?,
            Some(HeaderAction::Maximize) => self.toggle_maximize(id)?,
            Some(HeaderAction::Close) => self.close(id)?,
            None if in_resize_grip(bounds, point) => {
                self.begin_gesture(id, GestureKind::Resize, point)?
            }
            None => {
                self.focus(id)?;
                return Ok(PointerOutcome::Passed { target: Some(id) });
            }
        }
        Ok(PointerOutcome::Consumed)
    }

    fn focused_or_err(&self) -> ShellResult<WindowId> {
        self.input_focus.ok_or(ShellError::NoFocusedWindow)
    }

    /// Apply one command. This is the single entry point hosts use to feed
    /// input into the shell.
    pub fn update(&mut self, command: Command) -> ShellResult<Outcome> {
        let result = self.dispatch(command);
        if let Err(err) = &result {
            tracing::warn!(?command, %err, "command rejected");
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> ShellResult<Outcome> {
        match command {
            Command::Launch { kind, workspace } => self.launch(kind, workspace).map(Outcome::Launched),
            Command::Close(id) => self.close(id).map(|()| Outcome::Closed(id)),
            Command::CloseFocused => {
                let id = self.focused_or_err()?;
                self.close(id).map(|()| Outcome::Closed(id))
            }
            Command::Minimize(id) => self.minimize(id).map(|()| Outcome::Done),
            Command::MinimizeFocused => {
                let id = self.focused_or_err()?;
                self.minimize(id).map(|()| Outcome::Done)
            }
            Command::Restore(id) => self.restore(id).map(|()| Outcome::Done),
            Command::ToggleMaximize(id) => self.toggle_maximize(id).map(|()| Outcome::Done),
            Command::ToggleMaximizeFocused => {
                let id = self.focused_or_err()?;
                self.toggle_maximize(id).map(|()| Outcome::Done)
            }
            Command::Focus(id) => self.focus(id).map(|()| Outcome::Focused(Some(id))),
            Command::CycleNext => self.cycle_next().map(Outcome::Focused),
            Command::CyclePrev => self.cycle_prev().map(Outcome::Focused),
            Command::SwitchTo(index) => Ok(Outcome::WorkspaceSwitched(self.switch_to(index))),
            Command::SwitchBy(delta) => Ok(Outcome::WorkspaceSwitched(self.switch_by(delta))),
            Command::DisplayResized(size) => Ok(Outcome::Overlays(self.display_resized(size))),
            Command::Pointer(event) => self.handle_pointer(event).map(Outcome::Pointer),
            Command::EndGesture => Ok(Outcome::GestureEnded(self.end_gesture())),
        }
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("windows", &self.windows.len())
            .field("active_workspace", &self.workspaces.active())
            .field("focus", &self.input_focus)
            .field("grab", &self.grab)
            .field("display", &self.display)
            .finish()
    }
}
