//! Glue between terminal input, the shell and the screen.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use crossbeam_channel::Receiver;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Size;

use crate::actions::Action;
use crate::command::{Command, PointerEvent, ShellEvent};
use crate::config::ShellConfig;
use crate::content::ContentKind;
use crate::drivers::pointer::{display_size, pointer_event};
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::keybindings::KeyBindings;
use crate::notifications::{DEFAULT_TIMEOUT, NotificationCenter, WORKSPACE_SWITCH_TIMEOUT};
use crate::overlay::{dock_slot_at, panel_button_at};
use crate::shell::Shell;
use crate::theme::ThemeName;
use crate::ui::{self, DOCK_ITEMS, PANEL_BUTTONS, PanelButton};

pub struct Host {
    shell: Shell,
    keys: KeyBindings,
    notifications: NotificationCenter,
    theme: ThemeName,
    // where theme changes are written back, if anywhere
    config_path: Option<PathBuf>,
    clock: String,
    events: Receiver<ShellEvent>,
}

fn clock_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

impl Host {
    /// `cells` is the terminal size; the shell works in logical units.
    pub fn new(config: &ShellConfig, cells: Size) -> Self {
        let mut shell = Shell::from_config(config, display_size(cells));
        let events = shell.subscribe();
        for cmd in &config.autostart {
            tracing::info!(command = %cmd, "autostart entry recorded, not executed");
        }
        Self {
            shell,
            keys: KeyBindings::desktop(),
            notifications: NotificationCenter::new(),
            theme: config.theme,
            config_path: None,
            clock: clock_label(),
            events,
        }
    }

    /// Persist theme changes to the config file at `path`.
    pub fn persist_to(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) -> ControlFlow {
        match event {
            Event::Key(key) => return self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Resize(cols, rows) => {
                let size = display_size(Size::new(*cols, *rows));
                self.apply(Command::DisplayResized(size), now);
            }
            // a pointer-up that happens outside the terminal never arrives
            Event::FocusLost => self.apply(Command::EndGesture, now),
            _ => {}
        }
        ControlFlow::Continue
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> ControlFlow {
        let Some(action) = self.keys.action_for_key(key) else {
            return ControlFlow::Continue;
        };
        tracing::debug!(%action, "key action");
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::ToggleTheme => self.toggle_theme(now),
            _ => {
                if let Some(cmd) = action.command() {
                    self.apply(cmd, now);
                }
            }
        }
        ControlFlow::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, now: Instant) {
        let Some(pointer) = pointer_event(mouse) else {
            return;
        };
        // overlays sit above windows; they only react to presses
        if let PointerEvent::Down(point) = pointer
            && self.shell.grabbed().is_none()
        {
            let overlays = self.shell.overlays();
            if let Some(slot) = dock_slot_at(&overlays, point, DOCK_ITEMS.len()) {
                self.launch(DOCK_ITEMS[slot], now);
                return;
            }
            if let Some(index) = panel_button_at(&overlays, point, PANEL_BUTTONS.len()) {
                match PANEL_BUTTONS[index] {
                    PanelButton::Theme => self.toggle_theme(now),
                    PanelButton::Launch(kind) => self.launch(kind, now),
                }
                return;
            }
        }
        self.apply(Command::Pointer(pointer), now);
    }

    fn toggle_theme(&mut self, now: Instant) {
        let theme = self.theme.toggled();
        self.theme = theme;
        tracing::info!(%theme, "theme changed");
        let Some(path) = &self.config_path else {
            return;
        };
        // reload so values overridden on the command line stay out of the file
        let saved = ShellConfig::load(path).and_then(|mut config| {
            config.theme = theme;
            config.save(path)
        });
        if let Err(err) = saved {
            tracing::warn!(%err, path = %path.display(), "failed to save theme");
            self.notify("Settings", err.to_string(), DEFAULT_TIMEOUT, now);
        }
    }

    fn launch(&mut self, kind: ContentKind, now: Instant) {
        let cmd = Command::Launch {
            kind,
            workspace: None,
        };
        if let Err(err) = self.shell.update(cmd) {
            self.notify("Launch failed", err.to_string(), DEFAULT_TIMEOUT, now);
        }
        self.drain_events(now);
    }

    fn apply(&mut self, cmd: Command, now: Instant) {
        if let Err(err) = self.shell.update(cmd) {
            self.notify("Shell", err.to_string(), DEFAULT_TIMEOUT, now);
        }
        self.drain_events(now);
    }

    fn notify(&mut self, title: &str, body: String, timeout: Duration, now: Instant) {
        self.notifications.push(title, body, timeout, now);
    }

    fn drain_events(&mut self, now: Instant) {
        for event in self.events.try_iter() {
            match event {
                ShellEvent::WorkspaceSwitched(index) => self.notifications.push(
                    "Workspace",
                    format!("Switched to {}", index + 1),
                    WORKSPACE_SWITCH_TIMEOUT,
                    now,
                ),
                ShellEvent::WindowOpened(id) | ShellEvent::WindowClosed(id) => {
                    tracing::trace!(window_id = ?id, ?event, "shell event");
                }
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.notifications.prune(now);
        self.clock = clock_label();
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) {
        let palette = self.theme.palette();
        let status = ui::Status {
            notifications: &self.notifications,
            clock: &self.clock,
        };
        ui::draw(frame, &mut self.shell, &palette, &status);
    }
}

/// Drive `host` until the user quits. The output is entered before the
/// first frame and left again on every exit path.
pub fn run<D, O>(host: &mut Host, input: D, output: &mut O, poll_interval: Duration) -> io::Result<()>
where
    D: InputDriver,
    O: OutputDriver,
{
    output.enter()?;
    let mut event_loop = EventLoop::new(input, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    let result = event_loop.run(|event| {
        let now = Instant::now();
        match event {
            Some(event) => Ok(host.handle_event(&event, now)),
            None => {
                host.tick(now);
                output.draw(|frame| host.render(frame))?;
                Ok(ControlFlow::Continue)
            }
        }
    });
    let released = event_loop.driver().set_mouse_capture(false);
    output.exit()?;
    released?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

    fn host() -> Host {
        Host::new(&ShellConfig::default(), Size::new(80, 30))
    }

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn alt_enter_opens_terminal() {
        let mut h = host();
        let now = Instant::now();
        h.handle_event(&key(KeyCode::Enter, KeyModifiers::ALT), now);
        let id = h.shell().focused().expect("focused window");
        assert_eq!(h.shell().window(id).unwrap().title(), "Terminal");
    }

    #[test]
    fn ctrl_q_quits() {
        let mut h = host();
        let flow = h.handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL), Instant::now());
        assert_eq!(flow, ControlFlow::Quit);
    }

    #[test]
    fn workspace_switch_posts_short_notification() {
        let mut h = host();
        let now = Instant::now();
        h.handle_event(&key(KeyCode::Left, KeyModifiers::ALT), now);
        assert_eq!(h.shell().active_workspace(), 3);
        let n = h.notifications().iter().last().unwrap();
        assert_eq!(n.body, "Switched to 4");
        h.tick(now + WORKSPACE_SWITCH_TIMEOUT);
        assert!(h.notifications().is_empty());
    }

    #[test]
    fn dock_and_panel_clicks_launch() {
        let mut h = host();
        let now = Instant::now();
        // second dock icon
        h.handle_event(&click(4, 8), now);
        // second panel button
        h.handle_event(&click(6, 1), now);
        let titles: Vec<String> = h
            .shell()
            .focus_order()
            .into_iter()
            .map(|id| h.shell().window(id).unwrap().title().to_string())
            .collect();
        assert_eq!(titles, ["Terminal", "Browser"]);
    }

    #[test]
    fn close_with_no_focus_notifies() {
        let mut h = host();
        h.handle_event(&key(KeyCode::Esc, KeyModifiers::NONE), Instant::now());
        let n = h.notifications().iter().next().unwrap();
        assert_eq!(n.body, "no window has input focus");
    }

    #[test]
    fn focus_lost_ends_gesture() {
        let mut h = host();
        let now = Instant::now();
        h.handle_event(&key(KeyCode::Enter, KeyModifiers::ALT), now);
        // title bar of the first window: logical (40, 88) is cell (5, 5)
        h.handle_event(&click(20, 5), now);
        assert!(h.shell().grabbed().is_some());
        h.handle_event(&Event::FocusLost, now);
        assert!(h.shell().grabbed().is_none());
    }

    #[test]
    fn theme_toggle_is_saved_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "workspace_count = 2\n").unwrap();
        // the command line asked for 6 workspaces; that must not leak into the file
        let config = ShellConfig {
            workspace_count: 6,
            ..ShellConfig::load(&path).unwrap()
        };
        let mut h = Host::new(&config, Size::new(80, 30)).persist_to(path.clone());

        h.handle_event(&key(KeyCode::Char('t'), KeyModifiers::ALT), Instant::now());
        assert_eq!(h.theme(), ThemeName::Light);
        let saved = ShellConfig::load(&path).unwrap();
        assert_eq!(saved.theme, ThemeName::Light);
        assert_eq!(saved.workspace_count, 2);

        // panel theme button, first slot
        h.handle_event(&click(2, 1), Instant::now());
        assert_eq!(ShellConfig::load(&path).unwrap().theme, ThemeName::Dark);
        assert!(h.notifications().is_empty());
    }

    #[test]
    fn theme_toggle_without_config_path_writes_nothing() {
        let mut h = host();
        h.handle_event(&key(KeyCode::Char('t'), KeyModifiers::ALT), Instant::now());
        assert_eq!(h.theme(), ThemeName::Light);
        assert!(h.notifications().is_empty());
    }

    #[test]
    fn unsavable_theme_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let mut h = host().persist_to(blocker.join("config.toml"));

        h.handle_event(&key(KeyCode::Char('t'), KeyModifiers::ALT), Instant::now());
        assert_eq!(h.theme(), ThemeName::Light);
        let n = h.notifications().iter().next().expect("save failure notification");
        assert_eq!(n.title, "Settings");
    }

    #[test]
    fn tick_refreshes_clock() {
        let mut h = host();
        h.clock.clear();
        h.tick(Instant::now());
        assert_eq!(h.clock.len(), "00:00:00".len());
        assert_eq!(h.clock.matches(':').count(), 2);
    }

    #[test]
    fn resize_recomputes_overlays() {
        let mut h = host();
        h.handle_event(&Event::Resize(160, 45), Instant::now());
        assert_eq!(h.shell().overlays().panel.width, 1280);
        assert_eq!(h.shell().overlays().dock.height, 720 - 48 - 16);
    }
}
