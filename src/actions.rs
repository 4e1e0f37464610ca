use std::fmt;

use crate::command::Command;
use crate::content::ContentKind;

/// Things a key press can ask the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    CycleNextWindow,
    CyclePrevWindow,
    LaunchTerminal,
    WorkspacePrev,
    WorkspaceNext,
    // 0-based target
    SwitchWorkspace(usize),
    CloseWindow,
    ToggleMaximize,
    MinimizeWindow,
    ToggleTheme,
}

impl Action {
    /// Shell command for this action. Host-only actions (quit, theme)
    /// have none.
    pub fn command(self) -> Option<Command> {
        let cmd = match self {
            Action::Quit | Action::ToggleTheme => return None,
            Action::CycleNextWindow => Command::CycleNext,
            Action::CyclePrevWindow => Command::CyclePrev,
            Action::LaunchTerminal => Command::Launch {
                kind: ContentKind::Terminal,
                workspace: None,
            },
            Action::WorkspacePrev => Command::SwitchBy(-1),
            Action::WorkspaceNext => Command::SwitchBy(1),
            Action::SwitchWorkspace(index) => Command::SwitchTo(index),
            Action::CloseWindow => Command::CloseFocused,
            Action::ToggleMaximize => Command::ToggleMaximizeFocused,
            Action::MinimizeWindow => Command::MinimizeFocused,
        };
        Some(cmd)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => write!(f, "Quit"),
            Action::CycleNextWindow => write!(f, "Cycle next window"),
            Action::CyclePrevWindow => write!(f, "Cycle previous window"),
            Action::LaunchTerminal => write!(f, "Open terminal"),
            Action::WorkspacePrev => write!(f, "Previous workspace"),
            Action::WorkspaceNext => write!(f, "Next workspace"),
            Action::SwitchWorkspace(index) => write!(f, "Switch to workspace {}", index + 1),
            Action::CloseWindow => write!(f, "Close window"),
            Action::ToggleMaximize => write!(f, "Maximize / restore window"),
            Action::MinimizeWindow => write!(f, "Minimize window"),
            Action::ToggleTheme => write!(f, "Toggle theme"),
        }
    }
}
