//! Workspace containers and the manager that owns them.
//!
//! Each container keeps its windows back to front; the last entry is drawn
//! on top. Exactly one container is visible at a time.

use crate::error::{ShellError, ShellResult};
use crate::window::WindowId;

#[derive(Debug, Clone)]
pub struct WorkspaceContainer {
    index: usize,
    windows: Vec<WindowId>,
    visible: bool,
}

impl WorkspaceContainer {
    fn new(index: usize, visible: bool) -> Self {
        Self {
            index,
            windows: Vec::new(),
            visible,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Windows in stacking order, back to front.
    pub fn windows(&self) -> &[WindowId] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains(&id)
    }

    fn push(&mut self, id: WindowId) {
        self.windows.push(id);
    }

    fn remove(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|x| *x != id);
        before != self.windows.len()
    }

    fn bring_to_front(&mut self, id: WindowId) {
        if let Some(pos) = self.windows.iter().position(|&x| x == id) {
            let item = self.windows.remove(pos);
            self.windows.push(item);
        }
    }
}

/// Read-only snapshot of one container's windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceListing {
    pub index: usize,
    pub windows: Vec<WindowId>,
}

#[derive(Debug, Clone)]
pub struct WorkspaceManager {
    containers: Vec<WorkspaceContainer>,
    active: usize,
}

impl WorkspaceManager {
    /// Create `count` containers with the first one visible. A count of zero
    /// is raised to one so `active` always indexes a container.
    pub fn new(count: usize) -> Self {
        let count = count.max(1);
        let containers = (0..count)
            .map(|index| WorkspaceContainer::new(index, index == 0))
            .collect();
        Self {
            containers,
            active: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.containers.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_container(&self) -> &WorkspaceContainer {
        &self.containers[self.active]
    }

    pub fn container(&self, index: usize) -> Option<&WorkspaceContainer> {
        self.containers.get(index)
    }

    pub fn containers(&self) -> &[WorkspaceContainer] {
        &self.containers
    }

    pub fn check_index(&self, index: usize) -> ShellResult<usize> {
        if index < self.containers.len() {
            Ok(index)
        } else {
            Err(ShellError::InvalidWorkspaceIndex {
                index,
                count: self.containers.len(),
            })
        }
    }

    /// Append `id` on top of the target container (the active one when
    /// `target` is `None`). Returns the index used.
    pub fn add_window(&mut self, id: WindowId, target: Option<usize>) -> ShellResult<usize> {
        let index = self.check_index(target.unwrap_or(self.active))?;
        self.containers[index].push(id);
        Ok(index)
    }

    pub fn remove_window(&mut self, id: WindowId, index: usize) -> bool {
        self.containers
            .get_mut(index)
            .is_some_and(|container| container.remove(id))
    }

    pub fn bring_to_front(&mut self, id: WindowId, index: usize) {
        if let Some(container) = self.containers.get_mut(index) {
            container.bring_to_front(id);
        }
    }

    /// Make `index mod N` the visible container and return it.
    pub fn switch_to(&mut self, index: usize) -> usize {
        let next = index % self.containers.len();
        if next != self.active {
            self.containers[self.active].visible = false;
            self.containers[next].visible = true;
            self.active = next;
        }
        self.active
    }

    /// Move `delta` containers from the active one, wrapping both ways.
    pub fn switch_by(&mut self, delta: isize) -> usize {
        let count = self.containers.len() as isize;
        let next = (self.active as isize + delta).rem_euclid(count) as usize;
        self.switch_to(next)
    }

    pub fn list_windows(&self) -> Vec<WorkspaceListing> {
        self.containers
            .iter()
            .map(|c| WorkspaceListing {
                index: c.index,
                windows: c.windows.clone(),
            })
            .collect()
    }
}
