// src/integrations/view_host.rs
//
// View Host Integration - UI Tree Seam
//
// A real host platform attaches the AR surface to its visible view hierarchy
// and MUST marshal attach/detach onto the thread that owns the UI tree. The
// bridge never calls attach twice in a row (the session flag guards that), so
// hosts do not need their own idempotence handling.
//
// Note: this client does not hold domain state or call services.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};

use crate::error::AppResult;

#[cfg(test)]
use mockall::automock;

/// The surface's window into the visible UI tree.
#[cfg_attr(test, automock)]
pub trait ViewHost: Send + Sync {
    /// Place the surface (its rendered status line) into the UI tree.
    fn attach(&self, status_line: &str) -> AppResult<()>;

    /// Remove the surface from the UI tree.
    fn detach(&self) -> AppResult<()>;

    /// Push a recomputed status line to an already-attached surface.
    fn refresh(&self, status_line: &str) -> AppResult<()>;
}

/// Headless stand-in for a platform view hierarchy.
///
/// Logs every transition and tracks attachment so the harness and tests can
/// observe what a real host would have displayed.
pub struct HeadlessViewHost {
    attached: AtomicBool,
}

impl HeadlessViewHost {
    pub fn new() -> Self {
        Self {
            attached: AtomicBool::new(false),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::SeqCst)
    }
}

impl Default for HeadlessViewHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewHost for HeadlessViewHost {
    fn attach(&self, status_line: &str) -> AppResult<()> {
        if self.attached.swap(true, Ordering::SeqCst) {
            warn!("View host attach while already attached");
        }
        info!("Surface attached to UI tree: {}", status_line);
        Ok(())
    }

    fn detach(&self) -> AppResult<()> {
        if !self.attached.swap(false, Ordering::SeqCst) {
            warn!("View host detach while not attached");
        }
        info!("Surface detached from UI tree");
        Ok(())
    }

    fn refresh(&self, status_line: &str) -> AppResult<()> {
        debug!("Surface refreshed: {}", status_line);
        Ok(())
    }
}
