//! Shared preferences with change notification.
//!
//! Preferences are read once when the store is opened and written back on
//! every change. Components that depend on them hold a [`watch::Receiver`]
//! from [`PreferencesStore::subscribe`] and react when it fires.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::watch;

use crate::config::Preferences;
use crate::error::PlanResult;

#[derive(Clone)]
pub struct PreferencesStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    tx: watch::Sender<Preferences>,
}

impl PreferencesStore {
    /// Open the store backed by `path`. A missing file starts from defaults
    /// and is not created until the first change.
    pub fn open(path: &Path) -> PlanResult<Self> {
        let prefs = Preferences::load(path)?;
        tracing::debug!(path = %path.display(), theme = %prefs.theme, "opened preferences");

        let (tx, _rx) = watch::channel(prefs);
        Ok(PreferencesStore {
            inner: Arc::new(Inner {
                path: path.to_path_buf(),
                tx,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn get(&self) -> Preferences {
        self.inner.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.inner.tx.subscribe()
    }

    /// Apply `f` to a copy of the current preferences. If the result differs
    /// it is validated, saved and published; otherwise nothing happens.
    /// Returns whether anything changed.
    ///
    /// The whole read-modify-write runs under the channel's write lock, so
    /// concurrent updates from cloned stores never overwrite each other.
    pub fn update<F>(&self, f: F) -> PlanResult<bool>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut result = Ok(false);

        self.inner.tx.send_if_modified(|current| {
            let mut next = current.clone();
            f(&mut next);

            if next == *current {
                return false;
            }

            if let Err(e) = next.validate().and_then(|()| next.save(&self.inner.path)) {
                result = Err(e);
                return false;
            }

            tracing::info!(
                theme = %next.theme,
                menu = %next.menu_position,
                sidebar_collapsed = next.sidebar_collapsed,
                "preferences changed"
            );
            *current = next;
            result = Ok(true);
            true
        });

        result
    }
}
