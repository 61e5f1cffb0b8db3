// web_app/state/request.rs - Request lifecycle helpers
//
// Each action owns one loading flag. The flag is raised before the request
// starts and lowered when the LoadingGuard drops, which covers success,
// failure and an aborted task alike.

use std::cell::Cell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::sync::{Arc, Mutex, Weak};

use futures::future::{abortable, AbortHandle};
use leptos::prelude::*;

use super::toast::Notice;

/// Anything that can display a busy state
pub trait LoadingFlag {
    fn set_loading(&self, loading: bool);
}

impl LoadingFlag for RwSignal<bool> {
    fn set_loading(&self, loading: bool) {
        // The page may already be gone when an aborted task unwinds
        let _ = self.try_set(loading);
    }
}

impl LoadingFlag for Cell<bool> {
    fn set_loading(&self, loading: bool) {
        self.set(loading);
    }
}

impl<F: LoadingFlag + ?Sized> LoadingFlag for Rc<F> {
    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading);
    }
}

impl<F: LoadingFlag + ?Sized> LoadingFlag for Arc<F> {
    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading);
    }
}

/// Holds a flag raised for as long as the guard lives
#[must_use = "the flag is lowered as soon as the guard is dropped"]
pub struct LoadingGuard<F: LoadingFlag> {
    flag: F,
}

impl<F: LoadingFlag> LoadingGuard<F> {
    pub fn acquire(flag: F) -> Self {
        flag.set_loading(true);
        Self { flag }
    }
}

impl<F: LoadingFlag> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        self.flag.set_loading(false);
    }
}

/// Run `fut` with `flag` raised.
///
/// The flag goes up immediately, not on first poll, so the submit control
/// is disabled before the task is even scheduled.
pub fn with_loading<F, Fut>(flag: F, fut: Fut) -> impl Future<Output = Fut::Output>
where
    F: LoadingFlag,
    Fut: Future,
{
    let guard = LoadingGuard::acquire(flag);
    async move {
        let _guard = guard;
        fut.await
    }
}

/// Replace `slot` on success; hand back the notice on failure.
///
/// Failed fetches never touch the data already on screen.
pub fn settle<T>(slot: &mut T, result: Result<T, Notice>) -> Option<Notice> {
    match result {
        Ok(value) => {
            *slot = value;
            None
        }
        Err(notice) => Some(notice),
    }
}

#[derive(Default)]
struct TaskRegistry {
    next_key: u64,
    handles: HashMap<u64, AbortHandle>,
}

/// Removes a task from its registry once the task finishes or is dropped
struct Registration {
    registry: Weak<Mutex<TaskRegistry>>,
    key: u64,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.lock() {
                registry.handles.remove(&self.key);
            }
        }
    }
}

/// Tasks started by one page, aborted together when it unmounts
#[derive(Clone, Default)]
pub struct PageTasks {
    registry: Arc<Mutex<TaskRegistry>>,
}

impl PageTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `fut` with this page and return the abortable wrapper.
    ///
    /// The wrapper completes silently when aborted. Its handle is released
    /// when it finishes, whatever the outcome, or when it is dropped unpolled.
    pub fn wrap<Fut>(&self, fut: Fut) -> impl Future<Output = ()>
    where
        Fut: Future<Output = ()>,
    {
        let (task, handle) = abortable(fut);
        let key = match self.registry.lock() {
            Ok(mut registry) => {
                let key = registry.next_key;
                registry.next_key = registry.next_key.wrapping_add(1);
                registry.handles.insert(key, handle);
                key
            }
            Err(_) => u64::MAX,
        };
        let registration = Registration {
            registry: Arc::downgrade(&self.registry),
            key,
        };
        async move {
            let _registration = registration;
            if task.await.is_err() {
                tracing::debug!("Page task aborted");
            }
        }
    }

    /// Spawn `fut` on the UI thread, tied to this page
    pub fn spawn<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = ()> + 'static,
    {
        leptos::task::spawn_local(self.wrap(fut));
    }

    /// Abort every task still registered
    pub fn abort_all(&self) {
        let drained: Vec<AbortHandle> = match self.registry.lock() {
            Ok(mut registry) => registry.handles.drain().map(|(_, handle)| handle).collect(),
            Err(_) => return,
        };
        if !drained.is_empty() {
            tracing::debug!("Aborting {} page task(s)", drained.len());
        }
        for handle in drained {
            handle.abort();
        }
    }

    /// Number of tasks registered and not yet finished
    pub fn pending(&self) -> usize {
        self.registry
            .lock()
            .map(|registry| registry.handles.len())
            .unwrap_or(0)
    }
}

/// Task set for the current page, aborted on cleanup
pub fn use_page_tasks() -> PageTasks {
    let tasks = PageTasks::new();
    let on_unmount = tasks.clone();
    on_cleanup(move || on_unmount.abort_all());
    tasks
}
