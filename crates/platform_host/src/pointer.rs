//! Document-level pointer listener contracts and the RAII gesture guard.
//!
//! A drag or resize gesture attaches `pointermove`/`pointerup` listeners to the document on
//! pointer-down. The listeners are owned by a [`GestureListenerGuard`]; dropping the guard
//! detaches them.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    fmt,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in viewport pixels.
pub struct PointerPosition {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl PointerPosition {
    /// Creates a pointer position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Callback invoked with the current pointer position.
pub type PointerCallback = Rc<dyn Fn(PointerPosition)>;

#[derive(Clone)]
/// Move/up callbacks for one gesture.
pub struct PointerGestureHandlers {
    /// Invoked for every pointer move while the gesture is active.
    pub on_move: PointerCallback,
    /// Invoked once when the pointer is released.
    pub on_up: PointerCallback,
}

impl fmt::Debug for PointerGestureHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerGestureHandlers").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque handle for one attached listener pair.
pub struct ListenerToken(pub u64);

/// Host service that attaches document-level pointer listeners.
pub trait PointerListenerService {
    /// Attaches move/up listeners and returns the token needed to detach them.
    fn attach(&self, handlers: PointerGestureHandlers) -> Result<ListenerToken, String>;

    /// Detaches the listeners identified by `token`. Unknown tokens are ignored.
    fn detach(&self, token: ListenerToken);
}

/// Scoped gesture listener session; listeners are detached when the guard drops.
pub struct GestureListenerGuard {
    service: Rc<dyn PointerListenerService>,
    token: Option<ListenerToken>,
}

impl GestureListenerGuard {
    /// Attaches `handlers` through `service`.
    ///
    /// # Errors
    ///
    /// Returns the service error when listeners cannot be attached.
    pub fn acquire(
        service: Rc<dyn PointerListenerService>,
        handlers: PointerGestureHandlers,
    ) -> Result<Self, String> {
        let token = service.attach(handlers)?;
        Ok(Self {
            service,
            token: Some(token),
        })
    }

    /// Token of the attached listeners, `None` once released.
    pub fn token(&self) -> Option<ListenerToken> {
        self.token
    }

    /// Detaches the listeners now. Later calls and the eventual drop are no-ops.
    pub fn release(&mut self) {
        if let Some(token) = self.token.take() {
            self.service.detach(token);
        }
    }
}

impl Drop for GestureListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for GestureListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureListenerGuard")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Pointer listener service that never delivers events.
pub struct NoopPointerListenerService;

impl PointerListenerService for NoopPointerListenerService {
    fn attach(&self, _handlers: PointerGestureHandlers) -> Result<ListenerToken, String> {
        Ok(ListenerToken(0))
    }

    fn detach(&self, _token: ListenerToken) {}
}

#[derive(Debug, Default)]
/// In-memory pointer listener service; tests drive it with [`Self::emit_move`] and
/// [`Self::emit_up`].
pub struct MemoryPointerListenerService {
    next_token: Cell<u64>,
    listeners: RefCell<BTreeMap<ListenerToken, PointerGestureHandlers>>,
}

impl MemoryPointerListenerService {
    /// Number of attached listener pairs.
    pub fn active_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Delivers a move event to every attached listener.
    pub fn emit_move(&self, position: PointerPosition) {
        for handlers in self.snapshot() {
            (handlers.on_move)(position);
        }
    }

    /// Delivers an up event to every attached listener.
    pub fn emit_up(&self, position: PointerPosition) {
        for handlers in self.snapshot() {
            (handlers.on_up)(position);
        }
    }

    // Callbacks may detach listeners, so never hold the borrow across them.
    fn snapshot(&self) -> Vec<PointerGestureHandlers> {
        self.listeners.borrow().values().cloned().collect()
    }
}

impl PointerListenerService for MemoryPointerListenerService {
    fn attach(&self, handlers: PointerGestureHandlers) -> Result<ListenerToken, String> {
        let token = ListenerToken(self.next_token.get() + 1);
        self.next_token.set(token.0);
        self.listeners.borrow_mut().insert(token, handlers);
        Ok(token)
    }

    fn detach(&self, token: ListenerToken) {
        self.listeners.borrow_mut().remove(&token);
    }
}
