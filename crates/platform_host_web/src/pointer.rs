//! Document-level `pointermove`/`pointerup` listeners for drag and resize gestures.

use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, collections::BTreeMap};

use platform_host::{ListenerToken, PointerGestureHandlers, PointerListenerService};
#[cfg(target_arch = "wasm32")]
use platform_host::PointerPosition;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
type PointerClosure = Closure<dyn FnMut(web_sys::PointerEvent)>;

#[cfg(target_arch = "wasm32")]
struct AttachedListeners {
    on_move: PointerClosure,
    on_up: PointerClosure,
}

#[derive(Default)]
/// Browser pointer listener service attaching to `window.document`.
///
/// The closures stay owned by this service, so nothing is leaked with `Closure::forget`.
/// Detached closures are retired rather than dropped because a gesture usually ends from inside
/// its own `pointerup` callback; they are freed on the next attach.
pub struct DocumentPointerListeners {
    next_token: Cell<u64>,
    #[cfg(target_arch = "wasm32")]
    attached: RefCell<BTreeMap<ListenerToken, AttachedListeners>>,
    #[cfg(target_arch = "wasm32")]
    retired: RefCell<Vec<AttachedListeners>>,
}

impl std::fmt::Debug for DocumentPointerListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPointerListeners")
            .field("next_token", &self.next_token.get())
            .finish_non_exhaustive()
    }
}

#[cfg(target_arch = "wasm32")]
fn pointer_position(event: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(event.client_x(), event.client_y())
}

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
impl DocumentPointerListeners {
    fn allocate_token(&self) -> ListenerToken {
        let token = ListenerToken(self.next_token.get() + 1);
        self.next_token.set(token.0);
        token
    }
}

impl PointerListenerService for DocumentPointerListeners {
    fn attach(&self, handlers: PointerGestureHandlers) -> Result<ListenerToken, String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.retired.borrow_mut().clear();
            let document = document()?;
            let on_move_handler = handlers.on_move.clone();
            let on_move = PointerClosure::wrap(Box::new(move |event: web_sys::PointerEvent| {
                on_move_handler(pointer_position(&event));
            }));
            let on_up_handler = handlers.on_up.clone();
            let on_up = PointerClosure::wrap(Box::new(move |event: web_sys::PointerEvent| {
                on_up_handler(pointer_position(&event));
            }));

            document
                .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
                .map_err(|e| format!("failed to attach pointermove: {e:?}"))?;
            if let Err(err) = document
                .add_event_listener_with_callback("pointerup", on_up.as_ref().unchecked_ref())
            {
                let _ = document.remove_event_listener_with_callback(
                    "pointermove",
                    on_move.as_ref().unchecked_ref(),
                );
                return Err(format!("failed to attach pointerup: {err:?}"));
            }

            let token = self.allocate_token();
            self.attached
                .borrow_mut()
                .insert(token, AttachedListeners { on_move, on_up });
            Ok(token)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = handlers;
            Err("pointer listeners require a browser host".to_string())
        }
    }

    fn detach(&self, token: ListenerToken) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(listeners) = self.attached.borrow_mut().remove(&token) else {
                return;
            };
            if let Ok(document) = document() {
                let _ = document.remove_event_listener_with_callback(
                    "pointermove",
                    listeners.on_move.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "pointerup",
                    listeners.on_up.as_ref().unchecked_ref(),
                );
            }
            self.retired.borrow_mut().push(listeners);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::rc::Rc;

    use platform_host::GestureListenerGuard;

    use super::*;

    #[test]
    fn native_builds_refuse_to_attach() {
        let service: Rc<dyn PointerListenerService> = Rc::new(DocumentPointerListeners::default());
        let handlers = PointerGestureHandlers {
            on_move: Rc::new(|_| {}),
            on_up: Rc::new(|_| {}),
        };
        assert!(GestureListenerGuard::acquire(service, handlers).is_err());
    }
}
