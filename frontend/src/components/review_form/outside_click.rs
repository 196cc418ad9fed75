//! Window-level mousedown listener that reports clicks outside a node.
//!
//! The listener is registered on construction and unregistered on drop, so
//! holding an `OutsideClickListener` in an `Option` ties its lifetime to the
//! modal being open.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node, Window};
use yew::{Callback, NodeRef};

const EVENT: &str = "mousedown";

pub struct OutsideClickListener {
    window: Window,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl OutsideClickListener {
    /// Starts listening. Returns `None` when there is no window or the
    /// browser refuses the registration.
    pub fn attach(container: NodeRef, on_outside: Callback<()>) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(container) = container.cast::<Node>() else {
                return;
            };
            let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
            if !container.contains(target.as_ref()) {
                // Deferred: closing drops this listener, which must not
                // happen while the closure is still running.
                let on_outside = on_outside.clone();
                wasm_bindgen_futures::spawn_local(async move { on_outside.emit(()) });
            }
        });

        window
            .add_event_listener_with_callback(EVENT, closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { window, closure })
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(EVENT, self.closure.as_ref().unchecked_ref());
    }
}
