//! Yew binding: listener lifecycle and state emission.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, TouchEvent};
use yew::prelude::*;

use crate::config::RELOAD_GRACE_MS;
use crate::dom::{self, DomNode};
use crate::state::PullToRefreshState;
use crate::tracker::{PullEffect, PullGesture};
use crate::util::clog;

/// Host policy the recognizer cannot decide on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PullToRefreshOptions {
    /// Cancel a scheduled reload when the consumer unmounts during the
    /// commit grace period. With `false`, the reload fires regardless of
    /// whatever navigation caused the unmount.
    pub cancel_reload_on_unmount: bool,
}

impl Default for PullToRefreshOptions {
    fn default() -> Self {
        Self {
            cancel_reload_on_unmount: true,
        }
    }
}

type SharedGesture = Rc<RefCell<PullGesture<DomNode>>>;
type PendingReload = Rc<RefCell<Option<(i32, Closure<dyn FnMut()>)>>>;

/// Observes raw touch events on `document` and exposes the recognizer's
/// snapshot. Registers nothing outside standalone display mode: in a
/// browser tab the native pull-to-refresh must not be double-handled.
#[hook]
pub fn use_pull_to_refresh(options: PullToRefreshOptions) -> PullToRefreshState {
    let snapshot = use_state(PullToRefreshState::default);
    let gesture: SharedGesture = use_mut_ref(PullGesture::new);
    let last_emitted = use_mut_ref(|| PullToRefreshState::IDLE);
    let pending_reload: PendingReload = use_mut_ref(|| None);

    {
        let snapshot = snapshot.clone();
        use_effect_with(options, move |options| {
            let options = *options;
            let mut listeners = None;

            if dom::standalone_display_mode() {
                let window = web_sys::window().expect("no global `window` exists");
                let document = window.document().expect("should have a document on window");

                let touch_start_cb = {
                    let gesture = gesture.clone();
                    Closure::wrap(Box::new(move |e: TouchEvent| {
                        let Some(t0) = e.touches().item(0) else {
                            return;
                        };
                        let target = e
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .map(DomNode::new);
                        gesture.borrow_mut().touch_start(
                            f64::from(t0.client_y()),
                            dom::now_ms(),
                            dom::page_scroll_y(),
                            target,
                        );
                    }) as Box<dyn FnMut(_)>)
                };

                let touch_move_cb = {
                    let gesture = gesture.clone();
                    let last_emitted = last_emitted.clone();
                    let snapshot = snapshot.clone();
                    Closure::wrap(Box::new(move |e: TouchEvent| {
                        let Some(t0) = e.touches().item(0) else {
                            return;
                        };
                        let effect = gesture.borrow_mut().touch_move(
                            f64::from(t0.client_y()),
                            dom::now_ms(),
                            dom::page_scroll_y(),
                        );
                        if effect == Some(PullEffect::SuppressScroll) {
                            e.prevent_default();
                        }
                        emit(&gesture, &last_emitted, &snapshot);
                    }) as Box<dyn FnMut(_)>)
                };

                let touch_end_cb = {
                    let gesture = gesture.clone();
                    let last_emitted = last_emitted.clone();
                    let snapshot = snapshot.clone();
                    let pending_reload = pending_reload.clone();
                    let window = window.clone();
                    Closure::wrap(Box::new(move |_e: TouchEvent| {
                        let effect = gesture.borrow_mut().release();
                        if effect == Some(PullEffect::BeginRefresh) {
                            let snap = gesture.borrow().state();
                            clog(&format!(
                                "pull-to-refresh: committed {}",
                                serde_json::to_string(&snap).unwrap_or_default()
                            ));
                            let reload_cb = Closure::wrap(
                                Box::new(dom::reload_application) as Box<dyn FnMut()>
                            );
                            if let Ok(id) = window
                                .set_timeout_with_callback_and_timeout_and_arguments_0(
                                    reload_cb.as_ref().unchecked_ref(),
                                    RELOAD_GRACE_MS,
                                )
                            {
                                *pending_reload.borrow_mut() = Some((id, reload_cb));
                            }
                        }
                        emit(&gesture, &last_emitted, &snapshot);
                    }) as Box<dyn FnMut(_)>)
                };

                // touchmove is the only listener that may call
                // preventDefault(), so it is the only non-passive one.
                let passive = AddEventListenerOptions::new();
                passive.set_passive(true);
                let blocking = AddEventListenerOptions::new();
                blocking.set_passive(false);

                add(&document, "touchstart", &touch_start_cb, &passive);
                add(&document, "touchmove", &touch_move_cb, &blocking);
                add(&document, "touchend", &touch_end_cb, &passive);
                add(&document, "touchcancel", &touch_end_cb, &passive);

                clog("pull-to-refresh: armed (standalone display mode)");
                listeners = Some((document, touch_start_cb, touch_move_cb, touch_end_cb));
            } else {
                clog("pull-to-refresh: inert (browser tab handles its own)");
            }

            move || {
                if let Some((document, start_cb, move_cb, end_cb)) = listeners {
                    remove(&document, "touchstart", &start_cb);
                    remove(&document, "touchmove", &move_cb);
                    remove(&document, "touchend", &end_cb);
                    remove(&document, "touchcancel", &end_cb);
                }
                if options.cancel_reload_on_unmount {
                    if let Some((id, _reload_cb)) = pending_reload.borrow_mut().take() {
                        if let Some(window) = web_sys::window() {
                            window.clear_timeout_with_handle(id);
                        }
                    }
                }
            }
        });
    }

    *snapshot
}

fn emit(
    gesture: &SharedGesture,
    last_emitted: &Rc<RefCell<PullToRefreshState>>,
    snapshot: &UseStateHandle<PullToRefreshState>,
) {
    let next = gesture.borrow().state();
    let changed = *last_emitted.borrow() != next;
    if changed {
        *last_emitted.borrow_mut() = next;
        snapshot.set(next);
    }
}

fn add(
    document: &Document,
    event: &str,
    cb: &Closure<dyn FnMut(TouchEvent)>,
    opts: &AddEventListenerOptions,
) {
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            opts,
        )
        .ok();
}

fn remove(document: &Document, event: &str, cb: &Closure<dyn FnMut(TouchEvent)>) {
    let _ = document.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
}
