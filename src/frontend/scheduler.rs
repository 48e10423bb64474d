//! Owned handles for the browser callbacks that drive the effects. Each
//! handle cancels its callback when dropped, so a component only has to
//! return it from its effect destructor.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anyhow::{anyhow, Result};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::dom::js_error;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Calls `on_frame` with the frame timestamp once per animation frame until
/// it returns `false` or the loop is dropped.
pub struct FrameLoop {
    _slot: FrameSlot,
}

impl FrameLoop {
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        schedule_frame(Rc::downgrade(&slot), on_frame);
        Self { _slot: slot }
    }
}

fn schedule_frame<F>(slot: Weak<RefCell<Option<AnimationFrame>>>, mut on_frame: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(owner) = slot.upgrade() else {
        return;
    };

    let next = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        if on_frame(timestamp) {
            schedule_frame(next, on_frame);
        }
    });
    *owner.borrow_mut() = Some(frame);
}

type TimeoutSlot = Rc<RefCell<Option<Timeout>>>;

/// Chain of timeouts where every step returns the delay before the next
/// one, or `None` to stop.
pub struct TimerChain {
    _slot: TimeoutSlot,
}

impl TimerChain {
    pub fn start<F>(first_delay_ms: u32, step: F) -> Self
    where
        F: FnMut() -> Option<u32> + 'static,
    {
        let slot: TimeoutSlot = Rc::new(RefCell::new(None));
        schedule_timeout(Rc::downgrade(&slot), first_delay_ms, step);
        Self { _slot: slot }
    }
}

fn schedule_timeout<F>(slot: Weak<RefCell<Option<Timeout>>>, delay_ms: u32, mut step: F)
where
    F: FnMut() -> Option<u32> + 'static,
{
    let Some(owner) = slot.upgrade() else {
        return;
    };

    let next = slot.clone();
    let timeout = Timeout::new(delay_ms, move || {
        if let Some(delay_ms) = step() {
            schedule_timeout(next, delay_ms, step);
        }
    });
    *owner.borrow_mut() = Some(timeout);
}

/// Fires `on_visible` the first time `target` intersects the viewport grown
/// or shrunk by `root_margin`, then stops observing.
pub struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl InViewObserver {
    pub fn observe<F>(target: &Element, root_margin: &str, on_visible: F) -> Result<Self>
    where
        F: Fn() + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });

                if intersecting {
                    observer.disconnect();
                    on_visible();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `true` once the node has scrolled into view; never flips back.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with((node, root_margin), move |(node, root_margin)| {
            let on_visible = visible.clone();
            let observer = match node.cast::<Element>() {
                Some(target) => {
                    InViewObserver::observe(&target, root_margin, move || on_visible.set(true))
                }
                None => Err(anyhow!("in-view target is not mounted")),
            };

            // Without an observer the content is shown straight away.
            if let Err(err) = &observer {
                log::error!("visibility observer unavailable: {err:#}");
                visible.set(true);
            }

            move || drop(observer)
        });
    }

    *visible
}
