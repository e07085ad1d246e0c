use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Owning wrapper around an `IntersectionObserver`.
///
/// The raw web-sys observer only borrows its JS callback, so the `Closure`
/// has to stay alive for as long as reports can be delivered; this struct
/// ties both lifetimes together and disconnects on drop, which is what a
/// component effect destructor wants.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// `threshold` is the fraction of the target's area that must be visible
    /// before a report counts as intersecting; `root_margin` optionally
    /// shrinks or grows the viewport used for the test (CSS margin syntax,
    /// e.g. `"-100px"`). `on_change` runs once per changed target with the
    /// target element and its new intersection state.
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_change: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element, bool) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.target(), entry.is_intersecting());
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    /// Stops monitoring `target`. Idempotent: unobserving an element that was
    /// never observed is a no-op in the underlying API.
    pub fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
