use leptos::{html, prelude::*, web_sys::IntersectionObserverEntry};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{visible_fraction, RevealOnView, VisibilitySource};

struct ObserverStop(Box<dyn Fn() + Send + Sync>);

impl VisibilitySource for ObserverStop {
    fn stop(&mut self) {
        (self.0)()
    }
}

/// Returns a node ref to put on a section's container and a signal that turns
/// true the first time at least `threshold` of it is on screen. The observer
/// is disconnected as soon as that happens, or when the section unmounts.
pub fn use_reveal_on_view(threshold: f64) -> (NodeRef<html::Div>, Signal<bool>) {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let reveal = StoredValue::new(RevealOnView::<ObserverStop>::attach(threshold));
    let threshold = reveal.with_value(|r| r.threshold().get());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<IntersectionObserverEntry>, _| {
            let fraction = visible_fraction(
                entries
                    .iter()
                    .map(|e| (e.is_intersecting(), e.intersection_ratio())),
            );
            let latched = reveal
                .try_update_value(|r| r.record(fraction))
                .unwrap_or(false);
            if latched && !revealed.get_untracked() {
                set_revealed(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
    reveal.update_value(|r| r.bind(ObserverStop(Box::new(stop))));

    on_cleanup(move || {
        reveal.try_update_value(|r| r.detach());
    });

    (target, revealed.into())
}
