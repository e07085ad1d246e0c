use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::effects::counter::CounterAnimation;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Authored target value, e.g. `"250"` or `"4.9"`.
    pub target: AttrValue,
    pub label: AttrValue,
    /// Flips to `true` once the hero trigger fires; the ramp starts then.
    #[prop_or(false)]
    pub start: bool,
    #[prop_or(config::COUNTER_DURATION_MS)]
    pub duration_ms: u32,
    /// Rendered after the number, e.g. `"+"` or `"%"`.
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// One animated hero statistic. Each instance owns its own interval, so
/// counters on the same page ramp independently and a fast one finishing
/// never disturbs a slow one.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let display = use_state(|| "0".to_string());

    {
        let display = display.clone();
        let target = props.target.clone();
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |start| {
                // Handle to store the interval so the finishing tick can release it
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                if *start {
                    match target.parse::<f64>() {
                        Ok(value) if value.is_finite() => {
                            let mut animation = CounterAnimation::new(value, duration_ms);
                            if animation.is_finished() {
                                // Zero (or negative) target: render once, no timer.
                                display.set(animation.display());
                            } else {
                                let handle = interval_handle.clone();
                                let interval =
                                    Interval::new(config::COUNTER_TICK_MS, move || {
                                        let done = animation.tick();
                                        display.set(animation.display());
                                        if done {
                                            if let Some(interval) = handle.borrow_mut().take() {
                                                drop(interval);
                                            }
                                        }
                                    });
                                *interval_handle.borrow_mut() = Some(interval);
                            }
                        }
                        _ => {
                            log::warn!("skipping counter with unparseable target {:?}", &*target);
                        }
                    }
                }

                let interval_handle = interval_handle.clone();
                move || {
                    // Stop ticking if the counter unmounts mid-ramp.
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            props.start,
        );
    }

    html! {
        <div class="stat">
            <span class="stat-number">{ (*display).clone() }{ props.suffix.clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
