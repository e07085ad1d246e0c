use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::notification::{Notification, NotificationPopup};
use crate::components::stat_counter::StatCounter;
use crate::config;
use crate::effects::trigger::OneShot;
use crate::effects::visibility::VisibilityObserver;

#[function_component(Landing)]
pub fn landing() -> Html {
    let notification = use_state(|| None::<Notification>);
    let animate_stats = use_state(|| false);
    let hero_ref = use_node_ref();
    let hero_content_ref = use_node_ref();

    // One-shot stats trigger: watch the hero at 50% visibility, start every
    // counter on the first intersecting report, then release the hero. A page
    // without a hero simply never fires; that's fine.
    {
        let animate_stats = animate_stats.clone();
        let hero_ref = hero_ref.clone();
        use_effect_with_deps(
            move |_| {
                let observer_slot: Rc<RefCell<Option<VisibilityObserver>>> =
                    Rc::new(RefCell::new(None));

                if let Some(hero) = hero_ref.cast::<Element>() {
                    let latch = OneShot::new();
                    let slot = observer_slot.clone();
                    match VisibilityObserver::new(
                        config::HERO_STATS_THRESHOLD,
                        None,
                        move |target, is_intersecting| {
                            if latch.fire_on(is_intersecting) {
                                animate_stats.set(true);
                                if let Some(observer) = slot.borrow().as_ref() {
                                    observer.unobserve(&target);
                                }
                            }
                        },
                    ) {
                        Ok(observer) => {
                            observer.observe(&hero);
                            *observer_slot.borrow_mut() = Some(observer);
                        }
                        Err(err) => error!("failed to create hero observer:", err),
                    }
                }

                move || {
                    observer_slot.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Fade feature and benefit cards in the first time they scroll into view.
    // The reveal only ever writes the visible state, so a card that scrolls
    // back out stays revealed.
    use_effect_with_deps(
        move |_| {
            let mut reveal = None;

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                match VisibilityObserver::new(
                    config::CARD_REVEAL_THRESHOLD,
                    Some(config::CARD_REVEAL_ROOT_MARGIN),
                    |target, is_intersecting| {
                        if is_intersecting {
                            if let Ok(card) = target.dyn_into::<HtmlElement>() {
                                let style = card.style();
                                let _ = style.set_property("opacity", "1");
                                let _ = style.set_property("transform", "translateY(0)");
                            }
                        }
                    },
                ) {
                    Ok(observer) => {
                        if let Ok(cards) =
                            document.query_selector_all(".feature-card, .benefit-card")
                        {
                            for i in 0..cards.length() {
                                if let Some(card) =
                                    cards.get(i).and_then(|node| node.dyn_into::<Element>().ok())
                                {
                                    observer.observe(&card);
                                }
                            }
                        }
                        reveal = Some(observer);
                    }
                    Err(err) => error!("failed to create card observer:", err),
                }
            }

            move || {
                drop(reveal);
            }
        },
        (),
    );

    // Parallax: the hero content drifts at half scroll speed.
    {
        let hero_content_ref = hero_content_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(content) = hero_content_ref.cast::<HtmlElement>() {
                            if let Some(scroll_y) =
                                web_sys::window().and_then(|w| w.scroll_y().ok())
                            {
                                let _ = content.style().set_property(
                                    "transform",
                                    &format!(
                                        "translateY({}px)",
                                        scroll_y * config::PARALLAX_FACTOR
                                    ),
                                );
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_notify = {
        let notification = notification.clone();
        Callback::from(move |n: Notification| notification.set(Some(n)))
    };

    let on_dismiss = {
        let notification = notification.clone();
        Callback::from(move |_| notification.set(None))
    };

    html! {
        <div class="landing">
            <style>
                {r#"
                    .landing section {
                        padding: 6rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-content h1 {
                        font-size: 3.5rem;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(45deg, #fff, var(--primary));
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-content > p {
                        font-size: 1.25rem;
                        color: var(--text-secondary);
                        max-width: 540px;
                        margin-bottom: 2.5rem;
                    }
                    .hero-stats {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 3rem;
                        margin-top: 3rem;
                    }
                    .stat {
                        display: flex;
                        flex-direction: column;
                    }
                    .stat-number {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: var(--primary);
                    }
                    .stat-label {
                        color: var(--text-secondary);
                        font-size: 0.9rem;
                    }
                    .section-title {
                        font-size: 2.5rem;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card, .benefit-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(126, 178, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .feature-card h3, .benefit-card h3 {
                        margin-bottom: 0.75rem;
                        color: #fff;
                    }
                    .feature-card p, .benefit-card p {
                        color: var(--text-secondary);
                        line-height: 1.6;
                    }
                    .contact-section form {
                        max-width: 640px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-section .form-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .contact-section input,
                    .contact-section textarea {
                        flex: 1;
                        width: 100%;
                        padding: 0.9rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(126, 178, 255, 0.2);
                        background: rgba(30, 30, 30, 0.7);
                        color: #fff;
                        font-size: 1rem;
                    }
                    .cta-button {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 10px;
                        background: var(--primary);
                        color: #0d1117;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .landing footer {
                        text-align: center;
                        padding: 2rem;
                        color: var(--text-secondary);
                        font-size: 0.9rem;
                    }
                    @media (max-width: 768px) {
                        .hero-content h1 { font-size: 2.4rem; }
                        .hero-stats { gap: 2rem; }
                        .contact-section .form-row { flex-direction: column; }
                    }
                "#}
            </style>

            <section id="home" class="hero" ref={hero_ref}>
                <div class="hero-content" ref={hero_content_ref}>
                    <h1>{"Spaces that feel like you"}</h1>
                    <p>{"Vellura Space designs calm, functional interiors for homes and studios. \
                        From a single room refresh to a full redesign, we shape rooms around the \
                        way you actually live."}</p>
                    <div class="hero-stats">
                        <StatCounter target="250" suffix="+" label="Projects completed" start={*animate_stats} />
                        <StatCounter target="4.9" label="Average client rating" start={*animate_stats} />
                        <StatCounter target="15" label="Years of experience" start={*animate_stats} />
                        <StatCounter target="98" suffix="%" label="Client satisfaction" start={*animate_stats} />
                    </div>
                </div>
            </section>

            <section id="features">
                <h2 class="section-title">{"What we do"}</h2>
                <div class="card-grid">
                    <div class="feature-card">
                        <h3>{"Full-room design"}</h3>
                        <p>{"Layout, palette, lighting and furnishing plans delivered as a single coherent concept."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Renovation guidance"}</h3>
                        <p>{"We work alongside your contractor so the built result matches the drawings."}</p>
                    </div>
                    <div class="feature-card">
                        <h3>{"Styling & staging"}</h3>
                        <p>{"Finishing touches for lived-in homes, or staging that helps a listing move."}</p>
                    </div>
                </div>
            </section>

            <section id="benefits">
                <h2 class="section-title">{"Why Vellura"}</h2>
                <div class="card-grid">
                    <div class="benefit-card">
                        <h3>{"Fixed, transparent pricing"}</h3>
                        <p>{"One quote up front. No hourly surprises halfway through the project."}</p>
                    </div>
                    <div class="benefit-card">
                        <h3>{"Material-first approach"}</h3>
                        <p>{"We source durable, natural materials before reaching for trends."}</p>
                    </div>
                    <div class="benefit-card">
                        <h3>{"Small studio, senior eyes"}</h3>
                        <p>{"Every project is led personally by a senior designer, start to finish."}</p>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact-section">
                <h2 class="section-title">{"Book a consultation"}</h2>
                <ContactForm on_notify={on_notify} />
            </section>

            <footer>
                {"© 2025 Vellura Space. All rights reserved."}
            </footer>

            <NotificationPopup notification={(*notification).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
