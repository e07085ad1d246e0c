use yew::prelude::*;
use log::{info, Level};
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod effects {
    pub mod counter;
    pub mod trigger;
    pub mod visibility;
}
mod components {
    pub mod contact_form;
    pub mod notification;
    pub mod stat_counter;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("features", "Features"),
    ("benefits", "Benefits"),
    ("contact", "Contact"),
];

fn nav_height(nav_ref: &NodeRef) -> f64 {
    nav_ref
        .cast::<HtmlElement>()
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0)
}

/// Smooth-scrolls to an in-page section, landing it just below the navbar.
/// Missing sections are ignored.
fn scroll_to_section(id: &str, nav_height: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let options = ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top()) - nav_height);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Resolves which section currently contains the scroll position. Section
/// ranges can overlap near boundaries; the last match wins, matching reading
/// order.
fn section_in_view(document: &Document, scroll_y: f64, nav_height: f64) -> Option<&'static str> {
    let mut active = None;
    for (id, _) in NAV_SECTIONS {
        if let Some(section) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let top = f64::from(section.offset_top()) - nav_height - config::ACTIVE_LINK_OFFSET;
            let bottom = top + f64::from(section.offset_height());
            if scroll_y >= top && scroll_y < bottom {
                active = Some(id);
            }
        }
    }
    active
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| None::<&'static str>);
    let nav_ref = use_node_ref();

    // One scroll listener drives both the compact style and the active link.
    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD);
                        active_section.set(section_in_view(
                            &document,
                            scroll_y,
                            nav_height(&nav_ref),
                        ));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = NAV_SECTIONS
        .iter()
        .map(|&(id, label)| {
            let onclick = {
                let menu_open = menu_open.clone();
                let nav_ref = nav_ref.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    menu_open.set(false);
                    scroll_to_section(id, nav_height(&nav_ref));
                })
            };
            let class = classes!(
                "nav-link",
                (*active_section == Some(id)).then(|| "active")
            );
            html! {
                <a href={format!("#{id}")} {onclick} {class}>{ label }</a>
            }
        })
        .collect::<Html>();

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav
            ref={nav_ref}
            class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}
        >
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.25rem 2rem;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 2rem;
                        background: rgba(13, 17, 23, 0.9);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(126, 178, 255, 0.1);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.3rem;
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: var(--text-secondary);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: var(--primary);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 0;
                            background: rgba(13, 17, 23, 0.97);
                            padding: 1rem 2rem;
                        }
                        .nav-links.mobile-menu-open { display: flex; }
                        .nav-links .nav-link { padding: 0.75rem 0; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Vellura Space"}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { links }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    // Pad the body by the scrollbar width once at mount so the fixed navbar
    // doesn't shift when the scrollbar appears.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                if let (Some(document), Ok(inner_width)) = (window.document(), window.inner_width())
                {
                    if let (Some(html), Some(body)) = (document.document_element(), document.body())
                    {
                        let inner = inner_width.as_f64().unwrap_or(0.0);
                        let scrollbar = inner - f64::from(html.client_width());
                        if scrollbar > 0.0 {
                            let _ = body
                                .style()
                                .set_property("padding-right", &format!("{scrollbar}px"));
                        }
                    }
                }
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Vellura Space frontend");
    yew::Renderer::<App>::new().render();
}
