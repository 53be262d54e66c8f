use log::{info, warn, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod navigation;
mod scrollspy;
mod sections;

mod components {
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use navigation::{NavAction, NavigationState};
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: &'static str,
    pub menu_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_class = if props.menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <span class="nav-logo">{"VirtualTech"}</span>

                <button class="burger-menu" onclick={props.on_toggle_menu.clone()}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        sections::nav_items().map(|item| {
                            let on_navigate = props.on_navigate.clone();
                            let id = item.id;
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(id);
                            });
                            let link_class = if props.active_section == item.id {
                                "nav-link active"
                            } else {
                                "nav-link"
                            };
                            html! {
                                <button class={link_class} {onclick} key={item.id}>
                                    {item.label}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(26, 26, 26, 0.9);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        color: #7EB2FF;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 0.95rem;
                        color: #ccc;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #7EB2FF;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 8px;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #ccc;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 64px;
                            left: 0;
                            right: 0;
                            background: rgba(26, 26, 26, 0.97);
                            padding: 1rem;
                            border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let nav = use_reducer_eq(NavigationState::default);

    // Scroll-spy: one listener drives both the active highlight and the
    // back-to-top visibility. Registered once, removed on teardown.
    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_clone.scroll_y().unwrap_or(0.0);
                    dispatcher.dispatch(NavAction::ScrollTopVisible(scrollspy::show_scroll_top(y)));

                    // Section extents depend on layout, so they are measured
                    // fresh on every event; resize rides the same path.
                    let extents = scrollspy::measure_sections(&document);
                    if let Some(id) = scrollspy::resolve_active(y, &extents) {
                        dispatcher.dispatch(NavAction::SectionInView(id));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
                window
                    .add_event_listener_with_callback("resize", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                // Initial sync before the first scroll event arrives.
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                    window
                        .remove_event_listener_with_callback("resize", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_navigate = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |id: &'static str| match navigation::scroll_to_section(id) {
            Ok(()) => dispatcher.dispatch(NavAction::NavigateTo(id)),
            Err(err) => warn!("navigation ignored: {err}"),
        })
    };

    let on_toggle_menu = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::ToggleMenu);
        })
    };

    let on_scroll_top = Callback::from(|_: MouseEvent| navigation::scroll_to_top());

    html! {
        <>
            <Nav
                active_section={nav.active_section}
                menu_open={nav.menu_open}
                {on_navigate}
                {on_toggle_menu}
            />
            <Landing />
            {
                if nav.show_scroll_top {
                    html! {
                        <button class="scroll-top-button" onclick={on_scroll_top}>
                            {"⌃"}
                            <style>
                                {r#"
                                    .scroll-top-button {
                                        position: fixed;
                                        bottom: 2rem;
                                        right: 2rem;
                                        width: 48px;
                                        height: 48px;
                                        border: none;
                                        border-radius: 50%;
                                        background: #1E90FF;
                                        color: #fff;
                                        font-size: 1.4rem;
                                        cursor: pointer;
                                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
                                    }
                                    .scroll-top-button:hover {
                                        background: #187bdb;
                                    }
                                "#}
                            </style>
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting VirtualTech site");
    yew::Renderer::<App>::new().render();
}
