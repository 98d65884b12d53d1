use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;

use crate::content::{
    is_scrolled, menu_toggled, nav_anchor, SocialIcon, SocialLink, BIO, LOGO_MARK, NAME,
    NAV_ITEMS, PROFILE_IMAGE_URL, ROLE, SOCIAL_LINKS,
};

fn scroll_offset_px() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_motion_preference() {
    if !prefers_reduced_motion() {
        return;
    }

    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-motion", "reduced");
        }
    }
}

fn menu_glyph() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M3 6h18M3 12h18M3 18h18" />
        </svg>
    }
}

fn close_glyph() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M18 6 6 18M6 6l12 12" />
        </svg>
    }
}

fn icon_glyph(icon: SocialIcon) -> Html {
    match icon {
        SocialIcon::GitHub => html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" />
            </svg>
        },
        SocialIcon::LinkedIn => html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4V8h4v2a6 6 0 0 1 2-2z" />
                <rect x="2" y="9" width="4" height="12" />
                <circle cx="4" cy="4" r="2" />
            </svg>
        },
        SocialIcon::X => html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="22"
                height="22"
                viewBox="0 0 24 24"
                fill="currentColor"
                aria-hidden="true"
            >
                <path d="M18.901 1.153h3.68l-8.04 9.19L24 22.846h-7.406l-5.8-7.584-6.638 7.584H.474l8.6-9.83L0 1.154h7.594l5.243 6.932ZM17.61 20.644h2.039L6.486 3.24H4.298Z" />
            </svg>
        },
        SocialIcon::Mail => html! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <rect x="2" y="4" width="20" height="16" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </svg>
        },
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    scrolled: bool,
    menu_open: bool,
    on_toggle_menu: Callback<MouseEvent>,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class={classes!("site-nav", props.scrolled.then_some("is-scrolled"))}>
            <div class="nav-inner">
                <div class="nav-zone nav-zone-start">
                    <span class="logo-mark">{ LOGO_MARK }</span>
                </div>
                <div class="nav-links">
                    { for NAV_ITEMS.iter().copied().map(|label| html! {
                        <a key={label} class="nav-link" href={nav_anchor(label)}>
                            <span>{ label }</span>
                            <span class="nav-link-underline" aria-hidden="true"></span>
                        </a>
                    }) }
                </div>
                <div class="nav-zone nav-zone-end">
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-expanded={props.menu_open.to_string()}
                        aria-label="Toggle navigation menu"
                        onclick={props.on_toggle_menu.clone()}
                    >
                        if props.menu_open {
                            { close_glyph() }
                        } else {
                            { menu_glyph() }
                        }
                    </button>
                </div>
            </div>
            if props.menu_open {
                <div class="mobile-menu">
                    { for NAV_ITEMS.iter().copied().map(|label| html! {
                        <a key={label} class="mobile-menu-link" href={nav_anchor(label)}>
                            { label }
                        </a>
                    }) }
                </div>
            }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct SocialIconLinkProps {
    link: SocialLink,
}

#[function_component(SocialIconLink)]
fn social_icon_link(props: &SocialIconLinkProps) -> Html {
    let link = props.link;

    html! {
        <a
            class="social-link"
            href={link.target}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={link.label}
        >
            { icon_glyph(link.icon) }
            <span class="social-tooltip" aria-hidden="true">{ link.label }</span>
        </a>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero-grid">
            <div class="hero-copy">
                <h1 class="hero-heading">{ NAME }</h1>
                <h2 class="hero-subheading">{ ROLE }</h2>
                <p class="hero-bio">{ BIO }</p>
                <div class="social-row">
                    { for SOCIAL_LINKS.iter().copied().map(|link| html! {
                        <SocialIconLink key={link.label} link={link} />
                    }) }
                </div>
            </div>
            <div class="hero-portrait">
                <div class="portrait-frame">
                    <img class="portrait-image" src={PROFILE_IMAGE_URL} alt="Profile" />
                    <div class="portrait-gradient" aria-hidden="true"></div>
                </div>
                <div class="float-orb float-orb-a" aria-hidden="true"></div>
                <div class="float-orb float-orb-b" aria-hidden="true"></div>
            </div>
        </section>
    }
}

#[function_component(App)]
fn app() -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                scrolled.set(is_scrolled(scroll_offset_px()));
            });

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    use_effect_with((), move |_| {
        apply_motion_preference();
        || ()
    });

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(menu_toggled(*menu_open));
        })
    };

    html! {
        <>
            <Navbar scrolled={*scrolled} menu_open={*menu_open} on_toggle_menu={on_toggle_menu} />
            <main class="page">
                <Hero />
            </main>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
