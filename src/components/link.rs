//! In-app links.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::router::use_router;

/// Anchor that navigates through the router.
///
/// Plain left-clicks are intercepted; modified clicks (new tab, new window)
/// fall through to the browser.
#[component]
pub fn Link(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let router = use_router();
    let target = href.clone();

    let on_click = move |ev: MouseEvent| {
        if ev.default_prevented()
            || ev.button() != 0
            || ev.meta_key()
            || ev.ctrl_key()
            || ev.shift_key()
            || ev.alt_key()
        {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=href on:click=on_click>
            {children()}
        </a>
    }
}
