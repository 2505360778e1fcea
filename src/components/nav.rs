//! Navigation bar.

use leptos::prelude::*;
use pizzashop_core::View;
use pizzashop_core::config::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

use crate::components::link::Link;
use crate::components::router::use_router;
use crate::config::APP_NAME;
use crate::core::session;

/// Top bar with page links and the sign-in state.
#[component]
pub fn NavBar() -> impl IntoView {
    let router = use_router();

    // Storage is not reactive; re-read it whenever the route changes.
    let signed_in = Memo::new(move |_| {
        router.current.track();
        session::is_signed_in()
    });

    let href = move |view: View| router.href(view, &Default::default()).unwrap_or_default();
    let create_href = href(View::CreatePizza);
    let cart_href = href(View::ShoppingCart);

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = session::sign_out() {
            log::error!("sign out failed: {e}");
        }
        router.navigate(LOGIN_PATH);
    };

    view! {
        <nav class="navbar">
            <Link href=HOME_PATH>
                <strong>{APP_NAME}</strong>
            </Link>
            <Show
                when=move || signed_in.get()
                fallback=|| view! {
                    <Link href=LOGIN_PATH>"Login"</Link>
                    <Link href=REGISTER_PATH>"Register"</Link>
                }
            >
                <Link href=create_href.clone()>"Create Pizza"</Link>
                <Link href=cart_href.clone()>"Cart"</Link>
                <button on:click=on_sign_out>"Sign out"</button>
            </Show>
        </nav>
    }
}
