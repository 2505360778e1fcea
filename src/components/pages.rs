//! Storefront pages.
//!
//! Thin views: cart and checkout logic belong to the backend. The login
//! page only stores a token issued elsewhere.

use leptos::prelude::*;
use pizzashop_core::config::{
    CHECKOUT_ROUTE, HOME_PATH, LOGIN_PATH, PIZZA_NAME_PARAM, REGISTER_PATH,
};
use pizzashop_core::{Params, View, ViewBinding};

use crate::components::link::Link;
use crate::components::router::use_router;
use crate::config::MENU;
use crate::core::session;

/// Render the view for a resolved route, or the not-found page.
pub fn render(binding: Option<ViewBinding>) -> AnyView {
    let Some(binding) = binding else {
        return view! { <NotFound /> }.into_any();
    };

    match binding.view {
        View::Home => view! { <Home /> }.into_any(),
        View::Login => view! { <Login /> }.into_any(),
        View::Register => view! { <Register /> }.into_any(),
        View::CreatePizza => view! { <CreatePizza /> }.into_any(),
        View::UpdatePizza => {
            let pizza_name = binding.param(PIZZA_NAME_PARAM).unwrap_or_default().to_string();
            view! { <UpdatePizza pizza_name=pizza_name /> }.into_any()
        }
        View::ShoppingCart => view! { <ShoppingCart /> }.into_any(),
        View::CheckOut => view! { <CheckOut /> }.into_any(),
    }
}

#[component]
fn Home() -> impl IntoView {
    let router = use_router();
    let pizzas = MENU
        .iter()
        .filter_map(|name| {
            let params = Params::new().with(PIZZA_NAME_PARAM, *name);
            match router.href(View::UpdatePizza, &params) {
                Ok(href) => Some(view! { <li><Link href=href>{*name}</Link></li> }),
                Err(e) => {
                    log::warn!("menu link for '{name}': {e}");
                    None
                }
            }
        })
        .collect_view();

    view! {
        <h1>"Our Pizzas"</h1>
        <ul class="menu">{pizzas}</ul>
    }
}

#[component]
fn Login() -> impl IntoView {
    let router = use_router();
    let token = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match session::sign_in(&token.get_untracked()) {
            Ok(()) => router.navigate(HOME_PATH),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <h1>"Login"</h1>
        <form on:submit=on_submit>
            <input
                type="password"
                placeholder="Access token"
                prop:value=move || token.get()
                on:input=move |ev| token.set(event_target_value(&ev))
            />
            <button type="submit">"Sign in"</button>
        </form>
        {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
        <p>"No account yet? " <Link href=REGISTER_PATH>"Register"</Link></p>
    }
}

#[component]
fn Register() -> impl IntoView {
    view! {
        <h1>"Register"</h1>
        <p>"Accounts are created by the shop's backend."</p>
        <p>"Already registered? " <Link href=LOGIN_PATH>"Login"</Link></p>
    }
}

#[component]
fn CreatePizza() -> impl IntoView {
    view! {
        <h1>"Create Pizza"</h1>
        <p>"Compose a new pizza for the menu."</p>
    }
}

#[component]
fn UpdatePizza(pizza_name: String) -> impl IntoView {
    view! {
        <h1>"Update Pizza"</h1>
        <p>"Editing " <strong>{pizza_name}</strong></p>
    }
}

#[component]
fn ShoppingCart() -> impl IntoView {
    let router = use_router();
    let checkout = match router.href_named(CHECKOUT_ROUTE) {
        Ok(href) => Some(view! { <Link href=href>"Proceed to checkout"</Link> }),
        Err(e) => {
            log::warn!("checkout link: {e}");
            None
        }
    };

    view! {
        <h1>"Shopping Cart"</h1>
        {checkout}
    }
}

#[component]
fn CheckOut() -> impl IntoView {
    view! {
        <h1>"Check Out"</h1>
        <p>"Review your order before paying."</p>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <h1>"404"</h1>
        <p>"This page does not exist. " <Link href=HOME_PATH>"Back to the menu"</Link></p>
    }
}
