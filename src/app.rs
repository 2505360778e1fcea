//! Root application module.

use leptos::prelude::*;
use pizzashop_core::RouteTable;

use crate::components::AppRouter;

/// Root application component.
///
/// Takes the compiled route table built at startup and hands it to the
/// router, which owns it for the lifetime of the app.
#[component]
pub fn App(table: RouteTable) -> impl IntoView {
    view! {
        <div class="shop">
            <AppRouter table=table />
        </div>
    }
}
