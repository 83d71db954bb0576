#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::pages::{
    home::HomePage, not_found::NotFound, quiz::QuizRoute, result::ResultRoute,
};
#[cfg(target_arch = "wasm32")]
use crate::router::Route;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeRoute /> },
        Route::Quiz => html! { <QuizRoute /> },
        Route::Result => html! { <ResultRoute /> },
        Route::NotFound => html! { <NotFoundRoute /> },
    }
}

#[cfg(target_arch = "wasm32")]
fn push_callback(navigator: Option<Navigator>, route: Route) -> Callback<()> {
    Callback::from(move |()| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

#[cfg(target_arch = "wasm32")]
#[function_component(HomeRoute)]
fn home_route() -> Html {
    let on_start = push_callback(use_navigator(), Route::Quiz);
    html! { <HomePage {on_start} /> }
}

#[cfg(target_arch = "wasm32")]
#[function_component(NotFoundRoute)]
fn not_found_route() -> Html {
    let on_go_home = push_callback(use_navigator(), Route::Home);
    html! { <NotFound {on_go_home} /> }
}
