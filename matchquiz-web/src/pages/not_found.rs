use yew::prelude::*;

use crate::copy::not_found as copy;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section
            class="min-h-screen bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50 flex flex-col items-center justify-center gap-4"
            aria-live="assertive"
            data-testid="not-found"
        >
            <h1 class="text-2xl font-bold text-gray-900">{ copy::TITLE }</h1>
            <p class="text-gray-600">{ copy::MESSAGE }</p>
            <button type="button" class="btn rounded-full px-8" onclick={go_home}>
                { copy::BACK }
            </button>
        </section>
    }
}
