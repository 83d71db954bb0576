use yew::prelude::*;

use crate::copy::home as copy;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub on_start: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let on_click = {
        let on_start = props.on_start.clone();
        Callback::from(move |_| on_start.emit(()))
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50" data-testid="home-screen">
            <div class="container mx-auto px-4 py-16">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="flex justify-center mb-8">
                        <div class="relative bg-white rounded-full p-6 shadow-xl text-5xl" aria-hidden="true">{ "💗" }</div>
                    </div>

                    <h1 class="text-5xl md:text-6xl font-bold text-gray-900 mb-6 leading-tight">
                        { copy::HEADLINE_LEAD }
                        <br />
                        <span class="bg-gradient-to-r from-rose-500 to-purple-600 bg-clip-text text-transparent">
                            { copy::HEADLINE_ACCENT }
                        </span>
                        <br />
                        { copy::HEADLINE_TAIL }
                    </h1>

                    <p class="text-xl md:text-2xl text-gray-600 mb-12 leading-relaxed">
                        { copy::SUBHEAD_LEAD }
                        <br />
                        { copy::SUBHEAD_TAIL }
                    </p>

                    <button
                        type="button"
                        class="bg-gradient-to-r from-rose-500 to-purple-600 hover:from-rose-600 hover:to-purple-700 text-white px-12 py-6 text-lg rounded-full shadow-2xl transition-all duration-300 transform hover:scale-105"
                        data-testid="start-quiz"
                        onclick={on_click}
                    >
                        { copy::CTA }
                    </button>

                    <ul class="mt-12 flex flex-wrap justify-center gap-8 text-sm text-gray-500">
                        { for copy::TRUST.iter().map(|label| html! {
                            <li class="flex items-center gap-2">{ *label }</li>
                        }) }
                    </ul>
                </div>

                <div class="mt-24 grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    { for copy::FEATURES.iter().map(|(title, body)| html! {
                        <div class="bg-white rounded-2xl p-8 shadow-lg hover:shadow-xl transition-shadow">
                            <h3 class="text-xl font-bold text-gray-900 mb-3">{ *title }</h3>
                            <p class="text-gray-600">{ *body }</p>
                        </div>
                    }) }
                </div>
            </div>

            <footer class="py-8 text-center text-gray-500 text-sm">
                <p>{ copy::FOOTER }</p>
            </footer>
        </div>
    }
}
