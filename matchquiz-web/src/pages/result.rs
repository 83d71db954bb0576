use matchquiz_core::{HandoffQuery, QuizDocument, ResultState, SiteRecord, present, result_summary};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::copy::result as copy;
use crate::pages::loading::LoadingScreen;
use crate::router::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct ResultScreenProps {
    pub state: ResultState,
    pub on_home: Callback<()>,
    pub on_retake: Callback<()>,
}

#[function_component(ResultScreen)]
pub fn result_screen(props: &ResultScreenProps) -> Html {
    match &props.state {
        ResultState::Analyzing => html! { <LoadingScreen message={crate::copy::ANALYZING} /> },
        ResultState::NotFound { .. } => {
            let on_home = {
                let cb = props.on_home.clone();
                Callback::from(move |_| cb.emit(()))
            };
            html! {
                <div class="min-h-screen bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50 flex items-center justify-center" data-testid="result-not-found">
                    <div class="text-center">
                        <p class="text-gray-600">{ copy::NOT_FOUND }</p>
                        <button type="button" class="btn mt-4" onclick={on_home}>
                            { copy::BACK_TO_TOP }
                        </button>
                    </div>
                </div>
            }
        }
        ResultState::Found { record, .. } => html! {
            <ResultDetails record={record.clone()} on_retake={props.on_retake.clone()} />
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ResultDetailsProps {
    record: SiteRecord,
    on_retake: Callback<()>,
}

#[function_component(ResultDetails)]
fn result_details(props: &ResultDetailsProps) -> Html {
    let record = &props.record;
    let summary = result_summary(record);
    let on_retake = {
        let cb = props.on_retake.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50 py-8 px-4" data-testid="result-screen">
            <div class="max-w-4xl mx-auto">
                <div class="bg-gradient-to-r from-rose-500 to-purple-600 text-white text-center py-3 px-4 rounded-xl mb-6 shadow-lg">
                    <p class="font-bold text-sm md:text-base">{ copy::URGENCY }</p>
                </div>

                <div class="text-center mb-6">
                    <h1 class="text-3xl md:text-4xl font-bold text-gray-900 mb-2">{ copy::DONE }</h1>
                    <p class="text-gray-600 text-lg">{ copy::DONE_SUB }</p>
                </div>

                <div class="card shadow-2xl mb-6 p-6 md:p-8 bg-gradient-to-br from-yellow-50 to-orange-50 rounded-2xl">
                    <div class="text-center">
                        <div class="text-5xl md:text-6xl font-bold text-orange-600 mb-1" data-testid="average-days">
                            { copy::days(&summary.average_days) }
                        </div>
                        <p class="text-gray-700 font-semibold text-lg">{ copy::DAYS_CAPTION }</p>
                    </div>
                    <p class="text-center text-gray-600 text-sm">{ copy::days_source(&record.name) }</p>
                </div>

                <div class="card shadow-2xl mb-6 overflow-hidden bg-white rounded-2xl">
                    <div class="h-3" style={format!("background: {};", summary.accent_gradient)}></div>
                    <div class="p-8 md:p-12">
                        <div class="text-center mb-8">
                            <div class="text-6xl md:text-7xl font-bold bg-gradient-to-r from-rose-500 to-purple-600 bg-clip-text text-transparent mb-2" data-testid="compatibility">
                                { summary.compatibility.clone() }
                            </div>
                            <p class="text-gray-600 font-medium text-lg">{ copy::COMPATIBILITY }</p>
                        </div>

                        <div class="border-t border-gray-200 pt-8">
                            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-3 text-center">{ record.name.clone() }</h2>
                            <p class="text-xl text-gray-600 text-center mb-6">{ record.tagline.clone() }</p>

                            <div class="bg-gradient-to-r from-green-50 to-emerald-50 border-2 border-green-300 rounded-xl p-4 mb-6">
                                <p class="text-center font-bold text-green-700 text-lg">{ format!("✨ {}", record.hidden_benefit) }</p>
                            </div>

                            <div class="text-center mb-6">
                                <OutboundLink href={record.affiliate_url.clone()} label={copy::cta_primary(&record.name)} />
                                <p class="text-sm text-gray-500 mt-3">{ copy::FREE_NOTE }</p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="card shadow-xl mb-6 p-6 bg-gradient-to-br from-purple-50 to-pink-50 rounded-2xl">
                    <h3 class="text-2xl font-bold mb-4">{ copy::INSIGHT_TITLE }</h3>
                    <p class="text-gray-700 leading-relaxed text-lg">{ record.psychology_insight.clone() }</p>
                </div>

                <div class="card shadow-xl mb-6 p-6 bg-white rounded-2xl">
                    <h3 class="text-2xl font-bold mb-4">{ copy::why_title(&record.name) }</h3>
                    <ul class="space-y-4">
                        { for record.features.iter().map(|feature| html! {
                            <li class="flex items-start gap-3">
                                <span class="text-rose-500" aria-hidden="true">{ "✔" }</span>
                                <span class="text-gray-700 leading-relaxed text-lg font-medium">{ feature.clone() }</span>
                            </li>
                        }) }
                    </ul>
                </div>

                <div class="card shadow-xl mb-8 p-6 bg-gradient-to-br from-blue-50 to-indigo-50 rounded-2xl">
                    <p class="text-center text-gray-700 text-sm md:text-base">
                        { copy::TESTIMONIAL }
                        <br />
                        <span class="text-gray-500">{ copy::TESTIMONIAL_BY }</span>
                    </p>
                </div>

                <div class="text-center mb-8">
                    <OutboundLink href={record.affiliate_url.clone()} label={copy::cta_details(&record.name)} />
                    <p class="text-gray-500 text-sm mt-3">{ copy::FINAL_NOTE }</p>
                </div>

                <div class="flex justify-center mb-8">
                    <button type="button" class="btn btn-outline px-8" data-testid="retake" onclick={on_retake}>
                        { copy::RETAKE }
                    </button>
                </div>

                <div class="text-center text-xs text-gray-400 leading-relaxed">
                    <p>
                        { copy::DISCLAIMER }
                        <br />
                        { copy::DISCLAIMER_SUB }
                    </p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct OutboundLinkProps {
    href: AttrValue,
    label: AttrValue,
}

/// User-initiated outbound navigation to the affiliate page, opened in a new context.
#[function_component(OutboundLink)]
fn outbound_link(props: &OutboundLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="inline-block bg-gradient-to-r from-rose-500 to-purple-600 hover:from-rose-600 hover:to-purple-700 text-white px-12 py-6 text-lg rounded-full shadow-xl"
        >
            { props.label.clone() }
        </a>
    }
}

/// Result route: reads `?site=`, fetches the document on mount and resolves the record.
#[function_component(ResultRoute)]
pub fn result_route() -> Html {
    let document = use_state(|| None::<QuizDocument>);
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| HandoffQuery::parse(location.query_str()))
        .unwrap_or_default();

    {
        let document = document.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::loader::fetch_document().await {
                    Ok(loaded) => document.set(Some(loaded)),
                    Err(err) => log::error!("Failed to load quiz data: {err}"),
                }
            });
            || {}
        });
    }

    let state = present((*document).as_ref(), query.site());
    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&route);
            }
        })
    };

    html! {
        <ResultScreen {state} on_home={go_to(Route::Home)} on_retake={go_to(Route::Quiz)} />
    }
}
