use matchquiz_core::{HandoffQuery, QuizSession, SessionError, Transition};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::copy::quiz as copy;
use crate::pages::loading::LoadingScreen;
use crate::router::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizAction {
    Select(String),
    Next,
    Back,
}

/// Where the quiz screen should go after handling an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizNavigation {
    Stay,
    Landing,
    Result(HandoffQuery),
}

/// Apply a user action to a copy of the session.
///
/// Scoring failures are invariant violations: they panic in debug builds and
/// otherwise log at error level and fall back to the landing screen.
#[must_use]
pub fn reduce(session: &QuizSession, action: &QuizAction) -> (QuizSession, QuizNavigation) {
    let mut next = session.clone();
    let navigation = match action {
        QuizAction::Select(option_id) => {
            if let Err(err) = next.select_option(option_id) {
                log::warn!("ignored selection: {err}");
            }
            QuizNavigation::Stay
        }
        QuizAction::Next => match next.advance() {
            Ok(Transition::Completed { winner }) => {
                QuizNavigation::Result(HandoffQuery::for_winner(&winner))
            }
            Ok(Transition::Exit) => QuizNavigation::Landing,
            Ok(Transition::Stay | Transition::Moved { .. }) => QuizNavigation::Stay,
            Err(err) => fallback(&err),
        },
        QuizAction::Back => match next.retreat() {
            Transition::Exit => QuizNavigation::Landing,
            _ => QuizNavigation::Stay,
        },
    };
    (next, navigation)
}

fn fallback(err: &SessionError) -> QuizNavigation {
    debug_assert!(
        !matches!(err, SessionError::Scoring(_)),
        "quiz could not be scored: {err}"
    );
    log::error!("quiz could not be scored: {err}");
    QuizNavigation::Landing
}

#[derive(Properties, Clone, PartialEq)]
pub struct QuizScreenProps {
    pub session: QuizSession,
    pub on_action: Callback<QuizAction>,
}

#[function_component(QuizScreen)]
pub fn quiz_screen(props: &QuizScreenProps) -> Html {
    let (Some(question), Some(progress)) =
        (props.session.current_question(), props.session.progress())
    else {
        return html! { <LoadingScreen message={crate::copy::LOADING} /> };
    };
    let selected = props.session.selected();

    let on_back = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(QuizAction::Back))
    };
    let on_next = {
        let cb = props.on_action.clone();
        Callback::from(move |_| cb.emit(QuizAction::Next))
    };
    let next_label = if progress.is_last() {
        copy::SHOW_RESULT
    } else {
        copy::NEXT
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50 py-8 px-4" data-testid="quiz-screen">
            <div class="max-w-3xl mx-auto">
                <div class="mb-8">
                    <div class="flex items-center justify-between mb-2">
                        <span class="text-sm font-medium text-gray-600">
                            { copy::counter(progress.index + 1, progress.total) }
                        </span>
                        <span class="text-sm font-medium text-gray-600">
                            { format!("{}%", progress.percent) }
                        </span>
                    </div>
                    <progress
                        class="progress h-2 w-full"
                        value={progress.percent.to_string()}
                        max="100"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow={progress.percent.to_string()}
                    />
                </div>

                <div class="card shadow-2xl border-0 mb-8 bg-white rounded-2xl">
                    <div class="p-8 md:p-12">
                        <h2 class="text-2xl md:text-3xl font-bold text-gray-900 mb-8 text-center">
                            { question.prompt.clone() }
                        </h2>
                        <div class="space-y-4" role="radiogroup">
                            { for question.options.iter().map(|option| {
                                let is_selected = selected == Some(option.id.as_str());
                                let onclick = {
                                    let cb = props.on_action.clone();
                                    let id = option.id.clone();
                                    Callback::from(move |_| cb.emit(QuizAction::Select(id.clone())))
                                };
                                html! {
                                    <button
                                        type="button"
                                        role="radio"
                                        aria-checked={is_selected.to_string()}
                                        data-option={option.id.clone()}
                                        class={classes!(
                                            "w-full", "p-6", "rounded-xl", "border-2", "transition-all", "duration-200", "text-left",
                                            if is_selected {
                                                "border-rose-500 bg-rose-50 shadow-lg scale-[1.02]"
                                            } else {
                                                "border-gray-200 bg-white hover:border-rose-300 hover:bg-rose-50/50"
                                            }
                                        )}
                                        {onclick}
                                    >
                                        <span class="text-lg font-medium text-gray-900">{ option.text.clone() }</span>
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                </div>

                <div class="flex justify-between gap-4">
                    <button type="button" class="btn btn-outline px-8" data-testid="quiz-back" onclick={on_back}>
                        { copy::BACK }
                    </button>
                    <button
                        type="button"
                        class="btn px-8 bg-gradient-to-r from-rose-500 to-purple-600 text-white disabled:opacity-50 disabled:cursor-not-allowed"
                        data-testid="quiz-next"
                        disabled={selected.is_none()}
                        aria-disabled={selected.is_none().to_string()}
                        onclick={on_next}
                    >
                        { next_label }
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Quiz route: fetches the document on mount and drives the session.
#[function_component(QuizRoute)]
pub fn quiz_route() -> Html {
    let session = use_state(QuizSession::loading);
    let navigator = use_navigator();

    {
        let session = session.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::loader::fetch_document().await {
                    Ok(document) => session.set(QuizSession::start(document.quiz)),
                    Err(err) => log::error!("Failed to load quiz data: {err}"),
                }
            });
            || {}
        });
    }

    let on_action = {
        let session = session.clone();
        Callback::from(move |action: QuizAction| {
            let (next, navigation) = reduce(&session, &action);
            session.set(next);
            let Some(nav) = navigator.as_ref() else {
                return;
            };
            match navigation {
                QuizNavigation::Stay => {}
                QuizNavigation::Landing => nav.push(&Route::Home),
                QuizNavigation::Result(query) => {
                    if let Err(err) = nav.push_with_query(&Route::Result, &query) {
                        log::error!("failed to navigate to result: {err}");
                        nav.push(&Route::Home);
                    }
                }
            }
        })
    };

    html! { <QuizScreen session={(*session).clone()} {on_action} /> }
}
