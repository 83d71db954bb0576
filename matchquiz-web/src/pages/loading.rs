use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingScreenProps {
    pub message: AttrValue,
}

/// Spinner shown while the quiz document is pending. Stays up indefinitely if the fetch fails.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div
            class="min-h-screen bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50 flex items-center justify-center"
            aria-busy="true"
            aria-live="polite"
            data-testid="loading-screen"
        >
            <div class="text-center">
                <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-rose-500 mx-auto"></div>
                <p class="mt-4 text-gray-600">{ props.message.clone() }</p>
            </div>
        </div>
    }
}
