use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/quiz")]
    Quiz,
    /// Carries the winning destination as `?site=<key>`.
    #[at("/result")]
    Result,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_round_trip_through_paths() {
        for route in [Route::Home, Route::Quiz, Route::Result, Route::NotFound] {
            let path = route.to_path();
            assert_eq!(Route::recognize(&path), Some(route));
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));
    }
}
