use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::Home | Route::Login => html! { <Login/> },
        Route::NotFound => html! { <h1>{ "not found 404" }</h1> },
    }
}
