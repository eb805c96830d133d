mod client;
mod components;
mod hooks;
mod pages;
pub mod utils;

use pages::{report::ReportPage, tutor::TutorPage, virtual_patient::VirtualPatientPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Tutor,
    #[at("/virtual-patient")]
    VirtualPatient,
    #[at("/report")]
    Report,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Tutor => html! { <TutorPage /> },
        Route::VirtualPatient => html! { <VirtualPatientPage /> },
        Route::Report => html! { <ReportPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
