use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn link_label(route: &Route) -> &'static str {
    match route {
        Route::Tutor => "Go to Virtual Tutor",
        Route::VirtualPatient => "Go to Virtual Patient",
        Route::Report => "Go to Report",
    }
}

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: &'static str,
    pub current: Route,
    /// Per-screen action buttons (settings toggle, reset).
    #[prop_or_default]
    pub children: Children,
}

/// Fixed top bar with the screen title, actions, and navigation to the
/// other screens.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    const ALL_ROUTES: [Route; 3] = [Route::Tutor, Route::VirtualPatient, Route::Report];

    html! {
        <header class="page-header">
            <h1>{ props.title }</h1>
            <div class="page-header-actions">
                { for props.children.iter() }
                { for ALL_ROUTES.iter().filter(|route| **route != props.current).map(|route| html! {
                    <Link<Route> classes="nav-link" to={route.clone()}>
                        { link_label(route) }
                    </Link<Route>>
                }) }
            </div>
        </header>
    }
}
