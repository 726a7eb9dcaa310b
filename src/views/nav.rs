use yew::prelude::*;

use crate::models::Role;
use crate::routes::Route;
use crate::state::SessionStore;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub session: SessionStore,
    pub navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

fn nav_link(label: &str, target: Route, navigate: &Callback<Route>) -> Html {
    let onclick = navigate.reform(move |_: MouseEvent| target);
    html! {
        <button type="button" class="nav-link" {onclick}>{ label }</button>
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let session = props.session.current();

    html! {
        <nav class="bg-green-700 text-white px-6 py-3 flex items-center justify-between">
            <div class="flex items-center gap-4">
                { nav_link("Home", Route::Home, &props.navigate) }
                if session.authenticated {
                    { nav_link("Employees", Route::Employees, &props.navigate) }
                    { nav_link("Inventory", Route::Inventory, &props.navigate) }
                    { nav_link("Add Tea Batch", Route::AddTeaBatch, &props.navigate) }
                    if session.role == Some(Role::Admin) {
                        { nav_link("Add Employee", Route::AddEmployee, &props.navigate) }
                    }
                }
            </div>
            <div class="flex items-center gap-4">
                if session.authenticated {
                    <button
                        type="button"
                        class="nav-link"
                        onclick={props.on_logout.reform(|_: MouseEvent| ())}
                    >
                        { "Logout" }
                    </button>
                } else {
                    { nav_link("Login", Route::Login, &props.navigate) }
                    { nav_link("Register", Route::Register, &props.navigate) }
                }
            </div>
        </nav>
    }
}
