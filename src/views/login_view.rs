use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::routes::Route;
use crate::services::perform_login;
use crate::state::SessionStore;

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub session: SessionStore,
    pub navigate: Callback<Route>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let busy = busy.clone();
        let session = props.session.clone();
        let navigate = props.navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }

            let error = error.clone();
            let busy = busy.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            busy.set(true);
            spawn_local(async move {
                match perform_login(&email, &password).await {
                    Ok(resp) => {
                        session.login(resp.token, resp.user_id, resp.role);
                        error.set(None);
                        navigate.emit(Route::Employees);
                    }
                    Err(err) => {
                        log::error!("❌ Login failed: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="bg-white p-8 rounded-lg shadow-lg max-w-md w-full">
            <h1 class="text-2xl font-bold text-green-600 mb-6">{ "Login" }</h1>

            if let Some(message) = (*error).as_ref() {
                <div class="bg-red-100 text-red-700 px-4 py-2 rounded mb-4">
                    { message }
                </div>
            }

            <form onsubmit={on_submit}>
                <div class="mb-4">
                    <label for="email" class="block mb-1">{ "Email" }</label>
                    <input
                        type="email"
                        id="email"
                        class="w-full border rounded px-3 py-2"
                        ref={email_ref}
                        required=true
                    />
                </div>
                <div class="mb-6">
                    <label for="password" class="block mb-1">{ "Password" }</label>
                    <input
                        type="password"
                        id="password"
                        class="w-full border rounded px-3 py-2"
                        ref={password_ref}
                        required=true
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-green-600 text-white py-2 rounded"
                    disabled={*busy}
                >
                    { if *busy { "Logging in..." } else { "Login" } }
                </button>
            </form>
        </div>
    }
}
