use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{RegisterRequest, Role};
use crate::routes::Route;
use crate::services::register;
use crate::state::SessionStore;

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    pub session: SessionStore,
    pub navigate: Callback<Route>,
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let as_employee_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    // Registering an employee account is an admin-only extra; the checkbox
    // only renders for a logged-in admin.
    let is_admin = props.session.current().role == Some(Role::Admin);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let as_employee_ref = as_employee_ref.clone();
        let error = error.clone();
        let busy = busy.clone();
        let session = props.session.clone();
        let navigate = props.navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input), Some(confirm_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();
            let confirm = confirm_input.value();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }
            if password != confirm {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let register_as_employee = as_employee_ref
                .cast::<HtmlInputElement>()
                .filter(|cb| cb.checked())
                .map(|_| true);

            let request = RegisterRequest {
                email,
                password,
                register_as_employee,
            };
            let admin_token = if request.register_as_employee.is_some() {
                session.token()
            } else {
                None
            };

            let error = error.clone();
            let busy = busy.clone();
            let navigate = navigate.clone();
            busy.set(true);
            spawn_local(async move {
                match register(&request, admin_token.as_deref()).await {
                    Ok(()) => {
                        log::info!("✅ Account registered");
                        error.set(None);
                        navigate.emit(Route::Login);
                    }
                    Err(err) => {
                        log::error!("❌ Registration failed: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="bg-white p-8 rounded-lg shadow-lg max-w-md w-full">
            <h1 class="text-2xl font-bold text-green-600 mb-6">{ "Register" }</h1>

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
                <div class="mb-4">
                    <label for="password" class="block mb-1">{ "Password" }</label>
                    <input
                        type="password"
                        id="password"
                        class="w-full border rounded px-3 py-2"
                        ref={password_ref}
                        required=true
                    />
                </div>
                <div class="mb-4">
                    <label for="confirm-password" class="block mb-1">{ "Confirm password" }</label>
                    <input
                        type="password"
                        id="confirm-password"
                        class="w-full border rounded px-3 py-2"
                        ref={confirm_ref}
                        required=true
                    />
                </div>
                if is_admin {
                    <div class="mb-4 flex items-center gap-2">
                        <input
                            type="checkbox"
                            id="register-as-employee"
                            ref={as_employee_ref}
                        />
                        <label for="register-as-employee">{ "Register as employee" }</label>
                    </div>
                }
                <button
                    type="submit"
                    class="w-full bg-green-600 text-white py-2 rounded"
                    disabled={*busy}
                >
                    { if *busy { "Registering..." } else { "Register" } }
                </button>
            </form>
        </div>
    }
}
