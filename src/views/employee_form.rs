use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{Employee, EmployeeDraft};
use crate::routes::Route;
use crate::services::{AuthMode, HttpResourceClient, NotificationSink, ResourceApi};
use crate::state::SessionStore;
use crate::viewmodels::{FormState, FormViewModel};
use crate::views::toast::{ToastKind, ToastSink};

#[derive(Properties, PartialEq)]
pub struct EmployeeFormProps {
    pub session: SessionStore,
    pub navigate: Callback<Route>,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(EmployeeFormView)]
pub fn employee_form(props: &EmployeeFormProps) -> Html {
    let vm = use_mut_ref({
        let session = props.session.clone();
        let notify = props.notify.clone();
        let navigate = props.navigate.clone();
        move || {
            let api: Rc<dyn ResourceApi<Employee>> = Rc::new(HttpResourceClient::<Employee>::new(
                "employees",
                AuthMode::Public,
                session,
            ));
            let sink: Rc<dyn NotificationSink> = Rc::new(ToastSink::new(notify));
            let on_unauthorized: Rc<dyn Fn()> =
                Rc::new(move || navigate.emit(Route::Login));
            FormViewModel::new(api, sink, on_unauthorized)
        }
    });
    let vm = vm.borrow().clone();
    let state = use_state(FormState::<EmployeeDraft>::default);

    let on_field = {
        let vm = vm.clone();
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Err(err) = vm.set_field(&input.name(), &input.value()) {
                log::warn!("⚠️ {}", err);
            }
            state.set(vm.snapshot());
        })
    };

    let on_submit = {
        let vm = vm.clone();
        let state = state.clone();
        let navigate = props.navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let vm = vm.clone();
            let state = state.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                if vm.submit().await.is_ok() {
                    navigate.emit(Route::Employees);
                }
                state.set(vm.snapshot());
            });
        })
    };

    let field_error = |field: &str| -> Html {
        match state.errors.get(field) {
            Some(message) => html! { <p class="text-red-600 text-sm mt-1">{ message }</p> },
            None => html! {},
        }
    };

    html! {
        <div class="bg-white p-8 rounded-lg shadow-lg max-w-md w-full">
            <h1 class="text-2xl font-bold text-green-600 mb-6">{ "Add Employee" }</h1>

            if let Some(message) = state.submit_error.as_ref() {
                <div class="bg-red-100 text-red-700 px-4 py-2 rounded mb-4">
                    { message }
                </div>
            }

            <form onsubmit={on_submit}>
                <div class="mb-4">
                    <label for="name" class="block mb-1">{ "Name" }</label>
                    <input
                        id="name"
                        name="name"
                        class="w-full border rounded px-3 py-2"
                        value={state.draft.name.clone()}
                        oninput={on_field.clone()}
                    />
                    { field_error("name") }
                </div>
                <div class="mb-4">
                    <label for="position" class="block mb-1">{ "Position" }</label>
                    <input
                        id="position"
                        name="position"
                        class="w-full border rounded px-3 py-2"
                        value={state.draft.position.clone()}
                        oninput={on_field.clone()}
                    />
                    { field_error("position") }
                </div>
                <div class="mb-6">
                    <label for="hireDate" class="block mb-1">{ "Hire date" }</label>
                    <input
                        type="date"
                        id="hireDate"
                        name="hireDate"
                        class="w-full border rounded px-3 py-2"
                        value={state.draft.hire_date.clone()}
                        oninput={on_field.clone()}
                    />
                    { field_error("hireDate") }
                </div>
                <button
                    type="submit"
                    class="w-full bg-green-600 text-white py-2 rounded"
                    disabled={state.submitting}
                >
                    { if state.submitting { "Adding..." } else { "Add Employee" } }
                </button>
            </form>
        </div>
    }
}
