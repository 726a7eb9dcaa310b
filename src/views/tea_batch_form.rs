use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{TeaBatch, TeaBatchDraft};
use crate::routes::Route;
use crate::services::{AuthMode, HttpResourceClient, NotificationSink, ResourceApi};
use crate::state::SessionStore;
use crate::viewmodels::{FormState, FormViewModel};
use crate::views::toast::{ToastKind, ToastSink};

#[derive(Properties, PartialEq)]
pub struct TeaBatchFormProps {
    pub session: SessionStore,
    pub navigate: Callback<Route>,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(TeaBatchFormView)]
pub fn tea_batch_form(props: &TeaBatchFormProps) -> Html {
    let vm = use_mut_ref({
        let session = props.session.clone();
        let notify = props.notify.clone();
        let navigate = props.navigate.clone();
        move || {
            let api: Rc<dyn ResourceApi<TeaBatch>> = Rc::new(HttpResourceClient::<TeaBatch>::new(
                "inventory",
                AuthMode::Bearer,
                session,
            ));
            let sink: Rc<dyn NotificationSink> = Rc::new(ToastSink::new(notify));
            let on_unauthorized: Rc<dyn Fn()> =
                Rc::new(move || navigate.emit(Route::Login));
            FormViewModel::new(api, sink, on_unauthorized)
        }
    });
    let vm = vm.borrow().clone();
    let state = use_state(FormState::<TeaBatchDraft>::default);

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
                    navigate.emit(Route::Inventory);
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
            <h1 class="text-2xl font-bold text-green-600 mb-6">{ "Add Tea Batch" }</h1>

            if let Some(message) = state.submit_error.as_ref() {
                <div class="bg-red-100 text-red-700 px-4 py-2 rounded mb-4">
                    { message }
                </div>
            }

            <form onsubmit={on_submit}>
                <div class="mb-4">
                    <label for="teaType" class="block mb-1">{ "Tea type" }</label>
                    <input
                        id="teaType"
                        name="teaType"
                        class="w-full border rounded px-3 py-2"
                        value={state.draft.tea_type.clone()}
                        oninput={on_field.clone()}
                    />
                    { field_error("teaType") }
                </div>
                <div class="mb-4">
                    <label for="weightInKg" class="block mb-1">{ "Weight (kg)" }</label>
                    <input
                        id="weightInKg"
                        name="weightInKg"
                        class="w-full border rounded px-3 py-2"
                        value={state.draft.weight_in_kg.clone()}
                        oninput={on_field.clone()}
                    />
                    { field_error("weightInKg") }
                </div>
                <div class="mb-4">
                    <label for="arrivalDate" class="block mb-1">{ "Arrival date" }</label>
                    <input
                        type="date"
                        id="arrivalDate"
                        name="arrivalDate"
                        class="w-full border rounded px-3 py-2"
                        value={state.draft.arrival_date.clone()}
                        oninput={on_field.clone()}
                    />
                    { field_error("arrivalDate") }
                </div>
                <div class="mb-6">
                    <label for="processingStage" class="block mb-1">{ "Processing stage" }</label>
                    <input
                        id="processingStage"
                        name="processingStage"
                        class="w-full border rounded px-3 py-2"
                        value={state.draft.processing_stage.clone()}
                        oninput={on_field.clone()}
                    />
                    { field_error("processingStage") }
                </div>
                <button
                    type="submit"
                    class="w-full bg-green-600 text-white py-2 rounded"
                    disabled={state.submitting}
                >
                    { if state.submitting { "Adding..." } else { "Add Tea Batch" } }
                </button>
            </form>
        </div>
    }
}
