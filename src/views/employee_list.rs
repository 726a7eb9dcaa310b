use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Employee;
use crate::routes::Route;
use crate::services::{AuthMode, HttpResourceClient, NotificationSink, ResourceApi};
use crate::state::SessionStore;
use crate::viewmodels::{ListState, ListViewModel, RowEdit};
use crate::views::toast::{ToastKind, ToastSink};

#[derive(Properties, PartialEq)]
pub struct EmployeeListProps {
    pub session: SessionStore,
    pub navigate: Callback<Route>,
    pub notify: Callback<(ToastKind, String)>,
}

#[function_component(EmployeeListView)]
pub fn employee_list(props: &EmployeeListProps) -> Html {
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
            ListViewModel::new(api, sink, on_unauthorized)
        }
    });
    let vm = vm.borrow().clone();
    let state = use_state(ListState::<Employee>::default);

    {
        let vm = vm.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let _ = vm.refresh().await;
                state.set(vm.snapshot());
            });
        });
    }

    let on_field = {
        let vm = vm.clone();
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Err(err) = vm.update_draft(&input.name(), &input.value()) {
                log::warn!("⚠️ {}", err);
            }
            state.set(vm.snapshot());
        })
    };

    let on_edit = {
        let vm = vm.clone();
        let state = state.clone();
        Callback::from(move |id: i64| {
            if let Err(err) = vm.begin_edit(id) {
                log::warn!("⚠️ {}", err);
            }
            state.set(vm.snapshot());
        })
    };

    let on_cancel = {
        let vm = vm.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            vm.cancel_edit();
            state.set(vm.snapshot());
        })
    };

    let on_save = {
        let vm = vm.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let vm = vm.clone();
            let state = state.clone();
            spawn_local(async move {
                let _ = vm.commit_edit().await;
                state.set(vm.snapshot());
            });
        })
    };

    let on_delete = {
        let vm = vm.clone();
        let state = state.clone();
        Callback::from(move |id: i64| {
            let vm = vm.clone();
            let state = state.clone();
            spawn_local(async move {
                let _ = vm.delete_record(id).await;
                state.set(vm.snapshot());
            });
        })
    };

    let row = |employee: &Employee| -> Html {
        let id = employee.id;
        match &state.edit {
            RowEdit::Editing { id: edit_id, draft } | RowEdit::Saving { id: edit_id, draft }
                if *edit_id == id =>
            {
                let saving = matches!(state.edit, RowEdit::Saving { .. });
                html! {
                    <tr key={id}>
                        <td>{ id }</td>
                        <td>
                            <input
                                name="name"
                                value={draft.name.clone()}
                                oninput={on_field.clone()}
                                disabled={saving}
                            />
                        </td>
                        <td>
                            <input
                                name="position"
                                value={draft.position.clone()}
                                oninput={on_field.clone()}
                                disabled={saving}
                            />
                        </td>
                        <td>
                            <input
                                type="date"
                                name="hireDate"
                                value={draft.hire_date.clone()}
                                oninput={on_field.clone()}
                                disabled={saving}
                            />
                        </td>
                        <td class="flex gap-2">
                            <button
                                class="bg-green-600 text-white px-3 py-1 rounded"
                                onclick={on_save.clone()}
                                disabled={saving}
                            >
                                { if saving { "Saving..." } else { "Save" } }
                            </button>
                            <button
                                class="bg-gray-400 text-white px-3 py-1 rounded"
                                onclick={on_cancel.clone()}
                                disabled={saving}
                            >
                                { "Cancel" }
                            </button>
                        </td>
                    </tr>
                }
            }
            _ => {
                let edit = on_edit.reform(move |_: MouseEvent| id);
                let delete = on_delete.reform(move |_: MouseEvent| id);
                html! {
                    <tr key={id}>
                        <td>{ id }</td>
                        <td>{ &employee.name }</td>
                        <td>{ &employee.position }</td>
                        <td>{ &employee.hire_date }</td>
                        <td class="flex gap-2">
                            <button class="bg-blue-600 text-white px-3 py-1 rounded" onclick={edit}>
                                { "Edit" }
                            </button>
                            <button class="bg-red-600 text-white px-3 py-1 rounded" onclick={delete}>
                                { "Delete" }
                            </button>
                        </td>
                    </tr>
                }
            }
        }
    };

    html! {
        <div class="bg-white p-8 rounded-lg shadow-lg max-w-4xl w-full">
            <h1 class="text-2xl font-bold text-green-600 mb-6">{ "Employees" }</h1>

            if let Some(message) = state.error.as_ref() {
                <div class="bg-red-100 text-red-700 px-4 py-2 rounded mb-4">
                    { message }
                </div>
            }

            if state.loading {
                <p>{ "Loading..." }</p>
            } else if state.records.is_empty() {
                <p>{ "No employees found." }</p>
            } else {
                <table class="w-full text-left">
                    <thead>
                        <tr>
                            <th>{ "ID" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "Position" }</th>
                            <th>{ "Hire date" }</th>
                            <th>{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for state.records.iter().map(row) }
                    </tbody>
                </table>
            }
        </div>
    }
}
