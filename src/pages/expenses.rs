use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{bind_input, bind_select, ConfirmDialog, ExpenseForm, NavBar};
use crate::format::format_amount;
use crate::models::{category_icon, Expense, ExpenseDraft, EXPENSE_CATEGORIES};
use crate::pages::{flash, use_session};
use crate::query::{remove, sort_recent_first, upsert, ListFilter};
use crate::Route;

const PER_PAGE: u32 = 10;

#[derive(Properties, PartialEq)]
pub struct ExpensesPageProps {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(ExpensesPage)]
pub fn expenses_page(props: &ExpensesPageProps) -> Html {
    let session = use_session();

    let expenses = use_state(Vec::<Expense>::new);
    let page = use_state(|| 1u32);
    let total_pages = use_state(|| 1u32);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let search = use_state(String::new);
    let from = use_state(String::new);
    let to = use_state(String::new);
    let category = use_state(String::new);

    let show_add = use_state(|| false);
    let editing = use_state(|| None::<Expense>);
    let confirm_delete = use_state(|| None::<i64>);

    {
        let session = session.clone();
        let expenses = expenses.clone();
        let total_pages = total_pages.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_navigate = props.on_navigate.clone();
        use_effect_with_deps(
            move |current_page| {
                let current_page = *current_page;
                match session {
                    Some(session) => {
                        loading.set(true);
                        spawn_local(async move {
                            match ApiClient::new(&session)
                                .list_expenses(current_page, PER_PAGE)
                                .await
                            {
                                Ok(result) => {
                                    total_pages.set(result.total_pages());
                                    let mut list = result.expenses;
                                    sort_recent_first(&mut list);
                                    expenses.set(list);
                                    error.set(None);
                                }
                                Err(err) => {
                                    error.set(Some(format!("Failed to fetch expenses: {}", err)));
                                }
                            }
                            loading.set(false);
                        });
                    }
                    None => on_navigate.emit(Route::Login),
                }
                || ()
            },
            *page,
        );
    }

    let on_add_submit = {
        let session = session.clone();
        let expenses = expenses.clone();
        let show_add = show_add.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |draft: ExpenseDraft| {
            let Some(session) = session.clone() else {
                return;
            };
            let expenses = expenses.clone();
            let show_add = show_add.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match ApiClient::new(&session)
                    .create_expense(session.user_id, &draft)
                    .await
                {
                    Ok(created) => {
                        let mut next = (*expenses).clone();
                        upsert(&mut next, created);
                        expenses.set(next);
                        show_add.set(false);
                        flash(&success, "Expense added successfully!");
                    }
                    Err(err) => {
                        error.set(Some(format!("Error adding expense: {}", err)));
                    }
                }
            });
        })
    };

    let on_delete_confirmed = {
        let session = session.clone();
        let expenses = expenses.clone();
        let confirm_delete = confirm_delete.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |_| {
            let Some(session) = session.clone() else {
                return;
            };
            let Some(id) = *confirm_delete else {
                return;
            };
            let expenses = expenses.clone();
            let confirm_delete = confirm_delete.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match ApiClient::new(&session).delete_expense(id).await {
                    Ok(()) => {
                        let mut next = (*expenses).clone();
                        remove(&mut next, id);
                        expenses.set(next);
                        confirm_delete.set(None);
                        flash(&success, "Expense deleted successfully!");
                    }
                    Err(err) => {
                        confirm_delete.set(None);
                        error.set(Some(format!("Error deleting expense: {}", err)));
                    }
                }
            });
        })
    };

    let prev_page = {
        let page = page.clone();
        Callback::from(move |_| {
            if *page > 1 {
                page.set(*page - 1);
            }
        })
    };
    let next_page = {
        let page = page.clone();
        let total_pages = total_pages.clone();
        Callback::from(move |_| {
            if *page < *total_pages {
                page.set(*page + 1);
            }
        })
    };

    let filter = ListFilter {
        search: (*search).clone(),
        from: (*from).clone(),
        to: (*to).clone(),
        category: (*category).clone(),
        account_id: None,
    };

    let visible: Vec<Expense> = expenses
        .iter()
        .filter(|expense| filter.matches(*expense))
        .cloned()
        .collect();

    html! {
        <div class="min-h-screen bg-gray-100">
            <NavBar active={Route::Expenses} on_navigate={props.on_navigate.clone()} on_logout={props.on_logout.clone()} />
            <div class="flex flex-col items-center p-6">
                <div class="w-full md:w-3/4 bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-2xl font-semibold text-gray-700 mb-4">{"All Expenses"}</h2>

                    if let Some(msg) = &*success {
                        <div class="bg-green-100 text-green-700 p-4 mb-4 rounded-lg text-center">
                            { msg.clone() }
                        </div>
                    }
                    if let Some(msg) = &*error {
                        <div class="bg-red-100 text-red-700 p-4 mb-4 rounded-lg text-center">
                            { msg.clone() }
                        </div>
                    }

                    <div class="flex flex-wrap gap-3 mb-4">
                        <input
                            type="text"
                            placeholder="Search description or category"
                            value={(*search).clone()}
                            oninput={bind_input(&search)}
                            class="flex-1 p-2 border rounded"
                        />
                        <input type="date" value={(*from).clone()} oninput={bind_input(&from)} class="p-2 border rounded" />
                        <input type="date" value={(*to).clone()} oninput={bind_input(&to)} class="p-2 border rounded" />
                        <select value={(*category).clone()} onchange={bind_select(&category)} class="p-2 border rounded">
                            <option value="" selected={category.is_empty()}>{"All Categories"}</option>
                            { for EXPENSE_CATEGORIES.iter().map(|name| html! {
                                <option value={*name} selected={*name == category.as_str()}>{ *name }</option>
                            }) }
                        </select>
                    </div>

                    <table class="w-full border-collapse border border-gray-300">
                        <thead>
                            <tr class="bg-gray-200">
                                <th class="border border-gray-300 px-4 py-2">{"Date"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Category"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Amount"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Description"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if *loading {
                                <tr><td colspan="5" class="text-center py-4 text-gray-500">{"Loading..."}</td></tr>
                            } else if visible.is_empty() {
                                <tr><td colspan="5" class="text-center py-4 text-gray-500">{"No expenses found."}</td></tr>
                            } else {
                                { for visible.iter().map(|expense| {
                                    let edit_target = expense.clone();
                                    let on_edit = {
                                        let editing = editing.clone();
                                        Callback::from(move |_| editing.set(Some(edit_target.clone())))
                                    };
                                    let expense_id = expense.id;
                                    let on_delete = {
                                        let confirm_delete = confirm_delete.clone();
                                        Callback::from(move |_| confirm_delete.set(Some(expense_id)))
                                    };
                                    html! {
                                        <tr key={expense.id}>
                                            <td class="border border-gray-300 px-4 py-2">{ expense.date.clone() }</td>
                                            <td class="border border-gray-300 px-4 py-2">
                                                <span class="flex items-center">
                                                    <span class="text-xl mr-2">{ category_icon(&expense.category) }</span>
                                                    { expense.category.clone() }
                                                </span>
                                            </td>
                                            <td class="border border-gray-300 px-4 py-2">{ format_amount(expense.amount) }</td>
                                            <td class="border border-gray-300 px-4 py-2">
                                                { if expense.description.is_empty() { "N/A".to_string() } else { expense.description.clone() } }
                                            </td>
                                            <td class="border border-gray-300 px-4 py-2">
                                                <button onclick={on_edit} class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-500 mr-2">
                                                    {"Edit"}
                                                </button>
                                                <button onclick={on_delete} class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-500">
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            }
                        </tbody>
                    </table>

                    <div class="flex justify-between items-center mt-4">
                        <button
                            onclick={prev_page}
                            class={if *page == 1 { "px-4 py-2 rounded bg-gray-300 text-gray-500 cursor-not-allowed" } else { "px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-500" }}
                            disabled={*page == 1}
                        >
                            {"Previous"}
                        </button>
                        <span class="text-gray-700">{ format!("Page {} of {}", *page, *total_pages) }</span>
                        <button
                            onclick={next_page}
                            class={if *page == *total_pages { "px-4 py-2 rounded bg-gray-300 text-gray-500 cursor-not-allowed" } else { "px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-500" }}
                            disabled={*page == *total_pages}
                        >
                            {"Next"}
                        </button>
                    </div>
                </div>
            </div>

            <button
                onclick={{
                    let show_add = show_add.clone();
                    Callback::from(move |_| show_add.set(true))
                }}
                class="fixed bottom-6 right-6 bg-blue-600 text-white text-3xl w-14 h-14 rounded-full shadow-lg flex items-center justify-center hover:bg-blue-500"
                title="Add Expense"
            >
                {"+"}
            </button>

            if *show_add {
                <ExpenseForm
                    on_submit={on_add_submit}
                    on_close={{
                        let show_add = show_add.clone();
                        Callback::from(move |_| show_add.set(false))
                    }}
                />
            }

            if let Some(expense) = &*editing {
                <ExpenseForm
                    initial={Some(expense.clone())}
                    on_submit={{
                        let session = session.clone();
                        let expenses = expenses.clone();
                        let editing = editing.clone();
                        let error = error.clone();
                        let success = success.clone();
                        let expense_id = expense.id;
                        Callback::from(move |draft: ExpenseDraft| {
                            let Some(session) = session.clone() else {
                                return;
                            };
                            let expenses = expenses.clone();
                            let editing = editing.clone();
                            let error = error.clone();
                            let success = success.clone();
                            spawn_local(async move {
                                match ApiClient::new(&session)
                                    .update_expense(expense_id, session.user_id, &draft)
                                    .await
                                {
                                    Ok(updated) => {
                                        let mut next = (*expenses).clone();
                                        upsert(&mut next, updated);
                                        expenses.set(next);
                                        editing.set(None);
                                        flash(&success, "Expense updated successfully!");
                                    }
                                    Err(err) => {
                                        error.set(Some(format!("Error updating expense: {}", err)));
                                    }
                                }
                            });
                        })
                    }}
                    on_close={{
                        let editing = editing.clone();
                        Callback::from(move |_| editing.set(None))
                    }}
                />
            }

            if confirm_delete.is_some() {
                <ConfirmDialog
                    message="Do you really want to delete this expense? This action cannot be undone."
                    on_confirm={on_delete_confirmed}
                    on_cancel={{
                        let confirm_delete = confirm_delete.clone();
                        Callback::from(move |_| confirm_delete.set(None))
                    }}
                />
            }
        </div>
    }
}
