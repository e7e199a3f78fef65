use yew::prelude::*;

use crate::components::{bind_input, bind_select};
use crate::format::today;
use crate::models::{Expense, ExpenseDraft, EXPENSE_CATEGORIES};
use crate::validate::{parse_amount, required};

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    /// When set, the form edits this record instead of creating a new one.
    #[prop_or_default]
    pub initial: Option<Expense>,
    pub on_submit: Callback<ExpenseDraft>,
    pub on_close: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let amount = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|e| e.amount.to_string())
            .unwrap_or_default()
    });
    let category = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|e| e.category.clone())
            .unwrap_or_else(|| "Food".to_string())
    });
    let date = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|e| e.date.clone())
            .unwrap_or_else(today)
    });
    let description = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|e| e.description.clone())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);

    let editing = props.initial.is_some();

    let on_submit = {
        let amount = amount.clone();
        let category = category.clone();
        let date = date.clone();
        let description = description.clone();
        let error = error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |_| {
            let parsed = match parse_amount(&amount) {
                Ok(value) => value,
                Err(msg) => {
                    error.set(Some(msg.to_string()));
                    return;
                }
            };
            if !required(&date) || !required(&category) {
                error.set(Some("Please complete all required fields.".to_string()));
                return;
            }
            error.set(None);
            submit.emit(ExpenseDraft {
                amount: parsed,
                category: (*category).clone(),
                date: (*date).clone(),
                description: description.trim().to_string(),
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 backdrop-blur-sm flex items-center justify-center">
            <div class="bg-white p-6 rounded-lg shadow-lg w-3/4 md:w-1/3">
                <h2 class="text-lg font-semibold text-gray-700 mb-4">
                    { if editing { "Edit Expense" } else { "Add New Expense" } }
                </h2>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Amount"}</label>
                    <input
                        type="text"
                        value={(*amount).clone()}
                        oninput={bind_input(&amount)}
                        class="w-full p-2 border rounded"
                        placeholder="Enter amount"
                    />
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Category"}</label>
                    <select
                        value={(*category).clone()}
                        onchange={bind_select(&category)}
                        class="w-full p-2 border rounded"
                    >
                        { for EXPENSE_CATEGORIES.iter().map(|name| html! {
                            <option value={*name} selected={*name == category.as_str()}>{ *name }</option>
                        }) }
                    </select>
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Date"}</label>
                    <input
                        type="date"
                        value={(*date).clone()}
                        oninput={bind_input(&date)}
                        class="w-full p-2 border rounded"
                    />
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Description (Optional)"}</label>
                    <input
                        type="text"
                        value={(*description).clone()}
                        oninput={bind_input(&description)}
                        class="w-full p-2 border rounded"
                        placeholder="What was this for?"
                    />
                </div>

                if let Some(msg) = &*error {
                    <p class="text-sm text-red-600 mb-3">{ msg.clone() }</p>
                }

                <div class="flex justify-end">
                    <button onclick={on_close} class="bg-gray-300 text-gray-700 px-4 py-2 rounded mr-2">
                        {"Cancel"}
                    </button>
                    <button onclick={on_submit} class="bg-blue-600 text-white px-4 py-2 rounded">
                        { if editing { "Save Changes" } else { "Add Expense" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
