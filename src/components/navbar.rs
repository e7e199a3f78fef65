use yew::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Route,
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(NavBar)]
pub fn navbar(props: &NavBarProps) -> Html {
    let tabs = [
        ("Expenses", Route::Expenses),
        ("Income", Route::Income),
        ("Bank Accounts", Route::BankAccounts),
    ];

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| on_logout.emit(()))
    };

    let on_profile = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::Profile))
    };

    html! {
        <nav class="w-full bg-blue-600 text-white py-3 px-5 flex justify-between items-center shadow-md">
            <div class="flex items-center space-x-4">
                <h2 class="text-xl font-semibold">{"FinTrack"}</h2>
                { for tabs.iter().map(|(label, route)| {
                    let class_name = if *route == props.active {
                        "px-4 py-2 bg-blue-400 rounded"
                    } else {
                        "px-4 py-2 bg-blue-500 rounded hover:bg-blue-400"
                    };
                    let on_navigate = props.on_navigate.clone();
                    let route = *route;
                    html! {
                        <button class={class_name} onclick={Callback::from(move |_| on_navigate.emit(route))}>
                            { *label }
                        </button>
                    }
                }) }
            </div>
            <div class="flex items-center space-x-4">
                <button
                    class="w-10 h-10 bg-white text-blue-600 flex items-center justify-center rounded-full font-bold hover:bg-gray-200"
                    onclick={on_profile}
                >
                    {"U"}
                </button>
                <button class="px-4 py-2 bg-red-500 rounded hover:bg-red-400" onclick={on_logout}>
                    {"Log Out"}
                </button>
            </div>
        </nav>
    }
}
