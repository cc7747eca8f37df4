use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::QUESTION_SECONDS;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let total = ctx.catalog().len();

    rsx! {
        div { class: "page welcome-page",
            h2 { "Welcome to the Quiz" }
            p { class: "welcome-page__blurb",
                "{total} questions, {QUESTION_SECONDS} seconds each. Pick the right option before the clock runs out."
            }
            button {
                class: "btn btn-primary",
                id: "start-btn",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Quiz {});
                },
                "Start Quiz"
            }
        }
    }
}
