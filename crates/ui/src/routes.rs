use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let mut dark_mode = use_signal(|| false);
    let shell_class = if dark_mode() { "app app--dark" } else { "app" };
    let toggle_label = if dark_mode() { "Light Mode" } else { "Dark Mode" };

    rsx! {
        div { class: "{shell_class}",
            header { class: "topbar",
                h1 { class: "topbar__title", "Quiz" }
                button {
                    class: "topbar__toggle",
                    id: "dark-mode-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let value = dark_mode();
                        dark_mode.set(!value);
                    },
                    "{toggle_label}"
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
