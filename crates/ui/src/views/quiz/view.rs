use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{QuizIntent, QuizVm, ReviewEntryVm};

use super::scripts::quiz_timer_script;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let catalog = ctx.catalog();

    let vm = use_signal({
        let quiz_loop = quiz_loop.clone();
        move || QuizVm::start(&quiz_loop, catalog)
    });
    let show_review = use_signal(|| false);

    let dispatch = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |intent: QuizIntent| {
            let mut vm = vm;
            let mut show_review = show_review;
            if intent == QuizIntent::Restart {
                show_review.set(false);
            }
            vm.write().dispatch(&quiz_loop, intent);
        })
    };

    // Keep the webview interval in step with the session: running whenever a
    // countdown or timeout auto-advance needs ticks, cleared otherwise.
    use_effect(move || {
        let active = vm.read().timer_active();
        let js = quiz_timer_script(active);
        let _ = eval(&js);
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = evt.data.key().to_string();
        match key.as_str() {
            "Escape" => {
                evt.prevent_default();
                let _ = navigator.push(Route::Home {});
            }
            "1" | "2" | "3" | "4" => {
                if vm.read().in_progress() {
                    evt.prevent_default();
                    let index = match key.as_str() {
                        "1" => 0,
                        "2" => 1,
                        "3" => 2,
                        _ => 3,
                    };
                    dispatch.call(QuizIntent::Answer(index));
                }
            }
            "Enter" | " " => {
                if vm.read().can_advance() {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::Advance);
                }
            }
            _ => {}
        }
    });

    let vm_guard = vm.read();
    let finished = vm_guard.is_finished();
    let in_progress = vm_guard.in_progress();
    let timed_out = vm_guard.timed_out();
    let can_advance = vm_guard.can_advance();
    let question_label = vm_guard.question_label();
    let options = vm_guard.options();
    let progress_label = vm_guard.progress_label();
    let timer_label = vm_guard.timer_label();
    let result = vm_guard.result();
    let review_entries = if finished && show_review() {
        vm_guard.review_entries()
    } else {
        Vec::new()
    };

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            // Hidden 1 Hz target for the webview interval.
            button {
                class: "quiz-tick",
                id: "quiz-tick",
                r#type: "button",
                tabindex: "-1",
                onclick: move |_| dispatch.call(QuizIntent::Tick),
            }

            if finished {
                if show_review() {
                    section { class: "review",
                        h3 { "Review Answers" }
                        ReviewList { entries: review_entries }
                        div { class: "result-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut show_review = show_review;
                                    show_review.set(false);
                                },
                                "Back to Score"
                            }
                            button {
                                class: "btn btn-primary",
                                id: "restart-btn",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Restart),
                                "Play Again"
                            }
                            button {
                                class: "btn btn-ghost",
                                id: "go-home-btn",
                                r#type: "button",
                                onclick: move |_| {
                                    let _ = navigator.push(Route::Home {});
                                },
                                "Home"
                            }
                        }
                    }
                } else if let Some(result) = result {
                    section { class: "result",
                        h3 { "Quiz Complete" }
                        p { class: "result__score", id: "score", "{result.score_line}" }
                        p { class: "result__detail", "{result.detail_line}" }
                        div { class: "result-actions",
                            button {
                                class: "btn btn-primary",
                                id: "play-again-btn",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::Restart),
                                "Play Again"
                            }
                            button {
                                class: "btn btn-secondary",
                                id: "review-btn",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut show_review = show_review;
                                    show_review.set(true);
                                },
                                "Review Answers"
                            }
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| {
                                    let _ = navigator.push(Route::Home {});
                                },
                                "Home"
                            }
                        }
                    }
                }
            } else {
                header { class: "quiz-header",
                    span { class: "quiz-header__progress", "{progress_label}" }
                    if in_progress {
                        span { class: "quiz-header__timer", id: "time", "{timer_label}" }
                    }
                }
                if let Some(label) = question_label {
                    h3 { class: "question-text", id: "question-text", "{label}" }
                }
                div { class: "options", id: "options",
                    for (index, option) in options.into_iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "{option.state.class()}",
                            r#type: "button",
                            disabled: !option.enabled,
                            onclick: move |_| dispatch.call(QuizIntent::Answer(index)),
                            "{option.label}"
                        }
                    }
                }
                if timed_out {
                    p { class: "quiz-timeout-note", "Time's up!" }
                }
                footer { class: "quiz-footer",
                    button {
                        class: "btn btn-primary",
                        id: "next-btn",
                        r#type: "button",
                        disabled: !can_advance,
                        onclick: move |_| dispatch.call(QuizIntent::Advance),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewList(entries: Vec<ReviewEntryVm>) -> Element {
    rsx! {
        div { class: "review-list", id: "review-list",
            for entry in entries {
                div { key: "{entry.number}", class: "review-item",
                    p { class: "review-item__question",
                        strong { "Q{entry.number}: " }
                        "{entry.text}"
                    }
                    div { class: "review-item__options",
                        for (index, option) in entry.options.iter().enumerate() {
                            button {
                                key: "{index}",
                                class: "{option.state.class()} option-btn--small",
                                r#type: "button",
                                disabled: true,
                                "{option.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
