use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, UiSlots};
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{QuizOutcome, QuizScreen, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let slots = use_context::<UiSlots>();
    let navigator = use_navigator();
    let quiz = slots.quiz;
    let answer_wait = slots.answer_wait;

    let error = use_signal(|| None::<ViewError>);

    let on_answer = {
        let quiz_loop = ctx.quiz_loop();
        use_callback(move |choice: String| {
            let quiz_loop = quiz_loop.clone();
            let mut quiz = quiz;
            let mut answer_wait = answer_wait;
            let mut error = error;
            if answer_wait().is_some() {
                return;
            }
            // The slot stays empty until the answer settles; `answer_wait`
            // keeps the screen on a waiting notice meanwhile.
            let taken = quiz.write().take();
            let Some(mut vm) = taken else {
                error.set(Some(ViewError::Unknown));
                return;
            };
            answer_wait.set(Some(vm.answer_wait()));

            spawn(async move {
                let result = vm.answer(&quiz_loop, &choice).await;
                quiz.set(Some(vm));
                answer_wait.set(None);

                match result {
                    Ok(QuizOutcome::Continue) => error.set(None),
                    Ok(QuizOutcome::Completed { saved }) => {
                        log::debug!("quiz finished, score saved: {saved}");
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        })
    };

    let on_quit = {
        let quiz_loop = ctx.quiz_loop();
        move |_: MouseEvent| {
            let mut quiz = quiz;
            if let Some(vm) = quiz.write().take() {
                vm.abandon(&quiz_loop);
            }
            navigator.push(Route::Home {});
        }
    };

    let on_dismiss = move |_: MouseEvent| {
        let mut quiz = quiz;
        quiz.set(None);
        navigator.push(Route::Home {});
    };

    let waiting = answer_wait();
    let screen = quiz.read().as_ref().map(QuizVm::screen);

    rsx! {
        div { class: "page quiz",
            match (screen, waiting) {
                (None, Some(wait)) => rsx! {
                    p { id: "quiz-waiting", class: "muted", "{wait.label()}" }
                },
                (None, None) => rsx! {
                    p { "No quiz in progress." }
                    div { class: "actions",
                        button {
                            onclick: move |_| {
                                navigator.push(Route::Home {});
                            },
                            "Back to Menu"
                        }
                    }
                },
                (Some(QuizScreen::Question { score_label, text, choices }), _) => rsx! {
                    p { class: "score", "{score_label}" }
                    p { class: "question", "{text}" }
                    div { class: "choices",
                        for (idx, choice) in choices.into_iter().enumerate() {
                            button {
                                key: "{idx}",
                                id: "answer-{idx}",
                                disabled: waiting.is_some(),
                                onclick: {
                                    let choice = choice.clone();
                                    move |_| on_answer.call(choice.clone())
                                },
                                "{choice}"
                            }
                        }
                    }
                    if let Some(err) = error() {
                        p { class: "error", "{err.message()}" }
                    }
                    div { class: "actions",
                        button { id: "quiz-quit", class: "secondary", onclick: on_quit, "Quit" }
                    }
                },
                (Some(QuizScreen::Completed { title, detail, dismiss_label }), _) => rsx! {
                    h2 { "{title}" }
                    p { "{detail}" }
                    div { class: "actions",
                        button { id: "quiz-dismiss", onclick: on_dismiss, "{dismiss_label}" }
                    }
                },
            }
        }
    }
}
