use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{AppContext, UiSlots};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    MenuRequest, difficulty_options, load_category_options, load_leaderboard, start_quiz,
};

#[component]
pub fn MenuView() -> Element {
    let ctx = use_context::<AppContext>();
    let slots = use_context::<UiSlots>();
    let navigator = use_navigator();
    let mut menu = slots.menu;

    let error = use_signal(|| None::<ViewError>);

    let catalog = ctx.catalog();
    let categories = use_resource(move || {
        let catalog = catalog.clone();
        async move { load_category_options(&catalog).await }
    });
    let category_state = view_state_from_resource(&categories);

    let on_start = {
        let quiz_loop = ctx.quiz_loop();
        move |_: MouseEvent| {
            let snapshot = menu.read().clone();
            let (Some(player), Some(selection)) = (snapshot.player(), snapshot.selection()) else {
                return;
            };
            if !menu.write().begin(MenuRequest::StartQuiz) {
                return;
            }
            let quiz_loop = quiz_loop.clone();
            let mut quiz_slot = slots.quiz;
            let mut error = error;
            spawn(async move {
                let started = start_quiz(&quiz_loop, player, selection).await;
                menu.write().finish();
                match started {
                    Ok(vm) => {
                        error.set(None);
                        quiz_slot.set(Some(vm));
                        navigator.push(Route::Quiz {});
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    let on_leaderboard = {
        let leaderboards = ctx.leaderboard();
        move |_: MouseEvent| {
            let Some(selection) = menu.read().selection() else {
                return;
            };
            if !menu.write().begin(MenuRequest::Leaderboard) {
                return;
            }
            let leaderboards = leaderboards.clone();
            let mut board_slot = slots.leaderboard;
            let mut error = error;
            spawn(async move {
                let loaded = load_leaderboard(&leaderboards, &selection).await;
                menu.write().finish();
                match loaded {
                    Ok(vm) => {
                        error.set(None);
                        board_slot.set(Some(vm));
                        navigator.push(Route::Leaderboard {});
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    let menu_read = menu.read();
    let can_start = menu_read.can_start();
    let can_view_leaderboard = menu_read.can_view_leaderboard();
    let pending = menu_read.pending;
    let player_name = menu_read.player_name.clone();
    let category_value = menu_read.category_value().to_string();
    let difficulty_value = menu_read.difficulty_value();
    drop(menu_read);

    let start_label = if pending == Some(MenuRequest::StartQuiz) {
        "Loading..."
    } else {
        "Start Quiz"
    };

    rsx! {
        div { class: "page menu",
            h1 { "Trivia Quiz" }

            div { class: "field",
                input {
                    id: "player-name",
                    r#type: "text",
                    placeholder: "Enter your name",
                    value: "{player_name}",
                    oninput: move |evt| menu.write().set_player_name(evt.value()),
                }
            }

            div { class: "field",
                label { r#for: "category", "Category:" }
                select {
                    id: "category",
                    value: "{category_value}",
                    onchange: move |evt| menu.write().select_category(&evt.value()),
                    option { value: "", "Select a category" }
                    if let ViewState::Ready(options) = &category_state {
                        for opt in options.iter() {
                            option {
                                key: "{opt.value}",
                                value: "{opt.value}",
                                selected: opt.value == category_value,
                                "{opt.label}"
                            }
                        }
                    }
                }
                match &category_state {
                    ViewState::Loading => rsx! {
                        p { class: "muted", "Loading categories..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                        button {
                            class: "secondary",
                            onclick: move |_| {
                                let mut categories = categories;
                                categories.restart();
                            },
                            "Retry"
                        }
                    },
                    ViewState::Idle | ViewState::Ready(_) => rsx! {},
                }
            }

            div { class: "field",
                label { r#for: "difficulty", "Difficulty:" }
                select {
                    id: "difficulty",
                    value: "{difficulty_value}",
                    onchange: move |evt| menu.write().select_difficulty(&evt.value()),
                    option { value: "", "Select a difficulty" }
                    for opt in difficulty_options() {
                        option {
                            key: "{opt.value}",
                            value: "{opt.value}",
                            selected: opt.value == difficulty_value,
                            "{opt.label}"
                        }
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }

            div { class: "actions",
                button {
                    id: "start-quiz",
                    disabled: !can_start,
                    onclick: on_start,
                    "{start_label}"
                }
                button {
                    id: "view-leaderboard",
                    class: "secondary",
                    disabled: !can_view_leaderboard,
                    onclick: on_leaderboard,
                    "View Leaderboard"
                }
            }
        }
    }
}
