use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::UiSlots;
use crate::routes::Route;

#[component]
pub fn LeaderboardView() -> Element {
    let slots = use_context::<UiSlots>();
    let navigator = use_navigator();
    let board = slots.leaderboard.read().clone();

    rsx! {
        div { class: "page leaderboard",
            h2 { "Leaderboard" }
            match board {
                Some(vm) => rsx! {
                    p { class: "muted", "{vm.difficulty_label}" }
                    if vm.rows.is_empty() {
                        p { "No scores yet." }
                    } else {
                        ul { class: "leaderboard-rows",
                            for row in vm.rows.iter() {
                                li { key: "{row.rank}", "{row.label}" }
                            }
                        }
                    }
                },
                None => rsx! {
                    p { "No leaderboard loaded." }
                },
            }
            div { class: "actions",
                button {
                    id: "leaderboard-back",
                    onclick: move |_| {
                        let mut board = slots.leaderboard;
                        board.set(None);
                        navigator.push(Route::Home {});
                    },
                    "Back"
                }
            }
        }
    }
}
