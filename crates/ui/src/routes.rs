use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{LeaderboardView, MenuView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", MenuView)] Home {},
    #[route("/quiz", QuizView)] Quiz {},
    #[route("/leaderboard", LeaderboardView)] Leaderboard {},
}
