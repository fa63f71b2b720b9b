use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use remote::{InMemoryRepository, Remote};
use services::{AppServices, CatalogService, LeaderboardService, QuizLoopService};

use crate::context::{UiApp, UiSlots, build_app_context};
use crate::views::{LeaderboardView, MenuView, QuizView};
use crate::vm::{AnswerWait, LeaderboardVm, MenuVm, QuizVm};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    fn leaderboard(&self) -> Arc<LeaderboardService> {
        self.services.leaderboard()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Menu,
    Quiz,
    Leaderboard,
}

/// Initial slot contents, consumed on first render.
#[derive(Default)]
pub struct SlotSeed {
    pub menu: Option<MenuVm>,
    pub quiz: Option<QuizVm>,
    pub answer_wait: Option<AnswerWait>,
    pub leaderboard: Option<LeaderboardVm>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: Rc<RefCell<SlotSeed>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| {
        let mut seed = props.seed.borrow_mut();
        UiSlots {
            menu: Signal::new(seed.menu.take().unwrap_or_default()),
            quiz: Signal::new(seed.quiz.take()),
            answer_wait: Signal::new(seed.answer_wait.take()),
            leaderboard: Signal::new(seed.leaderboard.take()),
        }
    });
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Menu => rsx! { MenuView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Leaderboard => rsx! { LeaderboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// App services backed by `repo`.
pub fn test_services(repo: &InMemoryRepository) -> AppServices {
    AppServices::new(&Remote::from_in_memory(repo.clone()))
}

pub fn setup_view_harness(view: ViewKind, repo: &InMemoryRepository, seed: SlotSeed) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: test_services(repo),
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            seed: Rc::new(RefCell::new(seed)),
        },
    );
    ViewHarness { dom }
}
