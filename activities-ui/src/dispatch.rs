//! Intent Dispatcher
//!
//! Single-threaded consumer for user [`Intent`]s. Each intent runs as its own
//! local task: it performs the request, reports the outcome through the
//! [`ActivityView`], and re-fetches the list after a successful mutation.

use leptos::logging::{debug_warn, error, log, warn};
use leptos::spawn_local;
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{ActivitiesApi, ApiError};
use crate::state::intent::{Intent, RemovalTarget, SignupForm};
use crate::state::message::Severity;
use crate::state::plan::RenderPlan;

pub const MISSING_SIGNUP_INPUT: &str = "Please provide an email and select an activity";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const REMOVE_FAILED: &str = "Failed to remove participant";

/// Surface the dispatcher draws on
pub trait ActivityView {
    /// Replace all cards and options
    fn render(&self, plan: RenderPlan);

    /// Replace the list with the load failure notice
    fn render_load_failure(&self);

    /// Show a transient message
    fn show_message(&self, text: &str, severity: Severity);

    /// Clear the signup form fields
    fn reset_signup_form(&self);

    /// Ask the user to confirm; `false` when declined or unavailable
    fn confirm(&self, prompt: &str) -> bool;
}

/// Hands out increasing load ids; only the newest load may render
#[derive(Debug, Default)]
pub struct LoadSequencer {
    latest: Cell<u64>,
}

impl LoadSequencer {
    pub fn begin(&self) -> u64 {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        id
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.latest.get() == id
    }
}

pub struct Dispatcher<A, V> {
    api: A,
    view: V,
    loads: LoadSequencer,
}

impl<A, V> Dispatcher<A, V>
where
    A: ActivitiesApi + 'static,
    V: ActivityView + 'static,
{
    pub fn new(api: A, view: V) -> Rc<Self> {
        Rc::new(Self {
            api,
            view,
            loads: LoadSequencer::default(),
        })
    }

    /// Queue an intent on the UI thread
    pub fn dispatch(self: &Rc<Self>, intent: Intent) {
        let this = Rc::clone(self);
        spawn_local(async move {
            this.handle(intent).await;
        });
    }

    /// Run an intent to completion
    pub async fn handle(&self, intent: Intent) {
        match intent {
            Intent::Refresh => self.load().await,
            Intent::Signup(form) => self.signup(form).await,
            Intent::RemoveParticipant(target) => self.remove(target).await,
        }
    }

    async fn load(&self) {
        let id = self.loads.begin();
        let result = self.api.list_activities().await;

        if !self.loads.is_current(id) {
            debug_warn!("Discarding activities response {} superseded by a newer load", id);
            return;
        }

        match result {
            Ok(activities) => {
                log!("Loaded {} activities", activities.len());
                self.view.render(RenderPlan::from_collection(&activities));
            }
            Err(e) => {
                error!("Error fetching activities: {}", e);
                self.view.render_load_failure();
            }
        }
    }

    async fn signup(&self, form: SignupForm) {
        let Some(request) = form.validate() else {
            self.view.show_message(MISSING_SIGNUP_INPUT, Severity::Error);
            return;
        };

        match self.api.signup(&request.activity, &request.email).await {
            Ok(message) => {
                self.view.show_message(&message, Severity::Success);
                self.view.reset_signup_form();
                self.load().await;
            }
            Err(e) => self.report_failure("Signup", &e, SIGNUP_FAILED),
        }
    }

    async fn remove(&self, target: RemovalTarget) {
        if !self.view.confirm(&target.confirm_prompt()) {
            return;
        }

        match self.api.unregister(&target.activity, &target.email).await {
            Ok(message) => {
                self.view.show_message(&message, Severity::Success);
                self.load().await;
            }
            Err(e) => self.report_failure("Unregister", &e, REMOVE_FAILED),
        }
    }

    fn report_failure(&self, action: &str, err: &ApiError, fallback: &str) {
        warn!("{} failed: {}", action, err);
        self.view.show_message(&err.user_message(fallback), Severity::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::NETWORK_ERROR;
    use crate::state::model::{activity, ActivityCollection};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    type ListReply = Result<ActivityCollection, ApiError>;

    #[derive(Default)]
    struct FakeApi {
        lists: RefCell<VecDeque<oneshot::Receiver<ListReply>>>,
        signup_reply: RefCell<Option<Result<String, ApiError>>>,
        unregister_reply: RefCell<Option<Result<String, ApiError>>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn queue_list(&self, reply: ListReply) {
            let (tx, rx) = oneshot::channel();
            let _ = tx.send(reply);
            self.lists.borrow_mut().push_back(rx);
        }

        fn defer_list(&self) -> oneshot::Sender<ListReply> {
            let (tx, rx) = oneshot::channel();
            self.lists.borrow_mut().push_back(rx);
            tx
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn list_calls(&self) -> usize {
            self.calls().iter().filter(|c| *c == "GET /activities").count()
        }
    }

    #[async_trait(?Send)]
    impl ActivitiesApi for Rc<FakeApi> {
        async fn list_activities(&self) -> Result<ActivityCollection, ApiError> {
            self.calls.borrow_mut().push("GET /activities".to_string());
            let rx = self.lists.borrow_mut().pop_front();
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("dropped".into()))),
                None => Err(ApiError::Network("no reply queued".into())),
            }
        }

        async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("POST {} {}", activity, email));
            self.signup_reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(ApiError::Network("no reply queued".into())))
        }

        async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("DELETE {} {}", activity, email));
            self.unregister_reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(ApiError::Network("no reply queued".into())))
        }
    }

    #[derive(Default)]
    struct FakeView {
        renders: RefCell<Vec<RenderPlan>>,
        failures: Cell<usize>,
        messages: RefCell<Vec<(String, Severity)>>,
        resets: Cell<usize>,
        prompts: RefCell<Vec<String>>,
        confirm_answer: Cell<bool>,
    }

    impl FakeView {
        fn last_message(&self) -> Option<(String, Severity)> {
            self.messages.borrow().last().cloned()
        }
    }

    impl ActivityView for Rc<FakeView> {
        fn render(&self, plan: RenderPlan) {
            self.renders.borrow_mut().push(plan);
        }

        fn render_load_failure(&self) {
            self.failures.set(self.failures.get() + 1);
        }

        fn show_message(&self, text: &str, severity: Severity) {
            self.messages.borrow_mut().push((text.to_string(), severity));
        }

        fn reset_signup_form(&self) {
            self.resets.set(self.resets.get() + 1);
        }

        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.confirm_answer.get()
        }
    }

    fn setup() -> (Rc<FakeApi>, Rc<FakeView>, Rc<Dispatcher<Rc<FakeApi>, Rc<FakeView>>>) {
        let api = Rc::new(FakeApi::default());
        let view = Rc::new(FakeView::default());
        let dispatcher = Dispatcher::new(Rc::clone(&api), Rc::clone(&view));
        (api, view, dispatcher)
    }

    fn chess_club() -> ActivityCollection {
        [(
            "Chess Club".to_string(),
            activity("d", "Mon 3pm", 2, &["a@x.com"]),
        )]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_refresh_renders_plan() {
        let (api, view, dispatcher) = setup();
        api.queue_list(Ok(chess_club()));

        dispatcher.handle(Intent::Refresh).await;

        let renders = view.renders.borrow();
        assert_eq!(renders.len(), 1);
        assert_eq!(renders[0].options, vec!["Chess Club"]);
        assert_eq!(renders[0].cards[0].availability(), "1 spots left");
    }

    #[tokio::test]
    async fn test_refresh_failure_shows_notice() {
        let (api, view, dispatcher) = setup();
        api.queue_list(Err(ApiError::Rejected {
            status: 500,
            detail: None,
        }));

        dispatcher.handle(Intent::Refresh).await;

        assert_eq!(view.failures.get(), 1);
        assert!(view.renders.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_renders_empty_collection() {
        let (api, view, dispatcher) = setup();
        api.queue_list(Ok(chess_club()));
        api.queue_list(Ok(ActivityCollection::default()));

        dispatcher.handle(Intent::Refresh).await;
        dispatcher.handle(Intent::Refresh).await;

        let renders = view.renders.borrow();
        assert_eq!(renders.len(), 2);
        assert!(renders[1].cards.is_empty());
        assert!(renders[1].options.is_empty());
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let (api, view, dispatcher) = setup();
        let first = api.defer_list();
        let second = api.defer_list();

        let newer = [(
            "Soccer".to_string(),
            activity("d", "s", 10, &[]),
        )]
        .into_iter()
        .collect::<ActivityCollection>();

        let release = async {
            let _ = second.send(Ok(newer));
            tokio::task::yield_now().await;
            let _ = first.send(Ok(chess_club()));
        };

        tokio::join!(
            dispatcher.handle(Intent::Refresh),
            dispatcher.handle(Intent::Refresh),
            release
        );

        let renders = view.renders.borrow();
        assert_eq!(renders.len(), 1);
        assert_eq!(renders[0].options, vec!["Soccer"]);
    }

    #[tokio::test]
    async fn test_signup_without_email_makes_no_request() {
        let (api, view, dispatcher) = setup();

        dispatcher
            .handle(Intent::Signup(SignupForm::new("", "Chess Club")))
            .await;

        assert_eq!(
            view.last_message(),
            Some((MISSING_SIGNUP_INPUT.to_string(), Severity::Error))
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signup_without_activity_makes_no_request() {
        let (api, view, dispatcher) = setup();

        dispatcher
            .handle(Intent::Signup(SignupForm::new("a@x.com", "")))
            .await;

        assert_eq!(
            view.last_message(),
            Some((MISSING_SIGNUP_INPUT.to_string(), Severity::Error))
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signup_success_resets_form_and_refetches() {
        let (api, view, dispatcher) = setup();
        *api.signup_reply.borrow_mut() = Some(Ok("Signed up!".to_string()));
        api.queue_list(Ok(chess_club()));

        dispatcher
            .handle(Intent::Signup(SignupForm::new(" b@x.com ", "Chess Club")))
            .await;

        assert_eq!(
            view.last_message(),
            Some(("Signed up!".to_string(), Severity::Success))
        );
        assert_eq!(view.resets.get(), 1);
        assert_eq!(
            api.calls(),
            vec!["POST Chess Club b@x.com".to_string(), "GET /activities".to_string()]
        );
        assert_eq!(view.renders.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_signup_rejected_shows_detail() {
        let (api, view, dispatcher) = setup();
        *api.signup_reply.borrow_mut() = Some(Err(ApiError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".into()),
        }));

        dispatcher
            .handle(Intent::Signup(SignupForm::new("a@x.com", "Chess Club")))
            .await;

        assert_eq!(
            view.last_message(),
            Some(("Student is already signed up".to_string(), Severity::Error))
        );
        assert_eq!(view.resets.get(), 0);
        assert_eq!(api.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_signup_rejected_without_detail_uses_fallback() {
        let (api, view, dispatcher) = setup();
        *api.signup_reply.borrow_mut() = Some(Err(ApiError::Rejected {
            status: 500,
            detail: None,
        }));

        dispatcher
            .handle(Intent::Signup(SignupForm::new("a@x.com", "Chess Club")))
            .await;

        assert_eq!(
            view.last_message(),
            Some((SIGNUP_FAILED.to_string(), Severity::Error))
        );
    }

    #[tokio::test]
    async fn test_signup_network_error() {
        let (api, view, dispatcher) = setup();
        *api.signup_reply.borrow_mut() = Some(Err(ApiError::Network("offline".into())));

        dispatcher
            .handle(Intent::Signup(SignupForm::new("a@x.com", "Chess Club")))
            .await;

        assert_eq!(
            view.last_message(),
            Some((NETWORK_ERROR.to_string(), Severity::Error))
        );
        assert_eq!(api.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_remove_declined_does_nothing() {
        let (api, view, dispatcher) = setup();
        view.confirm_answer.set(false);

        dispatcher
            .handle(Intent::RemoveParticipant(RemovalTarget::new(
                "Chess Club",
                "a@x.com",
            )))
            .await;

        assert_eq!(
            view.prompts.borrow().as_slice(),
            ["Remove a@x.com from Chess Club?".to_string()]
        );
        assert!(api.calls().is_empty());
        assert!(view.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_remove_success_refetches() {
        let (api, view, dispatcher) = setup();
        view.confirm_answer.set(true);
        *api.unregister_reply.borrow_mut() =
            Some(Ok("Removed a@x.com from Chess Club".to_string()));
        api.queue_list(Ok(ActivityCollection::default()));

        dispatcher
            .handle(Intent::RemoveParticipant(RemovalTarget::new(
                "Chess Club",
                "a@x.com",
            )))
            .await;

        assert_eq!(
            view.last_message(),
            Some(("Removed a@x.com from Chess Club".to_string(), Severity::Success))
        );
        assert_eq!(
            api.calls(),
            vec!["DELETE Chess Club a@x.com".to_string(), "GET /activities".to_string()]
        );
        assert_eq!(view.resets.get(), 0);
    }

    #[tokio::test]
    async fn test_remove_not_found_shows_detail_without_refetch() {
        let (api, view, dispatcher) = setup();
        view.confirm_answer.set(true);
        *api.unregister_reply.borrow_mut() = Some(Err(ApiError::Rejected {
            status: 404,
            detail: Some("Not found".into()),
        }));

        dispatcher
            .handle(Intent::RemoveParticipant(RemovalTarget::new(
                "Chess Club",
                "a@x.com",
            )))
            .await;

        assert_eq!(
            view.last_message(),
            Some(("Not found".to_string(), Severity::Error))
        );
        assert_eq!(api.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_remove_without_detail_uses_fallback() {
        let (api, view, dispatcher) = setup();
        view.confirm_answer.set(true);
        *api.unregister_reply.borrow_mut() = Some(Err(ApiError::Rejected {
            status: 500,
            detail: None,
        }));

        dispatcher
            .handle(Intent::RemoveParticipant(RemovalTarget::new(
                "Chess Club",
                "a@x.com",
            )))
            .await;

        assert_eq!(
            view.last_message(),
            Some((REMOVE_FAILED.to_string(), Severity::Error))
        );
    }

    #[test]
    fn test_load_sequencer() {
        let loads = LoadSequencer::default();
        let first = loads.begin();
        assert!(loads.is_current(first));

        let second = loads.begin();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
    }
}
