//! App Startup
//!
//! Wires the page anchors, reactive state and dispatcher together, then runs
//! the initial load.

use leptos::logging::log;
use leptos::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, SubmitEvent};

use crate::api::HttpApi;
use crate::components::{ActivityList, ActivityOptions};
use crate::dispatch::Dispatcher;
use crate::dom::{self, Anchors, DomView, InitError};
use crate::state::global::UiState;
use crate::state::intent::{Intent, RemovalTarget, SignupForm};

type AppDispatcher = Dispatcher<HttpApi, DomView>;

/// Created once at startup and handed to each setup step
pub struct UiContext {
    pub anchors: Anchors,
    pub state: UiState,
    pub dispatcher: Rc<AppDispatcher>,
}

impl UiContext {
    pub fn new(anchors: Anchors) -> Self {
        let state = UiState::new();
        let view = DomView::new(state, anchors.form.clone());
        let dispatcher = Dispatcher::new(HttpApi::from_storage(), view);

        Self {
            anchors,
            state,
            dispatcher,
        }
    }
}

pub fn start() -> Result<(), InitError> {
    let document = dom::document()?;
    let ctx = UiContext::new(Anchors::discover(&document)?);

    bind_message(&ctx);
    mount_options(&ctx);
    mount_list(&ctx);
    bind_signup(&ctx)?;

    log!("Activities UI started");
    ctx.dispatcher.dispatch(Intent::Refresh);
    Ok(())
}

fn bind_message(ctx: &UiContext) {
    let message = ctx.anchors.message.clone();
    let slot = ctx.state.message;

    create_effect(move |_| {
        slot.with(|slot| {
            message.set_class_name(&slot.class_name());
            message.set_text_content(Some(slot.text()));
        });
    });
}

fn mount_options(ctx: &UiContext) {
    let select: HtmlElement = ctx.anchors.select.clone().into();
    select.set_inner_html("");

    let plan = ctx.state.plan;
    mount_to(select, move || {
        view! { <ActivityOptions options=Signal::derive(move || plan.with(|p| p.options.clone())) /> }
    });
}

fn mount_list(ctx: &UiContext) {
    let Some(list) = ctx.anchors.list.clone() else {
        return;
    };
    list.set_inner_html("");

    let state = ctx.state;
    let dispatcher = Rc::clone(&ctx.dispatcher);
    let on_remove = Callback::new(move |target: RemovalTarget| {
        dispatcher.dispatch(Intent::RemoveParticipant(target));
    });

    mount_to(list, move || {
        view! { <ActivityList status=state.status plan=state.plan on_remove=on_remove /> }
    });
}

fn bind_signup(ctx: &UiContext) -> Result<(), InitError> {
    let (Some(form), Some(email)) = (ctx.anchors.form.clone(), ctx.anchors.email.clone()) else {
        return Ok(());
    };

    let select = ctx.anchors.select.clone();
    let dispatcher = Rc::clone(&ctx.dispatcher);
    let on_submit = Closure::<dyn FnMut(SubmitEvent)>::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatcher.dispatch(Intent::Signup(read_form(&email, &select)));
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_submit.forget();
    Ok(())
}

fn read_form(email: &HtmlInputElement, select: &HtmlSelectElement) -> SignupForm {
    SignupForm::new(email.value(), select.value())
}
