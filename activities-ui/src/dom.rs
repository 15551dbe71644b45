//! Page Anchors
//!
//! Looks up the elements the page provides and the [`ActivityView`] that
//! draws through them.

use leptos::logging::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, Window,
};

use crate::dispatch::ActivityView;
use crate::state::global::UiState;
use crate::state::message::Severity;
use crate::state::plan::RenderPlan;

pub const LIST_ID: &str = "activities-list";
pub const SELECT_ID: &str = "activity";
pub const FORM_ID: &str = "signup-form";
pub const EMAIL_ID: &str = "email";
pub const MESSAGE_ID: &str = "message";

#[derive(Debug, Error)]
pub enum InitError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Missing #{0} element")]
    MissingAnchor(&'static str),

    #[error("DOM error: {0}")]
    Js(String),
}

impl From<JsValue> for InitError {
    fn from(value: JsValue) -> Self {
        InitError::Js(format!("{:?}", value))
    }
}

/// Elements the UI draws into. Optional ones disable their feature when absent.
pub struct Anchors {
    pub list: Option<HtmlElement>,
    pub select: HtmlSelectElement,
    pub form: Option<HtmlFormElement>,
    pub email: Option<HtmlInputElement>,
    pub message: HtmlElement,
}

impl Anchors {
    pub fn discover(document: &Document) -> Result<Self, InitError> {
        let list = lookup::<HtmlElement>(document, LIST_ID);
        if list.is_none() {
            warn!("#{} not found; activity list disabled", LIST_ID);
        }

        let form = lookup::<HtmlFormElement>(document, FORM_ID);
        if form.is_none() {
            warn!("#{} not found; signup disabled", FORM_ID);
        }

        let email = lookup::<HtmlInputElement>(document, EMAIL_ID);
        if email.is_none() {
            warn!("#{} not found; signup disabled", EMAIL_ID);
        }

        let select = match lookup::<HtmlSelectElement>(document, SELECT_ID) {
            Some(select) => select,
            None => fallback_select(document, form.as_ref())?,
        };

        let message = match lookup::<HtmlElement>(document, MESSAGE_ID) {
            Some(message) => message,
            None => fallback_message(document)?,
        };

        Ok(Self {
            list,
            select,
            form,
            email,
            message,
        })
    }
}

pub fn window() -> Result<Window, InitError> {
    web_sys::window().ok_or(InitError::NoWindow)
}

pub fn document() -> Result<Document, InitError> {
    window()?.document().ok_or(InitError::NoDocument)
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

fn fallback_select(
    document: &Document,
    form: Option<&HtmlFormElement>,
) -> Result<HtmlSelectElement, InitError> {
    warn!("#{} not found; creating a fallback select", SELECT_ID);

    let select: HtmlSelectElement = document.create_element("select")?.unchecked_into();
    select.set_id(SELECT_ID);
    select.set_name(SELECT_ID);

    match form {
        Some(form) => form.append_child(&select)?,
        None => body(document)?.append_child(&select)?,
    };
    Ok(select)
}

fn fallback_message(document: &Document) -> Result<HtmlElement, InitError> {
    warn!("#{} not found; creating a fallback message area", MESSAGE_ID);

    let message: HtmlElement = document.create_element("div")?.unchecked_into();
    message.set_id(MESSAGE_ID);
    message.set_class_name("hidden");
    body(document)?.append_child(&message)?;
    Ok(message)
}

fn body(document: &Document) -> Result<HtmlElement, InitError> {
    document.body().ok_or(InitError::MissingAnchor("body"))
}

/// [`ActivityView`] backed by the reactive [`UiState`] and the page form
pub struct DomView {
    state: UiState,
    form: Option<HtmlFormElement>,
}

impl DomView {
    pub fn new(state: UiState, form: Option<HtmlFormElement>) -> Self {
        Self { state, form }
    }
}

impl ActivityView for DomView {
    fn render(&self, plan: RenderPlan) {
        self.state.apply_plan(plan);
    }

    fn render_load_failure(&self) {
        self.state.mark_load_failed();
    }

    fn show_message(&self, text: &str, severity: Severity) {
        self.state.show_message(text, severity);
    }

    fn reset_signup_form(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
