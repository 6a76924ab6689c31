//! # Toggle Field Hook
//!
//! Binds a boolean form field to a [`ToggleFieldController`]:
//!
//! - the field value is watched through the shared [`FormContext`]
//! - every change after mount is fed to the controller, which opens the
//!   analyze dialog on an off to on edge
//! - the value present at mount is observed but never opens the dialog

use dioxus::prelude::*;
use wizard_core::ToggleFieldController;

use crate::state::{FormContext, use_form_context};

/// Handle returned by [`use_toggle_field`]
#[derive(Clone, PartialEq)]
pub struct UseToggleField {
    form: FormContext,
    field_name: String,
    value: Memo<Option<bool>>,
    controller: Signal<ToggleFieldController>,
}

impl UseToggleField {
    /// Current field value; `None` when unset
    pub fn value(&self) -> Option<bool> {
        *self.value.read()
    }

    /// Whether the toggle renders as on
    pub fn is_on(&self) -> bool {
        self.value().unwrap_or(false)
    }

    /// Write the field through the form context
    pub fn set(&self, value: bool) {
        let mut form = self.form;
        form.set(&self.field_name, value);
    }

    /// Whether the analyze dialog is visible
    pub fn is_dialog_open(&self) -> bool {
        self.controller.read().is_dialog_open()
    }

    /// Close callback for the analyze dialog
    pub fn close_dialog(&self) {
        let mut controller = self.controller;
        controller.write().close_dialog();
    }
}

/// Bind the named boolean field of the surrounding form
///
/// The field name is fixed for the lifetime of the calling component.
pub fn use_toggle_field(field_name: &str) -> UseToggleField {
    let form = use_form_context();
    let field_name = use_hook(|| field_name.to_string());
    let mut controller = use_signal(ToggleFieldController::new);

    let value = use_memo({
        let field_name = field_name.clone();
        move || form.watch(&field_name)
    });

    // Effects run after render, so the first pass sees the mount value
    use_effect(move || {
        let current = *value.read();
        controller.write().observe(current);
    });

    UseToggleField {
        form,
        field_name,
        value,
        controller,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormValues, use_form_provider};
    use std::cell::RefCell;
    use std::time::Duration;

    const FIELD: &str = "enablePGCompatibitilty";

    thread_local! {
        static FIELD_HANDLE: RefCell<Option<UseToggleField>> = const { RefCell::new(None) };
        static FORM_HANDLE: RefCell<Option<FormContext>> = const { RefCell::new(None) };
    }

    #[component]
    fn Harness(initial: FormValues) -> Element {
        use_form_provider(move || initial);
        rsx! { BoundField {} }
    }

    #[component]
    fn BoundField() -> Element {
        let field = use_toggle_field(FIELD);
        let form = use_form_context();
        FIELD_HANDLE.with(|h| *h.borrow_mut() = Some(field.clone()));
        FORM_HANDLE.with(|h| *h.borrow_mut() = Some(form));
        rsx! { div {} }
    }

    fn field() -> UseToggleField {
        FIELD_HANDLE.with(|h| h.borrow().clone().expect("field mounted"))
    }

    fn form() -> FormContext {
        FORM_HANDLE.with(|h| h.borrow().expect("form mounted"))
    }

    /// Run renders and effects until the dom goes quiet
    async fn settle(dom: &mut VirtualDom) {
        while tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
            .await
            .is_ok()
        {
            dom.render_immediate_to_vec();
        }
    }

    async fn mount(initial: FormValues) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { initial });
        dom.rebuild_in_place();
        settle(&mut dom).await;
        dom
    }

    async fn set(dom: &mut VirtualDom, value: bool) {
        dom.in_runtime(|| field().set(value));
        settle(dom).await;
    }

    fn state(dom: &VirtualDom) -> (Option<bool>, bool) {
        dom.in_runtime(|| {
            let field = field();
            (field.value(), field.is_dialog_open())
        })
    }

    #[tokio::test]
    async fn test_mount_with_value_on_keeps_dialog_closed() {
        let dom = mount(FormValues::new().with(FIELD, true)).await;
        assert_eq!(state(&dom), (Some(true), false));
    }

    #[tokio::test]
    async fn test_unset_to_on_opens_dialog() {
        let mut dom = mount(FormValues::new()).await;
        assert_eq!(state(&dom), (None, false));

        set(&mut dom, true).await;
        assert_eq!(state(&dom), (Some(true), true));
    }

    #[tokio::test]
    async fn test_off_then_on_reopens_after_close() {
        let mut dom = mount(FormValues::new().with(FIELD, true)).await;

        set(&mut dom, false).await;
        assert_eq!(state(&dom), (Some(false), false));

        set(&mut dom, true).await;
        assert_eq!(state(&dom), (Some(true), true));

        dom.in_runtime(|| field().close_dialog());
        settle(&mut dom).await;
        assert_eq!(state(&dom), (Some(true), false));

        set(&mut dom, false).await;
        assert_eq!(state(&dom), (Some(false), false));
        set(&mut dom, true).await;
        assert_eq!(state(&dom), (Some(true), true));
    }

    #[tokio::test]
    async fn test_close_leaves_value_on() {
        let mut dom = mount(FormValues::new().with(FIELD, false)).await;
        set(&mut dom, true).await;

        dom.in_runtime(|| field().close_dialog());
        settle(&mut dom).await;

        assert_eq!(state(&dom), (Some(true), false));
        assert_eq!(dom.in_runtime(|| form().get(FIELD)), Some(true));
    }

    #[tokio::test]
    async fn test_reset_after_mount_opens_dialog() {
        let mut dom = mount(FormValues::new()).await;

        dom.in_runtime(|| form().reset(FormValues::new().with(FIELD, true)));
        settle(&mut dom).await;
        assert_eq!(state(&dom), (Some(true), true));
    }

    #[tokio::test]
    async fn test_reset_to_same_value_does_not_open_dialog() {
        let mut dom = mount(FormValues::new().with(FIELD, true)).await;

        dom.in_runtime(|| form().reset(FormValues::new().with(FIELD, true)));
        settle(&mut dom).await;
        assert_eq!(state(&dom), (Some(true), false));
    }

    #[tokio::test]
    async fn test_setting_current_value_is_a_no_op() {
        let mut dom = mount(FormValues::new().with(FIELD, false)).await;

        set(&mut dom, false).await;
        assert_eq!(state(&dom), (Some(false), false));
        assert_eq!(dom.in_runtime(|| form().get(FIELD)), Some(false));
    }
}
