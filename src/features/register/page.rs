//! Register Page
//!
//! Name, email and password inputs with a submit button. Each input is a
//! `gpui_component` [`InputState`]; its text is copied into the form state on
//! every change, and Enter in any field submits.

use gpui::{
    Context, Entity, FontWeight, IntoElement, ParentElement, Render, Styled, Subscription, Window,
    div, prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::Button;
use crate::domain::registration::RegistrationField;
use crate::features::register::controller::RegisterController;
use crate::i18n::t;
use crate::services::run_in_tokio;
use crate::state::registration_state::RegistrationState;
use crate::theme::colors::SocialColors;

/// Registration form view
pub struct RegisterPage {
    entities: AppEntities,
    controller: RegisterController,
    state: RegistrationState,
    inputs: Vec<(RegistrationField, Entity<InputState>)>,
    _subscriptions: Vec<Subscription>,
}

impl RegisterPage {
    pub fn new(
        entities: AppEntities,
        controller: RegisterController,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = entities.i18n.read(cx).locale;
        let mut inputs = Vec::new();
        let mut subscriptions = Vec::new();

        for &field in RegistrationField::all() {
            let placeholder = t(locale, field.placeholder_key());
            let input = cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder(placeholder)
                    .masked(field.is_secret())
            });

            subscriptions.push(cx.subscribe_in(&input, window, move |this, input, event, window, cx| {
                match event {
                    InputEvent::Change => {
                        let value = input.read(cx).value().to_string();
                        this.state.set_field(field, value);
                    }
                    InputEvent::PressEnter { .. } => this.submit(window, cx),
                    _ => {}
                }
            }));
            inputs.push((field, input));
        }

        // Placeholders follow the UI language
        subscriptions.push(cx.observe_in(&entities.i18n, window, |this, i18n, window, cx| {
            let locale = i18n.read(cx).locale;
            for (field, input) in &this.inputs {
                let placeholder = t(locale, field.placeholder_key());
                input.update(cx, |input, cx| input.set_placeholder(placeholder, window, cx));
            }
            cx.notify();
        }));

        Self {
            entities,
            controller,
            state: RegistrationState::default(),
            inputs,
            _subscriptions: subscriptions,
        }
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(input) = self.state.begin_submit() else {
            debug!("Registration submit ignored while in flight");
            return;
        };
        let controller = self.controller.clone();

        cx.spawn_in(window, async move |this, cx| {
            let sender = controller.clone();
            let result = run_in_tokio(async move { sender.send_registration(&input).await }).await;
            let _ = this.update_in(cx, |page, window, cx| {
                controller.apply_submit(&mut page.state, result);
                page.sync_inputs(window, cx);
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    /// Bring the input widgets in line with the form state (cleared after a
    /// successful registration, untouched after a failure)
    fn sync_inputs(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        for (field, input) in &self.inputs {
            let expected = self.state.input().get(*field).to_string();
            if input.read(cx).value().as_ref() != expected {
                input.update(cx, |input, cx| input.set_value(expected, window, cx));
            }
        }
    }

    fn render_field(
        &self,
        field: RegistrationField,
        input: &Entity<InputState>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let label = self.entities.i18n.read(cx).t(field.label_key());

        div()
            .flex()
            .flex_col()
            .gap(px(4.0))
            .w_full()
            .child(
                div()
                    .text_sm()
                    .text_color(SocialColors::text_secondary())
                    .child(label),
            )
            .child(Input::new(input).w_full())
    }
}

impl Render for RegisterPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let fields: Vec<_> = self
            .inputs
            .iter()
            .map(|(field, input)| self.render_field(*field, input, cx).into_any_element())
            .collect();

        let i18n = self.entities.i18n.read(cx).clone();
        let submit = Button::primary("register-submit", i18n.t("register.submit"))
            .full_width(true)
            .disabled(self.state.is_submitting())
            .on_click(cx.listener(|this, _, window, cx| this.submit(window, cx)));

        let navigation = self.entities.navigation.clone();
        let login = Button::ghost("register-login", i18n.t("register.login")).on_click(move |_, _, cx| {
            navigation.update(cx, |nav, cx| {
                if nav.navigate(Route::SignIn) {
                    cx.notify();
                }
            });
        });

        div()
            .w(px(400.0))
            .mt_8()
            .p_8()
            .flex()
            .flex_col()
            .gap_4()
            .bg(SocialColors::surface())
            .rounded_lg()
            .shadow_sm()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(SocialColors::text_primary())
                    .child(i18n.t("register.title")),
            )
            .children(fields)
            .child(submit)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .justify_center()
                    .gap_1()
                    .text_sm()
                    .text_color(SocialColors::text_secondary())
                    .child(i18n.t("register.have_account"))
                    .child(login),
            )
    }
}
