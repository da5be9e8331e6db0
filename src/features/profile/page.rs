//! Profile Header Page
//!
//! Avatar, name, counters and the follow toggle for one subject. The page
//! owns its [`ProfileState`]; the workspace unmounts and drops the page when
//! its route is left, so responses arriving afterwards are discarded.

use gpui::{
    Context, FontWeight, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
    img, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::constants::AVATAR_SIZE;
use crate::domain::relationship::FollowLabel;
use crate::domain::user::{UserId, UserProfile};
use crate::features::profile::controller::ProfileController;
use crate::services::run_in_tokio;
use crate::state::i18n_state::I18nState;
use crate::state::profile_state::ProfileState;
use crate::theme::colors::SocialColors;

/// Profile header view
pub struct ProfileHeaderPage {
    entities: AppEntities,
    controller: ProfileController,
    state: ProfileState,
}

impl ProfileHeaderPage {
    pub fn new(
        entities: AppEntities,
        controller: ProfileController,
        subject: UserId,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let mut page = Self {
            entities,
            controller,
            state: ProfileState::default(),
        };
        page.load(subject, cx);
        page
    }

    /// Subject currently shown
    pub fn subject(&self) -> Option<&UserId> {
        self.state.subject()
    }

    /// Stop accepting responses for the current subject
    pub fn unmount(&mut self) {
        self.state.unmount();
    }

    fn load(&mut self, subject: UserId, cx: &mut Context<Self>) {
        let ticket = self.state.mount(subject.clone());
        let controller = self.controller.clone();

        cx.spawn(async move |this, cx| {
            let fetcher = controller.clone();
            let result = run_in_tokio(async move { fetcher.fetch_profile(&subject).await }).await;
            let _ = this.update(cx, |page, cx| {
                controller.apply_load(&mut page.state, ticket, result);
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    fn toggle_follow(&mut self, cx: &mut Context<Self>) {
        let Some(subject) = self.state.subject().cloned() else {
            return;
        };
        let Some((ticket, action)) = self.state.begin_toggle() else {
            return;
        };
        let controller = self.controller.clone();

        cx.spawn(async move |this, cx| {
            let sender = controller.clone();
            let result =
                run_in_tokio(async move { sender.send_follow_action(&subject, action).await }).await;
            let _ = this.update(cx, |page, cx| {
                controller.apply_toggle(&mut page.state, ticket, action, result);
                cx.notify();
            });
        })
        .detach();
        cx.notify();
    }

    fn render_profile(
        &self,
        profile: &UserProfile,
        i18n: &I18nState,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let name = profile
            .display_name()
            .map(str::to_string)
            .unwrap_or_else(|| i18n.t("profile.username_placeholder"));
        let counts = format!(
            "{} {} · {} {} · {} {}",
            profile.posts_count(),
            i18n.t("profile.posts"),
            profile.followers_count(),
            i18n.t("profile.followers"),
            profile.following_count(),
            i18n.t("profile.following_count"),
        );

        let label = self.state.follow_label();
        let variant = match label {
            FollowLabel::Following => ButtonVariant::Muted,
            FollowLabel::FollowBack | FollowLabel::Follow => ButtonVariant::Primary,
        };
        let follow_button = Button::new("follow-toggle", i18n.t(label.key()))
            .variant(variant)
            .disabled(!self.state.can_toggle())
            .on_click(cx.listener(|this, _, _, cx| this.toggle_follow(cx)));

        div()
            .flex()
            .flex_row()
            .items_center()
            .gap(px(32.0))
            .child(
                img(SharedString::from(profile.picture_url().to_string()))
                    .size(px(AVATAR_SIZE))
                    .rounded_full(),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(SocialColors::text_primary())
                            .child(name),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(SocialColors::text_secondary())
                            .child(counts),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_row()
                            .gap_2()
                            .child(follow_button)
                            .child(Button::muted("send-message", i18n.t("profile.send_message")))
                            .child(Button::muted("settings", i18n.t("profile.settings"))),
                    ),
            )
    }
}

impl Render for ProfileHeaderPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let i18n = self.entities.i18n.read(cx).clone();

        let body = if self.state.is_loading() {
            div()
                .text_color(SocialColors::text_muted())
                .child(i18n.t("app.loading"))
                .into_any_element()
        } else if let Some(profile) = self.state.profile().cloned() {
            self.render_profile(&profile, &i18n, cx).into_any_element()
        } else {
            div()
                .text_color(SocialColors::text_secondary())
                .child(i18n.t("profile.unavailable"))
                .into_any_element()
        };

        div()
            .w(px(720.0))
            .mt_8()
            .p_8()
            .bg(SocialColors::surface())
            .rounded_lg()
            .shadow_sm()
            .child(body)
    }
}
