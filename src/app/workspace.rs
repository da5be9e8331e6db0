//! Workspace - Main Shell with Layout and Event Pump
//!
//! Holds the header, the active page and the toast overlay. It also runs the
//! event pump that turns controller events into toast and navigation updates.

use std::time::Duration;

use chrono::Local;
use gpui::{
    App, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Task, Window, div, prelude::*, px,
};
use tracing::{debug, warn};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::primitives::button::Button;
use crate::components::toast::toast_stack;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::features::profile::controller::ProfileController;
use crate::features::profile::page::ProfileHeaderPage;
use crate::features::register::controller::RegisterController;
use crate::features::register::page::RegisterPage;
use crate::theme::colors::SocialColors;

/// How often expired toasts are swept
const TOAST_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

/// Controllers shared by the pages
#[derive(Clone)]
pub struct Controllers {
    pub profile: ProfileController,
    pub register: RegisterController,
}

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    controllers: Controllers,
    // Register form is kept for the window's lifetime so typed input survives navigation
    register_page: Entity<RegisterPage>,
    // Profile page lives only while its route is active
    profile_page: Option<Entity<ProfileHeaderPage>>,
    _event_pump: Task<()>,
    _toast_sweeper: Task<()>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        controllers: Controllers,
        event_rx: flume::Receiver<AppEvent>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let register_page = {
            let entities = entities.clone();
            let controller = controllers.register.clone();
            cx.new(|cx| RegisterPage::new(entities, controller, window, cx))
        };
        let event_pump = Self::start_event_pump(event_rx, entities.clone(), cx);
        let toast_sweeper = Self::start_toast_sweeper(entities.clone(), cx);

        cx.observe(&entities.navigation, |this, _, cx| {
            this.sync_pages(cx);
            cx.notify();
        })
        .detach();
        cx.observe(&entities.toasts, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let mut workspace = Self {
            entities,
            controllers,
            register_page,
            profile_page: None,
            _event_pump: event_pump,
            _toast_sweeper: toast_sweeper,
        };
        workspace.sync_pages(cx);
        workspace
    }

    /// Start the event pump that dispatches controller events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) -> Task<()> {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
    }

    /// Periodically drop toasts past their display time
    fn start_toast_sweeper(entities: AppEntities, cx: &mut Context<Self>) -> Task<()> {
        cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor().timer(TOAST_SWEEP_INTERVAL).await;
                if this.upgrade().is_none() {
                    break;
                }
                let _ = entities.toasts.update(cx, |toasts, cx| {
                    if toasts.expire(Local::now()) > 0 {
                        cx.notify();
                    }
                });
            }
        })
    }

    /// Create the page for the active route and drop the profile page when
    /// its route is left or its subject changes.
    fn sync_pages(&mut self, cx: &mut Context<Self>) {
        let route = self.entities.navigation.read(cx).current.clone();
        match route {
            Route::Profile(subject) => {
                let same_subject = self
                    .profile_page
                    .as_ref()
                    .is_some_and(|page| page.read(cx).subject() == Some(&subject));
                if !same_subject {
                    self.close_profile(cx);
                    let entities = self.entities.clone();
                    let controller = self.controllers.profile.clone();
                    self.profile_page =
                        Some(cx.new(|cx| ProfileHeaderPage::new(entities, controller, subject, cx)));
                }
            }
            Route::Register | Route::SignIn => {
                self.close_profile(cx);
            }
        }
    }

    fn go_back(&self, cx: &mut App) {
        self.entities.navigation.update(cx, |nav, cx| {
            if nav.back() {
                cx.notify();
            }
        });
    }

    /// Switch the UI language and remember it in the config file
    fn toggle_locale(&self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.update(cx, |i18n, cx| {
            i18n.toggle_locale();
            cx.notify();
            i18n.locale
        });

        cx.background_executor()
            .spawn(async move {
                if let Err(e) = AppConfig::store_locale(locale.code()) {
                    warn!(error = %e, locale = locale.code(), "Failed to save locale");
                }
            })
            .detach();
    }

    fn close_profile(&mut self, cx: &mut Context<Self>) {
        if let Some(page) = self.profile_page.take() {
            page.update(cx, |page, _| page.unmount());
        }
    }

    fn navigate(&self, route: Route, cx: &mut App) {
        self.entities.navigation.update(cx, |nav, cx| {
            if nav.navigate(route) {
                cx.notify();
            }
        });
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let (current, can_go_back) = {
            let nav = self.entities.navigation.read(cx);
            (nav.current.clone(), nav.can_go_back())
        };
        let viewer = self.controllers.profile.session().viewer().cloned();
        let (back_label, title, register_label, sign_in_label, profile_label, language) = {
            let i18n = self.entities.i18n.read(cx);
            (
                i18n.t("app.back"),
                i18n.t("app.title"),
                i18n.t("app.register"),
                i18n.t("app.sign_in"),
                i18n.t("app.profile"),
                format!("{}: {}", i18n.t("app.language"), i18n.locale.display_name()),
            )
        };

        let link = |id: &'static str, label: String, route: Route, cx: &mut Context<Self>| {
            let active = current == route;
            div()
                .id(id)
                .px_3()
                .py_1()
                .rounded_md()
                .cursor_pointer()
                .text_sm()
                .text_color(SocialColors::text_light())
                .when(active, |d| d.bg(SocialColors::accent()))
                .hover(|s| s.bg(SocialColors::accent_hover()))
                .child(label)
                .on_click(cx.listener(move |this, _, _, cx| this.navigate(route.clone(), cx)))
        };

        let register = link("nav-register", register_label, Route::Register, cx);
        let sign_in = link("nav-sign-in", sign_in_label, Route::SignIn, cx);
        let profile = viewer.map(|id| link("nav-profile", profile_label, Route::Profile(id), cx));

        div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .h(px(48.0))
            .pl(px(80.0))
            .pr_4()
            .bg(SocialColors::header_bg())
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .child(
                        Button::ghost("nav-back", back_label)
                            .disabled(!can_go_back)
                            .on_click(cx.listener(|this, _, _, cx| this.go_back(cx))),
                    )
                    .child(
                        div()
                            .mr_4()
                            .text_color(SocialColors::text_light())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(title),
                    )
                    .child(register)
                    .child(sign_in)
                    .children(profile),
            )
            .child(
                Button::ghost("toggle-locale", language)
                    .on_click(cx.listener(|this, _, _, cx| this.toggle_locale(cx))),
            )
    }

    fn render_sign_in(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let i18n = self.entities.i18n.read(cx);
        div()
            .flex()
            .flex_col()
            .items_center()
            .gap_2()
            .p_8()
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(SocialColors::text_primary())
                    .child(i18n.t("sign_in.title")),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(SocialColors::text_secondary())
                    .child(i18n.t("sign_in.hint")),
            )
    }

    fn render_content(&self, cx: &mut Context<Self>) -> gpui::AnyElement {
        let route = self.entities.navigation.read(cx).current.clone();
        match (route, &self.profile_page) {
            (Route::Profile(_), Some(page)) => page.clone().into_any_element(),
            (Route::Register, _) => self.register_page.clone().into_any_element(),
            (Route::SignIn, _) => self.render_sign_in(cx).into_any_element(),
            _ => div()
                .p_4()
                .child(SharedString::from(self.entities.i18n.read(cx).t("app.loading")))
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let header = self.render_header(cx);
        let content = self.render_content(cx);
        let toasts = toast_stack(
            &self.entities.toasts,
            self.entities.toasts.read(cx),
            self.entities.i18n.read(cx),
        );

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(SocialColors::background())
            .child(header)
            .child(
                div()
                    .id("content")
                    .flex_1()
                    .flex()
                    .flex_col()
                    .items_center()
                    .overflow_y_scroll()
                    .child(content),
            )
            .child(toasts)
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Toast { kind, message_key } => {
            entities.toasts.update(cx, |toasts, cx| {
                toasts.push_now(kind, message_key);
                cx.notify();
            });
        }
        AppEvent::Navigate { route } => {
            debug!(path = %route.path(), "Navigating");
            entities.navigation.update(cx, |nav, cx| {
                if nav.navigate(route) {
                    cx.notify();
                }
            });
        }
    }
}
