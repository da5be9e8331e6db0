//! Toast Overlay

use gpui::{
    AnyElement, Entity, InteractiveElement, IntoElement, ParentElement, StatefulInteractiveElement,
    Styled, div, prelude::*, px,
};

use crate::state::i18n_state::I18nState;
use crate::state::toast_state::{ToastKind, ToastState};
use crate::theme::colors::SocialColors;

/// Render the visible toasts, newest at the bottom. Clicking a toast
/// dismisses it.
pub fn toast_stack(toasts: &Entity<ToastState>, state: &ToastState, i18n: &I18nState) -> AnyElement {
    div()
        .absolute()
        .bottom(px(16.0))
        .right(px(16.0))
        .flex()
        .flex_col()
        .gap_2()
        .children(state.toasts().iter().map(|toast| {
            let accent = match toast.kind {
                ToastKind::Success => SocialColors::success(),
                ToastKind::Error => SocialColors::danger(),
            };
            let id = toast.id;
            let toasts = toasts.clone();
            div()
                .id(("toast", id))
                .min_w(px(240.0))
                .px_4()
                .py_2()
                .bg(SocialColors::surface())
                .border_l_4()
                .border_color(accent)
                .rounded_md()
                .shadow_md()
                .cursor_pointer()
                .text_sm()
                .text_color(SocialColors::text_primary())
                .child(i18n.t(toast.message_key))
                .on_click(move |_, _, cx| {
                    toasts.update(cx, |toasts, cx| {
                        if toasts.dismiss(id) {
                            cx.notify();
                        }
                    });
                })
        }))
        .into_any_element()
}
