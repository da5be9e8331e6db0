//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::app::workspace::{Controllers, Workspace};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::eventing::app_event::AppEvent;
use crate::features::profile::controller::ProfileController;
use crate::features::register::controller::RegisterController;
use crate::i18n::{Locale, t};
use crate::services::{HttpApi, SocialApi};
use crate::state::session_state::Session;

actions!(social, [Quit]);

/// Everything the window needs at startup
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: AppConfig,
    pub locale: Locale,
    pub start: Route,
}

/// Run the social GUI application
pub fn run_app(options: LaunchOptions) -> Result<()> {
    let LaunchOptions {
        config,
        locale,
        start,
    } = options;

    let api: Arc<dyn SocialApi> = Arc::new(HttpApi::new(&config.api)?);
    let session = Session::from(config.viewer_id.clone());
    info!(
        base_url = %config.api.base_url(),
        signed_in = session.is_signed_in(),
        route = %start.path(),
        "Launching window"
    );

    // Controller -> UI events
    let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
    let controllers = Controllers {
        profile: ProfileController::new(api.clone(), session, event_tx.clone()),
        register: RegisterController::new(api, event_tx),
    };

    Application::new().run(move |cx: &mut App| {
        // Theme and input bindings for gpui-component widgets
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let entities = AppEntities::init(start, locale, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(t(locale, "app.title"))),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| {
                Workspace::new(entities.clone(), controllers.clone(), event_rx.clone(), window, cx)
            });
            cx.new(|cx| Root::new(workspace, window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
