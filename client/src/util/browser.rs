//! Browser implementations of the core crate's navigation and notice seams.
//!
//! TRADE-OFFS
//! ==========
//! Full-page navigation and timed dismissal only exist in the browser; SSR
//! paths no-op so server rendering stays deterministic.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use storefront::routing::{Navigator, Route};
use storefront::state::notice::{NoticeBoard, Notification, Notifier};

/// Router navigation for in-app routes, `window.location` for external URLs.
#[derive(Clone)]
pub struct BrowserNavigator<F> {
    navigate: F,
}

impl<F> BrowserNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for BrowserNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn push(&self, route: &Route) {
        (self.navigate)(&route.path(), NavigateOptions::default());
    }

    fn assign(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(url) {
                    log::warn!("full-page navigation to {url} failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}

/// Pushes notices onto the shared board and removes each after its duration.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    notices: RwSignal<NoticeBoard>,
}

impl ToastNotifier {
    pub fn new(notices: RwSignal<NoticeBoard>) -> Self {
        Self { notices }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notification) {
        let duration = notice.duration;
        let id = self.notices.try_update(|board| board.push(notice));

        #[cfg(feature = "hydrate")]
        {
            let notices = self.notices;
            if let Some(id) = id {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(duration).await;
                    let _ = notices.try_update(|board| board.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (duration, id);
        }
    }
}
