use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Drawer frame (overlay + panel docked to the right edge).
///
/// Renders a header with the title and a close button; the body and the footer
/// actions are supplied by the screen as children.
#[component]
pub fn DrawerFrame(
    /// Drawer title shown in the header.
    #[prop(into)]
    title: String,
    /// Called when the drawer should close (overlay click, close button).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Panel width in px (default: 480).
    #[prop(optional)]
    width: Option<u32>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let width = width.unwrap_or(480);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Closing needs both press and release on the overlay itself,
    // otherwise a text selection ending outside the panel would close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Deferred: the overlay must not be removed during its own click dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="drawer-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <aside
                class="drawer"
                style=format!("width: {width}px;")
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="drawer__header">
                    <h3 class="drawer__title">{title}</h3>
                    <button
                        class="drawer__close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("close")}
                    </button>
                </div>
                <div class="drawer__body">{children()}</div>
            </aside>
        </div>
    }
}
