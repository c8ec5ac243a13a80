use leptos::ev;
use leptos::prelude::*;

/// Tracks the browser viewport width in CSS pixels.
///
/// The resize listener is registered when the calling component mounts on the
/// client and removed again in `on_cleanup`, so remounting a component (e.g.
/// switching gallery filters) never stacks listeners. On the server the signal
/// just holds `initial`.
pub fn use_viewport_width(initial: u32) -> ReadSignal<u32> {
    let (width, set_width) = signal(initial);

    Effect::new(move |_| {
        if let Some(current) = current_width() {
            set_width.set(current);
        }

        let handle = window_event_listener(ev::resize, move |_| {
            if let Some(current) = current_width() {
                set_width.set(current);
            }
        });
        on_cleanup(move || handle.remove());
    });

    width
}

fn current_width() -> Option<u32> {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w as u32)
}
