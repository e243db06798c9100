use dioxus::prelude::*;

/// Fallback width until the first measurement arrives, wide enough for the
/// desktop layout.
const INITIAL_WIDTH: u32 = 1024;

/// Window width in CSS pixels, updated on resize.
pub fn use_viewport_width() -> Signal<u32> {
    let mut width = use_signal(|| INITIAL_WIDTH);

    use_future(move || async move {
        let mut eval = document::eval(
            r#"
            dioxus.send(window.innerWidth);
            window.addEventListener('resize', () => dioxus.send(window.innerWidth));
            "#,
        );
        loop {
            match eval.recv::<u32>().await {
                Ok(w) => {
                    if *width.peek() != w {
                        width.set(w);
                    }
                }
                Err(e) => {
                    tracing::debug!("viewport measurement stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    width
}
