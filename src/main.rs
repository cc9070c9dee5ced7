//! spinnn entry point
//!
//! Handles platform-specific initialization. On wasm32 this wires the DOM
//! presentation shell (wheel surface, modals, controls) to the core; on
//! native it runs a headless demo spin for development.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_shell {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

    use spinnn::App;
    use spinnn::consts::*;
    use spinnn::history::now_date_string;
    use spinnn::wheel::{Color, WheelLayout};

    /// Shell instance holding the session state and frame timing
    struct Shell {
        app: App,
        last_time: f64,
    }

    impl Shell {
        fn new(seed: u64) -> Self {
            Self {
                app: App::new(seed),
                last_time: 0.0,
            }
        }
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    /// Minimal HTML escaping for user-entered item names
    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }

    /// Rebuild the rotating wheel surface: conic-gradient background,
    /// divider lines, labels, and the current rotation transform. The 5s
    /// ease-out on `transform` lives in the stylesheet, so updating the
    /// rotation here is what actually animates the spin.
    fn render_wheel(app: &App) {
        let document = document();
        let Some(wheel) = document.get_element_by_id("wheel") else {
            return;
        };

        let items = app.roster().items();
        let style = format!(
            "background: conic-gradient({}); transform: rotate({}deg)",
            WheelLayout::conic_gradient_stops(items),
            app.rotation_deg()
        );
        let _ = wheel.set_attribute("style", &style);

        let mut markup = String::new();
        if let Some(layout) = app.layout() {
            for seg in &layout.segments {
                markup.push_str(&format!(
                    "<div class=\"divider\" style=\"transform: rotate({}deg)\"></div>",
                    seg.start_deg
                ));
            }
            for seg in &layout.segments {
                let item = &items[seg.index];
                // Label box is 40x20; offset the anchor to its center
                let x = WHEEL_RADIUS + seg.label_pos.x - 20.0;
                let y = WHEEL_RADIUS + seg.label_pos.y - 10.0;
                markup.push_str(&format!(
                    "<div class=\"wheel-label\" style=\"left:{x}px; top:{y}px; \
                     color:{}; transform: rotate({}deg)\">{}</div>",
                    item.color.contrast_color(),
                    seg.label_rotation_deg,
                    escape_html(&item.name)
                ));
            }
        }
        wheel.set_inner_html(&markup);
    }

    /// Rebuild the settings-modal item list and the add-item form state
    fn render_items(app: &App) {
        let document = document();

        if let Some(list) = document.get_element_by_id("item-list") {
            let rows: String = app
                .roster()
                .items()
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    format!(
                        "<div class=\"item-row\" data-index=\"{i}\">\
                         <input type=\"text\" data-field=\"name\" value=\"{}\">\
                         <input type=\"color\" data-field=\"color\" value=\"{}\">\
                         <button class=\"remove-btn\" data-remove=\"{i}\">&times;</button>\
                         </div>",
                        escape_html(&item.name),
                        item.color.to_hex()
                    )
                })
                .collect();
            list.set_inner_html(&rows);
        }

        if let Some(count) = document.get_element_by_id("item-count") {
            count.set_text_content(Some(&format!(
                "{} of {MAX_ITEMS} items added",
                app.roster().len()
            )));
        }

        // Keep the color picker showing the current suggestion
        if let Some(input) = document.get_element_by_id("new-item-color") {
            if let Ok(input) = input.dyn_into::<HtmlInputElement>() {
                input.set_value(&app.draft_color().to_hex());
            }
        }
    }

    /// Rebuild the history-modal entry list
    fn render_history(app: &App) {
        let document = document();
        let Some(list) = document.get_element_by_id("history-list") else {
            return;
        };

        if app.history().is_empty() {
            list.set_inner_html("<p class=\"history-empty\">No spin history yet</p>");
            return;
        }

        let rows: String = app
            .history()
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "<div class=\"history-row\"><span class=\"history-item\">{}</span>\
                     <span class=\"history-date\">{}</span></div>",
                    escape_html(&entry.item),
                    escape_html(&entry.date)
                )
            })
            .collect();
        list.set_inner_html(&rows);
    }

    /// Sync the spin button and winner panel with the engine phase
    fn update_controls(app: &App) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("spin-btn") {
            if app.is_spinning() {
                let _ = btn.set_attribute("disabled", "");
                btn.set_text_content(Some("..."));
            } else {
                let _ = btn.remove_attribute("disabled");
                btn.set_text_content(Some("SPIN"));
            }
        }

        if let Some(panel) = document.get_element_by_id("winner-panel") {
            match app.winner() {
                Some(winner) => {
                    let _ = panel.set_attribute("class", "winner-panel");
                    if let Some(el) = document.get_element_by_id("winner-name") {
                        el.set_text_content(Some(winner));
                    }
                }
                None => {
                    let _ = panel.set_attribute("class", "winner-panel hidden");
                }
            }
        }
    }

    fn set_modal_visible(id: &str, visible: bool) {
        if let Some(modal) = document().get_element_by_id(id) {
            let class = if visible { "modal" } else { "modal hidden" };
            let _ = modal.set_attribute("class", class);
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Read the add-item form and try to add; on success clear the name
    /// field and refresh the wheel and list
    fn submit_new_item(shell: &Rc<RefCell<Shell>>) {
        let document = document();
        let Some(name_input) = document
            .get_element_by_id("new-item-name")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let color = document
            .get_element_by_id("new-item-color")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|el| el.value())
            .unwrap_or_default();

        let color = match Color::parse(&color) {
            Ok(color) => color,
            Err(e) => {
                // Color inputs always emit #rrggbb; anything else is a bug
                log::error!("Bad color from input: {e}");
                return;
            }
        };

        let mut shell = shell.borrow_mut();
        match shell.app.add_item(&name_input.value(), color) {
            Ok(()) => {
                name_input.set_value("");
                render_items(&shell.app);
                render_wheel(&shell.app);
            }
            Err(e) => log::warn!("Add rejected: {e}"),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("spinnn starting...");

        let seed = js_sys::Date::now() as u64;
        let shell = Rc::new(RefCell::new(Shell::new(seed)));
        log::info!("Session seeded with {seed}");

        {
            let s = shell.borrow();
            render_wheel(&s.app);
            render_items(&s.app);
            render_history(&s.app);
            update_controls(&s.app);
        }

        setup_spin_controls(shell.clone());
        setup_settings_modal(shell.clone());
        setup_history_modal(shell.clone());

        request_animation_frame(shell);

        log::info!("spinnn running!");
    }

    fn setup_spin_controls(shell: Rc<RefCell<Shell>>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("spin-btn") {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut s = shell.borrow_mut();
                match s.app.spin() {
                    Ok(()) => {
                        render_wheel(&s.app);
                        update_controls(&s.app);
                    }
                    Err(e) => alert(&e.to_string()),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut s = shell.borrow_mut();
                s.app.reset();
                render_wheel(&s.app);
                update_controls(&s.app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_settings_modal(shell: Rc<RefCell<Shell>>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("settings-btn") {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                render_items(&shell.borrow().app);
                set_modal_visible("settings-modal", true);
                set_modal_visible("history-modal", false);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for id in ["settings-close", "settings-done"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    set_modal_visible("settings-modal", false);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("add-item-btn") {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                submit_new_item(&shell);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter in the name field submits too
        if let Some(input) = document.get_element_by_id("new-item-name") {
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    submit_new_item(&shell);
                }
            });
            let _ =
                input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Rename/recolor: one delegated input listener for the whole list,
        // so rebuilding rows never re-binds per-row closures
        if let Some(list) = document.get_element_by_id("item-list") {
            let shell_input = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                let Some(input) = event
                    .target()
                    .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                else {
                    return;
                };
                let Some(index) = input
                    .closest("[data-index]")
                    .ok()
                    .flatten()
                    .and_then(|row| row.get_attribute("data-index"))
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    return;
                };

                let mut s = shell_input.borrow_mut();
                let result = match input.get_attribute("data-field").as_deref() {
                    Some("name") => s.app.rename_item(index, &input.value()),
                    Some("color") => match Color::parse(&input.value()) {
                        Ok(color) => s.app.recolor_item(index, color),
                        Err(e) => {
                            log::error!("Bad color from input: {e}");
                            return;
                        }
                    },
                    _ => return,
                };
                match result {
                    // Only the wheel re-renders here; rebuilding the row
                    // would steal focus from the field being edited
                    Ok(()) => render_wheel(&s.app),
                    Err(e) => log::warn!("Edit rejected: {e}"),
                }
            });
            let _ =
                list.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();

            // Remove buttons, same delegation pattern
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let Some(index) = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("[data-remove]").ok().flatten())
                    .and_then(|btn| btn.get_attribute("data-remove"))
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    return;
                };

                let mut s = shell.borrow_mut();
                match s.app.remove_item(index) {
                    Ok(()) => {
                        render_items(&s.app);
                        render_wheel(&s.app);
                    }
                    Err(e) => log::warn!("Remove rejected: {e}"),
                }
            });
            let _ =
                list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_history_modal(shell: Rc<RefCell<Shell>>) {
        let document = document();

        if let Some(btn) = document.get_element_by_id("history-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                render_history(&shell.borrow().app);
                set_modal_visible("history-modal", true);
                set_modal_visible("settings-modal", false);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("history-close") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set_modal_visible("history-modal", false);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(shell: Rc<RefCell<Shell>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(shell, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(shell: Rc<RefCell<Shell>>, time: f64) {
        {
            let mut s = shell.borrow_mut();
            let dt_ms = if s.last_time > 0.0 {
                (time - s.last_time) as f32
            } else {
                0.0
            };
            s.last_time = time;

            if let Some(result) = s.app.tick(dt_ms) {
                log::info!("Winner: {} (segment {})", result.winner, result.index);
                s.app.commit_result(&result, now_date_string());
                render_history(&s.app);
                update_controls(&s.app);
            }
        }

        request_animation_frame(shell);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_shell::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use spinnn::App;
    use spinnn::consts::SPIN_DURATION_MS;

    env_logger::init();
    log::info!("spinnn (native) starting...");
    log::info!("The DOM shell is wasm-only - run with `trunk serve` for the web version");

    // Headless demo: one spin with a simulated 60 Hz clock
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut app = App::new(seed);
    app.spin().expect("default roster can spin");

    let mut elapsed = 0.0f32;
    let result = loop {
        if let Some(result) = app.tick(1000.0 / 60.0) {
            break result;
        }
        elapsed += 1000.0 / 60.0;
        assert!(elapsed <= SPIN_DURATION_MS * 2.0, "spin never completed");
    };

    app.commit_result(&result, "demo".to_string());
    log::info!("Winner after {elapsed:.0} ms: {} (segment {})", result.winner, result.index);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
