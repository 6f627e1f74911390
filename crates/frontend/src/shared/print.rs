//! Print window for generated QR codes

use wasm_bindgen::JsCast;

/// Opens a new window with `html_markup` as the `<html>` content, shows the
/// print dialog and closes the window once printing finished or was
/// cancelled.
pub fn print_in_new_window(html_markup: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let popup = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("Failed to open print window: {:?}", e))?
        .ok_or("Print window was blocked by the browser")?;

    let close_popup = || {
        let _ = popup.close();
    };

    let document = close_on_failure(
        popup.document().ok_or("Print window has no document"),
        close_popup,
    )?;
    let root = close_on_failure(
        document
            .document_element()
            .ok_or("Print window has no root element"),
        close_popup,
    )?;
    root.set_inner_html(html_markup);

    // Freed by wasm-bindgen after its single call
    let popup_for_close = popup.clone();
    let on_after_print = wasm_bindgen::closure::Closure::once_into_js(move || {
        let _ = popup_for_close.close();
    });
    popup.set_onafterprint(Some(on_after_print.unchecked_ref()));

    let _ = popup.focus();
    close_on_failure(
        popup
            .print()
            .map_err(|e| format!("Failed to open print dialog: {:?}", e)),
        close_popup,
    )?;

    log::info!("Print dialog opened");
    Ok(())
}

/// Runs `close` when `result` is an error, then forwards the result
fn close_on_failure<T, E: ToString>(
    result: Result<T, E>,
    close: impl FnOnce(),
) -> Result<T, String> {
    result.map_err(|e| {
        close();
        e.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_close_on_failure_closes_window() {
        let closed = Cell::new(false);
        let result: Result<(), String> =
            close_on_failure(Err("Failed to open print dialog"), || closed.set(true));

        assert_eq!(result, Err("Failed to open print dialog".to_string()));
        assert!(closed.get());
    }

    #[test]
    fn test_close_on_failure_keeps_window_on_success() {
        let closed = Cell::new(false);
        let result = close_on_failure(Ok::<_, String>(7), || closed.set(true));

        assert_eq!(result, Ok(7));
        assert!(!closed.get());
    }
}
