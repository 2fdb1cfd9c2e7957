//! Browser-side helpers for the request wizard.
//!
//! - **Download**: hands an `ExportFile` to the browser through a Blob, an
//!   object URL and a transient `<a download>` element.
//! - **Clock**: reads today's date for the "Data da Solicitação" column.
//! - **User Feedback**: temporary "toast" notifications for export problems.

use chrono::NaiveDate;
use common::ExportFile;
use gloo_file::{Blob, ObjectUrl};
use gloo_timers::future::TimeoutFuture;
use js_sys::Date;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAnchorElement;

/// How long the object URL stays valid after the click.
const OBJECT_URL_TTL_MS: u32 = 1_000;

/// Starts the browser download of `file` under its fixed filename.
///
/// The object URL is revoked (dropped) shortly after the click so the
/// browser has picked up the Blob by then.
pub fn trigger_download(file: &ExportFile) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document not available"))?;

    let blob = Blob::new_with_options(file.contents.as_str(), Some(file.mime_type()));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file.filename);
    anchor.click();

    spawn_local(async move {
        TimeoutFuture::new(OBJECT_URL_TTL_MS).await;
        drop(url);
    });
    Ok(())
}

/// Today's date from the browser clock.
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    calendar_date(now.get_full_year() as i32, now.get_month(), now.get_date())
}

/// Builds a date from the JS clock fields (`month` is zero-based). Falls back
/// to the epoch with a warning when the clock reports an impossible date.
fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month + 1, day).unwrap_or_else(|| {
        warn!("browser clock gave an invalid date {year}-{}-{day}, using the epoch", month + 1);
        NaiveDate::default()
    })
}

/// Class of the toast element, styled in `index.html`.
const TOAST_CLASS: &str = "toast";

/// How long a toast stays on screen.
const TOAST_TTL_MS: u32 = 3_000;

/// Shows `message` in a toast at the bottom of the screen for a few seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name(TOAST_CLASS);
    toast.set_text_content(Some(message));

    if body.append_child(&toast).is_ok() {
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            toast.remove();
        });
    }
}
