//! tracing のイベントをブラウザのコンソールへ出力する

use std::fmt::Write;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLayer;

#[derive(Default)]
struct EventFields {
    message: String,
    fields: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// "target: message key=value ..." 形式の1行
fn format_line(target: &str, fields: &EventFields) -> String {
    format!("{}: {}{}", target, fields.message, fields.fields)
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let meta = event.metadata();
        let line = JsValue::from_str(&format_line(meta.target(), &fields));
        match *meta.level() {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// ログ出力を初期化（二重初期化は無視）
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer.with_filter(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let fields = EventFields {
            message: "failed to persist value".to_string(),
            fields: " key=qr-saved-items".to_string(),
        };
        assert_eq!(
            format_line("qr_manager_common::storage", &fields),
            "qr_manager_common::storage: failed to persist value key=qr-saved-items"
        );
    }
}
