use crate::metrics::SheetMetrics;
use serde_json::{Value, json};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// JSON-lines diagnostics sink shared by every build of one `PrintForge`.
pub(crate) struct DebugLogger {
    sink: Mutex<Sink>,
}

struct Sink {
    writer: BufWriter<File>,
    built: u64,
    failed: u64,
}

impl Sink {
    fn write_event(&mut self, event: &Value) {
        let _ = writeln!(self.writer, "{event}");
    }
}

impl DebugLogger {
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            sink: Mutex::new(Sink {
                writer: BufWriter::new(File::create(path)?),
                built: 0,
                failed: 0,
            }),
        })
    }

    pub fn log_build(&self, title: &str, fingerprint: &str, metrics: &SheetMetrics) {
        let event = json!({
            "type": "sheet.build",
            "title": title,
            "fingerprint": fingerprint,
            "ms": metrics.build_ms,
            "nodes": metrics.node_count,
            "texts": metrics.text_count,
            "equipment": metrics.equipment_items,
            "missing_prices": metrics.missing_prices,
            "eco_badge": metrics.eco_badge,
        });
        if let Ok(mut sink) = self.sink.lock() {
            sink.write_event(&event);
            sink.built += 1;
        }
    }

    pub fn log_failure(&self, context: &str, error: &str) {
        let event = json!({
            "type": "sheet.error",
            "context": context,
            "error": error,
        });
        if let Ok(mut sink) = self.sink.lock() {
            sink.write_event(&event);
            sink.failed += 1;
        }
    }

    /// Writes the build/failure tallies since the previous summary and resets them.
    pub fn emit_summary(&self, context: &str) {
        if let Ok(mut sink) = self.sink.lock() {
            let event = json!({
                "type": "debug.summary",
                "context": context,
                "counts": {
                    "sheet.build.ok": sink.built,
                    "sheet.build.error": sink.failed,
                },
            });
            sink.write_event(&event);
            sink.built = 0;
            sink.failed = 0;
        }
    }

    pub fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.writer.flush();
        }
    }
}
