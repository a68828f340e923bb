//! JSON-lines test events
//!
//! One event per finished test, e.g.
//! `{"class":"FooTest","method":"testBar","status":"failure","runtime":0.12,"message":"..."}`

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::models::FailureKind;
use crate::output::ResultPrinter;

/// A finished test as reported by the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestEvent {
    #[serde(alias = "class_under_test")]
    pub class: String,

    #[serde(alias = "test")]
    pub method: String,

    #[serde(default = "default_status")]
    pub status: String,

    /// Runtime in seconds
    pub runtime: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn default_status() -> String {
    "passed".to_string()
}

impl TestEvent {
    pub fn passed(class: impl Into<String>, method: impl Into<String>, runtime: f64) -> Self {
        Self {
            class: class.into(),
            method: method.into(),
            status: default_status(),
            runtime,
            message: None,
        }
    }

    pub fn failed(
        class: impl Into<String>,
        method: impl Into<String>,
        kind: FailureKind,
        runtime: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            method: method.into(),
            status: kind.to_string(),
            runtime,
            message: Some(message.into()),
        }
    }

    /// `None` for a passing test, otherwise the failure kind
    pub fn failure_kind(&self) -> Result<Option<FailureKind>> {
        match self.status.to_lowercase().as_str() {
            "passed" | "pass" | "ok" | "success" => Ok(None),
            other => FailureKind::from_str(other)
                .map(Some)
                .ok_or_else(|| ReportError::UnknownStatus(self.status.clone())),
        }
    }

    /// Replay this event through the printer's test lifecycle
    pub fn apply<W: Write>(&self, printer: &mut ResultPrinter<W>) -> Result<()> {
        let kind = self.failure_kind()?;

        printer.start_test(&self.class, &self.method);
        if let Some(kind) = kind {
            printer.add_failure(kind, self.message.clone().unwrap_or_default())?;
        }
        printer.end_test(self.runtime)
    }
}

/// Reads events line by line, skipping blank lines
pub struct EventReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: AsyncBufRead + Unpin> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    pub async fn next_event(&mut self) -> Result<Option<TestEvent>> {
        while let Some(text) = self.lines.next_line().await? {
            self.line += 1;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let event = serde_json::from_str(text).map_err(|source| ReportError::InvalidEvent {
                line: self.line,
                source,
            })?;
            return Ok(Some(event));
        }
        Ok(None)
    }
}

/// Open a file, or stdin for `None` / `-`
pub async fn open_input(path: Option<&Path>) -> Result<Box<dyn AsyncBufRead + Unpin + Send>> {
    match path {
        Some(path) if path != Path::new("-") => {
            info!("Reading test events from {}", path.display());
            let file = tokio::fs::File::open(path).await?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => {
            info!("Reading test events from stdin");
            Ok(Box::new(BufReader::new(tokio::io::stdin())))
        }
    }
}

/// Feed every event from `reader` into `printer`; returns the event count
pub async fn stream_events<R, W>(reader: R, printer: &mut ResultPrinter<W>) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut events = EventReader::new(reader);
    let mut count = 0;

    while let Some(event) = events.next_event().await? {
        event.apply(printer)?;
        count += 1;
    }

    debug!("Processed {} test events", count);
    Ok(count)
}
