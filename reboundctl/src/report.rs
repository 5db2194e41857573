//! What a simulation observed, as JSON or a human-readable table.

use std::io::{self, Write};

use rebound_model::{PageInfo, Point};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub fps: u32,
    /// Positions after every step or frame that changed position or phase.
    pub frames: Vec<Frame>,
    pub events: Vec<EventRecord>,
    /// Commands the engine refused, with the reason.
    pub rejected: Vec<Rejection>,
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub at_ms: f64,
    pub position: Point,
    pub phase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    pub at_ms: f64,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rejection {
    pub at_ms: u64,
    pub action: String,
    pub reason: String,
}

/// Engine state once the last step has settled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub settled_at_ms: f64,
    pub position: Point,
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_index: Option<usize>,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Events, rejections and the final state; frames are only counted.
    pub fn write_table(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{:>10}  {:<18}  position", "time (ms)", "event")?;
        for event in &self.events {
            match event.position {
                Some(position) => writeln!(
                    out,
                    "{:>10.1}  {:<18}  {position}",
                    event.at_ms, event.event
                )?,
                None => {
                    writeln!(out, "{:>10.1}  {:<18}", event.at_ms, event.event)?
                }
            }
        }

        if !self.rejected.is_empty() {
            writeln!(out)?;
            writeln!(out, "rejected:")?;
            for rejection in &self.rejected {
                writeln!(
                    out,
                    "{:>10}  {:<18}  {}",
                    rejection.at_ms, rejection.action, rejection.reason
                )?;
            }
        }

        let summary = &self.summary;
        writeln!(out)?;
        writeln!(
            out,
            "frames:   {} recorded at {} fps",
            self.frames.len(),
            self.fps
        )?;
        writeln!(out, "settled:  {:.1} ms", summary.settled_at_ms)?;
        writeln!(out, "position: {}", summary.position)?;
        writeln!(out, "phase:    {}", summary.phase)?;
        if let Some(page) = summary.page {
            writeln!(out, "page:     ({}, {})", page.page_x, page.page_y)?;
        }
        if let Some(index) = summary.selected_index {
            writeln!(out, "item:     {index}")?;
        }
        Ok(())
    }
}
