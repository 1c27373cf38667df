//! The drawing pad: one owned state object, one mutation entry point per event.

use log::{debug, info, warn};

use crate::client::drawing::raster::Raster;
use crate::client::drawing::stroke::{Pen, StrokeRenderer};
use crate::client::drawing::{Palette, PointerEvent, CANVAS_SIZE};
use crate::client::models::prediction::{Digit, PredictionOutcome, Score, Sentiment};
use crate::client::services::image_codec;
use crate::common::error::{PadError, Result};

/// What the status area shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PadStatus {
    #[default]
    Empty,
    Pending,
    Predicted {
        digit: Digit,
        score: Score,
    },
    /// Backend refused to classify; text is the server's own message
    Rejected(String),
    /// Request failed locally or in transit
    Failed(String),
}

impl PadStatus {
    /// Main status line, `None` when there is nothing to show.
    pub fn headline(&self) -> Option<String> {
        match self {
            PadStatus::Empty => None,
            PadStatus::Pending => Some("Thinking...".to_string()),
            PadStatus::Predicted { digit, .. } => Some(digit.glyph().to_string()),
            PadStatus::Rejected(msg) | PadStatus::Failed(msg) => Some(format!("😟 {} 😟", msg)),
        }
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            PadStatus::Predicted { score, .. } => Some(*score),
            _ => None,
        }
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.score().map(Score::sentiment)
    }

    /// e.g. `probability: 0.92 😊`
    pub fn score_line(&self) -> Option<String> {
        self.score()
            .map(|s| format!("probability: {:.2} {}", s.value(), s.sentiment().emoji()))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PadStatus::Pending)
    }
}

/// Identifies one submit; only the latest ticket may update the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

pub struct DrawPad {
    raster: Raster,
    renderer: StrokeRenderer,
    status: PadStatus,
    generation: u64,
}

impl DrawPad {
    pub fn new() -> Result<Self> {
        Self::with_size(CANVAS_SIZE, CANVAS_SIZE, Palette::default())
    }

    pub fn with_size(width: u32, height: u32, palette: Palette) -> Result<Self> {
        Ok(Self {
            raster: Raster::new(width, height, palette)?,
            renderer: StrokeRenderer::new(width, height),
            status: PadStatus::Empty,
            generation: 0,
        })
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn status(&self) -> &PadStatus {
        &self.status
    }

    pub fn pen(&self) -> Pen {
        self.renderer.pen()
    }

    /// Feed one pointer event; returns true when the raster changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match self.renderer.handle(event) {
            Some(segment) => {
                self.raster.draw_segment(segment);
                true
            }
            None => false,
        }
    }

    /// Back to a blank surface with no status. Also orphans any in-flight submit.
    pub fn clear(&mut self) {
        self.raster.clear();
        self.renderer.reset();
        self.status = PadStatus::Empty;
        self.generation += 1;
    }

    /// Snapshot the raster as a PNG data URI and mark the status pending.
    ///
    /// A newer submit or a clear supersedes the returned ticket.
    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, String)> {
        self.generation += 1;
        let ticket = SubmitTicket(self.generation);
        match self.raster.encode_png() {
            Ok(png) => {
                self.status = PadStatus::Pending;
                info!("Submitting drawing ({} segments)", self.raster.segments().len());
                Ok((ticket, image_codec::png_data_uri(&png)))
            }
            Err(e) => {
                warn!("Could not encode drawing: {}", e);
                self.status = PadStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Apply a prediction result. Returns false if the ticket was stale and nothing changed.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: std::result::Result<PredictionOutcome, PadError>,
    ) -> bool {
        if ticket != SubmitTicket(self.generation) {
            debug!("Discarding stale prediction result {:?}", ticket);
            return false;
        }
        self.status = match outcome {
            Ok(PredictionOutcome::Digit { digit, score }) => {
                info!("Predicted {} with score {:.2}", digit, score.value());
                PadStatus::Predicted { digit, score }
            }
            Ok(PredictionOutcome::Rejected(msg)) => {
                warn!("Predictor rejected drawing: {}", msg);
                PadStatus::Rejected(msg)
            }
            Err(e) => {
                warn!("Prediction failed: {}", e);
                PadStatus::Failed(e.to_string())
            }
        };
        true
    }
}
