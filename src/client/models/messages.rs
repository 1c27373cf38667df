use crate::client::drawing::PointerEvent;
use crate::client::models::pad::SubmitTicket;
use crate::client::models::prediction::PredictionOutcome;
use crate::common::error::PadError;

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer activity on the canvas, already in canvas-local coordinates
    Pointer(PointerEvent),
    Clear,
    Submit,
    PredictionFinished {
        ticket: SubmitTicket,
        outcome: Result<PredictionOutcome, PadError>,
    },
}
