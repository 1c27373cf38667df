//! Replay a recorded pointer session on a fresh pad without opening a window.
//!
//! usage: pad_replay <events.json> [--out drawing.png] [--submit]

use anyhow::{bail, Context};
use digit_pad::client::drawing::PointerEvent;
use digit_pad::client::models::pad::DrawPad;
use digit_pad::client::services::predictor_service::PredictorService;
use digit_pad::common::config::{self, PadConfig};
use std::fs;

const USAGE: &str = "usage: pad_replay <events.json> [--out drawing.png] [--submit]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = PadConfig::from_env();
    config::init_logging(&cfg);

    let mut args = std::env::args().skip(1);
    let script = args.next().context(USAGE)?;
    let mut out: Option<String> = None;
    let mut submit = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out = Some(args.next().context("--out needs a file path")?),
            "--submit" => submit = true,
            other => bail!("unknown argument '{}'\n{}", other, USAGE),
        }
    }

    let raw = fs::read_to_string(&script).with_context(|| format!("reading {}", script))?;
    let events: Vec<PointerEvent> =
        serde_json::from_str(&raw).with_context(|| format!("parsing pointer events in {}", script))?;

    let mut pad = DrawPad::new()?;
    let total = events.len();
    let painted = events.into_iter().filter(|e| pad.handle_pointer(*e)).count();
    println!("Replayed {} events, painted {} segments", total, painted);

    if let Some(path) = out {
        fs::write(&path, pad.raster().encode_png()?).with_context(|| format!("writing {}", path))?;
        println!("Wrote {}", path);
    }

    if submit {
        let service = PredictorService::new(&cfg)?;
        println!("Using predictor {}", service.endpoint());
        let (ticket, image) = pad.begin_submit()?;
        let outcome = service.predict(image).await;
        pad.finish_submit(ticket, outcome);
        println!("{}", pad.status().headline().unwrap_or_default());
        if let Some(line) = pad.status().score_line() {
            println!("{}", line);
        }
    }

    Ok(())
}
