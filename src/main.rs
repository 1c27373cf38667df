use digit_pad::client::gui::app::{DrawPadApp, PadFlags};
use digit_pad::client::models::pad::DrawPad;
use digit_pad::common::config::{self, PadConfig};
use iced::{Application, Settings, Size};

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let cfg = PadConfig::from_env();
    config::init_logging(&cfg);

    let pad = DrawPad::new()?;
    let mut settings = Settings::with_flags(PadFlags { config: cfg, pad });
    settings.window.size = Size::new(520.0, 760.0);
    DrawPadApp::run(settings)?;
    Ok(())
}
