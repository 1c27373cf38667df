use iced::widget::canvas;
use iced::{Application, Command, Element, Theme};
use log::{error, info};

use crate::client::gui::views::pad_view;
use crate::client::models::messages::Message;
use crate::client::models::pad::DrawPad;
use crate::client::services::predictor_service::PredictorService;
use crate::common::config::PadConfig;
use crate::common::error::PadError;

/// Start-up input for [`DrawPadApp`]: the surface is created before the window opens.
pub struct PadFlags {
    pub config: PadConfig,
    pub pad: DrawPad,
}

pub struct DrawPadApp {
    pub pad: DrawPad,
    /// Kept as an error when the endpoint is misconfigured, so submit can report it
    predictor: Result<PredictorService, PadError>,
    endpoint: String,
    canvas_cache: canvas::Cache,
}

impl Application for DrawPadApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = PadFlags;

    fn new(flags: PadFlags) -> (Self, Command<Message>) {
        let predictor = PredictorService::new(&flags.config);
        match &predictor {
            Ok(service) => info!("Predictor endpoint: {}", service.endpoint()),
            Err(e) => error!("Predictor unavailable: {}", e),
        }
        let app = DrawPadApp {
            pad: flags.pad,
            predictor,
            endpoint: flags.config.predict_url,
            canvas_cache: canvas::Cache::default(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Digit Classifier".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Pointer(event) => {
                if self.pad.handle_pointer(event) {
                    self.canvas_cache.clear();
                }
                Command::none()
            }
            Message::Clear => {
                self.pad.clear();
                self.canvas_cache.clear();
                Command::none()
            }
            Message::Submit => {
                // On encode failure the pad already shows the error.
                let Ok((ticket, image)) = self.pad.begin_submit() else {
                    return Command::none();
                };
                match &self.predictor {
                    Ok(service) => {
                        let service = service.clone();
                        Command::perform(
                            async move { service.predict(image).await },
                            move |outcome| Message::PredictionFinished { ticket, outcome },
                        )
                    }
                    Err(e) => {
                        self.pad.finish_submit(ticket, Err(e.clone()));
                        Command::none()
                    }
                }
            }
            Message::PredictionFinished { ticket, outcome } => {
                self.pad.finish_submit(ticket, outcome);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        pad_view::view(&self.pad, &self.canvas_cache, &self.endpoint)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
