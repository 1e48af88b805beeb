use crate::api::{CardSource, HttpCardSource};
use crate::app::view::{CardView, ViewState};
use crate::location::normalize_location;
use chrono::{DateTime, Local};
use ratatui_core::style::Color;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tachyonfx::{fx, Effect, Interpolation};
use throbber_widgets_tui::ThrobberState;

const CARD_FADE_MS: u32 = 450;

/// Text being typed into the go-to prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationPrompt {
    pub input: String,
}

pub struct App<S: CardSource = HttpCardSource> {
    pub running: bool,
    pub view: CardView<S>,
    pub show_help: bool,
    pub prompt: Option<LocationPrompt>,
    pub status_message: String,
    pub throbber_state: ThrobberState,
    pub card_fx: Mutex<Option<Effect>>,
    pub last_frame: Instant,
    pub last_tick: Duration,
    pub last_settled: Option<DateTime<Local>>,
}

impl<S: CardSource> App<S> {
    pub fn new(view: CardView<S>) -> Self {
        Self {
            running: true,
            view,
            show_help: false,
            prompt: None,
            status_message: String::new(),
            throbber_state: ThrobberState::default(),
            card_fx: Mutex::new(None),
            last_frame: Instant::now(),
            last_tick: Duration::ZERO,
            last_settled: None,
        }
    }

    /// Advances animations and applies any finished request.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.last_tick = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.view.state().is_loading() {
            self.throbber_state.calc_next();
        }

        if self.view.drain() {
            self.on_settled();
        }
    }

    fn on_settled(&mut self) {
        self.last_settled = Some(Local::now());
        if matches!(self.view.state(), ViewState::Loaded(_)) {
            self.start_card_fx();
        }
    }

    fn start_card_fx(&self) {
        let effect = fx::fade_from_fg(Color::Black, (CARD_FADE_MS, Interpolation::QuadOut));
        if let Ok(mut slot) = self.card_fx.lock() {
            *slot = Some(effect);
        }
    }

    pub fn navigate(&mut self, location: &str) {
        let location = normalize_location(location);
        if self.view.set_location(location.clone()) {
            // Locations without a card number settle on the spot.
            if !self.view.state().is_loading() {
                self.on_settled();
            }
            self.status_message = format!("Opened {location}");
        } else {
            self.status_message = format!("Already showing {location}");
        }
    }

    /// Moves to the neighbouring numeric card, if the current one has a number.
    pub fn step(&mut self, forward: bool) {
        let Some(next) = self.view.identifier().and_then(|id| id.step(forward)) else {
            self.status_message = "No neighbouring card".to_string();
            return;
        };
        self.navigate(&next);
    }

    pub fn open_prompt(&mut self) {
        self.prompt = Some(LocationPrompt::default());
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        if prompt.input.trim().is_empty() {
            self.status_message.clear();
            return;
        }
        self.navigate(&prompt.input);
    }
}
