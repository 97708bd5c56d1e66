// src/services/effect_surface.rs
//
// Effect Surface - Simulated AR Camera View
//
// Stand-in for the platform view that would render the camera feed with the
// active effect overlaid. It holds the current effect token and the last
// tracking sample, and renders the status line a real view would display.
// Attachment to the UI tree is the session service's job, not the surface's.

use log::debug;

use crate::domain::{effect_display_name, TrackingSample};

const BANNER: &str = "🎯 DeepAR Camera Active";
const TRACKING_PROMPT: &str = "Point camera at your feet";

pub struct EffectSurface {
    current_effect: Option<String>,
    tracking: Option<TrackingSample>,
    status_line: String,
}

impl EffectSurface {
    pub fn new() -> Self {
        let mut surface = Self {
            current_effect: None,
            tracking: None,
            status_line: String::new(),
        };
        surface.refresh_status();
        surface
    }

    /// Store a new effect token and recompute the status line.
    pub fn load_effect(&mut self, effect_path: String) {
        debug!(
            "Loading effect: {}",
            effect_display_name(Some(&effect_path))
        );
        self.current_effect = Some(effect_path);
        self.refresh_status();
    }

    /// Store a new tracking sample and recompute the status line.
    pub fn update_shoe_position(&mut self, sample: TrackingSample) {
        debug!("Updating shoe position: {}", sample.display_form());
        self.tracking = Some(sample);
        self.refresh_status();
    }

    pub fn current_effect(&self) -> Option<&str> {
        self.current_effect.as_deref()
    }

    pub fn tracking(&self) -> Option<&TrackingSample> {
        self.tracking.as_ref()
    }

    /// The text a real view would currently display.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    fn refresh_status(&mut self) {
        let effect_name = effect_display_name(self.current_effect.as_deref());
        let position_text = match &self.tracking {
            Some(sample) => format!("Foot detected at: {}", sample.display_form()),
            None => TRACKING_PROMPT.to_string(),
        };

        self.status_line = format!("{}\nEffect: {}\n{}", BANNER, effect_name, position_text);
    }
}

impl Default for EffectSurface {
    fn default() -> Self {
        Self::new()
    }
}
