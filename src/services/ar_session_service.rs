// src/services/ar_session_service.rs
//
// AR Session Service - Simulated Engine Lifecycle
//
// Owns the single piece of mutable state in the bridge: the active-session
// flag plus the optional effect surface. Every channel command lands here.
// The attach/detach guard conditions live in this service so the view host
// never sees a double attach or a detach without an attach.
//
// Screenshot and recording are placeholders: no frame is ever captured and
// no encoder exists. The returned paths are fixed tokens the UI displays.

use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;

use crate::domain::{validate_tracking_sample, DomainError, TrackingSample, AVAILABLE_EFFECTS};
use crate::error::AppResult;
use crate::integrations::ViewHost;
use crate::services::effect_surface::EffectSurface;

const SCREENSHOT_PLACEHOLDER: &str = "screenshot_path.jpg";
const RECORDING_PLACEHOLDER: &str = "video_path.mp4";

pub struct ArSessionService {
    host: Arc<dyn ViewHost>,
    surface: Option<EffectSurface>,
    active: bool,
}

impl ArSessionService {
    pub fn new(host: Arc<dyn ViewHost>) -> Self {
        Self {
            host,
            surface: None,
            active: false,
        }
    }

    /// Construct (or replace) the effect surface.
    ///
    /// The license key is accepted for contract compatibility; the simulated
    /// engine never verifies it.
    pub fn initialize(&mut self, license_key: Option<&str>) -> AppResult<()> {
        info!(
            "Initializing AR engine with license: {}",
            license_key.unwrap_or("<none>")
        );
        self.surface = Some(EffectSurface::new());
        Ok(())
    }

    /// Mark the session active and attach the surface to the UI tree.
    ///
    /// A no-op returning success when no surface exists or a session is
    /// already active; the second start must not double-attach.
    pub fn start_session(&mut self) -> AppResult<()> {
        info!("Starting AR session");

        if let Some(surface) = &self.surface {
            if !self.active {
                self.host.attach(surface.status_line())?;
                self.active = true;
            }
        }

        Ok(())
    }

    /// Mark the session inactive and detach the surface from the UI tree.
    ///
    /// A no-op returning success when no session is active.
    pub fn stop_session(&mut self) -> AppResult<()> {
        info!("Stopping AR session");

        if self.surface.is_some() && self.active {
            self.host.detach()?;
            self.active = false;
        }

        Ok(())
    }

    /// Store a new effect token on the surface and refresh its display.
    ///
    /// Succeeds as a no-op when no surface exists yet.
    pub fn switch_effect(&mut self, effect_path: &str) -> AppResult<()> {
        info!("Switching effect to: {}", effect_path);

        if let Some(surface) = &mut self.surface {
            surface.load_effect(effect_path.to_string());
            if self.active {
                self.host.refresh(surface.status_line())?;
            }
        }

        Ok(())
    }

    /// Validate and store a tracking sample, then refresh the display.
    ///
    /// Fails without touching stored state when `ar_data` is absent or is
    /// missing `landmarks` or `scale`. Succeeds as a store no-op when no
    /// surface exists (validation still runs).
    pub fn update_shoe_position(&mut self, ar_data: Option<&Value>) -> AppResult<()> {
        let ar_data = ar_data.ok_or(DomainError::MissingField("arData"))?;

        debug!("Updating shoe position with data: {}", ar_data);

        let sample = TrackingSample::from_args(ar_data)?;
        validate_tracking_sample(&sample)?;

        if let Some(surface) = &mut self.surface {
            surface.update_shoe_position(sample);
            if self.active {
                self.host.refresh(surface.status_line())?;
            }
        }

        Ok(())
    }

    /// Placeholder capture; no frame exists to grab.
    pub fn take_screenshot(&mut self) -> AppResult<String> {
        info!("Taking screenshot");
        Ok(SCREENSHOT_PLACEHOLDER.to_string())
    }

    /// Placeholder recording start; no encoder exists, no state changes.
    pub fn start_recording(&mut self) -> AppResult<()> {
        info!("Starting recording");
        Ok(())
    }

    /// Placeholder recording stop; returns the fixed output token.
    pub fn stop_recording(&mut self) -> AppResult<String> {
        info!("Stopping recording");
        Ok(RECORDING_PLACEHOLDER.to_string())
    }

    /// The fixed effect catalog, in order.
    pub fn available_effects(&self) -> Vec<String> {
        AVAILABLE_EFFECTS.iter().map(|s| s.to_string()).collect()
    }

    /// Pure capability check; the simulated engine is always present.
    pub fn is_available(&self) -> bool {
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn surface(&self) -> Option<&EffectSurface> {
        self.surface.as_ref()
    }
}
