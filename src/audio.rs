//! Click feedback sound
//!
//! One short asset, restarted from the top on every hit. Playback is
//! fire-and-forget: rejections (no user gesture yet, unsupported format)
//! are logged and otherwise ignored.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Target clicked
    Hit,
}

impl SoundEffect {
    /// Asset path relative to the page
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Hit => "sounds/click.mp3",
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    hit: Option<web_sys::HtmlAudioElement>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        let hit = {
            let el = web_sys::HtmlAudioElement::new_with_src(SoundEffect::Hit.asset()).ok();
            if el.is_none() {
                log::warn!("Failed to create audio element - click sound disabled");
            }
            el
        };
        Self {
            #[cfg(target_arch = "wasm32")]
            hit,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect from the start, cutting off any playback in progress
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let clip = match effect {
                SoundEffect::Hit => self.hit.as_ref(),
            };
            let Some(clip) = clip else { return };

            clip.set_volume(vol as f64);
            clip.set_current_time(0.0);
            match clip.play() {
                Ok(promise) => {
                    // Swallow async rejections so they don't surface as uncaught errors
                    let ignore = wasm_bindgen::closure::Closure::once(|_: wasm_bindgen::JsValue| {
                        log::warn!("Click sound was rejected by the browser");
                    });
                    let _ = promise.catch(&ignore);
                    ignore.forget();
                }
                Err(e) => log::warn!("Click sound failed: {:?}", e),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        log::trace!("play {:?} at volume {:.2}", effect, vol);
    }
}
