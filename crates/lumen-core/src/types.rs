//! Controller form domain types
//!
//! Defines:
//! - `Mode` - The fixed set of operating modes with labels and wire codes
//! - `Rgba` - Four-channel color using the UI alpha convention
//! - `FormState` - The canonical form state and its transitions

use crate::validate;

// ─────────────────────────────────────────────────────────────────
// Numeric field bounds
// ─────────────────────────────────────────────────────────────────

/// Upper bound of the animation speed slider.
pub const SPEED_MAX: f64 = 20.0;
/// Default animation speed.
pub const SPEED_DEFAULT: f64 = 1.0;
/// Upper bound of the pulse period slider, in seconds.
pub const PULSE_MAX: f64 = 5.0;
/// Pulse slider step size.
pub const PULSE_STEP: f64 = 0.1;
/// Default pulse period (no pulsing).
pub const PULSE_DEFAULT: f64 = 0.0;
/// Default brightness (full).
pub const BRIGHTNESS_DEFAULT: u8 = 255;

// ─────────────────────────────────────────────────────────────────
// Mode
// ─────────────────────────────────────────────────────────────────

/// Operating mode of the lighting controller.
///
/// Each mode has a human label for the selector and a short wire code the
/// device firmware dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Color,
    Periodic,
    WarmColors,
    Rainbow,
    RainbowStripes,
    RainbowStripesBlend,
    PurpleGreen,
    Random,
    BlackWhite,
    BlackWhiteBlend,
    Cloud,
    Party,
    Murica,
    MuricaTwo,
    Halloween,
    Thanksgiving,
    Christmas,
    NewYears,
    Easter,
}

impl Mode {
    /// All modes, in selector display order.
    pub const ALL: [Mode; 19] = [
        Mode::Color,
        Mode::Periodic,
        Mode::WarmColors,
        Mode::Rainbow,
        Mode::RainbowStripes,
        Mode::RainbowStripesBlend,
        Mode::PurpleGreen,
        Mode::Random,
        Mode::BlackWhite,
        Mode::BlackWhiteBlend,
        Mode::Cloud,
        Mode::Party,
        Mode::Murica,
        Mode::MuricaTwo,
        Mode::Halloween,
        Mode::Thanksgiving,
        Mode::Christmas,
        Mode::NewYears,
        Mode::Easter,
    ];

    /// Short code sent to the device.
    pub fn wire_code(self) -> &'static str {
        match self {
            Mode::Color => "c",
            Mode::Periodic => "p",
            Mode::WarmColors => "w",
            Mode::Rainbow => "r",
            Mode::RainbowStripes => "rs",
            Mode::RainbowStripesBlend => "rsb",
            Mode::PurpleGreen => "pg",
            Mode::Random => "ra",
            Mode::BlackWhite => "bw",
            Mode::BlackWhiteBlend => "bwb",
            Mode::Cloud => "cl",
            Mode::Party => "pa",
            Mode::Murica => "a",
            Mode::MuricaTwo => "ab",
            Mode::Halloween => "ha",
            Mode::Thanksgiving => "th",
            Mode::Christmas => "ch",
            Mode::NewYears => "ny",
            Mode::Easter => "ea",
        }
    }

    /// Label shown in the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Color => "Color",
            Mode::Periodic => "Periodic",
            Mode::WarmColors => "Warm colors",
            Mode::Rainbow => "Rainbow",
            Mode::RainbowStripes => "Rainbow Stripes",
            Mode::RainbowStripesBlend => "Rainbow Stripes Blend",
            Mode::PurpleGreen => "Purple Green",
            Mode::Random => "Random",
            Mode::BlackWhite => "Black White",
            Mode::BlackWhiteBlend => "Black White Blend",
            Mode::Cloud => "Cloud",
            Mode::Party => "Party",
            Mode::Murica => "'murica",
            Mode::MuricaTwo => "'murica 2.0",
            Mode::Halloween => "Halloween",
            Mode::Thanksgiving => "Thanksgiving",
            Mode::Christmas => "Christmas",
            Mode::NewYears => "New Year's",
            Mode::Easter => "Easter",
        }
    }

    /// Modes showing the color picker and pulse slider instead of the
    /// speed/brightness pair.
    pub fn uses_color(self) -> bool {
        matches!(self, Mode::Color)
    }

    /// Modes showing the speed slider. Periodic animates at a fixed rate and
    /// only exposes brightness.
    pub fn uses_speed(self) -> bool {
        !matches!(self, Mode::Color | Mode::Periodic)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────
// Rgba
// ─────────────────────────────────────────────────────────────────

/// Four-channel color. `r`, `g`, `b` are `0..=255`; alpha follows the UI
/// convention `0.0..=1.0` and is inverted to a byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// The alpha byte transmitted to the device: `round((1 - a) * 255)`.
    ///
    /// The firmware treats alpha as attenuation, so a fully opaque UI color
    /// maps to zero on the wire.
    pub fn wire_alpha(&self) -> u8 {
        ((1.0 - self.a) * 255.0).round() as u8
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 1.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// FormState
// ─────────────────────────────────────────────────────────────────

/// The canonical controller form state.
///
/// Mutated exclusively through the transition methods below, which keep the
/// derived validity flags consistent with the invariants:
///
/// - `mode` is `None` whenever `power` is off
/// - `form_valid == password_valid && (!power || mode.is_some())`
/// - numeric fields stay clamped to their declared ranges
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub power: bool,
    pub mode: Option<Mode>,
    pub color: Rgba,
    pub speed: f64,
    pub pulse: f64,
    pub brightness: u8,
    pub password: String,
    pub password_valid: bool,
    pub form_valid: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            power: false,
            mode: None,
            color: Rgba::default(),
            speed: SPEED_DEFAULT,
            pulse: PULSE_DEFAULT,
            brightness: BRIGHTNESS_DEFAULT,
            password: String::new(),
            password_valid: false,
            form_valid: false,
        }
    }
}

impl FormState {
    /// Toggle power. Clears the selected mode in both directions: powering
    /// on starts with no mode chosen, powering off drops the stale one.
    pub fn set_power(&mut self, on: bool) {
        self.power = on;
        self.mode = None;
        self.refresh_validity();
    }

    /// Select an operating mode. Ignored while power is off.
    pub fn select_mode(&mut self, mode: Mode) {
        if !self.power {
            return;
        }
        self.mode = Some(mode);
        self.refresh_validity();
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = Rgba::new(color.r, color.g, color.b, color.a);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(0.0, SPEED_MAX);
    }

    /// Set the pulse period, quantized to the slider step and clamped.
    pub fn set_pulse(&mut self, pulse: f64) {
        let stepped = (pulse / PULSE_STEP).round() * PULSE_STEP;
        self.pulse = stepped.clamp(0.0, PULSE_MAX);
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Replace the password and recompute both validity flags.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_valid = validate::check_password(&self.password).valid;
        self.refresh_validity();
    }

    /// Whether submit is currently allowed. `form_valid` already implies a
    /// selected mode while power is on; the extra mode check guards the
    /// power-off case where no mode is needed for validity but the encoder
    /// still requires one.
    pub fn can_submit(&self) -> bool {
        self.form_valid && self.mode.is_some()
    }

    fn refresh_validity(&mut self) {
        self.form_valid = validate::form_valid(self.password_valid, self.power, self.mode.is_some());
    }
}
