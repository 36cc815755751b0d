use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub intro: IntroConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Tuning for the intro progress controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroConfig {
    /// Fraction of the remaining distance covered per frame
    #[serde(default = "default_easing_coefficient")]
    pub easing_coefficient: f64,
    /// Distance below which the frame loop snaps to the target and stops
    #[serde(default = "default_convergence_epsilon")]
    pub convergence_epsilon: f64,
    /// Pixel-equivalent input delta that maps to a full progress unit
    #[serde(default = "default_delta_divisor")]
    pub delta_divisor: f64,
    /// Largest progress change a single input event may cause
    #[serde(default = "default_max_step")]
    pub max_step: f64,
    /// Multiplier applied to vertical touch movement
    #[serde(default = "default_touch_amplification")]
    pub touch_amplification: f64,
    /// Delta produced by a navigation key press
    #[serde(default = "default_key_delta")]
    pub key_delta: f64,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            easing_coefficient: default_easing_coefficient(),
            convergence_epsilon: default_convergence_epsilon(),
            delta_divisor: default_delta_divisor(),
            max_step: default_max_step(),
            touch_amplification: default_touch_amplification(),
            key_delta: default_key_delta(),
        }
    }
}

/// Deferred in-page navigation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Space left above a section so the fixed logo does not cover it
    #[serde(default = "default_nav_offset")]
    pub offset_px: f64,
    /// How long controller-initiated smooth scrolls suppress gesture detection
    #[serde(default = "default_guard_ms")]
    pub guard_ms: u64,
    /// Attempts to locate a deferred target before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first attempt after unlocking
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,
    /// Delay between failed attempts
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
    /// Frame boundaries to wait after each delay so layout can settle
    #[serde(default = "default_settle_frames")]
    pub settle_frames: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            offset_px: default_nav_offset(),
            guard_ms: default_guard_ms(),
            max_attempts: default_max_attempts(),
            initial_delay_ms: default_initial_delay(),
            retry_delay_ms: default_retry_delay(),
            settle_frames: default_settle_frames(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay interval in milliseconds
    #[serde(default = "default_carousel_interval")]
    pub interval_ms: u64,
    /// Horizontal drag distance that commits a slide change
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_carousel_interval(),
            drag_threshold_px: default_drag_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while something is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Pixel width assumed for one terminal cell
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f64,
    /// Pixel height assumed for one terminal cell
    #[serde(default = "default_cell_height")]
    pub cell_height_px: f64,
    /// Wheel delta reported per mouse wheel notch
    #[serde(default = "default_wheel_delta")]
    pub wheel_delta_px: f64,
    /// Image files shown in the feature carousels, in order
    #[serde(default)]
    pub slides: Vec<PathBuf>,
    /// Native page smooth scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
            wheel_delta_px: default_wheel_delta(),
            slides: Vec::new(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve for page smooth scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the end
    None,
    Linear,
    /// Cubic ease-in-out, the same curve the intro visuals use
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate programmatic page scrolls
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one smooth scroll
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: EasingType::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showreel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_easing_coefficient() -> f64 {
    0.35
}

fn default_convergence_epsilon() -> f64 {
    0.002
}

fn default_delta_divisor() -> f64 {
    2600.0
}

fn default_max_step() -> f64 {
    0.04
}

fn default_touch_amplification() -> f64 {
    1.4
}

fn default_key_delta() -> f64 {
    220.0
}

fn default_nav_offset() -> f64 {
    96.0 // fixed logo + spacing
}

fn default_guard_ms() -> u64 {
    900
}

fn default_max_attempts() -> u32 {
    10
}

fn default_initial_delay() -> u64 {
    60
}

fn default_retry_delay() -> u64 {
    80
}

fn default_settle_frames() -> u32 {
    2
}

fn default_carousel_interval() -> u64 {
    3500
}

fn default_drag_threshold() -> f64 {
    60.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width() -> f64 {
    8.0
}

fn default_cell_height() -> f64 {
    16.0
}

fn default_wheel_delta() -> f64 {
    100.0
}

fn default_scroll_duration() -> u64 {
    600
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values the engines cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let intro = &self.intro;
        if !(intro.easing_coefficient > 0.0 && intro.easing_coefficient <= 1.0) {
            return Err(crate::Error::Config(format!(
                "intro.easing_coefficient must be in (0, 1], got {}",
                intro.easing_coefficient
            )));
        }
        if intro.convergence_epsilon <= 0.0 {
            return Err(crate::Error::Config(
                "intro.convergence_epsilon must be positive".to_string(),
            ));
        }
        if intro.delta_divisor <= 0.0 || intro.max_step <= 0.0 {
            return Err(crate::Error::Config(
                "intro.delta_divisor and intro.max_step must be positive".to_string(),
            ));
        }
        if self.carousel.interval_ms == 0 {
            return Err(crate::Error::Config(
                "carousel.interval_ms must be at least 1".to_string(),
            ));
        }
        if self.carousel.drag_threshold_px < 0.0 {
            return Err(crate::Error::Config(
                "carousel.drag_threshold_px cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/showreel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showreel")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("showreel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Slide image paths with tilde expansion applied
    pub fn slide_paths(&self) -> Vec<PathBuf> {
        self.ui.slides.iter().map(|p| expand_tilde(p)).collect()
    }
}
