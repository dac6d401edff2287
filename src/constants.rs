// DOM hooks and frame-loop tuning for the web front-end.

// Element lookups (resolved once at startup)
pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_SELECTOR: &str = ".info-panel";
pub const PANEL_CONTENT_SELECTOR: &str = ".info-content";
pub const PANEL_CLOSE_SELECTOR: &str = ".close-button";
pub const LOADING_SCREEN_SELECTOR: &str = ".loading-screen";
pub const PROGRESS_BAR_SELECTOR: &str = ".progress-bar";

// Class toggled on the panel while it is open
pub const PANEL_ACTIVE_CLASS: &str = "active";

// Frame loop
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after a backgrounded tab resumes
