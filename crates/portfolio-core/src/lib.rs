//! Interaction core for the desert portfolio scene.
//!
//! Everything here is platform independent: the web front-end, the native
//! viewer and the tests all drive the same [`AppState`].

pub mod app;
pub mod camera;
pub mod constants;
pub mod content;
pub mod error;
pub mod input;
pub mod loading;
pub mod locomotion;
pub mod panel;
pub mod picking;
pub mod scene;
pub mod selection;
pub mod tween;

pub use app::{AppConfig, AppState};
pub use camera::Camera;
pub use content::{content_for, ContentItem, ContentKind, ContentRecord};
pub use error::CoreError;
pub use input::{Direction, InputState};
pub use loading::{LoadingPhase, LoadingSequence};
pub use locomotion::{Character, LocomotionParams};
pub use panel::{LogPresenter, PanelPresenter};
pub use picking::{Hit, Ray};
pub use scene::{build_scene, NodeId, NodeRole, Scene};
pub use selection::{FocusParams, Selection, SelectionController};
