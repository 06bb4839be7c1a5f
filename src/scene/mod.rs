//! The weather scene: classifiers that turn forecast signals into effect
//! parameters, six particle engines that animate them, and the composition
//! layer that decides which engines are mounted at any moment.
//!
//! Nothing in here knows about terminals or schedulers. Engines advance one
//! frame per [`tick`](engine::EffectEngine::tick) call and draw into their
//! own [`Surface`](surface::Surface); the caller decides the frame rate and
//! how surfaces reach the screen.

pub mod background;
pub mod classify;
pub mod clouds;
pub mod compose;
pub mod engine;
pub mod rain;
pub mod snow;
pub mod stack;
pub mod stars;
pub mod sun;
pub mod surface;
pub mod wind;

pub use background::{Background, background_from_weather};
pub use compose::{SceneParams, WeatherSnapshot, compose};
pub use stack::SceneStack;
