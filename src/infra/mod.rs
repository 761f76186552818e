//! Инфраструктурный слой вокруг ядра раздатчика:
//! - генерация ID;
//! - RNG-реализации для перемешивания;
//! - часы для меток времени событий.

pub mod clock;
pub mod ids;
pub mod rng;

pub use clock::*;
pub use ids::*;
pub use rng::*;
