// Math utilities and screen-space geometry

pub mod math;

pub use math::Rect;
