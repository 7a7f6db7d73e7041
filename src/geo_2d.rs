/*!
 * Plane geometry for the area calculation.
 * Points, distances, and Heron's formula over `f32`.
 */

mod point;
mod triangle;
mod proc_errors;

pub use point::{
    Point,
    distance,
};
pub use triangle::{
    DegeneratePolicy,
    Triangle,
    heron_radicand,
    triangle_area,
    checked_triangle_area,
};
pub use proc_errors::{
    GeoError,
    ProcResult,
    err_str,
};
