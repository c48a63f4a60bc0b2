//! Interactive view: filter/sort state and the surface it drives.
//!
//! - `surface`: the `ViewSurface` capability any rendering target implements
//! - `controller`: `ViewController`, `FilterCriteria`, `SortCriteria`

pub mod controller;
pub mod surface;

pub use controller::*;
pub use surface::*;
