//! Map path data. Path generation and topology live outside the
//! simulation; the engine only needs the active waypoint polyline.

use pathbreak_core::types::Position;

/// Default lane used when the embedder does not inject a path. A simple
/// S-curve across an 800x600 map.
pub fn default_path() -> Vec<Position> {
    vec![
        Position::new(0.0, 300.0),
        Position::new(150.0, 300.0),
        Position::new(150.0, 120.0),
        Position::new(420.0, 120.0),
        Position::new(420.0, 470.0),
        Position::new(650.0, 470.0),
        Position::new(650.0, 300.0),
        Position::new(800.0, 300.0),
    ]
}
