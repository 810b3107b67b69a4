//! Decoding of raw pointer events into grid edits.
use crate::session::{Edit, EditAction};
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Modifier key held during a pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Modifier {
    #[default]
    None,
    /// Primary press nominates the destination.
    Destination,
    /// Primary press nominates the source.
    Source,
}

/// A press or drag at surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub button: PointerButton,
    pub modifier: Modifier,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, button: PointerButton, modifier: Modifier) -> PointerEvent {
        PointerEvent {
            x,
            y,
            button,
            modifier,
        }
    }
}

/// Maps a pointer event onto the cell under the cursor and the edit it requests. Events left
/// of or above the surface, or with a zero scale, give [None]; positions past the right or
/// bottom edge are left for the grid to reject.
pub fn decode(event: PointerEvent, scale: usize) -> Option<Edit> {
    if event.x < 0 || event.y < 0 || scale == 0 {
        return None;
    }
    let scale = i32::try_from(scale).ok()?;
    let at = Point::new(event.x / scale, event.y / scale);
    let action = match (event.button, event.modifier) {
        (PointerButton::Secondary, _) => EditAction::RemoveObstacle,
        (PointerButton::Primary, Modifier::None) => EditAction::PlaceObstacle,
        (PointerButton::Primary, Modifier::Destination) => EditAction::SetDestination,
        (PointerButton::Primary, Modifier::Source) => EditAction::SetSource,
    };
    Some(Edit::new(at, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::at;

    #[test]
    fn pixels_map_to_cells() {
        let event = PointerEvent::new(260, 49, PointerButton::Primary, Modifier::None);
        assert_eq!(
            decode(event, 25),
            Some(Edit::new(at(1, 10), EditAction::PlaceObstacle))
        );
    }

    #[test]
    fn buttons_and_modifiers_select_actions() {
        let cases = [
            (PointerButton::Secondary, Modifier::None, EditAction::RemoveObstacle),
            (PointerButton::Secondary, Modifier::Source, EditAction::RemoveObstacle),
            (PointerButton::Primary, Modifier::Destination, EditAction::SetDestination),
            (PointerButton::Primary, Modifier::Source, EditAction::SetSource),
        ];
        for (button, modifier, expected) in cases {
            let edit = decode(PointerEvent::new(0, 0, button, modifier), 10).unwrap();
            assert_eq!(edit.action, expected);
        }
    }

    #[test]
    fn off_surface_events_are_dropped() {
        let event = PointerEvent::new(-1, 5, PointerButton::Primary, Modifier::None);
        assert_eq!(decode(event, 10), None);
        let event = PointerEvent::new(5, 5, PointerButton::Primary, Modifier::None);
        assert_eq!(decode(event, 0), None);
    }
}
