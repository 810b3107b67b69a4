use grid_astar::config::VisualizerConfig;
use grid_astar::input::{Modifier, PointerButton, PointerEvent};
use grid_astar::session::Session;

// Replays a short sequence of pointer events on a 300x200 surface with 20 pixel cells, the way
// a windowing frontend would forward presses and drags.

fn main() {
    let config = VisualizerConfig {
        width: 300,
        height: 200,
        scale: 20,
        endpoint_margin: 2,
        ..VisualizerConfig::default()
    };
    let mut session = Session::new(&config).unwrap();
    println!("{}", session);

    // Drag a wall down the middle, leaving a gap in the top row
    let mut events = (1..10)
        .map(|row| PointerEvent::new(150, row * 20 + 5, PointerButton::Primary, Modifier::None))
        .collect::<Vec<_>>();
    events.push(PointerEvent::new(290, 10, PointerButton::Primary, Modifier::Destination));
    events.push(PointerEvent::new(10, 190, PointerButton::Primary, Modifier::Source));
    events.push(PointerEvent::new(150, 10, PointerButton::Primary, Modifier::None));
    events.push(PointerEvent::new(150, 110, PointerButton::Secondary, Modifier::None));

    for event in events {
        match session.handle_pointer(event) {
            Some(Err(e)) => println!("Rejected: {}", e),
            Some(Ok(())) => {}
            None => println!("Ignored event at ({}, {})", event.x, event.y),
        }
    }
    println!("{}", session);
    let stats = session.stats();
    println!(
        "Found: {}, cells: {}, expanded: {}, pushed: {}",
        session.path().is_found(),
        session.path().len(),
        stats.expanded,
        stats.pushed
    );
}
