use std::str::FromStr;

use day3_6::{
    wire::{self, Move, Point, Wire},
    Error,
};

fn wires(text: &str) -> Vec<Wire> {
    text.lines().map(|l| Wire::from_str(l).unwrap()).collect()
}

#[test]
fn trace_keeps_first_visit_steps() {
    let wire = Wire::from_str("R2,U1,L1,D2").unwrap();
    let trace = wire.trace();
    assert_eq!(trace.get(&Point::new(1, 0)), Some(&1));
    assert_eq!(trace.get(&Point::new(2, 1)), Some(&3));
    assert_eq!(trace.get(&Point::new(1, -1)), Some(&6));
    // (1, 0) is passed again at step 5.
    assert_eq!(trace.len(), 5);
    assert!(!trace.contains_key(&Point::origin()));
}

#[test]
fn cross_small_wires() {
    let wires = wires("R8,U5,L5,D3\nU7,R6,D4,L4");
    let crossings = wires[0].cross(&wires[1]);
    let points = crossings.iter().map(|c| *c.point()).collect::<Vec<_>>();
    assert_eq!(points, vec![Point::new(3, 3), Point::new(6, 5)]);
    assert_eq!(crossings[0].steps(), 40);
    assert_eq!(crossings[1].steps(), 30);

    let closest = wire::closest_crossing(&wires).unwrap();
    assert_eq!(*closest.point(), Point::new(3, 3));
    assert_eq!(closest.point().mht_dist(), 6);
    assert_eq!(wire::earliest_crossing(&wires).unwrap().steps(), 30);
}

#[test]
fn cross_larger_wires() {
    let wires0 = wires("R75,D30,R83,U83,L12,D49,R71,U7,L72\nU62,R66,U55,R34,D71,R55,D58,R83");
    assert_eq!(
        wire::closest_crossing(&wires0).unwrap().point().mht_dist(),
        159
    );
    assert_eq!(wire::earliest_crossing(&wires0).unwrap().steps(), 610);

    let wires1 = wires(
        "R98,U47,R26,D63,R33,U87,L62,D20,R33,U53,R51\nU98,R91,D20,R16,D67,R40,U7,R15,U6,R7",
    );
    assert_eq!(
        wire::closest_crossing(&wires1).unwrap().point().mht_dist(),
        135
    );
    assert_eq!(wire::earliest_crossing(&wires1).unwrap().steps(), 410);
}

#[test]
fn crossing_at_central_port_is_ignored() {
    let wires = wires("R2,L4\nU2,D4");
    assert!(matches!(
        wire::closest_crossing(&wires),
        Err(Error::NoCrossing)
    ));
}

#[test]
fn require_two_wires() {
    assert!(matches!(
        wire::closest_crossing(&wires("R8")),
        Err(Error::WireCount(1))
    ));
    assert!(matches!(
        wire::earliest_crossing(&wires("R8\nU2\nL3")),
        Err(Error::WireCount(3))
    ));
}

#[test]
fn reject_invalid_moves() {
    assert!(matches!(
        Move::from_str("X5"),
        Err(Error::UnknownDirection('X'))
    ));
    assert!(matches!(
        Move::from_str("R0"),
        Err(Error::InvalidWireMove(_))
    ));
    assert!(matches!(
        Wire::from_str("R8,,U5"),
        Err(Error::InvalidWireMove(s)) if s.is_empty()
    ));
}
