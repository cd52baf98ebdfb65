use super::*;
use crate::foundation::core::{Point, Size};

struct StubContainer {
    name: String,
    geometry: NodeGeometry,
}

impl StubContainer {
    fn at(name: &str, x: f64, y: f64) -> Self {
        Self {
            name: name.to_string(),
            geometry: NodeGeometry::new(Point::new(x, y), Size::new(100.0, 60.0)),
        }
    }
}

impl VisualContainer for StubContainer {
    fn name(&self) -> &str {
        &self.name
    }

    fn geometry(&self) -> NodeGeometry {
        self.geometry
    }

    fn export_bytes(&self) -> SlideloomResult<Vec<u8>> {
        unreachable!("ordering never exports")
    }
}

#[test]
fn orders_by_ascending_x() {
    let (a, b, c) = (
        StubContainer::at("a", 250.0, 0.0),
        StubContainer::at("b", 0.0, 0.0),
        StubContainer::at("c", 100.0, 0.0),
    );
    let mut nodes: Vec<&StubContainer> = vec![&a, &b, &c];
    order_left_to_right(&mut nodes);

    let names: Vec<&str> = nodes.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["b", "c", "a"]);
}

#[test]
fn ties_broken_by_ascending_y() {
    let (low, high) = (
        StubContainer::at("low", 50.0, 200.0),
        StubContainer::at("high", 50.0, 10.0),
    );
    let mut nodes: Vec<&StubContainer> = vec![&low, &high];
    order_left_to_right(&mut nodes);

    let names: Vec<&str> = nodes.iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["high", "low"]);
}
