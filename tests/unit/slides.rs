use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::foundation::core::{Point, Size};
use crate::foundation::error::SlideloomError;
use crate::raster::registry::InMemoryImageRegistry;

type CallLog = Rc<RefCell<Vec<String>>>;

struct LoggedContainer {
    tag: &'static str,
    geometry: NodeGeometry,
    log: CallLog,
    broken: bool,
}

impl LoggedContainer {
    fn new(tag: &'static str, x: f64, width: f64, log: &CallLog) -> Self {
        Self {
            tag,
            geometry: NodeGeometry::new(Point::new(x, 0.0), Size::new(width, 60.0)),
            log: Rc::clone(log),
            broken: false,
        }
    }
}

impl VisualContainer for LoggedContainer {
    fn name(&self) -> &str {
        self.tag
    }

    fn geometry(&self) -> NodeGeometry {
        self.geometry
    }

    fn export_bytes(&self) -> SlideloomResult<Vec<u8>> {
        self.log.borrow_mut().push(format!("export {}", self.tag));
        if self.broken {
            return Err(SlideloomError::export("logged container is broken"));
        }
        Ok(self.tag.as_bytes().to_vec())
    }
}

struct LoggedTranscoder {
    log: CallLog,
}

impl ByteTranscoder for LoggedTranscoder {
    fn transcode(&mut self, bytes: &[u8]) -> SlideloomResult<Vec<u8>> {
        self.log
            .borrow_mut()
            .push(format!("transcode {}", String::from_utf8_lossy(bytes)));
        Ok(bytes.to_vec())
    }
}

fn rasterizer(log: &CallLog) -> Rasterizer<LoggedTranscoder, InMemoryImageRegistry> {
    Rasterizer::new(
        LoggedTranscoder {
            log: Rc::clone(log),
        },
        InMemoryImageRegistry::new(),
    )
}

#[test]
fn output_is_index_aligned_with_input() {
    let log = CallLog::default();
    let (a, b, c) = (
        LoggedContainer::new("a", 0.0, 80.0, &log),
        LoggedContainer::new("b", 100.0, 100.0, &log),
        LoggedContainer::new("c", 250.0, 90.0, &log),
    );
    let nodes: Vec<&dyn VisualContainer> = vec![&a, &b, &c];

    let slides = collect_slides(&nodes, &mut rasterizer(&log)).unwrap();

    assert_eq!(slides.len(), 3);
    for (slide, node) in slides.iter().zip([&a, &b, &c]) {
        assert_eq!(slide.geometry, node.geometry);
    }
    // Distinct payloads must not collapse into one handle.
    assert_ne!(slides[0].paint.image, slides[1].paint.image);
    assert_ne!(slides[1].paint.image, slides[2].paint.image);
}

#[test]
fn slides_resolve_one_at_a_time_in_input_order() {
    let log = CallLog::default();
    let (a, b) = (
        LoggedContainer::new("a", 0.0, 80.0, &log),
        LoggedContainer::new("b", 100.0, 100.0, &log),
    );
    let nodes: Vec<&dyn VisualContainer> = vec![&a, &b];

    collect_slides(&nodes, &mut rasterizer(&log)).unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["export a", "transcode a", "export b", "transcode b"]
    );
}

#[test]
fn first_failure_aborts_with_no_partial_list() {
    let log = CallLog::default();
    let a = LoggedContainer::new("a", 0.0, 80.0, &log);
    let mut b = LoggedContainer::new("b", 100.0, 100.0, &log);
    b.broken = true;
    let c = LoggedContainer::new("c", 250.0, 90.0, &log);
    let nodes: Vec<&dyn VisualContainer> = vec![&a, &b, &c];

    let mut rasterizer = rasterizer(&log);
    let err = collect_slides(&nodes, &mut rasterizer).unwrap_err();

    assert!(matches!(err, SlideloomError::Export(_)));
    // Nothing after the failing node was touched.
    assert!(!log.borrow().iter().any(|entry| entry.ends_with('c')));
    assert_eq!(rasterizer.registry().len(), 1);
}

#[test]
fn empty_input_collects_nothing() {
    let log = CallLog::default();
    let slides = collect_slides(&[], &mut rasterizer(&log)).unwrap();
    assert!(slides.is_empty());
    assert!(log.borrow().is_empty());
}
