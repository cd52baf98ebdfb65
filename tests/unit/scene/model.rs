use super::*;
use crate::foundation::core::{ImageHandle, ScaleMode};

fn frame(id: u32) -> CarouselFrame {
    CarouselFrame {
        id: FrameId(id),
        name: format!("Slide {id}"),
        position: Point::new(f64::from(id) * 100.0, 0.0),
        size: Size::new(80.0, 60.0),
        clips_content: false,
        layers: vec![ImageLayer {
            name: "current".to_string(),
            position: Point::ORIGIN,
            size: Size::new(80.0, 60.0),
            paint: ImagePaint {
                scale_mode: ScaleMode::Crop,
                image: ImageHandle::from_u64(u64::from(id) + 1),
            },
        }],
        reactions: Vec::new(),
    }
}

fn click_to(target: u32) -> Reaction {
    Reaction {
        trigger: Trigger::Click,
        action: NavigateAction::Navigate {
            target: FrameId(target),
        },
        effect: TransitionEffect {
            kind: TransitionKind::SmartAnimate,
            easing: Easing::EaseOut,
            duration: 1.0,
        },
    }
}

fn page(frames: Vec<CarouselFrame>) -> CarouselPage {
    CarouselPage {
        name: "Slideshow".to_string(),
        frames,
        entry_points: Vec::new(),
    }
}

#[test]
fn wired_page_validates() {
    let mut p = page(vec![frame(0), frame(1)]);
    p.frames[0].reactions.push(click_to(1));
    p.entry_points.push(FlowEntryPoint {
        name: "Start Slideshow".to_string(),
        frame: FrameId(0),
    });
    p.validate().unwrap();
}

#[test]
fn duplicate_frame_ids_are_rejected() {
    let p = page(vec![frame(0), frame(0)]);
    assert!(matches!(
        p.validate().unwrap_err(),
        SlideloomError::Validation(_)
    ));
}

#[test]
fn dangling_reaction_target_is_rejected() {
    let mut p = page(vec![frame(0)]);
    p.frames[0].reactions.push(click_to(9));
    assert!(matches!(
        p.validate().unwrap_err(),
        SlideloomError::Validation(_)
    ));
}

#[test]
fn dangling_entry_point_is_rejected() {
    let mut p = page(vec![frame(0)]);
    p.entry_points.push(FlowEntryPoint {
        name: "Start Slideshow".to_string(),
        frame: FrameId(9),
    });
    assert!(matches!(
        p.validate().unwrap_err(),
        SlideloomError::Validation(_)
    ));
}

#[test]
fn json_roundtrip_preserves_the_page() {
    let mut p = page(vec![frame(0), frame(1)]);
    p.frames[0].reactions.push(click_to(1));
    p.entry_points.push(FlowEntryPoint {
        name: "Start Slideshow".to_string(),
        frame: FrameId(0),
    });

    let json = p.to_json_string().unwrap();
    let back = CarouselPage::from_json_str(&json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn frame_lookup_by_id() {
    let p = page(vec![frame(0), frame(3)]);
    assert_eq!(p.frame(FrameId(3)).map(|f| f.name.as_str()), Some("Slide 3"));
    assert!(p.frame(FrameId(1)).is_none());
}
