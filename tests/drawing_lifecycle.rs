use doodle::{Drawing, GestureState, InputEvent};
use egui::{Color32, Pos2};

fn drag(drawing: &mut Drawing, points: &[Pos2], color: Color32, width: f32) {
    let (first, rest) = points.split_first().unwrap();
    InputEvent::DragStart(*first).apply(drawing, color, width);
    for point in rest {
        InputEvent::DragMove(*point).apply(drawing, color, width);
    }
    InputEvent::DragEnd.apply(drawing, color, width);
}

#[test]
fn test_moves_extend_active_stroke_in_order() {
    let mut drawing = Drawing::new();
    drawing.begin_stroke(Pos2::new(0.0, 0.0), Color32::BLACK, 20.0);

    let moves: Vec<Pos2> = (1..=5).map(|i| Pos2::new(i as f32, 2.0 * i as f32)).collect();
    for point in &moves {
        assert!(drawing.append_point(*point));
    }

    let active = drawing.active_stroke().unwrap();
    assert_eq!(active.len(), moves.len() + 1);
    assert_eq!(active.points()[0], Pos2::new(0.0, 0.0));
    assert_eq!(&active.points()[1..], moves.as_slice());
}

#[test]
fn test_finalized_stroke_stops_growing() {
    let mut drawing = Drawing::new();
    drag(
        &mut drawing,
        &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)],
        Color32::RED,
        10.0,
    );
    assert_eq!(drawing.gesture(), GestureState::Idle);
    assert!(drawing.active_stroke().is_none());

    // A stray move after the gesture ended must not touch the old stroke
    assert!(!drawing.append_point(Pos2::new(50.0, 50.0)));
    assert_eq!(drawing.strokes()[0].len(), 2);
}

#[test]
fn test_draw_order_is_insertion_order() {
    let mut drawing = Drawing::new();
    drag(&mut drawing, &[Pos2::new(0.0, 0.0)], Color32::RED, 5.0);
    drag(&mut drawing, &[Pos2::new(1.0, 1.0)], Color32::BLUE, 6.0);
    drag(&mut drawing, &[Pos2::new(2.0, 2.0)], Color32::GREEN, 7.0);

    let colors: Vec<Color32> = drawing.strokes().iter().map(|s| s.color()).collect();
    assert_eq!(colors, vec![Color32::RED, Color32::BLUE, Color32::GREEN]);
}

#[test]
fn test_undo_on_empty_drawing_is_noop() {
    let mut drawing = Drawing::new();
    assert!(drawing.undo().is_none());
    assert_eq!(drawing.len(), 0);
}

#[test]
fn test_undo_removes_only_last_stroke() {
    let mut drawing = Drawing::new();
    drag(&mut drawing, &[Pos2::new(0.0, 0.0), Pos2::new(1.0, 0.0)], Color32::BLACK, 5.0);
    drag(&mut drawing, &[Pos2::new(9.0, 9.0)], Color32::RED, 5.0);

    let removed = drawing.undo().unwrap();
    assert_eq!(removed.color(), Color32::RED);
    assert_eq!(drawing.len(), 1);
    assert_eq!(drawing.strokes()[0].color(), Color32::BLACK);
}

#[test]
fn test_undo_mid_drag_ends_gesture() {
    let mut drawing = Drawing::new();
    drag(&mut drawing, &[Pos2::new(0.0, 0.0), Pos2::new(1.0, 0.0)], Color32::BLACK, 5.0);
    drawing.begin_stroke(Pos2::new(5.0, 5.0), Color32::RED, 5.0);

    drawing.undo();
    assert!(!drawing.is_dragging());
    assert!(!drawing.append_point(Pos2::new(6.0, 6.0)));
    assert_eq!(drawing.strokes()[0].len(), 2);
}

#[test]
fn test_clear_always_empties() {
    let mut drawing = Drawing::new();
    drawing.clear();
    assert!(drawing.is_empty());

    for i in 0..4 {
        drag(&mut drawing, &[Pos2::new(i as f32, 0.0)], Color32::BLACK, 5.0);
    }
    drawing.begin_stroke(Pos2::ZERO, Color32::BLACK, 5.0);
    drawing.clear();

    assert!(drawing.is_empty());
    assert!(!drawing.is_dragging());
}
