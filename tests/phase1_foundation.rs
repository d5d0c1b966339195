//! Phase 1 tests: vertices, links, traversal state and errors.

use tricolor_graph::types::error::GraphError;
use tricolor_graph::types::link::{Link, DEFAULT_WEIGHT};
use tricolor_graph::types::state::{Color, VertexState};
use tricolor_graph::types::vertex::Vertex;

// ==================== Vertex Tests ====================

#[test]
fn test_vertex_creation() {
    let vertex = Vertex::new(0, 42u32);
    assert_eq!(vertex.id(), 0);
    assert_eq!(*vertex.key(), 42);
    assert!(vertex.neighbors().is_empty());
    assert_eq!(vertex.degree(), 0);
}

#[test]
fn test_vertex_key_is_immutable() {
    let mut vertex = Vertex::new(3, "a".to_string());
    for attempt in ["b", "c", "a"] {
        let err = vertex.set_key(attempt.to_string()).unwrap_err();
        assert!(matches!(err, GraphError::ImmutableValue { field: "key" }));
        assert_eq!(vertex.key(), "a");
    }
}

#[test]
fn test_vertex_neighbors_keep_order_and_duplicates() {
    let mut vertex = Vertex::new(0, 1u32);
    vertex.add_neighbor(2);
    vertex.add_neighbor(1);
    vertex.add_neighbor(2);
    assert_eq!(vertex.neighbors(), &[2, 1, 2]);
    assert_eq!(vertex.degree(), 3);
}

#[test]
fn test_vertex_display_uses_key() {
    let vertex = Vertex::new(7, 12u32);
    assert_eq!(vertex.to_string(), "12");
}

// ==================== Color / State Tests ====================

#[test]
fn test_color_ordering() {
    assert!(Color::White < Color::Gray);
    assert!(Color::Gray < Color::Black);
}

#[test]
fn test_color_names() {
    for color in [Color::White, Color::Gray, Color::Black] {
        assert_eq!(Color::from_name(color.name()), Some(color));
    }
    assert_eq!(Color::from_name("GREY"), Some(Color::Gray));
    assert_eq!(Color::from_name("purple"), None);
}

#[test]
fn test_state_defaults() {
    let state = VertexState::new(5);
    assert_eq!(state.vertex(), 5);
    assert_eq!(state.color(), Color::White);
    assert_eq!(state.distance(), 0);
    assert_eq!(state.predecessor(), None);
    assert!(!state.is_discovered());
}

#[test]
fn test_color_moves_forward() {
    let mut state = VertexState::new(0);
    state.set_color(Color::Gray).unwrap();
    assert!(state.is_discovered());
    state.set_color(Color::Gray).unwrap();
    state.set_color(Color::Black).unwrap();
    assert_eq!(state.color(), Color::Black);
}

#[test]
fn test_white_to_black_allowed() {
    let mut state = VertexState::new(0);
    state.set_color(Color::Black).unwrap();
    assert_eq!(state.color(), Color::Black);
}

#[test]
fn test_black_cannot_regress() {
    let mut state = VertexState::new(0);
    state.set_color(Color::Black).unwrap();

    for target in [Color::White, Color::Gray] {
        match state.set_color(target) {
            Err(GraphError::InvalidStateTransition { from, to }) => {
                assert_eq!(from, Color::Black);
                assert_eq!(to, target);
            }
            other => panic!("expected InvalidStateTransition, got {:?}", other),
        }
        assert_eq!(state.color(), Color::Black);
    }
}

#[test]
fn test_gray_cannot_return_to_white() {
    let mut state = VertexState::new(0);
    state.set_color(Color::Gray).unwrap();
    assert!(state.set_color(Color::White).is_err());
    assert_eq!(state.color(), Color::Gray);
}

#[test]
fn test_self_predecessor_reads_as_absent() {
    let mut state = VertexState::new(4);
    state.set_predecessor(Some(4));
    assert_eq!(state.predecessor(), None);

    state.set_predecessor(Some(1));
    assert_eq!(state.predecessor(), Some(1));

    state.set_predecessor(None);
    assert_eq!(state.predecessor(), None);
}

#[test]
fn test_distance_accepts_any_value() {
    let mut state = VertexState::new(0);
    state.set_distance(5);
    state.set_distance(2);
    assert_eq!(state.distance(), 2);
}

// ==================== Link Tests ====================

#[test]
fn test_link_creation() {
    let link = Link::new(0, 1);
    assert_eq!(link.source(), 0);
    assert_eq!(link.target(), 1);
    assert!((link.weight() - DEFAULT_WEIGHT).abs() < f64::EPSILON);
    assert!((link.weight() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_link_with_weight() {
    let link = Link::with_weight(2, 3, 0.25).unwrap();
    assert!((link.weight() - 0.25).abs() < f64::EPSILON);

    let zero = Link::with_weight(2, 3, 0.0).unwrap();
    assert_eq!(zero.weight(), 0.0);

    assert!(matches!(
        Link::with_weight(2, 3, -0.5),
        Err(GraphError::InvalidWeight(w)) if w == -0.5
    ));
}

#[test]
fn test_negative_weight_rejected() {
    let mut link = Link::new(0, 1);
    link.set_weight(3.5).unwrap();

    let err = link.set_weight(-1.0).unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight(_)));
    assert!((link.weight() - 3.5).abs() < f64::EPSILON);
}

#[test]
fn test_nan_weight_rejected() {
    let mut link = Link::new(0, 1);
    assert!(link.set_weight(f64::NAN).is_err());
    assert!((link.weight() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_link_endpoints() {
    let link = Link::new(4, 9);
    assert!(link.connects(4));
    assert!(link.connects(9));
    assert!(!link.connects(5));
    assert_eq!(link.opposite(4), Some(9));
    assert_eq!(link.opposite(9), Some(4));
    assert_eq!(link.opposite(1), None);

    let looped = Link::new(2, 2);
    assert_eq!(looped.opposite(2), Some(2));
}

// ==================== Error Display Tests ====================

#[test]
fn test_error_messages() {
    let err = GraphError::InvalidStateTransition {
        from: Color::Black,
        to: Color::White,
    };
    assert_eq!(err.to_string(), "Invalid color transition: black -> white");

    let err = GraphError::UnknownVertex("99".into());
    assert_eq!(err.to_string(), "Vertex 99 not found");

    let err = GraphError::ImmutableValue { field: "key" };
    assert_eq!(err.to_string(), "Unable to change key once set");
}
