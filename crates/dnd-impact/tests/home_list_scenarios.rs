//! End-to-end reorder scenarios: a driver building dimensions once, scrolling
//! the home list, and feeding each frame's impact into the next.
//!
//! Run:
//!   cargo test -p dnd-impact --test home_list_scenarios

use dnd_core::{BoxSpec, create_box};
use dnd_impact::{
    Area, ClosestScrollableArgs, Direction, DraggableDescriptor, DraggableDimension, DragImpact,
    DroppableArgs, DroppableDescriptor, DroppableDimension, HomeImpactArgs, Position, Viewport,
    clip, droppable_dimension, in_home_list, scroll_droppable,
};

// ── Helpers ─────────────────────────────────────────────────────────────

const ITEM: f64 = 50.0;

fn list(count: usize) -> Vec<DraggableDimension> {
    (0..count)
        .map(|index| {
            let top = index as f64 * ITEM;
            DraggableDimension::new(
                DraggableDescriptor {
                    id: format!("item-{index}").into(),
                    droppable_id: "home".into(),
                    index,
                },
                create_box(BoxSpec::new(Area::from_edges(top, 200.0, top + ITEM, 0.0))),
                Position::ORIGIN,
            )
        })
        .collect()
}

fn home(count: usize) -> DroppableDimension {
    droppable_dimension(
        DroppableArgs::from_border_box(
            DroppableDescriptor::new("home", "DEFAULT"),
            Area::from_edges(0.0, 200.0, count as f64 * ITEM, 0.0),
        )
        .direction(Direction::Vertical),
    )
}

fn window() -> Viewport {
    Viewport::new(1024.0, 768.0, Position::ORIGIN, Position::ORIGIN)
}

fn step(
    center: Position,
    dragging: usize,
    items: &[DraggableDimension],
    home: &DroppableDimension,
    previous: &DragImpact,
) -> DragImpact {
    in_home_list(HomeImpactArgs {
        page_center: center,
        draggable: &items[dragging],
        home,
        inside_home: items,
        previous_impact: previous,
        viewport: &window(),
    })
}

fn ids(impact: &DragImpact) -> Vec<String> {
    impact
        .movement
        .displaced
        .iter()
        .map(|displacement| displacement.draggable_id.to_string())
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Impact scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn dragging_first_item_past_two_siblings() {
    // Dragged item plus two siblings, each 50px; dragged center starts at 25.
    let items = list(3);
    let home = home(3);
    assert_eq!(items[0].page.border_box.center.y, 25.0);

    let impact = step(Position::new(100.0, 130.0), 0, &items, &home, &DragImpact::none());

    assert!(impact.movement.is_beyond_start_position);
    assert_eq!(ids(&impact), vec!["item-2", "item-1"]);
    assert_eq!(impact.destination.expect("destination").index, 2);
}

#[test]
fn dragged_item_never_displaces_itself() {
    let items = list(5);
    let home = home(5);
    for y in [0.0, 60.0, 110.0, 175.0, 240.0] {
        let impact = step(Position::new(100.0, y), 2, &items, &home, &DragImpact::none());
        assert!(
            impact
                .movement
                .displaced
                .iter()
                .all(|displacement| displacement.draggable_id.as_str() != "item-2"),
            "self displaced at y={y}"
        );
    }
}

#[test]
fn a_full_drag_sequence_forward_then_back() {
    let items = list(5);
    let home = home(5);
    let mut impact = DragImpact::none();
    let mut indices = Vec::new();

    // item-1 starts centered at 75; sweep down to the end then back to 10.
    for y in [75.0, 110.0, 160.0, 210.0, 240.0, 160.0, 90.0, 40.0, 10.0] {
        impact = step(Position::new(100.0, y), 1, &items, &home, &impact);
        indices.push(impact.destination.as_ref().expect("destination").index);
    }

    assert_eq!(indices, vec![1, 2, 3, 4, 4, 3, 1, 0, 0]);
    assert!(!impact.movement.is_beyond_start_position);
    assert_eq!(ids(&impact), vec!["item-0"]);
}

#[test]
fn displacements_animate_once_established() {
    let items = list(4);
    let home = home(4);
    let first = step(Position::new(100.0, 60.0), 0, &items, &home, &DragImpact::none());
    let second = step(Position::new(100.0, 70.0), 0, &items, &home, &first);

    assert!(!first.movement.displaced[0].should_animate);
    assert!(second.movement.displaced[0].should_animate);
}

// ═════════════════════════════════════════════════════════════════════════
// Droppable geometry scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn subject_entirely_above_frame_is_clipped_away() {
    let frame = Area::from_edges(0.0, 100.0, 100.0, 0.0);
    let subject = Area::from_edges(-200.0, 100.0, -100.0, 0.0);
    assert_eq!(clip(&frame, &subject), None);
}

#[test]
fn scrolling_a_tall_list_inside_a_short_frame() {
    let frame = create_box(BoxSpec::new(Area::from_edges(0.0, 100.0, 100.0, 0.0)));
    let droppable = droppable_dimension(
        DroppableArgs::from_border_box(
            DroppableDescriptor::new("home", "DEFAULT"),
            Area::from_edges(0.0, 100.0, 500.0, 0.0),
        )
        .closest(ClosestScrollableArgs {
            client: frame,
            page: frame,
            scroll_width: 100.0,
            scroll_height: 500.0,
            scroll: Position::ORIGIN,
            should_clip_subject: true,
        }),
    );
    let max = droppable.closest_scrollable().expect("frame").scroll.max;
    assert_eq!(max, Position::new(0.0, 400.0));

    let scrolled = scroll_droppable(&droppable, Position::new(0.0, 100.0)).expect("scrollable");
    assert_eq!(
        scrolled.viewport.subject.top,
        droppable.viewport.subject.top - 100.0
    );
    assert_eq!(
        scrolled.viewport.subject.bottom,
        droppable.viewport.subject.bottom - 100.0
    );
    assert_eq!(scrolled.viewport.clipped, Some(frame.border_box));

    let over_scrolled =
        scroll_droppable(&scrolled, Position::new(0.0, 900.0)).expect("scrollable");
    let closest = over_scrolled.closest_scrollable().expect("frame");
    assert_eq!(closest.scroll.current, Position::new(0.0, 900.0));
    assert_eq!(closest.scroll.max.y, 400.0);
    assert_eq!(over_scrolled.viewport.clipped, None);
}

#[test]
fn scrolling_back_to_initial_restores_subject_and_clip() {
    let frame = create_box(BoxSpec::new(Area::from_edges(0.0, 100.0, 100.0, 0.0)));
    let droppable = droppable_dimension(
        DroppableArgs::from_border_box(
            DroppableDescriptor::new("home", "DEFAULT"),
            Area::from_edges(0.0, 100.0, 500.0, 0.0),
        )
        .closest(ClosestScrollableArgs {
            client: frame,
            page: frame,
            scroll_width: 100.0,
            scroll_height: 500.0,
            scroll: Position::new(0.0, 40.0),
            should_clip_subject: true,
        }),
    );
    let initial = droppable.closest_scrollable().expect("frame").scroll.initial;

    let away = scroll_droppable(&droppable, Position::new(0.0, 320.0)).expect("scrollable");
    let back = scroll_droppable(&away, initial).expect("scrollable");
    assert_eq!(back.viewport.subject, droppable.viewport.subject);
    assert_eq!(back.viewport.clipped, droppable.viewport.clipped);
}

// ═════════════════════════════════════════════════════════════════════════
// Fixture capture
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn impact_survives_json_fixture_capture() {
    let items = list(4);
    let home = home(4);
    let impact = step(Position::new(100.0, 130.0), 0, &items, &home, &DragImpact::none());

    let json = serde_json::to_string(&impact).expect("serialize impact");
    let restored: DragImpact = serde_json::from_str(&json).expect("deserialize impact");
    assert_eq!(restored, impact);

    let value = serde_json::to_value(&impact).expect("to value");
    assert_eq!(value["direction"], "vertical");
    assert_eq!(value["destination"]["droppable_id"], "home");
}
