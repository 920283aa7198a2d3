// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag surface walkthrough.
//!
//! Drag a right-anchored block by its label, restack blocks from a context
//! menu, and toggle which blocks are shown.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example drag_canvas`

use kurbo::Point;
use understory_demos::{
    BlockKind, ContextMenu, SceneNode, SceneParents, sample_surface, show_only_indicators,
};
use understory_drag_surface::{DragEvent, DragSurface, OffsetPair};

fn print_z_order(surface: &DragSurface<SceneNode>) {
    let mut stacked: Vec<_> = surface
        .children()
        .filter(|c| c.is_visible())
        .map(|c| (c.z_index(), c.key()))
        .collect();
    stacked.sort_by_key(|(z, _)| *z);
    for (z, key) in stacked {
        println!("  z={z}  {key:?}");
    }
}

fn main() {
    env_logger::init();

    let mut surface = sample_surface();
    let mut menu = ContextMenu::default();
    let top_right = SceneNode::Block(BlockKind::TopRight);

    println!("== Drag TopRight by its label ==");
    let events = surface.pointer_down(
        SceneNode::Label(BlockKind::TopRight),
        Point::new(400.0, 40.0),
        &SceneParents,
    );
    println!("  down  -> {events:?}");
    assert_eq!(events.as_slice(), &[DragEvent::Started(top_right)]);

    for x in [380.0, 340.0, 300.0] {
        let events = surface.pointer_move(Point::new(x, 60.0));
        println!("  move  -> {events:?}");
    }

    // Right-click mid-drag: the menu targets the dragged block.
    let target = menu.open(&surface, SceneNode::Surface);
    println!("  context menu target while dragging: {target:?}");
    assert_eq!(target, Some(top_right));

    let events = surface.pointer_up();
    println!("  up    -> {events:?}");

    let offsets = surface.child(top_right).map(|c| c.offsets());
    println!("  final offsets: {offsets:?}");
    // 400 -> 300 moves the block 100 to the left: right grows from 24 to 124.
    assert_eq!(offsets.map(|o| o.horizontal), Some(OffsetPair::end(124.0)));

    println!("== Clamped drag ==");
    let bottom_left = SceneNode::Block(BlockKind::BottomLeft);
    surface.pointer_down(
        SceneNode::Chrome(BlockKind::BottomLeft),
        Point::new(50.0, 280.0),
        &SceneParents,
    );
    let events = surface.pointer_move(Point::new(-500.0, 900.0));
    println!("  move  -> {events:?}");
    surface.pointer_up();
    let offsets = surface.child(bottom_left).map(|c| c.offsets());
    assert_eq!(
        offsets.map(|o| (o.horizontal, o.vertical)),
        Some((OffsetPair::start(0.0), OffsetPair::end(0.0)))
    );

    println!("== Context menu restacking ==");
    menu.open(&surface, SceneNode::Label(BlockKind::TopLeft));
    if let Err(err) = menu.bring_to_front(&mut surface) {
        println!("  bring to front failed: {err}");
    }
    menu.open(&surface, SceneNode::Block(BlockKind::None));
    if let Err(err) = menu.send_to_back(&mut surface) {
        println!("  send to back failed: {err}");
    }
    print_z_order(&surface);

    println!("== Toggle draggable ==");
    menu.open(&surface, SceneNode::Label(BlockKind::BottomRight));
    match menu.toggle_can_be_dragged(&mut surface) {
        Ok(checked) => println!("  BottomRight can be dragged: {checked}"),
        Err(err) => println!("  toggle failed: {err}"),
    }
    let events = surface.pointer_down(
        SceneNode::Label(BlockKind::BottomRight),
        Point::new(420.0, 280.0),
        &SceneParents,
    );
    println!("  down on a locked block -> {events:?}");
    assert!(events.is_empty());

    println!("== Only offset indicators ==");
    if let Err(err) = show_only_indicators(&mut surface, true) {
        println!("  visibility change failed: {err}");
    }
    print_z_order(&surface);
    if let Err(err) = show_only_indicators(&mut surface, false) {
        println!("  visibility change failed: {err}");
    }
    print_z_order(&surface);
}
