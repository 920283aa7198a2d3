// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scene for the drag surface demos.
//!
//! The scene holds six blocks, each anchored to the surface differently (one
//! per corner, one with every side set, one with no side set). Blocks are visual
//! nodes; the labels inside them are logical nodes that link to their owning
//! block rather than to a visual parent, so [`SceneParents`] has to switch on
//! node kind when walking upward.

use kurbo::Size;
use understory_drag_surface::{
    ChildFlags, DragSurface, LocalChild, OffsetPair, Offsets, ParentLookup, SurfaceError,
};

/// Size of the demo surface.
pub const SURFACE_SIZE: Size = Size::new(480.0, 320.0);

/// Size of every block.
pub const BLOCK_SIZE: Size = Size::new(96.0, 48.0);

/// How a block is anchored to the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Left and top offsets.
    TopLeft,
    /// Right and top offsets.
    TopRight,
    /// Right and bottom offsets.
    BottomRight,
    /// Left and bottom offsets.
    BottomLeft,
    /// All four offsets set; left and top win.
    All,
    /// No offsets set; anchored to the top-left corner at zero.
    None,
}

impl BlockKind {
    /// Every block, in insertion order.
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::All,
        Self::None,
    ];

    /// Initial offsets of the block.
    #[must_use]
    pub const fn offsets(self) -> Offsets {
        match self {
            Self::TopLeft => Offsets::left_top(24.0, 24.0),
            Self::TopRight => Offsets::right_top(24.0, 24.0),
            Self::BottomRight => Offsets::right_bottom(24.0, 24.0),
            Self::BottomLeft => Offsets::left_bottom(24.0, 24.0),
            Self::All => Offsets::new(
                OffsetPair::both(192.0, 192.0),
                OffsetPair::both(136.0, 136.0),
            ),
            Self::None => Offsets::new(OffsetPair::UNSET, OffsetPair::UNSET),
        }
    }

    /// Corner blocks carry a label describing their anchoring; the others are
    /// bare offset indicators.
    #[must_use]
    pub const fn has_label(self) -> bool {
        !matches!(self, Self::All | Self::None)
    }
}

/// A node in the demo scene.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneNode {
    /// The drag surface itself.
    Surface,
    /// A draggable block; a direct child of the surface.
    Block(BlockKind),
    /// Visual chrome drawn inside a block (border, background).
    Chrome(BlockKind),
    /// Logical label content owned by a block.
    Label(BlockKind),
}

/// Parent links for [`SceneNode`].
///
/// Visual nodes follow the visual tree; logical nodes follow their logical owner.
#[derive(Copy, Clone, Debug, Default)]
pub struct SceneParents;

impl SceneParents {
    fn visual_parent(node: SceneNode) -> Option<SceneNode> {
        match node {
            SceneNode::Surface => None,
            SceneNode::Block(_) => Some(SceneNode::Surface),
            SceneNode::Chrome(kind) => Some(SceneNode::Block(kind)),
            SceneNode::Label(_) => None,
        }
    }

    fn logical_parent(node: SceneNode) -> Option<SceneNode> {
        match node {
            SceneNode::Label(kind) if kind.has_label() => Some(SceneNode::Chrome(kind)),
            _ => None,
        }
    }
}

impl ParentLookup<SceneNode> for SceneParents {
    fn parent_of(&self, node: &SceneNode) -> Option<SceneNode> {
        match node {
            SceneNode::Label(_) => Self::logical_parent(*node),
            _ => Self::visual_parent(*node),
        }
    }
}

/// Builds the demo surface with every block visible and draggable.
#[must_use]
pub fn sample_surface() -> DragSurface<SceneNode> {
    let mut surface = DragSurface::new(SURFACE_SIZE);
    for kind in BlockKind::ALL {
        surface.insert(
            SceneNode::Block(kind),
            LocalChild {
                offsets: kind.offsets(),
                size: BLOCK_SIZE,
                flags: ChildFlags::default(),
            },
        );
    }
    surface.reset_z_order();
    surface
}

/// Shows only the bare offset indicators, or every block again.
pub fn show_only_indicators(
    surface: &mut DragSurface<SceneNode>,
    only_indicators: bool,
) -> Result<(), SurfaceError<SceneNode>> {
    for kind in BlockKind::ALL {
        let visible = !only_indicators || !kind.has_label();
        surface.set_visible(SceneNode::Block(kind), visible)?;
    }
    Ok(())
}

/// Context menu over the surface: bring to front, send to back, toggle draggable.
#[derive(Clone, Debug, Default)]
pub struct ContextMenu {
    target: Option<SceneNode>,
}

impl ContextMenu {
    /// Opens the menu for a secondary press whose event originated at `origin`.
    ///
    /// While a drag is in progress the menu targets the dragged block.
    pub fn open(
        &mut self,
        surface: &DragSurface<SceneNode>,
        origin: SceneNode,
    ) -> Option<SceneNode> {
        self.target = surface.context_target(origin, &SceneParents);
        self.target
    }

    /// The block the menu currently targets.
    #[must_use]
    pub fn target(&self) -> Option<SceneNode> {
        self.target
    }

    /// "Can be dragged" check mark for the targeted block.
    #[must_use]
    pub fn is_drag_checked(&self, surface: &DragSurface<SceneNode>) -> bool {
        self.target.is_some_and(|t| surface.can_be_dragged(t))
    }

    /// "Bring to front" menu item.
    pub fn bring_to_front(
        &self,
        surface: &mut DragSurface<SceneNode>,
    ) -> Result<(), SurfaceError<SceneNode>> {
        if let Some(target) = self.target {
            surface.bring_to_front(target)?;
        }
        Ok(())
    }

    /// "Send to back" menu item.
    pub fn send_to_back(
        &self,
        surface: &mut DragSurface<SceneNode>,
    ) -> Result<(), SurfaceError<SceneNode>> {
        if let Some(target) = self.target {
            surface.send_to_back(target)?;
        }
        Ok(())
    }

    /// "Can be dragged" menu item; returns the new check state.
    pub fn toggle_can_be_dragged(
        &self,
        surface: &mut DragSurface<SceneNode>,
    ) -> Result<bool, SurfaceError<SceneNode>> {
        match self.target {
            Some(target) => surface.toggle_can_be_dragged(target),
            None => Ok(false),
        }
    }
}
