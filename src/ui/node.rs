//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.
//!
//! The same tree is used both to draw and to answer "where did each leaf
//! end up", so hit-testing always agrees with what is on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Node tree used to compose the UI each frame.
pub enum Node {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        /// Cells left empty between adjacent children.
        spacing: u16,
        children: Vec<Node>,
    },
    Leaf {
        panel: Box<dyn Panel>,
    },
}

impl Node {
    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group { children, .. } => {
                let chunks = self.split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf { panel } => {
                panel.draw(f, area);
            }
        }
    }

    /// Areas of every leaf in depth-first order, as `draw` would place them.
    pub fn leaf_areas(&self, area: Rect) -> Vec<Rect> {
        let mut out = Vec::new();
        self.collect_leaf_areas(area, &mut out);
        out
    }

    fn collect_leaf_areas(&self, area: Rect, out: &mut Vec<Rect>) {
        match self {
            Node::Group { children, .. } => {
                let chunks = self.split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.collect_leaf_areas(*chunk, out);
                }
            }
            Node::Leaf { .. } => out.push(area),
        }
    }

    fn split(&self, area: Rect) -> std::rc::Rc<[Rect]> {
        match self {
            Node::Group {
                direction,
                constraints,
                spacing,
                ..
            } => Layout::default()
                .direction(*direction)
                .constraints(constraints.clone())
                .spacing(*spacing)
                .split(area),
            Node::Leaf { .. } => std::rc::Rc::from([area]),
        }
    }
}

/// Helper: create a group node.
pub fn group(direction: Direction, constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    spaced_group(direction, constraints, 0, children)
}

/// Helper: create a group node with gaps between children.
pub fn spaced_group(
    direction: Direction,
    constraints: Vec<Constraint>,
    spacing: u16,
    children: Vec<Node>,
) -> Node {
    Node::Group {
        direction,
        constraints,
        spacing,
        children,
    }
}

/// Helper: create a leaf node.
pub fn leaf(panel: Box<dyn Panel>) -> Node {
    Node::Leaf { panel }
}
