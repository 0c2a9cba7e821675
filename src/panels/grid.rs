//! src/panels/grid.rs
//!
//! Panel grid: lays records out row-major and answers geometry queries for
//! the highlight controller.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Rect},
};

use crate::config::CellMetrics;
use crate::highlight::{BoundingBox, Origin, RenderSurface};
use crate::panels::PanelCard;
use crate::ui::{Node, leaf, spaced_group};

/// One panel to show. Supplied by the caller, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelRecord {
    pub id: u32,
    pub title: String,
}

impl PanelRecord {
    pub fn new(id: u32, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
        }
    }
}

/// Built-in demo content.
pub fn demo_records() -> Vec<PanelRecord> {
    [
        "Parse", "Lower", "Check", "Infer", "Borrow", "Optimize", "Codegen", "Link", "Package",
        "Ship",
    ]
    .iter()
    .zip(1..)
    .map(|(title, id)| PanelRecord::new(id, title))
    .collect()
}

/// Fixed collection of cards laid out in a grid.
pub struct PanelGrid {
    records: Vec<PanelRecord>,
    columns: u16,
    root: Node,
}

impl PanelGrid {
    /// Cells left empty between the container edge and the cards.
    pub const MARGIN: u16 = 1;
    /// Cells between neighbouring cards.
    pub const GAP: u16 = 1;

    /// Build the layout tree for `records` with `columns` cards per row.
    pub fn new(records: Vec<PanelRecord>, columns: u16) -> Self {
        let columns = columns.max(1);
        let root = Self::build(&records, columns);
        Self {
            records,
            columns,
            root,
        }
    }

    fn build(records: &[PanelRecord], columns: u16) -> Node {
        let rows: Vec<Node> = records
            .chunks(columns as usize)
            .map(|row| {
                let cards = row
                    .iter()
                    .map(|r| leaf(Box::new(PanelCard::new(&r.title))))
                    .collect();
                // every row keeps the full column count so a short last row
                // lines up with the rows above it
                spaced_group(
                    Direction::Horizontal,
                    vec![Constraint::Ratio(1, columns as u32); columns as usize],
                    Self::GAP,
                    cards,
                )
            })
            .collect();
        let row_count = rows.len() as u32;
        spaced_group(
            Direction::Vertical,
            vec![Constraint::Ratio(1, row_count.max(1)); rows.len()],
            Self::GAP,
            rows,
        )
    }

    pub fn records(&self) -> &[PanelRecord] {
        &self.records
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Title of the panel at display index `index`.
    pub fn title(&self, index: usize) -> Option<&str> {
        self.records.get(index).map(|r| r.title.as_str())
    }

    /// Screen areas of every card, in record order, for a grid drawn into `container`.
    pub fn panel_areas(&self, container: Rect) -> Vec<Rect> {
        self.root.leaf_areas(inset(container, Self::MARGIN))
    }

    pub fn draw(&self, f: &mut Frame<'_>, container: Rect) {
        self.root.draw(f, inset(container, Self::MARGIN));
    }
}

fn inset(area: Rect, by: u16) -> Rect {
    let w = area.width.saturating_sub(by.saturating_mul(2));
    let h = area.height.saturating_sub(by.saturating_mul(2));
    if w == 0 || h == 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x + by, area.y + by, w, h)
}

/// A grid as drawn into a particular container: what the controller queries.
pub struct GridSurface<'a> {
    grid: &'a PanelGrid,
    container: Rect,
    cell: CellMetrics,
}

impl<'a> GridSurface<'a> {
    pub fn new(grid: &'a PanelGrid, container: Rect, cell: CellMetrics) -> Self {
        Self {
            grid,
            container,
            cell,
        }
    }
}

impl RenderSurface for GridSurface<'_> {
    fn bounding_boxes(&self) -> Vec<BoundingBox> {
        let origin = self.container_origin();
        self.grid
            .panel_areas(self.container)
            .into_iter()
            .map(|area| {
                let b = self.cell.rect_to_box(area);
                BoundingBox::relative_to(b.left, b.top, b.width, b.height, origin)
            })
            .collect()
    }

    fn container_origin(&self) -> Origin {
        let b = self.cell.rect_to_box(self.container);
        Origin {
            left: b.left,
            top: b.top,
        }
    }
}
