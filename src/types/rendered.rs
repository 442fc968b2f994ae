use serde::Serialize;

/// How pages are laid out by the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn from_flag(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// CSS class used on the table container.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedGrid {
    pub orientation: Orientation,
    pub pages: Vec<Page>,
}

impl RenderedGrid {
    /// Iterate every table across all pages, in generation order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.pages.iter().flat_map(|page| page.tables.iter())
    }

    /// Iterate every cell in generation order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.tables()
            .flat_map(|table| table.rows.iter())
            .flat_map(|row| row.cells.iter())
    }

    /// Find a rendered cell by its coordinate string.
    pub fn cell(&self, coordinate: &str) -> Option<&Cell> {
        self.cells().find(|cell| cell.coordinate == coordinate)
    }

    /// Background color a cell renders with, if any.
    pub fn background(&self, coordinate: &str) -> Option<&str> {
        self.cell(coordinate)?.background.as_deref()
    }

    pub fn table_count(&self) -> usize {
        self.pages.iter().map(|page| page.tables.len()).sum()
    }

    /// Number of cells rendered with a background.
    pub fn highlighted_count(&self) -> usize {
        self.cells().filter(|cell| cell.background.is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub index: usize,
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// 1-based table number across the whole grid.
    pub number: u32,
    pub column_offset: u32,
    pub column_headers: Vec<u32>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub header: u32,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub coordinate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}
