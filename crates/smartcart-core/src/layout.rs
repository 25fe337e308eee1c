//! Built-in store layout reference data.
//!
//! The layout is a 19 × 20 grid of 30-unit cells. Shelves are axis-aligned
//! rectangles of cells; labelled shelves are sections that stock items, and
//! unlabelled ones are walls. Each section's coordinate is the centroid of its
//! shelf rectangle.
//!
//! The obstacle grid is exposed through [`StoreLayout::is_obstacle_cell`] but
//! route distance is straight-line between section centroids and never
//! consults it.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::geometry::Coordinate;
use crate::location::{Location, LocationResolver};

/// Name of the built-in layout.
pub const DEFAULT_LAYOUT_NAME: &str = "walmart_default";

/// Side length of one grid cell in map units.
pub const GRID_SIZE: f64 = 30.0;

const GRID_COLS: u32 = 19;
const GRID_ROWS: u32 = 20;

/// A rectangle of grid cells occupied by a shelf or wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shelf {
    /// Section name; empty for walls.
    pub label: &'static str,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Shelf {
    const fn new(label: &'static str, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { label, x, y, w, h }
    }

    /// Returns true if the cell at (`col`, `row`) lies inside this shelf.
    pub fn contains_cell(&self, col: u32, row: u32) -> bool {
        col >= self.x && col < self.x + self.w && row >= self.y && row < self.y + self.h
    }

    /// Centroid of the rectangle in map units.
    pub fn centroid(&self, grid_size: f64) -> Coordinate {
        Coordinate::new(
            (self.x as f64 + self.w as f64 / 2.0) * grid_size,
            (self.y as f64 + self.h as f64 / 2.0) * grid_size,
        )
    }
}

/// A named shelf zone and the items it stocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub items: &'static [&'static str],
    pub coordinate: Coordinate,
}

const SHELVES: [Shelf; 17] = [
    Shelf::new("DELI", 1, 1, 4, 2),
    Shelf::new("BAKERY", 5, 1, 4, 2),
    Shelf::new("PRODUCE", 13, 1, 5, 5),
    Shelf::new("", 18, 1, 1, 19),
    Shelf::new("MEAT", 1, 3, 4, 2),
    Shelf::new("SEAFOOD", 5, 3, 4, 2),
    Shelf::new("GROCERY 1", 1, 5, 4, 2),
    Shelf::new("GROCERY 2", 5, 5, 4, 2),
    Shelf::new("BEVERAGES", 1, 7, 4, 2),
    Shelf::new("SNACKS", 5, 7, 4, 2),
    Shelf::new("DAIRY PRODUCTS 1", 12, 7, 1, 6),
    Shelf::new("DAIRY PRODUCTS 2", 16, 7, 1, 6),
    Shelf::new("", 1, 11, 7, 1),
    Shelf::new("", 1, 12, 1, 4),
    Shelf::new("", 2, 15, 6, 1),
    Shelf::new("", 3, 17, 8, 1),
    Shelf::new("FROZEN FOODS", 12, 17, 7, 2),
];

const SHELF_ITEMS: [(&str, &[&str]); 12] = [
    ("DELI", &["deli"]),
    ("BAKERY", &["bread", "pastries", "cakes"]),
    ("PRODUCE", &["eggs", "apples", "bananas"]),
    ("MEAT", &["chicken"]),
    ("SEAFOOD", &["seafood"]),
    ("GROCERY 1", &["pasta", "soap"]),
    ("GROCERY 2", &["shampoo"]),
    ("BEVERAGES", &["beverages"]),
    ("SNACKS", &["snacks"]),
    ("DAIRY PRODUCTS 1", &["milk", "cheese"]),
    ("DAIRY PRODUCTS 2", &["yogurt"]),
    ("FROZEN FOODS", &["frozen"]),
];

const SUPPORTED_ITEMS: [&str; 18] = [
    "milk", "cheese", "yogurt", "chicken", "bread", "pastries", "cakes", "pasta", "soap",
    "shampoo", "eggs", "apples", "bananas", "snacks", "beverages", "deli", "seafood", "frozen",
];

static WALMART_DEFAULT: LazyLock<StoreLayout> = LazyLock::new(StoreLayout::build_default);

/// Immutable store layout: sections, walls, entrance and exit.
///
/// # Example
///
/// ```
/// use smartcart_core::{Coordinate, LocationResolver, StoreLayout};
///
/// let layout = StoreLayout::walmart_default();
/// let milk = layout.resolve("milk").unwrap();
/// assert_eq!(milk.section, "DAIRY PRODUCTS 1");
/// assert_eq!(milk.coordinate, Coordinate::new(375.0, 300.0));
/// assert!(layout.resolve("unicorn").is_none());
/// ```
#[derive(Debug)]
pub struct StoreLayout {
    name: &'static str,
    grid_cols: u32,
    grid_rows: u32,
    shelves: &'static [Shelf],
    sections: Vec<Section>,
    item_index: HashMap<&'static str, usize>,
    supported_items: &'static [&'static str],
    entrance: Coordinate,
    exit: Coordinate,
}

impl StoreLayout {
    /// Returns the built-in layout shared by the whole process.
    pub fn walmart_default() -> &'static StoreLayout {
        &WALMART_DEFAULT
    }

    /// Looks up a built-in layout by name.
    pub fn by_name(name: &str) -> Option<&'static StoreLayout> {
        (name == DEFAULT_LAYOUT_NAME).then(Self::walmart_default)
    }

    fn build_default() -> Self {
        let sections: Vec<Section> = SHELF_ITEMS
            .iter()
            .filter_map(|&(name, items)| {
                SHELVES
                    .iter()
                    .find(|shelf| shelf.label == name)
                    .map(|shelf| Section {
                        name,
                        items,
                        coordinate: shelf.centroid(GRID_SIZE),
                    })
            })
            .collect();

        let mut item_index = HashMap::new();
        for (idx, section) in sections.iter().enumerate() {
            for &item in section.items {
                item_index.entry(item).or_insert(idx);
            }
        }

        Self {
            name: DEFAULT_LAYOUT_NAME,
            grid_cols: GRID_COLS,
            grid_rows: GRID_ROWS,
            shelves: &SHELVES,
            sections,
            item_index,
            supported_items: &SUPPORTED_ITEMS,
            entrance: Coordinate::new(0.5 * GRID_SIZE, 0.5 * GRID_SIZE),
            exit: Coordinate::new(18.5 * GRID_SIZE, 19.5 * GRID_SIZE),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All shelves and walls, labelled or not.
    pub fn shelves(&self) -> &[Shelf] {
        self.shelves
    }

    /// Item names the store stocks, in display order.
    pub fn supported_items(&self) -> &[&'static str] {
        self.supported_items
    }

    /// Grid dimensions as (columns, rows).
    pub fn grid_dimensions(&self) -> (u32, u32) {
        (self.grid_cols, self.grid_rows)
    }

    /// Map dimensions in map units as (width, height).
    pub fn map_dimensions(&self) -> (f64, f64) {
        (
            self.grid_cols as f64 * GRID_SIZE,
            self.grid_rows as f64 * GRID_SIZE,
        )
    }

    /// Returns the section stocking `item`, if any.
    pub fn section_for_item(&self, item: &str) -> Option<&Section> {
        self.item_index.get(item).map(|&idx| &self.sections[idx])
    }

    /// Returns true if the grid cell is covered by a shelf or wall.
    pub fn is_obstacle_cell(&self, col: u32, row: u32) -> bool {
        self.shelves.iter().any(|s| s.contains_cell(col, row))
    }
}

impl LocationResolver for StoreLayout {
    fn resolve(&self, item: &str) -> Option<Location<'_>> {
        self.section_for_item(item).map(|section| Location {
            section: section.name,
            coordinate: section.coordinate,
        })
    }

    fn entrance(&self) -> Coordinate {
        self.entrance
    }

    fn exit(&self) -> Coordinate {
        self.exit
    }
}
