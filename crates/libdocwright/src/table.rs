//! Summary tables with optional filter tabs.
//!
//! Every row belongs to the default tab. A row also belongs to each other tab
//! whose predicate accepts its item, so tabs may overlap. Tabs keep the order
//! in which they were added.

use maud::{Markup, html};

/// Decides whether a row belongs to a tab.
type Predicate<'t, T> = Box<dyn Fn(&T) -> bool + 't>;

/// A tab with its row filter.
struct Tab<'t, T> {
    /// Button label.
    label: String,
    /// Row filter.
    predicate: Predicate<'t, T>,
}

/// A row with its cells and the tabs it shows under.
struct Row<T> {
    /// The keyed item.
    item: T,
    /// One cell per header.
    cells: Vec<Markup>,
    /// Indices into the table's tabs.
    tabs: Vec<usize>,
}

/// A table of rows keyed by `T`.
pub struct Table<'t, T> {
    /// Element id, also the prefix of tab ids.
    id: String,
    /// Caption shown when tab controls are not.
    caption: Option<String>,
    /// Label of the tab showing every row.
    default_tab: String,
    /// Tabs after the default one, in order.
    tabs: Vec<Tab<'t, T>>,
    /// Column headers.
    headers: Vec<String>,
    /// Rows in insertion order.
    rows: Vec<Row<T>>,
}

impl<'t, T> Table<'t, T> {
    /// Create an empty table. `id` prefixes the HTML ids of the table.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: None,
            default_tab: "All".to_string(),
            tabs: Vec::new(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Caption shown when no tab controls are rendered.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Label of the tab that shows every row.
    pub fn with_default_tab(mut self, label: impl Into<String>) -> Self {
        self.default_tab = label.into();
        self
    }

    /// Add a tab after the existing ones.
    pub fn with_tab(mut self, label: impl Into<String>, predicate: impl Fn(&T) -> bool + 't) -> Self {
        self.tabs.push(Tab {
            label: label.into(),
            predicate: Box::new(predicate),
        });
        self
    }

    /// Column headers, one per cell of each row.
    pub fn with_headers(mut self, headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Append a row. Rows render in the order they are added.
    pub fn add_row(&mut self, item: T, cells: Vec<Markup>) {
        let tabs = self
            .tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| (tab.predicate)(&item))
            .map(|(i, _)| i)
            .collect();
        self.rows.push(Row { item, cells, tabs });
    }

    /// Whether the table has no rows. Callers that omit empty tables check
    /// this before rendering.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Items of every row, in row order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.item)
    }

    /// Items shown by the tab labelled `label`. The default tab shows all.
    pub fn items_in_tab(&self, label: &str) -> Vec<&T> {
        if label == self.default_tab {
            return self.items().collect();
        }
        let Some(index) = self.tabs.iter().position(|tab| tab.label == label) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter(|row| row.tabs.contains(&index))
            .map(|row| &row.item)
            .collect()
    }

    /// Tabs that have at least one row.
    fn occurring(&self) -> Vec<usize> {
        (0..self.tabs.len())
            .filter(|i| self.rows.iter().any(|row| row.tabs.contains(i)))
            .collect()
    }

    /// Labels of the non-default tabs that hold at least one row, in tab
    /// order.
    pub fn occurring_tabs(&self) -> Vec<&str> {
        self.occurring()
            .into_iter()
            .map(|i| self.tabs[i].label.as_str())
            .collect()
    }

    /// Tab controls only make sense when rows split over several tabs.
    pub fn shows_tab_controls(&self) -> bool {
        self.occurring().len() > 1
    }

    /// Element id of a tab button.
    fn tab_id(&self, index: usize) -> String {
        format!("{}-tab{}", self.id, index)
    }

    /// Render the table.
    pub fn render(&self) -> Markup {
        let columns = self.headers.len().max(1);
        let grid = match columns {
            1 | 2 => "two-column-summary",
            3 => "three-column-summary",
            _ => "four-column-summary",
        };
        let controls = self.shows_tab_controls();
        let panel = format!("{}.tabpanel", self.id);
        html! {
            div.table-container id=(self.id) {
                @if controls {
                    div.table-tabs role="tablist" aria-orientation="horizontal" {
                        button.active-table-tab id=(self.tab_id(0)) role="tab" aria-selected="true"
                            aria-controls=(panel) onclick={ "show('" (self.id) "', '" (self.id) "', " (columns) ")" } {
                            (self.default_tab)
                        }
                        @for i in self.occurring() {
                            @let tab_id = self.tab_id(i + 1);
                            button.table-tab id=(tab_id) role="tab" aria-selected="false"
                                aria-controls=(panel) onclick={ "show('" (self.id) "', '" (tab_id) "', " (columns) ")" } {
                                (self.tabs[i].label)
                            }
                        }
                    }
                } @else if let Some(caption) = &self.caption {
                    div.caption { span { (caption) } }
                }
                div id=(panel) role=[controls.then_some("tabpanel")] class={ "summary-table " (grid) } {
                    @for (i, header) in self.headers.iter().enumerate() {
                        div class={ "table-header " (column_class(i, columns)) } { (header) }
                    }
                    @for (n, row) in self.rows.iter().enumerate() {
                        @let color = if n % 2 == 0 { "even-row-color" } else { "odd-row-color" };
                        @let tabs = row
                            .tabs
                            .iter()
                            .map(|t| self.tab_id(t + 1))
                            .collect::<Vec<_>>()
                            .join(" ");
                        @for (i, cell) in row.cells.iter().enumerate() {
                            div class={ (column_class(i, columns)) " " (color) " " (tabs) } { (cell) }
                        }
                    }
                }
            }
        }
    }
}

/// Style class of a column.
fn column_class(index: usize, columns: usize) -> &'static str {
    if index == 0 {
        "col-first"
    } else if index + 1 == columns {
        "col-last"
    } else {
        "col-second"
    }
}
