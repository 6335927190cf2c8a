// src/crtsh/extract.rs
//! Recovery of subdomain records from the crt.sh HTML result table
//!
//! The results page has no semantic markup for its data rows. Every `<td>`
//! text node is collected in document order and the list is cut into fixed
//! groups of three: logged-at date, not-before date, matching identity.
//! Alignment depends entirely on the current crt.sh layout.

use scraper::{ElementRef, Html, Node};
use tracing::{debug, warn};

use crate::timestamp::date_to_epoch;
use crate::types::{DomainEntry, Reachability};

/// Text of the summary cell that describes the query itself
const QUERY_MARKER: &str = "Identity LIKE";

/// Leaf text left behind by anchor cells
const ANCHOR_ARTIFACT: &str = "a";

/// Cells preceding the first data row that the marker rule does not catch
pub const HEADER_RESIDUE_CELLS: usize = 2;

/// Fields per data row
pub const FIELDS_PER_ROW: usize = 3;

/// Collect the text of every `<td>` text node, in pre-order, minus the
/// query marker and anchor artifacts.
pub fn cell_texts(document: &Html) -> Vec<String> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let parent = node.parent().and_then(ElementRef::wrap)?;
            if parent.value().name() != "td" {
                return None;
            }

            let text: &str = text;
            if text.contains(QUERY_MARKER) || text == ANCHOR_ARTIFACT {
                return None;
            }
            Some(text.to_string())
        })
        .collect()
}

/// Group cell texts into entries, after skipping the header residue.
///
/// A trailing incomplete group is dropped.
pub fn entries_from_cells(cells: &[String]) -> Vec<DomainEntry> {
    let Some(data) = cells.get(HEADER_RESIDUE_CELLS..) else {
        warn!(
            "Result table has {} cells, fewer than the {} header cells expected; no entries",
            cells.len(),
            HEADER_RESIDUE_CELLS
        );
        return Vec::new();
    };

    let dropped = data.len() % FIELDS_PER_ROW;
    if dropped != 0 {
        debug!("Dropping {} trailing cells that do not form a full row", dropped);
    }

    data.chunks_exact(FIELDS_PER_ROW)
        .map(|row| DomainEntry {
            logged_at: row[0].clone(),
            logged_at_epoch: date_to_epoch(&row[0]),
            not_before: row[1].clone(),
            not_before_epoch: date_to_epoch(&row[1]),
            hostname: row[2].clone(),
            active: Reachability::NotTested,
        })
        .collect()
}

/// Parse a crt.sh results page into entries, in table order
pub fn extract_entries(html: &str) -> Vec<DomainEntry> {
    let document = Html::parse_document(html);
    let cells = cell_texts(&document);
    debug!("Collected {} table cells", cells.len());
    entries_from_cells(&cells)
}
