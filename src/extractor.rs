use crate::filter::target_from_row;
use crate::model::{DownloadTarget, ListingRow};
use scraper::{ElementRef, Html, Selector};

/// Selectors for the listing table. Parsed once per listing.
pub struct ListingSelectors {
    row: Selector,
    cell: Selector,
    link: Selector,
}

impl ListingSelectors {
    pub fn new() -> Self {
        Self {
            row: Selector::parse("tr").unwrap(),
            cell: Selector::parse("td").unwrap(),
            link: Selector::parse("a[href]").unwrap(),
        }
    }

    /// Every `<tr>` of the document in order, as a [`ListingRow`].
    pub fn rows<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ListingRow> + 'a {
        document.select(&self.row).map(|tr| self.read_row(tr))
    }

    fn read_row(&self, tr: ElementRef<'_>) -> ListingRow {
        let cells: Vec<ElementRef<'_>> = tr.select(&self.cell).collect();
        ListingRow {
            cell_count: cells.len(),
            timestamp_cell: cells.get(2).map(|td| td.inner_html()),
            href: tr
                .select(&self.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string),
        }
    }
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the download targets of a directory-listing page, in document order.
pub fn parse_listing(html: &str) -> Vec<DownloadTarget> {
    let document = Html::parse_document(html);
    let selectors = ListingSelectors::new();
    selectors
        .rows(&document)
        .filter_map(|row| target_from_row(&row))
        .collect()
}
