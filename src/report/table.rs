use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use super::row::{HEADER, ResultRow};

/// Build the console table for `rows`
pub fn render_table(rows: &[ResultRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(HEADER);

    for row in rows {
        table.add_row(row.cells());
    }

    table
}

pub fn print_table(rows: &[ResultRow]) {
    println!("{}", render_table(rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::{Provider, Remark};

    #[test]
    fn test_render_rows_in_order() {
        let rows = vec![
            ResultRow {
                domain: "example.com".to_string(),
                address: Some("93.184.215.14".parse().unwrap()),
                remark: Remark::NotCloud,
            },
            ResultRow {
                domain: "amazon.com".to_string(),
                address: Some("52.94.236.248".parse().unwrap()),
                remark: Remark::Cloud(Provider::Aws),
            },
            ResultRow {
                domain: "bogus.invalid-tld".to_string(),
                address: None,
                remark: Remark::Unresolved,
            },
        ];

        let rendered = render_table(&rows).to_string();

        for title in HEADER {
            assert!(rendered.contains(title));
        }
        let first = rendered.find("example.com").unwrap();
        let second = rendered.find("amazon.com").unwrap();
        let third = rendered.find("bogus.invalid-tld").unwrap();
        assert!(first < second && second < third);
        assert!(rendered.contains("Amazon Web Service"));
        assert!(rendered.contains("Unresolved"));
    }

    #[test]
    fn test_render_empty_has_header_only() {
        let table = render_table(&[]);
        assert_eq!(table.row_iter().count(), 0);
        assert!(table.to_string().contains("Remark"));
    }
}
