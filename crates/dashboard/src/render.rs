//! Text-table rendering

use glance_storage::ResultSet;

const GUTTER: usize = 2;

/// Render a result set as aligned text columns with a row-count footer.
pub fn render_table(set: &ResultSet) -> String {
    let mut out = String::new();

    if !set.columns().is_empty() {
        let cells: Vec<Vec<String>> = set
            .rows()
            .iter()
            .map(|row| row.values().iter().map(ToString::to_string).collect())
            .collect();

        let widths: Vec<usize> = set
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                cells
                    .iter()
                    .map(|row| row[idx].len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        out.push_str(&render_line(set.columns(), &widths));
        out.push('\n');
        out.push_str(&"-".repeat(line_width(&widths)));
        out.push('\n');

        for row in &cells {
            out.push_str(&render_line(row, &widths));
            out.push('\n');
        }
        out.push('\n');
    }

    let n = set.len();
    out.push_str(&format!("{} row{}\n", n, if n == 1 { "" } else { "s" }));
    out
}

fn render_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(&" ".repeat(GUTTER));

    line.trim_end().to_string()
}

fn line_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + GUTTER * widths.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glance_storage::{Row, Value};

    #[test]
    fn renders_aligned_columns_and_footer() {
        let set = ResultSet::new(
            vec!["id".into(), "name".into()],
            vec![
                Row::new(vec![Value::Integer(1), Value::Text("alice".into())]),
                Row::new(vec![Value::Integer(2), Value::Null]),
            ],
        );

        let expected = "\
id  name
---------
1   alice
2   -

2 rows
";
        assert_eq!(render_table(&set), expected);
    }

    #[test]
    fn wide_values_stretch_their_column() {
        let set = ResultSet::new(
            vec!["n".into()],
            vec![Row::new(vec![Value::Text("stretched".into())])],
        );

        let expected = "\
n
---------
stretched

1 row
";
        assert_eq!(render_table(&set), expected);
    }

    #[test]
    fn empty_result_set_renders_count_only() {
        let set = ResultSet::new(vec![], vec![]);
        assert_eq!(render_table(&set), "0 rows\n");
    }
}
