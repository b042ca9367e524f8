use crate::daemon::ContainerRecord;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 4] = ["Name", "IP Address", "Image", "Status"];

/// Render the summary line followed, when there is anything to show, by a
/// table with one row per record in the order given.
pub fn render(records: &[ContainerRecord]) -> String {
    let mut output = format!("Containers found: {}\n", records.len());
    if records.is_empty() {
        return output;
    }

    let rows: Vec<[&str; 4]> =
        records.iter().map(|record| [record.display_name(), record.ip_address(), record.image.as_str(), record.status.as_str()]).collect();

    let mut widths = HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let separator = separator_line(&widths);
    output.push_str(&separator);
    output.push_str(&row_line(&HEADERS, &widths));
    output.push_str(&separator);
    for row in &rows {
        output.push_str(&row_line(row, &widths));
    }
    output.push_str(&separator);
    output
}

fn separator_line(widths: &[usize; 4]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        // Pad by display width so wide characters stay aligned
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.width()));
        line.push_str(" |");
    }
    line.push('\n');
    line
}
