const INTERNAL_CELL: &str = "█";
const EXTERNAL_CELL: &str = "░";

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Splits a bar of `width` cells between internal and external links, with
/// a legend underneath.
pub fn render_chart(internal: usize, external: usize, width: usize) -> String {
    let total = internal + external;
    let internal_cells = if total == 0 {
        0
    } else {
        (internal * width + total / 2) / total
    };
    let external_cells = if total == 0 { 0 } else { width - internal_cells };

    let mut output = String::new();
    output += &INTERNAL_CELL.repeat(internal_cells);
    output += &EXTERNAL_CELL.repeat(external_cells);
    output += &" ".repeat(width - internal_cells - external_cells);
    output += &format!(
        "\n{} Internal Links: {} ({:.1}%)\n{} External Links: {} ({:.1}%)\n",
        INTERNAL_CELL,
        internal,
        share(internal, total),
        EXTERNAL_CELL,
        external,
        share(external, total)
    );
    output
}
