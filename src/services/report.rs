//! Human-readable centroid table dump.

use cell_grid::CentroidTable;

/// Render the centroid table as a tab-separated console report:
///
/// ```text
/// type:	r	g	b	a
/// empty:	228	227	229	255
/// skull:	43	41	40	255
/// ...
/// ```
pub fn centroid_report(table: &CentroidTable) -> String {
    let mut out = String::from("type:\tr\tg\tb\ta\n");
    for (cell_type, color) in table.iter() {
        let [r, g, b, a] = color.to_bytes();
        out.push_str(&format!("{}:\t{r}\t{g}\t{b}\t{a}\n", cell_type.name()));
    }
    out
}
