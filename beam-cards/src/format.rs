// Fixed-width field formatting for beam cards

/// Columns of one value field
pub const FIELD_WIDTH: usize = 8;
/// Columns of the card keyword
pub const KEYWORD_WIDTH: usize = 16;

/// Float in an 8-column field: 8 decimals, cut to the field width, trailing
/// zeros dropped, right-aligned. `None` when the integer part alone does not fit.
pub fn fixed_width_float(value: f64) -> Option<String> {
    let full = format!("{value:.prec$}", prec = FIELD_WIDTH);
    let cut: String = full.chars().take(FIELD_WIDTH).collect();
    if !cut.contains('.') {
        return None;
    }
    let trimmed = cut.trim_end_matches('0');
    Some(format!("{trimmed:>width$}", width = FIELD_WIDTH))
}

/// Integer in an 8-column field. `None` when it needs more columns.
pub fn fixed_width_int(value: i64) -> Option<String> {
    let field = format!("{value:>width$}", width = FIELD_WIDTH);
    (field.len() == FIELD_WIDTH).then_some(field)
}

pub fn keyword(name: &str) -> String {
    format!("{name:<width$}", width = KEYWORD_WIDTH)
}
