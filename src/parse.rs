/// Parses the free-form `ingredientes` form field.
///
/// The field is a comma-separated list of `name:quantity` tokens. Tokens
/// without a colon are skipped rather than rejected; names are trimmed and
/// lowercased so lookups hit the same ingredient row regardless of how the
/// form was typed. The split is on the first colon only, quantity text may
/// itself contain colons.
pub fn parse_ingredients(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let (name, quantity) = token.split_once(':')?;
            Some((name.trim().to_lowercase(), quantity.trim().to_string()))
        })
        .collect()
}
