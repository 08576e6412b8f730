use crate::error::{SkewError, SkewResult};

/// Parses hand-copied sounding text where every character of a number is
/// separated by single spaces and numbers are separated by wider gaps:
/// `"4 3 . 6   5 0 . 0"` parses to `[43.6, 50.0]`.
///
/// A run of two or more whitespace characters ends the current number;
/// single spaces inside a run are dropped.
pub fn parse_spaced_numbers(input: &str) -> SkewResult<Vec<f64>> {
    let mut values = Vec::new();
    let mut token = String::new();
    let mut space_run = 0usize;

    for ch in input.chars() {
        if ch.is_whitespace() {
            space_run += 1;
            if space_run == 2 {
                push_token(&mut token, &mut values)?;
            }
        } else {
            space_run = 0;
            token.push(ch);
        }
    }
    push_token(&mut token, &mut values)?;

    Ok(values)
}

fn push_token(token: &mut String, values: &mut Vec<f64>) -> SkewResult<()> {
    if token.is_empty() {
        return Ok(());
    }
    let value = token
        .parse::<f64>()
        .map_err(|_| SkewError::InvalidData(format!("malformed sounding value `{token}`")))?;
    values.push(value);
    token.clear();
    Ok(())
}
