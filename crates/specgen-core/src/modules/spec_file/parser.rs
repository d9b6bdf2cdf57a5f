use crate::domain::{SpecGenError, SpecGenResult, SpectrumInput, SpectrumTag, TransitionSet};

pub fn parse_spectrum_source(source: &str) -> SpecGenResult<SpectrumInput> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| {
        SpecGenError::input_validation(
            "INPUT.SPEC_HEADER",
            "spectrum file is empty; expected a '#<count> <type>' header",
        )
    })?;
    let (count, tag) = parse_header(header_line, header)?;

    let mut energies = Vec::with_capacity(count);
    let mut intensities = Vec::with_capacity(count);
    for (line_number, line) in lines.take(count) {
        let (energy, intensity) = parse_transition_row(line_number, line)?;
        energies.push(energy);
        intensities.push(intensity);
    }

    if energies.len() < count {
        return Err(SpecGenError::input_validation(
            "INPUT.SPEC_ROW",
            format!(
                "header declares {} transitions but only {} rows were found",
                count,
                energies.len()
            ),
        ));
    }

    let transitions = TransitionSet::from_columns(energies, intensities)?;
    Ok(SpectrumInput::new(tag, transitions))
}

fn parse_header(line_number: usize, line: &str) -> SpecGenResult<(usize, SpectrumTag)> {
    let body = line.trim().trim_start_matches('#');
    let mut tokens = body.split_whitespace();

    let count_token = tokens.next().ok_or_else(|| header_error(line_number, line))?;
    let tag_token = tokens.next().ok_or_else(|| header_error(line_number, line))?;

    let count = count_token
        .parse::<usize>()
        .map_err(|_| header_error(line_number, line))?;
    if count == 0 {
        return Err(SpecGenError::input_validation(
            "INPUT.SPEC_HEADER",
            format!("header at line {line_number} declares zero transitions"),
        ));
    }

    let tag = tag_token.parse::<SpectrumTag>().map_err(|error| {
        SpecGenError::input_validation("INPUT.SPEC_TAG", format!("line {line_number}: {error}"))
    })?;

    Ok((count, tag))
}

fn header_error(line_number: usize, line: &str) -> SpecGenError {
    SpecGenError::input_validation(
        "INPUT.SPEC_HEADER",
        format!(
            "malformed header '{}' at line {}; expected '#<count> <type>'",
            line.trim(),
            line_number
        ),
    )
}

fn parse_transition_row(line_number: usize, line: &str) -> SpecGenResult<(f64, f64)> {
    let mut tokens = line.split_whitespace();
    let energy = tokens.next().and_then(parse_numeric_token);
    let intensity = tokens.next().and_then(parse_numeric_token);

    match (energy, intensity) {
        (Some(energy), Some(intensity)) => Ok((energy, intensity)),
        _ => Err(SpecGenError::input_validation(
            "INPUT.SPEC_ROW",
            format!(
                "malformed transition '{}' at line {}; expected '<energy> <intensity>'",
                line.trim(),
                line_number
            ),
        )),
    }
}

fn parse_numeric_token(token: &str) -> Option<f64> {
    let trimmed = token.trim_matches(|character: char| matches!(character, ',' | ';'));
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace(['D', 'd'], "E");
    normalized.parse::<f64>().ok()
}
