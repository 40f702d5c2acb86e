//! Duration parsing: free text like "1h30m" ⇄ whole minutes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hours,
    Minutes,
}

impl TimeUnit {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'h' => Some(TimeUnit::Hours),
            'm' => Some(TimeUnit::Minutes),
            _ => None,
        }
    }

    pub fn minutes_per_unit(&self) -> f64 {
        match self {
            TimeUnit::Hours => 60.0,
            TimeUnit::Minutes => 1.0,
        }
    }
}

/// One `<number><unit>` piece of a duration string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationComponent {
    pub quantity: f64,
    pub unit: TimeUnit,
}

impl DurationComponent {
    pub fn minutes(&self) -> f64 {
        self.quantity * self.unit.minutes_per_unit()
    }
}

/// Split `text` into contiguous `<number><unit>` components.
///
/// The input is trimmed, lowercased and stripped of spaces first. A number is
/// one or more ASCII digits optionally followed by `,` or `.` and more digits.
/// Returns `None` for empty input or as soon as anything else shows up.
pub fn tokenize(text: &str) -> Option<Vec<DurationComponent>> {
    let compact: Vec<char> = text
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    if compact.is_empty() {
        return None;
    }

    let mut components = Vec::new();
    let mut pos = 0;

    while pos < compact.len() {
        let start = pos;
        while pos < compact.len() && compact[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == start {
            return None;
        }

        // fraction only counts when a digit follows the separator
        if pos + 1 < compact.len()
            && matches!(compact[pos], '.' | ',')
            && compact[pos + 1].is_ascii_digit()
        {
            pos += 1;
            while pos < compact.len() && compact[pos].is_ascii_digit() {
                pos += 1;
            }
        }

        let number: String = compact[start..pos]
            .iter()
            .map(|c| if *c == ',' { '.' } else { *c })
            .collect();
        let quantity: f64 = number.parse().ok()?;

        let unit = TimeUnit::from_char(*compact.get(pos)?)?;
        pos += 1;

        components.push(DurationComponent { quantity, unit });
    }

    Some(components)
}

/// Parse a duration into whole minutes.
///
/// Rounds half to even. A total that rounds to zero is rejected like any
/// other invalid input.
pub fn parse(text: &str) -> Option<i64> {
    let total: f64 = tokenize(text)?.iter().map(DurationComponent::minutes).sum();
    if !total.is_finite() {
        return None;
    }

    let minutes = total.round_ties_even() as i64;
    (minutes > 0).then_some(minutes)
}

/// Canonical form: `1h30m`, `2h`, `45m`, `0m`.
pub fn format(minutes: i64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    let mut out = String::new();
    if hours != 0 {
        out.push_str(&format!("{hours}h"));
    }
    if rest != 0 {
        out.push_str(&format!("{rest}m"));
    }
    if out.is_empty() {
        out.push_str("0m");
    }
    out
}
