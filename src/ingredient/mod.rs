//! Free-text ingredient parsing.
//!
//! Turns one ingredient line ("4 1/2 cups flour (sifted)") into a
//! structured count / unit / name record. Long-form unit names are
//! normalized to canonical short forms before tokenization, then the
//! first recognized unit token anchors the split between the quantity
//! expression and the ingredient name.

pub mod fraction;
pub mod quantity;

use log::debug;

use crate::model::Ingredient;

// Long-form names are substring-replaced before tokenization; plurals
// must come before their singular so "tablespoons" does not leave a
// trailing "s" behind.
const UNIT_REPLACEMENTS: [(&str, &str); 8] = [
    ("tablespoons", "tbsp"),
    ("tablespoon", "tbsp"),
    ("ounces", "oz"),
    ("ounce", "oz"),
    ("teaspoons", "tsp"),
    ("teaspoon", "tsp"),
    ("cups", "cup"),
    ("pounds", "pound"),
];

// Unit matching after normalization is token-exact
const UNITS: [&str; 7] = ["tbsp", "oz", "tsp", "cup", "pound", "kg", "g"];

/// Parse one free-text ingredient line.
///
/// Never fails: lines that fit no recognizable shape degrade to a
/// count of 1 with the whole processed text as the name.
pub fn parse_ingredient(line: &str) -> Ingredient {
    // 1) Uniform units
    let mut text = line.to_lowercase();
    for (long, short) in UNIT_REPLACEMENTS {
        text = text.replace(long, short);
    }

    // 2) Remove parenthesized asides
    let text = strip_parenthesized(&text);

    // 3) Split into count, unit and name
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let unit_index = tokens.iter().position(|token| UNITS.contains(token));

    let parsed = match unit_index {
        Some(index) => {
            // There is a unit; everything before it is the count
            // expression. A single token may use a hyphen for mixed
            // notation ("4-1/2" means 4 + 1/2, not subtraction).
            let count = match index {
                0 => None,
                1 => quantity::eval_expr(&tokens[0].replace('-', "+")),
                _ => quantity::eval_expr(&tokens[..index].join("+")),
            };
            Ingredient {
                // Count defaults to 1 when absent or unreadable
                count: count.unwrap_or(1.0),
                unit: tokens[index].to_string(),
                name: tokens[index + 1..].join(" "),
            }
        }
        None => match tokens.first().and_then(|first| first.parse::<u64>().ok()) {
            // No unit, but the line leads with a bare number
            Some(count) => Ingredient {
                count: count as f64,
                unit: String::new(),
                name: tokens[1..].join(" "),
            },
            // No unit, no number: the whole line is the name
            None => Ingredient {
                count: 1.0,
                unit: String::new(),
                name: text.trim().to_string(),
            },
        },
    };

    debug!("parsed {:?} -> {:?}", line, parsed);
    parsed
}

/// Replace every `(...)` span and its surrounding spaces with a single
/// space. An unclosed parenthesis is left as-is.
fn strip_parenthesized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut remaining = text;
    while let Some(open) = remaining.find('(') {
        let Some(close) = remaining[open..].find(')') else {
            break;
        };
        out.push_str(remaining[..open].trim_end_matches(' '));
        out.push(' ');
        remaining = remaining[open + close + 1..].trim_start_matches(' ');
    }
    out.push_str(remaining);
    out
}
