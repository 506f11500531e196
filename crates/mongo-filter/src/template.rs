//! MongoDB templates for each operator.
//!
//! A template is a fixed piece of query text with positional slots written as
//! `{0}`, `{1}`, ... Any other brace is plain text. A template declares as
//! many slots as its highest slot index plus one, and the compiler must supply
//! exactly that many child fragments.

use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Slots(&'static str),
    /// The operator is recognised but has no translation.
    Unsupported,
}

const SUBSTRING_RANGE: &str = "{ $substrCP: [ {0}, {1}, {2} ] }";
const SUBSTRING_FROM: &str = "{ $substrCP: [ {0}, {1}, { $strLenCP: {0} } ] }";

impl Operator {
    /// Template for this operator applied to `arity` arguments.
    ///
    /// Only `substring` is overloaded on arity; every other operator has a
    /// single template and the caller checks the argument count against it.
    pub fn template(&self, arity: usize) -> Template {
        match self {
            Operator::Eq => Template::Slots("{ {0}: { $eq: {1} } }"),
            Operator::Ne => Template::Slots("{ {0}: { $ne: {1} } }"),
            Operator::Gt => Template::Slots("{ {0}: { $gt: {1} } }"),
            Operator::Ge => Template::Slots("{ {0}: { $gte: {1} } }"),
            Operator::Lt => Template::Slots("{ {0}: { $lt: {1} } }"),
            Operator::Le => Template::Slots("{ {0}: { $lte: {1} } }"),
            // The right-hand side is a list fragment and brings its own brackets.
            Operator::In => Template::Slots("{ {0}: { $in: {1} } }"),

            Operator::And => Template::Slots("{ $and: [ {0}, {1} ] }"),
            Operator::Or => Template::Slots("{ $or: [ {0}, {1} ] }"),
            Operator::Not => Template::Slots("{ $nor: [ {0} ] }"),

            Operator::Substring if arity == 2 => Template::Slots(SUBSTRING_FROM),
            Operator::Substring => Template::Slots(SUBSTRING_RANGE),
            // substringof(needle, haystack)
            Operator::SubstringOf => {
                Template::Slots("{ $gte: [ { $indexOfCP: [ {1}, {0} ] }, 0 ] }")
            }
            Operator::Contains => Template::Slots("{ {0}: { $regex: /{1}/ } }"),
            Operator::StartsWith => Template::Slots("{ {0}: { $regex: /^{1}/ } }"),
            Operator::EndsWith => Template::Slots("{ {0}: { $regex: /{1}$/ } }"),
            Operator::Length => Template::Slots("{ $strLenCP: {0} }"),
            Operator::IndexOf => Template::Slots("{ $indexOfCP: [ {0}, {1} ] }"),
            Operator::Trim => Template::Slots("{ $trim: { input: {0} } }"),
            Operator::Concat => Template::Slots("{ $concat: [ {0}, {1} ] }"),

            Operator::ToLower
            | Operator::ToUpper
            | Operator::Date
            | Operator::Time
            | Operator::Year
            | Operator::Month
            | Operator::Day
            | Operator::Hour
            | Operator::Minute
            | Operator::Second
            | Operator::FractionalSecond
            | Operator::TotalOffsetMinutes
            | Operator::MinDateTime
            | Operator::MaxDateTime
            | Operator::Now
            | Operator::Round
            | Operator::Floor
            | Operator::Ceiling
            | Operator::Mod
            | Operator::Div
            | Operator::Add
            | Operator::Mul
            | Operator::Sub
            | Operator::IsOf
            | Operator::Cast
            | Operator::GeoDistance
            | Operator::GeoLength
            | Operator::GeoIntersects
            | Operator::Navigation
            | Operator::Any
            | Operator::All => Template::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self.template(0), Template::Unsupported)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'t> {
    Text(&'t str),
    Slot(usize),
}

/// Splits a template into text runs and slot references.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' {
            let digits = bytes[i + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            let close = i + 1 + digits;
            if digits > 0
                && bytes.get(close) == Some(&b'}')
                && let Ok(index) = template[i + 1..close].parse::<usize>()
            {
                if text_start < i {
                    out.push(Segment::Text(&template[text_start..i]));
                }
                out.push(Segment::Slot(index));
                i = close + 1;
                text_start = i;
                continue;
            }
        }
        i += 1;
    }

    if text_start < template.len() {
        out.push(Segment::Text(&template[text_start..]));
    }
    out
}

/// Number of arguments the template consumes.
pub fn slot_count(template: &str) -> usize {
    segments(template)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Slot(index) => Some(index + 1),
            Segment::Text(_) => None,
        })
        .max()
        .unwrap_or(0)
}

/// Substitutes `args` into the template's slots.
///
/// Returns `None` when `args.len()` differs from the template's slot count.
pub fn fill(template: &str, args: &[String]) -> Option<String> {
    if args.len() != slot_count(template) {
        return None;
    }

    let capacity = template.len() + args.iter().map(String::len).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    for seg in segments(template) {
        match seg {
            Segment::Text(text) => out.push_str(text),
            Segment::Slot(index) => out.push_str(&args[index]),
        }
    }
    Some(out)
}
