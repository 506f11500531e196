//! The closed set of OData operator and function names the compiler knows.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Comparison
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    In,

    // Logical
    And,
    Or,
    Not,

    // String functions
    Substring,
    SubstringOf,
    Contains,
    StartsWith,
    EndsWith,
    Length,
    IndexOf,
    Trim,
    Concat,
    ToLower,
    ToUpper,

    // Date and time functions
    Date,
    Time,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    FractionalSecond,
    TotalOffsetMinutes,
    MinDateTime,
    MaxDateTime,
    Now,

    // Arithmetic
    Round,
    Floor,
    Ceiling,
    Mod,
    Div,
    Add,
    Mul,
    Sub,

    // Type functions
    IsOf,
    Cast,

    // Geo functions
    GeoDistance,
    GeoLength,
    GeoIntersects,

    /// Member navigation, `/`.
    Navigation,

    // Lambda operators
    Any,
    All,
}

impl Operator {
    pub const ALL: [Operator; 50] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Ge,
        Operator::Lt,
        Operator::Le,
        Operator::In,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Substring,
        Operator::SubstringOf,
        Operator::Contains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Length,
        Operator::IndexOf,
        Operator::Trim,
        Operator::Concat,
        Operator::ToLower,
        Operator::ToUpper,
        Operator::Date,
        Operator::Time,
        Operator::Year,
        Operator::Month,
        Operator::Day,
        Operator::Hour,
        Operator::Minute,
        Operator::Second,
        Operator::FractionalSecond,
        Operator::TotalOffsetMinutes,
        Operator::MinDateTime,
        Operator::MaxDateTime,
        Operator::Now,
        Operator::Round,
        Operator::Floor,
        Operator::Ceiling,
        Operator::Mod,
        Operator::Div,
        Operator::Add,
        Operator::Mul,
        Operator::Sub,
        Operator::IsOf,
        Operator::Cast,
        Operator::GeoDistance,
        Operator::GeoLength,
        Operator::GeoIntersects,
        Operator::Navigation,
        Operator::Any,
        Operator::All,
    ];

    /// Canonical (lowercase) OData name.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Ge => "ge",
            Operator::Lt => "lt",
            Operator::Le => "le",
            Operator::In => "in",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Substring => "substring",
            Operator::SubstringOf => "substringof",
            Operator::Contains => "contains",
            Operator::StartsWith => "startswith",
            Operator::EndsWith => "endswith",
            Operator::Length => "length",
            Operator::IndexOf => "indexof",
            Operator::Trim => "trim",
            Operator::Concat => "concat",
            Operator::ToLower => "tolower",
            Operator::ToUpper => "toupper",
            Operator::Date => "date",
            Operator::Time => "time",
            Operator::Year => "year",
            Operator::Month => "month",
            Operator::Day => "day",
            Operator::Hour => "hour",
            Operator::Minute => "minute",
            Operator::Second => "second",
            Operator::FractionalSecond => "fractionalsecond",
            Operator::TotalOffsetMinutes => "totaloffsetminutes",
            Operator::MinDateTime => "mindatetime",
            Operator::MaxDateTime => "maxdatetime",
            Operator::Now => "now",
            Operator::Round => "round",
            Operator::Floor => "floor",
            Operator::Ceiling => "ceiling",
            Operator::Mod => "mod",
            Operator::Div => "div",
            Operator::Add => "add",
            Operator::Mul => "mul",
            Operator::Sub => "sub",
            Operator::IsOf => "isof",
            Operator::Cast => "cast",
            Operator::GeoDistance => "geo.distance",
            Operator::GeoLength => "geo.length",
            Operator::GeoIntersects => "geo.intersects",
            Operator::Navigation => "/",
            Operator::Any => "any",
            Operator::All => "all",
        }
    }

    /// Looks up an operator by name. OData operator and function names are
    /// case-insensitive, so `EQ`, `Eq` and `eq` resolve to the same entry.
    pub fn lookup(name: &str) -> Option<Operator> {
        let normalized = Self::normalize_name(name);
        OPERATOR_MAP.get(normalized.as_str()).copied()
    }

    pub fn normalize_name(name: &str) -> String {
        name.trim().to_ascii_lowercase()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

lazy_static! {
    static ref OPERATOR_MAP: HashMap<&'static str, Operator> = build_operator_map();
}

fn build_operator_map() -> HashMap<&'static str, Operator> {
    Operator::ALL.iter().map(|op| (op.name(), *op)).collect()
}
