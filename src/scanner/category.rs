//! Keyword-based categorization of variable names.

use std::fmt;

use serde::{Serialize, Serializer};

/// Semantic bucket assigned to a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Authentication,
    Database,
    Payment,
    Email,
    Cloud,
    Api,
    Application,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Authentication => write!(f, "Authentication"),
            Category::Database => write!(f, "Database"),
            Category::Payment => write!(f, "Payment"),
            Category::Email => write!(f, "Email & Communication"),
            Category::Cloud => write!(f, "Cloud & Infrastructure"),
            Category::Api => write!(f, "API & Services"),
            Category::Application => write!(f, "Application"),
            Category::Other => write!(f, "Other"),
        }
    }
}

// Serialized as the display label so JSON output reads "Email & Communication"
// rather than a variant name.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Category priority with keyword sets. Order is load-bearing: a name
/// containing both "API" and "KEY" must land in Authentication because
/// Authentication is checked first.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Authentication,
        &["AUTH", "TOKEN", "SECRET", "KEY", "PASSWORD", "JWT", "SESSION"],
    ),
    (
        Category::Database,
        &["DB", "DATABASE", "POSTGRES", "MYSQL", "MONGO", "REDIS", "SQL"],
    ),
    (Category::Payment, &["STRIPE", "PAYMENT", "PAYPAL"]),
    (
        Category::Email,
        &["MAIL", "SMTP", "EMAIL", "SENDGRID", "TWILIO"],
    ),
    (
        Category::Cloud,
        &["AWS", "GCP", "AZURE", "CLOUD", "S3", "BUCKET"],
    ),
    (
        Category::Api,
        &["API", "SERVICE", "ENDPOINT", "URL", "URI"],
    ),
    (
        Category::Application,
        &["APP", "NODE_ENV", "PORT", "HOST", "DEBUG", "LOG"],
    ),
];

/// All categories that can carry variables, in display order for grouped
/// output (`Other` last).
pub fn display_order() -> impl Iterator<Item = Category> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, _)| *category)
        .chain(std::iter::once(Category::Other))
}

/// Categorize a variable name by substring keyword match.
///
/// Total function: always returns a label, `Other` when nothing matches.
/// The name is uppercased first so matching is case-insensitive.
pub fn categorize(name: &str) -> Category {
    let upper = name.to_uppercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| upper.contains(keyword)) {
            return *category;
        }
    }

    Category::Other
}
