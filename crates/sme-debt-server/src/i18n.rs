//! Bilingual message catalog.
//!
//! Messages are keyed by stable identifiers rather than source-language
//! strings, so renaming an English label cannot orphan its translation. The
//! catalog is built once at startup and shared through `AppState`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    De,
}

impl Locale {
    /// Parse a two-letter language code. Unsupported codes are rejected by
    /// returning `None`; callers decide whether that is an error.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

/// (identifier, English, German)
type Message = (&'static str, &'static str, &'static str);

const MESSAGES: &[Message] = &[
    ("app.title", "SME Debt Tool", "SME-Schulden-Tool"),
    (
        "app.subtitle",
        "SME Debt Management Tool",
        "SME-Schuldenmanagement-Tool",
    ),
    (
        "app.tagline",
        "Comprehensive debt management solutions for German SMEs",
        "Umfassende Schuldenmanagement-Lösungen für deutsche KMU",
    ),
    ("nav.debt_brake", "Debt Brake", "Schuldenbremse"),
    ("nav.cost_analysis", "Cost Analysis", "Kostenanalyse"),
    (
        "nav.debt_equity",
        "Debt-Equity Swap",
        "Schulden-Eigenkapital-Tausch",
    ),
    ("nav.debt_snowball", "Debt Snowball", "Schulden-Schneeball"),
    ("nav.funding", "Funding", "Finanzierung"),
    ("nav.covenants", "Covenants", "Covenants"),
    ("nav.language", "Language", "Sprache"),
    ("nav.about", "About", "Über"),
    ("action.calculate", "Calculate", "Berechnen"),
    ("action.analyze", "Analyze", "Analysieren"),
    ("action.simulate", "Simulate", "Simulieren"),
    ("action.prioritize", "Prioritize", "Priorisieren"),
    ("action.explore", "Explore", "Erkunden"),
    ("action.track", "Track", "Verfolgen"),
    (
        "debt_brake.title",
        "Debt Brake Calculator",
        "Schuldenbremse-Rechner",
    ),
    (
        "debt_brake.description",
        "Calculate borrowing limits based on Germany's debt brake mechanism",
        "Berechnen Sie Kreditlimits basierend auf Deutschlands Schuldenbremse-Mechanismus",
    ),
    ("debt_brake.revenue", "Annual Revenue (€)", "Jahresumsatz (€)"),
    (
        "debt_brake.revenue_hint",
        "Your company's total annual revenue",
        "Der Gesamtjahresumsatz Ihres Unternehmens",
    ),
    (
        "debt_brake.current_debt",
        "Current Debt (€)",
        "Aktuelle Schulden (€)",
    ),
    (
        "debt_brake.submit",
        "Calculate Debt Limit",
        "Schuldenlimit berechnen",
    ),
    (
        "debt_brake.limit",
        "Debt Brake Limit",
        "Schuldenbremse-Limit",
    ),
    (
        "debt_brake.limit_hint",
        "0.35% of annual revenue",
        "0,35% des Jahresumsatzes",
    ),
    (
        "debt_brake.capacity",
        "Available Capacity",
        "Verfügbare Kapazität",
    ),
    ("debt_brake.within_limits", "Within Limits", "Innerhalb der Grenzen"),
    ("debt_brake.near_limit", "Near Limit", "Nahe dem Limit"),
    ("debt_brake.over_limit", "Over Limit", "Über dem Limit"),
    (
        "cost_analysis.title",
        "Cost of Debt Analysis",
        "Schuldenkosten-Analyse",
    ),
    (
        "cost_analysis.description",
        "Analyze pre-tax and after-tax cost of debt with detailed breakdowns",
        "Analysieren Sie Vor- und Nachsteuer-Schuldenkosten mit detaillierten Aufschlüsselungen",
    ),
    (
        "cost_analysis.principal",
        "Loan Principal (€)",
        "Darlehenssumme (€)",
    ),
    ("cost_analysis.rate", "Interest Rate (%)", "Zinssatz (%)"),
    (
        "cost_analysis.term",
        "Loan Term (Years)",
        "Darlehenslaufzeit (Jahre)",
    ),
    ("cost_analysis.tax_rate", "Tax Rate (%)", "Steuersatz (%)"),
    (
        "cost_analysis.tax_rate_hint",
        "Corporate tax rate (default: 30%)",
        "Körperschaftsteuersatz (Standard: 30%)",
    ),
    (
        "cost_analysis.submit",
        "Calculate Cost Analysis",
        "Kostenanalyse berechnen",
    ),
    (
        "cost_analysis.monthly_payment",
        "Monthly Payment",
        "Monatliche Zahlung",
    ),
    ("cost_analysis.total_payment", "Total Payment", "Gesamtzahlung"),
    (
        "cost_analysis.total_interest",
        "Total Interest (Pre-tax)",
        "Gesamtzinsen (Vor Steuern)",
    ),
    (
        "cost_analysis.after_tax_interest",
        "After-tax Interest",
        "Nachsteuer-Zinsen",
    ),
    (
        "cost_analysis.effective_rate",
        "Effective Interest Rate",
        "Effektiver Zinssatz",
    ),
    (
        "common.results",
        "Calculation Results",
        "Berechnungsergebnisse",
    ),
    (
        "common.disclaimer",
        "This tool is for educational purposes only. Consult financial professionals for advice.",
        "Dieses Tool dient nur zu Bildungszwecken. Konsultieren Sie Finanzexperten für Beratung.",
    ),
    ("common.privacy", "Privacy Policy", "Datenschutzrichtlinie"),
    ("common.terms", "Terms of Service", "Nutzungsbedingungen"),
    (
        "error.generic",
        "An error occurred. Please try again.",
        "Ein Fehler ist aufgetreten. Bitte versuchen Sie es erneut.",
    ),
    (
        "error.missing_fields",
        "Please fill in all required fields.",
        "Bitte füllen Sie alle erforderlichen Felder aus.",
    ),
    (
        "error.invalid_input",
        "Invalid input. Please check your values.",
        "Ungültige Eingabe. Bitte überprüfen Sie Ihre Werte.",
    ),
];

/// Locale-keyed lookup table for UI strings.
#[derive(Debug)]
pub struct Catalog {
    en: BTreeMap<&'static str, &'static str>,
    de: BTreeMap<&'static str, &'static str>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut en = BTreeMap::new();
        let mut de = BTreeMap::new();
        for (id, english, german) in MESSAGES {
            en.insert(*id, *english);
            de.insert(*id, *german);
        }
        Self { en, de }
    }

    /// Look up a message by identifier. German falls back to English for
    /// identifiers without a translation.
    pub fn lookup(&self, locale: Locale, id: &str) -> Option<&'static str> {
        match locale {
            Locale::En => self.en.get(id).copied(),
            Locale::De => self.de.get(id).or_else(|| self.en.get(id)).copied(),
        }
    }

    /// The full message table for one locale.
    pub fn strings(&self, locale: Locale) -> &BTreeMap<&'static str, &'static str> {
        match locale {
            Locale::En => &self.en,
            Locale::De => &self.de,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
