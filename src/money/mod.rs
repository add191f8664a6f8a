use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SymbolPlacement {
    /// `R$ 1,00` when `spaced`, `$1.00` otherwise.
    Prefix { spaced: bool },
    /// `1,00 €`
    Suffix,
}

/// Currency formatting rules for one locale/currency pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MoneyFormat {
    pub(crate) symbol: String,
    pub(crate) decimal_separator: char,
    pub(crate) grouping_separator: char,
    pub(crate) placement: SymbolPlacement,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::for_locale("pt-BR", "BRL")
    }
}

impl MoneyFormat {
    /// Unknown locales use pt-BR separators; unknown currencies print their code.
    pub(crate) fn for_locale(locale: &str, currency: &str) -> Self {
        let (decimal_separator, grouping_separator, placement) =
            match locale.trim().to_ascii_lowercase().replace('_', "-").as_str() {
                "en-us" | "en-gb" | "en" => ('.', ',', SymbolPlacement::Prefix { spaced: false }),
                "pt-pt" | "de-de" | "es-es" => (',', '.', SymbolPlacement::Suffix),
                "fr-fr" => (',', ' ', SymbolPlacement::Suffix),
                _ => (',', '.', SymbolPlacement::Prefix { spaced: true }),
            };

        let code = currency.trim().to_ascii_uppercase();
        let symbol = match code.as_str() {
            "BRL" => "R$".to_string(),
            "USD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            "JPY" => "¥".to_string(),
            _ => code,
        };

        Self {
            symbol,
            decimal_separator,
            grouping_separator,
            placement,
        }
    }

    /// Format with two decimal places, grouping thousands.
    /// e.g. `1234.5` → `"R$ 1.234,50"`
    pub(crate) fn format(&self, val: Decimal) -> String {
        let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let abs = rounded.abs();
        let formatted = format!("{abs:.2}");
        let mut parts = formatted.split('.');
        let int_part = parts.next().unwrap_or("0");
        let dec_part = parts.next().unwrap_or("00");

        let grouping = self.grouping_separator.to_string();
        let grouped: String = int_part
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(&grouping);

        let number = format!("{grouped}{}{dec_part}", self.decimal_separator);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };

        match self.placement {
            SymbolPlacement::Prefix { spaced: true } => format!("{sign}{} {number}", self.symbol),
            SymbolPlacement::Prefix { spaced: false } => format!("{sign}{}{number}", self.symbol),
            SymbolPlacement::Suffix => format!("{sign}{number} {}", self.symbol),
        }
    }
}

/// Parse user-entered amount text.
///
/// Accepts plain decimals, scientific notation, and a lone comma as the
/// decimal separator (`12,50`). Returns `None` for anything else.
pub(crate) fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(val) = Decimal::from_str(trimmed) {
        return Some(val);
    }
    if trimmed.contains(['e', 'E']) {
        if let Ok(val) = Decimal::from_scientific(trimmed) {
            return Some(val);
        }
    }
    if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        return Decimal::from_str(&trimmed.replace(',', ".")).ok();
    }
    None
}

/// Whether `text` reads as a finite number under the same rules as
/// [`parse_amount`], even when it is too large or too precise for [`Decimal`].
pub(crate) fn is_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Sum that pins to [`Decimal::MAX`] / [`Decimal::MIN`] instead of overflowing.
pub(crate) fn saturating_sum<'a>(values: impl IntoIterator<Item = &'a Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v))
}

#[cfg(test)]
mod tests;
