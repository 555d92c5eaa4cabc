//! Rotating monthly offer.
//!
//! Odd months give away a functional assessment, even months an extra
//! class. The offer always expires on the last day of the month it was
//! computed for.

use chrono::{Datelike, NaiveDate};
use dreizeer_pricing_models::MonthlyOffer;

/// Which promotion runs in a given month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferKind {
    /// Odd months.
    FreeAssessment,
    /// Even months.
    FreeExtraClass,
}

impl OfferKind {
    /// Promotion for a month number (1-12).
    #[must_use]
    pub const fn for_month(month: u32) -> Self {
        if month % 2 == 1 {
            Self::FreeAssessment
        } else {
            Self::FreeExtraClass
        }
    }

    #[must_use]
    const fn title(self) -> &'static str {
        match self {
            Self::FreeAssessment => "Evaluación Funcional GRATIS",
            Self::FreeExtraClass => "Clase Extra GRATIS",
        }
    }

    #[must_use]
    const fn value(self) -> &'static str {
        match self {
            Self::FreeAssessment | Self::FreeExtraClass => "40€",
        }
    }

    #[must_use]
    const fn description(self) -> &'static str {
        match self {
            Self::FreeAssessment => "Incluida con tu primera sesión",
            Self::FreeExtraClass => "Al contratar tu primer bono mensual",
        }
    }
}

/// Last calendar day of the month containing `date`.
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// Computes the offer running on `today`.
///
/// Pure: the same date always yields the same offer, and nothing is
/// cached across calls.
#[must_use]
pub fn current_monthly_offer(today: NaiveDate) -> MonthlyOffer {
    let kind = OfferKind::for_month(today.month());
    let valid_through = last_day_of_month(today).format("%Y-%m-%d").to_string();

    log::debug!("Monthly offer for {today}: {kind:?} until {valid_through}");

    MonthlyOffer {
        title: kind.title().to_string(),
        value: kind.value().to_string(),
        description: kind.description().to_string(),
        valid_through,
    }
}

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Spanish deadline label for an ISO date, e.g. `"2024-01-31"` →
/// `"31 de enero"`. Returns `None` for anything that is not a date.
#[must_use]
pub fn offer_deadline_label(valid_through: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(valid_through, "%Y-%m-%d").ok()?;
    let month = MONTH_NAMES.get(date.month0() as usize)?;
    Some(format!("{} de {month}", date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_gets_odd_month_offer() {
        let offer = current_monthly_offer(date(2024, 1, 15));
        assert_eq!(offer.valid_through, "2024-01-31");
        assert_eq!(offer.title, "Evaluación Funcional GRATIS");
        assert_eq!(offer.value, "40€");
    }

    #[test]
    fn leap_february_gets_even_month_offer() {
        let offer = current_monthly_offer(date(2024, 2, 15));
        assert_eq!(offer.valid_through, "2024-02-29");
        assert_eq!(offer.title, "Clase Extra GRATIS");
    }

    #[test]
    fn common_february_ends_on_28th() {
        assert_eq!(
            current_monthly_offer(date(2023, 2, 15)).valid_through,
            "2023-02-28"
        );
        assert_eq!(
            current_monthly_offer(date(1900, 2, 1)).valid_through,
            "1900-02-28"
        );
        assert_eq!(
            current_monthly_offer(date(2000, 2, 1)).valid_through,
            "2000-02-29"
        );
    }

    #[test]
    fn month_end_and_start_boundaries() {
        let end = current_monthly_offer(date(2024, 1, 31));
        let start = current_monthly_offer(date(2024, 2, 1));
        assert_eq!(end.valid_through, "2024-01-31");
        assert_eq!(end.title, "Evaluación Funcional GRATIS");
        assert_eq!(start.valid_through, "2024-02-29");
        assert_eq!(start.title, "Clase Extra GRATIS");

        let leap_end = current_monthly_offer(date(2024, 2, 29));
        let march = current_monthly_offer(date(2024, 3, 1));
        assert_eq!(leap_end.valid_through, "2024-02-29");
        assert_eq!(march.valid_through, "2024-03-31");
        assert_eq!(march.title, "Evaluación Funcional GRATIS");
    }

    #[test]
    fn december_rolls_into_next_year() {
        let offer = current_monthly_offer(date(2024, 12, 31));
        assert_eq!(offer.valid_through, "2024-12-31");
        assert_eq!(offer.title, "Clase Extra GRATIS");
        assert_eq!(
            current_monthly_offer(date(2025, 1, 1)).valid_through,
            "2025-01-31"
        );
    }

    #[test]
    fn thirty_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(last_day_of_month(date(2025, month, 10)).day(), 30);
        }
    }

    #[test]
    fn deadline_label_is_spanish() {
        assert_eq!(
            offer_deadline_label("2024-01-31").as_deref(),
            Some("31 de enero")
        );
        assert_eq!(
            offer_deadline_label("2024-02-29").as_deref(),
            Some("29 de febrero")
        );
        assert_eq!(offer_deadline_label("soon"), None);
    }
}
