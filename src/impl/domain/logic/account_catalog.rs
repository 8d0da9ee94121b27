use std::cmp::Ordering;

use crate::entities::Account;

/// Catalog accounts in canonical display order.
pub const CATALOG: [Account; 7] = [
    Account::Hull,
    Account::Machinery,
    Account::Electrical,
    Account::Electronics,
    Account::CrewWelfare,
    Account::Lubricants,
    Account::CapitalInvestments,
];

/// Static lookup over the fixed set of accounting categories.
pub struct AccountCatalog;

impl AccountCatalog {
    /// Resolves a stored account label. Matching ignores case, surrounding
    /// whitespace, and the separator between words ("crew welfare",
    /// "Crew-Welfare", "CREW_WELFARE"), and accepts the Spanish names used by
    /// older records.
    pub fn resolve(label: Option<&str>) -> Account {
        let Some(raw) = label.map(str::trim).filter(|s| !s.is_empty()) else {
            return Account::Unassigned;
        };
        let key: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '.'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "hull" | "casco" => Account::Hull,
            "machinery" | "maquinas" | "máquinas" | "maquinaria" => Account::Machinery,
            "electrical" | "electricidad" => Account::Electrical,
            "electronics" | "electronica" | "electrónica" => Account::Electronics,
            "crewwelfare" | "bienestartripulacion" | "bienestartripulación" => {
                Account::CrewWelfare
            }
            "lubricants" | "lubricantes" => Account::Lubricants,
            "capitalinvestments" | "inversiones" | "inversionesdecapital" => {
                Account::CapitalInvestments
            }
            "unassigned" | "sincuenta" => Account::Unassigned,
            _ => Account::Other(raw.to_string()),
        }
    }

    /// Position in the canonical order. `None` for accounts outside the
    /// catalog.
    pub fn position(account: &Account) -> Option<usize> {
        CATALOG.iter().position(|a| a == account)
    }

    /// Canonical order: catalog accounts, then unassigned, then unknown labels
    /// alphabetically.
    pub fn compare(a: &Account, b: &Account) -> Ordering {
        Self::rank(a).cmp(&Self::rank(b)).then_with(|| match (a, b) {
            (Account::Other(x), Account::Other(y)) => x.cmp(y),
            _ => Ordering::Equal,
        })
    }

    fn rank(account: &Account) -> usize {
        match account {
            Account::Unassigned => CATALOG.len(),
            Account::Other(_) => CATALOG.len() + 1,
            known => Self::position(known).unwrap_or(CATALOG.len() + 1),
        }
    }
}
