use crate::model::company::Company;

/// Looks up the display name of company `id`.
///
/// Returns an empty string when the company list has not been loaded or
/// holds no matching entry. Identifiers are normalized at decode time, so
/// plain string equality matches numeric and textual ids alike.
pub fn resolve_company_name(companies: Option<&[Company]>, id: &str) -> String {
    companies
        .and_then(|companies| companies.iter().find(|company| company.id == id))
        .map(|company| company.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies() -> Vec<Company> {
        vec![
            Company { id: "1".to_string(), name: "Paramount Pictures".to_string() },
            Company { id: "2".to_string(), name: "Warner Bros".to_string() },
        ]
    }

    #[test]
    fn resolves_matching_company() {
        let companies = companies();
        assert_eq!(resolve_company_name(Some(&companies), "2"), "Warner Bros");
    }

    #[test]
    fn unmatched_id_resolves_to_empty() {
        let companies = companies();
        assert_eq!(resolve_company_name(Some(&companies), "9"), "");
    }

    #[test]
    fn absent_list_resolves_to_empty() {
        assert_eq!(resolve_company_name(None, "1"), "");
    }
}
