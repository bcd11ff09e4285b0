use crate::core::io::inventory::TargetRow;

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Comma-separated search terms, compared whitespace- and case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSet {
    terms: Vec<String>,
}

impl SearchSet {
    pub fn parse(query: &str) -> Self {
        let terms = query
            .split(',')
            .map(normalize)
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// An empty set matches every present field. A missing field never matches.
    pub fn matches(&self, field: Option<&str>) -> bool {
        let Some(field) = field else {
            return false;
        };
        if self.terms.is_empty() {
            return true;
        }
        let cleaned = normalize(field);
        self.terms.iter().any(|term| *term == cleaned)
    }

    pub fn filter_targets<'a>(&self, rows: &'a [TargetRow]) -> Vec<&'a TargetRow> {
        rows.iter()
            .filter(|row| self.matches(row.target_name.as_deref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: Option<&str>) -> TargetRow {
        TargetRow {
            target_name: name.map(str::to_string),
            partner: String::new(),
            protein_class: String::new(),
            project_name: String::new(),
            subunit_count: 0,
            gene_count: 0,
            plasmid_count: 0,
        }
    }

    #[test]
    fn parse_cleans_and_drops_empty_terms() {
        let set = SearchSet::parse(" TP 53 , ,MDM2,  ");
        assert_eq!(set.terms(), &["tp53".to_string(), "mdm2".to_string()]);
    }

    #[test]
    fn blank_query_is_empty() {
        assert!(SearchSet::parse(" , ").is_empty());
    }

    #[test]
    fn matching_ignores_whitespace_and_case() {
        let set = SearchSet::parse("p53complex");
        assert!(set.matches(Some("P53 Complex")));
        assert!(!set.matches(Some("p53 complex 2")));
    }

    #[test]
    fn matching_is_exact_not_substring() {
        let set = SearchSet::parse("p53");
        assert!(!set.matches(Some("p53 complex")));
    }

    #[test]
    fn missing_field_never_matches() {
        assert!(!SearchSet::default().matches(None));
        assert!(!SearchSet::parse("tp53").matches(None));
    }

    #[test]
    fn empty_set_matches_any_present_field() {
        assert!(SearchSet::default().matches(Some("anything")));
    }

    #[test]
    fn filter_targets_keeps_matching_rows() {
        let rows = vec![row(Some("TP53")), row(None), row(Some("MDM2")), row(Some("BRCA1"))];
        let hits = SearchSet::parse("mdm2, tp53").filter_targets(&rows);
        let names: Vec<_> = hits.iter().filter_map(|r| r.target_name.as_deref()).collect();
        assert_eq!(names, vec!["TP53", "MDM2"]);
    }
}
