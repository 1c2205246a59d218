use model::location::Location;

/// Region narrowing for the directory. `All` is the pass-through sentinel;
/// `Only` is an exact, case-sensitive match on the record's state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    All,
    Only(String),
}

impl StateFilter {
    pub fn matches(&self, location: &Location) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Only(state) => location.state == *state,
        }
    }
}

/// Combined narrowing of the location list: state filter and free-text
/// query compose with AND. Both are independent predicates, so the order
/// they are applied in does not change the result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationFilter {
    pub state: StateFilter,
    pub query: String,
}

impl LocationFilter {
    pub fn matches(&self, location: &Location) -> bool {
        let query = self.normalized_query();
        self.state.matches(location) && location.matches_query(&query)
    }

    /// Filtered view in the default ordering: ascending by state, then by
    /// city within the state. Returns a fresh vector, the catalog order is
    /// left untouched.
    pub fn apply<'a, I>(&self, locations: I) -> Vec<Location>
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let query = self.normalized_query();
        let mut filtered = locations
            .into_iter()
            .filter(|location| {
                self.state.matches(location) && location.matches_query(&query)
            })
            .cloned()
            .collect::<Vec<_>>();
        filtered.sort_by(|a, b| a.state.cmp(&b.state).then_with(|| a.city.cmp(&b.city)));
        filtered
    }

    fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocationCatalog;

    fn catalog() -> LocationCatalog {
        LocationCatalog::builtin().unwrap()
    }

    #[test]
    fn no_filter_passes_everything_through() {
        let catalog = catalog();
        let all = LocationFilter::default().apply(catalog.locations());
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn state_filter_is_exact() {
        let catalog = catalog();
        let filter = LocationFilter {
            state: StateFilter::Only("Ohio".to_owned()),
            query: String::new(),
        };
        let ohio = filter.apply(catalog.locations());
        assert_eq!(ohio.len(), 2);
        assert!(ohio.iter().all(|location| location.state == "Ohio"));
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let catalog = catalog();
        let filter = LocationFilter {
            state: StateFilter::All,
            query: "  McKinney ".to_owned(),
        };
        let hits = filter.apply(catalog.locations());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug.raw(), "mckinney");
    }

    #[test]
    fn whitespace_query_is_no_filter() {
        let catalog = catalog();
        let filter = LocationFilter {
            state: StateFilter::All,
            query: "   ".to_owned(),
        };
        assert_eq!(filter.apply(catalog.locations()).len(), catalog.len());
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        // A Texas state filter combined with a query that only matches a
        // Colorado city must come up empty.
        let catalog = catalog();
        let filter = LocationFilter {
            state: StateFilter::Only("Texas".to_owned()),
            query: "arvada".to_owned(),
        };
        assert!(filter.apply(catalog.locations()).is_empty());
    }

    #[test]
    fn default_order_is_state_then_city() {
        let catalog = catalog();
        let all = LocationFilter::default().apply(catalog.locations());
        let keys = all
            .iter()
            .map(|location| (location.state.clone(), location.city.clone()))
            .collect::<Vec<_>>();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(all.first().unwrap().state, "Colorado");
    }

    #[test]
    fn query_matches_address_substring() {
        let catalog = catalog();
        let filter = LocationFilter {
            state: StateFilter::All,
            query: "basswood".to_owned(),
        };
        let hits = filter.apply(catalog.locations());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug.raw(), "saginaw");
    }
}
